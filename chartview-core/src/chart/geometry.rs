//! SVG geometry for the chart views. All coordinates are in viewBox units.
use super::{Series, Slice};
use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Write as _;

/// Drawing area with a uniform inner padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Frame {
    #[must_use]
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    #[must_use]
    pub const fn left(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.width - self.padding
    }

    #[must_use]
    pub const fn top(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.height - self.padding
    }

    #[must_use]
    pub fn inner_width(&self) -> f64 {
        (self.right() - self.left()).max(0.0)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(600.0, 360.0, 40.0)
    }
}

/// Closed value range of a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Range covering `values`; empty input yields `0..1` and a flat range is
    /// widened by one so scaling never divides by zero.
    #[must_use]
    pub fn of<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if min > max {
            return Self { min: 0.0, max: 1.0 };
        }
        if (max - min).abs() < f64::EPSILON {
            return Self { min, max: min + 1.0 };
        }
        Self { min, max }
    }

    /// Stretch the range so it includes zero, for charts drawn from a baseline.
    #[must_use]
    pub fn including_zero(self) -> Self {
        Self {
            min: self.min.min(0.0),
            max: self.max.max(0.0),
        }
    }

    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Linear map of `value` from `extent` onto `lo..hi`.
#[must_use]
pub fn scale(value: f64, extent: Extent, lo: f64, hi: f64) -> f64 {
    let span = extent.span();
    if span.abs() < f64::EPSILON {
        return lo;
    }
    lo + (value - extent.min) / span * (hi - lo)
}

fn category_x(index: usize, count: usize, frame: &Frame) -> f64 {
    if count <= 1 {
        return frame.left() + frame.inner_width() / 2.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let step = frame.inner_width() / (count - 1) as f64;
    #[allow(clippy::cast_precision_loss)]
    let offset = step * index as f64;
    frame.left() + offset
}

/// `points` attribute for an SVG polyline over evenly spaced categories.
#[must_use]
pub fn line_points(values: &[f64], extent: Extent, frame: &Frame) -> String {
    let mut out = String::new();
    for (index, value) in values.iter().enumerate() {
        let x = category_x(index, values.len(), frame);
        let y = scale(*value, extent, frame.bottom(), frame.top());
        if !out.is_empty() {
            out.push(' ');
        }
        let _ = write!(out, "{x:.2},{y:.2}");
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub series: usize,
    pub category: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Grouped bars: one group per category, one bar per series, measured from zero.
#[must_use]
pub fn bar_rects(series: &[Series], categories: usize, frame: &Frame) -> Vec<BarRect> {
    if categories == 0 || series.is_empty() {
        return Vec::new();
    }
    let extent =
        Extent::of(series.iter().flat_map(|s| s.values.iter().copied())).including_zero();
    let baseline = scale(0.0, extent, frame.bottom(), frame.top());
    #[allow(clippy::cast_precision_loss)]
    let group = frame.inner_width() / categories as f64;
    #[allow(clippy::cast_precision_loss)]
    let bar = group * 0.8 / series.len() as f64;

    let mut rects = Vec::with_capacity(categories * series.len());
    for (s_idx, s) in series.iter().enumerate() {
        for (c_idx, value) in s.values.iter().take(categories).enumerate() {
            let top = scale(*value, extent, frame.bottom(), frame.top());
            #[allow(clippy::cast_precision_loss)]
            let x = frame.left() + group * (c_idx as f64 + 0.1) + bar * s_idx as f64;
            rects.push(BarRect {
                series: s_idx,
                category: c_idx,
                x,
                y: top.min(baseline),
                width: bar,
                height: (baseline - top).abs(),
            });
        }
    }
    rects
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub cx: f64,
    pub cy: f64,
}

/// Circle centers for scatter points against shared x/y extents.
#[must_use]
pub fn scatter_points(
    points: &[(f64, f64)],
    x_extent: Extent,
    y_extent: Extent,
    frame: &Frame,
) -> Vec<ScatterPoint> {
    points
        .iter()
        .map(|(x, y)| ScatterPoint {
            cx: scale(*x, x_extent, frame.left(), frame.right()),
            cy: scale(*y, y_extent, frame.bottom(), frame.top()),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    pub fraction: f64,
    /// SVG path data for the wedge.
    pub path: String,
}

/// Wedges for a pie centered at `(cx, cy)`, starting at twelve o'clock.
///
/// Non-positive and non-finite values are skipped. A zero total yields no slices.
#[must_use]
pub fn pie_slices(slices: &[Slice], cx: f64, cy: f64, r: f64) -> Vec<PieSlice> {
    let total: f64 = slices
        .iter()
        .map(|s| s.value)
        .filter(|v| drawable(*v))
        .sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = -FRAC_PI_2;
    let mut out = Vec::new();
    for slice in slices.iter().filter(|s| drawable(s.value)) {
        let fraction = slice.value / total;
        let sweep = fraction * TAU;
        let path = if fraction >= 1.0 - f64::EPSILON {
            format!(
                "M {cx:.2},{top:.2} A {r:.2},{r:.2} 0 1,1 {cx:.2},{bottom:.2} A {r:.2},{r:.2} 0 1,1 {cx:.2},{top:.2} Z",
                top = cy - r,
                bottom = cy + r,
            )
        } else {
            let (x0, y0) = (r.mul_add(angle.cos(), cx), r.mul_add(angle.sin(), cy));
            let end = angle + sweep;
            let (x1, y1) = (r.mul_add(end.cos(), cx), r.mul_add(end.sin(), cy));
            let large = u8::from(sweep > std::f64::consts::PI);
            format!(
                "M {cx:.2},{cy:.2} L {x0:.2},{y0:.2} A {r:.2},{r:.2} 0 {large},1 {x1:.2},{y1:.2} Z"
            )
        };
        angle += sweep;
        out.push(PieSlice {
            name: slice.name.clone(),
            value: slice.value,
            fraction,
            path,
        });
    }
    out
}

fn drawable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn extent_handles_empty_and_flat_inputs() {
        assert_eq!(Extent::of(Vec::<f64>::new()), Extent { min: 0.0, max: 1.0 });
        assert_eq!(Extent::of([5.0, 5.0]), Extent { min: 5.0, max: 6.0 });
        assert_eq!(Extent::of([3.0, -2.0, 7.0]), Extent { min: -2.0, max: 7.0 });
        assert_eq!(
            Extent::of([3.0, 7.0]).including_zero(),
            Extent { min: 0.0, max: 7.0 }
        );
    }

    #[test]
    fn scale_maps_endpoints() {
        let extent = Extent { min: 10.0, max: 20.0 };
        assert!(close(scale(10.0, extent, 100.0, 0.0), 100.0));
        assert!(close(scale(20.0, extent, 100.0, 0.0), 0.0));
        assert!(close(scale(15.0, extent, 0.0, 50.0), 25.0));
    }

    #[test]
    fn line_points_span_the_frame() {
        let frame = Frame::new(100.0, 100.0, 10.0);
        let points = line_points(&[0.0, 5.0, 10.0], Extent { min: 0.0, max: 10.0 }, &frame);
        assert_eq!(points, "10.00,90.00 50.00,50.00 90.00,10.00");
        let single = line_points(&[3.0], Extent::of([3.0]), &frame);
        assert_eq!(single, "50.00,90.00");
    }

    #[test]
    fn bars_grow_from_zero_baseline() {
        let frame = Frame::new(100.0, 100.0, 0.0);
        let series = vec![Series {
            name: "s".into(),
            values: vec![10.0, -10.0],
        }];
        let rects = bar_rects(&series, 2, &frame);
        assert_eq!(rects.len(), 2);
        assert!(close(rects[0].y, 0.0));
        assert!(close(rects[0].height, 50.0));
        assert!(close(rects[1].y, 50.0));
        assert!(close(rects[1].height, 50.0));
        assert!(close(rects[0].width, 40.0));
        assert!(close(rects[1].x, 55.0));
    }

    #[test]
    fn bars_empty_without_categories() {
        assert!(bar_rects(&[Series::default()], 0, &Frame::default()).is_empty());
        assert!(bar_rects(&[], 3, &Frame::default()).is_empty());
    }

    #[test]
    fn scatter_points_use_both_extents() {
        let frame = Frame::new(100.0, 100.0, 0.0);
        let pts = scatter_points(
            &[(0.0, 0.0), (10.0, 10.0)],
            Extent { min: 0.0, max: 10.0 },
            Extent { min: 0.0, max: 10.0 },
            &frame,
        );
        assert_eq!(pts[0], ScatterPoint { cx: 0.0, cy: 100.0 });
        assert_eq!(pts[1], ScatterPoint { cx: 100.0, cy: 0.0 });
    }

    #[test]
    fn pie_fractions_cover_a_full_turn() {
        let slices = vec![
            Slice {
                name: "a".into(),
                value: 1.0,
            },
            Slice {
                name: "skip".into(),
                value: 0.0,
            },
            Slice {
                name: "b".into(),
                value: 3.0,
            },
        ];
        let wedges = pie_slices(&slices, 50.0, 50.0, 40.0);
        assert_eq!(wedges.len(), 2);
        let total: f64 = wedges.iter().map(|w| w.fraction).sum();
        assert!(close(total, 1.0));
        assert!(wedges[0].path.starts_with("M 50.00,50.00 L 50.00,10.00"));
        assert!(wedges[1].path.contains(" 0 1,1 "));
    }

    #[test]
    fn pie_single_slice_is_full_circle_and_zero_total_is_empty() {
        let one = pie_slices(
            &[Slice {
                name: "all".into(),
                value: 2.0,
            }],
            50.0,
            50.0,
            10.0,
        );
        assert_eq!(
            one[0].path,
            "M 50.00,40.00 A 10.00,10.00 0 1,1 50.00,60.00 A 10.00,10.00 0 1,1 50.00,40.00 Z"
        );
        assert!(pie_slices(&[Slice::default()], 0.0, 0.0, 1.0).is_empty());
    }

    #[test]
    fn pie_skips_non_finite_values() {
        let slices = [f64::INFINITY, f64::NAN, 1.0, 1.0].map(|value| Slice {
            name: format!("{value}"),
            value,
        });
        let wedges = pie_slices(&slices, 50.0, 50.0, 40.0);
        assert_eq!(wedges.len(), 2);
        assert!(wedges.iter().all(|w| close(w.fraction, 0.5)));
        assert!(wedges.iter().all(|w| !w.path.contains("NaN")));

        let only_infinite = [Slice {
            name: "inf".into(),
            value: f64::INFINITY,
        }];
        assert!(pie_slices(&only_infinite, 0.0, 0.0, 1.0).is_empty());
    }
}
