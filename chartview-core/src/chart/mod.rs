//! Chart datasets rendered by the four views.
use serde::{Deserialize, Serialize};

mod geometry;

pub use geometry::{
    BarRect, Extent, Frame, PieSlice, ScatterPoint, bar_rects, line_points, pie_slices, scale,
    scatter_points,
};

#[derive(Debug, thiserror::Error)]
pub enum ChartDataError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("series `{series}` has {actual} values but there are {expected} categories")]
    SeriesLength {
        series: String,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LineChart {
    #[serde(default)]
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BarChart {
    #[serde(default)]
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScatterChart {
    #[serde(default)]
    pub title: String,
    pub series: Vec<ScatterSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Slice {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PieChart {
    #[serde(default)]
    pub title: String,
    pub slices: Vec<Slice>,
}

/// All sample datasets, one per chart view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChartData {
    #[serde(default)]
    pub line: LineChart,
    #[serde(default)]
    pub bar: BarChart,
    #[serde(default)]
    pub scatter: ScatterChart,
    #[serde(default)]
    pub pie: PieChart,
}

impl ChartData {
    /// Parse chart data from JSON and check that category series line up.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or a series length does not
    /// match its chart's category count.
    pub fn from_json(json: &str) -> Result<Self, ChartDataError> {
        let data: Self = serde_json::from_str(json)?;
        check_series(&data.line.categories, &data.line.series)?;
        check_series(&data.bar.categories, &data.bar.series)?;
        Ok(data)
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line.series.is_empty()
            && self.bar.series.is_empty()
            && self.scatter.series.is_empty()
            && self.pie.slices.is_empty()
    }
}

fn check_series(categories: &[String], series: &[Series]) -> Result<(), ChartDataError> {
    match series.iter().find(|s| s.values.len() != categories.len()) {
        Some(bad) => Err(ChartDataError::SeriesLength {
            series: bad.name.clone(),
            expected: categories.len(),
            actual: bad.values.len(),
        }),
        None => Ok(()),
    }
}
