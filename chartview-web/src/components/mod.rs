pub mod chart_frame;
pub mod footer;
pub mod nav_bar;

/// Series colors, cycled by series index.
pub const PALETTE: [&str; 6] = [
    "#5470c6", "#91cc75", "#fac858", "#ee6666", "#73c0de", "#3ba272",
];

#[must_use]
pub fn series_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
