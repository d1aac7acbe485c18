//! Embedded chart datasets.
use chartview_core::ChartData;

const CHARTS_JSON: &str = include_str!("../static/assets/data/charts.json");

/// Load the bundled chart data, falling back to an empty dataset when the
/// asset does not parse.
#[must_use]
pub fn load_from_static() -> ChartData {
    ChartData::from_json(CHARTS_JSON).unwrap_or_else(|err| {
        log::error!("Failed to load chart data: {err}");
        ChartData::empty()
    })
}
