//! Opaque identifiers for the views a route can mount.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle for a mountable chart view.
///
/// The route table only carries this identifier; the host application decides
/// what each handle renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    Line,
    Bar,
    Scatter,
    Pie,
}

impl ViewId {
    pub const ALL: [Self; 4] = [Self::Line, Self::Bar, Self::Scatter, Self::Pie];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Scatter => "scatter",
            Self::Pie => "pie",
        }
    }

    /// Human-readable title used in navigation and page headings.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Bar => "Bar",
            Self::Scatter => "Scatter",
            Self::Pie => "Pie",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
