use chartview_core::ViewId;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/line")]
    Line,
    #[at("/bar")]
    Bar,
    #[at("/scatter")]
    Scatter,
    #[at("/pie")]
    Pie,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_view(view: ViewId) -> Self {
        match view {
            ViewId::Line => Self::Line,
            ViewId::Bar => Self::Bar,
            ViewId::Scatter => Self::Scatter,
            ViewId::Pie => Self::Pie,
        }
    }

    #[must_use]
    pub const fn to_view(&self) -> Option<ViewId> {
        match self {
            Self::Line => Some(ViewId::Line),
            Self::Bar => Some(ViewId::Bar),
            Self::Scatter => Some(ViewId::Scatter),
            Self::Pie => Some(ViewId::Pie),
            Self::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartview_core::chart_routes;

    #[test]
    fn routable_paths_agree_with_route_table() {
        for entry in &chart_routes() {
            let route = Route::from_view(entry.view);
            assert_eq!(route.to_path(), entry.path);
            assert_eq!(route.to_view(), Some(entry.view));
        }
    }

    #[test]
    fn recognize_maps_unknown_paths_to_not_found() {
        assert_eq!(Route::recognize("/pie"), Some(Route::Pie));
        assert_eq!(Route::recognize("/unknown"), Some(Route::NotFound));
        assert_eq!(Route::NotFound.to_view(), None);
    }
}
