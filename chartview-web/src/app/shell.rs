use crate::app::NavigationContext;
use crate::components::footer::Footer;
use crate::components::nav_bar::NavBar;
use crate::pages::{
    bar::BarPage, line::LinePage, not_found::NotFound, pie::PiePage, scatter::ScatterPage,
};
use crate::router::Route;
use chartview_core::{AddressingMode, ChartData, Navigation, Resolution, ViewId};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

/// Resolve the path reported by the mounted router.
///
/// History routers report the pathname, possibly still carrying the
/// deployment base; hash routers report the virtual path from the fragment.
#[must_use]
pub fn resolve_router_path(navigation: &Navigation, path: &str) -> Resolution {
    match navigation.mode() {
        AddressingMode::History => navigation.resolve_location(path, ""),
        AddressingMode::Hash => navigation.resolve_location("", path),
    }
}

/// Mount the page for a resolution. Blank and pending redirects mount nothing.
#[must_use]
pub fn render_resolution(
    resolution: Resolution,
    data: &ChartData,
    home_href: Option<AttrValue>,
) -> Html {
    match resolution {
        Resolution::View(ViewId::Line) => html! { <LinePage chart={data.line.clone()} /> },
        Resolution::View(ViewId::Bar) => html! { <BarPage chart={data.bar.clone()} /> },
        Resolution::View(ViewId::Scatter) => {
            html! { <ScatterPage chart={data.scatter.clone()} /> }
        }
        Resolution::View(ViewId::Pie) => html! { <PiePage chart={data.pie.clone()} /> },
        Resolution::NotFound => html! { <NotFound {home_href} /> },
        Resolution::Blank | Resolution::Redirect(_) => Html::default(),
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct AppShellProps {
    pub data: Rc<ChartData>,
}

/// Navigation bar, the mounted view for the current address, and footer.
#[function_component(AppShell)]
pub fn app_shell(props: &AppShellProps) -> Html {
    let navigation = use_context::<NavigationContext>();
    let location = use_location();
    let navigator = use_navigator();

    let path = location
        .as_ref()
        .map_or_else(|| String::from("/"), |loc| loc.path().to_string());
    let resolution = navigation
        .as_ref()
        .map_or(Resolution::Blank, |nav| resolve_router_path(nav, &path));

    {
        let path = path.clone();
        use_effect_with(resolution, move |resolution| {
            match resolution {
                Resolution::View(view) => {
                    log::debug!("Mounted {view} view for {path}");
                    #[cfg(target_arch = "wasm32")]
                    crate::dom::set_title(&format!("{} chart · Chartview", view.title()));
                }
                Resolution::Redirect(view) => {
                    log::info!("No route for {path}; redirecting to {view}");
                    if let Some(nav) = navigator {
                        nav.replace(&Route::from_view(*view));
                    }
                }
                Resolution::NotFound | Resolution::Blank => {
                    log::warn!("No route matches {path}");
                }
            }
            || {}
        });
    }

    let Some(navigation) = navigation else {
        return Html::default();
    };
    let home_href = navigation
        .routes()
        .entries()
        .first()
        .and_then(|entry| navigation.href(entry.view))
        .map(AttrValue::from);

    html! {
        <>
            <header role="banner" class="app-header">
                <NavBar active={resolution.view()} />
            </header>
            <main id="main" role="main">
                { render_resolution(resolution, &props.data, home_href) }
            </main>
            <Footer mode={AttrValue::from(navigation.mode().as_str())} />
        </>
    }
}
