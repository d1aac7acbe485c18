use crate::app::NavigationContext;
use crate::router::Route;
use chartview_core::ViewId;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub active: Option<ViewId>,
}

/// One link per route table entry, in table order.
///
/// Links carry real addresses so they work without a router; when a router is
/// mounted, clicks are handled client-side instead of reloading the page.
#[function_component(NavBar)]
pub fn nav_bar(props: &Props) -> Html {
    let navigation = use_context::<NavigationContext>();
    let navigator = use_navigator();
    let Some(navigation) = navigation else {
        return Html::default();
    };

    let links = navigation.routes().iter().map(|entry| {
        let view = entry.view;
        let href = navigation.href(view).unwrap_or_else(|| entry.path.clone());
        let onclick = navigator.clone().map(|nav| {
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                nav.push(&Route::from_view(view));
            })
        });
        let current = props.active == Some(view);
        html! {
            <li>
                <a
                    href={href}
                    class={classes!("nav-link", current.then_some("active"))}
                    aria-current={current.then_some("page")}
                    {onclick}
                >
                    { view.title() }
                </a>
            </li>
        }
    });

    html! {
        <nav class="chart-nav" aria-label="Charts">
            <ul>{ for links }</ul>
        </nav>
    }
}
