use yew::prelude::*;

/// Not-found page to show when routing fails to match a known view.
#[derive(Properties, PartialEq)]
pub struct Props {
    /// Address of the first chart, offered as the way back.
    #[prop_or_default]
    pub home_href: Option<AttrValue>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ "Page not found" }</h1>
            <p>{ "No chart is registered at this address." }</p>
            if let Some(href) = props.home_href.clone() {
                <a class="nav-link" href={href}>{ "Back to charts" }</a>
            }
        </section>
    }
}
