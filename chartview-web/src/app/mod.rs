#[cfg(target_arch = "wasm32")]
use chartview_core::AddressingMode;
use chartview_core::Navigation;
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod shell;

pub use shell::{AppShell, render_resolution, resolve_router_path};

/// The installed navigation handler as shared through the component tree.
pub type NavigationContext = Rc<Navigation>;

/// Build the navigation handler from this build's configuration.
///
/// # Errors
/// Returns the configuration error when the router settings are invalid.
pub fn install_navigation() -> Result<NavigationContext, chartview_core::RouterError> {
    let config = crate::config::router_config()?;
    let navigation = Navigation::new(config)?;
    log::info!(
        "Navigation installed: mode={} base={} fallback={} routes={}",
        navigation.mode(),
        navigation.base().unwrap_or("/"),
        navigation.fallback(),
        navigation.routes().len()
    );
    Ok(Rc::new(navigation))
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let navigation = use_state(install_navigation);
    let data = use_state(|| Rc::new(crate::data::load_from_static()));

    let nav = match &*navigation {
        Ok(nav) => nav.clone(),
        Err(err) => {
            log::error!("Invalid router configuration: {err}");
            crate::dom::console_error(&err.to_string());
            return html! {
                <section class="panel error" role="alert">
                    <h1>{ "Router configuration error" }</h1>
                    <p>{ err.to_string() }</p>
                </section>
            };
        }
    };

    let basename = nav.base().map(|b| AttrValue::from(b.to_string()));
    let shell = html! {
        <ContextProvider<NavigationContext> context={nav.clone()}>
            <AppShell data={(*data).clone()} />
        </ContextProvider<NavigationContext>>
    };

    match nav.mode() {
        AddressingMode::History => html! {
            <BrowserRouter {basename}>{ shell }</BrowserRouter>
        },
        AddressingMode::Hash => html! {
            <HashRouter {basename}>{ shell }</HashRouter>
        },
    }
}
