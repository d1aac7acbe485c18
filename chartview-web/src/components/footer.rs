use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub mode: AttrValue,
}

#[function_component(Footer)]
pub fn footer(props: &Props) -> Html {
    html! {
        <footer class="app-footer">
            { format!("Chartview · {} routing", props.mode) }
        </footer>
    }
}
