use super::series_color;
use chartview_core::Frame;
use yew::prelude::*;

/// Titled SVG canvas with a legend, shared by every chart page.
#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub legend: Vec<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ChartFrame)]
pub fn chart_frame(props: &Props) -> Html {
    let frame = Frame::default();
    let heading_id = format!("{}-title", props.id);
    let view_box = format!("0 0 {} {}", frame.width, frame.height);

    let legend = props.legend.iter().enumerate().map(|(index, name)| {
        html! {
            <li class="legend-item">
                <span class="legend-swatch" style={format!("background:{}", series_color(index))}></span>
                { name.clone() }
            </li>
        }
    });

    html! {
        <section id={props.id.clone()} class="panel chart" aria-labelledby={heading_id.clone()}>
            <h1 id={heading_id}>{ props.title.clone() }</h1>
            <svg class="chart-canvas" viewBox={view_box} role="img" aria-label={props.title.clone()}>
                { for props.children.iter() }
            </svg>
            if !props.legend.is_empty() {
                <ul class="legend">{ for legend }</ul>
            }
        </section>
    }
}
