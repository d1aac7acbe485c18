use crate::components::chart_frame::ChartFrame;
use crate::components::series_color;
use chartview_core::chart::{Extent, Frame, line_points, scale};
use chartview_core::LineChart;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LinePageProps {
    pub chart: LineChart,
}

#[function_component(LinePage)]
pub fn line_page(props: &LinePageProps) -> Html {
    let chart = &props.chart;
    let frame = Frame::default();
    let extent = Extent::of(chart.series.iter().flat_map(|s| s.values.iter().copied()));
    let title = if chart.title.is_empty() { "Line" } else { chart.title.as_str() };

    let lines = chart.series.iter().enumerate().map(|(index, series)| {
        html! {
            <polyline
                class="series-line"
                fill="none"
                stroke={series_color(index)}
                stroke-width="2"
                points={line_points(&series.values, extent, &frame)}
            />
        }
    });

    let labels = category_labels(&chart.categories, &frame);
    let max_label_y = scale(extent.max, extent, frame.bottom(), frame.top());

    html! {
        <ChartFrame
            id="line-chart"
            title={AttrValue::from(title.to_string())}
            legend={chart.series.iter().map(|s| AttrValue::from(s.name.clone())).collect::<Vec<_>>()}
        >
            <line class="axis" x1={frame.left().to_string()} y1={frame.bottom().to_string()} x2={frame.right().to_string()} y2={frame.bottom().to_string()} stroke="#999" />
            <text class="axis-label" x={frame.left().to_string()} y={(max_label_y - 8.0).to_string()}>{ format!("{:.0}", extent.max) }</text>
            { for lines }
            { labels }
        </ChartFrame>
    }
}

fn category_labels(categories: &[String], frame: &Frame) -> Html {
    if categories.is_empty() {
        return Html::default();
    }
    let count = categories.len();
    let labels = categories.iter().enumerate().map(|(index, name)| {
        #[allow(clippy::cast_precision_loss)]
        let x = if count == 1 {
            frame.left() + frame.inner_width() / 2.0
        } else {
            frame.left() + frame.inner_width() * index as f64 / (count - 1) as f64
        };
        html! {
            <text class="category-label" x={format!("{x:.2}")} y={format!("{:.2}", frame.bottom() + 20.0)} text-anchor="middle">
                { name.clone() }
            </text>
        }
    });
    html! { <>{ for labels }</> }
}
