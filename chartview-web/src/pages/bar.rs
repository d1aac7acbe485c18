use crate::components::chart_frame::ChartFrame;
use crate::components::series_color;
use chartview_core::BarChart;
use chartview_core::chart::{Frame, bar_rects};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct BarPageProps {
    pub chart: BarChart,
}

#[function_component(BarPage)]
pub fn bar_page(props: &BarPageProps) -> Html {
    let chart = &props.chart;
    let frame = Frame::default();
    let title = if chart.title.is_empty() { "Bar" } else { chart.title.as_str() };

    let bars = bar_rects(&chart.series, chart.categories.len(), &frame)
        .into_iter()
        .map(|rect| {
            let label = format!(
                "{} {}: {}",
                chart.series[rect.series].name,
                chart.categories[rect.category],
                chart.series[rect.series].values[rect.category]
            );
            html! {
                <rect
                    class="series-bar"
                    x={format!("{:.2}", rect.x)}
                    y={format!("{:.2}", rect.y)}
                    width={format!("{:.2}", rect.width)}
                    height={format!("{:.2}", rect.height)}
                    fill={series_color(rect.series)}
                >
                    <title>{ label }</title>
                </rect>
            }
        });

    #[allow(clippy::cast_precision_loss)]
    let group = frame.inner_width() / chart.categories.len().max(1) as f64;
    let labels = chart.categories.iter().enumerate().map(|(index, name)| {
        #[allow(clippy::cast_precision_loss)]
        let x = frame.left() + group * (index as f64 + 0.5);
        html! {
            <text class="category-label" x={format!("{x:.2}")} y={format!("{:.2}", frame.bottom() + 20.0)} text-anchor="middle">
                { name.clone() }
            </text>
        }
    });

    html! {
        <ChartFrame
            id="bar-chart"
            title={AttrValue::from(title.to_string())}
            legend={chart.series.iter().map(|s| AttrValue::from(s.name.clone())).collect::<Vec<_>>()}
        >
            { for bars }
            { for labels }
        </ChartFrame>
    }
}
