use crate::components::chart_frame::ChartFrame;
use crate::components::series_color;
use chartview_core::ScatterChart;
use chartview_core::chart::{Extent, Frame, scatter_points};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ScatterPageProps {
    pub chart: ScatterChart,
}

#[function_component(ScatterPage)]
pub fn scatter_page(props: &ScatterPageProps) -> Html {
    let chart = &props.chart;
    let frame = Frame::default();
    let title = if chart.title.is_empty() { "Scatter" } else { chart.title.as_str() };

    let all_points = || chart.series.iter().flat_map(|s| s.points.iter());
    let x_extent = Extent::of(all_points().map(|(x, _)| *x));
    let y_extent = Extent::of(all_points().map(|(_, y)| *y));

    let dots = chart.series.iter().enumerate().flat_map(|(index, series)| {
        let color = series_color(index);
        scatter_points(&series.points, x_extent, y_extent, &frame)
            .into_iter()
            .map(move |p| {
                html! {
                    <circle class="series-dot" cx={format!("{:.2}", p.cx)} cy={format!("{:.2}", p.cy)} r="4" fill={color} fill-opacity="0.8" />
                }
            })
    });

    html! {
        <ChartFrame
            id="scatter-chart"
            title={AttrValue::from(title.to_string())}
            legend={chart.series.iter().map(|s| AttrValue::from(s.name.clone())).collect::<Vec<_>>()}
        >
            <line class="axis" x1={frame.left().to_string()} y1={frame.bottom().to_string()} x2={frame.right().to_string()} y2={frame.bottom().to_string()} stroke="#999" />
            <line class="axis" x1={frame.left().to_string()} y1={frame.top().to_string()} x2={frame.left().to_string()} y2={frame.bottom().to_string()} stroke="#999" />
            { for dots }
        </ChartFrame>
    }
}
