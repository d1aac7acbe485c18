use crate::components::chart_frame::ChartFrame;
use crate::components::series_color;
use chartview_core::PieChart;
use chartview_core::chart::{Frame, pie_slices};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct PiePageProps {
    pub chart: PieChart,
}

#[function_component(PiePage)]
pub fn pie_page(props: &PiePageProps) -> Html {
    let chart = &props.chart;
    let frame = Frame::default();
    let title = if chart.title.is_empty() { "Pie" } else { chart.title.as_str() };
    let radius = (frame.height / 2.0) - frame.padding;
    let wedges = pie_slices(&chart.slices, frame.width / 2.0, frame.height / 2.0, radius);

    let legend: Vec<AttrValue> = wedges
        .iter()
        .map(|w| AttrValue::from(format!("{} ({:.1}%)", w.name, w.fraction * 100.0)))
        .collect();

    let paths = wedges.iter().enumerate().map(|(index, wedge)| {
        html! {
            <path class="pie-slice" d={wedge.path.clone()} fill={series_color(index)} stroke="#fff">
                <title>{ format!("{}: {}", wedge.name, wedge.value) }</title>
            </path>
        }
    });

    html! {
        <ChartFrame id="pie-chart" title={AttrValue::from(title.to_string())} {legend}>
            { for paths }
        </ChartFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartview_core::Slice;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_slices_with_percentages() {
        let props = PiePageProps {
            chart: PieChart {
                title: "Share".into(),
                slices: vec![
                    Slice {
                        name: "Direct".into(),
                        value: 1.0,
                    },
                    Slice {
                        name: "Search".into(),
                        value: 3.0,
                    },
                ],
            },
        };
        let html = block_on(LocalServerRenderer::<PiePage>::with_props(props).render());
        assert_eq!(html.matches("<path").count(), 2);
        assert!(html.contains("Direct (25.0%)"));
        assert!(html.contains("Search (75.0%)"));
    }
}
