//! Yearly TWS line chart for the selected district, or a placeholder line.

use crate::components::ChartContainer;
use crate::js_bridge;
use dioxus::prelude::*;
use tws_core::chart::ChartView;
use tws_core::config::ChartConfig;

#[derive(Props, Clone, PartialEq)]
pub struct TwsChartProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    pub view: ChartView,
    /// Raw selected district name, used in the legend
    #[props(default = String::new())]
    pub district: String,
    #[props(default)]
    pub config: ChartConfig,
    #[props(default = 400)]
    pub height: u32,
}

#[component]
pub fn TwsChart(props: TwsChartProps) -> Element {
    let id = props.id.clone();
    let view = props.view.clone();
    let district = props.district.clone();
    let config = props.config.clone();
    use_effect(use_reactive!(|(id, view, district, config)| {
        match &view {
            ChartView::Series(points) => {
                let mut config_value = match serde_json::to_value(&config) {
                    Ok(value) => value,
                    Err(e) => {
                        log::error!("Failed to serialize chart config for the renderer: {}", e);
                        return;
                    }
                };
                config_value["title"] = serde_json::Value::String(district.clone());
                let Some(data_json) = js_bridge::to_json("chart points", points) else {
                    return;
                };

                js_bridge::init_renderers();
                js_bridge::render_line_chart(&id, &data_json, &config_value.to_string());
            }
            ChartView::Placeholder(_) => js_bridge::destroy_chart(&id),
        }
    }));

    rsx! {
        match &props.view {
            ChartView::Placeholder(message) => rsx! {
                p {
                    style: "padding: 40px 0; text-align: center; color: #666;",
                    "{message}"
                }
            },
            ChartView::Series(_) => rsx! {
                ChartContainer {
                    id: props.id.clone(),
                    height: props.height,
                }
            },
        }
    }
}
