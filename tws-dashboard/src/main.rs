//! District Terrestrial Water Storage Dashboard
//!
//! Shows a Leaflet map of district boundaries next to a D3.js line chart of
//! yearly TWS for whichever district was clicked last.
//!
//! Data flow:
//! 1. `build.rs` bakes `TWS_BACKEND_BASE` into the binary.
//! 2. On mount: `/api/tws` and `/api/boundaries` are fetched together; the
//!    outcome lands in `AppState::load_state` (loading, failed or ready).
//! 3. On map click: `AppState::selected_district` is replaced with the raw
//!    district name and the chart pane is derived again from it.

use dioxus::prelude::*;
use tws_chart_ui::components::{
    DistrictMap, ErrorDisplay, ExternalScripts, LoadingSpinner, SelectionHeader, TwsChart,
};
use tws_chart_ui::fetch::GlooFetch;
use tws_chart_ui::state::AppState;
use tws_core::chart::ChartView;
use tws_core::config::DashboardConfig;
use tws_core::{loader, LoadState};

const BACKEND_BASE: &str = env!("TWS_BACKEND_BASE");

/// DOM ids for the Leaflet map and the D3 chart.
const MAP_CONTAINER_ID: &str = "tws-district-map";
const CHART_CONTAINER_ID: &str = "tws-district-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("tws-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let config = use_hook(|| DashboardConfig::new(BACKEND_BASE));

    // ─── Load both resources once on mount ───
    // The task belongs to this component and is cancelled if it unmounts.
    let load_config = config.clone();
    use_effect(move || {
        let load_config = load_config.clone();
        spawn(async move {
            let fetcher = GlooFetch::new(load_config.request_timeout_ms);
            let outcome = loader::load_state(&fetcher, &load_config.endpoints).await;
            state.load_state.set(outcome);
        });
    });

    let load_state = state.load_state.read().clone();

    rsx! {
        ExternalScripts {}
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "margin: 8px 0 16px 0; font-size: 22px; color: #2c3e50;",
                "District Terrestrial Water Storage"
            }

            match load_state {
                LoadState::Loading => rsx! { LoadingSpinner {} },
                LoadState::Failed(message) => rsx! { ErrorDisplay { message: message } },
                LoadState::Ready(data) => {
                    let selected = (state.selected_district)();
                    let view = ChartView::new(data.series_for(selected.as_deref()), selected.as_deref());

                    rsx! {
                        p {
                            style: "margin: 0 0 12px 0; font-size: 12px; color: #888;",
                            "{data.tws.len()} districts with TWS data, {data.boundaries.len()} boundaries"
                        }
                        div {
                            style: "display: flex; flex-wrap: wrap; gap: 16px;",
                            div {
                                style: "flex: 1 1 480px; min-width: 320px;",
                                DistrictMap {
                                    id: MAP_CONTAINER_ID.to_string(),
                                    boundaries: Some(data.boundaries.clone()),
                                    config: config.map.clone(),
                                    on_select: move |name: String| state.select_district(name),
                                }
                            }
                            div {
                                style: "flex: 1 1 480px; min-width: 320px;",
                                SelectionHeader {
                                    district: selected.clone(),
                                    unit_description: "Terrestrial water storage, billion cubic meters (BCM)".to_string(),
                                }
                                TwsChart {
                                    id: CHART_CONTAINER_ID.to_string(),
                                    view: view,
                                    district: selected.clone().unwrap_or_default(),
                                    config: config.chart.clone(),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
