//! Dioxus RSX components for the TWS dashboard.

mod chart_container;
mod district_map;
mod error_display;
mod external_scripts;
mod loading_spinner;
mod selection_header;
mod tws_chart;

pub use chart_container::ChartContainer;
pub use district_map::DistrictMap;
pub use error_display::ErrorDisplay;
pub use external_scripts::ExternalScripts;
pub use loading_spinner::LoadingSpinner;
pub use selection_header::SelectionHeader;
pub use tws_chart::TwsChart;
