//! Dashboard configuration.
//!
//! The only externally supplied value is the backend base address, baked in
//! at build time. Everything else is a fixed default. `MapConfig` and
//! `ChartConfig` serialize to the camelCase JSON the JS renderers read.

use serde::Serialize;

/// Backend used when `TWS_BACKEND_BASE` is not set at build time.
pub const DEFAULT_BACKEND_BASE: &str = "http://localhost:5000";

/// Per-request timeout for the two startup fetches.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 30_000;

/// URLs of the two resources the dashboard loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub tws: String,
    pub boundaries: String,
}

impl Endpoints {
    pub fn from_base(base: &str) -> Self {
        let base = base.trim().trim_end_matches('/');
        Self {
            tws: format!("{base}/api/tws"),
            boundaries: format!("{base}/api/boundaries"),
        }
    }
}

/// Polygon stroke settings, mirrored 1:1 onto Leaflet path options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeStyle {
    pub color: String,
    pub weight: f64,
    pub fill_opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    /// `[lat, lng]`
    pub center: [f64; 2],
    pub zoom: u8,
    pub tile_url: String,
    pub tile_attribution: String,
    pub scroll_wheel_zoom: bool,
    pub default_style: StrokeStyle,
    pub highlight_style: StrokeStyle,
    pub unknown_label: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: [34.0837, 74.7973],
            zoom: 8,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            tile_attribution: "&copy; OpenStreetMap contributors".to_string(),
            scroll_wheel_zoom: false,
            default_style: StrokeStyle {
                color: "#3388ff".to_string(),
                weight: 2.0,
                fill_opacity: 0.2,
            },
            highlight_style: StrokeStyle {
                color: "#ff7800".to_string(),
                weight: 4.0,
                fill_opacity: 0.35,
            },
            unknown_label: crate::district::UNKNOWN_DISTRICT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub series_name: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub y_unit: String,
    pub color: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            series_name: "TWS".to_string(),
            x_axis_label: "Year".to_string(),
            y_axis_label: "TWS (billion cubic meters)".to_string(),
            y_unit: "BCM".to_string(),
            color: "#2196F3".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub endpoints: Endpoints,
    pub request_timeout_ms: u32,
    pub map: MapConfig,
    pub chart: ChartConfig,
}

impl DashboardConfig {
    pub fn new(backend_base: &str) -> Self {
        Self {
            endpoints: Endpoints::from_base(backend_base),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            map: MapConfig::default(),
            chart: ChartConfig::default(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_from_base() {
        let endpoints = Endpoints::from_base("https://tws.example.org");
        assert_eq!(endpoints.tws, "https://tws.example.org/api/tws");
        assert_eq!(endpoints.boundaries, "https://tws.example.org/api/boundaries");
    }

    #[test]
    fn test_endpoints_tolerate_trailing_slash() {
        assert_eq!(
            Endpoints::from_base("http://localhost:5000/ "),
            Endpoints::from_base("http://localhost:5000")
        );
    }

    #[test]
    fn test_empty_base_gives_relative_urls() {
        let endpoints = Endpoints::from_base("");
        assert_eq!(endpoints.tws, "/api/tws");
        assert_eq!(endpoints.boundaries, "/api/boundaries");
    }

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.endpoints.tws, "http://localhost:5000/api/tws");
        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
        assert!(!config.map.scroll_wheel_zoom);
        assert!(config.map.highlight_style.weight > config.map.default_style.weight);
        assert_ne!(config.map.highlight_style.color, config.map.default_style.color);
    }

    #[test]
    fn test_map_config_serializes_camel_case() {
        let json = serde_json::to_value(MapConfig::default()).unwrap();
        assert_eq!(json["scrollWheelZoom"], false);
        assert_eq!(json["defaultStyle"]["fillOpacity"], 0.2);
        assert_eq!(json["unknownLabel"], "Unknown");
        assert_eq!(json["center"][0], 34.0837);
    }
}
