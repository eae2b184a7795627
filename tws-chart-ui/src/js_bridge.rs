//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js line chart and the Leaflet district map live in `assets/js/*.js`.
//! They are evaluated as globals (no ES modules) once both libraries have
//! loaded, and exposed via `window.*`. This module serializes data and config
//! and calls those globals.

/// D3.js v7 from the jsDelivr CDN.
pub const D3_JS_URL: &str = "https://cdn.jsdelivr.net/npm/d3@7";
/// Leaflet 1.9 script and stylesheet.
pub const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
pub const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";

use serde::Serialize;

// Embed all renderer JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static DISTRICT_MAP_JS: &str = include_str!("../assets/js/district-map.js");

/// Script for a Dioxus `document::eval` channel: every district click reported
/// by the map is sent back to Rust as a string. The script never returns so the
/// channel stays open for the lifetime of the map component.
pub const DISTRICT_CLICK_CHANNEL_JS: &str = r#"
    window.__twsOnDistrictClick = function(name) { dioxus.send(name); };
    await new Promise(function() {});
"#;

/// Serialize renderer input, logging instead of handing JS an empty string.
pub fn to_json<T: Serialize + ?Sized>(what: &str, value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(json) => Some(json),
        Err(e) => {
            log::error!("Failed to serialize {} for the renderer: {}", what, e);
            None
        }
    }
}

/// Quote a string as a JS string literal.
fn js_string_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('TWS JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize renderer scripts with a wait-for-libraries polling loop.
///
/// The renderer JS files define functions via `function` declarations. To make
/// them global (not block-scoped inside the setInterval callback) they are
/// evaluated at global scope with an indirect `eval()` once D3 and Leaflet are
/// ready, and each function is then promoted to `window.*`.
pub fn init_renderers() {
    let all_js = [TOOLTIP_JS, LINE_CHART_JS, DISTRICT_MAP_JS].join("\n");

    let store_js = format!(
        "if (!window.__twsRenderersReady && !window.__twsRenderersPending) {{ window.__twsRendererScripts = {}; }}",
        js_string_literal(&all_js)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__twsRenderersReady || window.__twsRenderersPending) return;
            window.__twsRenderersPending = true;
            var waitForLibs = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof L !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__twsRendererScripts);
                    delete window.__twsRendererScripts;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof renderDistrictMap !== 'undefined') window.renderDistrictMap = renderDistrictMap;
                    if (typeof destroyDistrictMap !== 'undefined') window.destroyDistrictMap = destroyDistrictMap;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__twsRenderersReady = true;
                    console.log('TWS renderers initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Poll until renderers are ready and `container_id` exists, then run `call`.
fn when_ready(function: &str, container_id: &str, call: &str) {
    let id = js_string_literal(container_id);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__twsRenderersReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        {call}
                    }} catch(e) {{ console.error('[TWS] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the yearly TWS line chart into `container_id`.
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    let call = format!(
        "window.renderLineChart({}, {}, {});",
        js_string_literal(container_id),
        js_string_literal(data_json),
        js_string_literal(config_json),
    );
    when_ready("renderLineChart", container_id, &call);
}

/// Render the base map into `container_id`, plus one polygon layer per
/// feature when `geojson` is present.
pub fn render_district_map(container_id: &str, geojson: Option<&str>, config_json: &str) {
    let call = format!(
        "window.renderDistrictMap({}, {}, {});",
        js_string_literal(container_id),
        js_string_literal(geojson.unwrap_or("null")),
        js_string_literal(config_json),
    );
    when_ready("renderDistrictMap", container_id, &call);
}

/// Tear down the Leaflet map in `container_id`.
pub fn destroy_district_map(container_id: &str) {
    call_js(&format!(
        "if (typeof window.destroyDistrictMap === 'function') window.destroyDistrictMap({});",
        js_string_literal(container_id)
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string_literal(container_id)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_literal_escapes_quotes_and_newlines() {
        assert_eq!(js_string_literal("it's"), r#""it's""#);
        assert_eq!(js_string_literal("a\"b\nc"), r#""a\"b\nc""#);
    }

    #[test]
    fn test_embedded_scripts_define_globals() {
        assert!(LINE_CHART_JS.contains("function renderLineChart("));
        assert!(DISTRICT_MAP_JS.contains("function renderDistrictMap("));
        assert!(DISTRICT_MAP_JS.contains("function destroyDistrictMap("));
        assert!(DISTRICT_MAP_JS.contains("__twsOnDistrictClick"));
        assert!(DISTRICT_CLICK_CHANNEL_JS.contains("__twsOnDistrictClick"));
        assert!(TOOLTIP_JS.contains("function showTooltip("));
    }

    #[test]
    fn test_backend_labels_are_inserted_as_text() {
        assert!(!TOOLTIP_JS.contains("innerHTML"));
        assert!(TOOLTIP_JS.contains("textContent = title"));
        assert!(!LINE_CHART_JS.contains("<strong>"));
        assert!(DISTRICT_MAP_JS.contains("label.textContent = name"));
        assert!(!DISTRICT_MAP_JS.contains("bindTooltip(name"));
    }

    #[test]
    fn test_to_json() {
        assert_eq!(to_json("points", &[1, 2]).as_deref(), Some("[1,2]"));

        let mut bad = std::collections::HashMap::new();
        bad.insert((1, 2), 3.0);
        assert_eq!(to_json("points", &bad), None);
    }
}
