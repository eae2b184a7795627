use crate::js_bridge::{D3_JS_URL, LEAFLET_CSS_URL, LEAFLET_JS_URL};
use dioxus::prelude::*;

/// Pulls D3.js and Leaflet into the page head.
#[component]
pub fn ExternalScripts() -> Element {
    rsx! {
        document::Stylesheet { href: LEAFLET_CSS_URL }
        document::Script { src: D3_JS_URL }
        document::Script { src: LEAFLET_JS_URL }
    }
}
