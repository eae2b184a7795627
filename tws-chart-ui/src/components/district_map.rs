//! Leaflet map of district boundaries.

use crate::components::ChartContainer;
use crate::js_bridge;
use dioxus::prelude::*;
use std::rc::Rc;
use tws_core::config::MapConfig;
use tws_core::BoundaryCollection;

#[derive(Props, Clone, PartialEq)]
pub struct DistrictMapProps {
    /// The DOM id Leaflet mounts the map on
    pub id: String,
    /// Boundary polygons; `None` renders the base map alone
    pub boundaries: Option<Rc<BoundaryCollection>>,
    #[props(default)]
    pub config: MapConfig,
    #[props(default = 500)]
    pub height: u32,
    /// Called with the clicked feature's `DISTRICT` name ("Unknown" if absent)
    pub on_select: EventHandler<String>,
}

/// Base map with one highlighted-on-hover, clickable polygon per district.
#[component]
pub fn DistrictMap(props: DistrictMapProps) -> Element {
    let on_select = props.on_select;

    // Leaflet reports clicks through an eval channel that lives as long as this component.
    use_future(move || async move {
        let mut clicks = document::eval(js_bridge::DISTRICT_CLICK_CHANNEL_JS);
        loop {
            match clicks.recv::<String>().await {
                Ok(name) => on_select.call(name),
                Err(e) => {
                    log::warn!("District click channel closed: {:?}", e);
                    break;
                }
            }
        }
    });

    let id = props.id.clone();
    let boundaries = props.boundaries.clone();
    let config = props.config.clone();
    use_effect(use_reactive!(|(id, boundaries, config)| {
        let geojson = match boundaries.as_ref() {
            Some(collection) => match js_bridge::to_json("district boundaries", &**collection) {
                Some(json) => Some(json),
                None => return,
            },
            None => None,
        };
        let Some(config_json) = js_bridge::to_json("map config", &config) else {
            return;
        };

        js_bridge::init_renderers();
        js_bridge::render_district_map(&id, geojson.as_deref(), &config_json);
    }));

    let map_id = props.id.clone();
    use_drop(move || js_bridge::destroy_district_map(&map_id));

    rsx! {
        ChartContainer {
            id: props.id.clone(),
            height: props.height,
        }
    }
}
