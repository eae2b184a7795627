//! Container div that the D3 chart or the Leaflet map renders into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id the renderer looks up
    pub id: String,
    /// Height in pixels. Leaflet needs a fixed height to lay out tiles.
    #[props(default = 400)]
    pub height: u32,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "height: {}px; position: relative; width: 100%; border-radius: 4px; overflow: hidden;",
        props.height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
