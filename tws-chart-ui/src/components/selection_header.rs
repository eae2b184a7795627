//! Heading of the chart pane: which district the chart belongs to.

use dioxus::prelude::*;
use tws_core::chart::selection_title;

#[derive(Props, Clone, PartialEq)]
pub struct SelectionHeaderProps {
    /// Raw name of the last clicked district, as the map reported it
    pub district: Option<String>,
    /// Y-axis unit explanation, only shown once a district is selected
    #[props(default = String::new())]
    pub unit_description: String,
}

#[component]
pub fn SelectionHeader(props: SelectionHeaderProps) -> Element {
    let title = selection_title(props.district.as_deref()).to_string();
    let title_color = if props.district.is_some() { "#2c3e50" } else { "#999" };

    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px; color: {title_color};",
                "{title}"
            }
            if props.district.is_some() && !props.unit_description.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Y-axis: {props.unit_description}"
                }
            }
        }
    }
}
