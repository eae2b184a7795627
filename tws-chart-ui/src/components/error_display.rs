use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Replaces the whole dashboard once the startup load has failed. There is no
/// retry; the user has to reload the page.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            p {
                style: "margin: 0 0 4px 0;",
                strong { "Could not load dashboard data: " }
                "{props.message}"
            }
            p {
                style: "margin: 0; font-size: 12px; color: #8E2424;",
                "Reload the page to try again."
            }
        }
    }
}
