use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading TWS data and district boundaries...".to_string())]
    pub message: String,
}

/// Shown while the startup requests are in flight.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            "aria-busy": "true",
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "{props.message}"
        }
    }
}
