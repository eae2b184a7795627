//! Shared Dioxus components and JS bridge for the TWS district dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js chart and Leaflet map via `js_sys::eval()`
//! - `fetch`: the `gloo-net` implementation of `tws_core::loader::Fetch`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: RSX components for the map pane, chart pane and status messages

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
