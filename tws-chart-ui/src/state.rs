//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals owned by the root view. Child
//! components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use tws_core::LoadState;

#[derive(Clone, Copy)]
pub struct AppState {
    /// Outcome of the startup load
    pub load_state: Signal<LoadState>,
    /// Raw display name of the last clicked district
    pub selected_district: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState in the loading state with nothing selected.
    pub fn new() -> Self {
        Self {
            load_state: Signal::new(LoadState::Loading),
            selected_district: Signal::new(None),
        }
    }

    /// Replace the selection with the most recent click.
    pub fn select_district(&mut self, name: String) {
        log::info!("Selected district {:?}", name);
        self.selected_district.set(Some(name));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
