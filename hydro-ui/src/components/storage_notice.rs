//! Notice shown when the streak can't be saved.

use crate::state::AppState;
use dioxus::prelude::*;

/// Displays a warning while running on session-only storage.
#[component]
pub fn StorageNotice() -> Element {
    let state = use_context::<AppState>();

    if !*state.storage_degraded.read() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "padding: 8px 12px; margin: 8px 0; background: #FFF8E1; color: #8D6E00; border-radius: 4px; border: 1px solid #FFE082; font-size: 13px;",
            strong { "Heads up: " }
            "your streak can't be saved in this browser and will reset when the page closes."
        }
    }
}
