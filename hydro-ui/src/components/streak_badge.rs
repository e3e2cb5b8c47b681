//! Streak counter badge.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn StreakBadge() -> Element {
    let state = use_context::<AppState>();
    let count = state.tracker.read().streak().count;

    rsx! {
        div {
            class: "streak-container",
            style: "position: absolute; top: 16px; right: 16px; z-index: 50; background: #FACC15; border-radius: 9999px; padding: 8px; display: flex; align-items: center; justify-content: center;",
            title: "Consecutive days",
            span {
                style: "color: white; font-weight: bold; font-size: 18px;",
                "{count}🔥"
            }
        }
    }
}
