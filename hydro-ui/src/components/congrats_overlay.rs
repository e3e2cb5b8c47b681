//! Congratulations overlay. Visible while the notifier holds a celebration;
//! `AppState::log_water` schedules its dismissal.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn CongratsOverlay() -> Element {
    let state = use_context::<AppState>();
    let Some(celebration) = state.notifier.read().current().copied() else {
        return rsx! {};
    };
    let headline = celebration.headline();
    let streak_line = celebration.streak_line();

    rsx! {
        div {
            style: "position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; z-index: 60; background: rgba(0,0,0,0.5);",
            div {
                class: "water-level-transition",
                style: "background: white; padding: 24px; border-radius: 8px; box-shadow: 0 10px 25px rgba(0,0,0,0.2); text-align: center;",
                h2 {
                    style: "font-size: 24px; font-weight: bold; color: #2563EB; margin: 0 0 8px 0;",
                    "Congratulations! 🎉"
                }
                p { style: "font-size: 18px; margin: 0;", "{headline}" }
                if let Some(line) = streak_line {
                    p {
                        style: "color: #EAB308; font-weight: bold; margin-top: 8px;",
                        "{line}"
                    }
                }
                div {
                    style: "padding: 16px 0;",
                    div { class: "firework" }
                    div { class: "firework" }
                    div { class: "firework" }
                }
            }
        }
    }
}
