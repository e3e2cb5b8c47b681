//! The glass: fills one fifth per liter, with add/remove buttons.
//!
//! A flat stand-in for the 3D vessel; it only needs the current level.

use crate::state::{AppState, WaterIntent};
use dioxus::prelude::*;
use hydro_core::{WaterLevel, DAILY_GOAL_LITERS};

const GLASS_HEIGHT_PX: u32 = 260;

fn water_style(level: WaterLevel) -> String {
    let percent = (level.glass_fill() * 100.0).round();
    format!(
        "position: absolute; bottom: 0; left: 0; right: 0; height: {}%; background: linear-gradient(#4FC3F7, #0277BD); transition: height 0.6s ease;",
        percent
    )
}

/// Distance of the liter mark from the glass bottom, as a percentage.
fn mark_offset(liter: u8) -> u32 {
    u32::from(liter) * 100 / u32::from(DAILY_GOAL_LITERS)
}

#[component]
pub fn Glass() -> Element {
    let state = use_context::<AppState>();
    let level = state.tracker.read().level();
    let water = water_style(level);
    let glass = format!(
        "position: relative; width: 140px; height: {}px; margin: 0 auto; border: 3px solid #263238; border-top: none; border-radius: 0 0 24px 24px; overflow: hidden; background: rgba(255,255,255,0.6);",
        GLASS_HEIGHT_PX
    );
    let goal = DAILY_GOAL_LITERS;
    let marks: Vec<(u8, u32)> = (1..=DAILY_GOAL_LITERS).map(|l| (l, mark_offset(l))).collect();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; gap: 12px;",
            div {
                style: "{glass}",
                div { style: "{water}" }
                for (liter, offset) in marks {
                    div {
                        key: "{liter}",
                        style: "position: absolute; left: 0; width: 24px; bottom: {offset}%; border-top: 2px solid #263238; font-size: 10px; padding-left: 28px;",
                        "{liter}L"
                    }
                }
            }
            p {
                style: "margin: 0; font-weight: bold; color: #01579B;",
                "{level} / {goal} L today"
            }
            div {
                style: "display: flex; gap: 12px;",
                button {
                    style: "padding: 6px 16px; font-size: 18px; border-radius: 6px; border: 1px solid #0277BD; background: white;",
                    disabled: level.is_empty(),
                    onclick: move |_| state.log_water(WaterIntent::Remove),
                    "−"
                }
                button {
                    style: "padding: 6px 16px; font-size: 18px; border-radius: 6px; border: none; background: #0277BD; color: white;",
                    onclick: move |_| state.log_water(WaterIntent::Add),
                    "+ 1L"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_height_tracks_level() {
        assert!(water_style(WaterLevel::EMPTY).contains("height: 0%"));
        assert!(water_style(WaterLevel::new(3)).contains("height: 60%"));
        assert!(water_style(WaterLevel::FULL).contains("height: 100%"));
    }

    #[test]
    fn marks_are_evenly_spaced() {
        assert_eq!(mark_offset(1), 20);
        assert_eq!(mark_offset(5), 100);
    }
}
