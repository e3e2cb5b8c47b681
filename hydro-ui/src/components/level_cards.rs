//! Milestone cards for each liter.

use crate::state::AppState;
use dioxus::prelude::*;
use hydro_core::milestone::{LevelMilestone, MILESTONES};

/// Cards for liters 1-3 go in the left panel, 4-5 in the right.
const LEFT_PANEL_LITERS: u8 = 3;

#[derive(Props, Clone, PartialEq)]
pub struct LevelCardProps {
    pub milestone: LevelMilestone,
    pub unlocked: bool,
}

/// Unlocked: title and benefits. Locked: unlock hint and recommended window.
#[component]
pub fn LevelCard(props: LevelCardProps) -> Element {
    let m = props.milestone;
    let liter = m.liter;
    let title = m.title;
    let recommended = m.recommended;

    if props.unlocked {
        let benefits: Vec<&'static str> = m.benefits.to_vec();
        return rsx! {
            div {
                id: "{liter}",
                class: "water-level-transition",
                style: "padding: 8px 12px;",
                h1 { style: "color: #1E3A8A; font-size: 28px; font-weight: bold; margin: 0 0 4px 0;", "{title}" }
                for benefit in benefits {
                    p { style: "color: #1E40AF; margin: 2px 0;", "• {benefit}" }
                }
            }
        };
    }

    let locked_title = m.locked_title();
    let hint = m.unlock_hint();
    rsx! {
        div {
            class: "water-level-transition",
            style: "padding: 16px 24px; opacity: 0.75;",
            h1 { style: "color: #1E3A8A; font-size: 28px; font-weight: bold; margin: 0 0 4px 0;", "{locked_title}" }
            p { style: "color: #1E40AF; margin: 2px 0;", "{hint}" }
            p { style: "color: #1E3A8A; margin: 2px 0;", "Rec: {recommended}" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct LevelPanelProps {
    /// Show the left (1-3) or right (4-5) group of cards.
    pub left: bool,
}

#[component]
pub fn LevelPanel(props: LevelPanelProps) -> Element {
    let state = use_context::<AppState>();
    let today = (state.today)();
    let reached = state.tracker.read().unlocked_through(&today);
    let cards: Vec<(u8, LevelMilestone, bool)> = MILESTONES
        .iter()
        .filter(|m| (m.liter <= LEFT_PANEL_LITERS) == props.left)
        .map(|m| (m.liter, *m, m.is_unlocked(reached)))
        .collect();

    rsx! {
        div {
            class: "shining-border",
            style: "background: white; border-radius: 16px; padding: 12px; width: 360px; min-height: 60vh; color: black;",
            for (liter, m, unlocked) in cards {
                LevelCard {
                    key: "{liter}",
                    milestone: m,
                    unlocked: unlocked,
                }
            }
        }
    }
}
