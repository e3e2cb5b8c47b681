//! Hydro Streak web app.
//!
//! Data flow:
//! 1. On launch: open `localStorage` (or fall back to memory) and load the streak.
//! 2. On mount: run the day-check so a new day starts with an empty glass.
//! 3. Every minute: re-check, so a tab left open over midnight rolls over.
//! 4. On each add/remove: run the tracker, save, and show the overlay.

use dioxus::prelude::*;
use hydro_store::StreakRepository;
use hydro_ui::components::{
    CalendarWidget, CongratsOverlay, Glass, LevelPanel, StorageNotice, StreakBadge,
};
use hydro_ui::state::AppState;
use hydro_ui::timer;

/// How often the open app re-checks the date.
const DAY_CHECK_INTERVAL_MS: u32 = 60_000;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("hydro-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(|| {
        let repo = StreakRepository::open_browser();
        if !repo.is_degraded() {
            log::info!("Streak stored in localStorage");
        }
        AppState::new(repo)
    });

    // ─── Effect 1: day-check once on mount ───
    use_effect(move || {
        state.check_day();
    });

    // ─── Background: periodic day-check ───
    use_future(move || async move {
        loop {
            timer::sleep_ms(DAY_CHECK_INTERVAL_MS).await;
            log::debug!("periodic day-check");
            state.check_day();
        }
    });

    // ─── Render ───
    rsx! {
        div {
            style: "position: relative; min-height: 100vh; background: #FEF08A; font-family: system-ui, -apple-system, sans-serif; overflow: hidden;",

            StreakBadge {}
            CalendarWidget {}
            CongratsOverlay {}

            div {
                style: "max-width: 1200px; margin: 0 auto; padding: 96px 24px 24px 24px;",
                StorageNotice {}
                div {
                    style: "display: flex; justify-content: space-between; align-items: flex-start; gap: 24px;",
                    LevelPanel { left: true }
                    Glass {}
                    LevelPanel { left: false }
                }
            }
        }
    }
}
