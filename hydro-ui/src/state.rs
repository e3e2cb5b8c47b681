//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! Intents go through [`AppState::log_water`]: run the tracker, save, and
//! show the congratulations overlay with its auto-dismiss timer.

use crate::timer;
use chrono::NaiveDate;
use dioxus::prelude::*;
use hydro_core::{Notifier, Tracker, CELEBRATION_DISPLAY_MS};
use hydro_store::StreakRepository;
use hydro_utils::dates;

/// What the user asked the glass to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterIntent {
    Add,
    Remove,
}

/// Shared application state for the Hydro Streak app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Where the streak is saved
    pub repo: Signal<StreakRepository>,
    /// Level, streak, and credited days
    pub tracker: Signal<Tracker>,
    /// The day the tracker was last checked against
    pub today: Signal<NaiveDate>,
    /// Congratulations overlay
    pub notifier: Signal<Notifier>,
    /// Whether the calendar widget is expanded
    pub calendar_expanded: Signal<bool>,
    /// Set when saves are failing or storage was unavailable from the start
    pub storage_degraded: Signal<bool>,
}

impl AppState {
    /// Create AppState from whatever the repository holds.
    pub fn new(repo: StreakRepository) -> Self {
        let tracker = repo.load_tracker();
        let degraded = repo.is_degraded();
        Self {
            repo: Signal::new(repo),
            tracker: Signal::new(tracker),
            today: Signal::new(dates::today()),
            notifier: Signal::new(Notifier::new()),
            calendar_expanded: Signal::new(false),
            storage_degraded: Signal::new(degraded),
        }
    }

    /// Run the day-check against the current date and save.
    ///
    /// Only writes signals, so calling it from an effect does not subscribe
    /// the effect to anything.
    pub fn check_day(mut self) {
        let today = dates::today();
        self.today.set(today);
        let check = self.tracker.write().check_day(today);
        log::debug!("day check on {}: {:?}", today, check);
        self.save();
    }

    pub fn log_water(mut self, intent: WaterIntent) {
        let today = dates::today();
        self.today.set(today);

        let mut tracker = self.tracker.write();
        let change = match intent {
            WaterIntent::Add => tracker.add_water(today),
            WaterIntent::Remove => tracker.remove_water(today),
        };
        drop(tracker);
        log::info!(
            "{:?}: level {} -> {} (credited: {})",
            intent,
            change.previous,
            change.level,
            change.credited
        );
        self.save();

        if let Some(celebration) = change.celebration {
            let token = self.notifier.write().show(celebration);
            let mut notifier = self.notifier;
            spawn(async move {
                timer::sleep_ms(CELEBRATION_DISPLAY_MS).await;
                notifier.write().dismiss(token);
            });
        }
    }

    pub fn toggle_calendar(mut self) {
        let expanded = *self.calendar_expanded.peek();
        self.calendar_expanded.set(!expanded);
    }

    fn save(mut self) {
        let saved = self.repo.peek().persist(&self.tracker.peek());
        let degraded = !saved || self.repo.peek().is_degraded();
        if *self.storage_degraded.peek() != degraded {
            self.storage_degraded.set(degraded);
        }
    }
}
