//! Typed load/save of tracker state on top of a `KeyValueStore`.
//!
//! Read failures never reach the caller through `load_*`: a missing, corrupt,
//! or unreadable entry loads as the absent state and the session carries on.
//! Write failures are returned from `save_*` and only logged by `persist`.

use crate::record::{decode_streak, encode_streak, LevelRecord};
use crate::{KeyValueStore, MemoryStore, StoreError, COMPLETED_DATES_KEY, LEVEL_KEY, STREAK_KEY};
use hydro_core::{CompletedDates, StreakState, Tracker, WaterLevel};
use std::rc::Rc;

/// Cheaply cloneable handle (via `Rc`), suitable for sharing across Dioxus
/// components in single-threaded WASM.
#[derive(Clone)]
pub struct StreakRepository {
    store: Rc<dyn KeyValueStore>,
    degraded: bool,
}

impl StreakRepository {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
            degraded: false,
        }
    }

    /// Session-only repository used when the real backend could not be opened.
    pub fn degraded(reason: &StoreError) -> Self {
        log::warn!("{}; state will only last for this session", reason);
        Self {
            store: Rc::new(MemoryStore::new()),
            degraded: true,
        }
    }

    /// True when running on the in-memory fallback.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Browser `localStorage`, or the in-memory fallback if it can't be opened.
    #[cfg(feature = "web")]
    pub fn open_browser() -> Self {
        match crate::BrowserStore::open() {
            Ok(store) => Self::new(store),
            Err(e) => Self::degraded(&e),
        }
    }

    pub fn try_load_streak(&self) -> Result<Option<StreakState>, StoreError> {
        match self.store.get(STREAK_KEY)? {
            Some(raw) => decode_streak(&raw).map(Some),
            None => Ok(None),
        }
    }

    pub fn load_streak(&self) -> StreakState {
        match self.try_load_streak() {
            Ok(Some(streak)) => streak,
            Ok(None) => StreakState::default(),
            Err(e) => {
                log::warn!("Discarding stored streak: {}", e);
                StreakState::default()
            }
        }
    }

    pub fn save_streak(&self, streak: &StreakState) -> Result<(), StoreError> {
        self.store.set(STREAK_KEY, &encode_streak(streak)?)
    }

    pub fn try_load_completed(&self) -> Result<Option<CompletedDates>, StoreError> {
        match self.store.get(COMPLETED_DATES_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn load_completed(&self) -> CompletedDates {
        match self.try_load_completed() {
            Ok(completed) => completed.unwrap_or_default(),
            Err(e) => {
                log::warn!("Discarding stored completed dates: {}", e);
                CompletedDates::new()
            }
        }
    }

    pub fn save_completed(&self, completed: &CompletedDates) -> Result<(), StoreError> {
        self.store
            .set(COMPLETED_DATES_KEY, &serde_json::to_string(completed)?)
    }

    pub fn try_load_level(&self) -> Result<Option<LevelRecord>, StoreError> {
        match self.store.get(LEVEL_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Level saved for the streak's last day. Anything else loads as empty.
    pub fn load_level(&self, streak: &StreakState) -> WaterLevel {
        let record = match self.try_load_level() {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Discarding stored level: {}", e);
                None
            }
        };
        record
            .zip(streak.last_updated)
            .and_then(|(record, day)| record.level_on(&day))
            .unwrap_or_default()
    }

    /// Saves nothing before the first day-check.
    pub fn save_level(&self, tracker: &Tracker) -> Result<(), StoreError> {
        let Some(date) = tracker.streak().last_updated else {
            return Ok(());
        };
        let record = LevelRecord {
            level: tracker.level(),
            date,
        };
        self.store.set(LEVEL_KEY, &serde_json::to_string(&record)?)
    }

    /// Pick up where the last session left off.
    pub fn load_tracker(&self) -> Tracker {
        let streak = self.load_streak();
        let completed = self.load_completed();
        let level = self.load_level(&streak);
        log::debug!(
            "Loaded streak {} (last updated {:?}), {} completed days, level {}",
            streak.count,
            streak.last_updated,
            completed.len(),
            level
        );
        Tracker::resume(streak, completed, level)
    }

    pub fn save_tracker(&self, tracker: &Tracker) -> Result<(), StoreError> {
        self.save_streak(tracker.streak())?;
        self.save_completed(tracker.completed())?;
        self.save_level(tracker)
    }

    /// Save, logging instead of failing. Returns whether the write succeeded.
    pub fn persist(&self, tracker: &Tracker) -> bool {
        match self.save_tracker(tracker) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Could not save streak, keeping it in memory: {}", e);
                false
            }
        }
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(STREAK_KEY)?;
        self.store.remove(COMPLETED_DATES_KEY)?;
        self.store.remove(LEVEL_KEY)
    }
}
