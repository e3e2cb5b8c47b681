//! Core types and the streak/level state machine behind Hydro Streak.
//!
//! Nothing in this crate reads the clock: every transition takes "today"
//! as a `NaiveDate` so callers (the web app, the CLI, tests) decide what
//! day it is.

pub mod calendar;
pub mod celebration;
pub mod completed_dates;
pub mod level;
pub mod milestone;
pub mod streak;
pub mod tracker;

pub use celebration::{Celebration, Notifier, NotifierToken, CELEBRATION_DISPLAY_MS};
pub use completed_dates::CompletedDates;
pub use level::{WaterLevel, DAILY_GOAL_LITERS};
pub use streak::{DayCheck, StreakState};
pub use tracker::{LevelChange, Tracker};
