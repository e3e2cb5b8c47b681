use serde::{Deserialize, Serialize};
use std::fmt;

/// Liters in a full glass. Reaching this level credits the day.
pub const DAILY_GOAL_LITERS: u8 = 5;

/// Liters logged today, always within `0..=DAILY_GOAL_LITERS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8")]
pub struct WaterLevel(u8);

impl WaterLevel {
    pub const EMPTY: WaterLevel = WaterLevel(0);
    pub const FULL: WaterLevel = WaterLevel(DAILY_GOAL_LITERS);

    /// Build a level, clamping anything above a full glass.
    pub fn new(liters: u8) -> Self {
        WaterLevel(liters.min(DAILY_GOAL_LITERS))
    }

    pub fn liters(self) -> u8 {
        self.0
    }

    pub fn is_full(self) -> bool {
        self.0 == DAILY_GOAL_LITERS
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// One liter more, capped at a full glass.
    pub fn filled(self) -> Self {
        WaterLevel::new(self.0.saturating_add(1))
    }

    /// One liter less, floored at empty.
    pub fn drained(self) -> Self {
        WaterLevel(self.0.saturating_sub(1))
    }

    /// Fraction of the glass that is full, 0.0 to 1.0.
    pub fn glass_fill(self) -> f32 {
        f32::from(self.0) / f32::from(DAILY_GOAL_LITERS)
    }
}

impl From<u8> for WaterLevel {
    fn from(liters: u8) -> Self {
        WaterLevel::new(liters)
    }
}

impl fmt::Display for WaterLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
