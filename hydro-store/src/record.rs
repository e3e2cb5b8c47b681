//! Wire formats of the stored entries.

use crate::StoreError;
use chrono::NaiveDate;
use hydro_core::{StreakState, WaterLevel};
use hydro_utils::dates::{format_date, parse_stored_date};
use serde::{Deserialize, Serialize};

/// `{"count": 3, "lastUpdated": "2026-10-18"}`
///
/// `lastUpdated` is written as ISO but older saves hold the browser's
/// `toDateString()` form ("Sun Oct 18 2026"); both are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakRecord {
    #[serde(default)]
    pub count: u32,
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: Option<String>,
}

impl From<&StreakState> for StreakRecord {
    fn from(state: &StreakState) -> Self {
        Self {
            count: state.count,
            last_updated: state.last_updated.as_ref().map(format_date),
        }
    }
}

impl TryFrom<StreakRecord> for StreakState {
    type Error = StoreError;

    fn try_from(record: StreakRecord) -> Result<Self, Self::Error> {
        let last_updated = match record.last_updated.as_deref() {
            None => None,
            Some(s) if s.trim().is_empty() => None,
            Some(s) => Some(parse_stored_date(s).map_err(|e| StoreError::Parse(e.to_string()))?),
        };
        Ok(StreakState::new(record.count, last_updated))
    }
}

/// Decode a stored `waterStreak` value.
pub fn decode_streak(raw: &str) -> Result<StreakState, StoreError> {
    let record: StreakRecord = serde_json::from_str(raw)?;
    record.try_into()
}

pub fn encode_streak(state: &StreakState) -> Result<String, StoreError> {
    Ok(serde_json::to_string(&StreakRecord::from(state))?)
}

/// Wire format of the `waterLevelToday` entry: `{"level": 3, "date": "2026-10-18"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRecord {
    pub level: WaterLevel,
    pub date: NaiveDate,
}

impl LevelRecord {
    /// The saved level, if it was saved on `day`.
    pub fn level_on(&self, day: &NaiveDate) -> Option<WaterLevel> {
        (self.date == *day).then_some(self.level)
    }
}
