//! Streak/level state machine.
//!
//! `Tracker` owns the day's water level, the streak, and the set of credited
//! days. Every intent runs the day-check first so a session left open past
//! midnight starts the new day before applying the change.

use crate::celebration::Celebration;
use crate::completed_dates::CompletedDates;
use crate::level::WaterLevel;
use crate::streak::{DayCheck, StreakState};
use chrono::NaiveDate;

/// Outcome of a level intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelChange {
    /// The day-check that ran before the change.
    pub day: DayCheck,
    /// Level before the change (after any new-day reset).
    pub previous: WaterLevel,
    /// Level after the change.
    pub level: WaterLevel,
    /// True if this was today's first full glass.
    pub credited: bool,
    /// Set when the target was above the previous level.
    pub celebration: Option<Celebration>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tracker {
    level: WaterLevel,
    streak: StreakState,
    completed: CompletedDates,
}

impl Tracker {
    /// Start a session from persisted state with an empty glass.
    pub fn new(streak: StreakState, completed: CompletedDates) -> Self {
        Self {
            level: WaterLevel::EMPTY,
            streak,
            completed,
        }
    }

    /// Like `new`, but picks the glass up at `level`. Only meaningful when
    /// `level` was saved on the streak's last day; the next day-check empties
    /// it otherwise.
    pub fn resume(streak: StreakState, completed: CompletedDates, level: WaterLevel) -> Self {
        Self {
            level,
            streak,
            completed,
        }
    }

    pub fn level(&self) -> WaterLevel {
        self.level
    }

    pub fn streak(&self) -> &StreakState {
        &self.streak
    }

    pub fn completed(&self) -> &CompletedDates {
        &self.completed
    }

    pub fn is_credited(&self, date: &NaiveDate) -> bool {
        self.completed.contains(date)
    }

    /// Highest milestone to show as unlocked. A credited day keeps every
    /// milestone unlocked even though the glass itself was emptied.
    pub fn unlocked_through(&self, today: &NaiveDate) -> WaterLevel {
        if self.is_credited(today) {
            WaterLevel::FULL
        } else {
            self.level
        }
    }

    /// Compare `today` with the streak's last day and start a new day if needed.
    pub fn check_day(&mut self, today: NaiveDate) -> DayCheck {
        let check = self.streak.check(today);
        if check.starts_new_day() {
            self.level = WaterLevel::EMPTY;
        }
        match check {
            DayCheck::SameDay => {}
            DayCheck::ClockSkew => log::warn!(
                "today ({}) is before the last recorded day ({:?}); keeping streak at {}",
                today,
                self.streak.last_updated,
                self.streak.count
            ),
            _ => log::info!("day check {:?}: streak is now {}", check, self.streak.count),
        }
        check
    }

    /// Move the glass to `target` liters.
    ///
    /// Going up celebrates the new level. Reaching a full glass credits today
    /// and empties the glass again. The streak moves at most once per day, so
    /// a day already counted by the day-check is not counted again.
    pub fn set_level(&mut self, target: WaterLevel, today: NaiveDate) -> LevelChange {
        let day = self.check_day(today);
        self.apply_level(day, target, today)
    }

    /// Log one more liter.
    pub fn add_water(&mut self, today: NaiveDate) -> LevelChange {
        let day = self.check_day(today);
        let target = self.level.filled();
        self.apply_level(day, target, today)
    }

    /// Take one liter back.
    pub fn remove_water(&mut self, today: NaiveDate) -> LevelChange {
        let day = self.check_day(today);
        let target = self.level.drained();
        self.apply_level(day, target, today)
    }

    fn apply_level(&mut self, day: DayCheck, target: WaterLevel, today: NaiveDate) -> LevelChange {
        let previous = self.level;

        if target <= previous {
            self.level = target;
            return LevelChange {
                day,
                previous,
                level: target,
                credited: false,
                celebration: None,
            };
        }

        let mut credited = false;
        if target.is_full() {
            if self.completed.insert(today) {
                credited = true;
                self.streak.count_full_glass(today);
                log::info!("glass filled on {}: streak is {}", today, self.streak.count);
            } else {
                log::debug!("glass filled again on {}, already credited", today);
            }
            self.level = WaterLevel::EMPTY;
        } else {
            self.level = target;
        }

        LevelChange {
            day,
            previous,
            level: self.level,
            credited,
            celebration: Some(Celebration {
                level: target,
                streak_count: self.streak.count,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn tracker_at(count: u32, last: Option<NaiveDate>, level: u8) -> Tracker {
        let mut tracker = Tracker::new(StreakState::new(count, last), CompletedDates::new());
        tracker.level = WaterLevel::new(level);
        tracker
    }

    #[test]
    fn test_yesterday_continues_streak_and_empties_glass() {
        let mut tracker = tracker_at(6, Some(day(17)), 3);
        assert_eq!(tracker.check_day(day(18)), DayCheck::Continued);
        assert_eq!(tracker.streak().count, 7);
        assert_eq!(tracker.level(), WaterLevel::EMPTY);
    }

    #[test]
    fn test_three_day_gap_breaks_streak() {
        let mut tracker = tracker_at(6, Some(day(15)), 2);
        assert_eq!(tracker.check_day(day(18)), DayCheck::Broken);
        assert_eq!(tracker.streak().count, 0);
        assert_eq!(tracker.streak().last_updated, Some(day(18)));
        assert_eq!(tracker.level(), WaterLevel::EMPTY);
    }

    #[test]
    fn test_first_use_initializes() {
        let mut tracker = Tracker::default();
        assert_eq!(tracker.check_day(day(18)), DayCheck::Initialized);
        assert_eq!(*tracker.streak(), StreakState::new(0, Some(day(18))));
    }

    #[test]
    fn test_same_day_check_keeps_level() {
        let mut tracker = tracker_at(2, Some(day(18)), 3);
        assert_eq!(tracker.check_day(day(18)), DayCheck::SameDay);
        assert_eq!(tracker.level().liters(), 3);
    }

    #[test]
    fn test_filling_glass_credits_day_and_empties() {
        let mut tracker = tracker_at(0, Some(day(18)), 4);
        let change = tracker.add_water(day(18));
        assert!(change.credited);
        assert_eq!(change.previous.liters(), 4);
        assert_eq!(change.level, WaterLevel::EMPTY);
        assert_eq!(tracker.streak().count, 1);
        assert!(tracker.is_credited(&day(18)));
        let celebration = change.celebration.unwrap();
        assert_eq!(celebration.level, WaterLevel::FULL);
        assert_eq!(celebration.streak_count, 1);
    }

    #[test]
    fn test_second_full_glass_same_day_credits_once() {
        let mut tracker = tracker_at(0, Some(day(18)), 4);
        assert!(tracker.add_water(day(18)).credited);
        let again = tracker.set_level(WaterLevel::FULL, day(18));
        assert!(!again.credited);
        assert!(again.celebration.is_some());
        assert_eq!(tracker.streak().count, 1);
        assert_eq!(tracker.completed().len(), 1);
        assert_eq!(tracker.level(), WaterLevel::EMPTY);
    }

    #[test]
    fn test_full_glass_on_continued_day_does_not_count_twice() {
        let mut tracker = tracker_at(2, Some(day(17)), 0);
        for _ in 0..5 {
            tracker.add_water(day(18));
        }
        assert!(tracker.is_credited(&day(18)));
        assert_eq!(tracker.streak().count, 3);
    }

    #[test]
    fn test_filling_glass_on_consecutive_days_counts_each_day_once() {
        let mut tracker = Tracker::default();
        for d in 16..=18 {
            let mut last = None;
            for _ in 0..5 {
                last = Some(tracker.add_water(day(d)));
            }
            let celebration = last.and_then(|change| change.celebration).unwrap();
            assert_eq!(celebration.streak_count, d - 15);
            assert_eq!(tracker.streak().count, d - 15);
        }
        assert_eq!(tracker.completed().len(), 3);
    }

    #[test]
    fn test_adding_water_while_clock_is_behind_keeps_filling() {
        let mut tracker = tracker_at(2, Some(day(18)), 0);
        let levels: Vec<u8> = (0..4)
            .map(|_| tracker.add_water(day(17)).level.liters())
            .collect();
        assert_eq!(levels, vec![1, 2, 3, 4]);
        let change = tracker.add_water(day(17));
        assert_eq!(change.day, DayCheck::ClockSkew);
        assert!(change.credited);
        assert_eq!(tracker.level(), WaterLevel::EMPTY);
        assert_eq!(*tracker.streak(), StreakState::new(2, Some(day(18))));
    }

    #[test]
    fn test_partial_increase_celebrates_without_credit() {
        let mut tracker = tracker_at(0, Some(day(18)), 1);
        let change = tracker.set_level(WaterLevel::new(3), day(18));
        assert_eq!(change.level.liters(), 3);
        assert!(!change.credited);
        assert_eq!(change.celebration.map(|c| c.level.liters()), Some(3));
        assert_eq!(tracker.streak().count, 0);
    }

    #[test]
    fn test_decrease_is_silent() {
        let mut tracker = tracker_at(1, Some(day(18)), 3);
        let change = tracker.remove_water(day(18));
        assert_eq!(change.level.liters(), 2);
        assert_eq!(change.celebration, None);
        let unchanged = tracker.set_level(WaterLevel::new(2), day(18));
        assert_eq!(unchanged.celebration, None);
    }

    #[test]
    fn test_remove_water_on_empty_glass_stays_empty() {
        let mut tracker = tracker_at(1, Some(day(18)), 0);
        let change = tracker.remove_water(day(18));
        assert_eq!(change.level, WaterLevel::EMPTY);
    }

    #[test]
    fn test_intent_after_midnight_starts_new_day_first() {
        let mut tracker = tracker_at(1, Some(day(17)), 4);
        let change = tracker.add_water(day(18));
        assert_eq!(change.day, DayCheck::Continued);
        assert_eq!(change.previous, WaterLevel::EMPTY);
        assert_eq!(change.level.liters(), 1);
        assert_eq!(tracker.streak().count, 2);
    }

    #[test]
    fn test_resumed_level_is_emptied_by_new_day() {
        let streak = StreakState::new(1, Some(day(17)));
        let mut tracker = Tracker::resume(streak, CompletedDates::new(), WaterLevel::new(3));
        assert_eq!(tracker.level().liters(), 3);
        tracker.check_day(day(18));
        assert_eq!(tracker.level(), WaterLevel::EMPTY);
    }

    #[test]
    fn test_unlocked_through_credited_day() {
        let mut tracker = tracker_at(0, Some(day(18)), 4);
        assert_eq!(tracker.unlocked_through(&day(18)).liters(), 4);
        tracker.add_water(day(18));
        assert_eq!(tracker.unlocked_through(&day(18)), WaterLevel::FULL);
        assert_eq!(tracker.unlocked_through(&day(19)), WaterLevel::EMPTY);
    }
}
