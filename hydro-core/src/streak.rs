use chrono::NaiveDate;
use hydro_utils::dates::days_between;

/// Consecutive-day usage counter, persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakState {
    pub count: u32,
    /// The last day the streak was checked. `None` before first use.
    pub last_updated: Option<NaiveDate>,
}

/// Which branch a day-check took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCheck {
    /// No previous day on record: count starts at 0.
    Initialized,
    /// Already checked today.
    SameDay,
    /// Exactly one day after the last check: count went up by one.
    Continued,
    /// More than one day since the last check: count went back to 0.
    Broken,
    /// Today is earlier than the last check. Nothing changes.
    ClockSkew,
}

impl DayCheck {
    /// True when the water level should start over for a new day.
    pub fn starts_new_day(self) -> bool {
        matches!(
            self,
            DayCheck::Initialized | DayCheck::Continued | DayCheck::Broken
        )
    }
}

impl StreakState {
    pub fn new(count: u32, last_updated: Option<NaiveDate>) -> Self {
        Self {
            count,
            last_updated,
        }
    }

    /// Compare `today` to `last_updated` and advance, keep, or reset the count.
    pub fn check(&mut self, today: NaiveDate) -> DayCheck {
        let Some(last) = self.last_updated else {
            self.count = 0;
            self.last_updated = Some(today);
            return DayCheck::Initialized;
        };

        match days_between(&last, &today) {
            0 => DayCheck::SameDay,
            1 => {
                self.count += 1;
                self.last_updated = Some(today);
                DayCheck::Continued
            }
            d if d > 1 => {
                self.count = 0;
                self.last_updated = Some(today);
                DayCheck::Broken
            }
            _ => DayCheck::ClockSkew,
        }
    }

    /// Count a full glass on `today`, unless today already counted.
    ///
    /// Once checked, today has counted exactly when the count is above zero:
    /// `Continued` bumps it, `Initialized` and `Broken` leave it at 0, and
    /// nothing lowers it again the same day. Does nothing unless `today` is
    /// the checked day.
    pub fn count_full_glass(&mut self, today: NaiveDate) -> bool {
        if self.last_updated != Some(today) || self.count > 0 {
            return false;
        }
        self.count = 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn test_first_check_initializes() {
        let mut streak = StreakState::default();
        assert_eq!(streak.check(day(18)), DayCheck::Initialized);
        assert_eq!(streak, StreakState::new(0, Some(day(18))));
    }

    #[test]
    fn test_same_day_is_noop() {
        let mut streak = StreakState::new(4, Some(day(18)));
        assert_eq!(streak.check(day(18)), DayCheck::SameDay);
        assert_eq!(streak, StreakState::new(4, Some(day(18))));
    }

    #[test]
    fn test_consecutive_day_increments() {
        let mut streak = StreakState::new(4, Some(day(17)));
        assert_eq!(streak.check(day(18)), DayCheck::Continued);
        assert_eq!(streak, StreakState::new(5, Some(day(18))));
    }

    #[test]
    fn test_gap_resets() {
        let mut streak = StreakState::new(7, Some(day(15)));
        assert_eq!(streak.check(day(18)), DayCheck::Broken);
        assert_eq!(streak, StreakState::new(0, Some(day(18))));
    }

    #[test]
    fn test_month_boundary_counts_as_consecutive() {
        let sept_30 = NaiveDate::from_ymd_opt(2026, 9, 30).unwrap();
        let mut streak = StreakState::new(2, Some(sept_30));
        assert_eq!(streak.check(day(1)), DayCheck::Continued);
        assert_eq!(streak.count, 3);
    }

    #[test]
    fn test_clock_skew_leaves_streak_alone() {
        let mut streak = StreakState::new(3, Some(day(18)));
        assert_eq!(streak.check(day(16)), DayCheck::ClockSkew);
        assert_eq!(streak, StreakState::new(3, Some(day(18))));
        assert!(!DayCheck::ClockSkew.starts_new_day());
        assert!(!DayCheck::SameDay.starts_new_day());
        assert!(DayCheck::Broken.starts_new_day());
    }

    #[test]
    fn test_full_glass_counts_only_an_uncounted_day() {
        let mut restarted = StreakState::new(0, Some(day(18)));
        assert!(restarted.count_full_glass(day(18)));
        assert_eq!(restarted.count, 1);
        assert!(!restarted.count_full_glass(day(18)));

        let mut continued = StreakState::new(4, Some(day(17)));
        continued.check(day(18));
        assert!(!continued.count_full_glass(day(18)));
        assert_eq!(continued.count, 5);
    }

    #[test]
    fn test_full_glass_during_clock_skew_is_not_counted() {
        let mut streak = StreakState::new(0, Some(day(18)));
        assert!(!streak.count_full_glass(day(17)));
        assert_eq!(streak.count, 0);
    }
}
