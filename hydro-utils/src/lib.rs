//! Shared utility functions for Hydro Streak crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, Local, NaiveDate};

    /// Storage format for dates: "YYYY-MM-DD"
    pub const ISO_FORMAT: &str = "%Y-%m-%d";

    /// Format produced by the browser's `Date.toDateString()`, e.g. "Sun Oct 18 2026".
    /// Older saves used it for `lastUpdated`.
    pub const BROWSER_FORMAT: &str = "%a %b %d %Y";

    /// Today's date in the local timezone.
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(ISO_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), ISO_FORMAT)?)
    }

    /// Parse either an ISO date or a browser `toDateString()` date.
    pub fn parse_stored_date(s: &str) -> anyhow::Result<NaiveDate> {
        let trimmed = s.trim();
        match NaiveDate::parse_from_str(trimmed, ISO_FORMAT) {
            Ok(date) => Ok(date),
            Err(_) => NaiveDate::parse_from_str(trimmed, BROWSER_FORMAT)
                .map_err(|e| anyhow::anyhow!("unrecognized date '{}': {}", trimmed, e)),
        }
    }

    /// Whole calendar days from `from` to `to`. Negative when `to` is earlier.
    pub fn days_between(from: &NaiveDate, to: &NaiveDate) -> i64 {
        (*to - *from).num_days()
    }

    /// Number of days in the given month (1-12). Returns 0 for an invalid month.
    pub fn days_in_month(year: i32, month: u32) -> u32 {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return 0;
        };
        let next_first = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        match next_first {
            Some(next) => days_between(&first, &next) as u32,
            None => 0,
        }
    }

    /// Weekday of the 1st of the month, counted from Sunday (Sunday = 0).
    pub fn first_weekday_from_sunday(year: i32, month: u32) -> u32 {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|d| d.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

}
