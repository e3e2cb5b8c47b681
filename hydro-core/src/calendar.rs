//! Month grid for the calendar widget.

use crate::completed_dates::CompletedDates;
use chrono::{Datelike, NaiveDate};
use hydro_utils::dates::{days_in_month, first_weekday_from_sunday};

/// Column headers, weeks start on Sunday.
pub const WEEKDAY_LABELS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_completed: bool,
}

impl CalendarCell {
    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    /// Empty cells before the 1st so it lands under its weekday.
    pub leading_blanks: u32,
    pub days: Vec<CalendarCell>,
}

impl MonthCalendar {
    /// The month containing `today`, with credited days marked.
    pub fn for_date(today: NaiveDate, completed: &CompletedDates) -> Self {
        let (year, month) = (today.year(), today.month());
        let days = (1..=days_in_month(year, month))
            .filter_map(|d| NaiveDate::from_ymd_opt(year, month, d))
            .map(|date| CalendarCell {
                date,
                is_today: date == today,
                is_completed: completed.contains(&date),
            })
            .collect();

        Self {
            year,
            month,
            leading_blanks: first_weekday_from_sunday(year, month),
            days,
        }
    }

    /// e.g. "October 2026"
    pub fn title(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default()
    }

    /// Rows of seven slots; `None` pads before the 1st and after the last day.
    pub fn weeks(&self) -> Vec<[Option<CalendarCell>; 7]> {
        let slots: Vec<Option<CalendarCell>> = std::iter::repeat(None)
            .take(self.leading_blanks as usize)
            .chain(self.days.iter().copied().map(Some))
            .collect();

        slots
            .chunks(7)
            .map(|chunk| {
                let mut week = [None; 7];
                week[..chunk.len()].copy_from_slice(chunk);
                week
            })
            .collect()
    }

    pub fn completed_count(&self) -> usize {
        self.days.iter().filter(|c| c.is_completed).count()
    }
}
