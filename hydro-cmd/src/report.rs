//! Read-only commands: status and calendar.
//!
//! Both still run the day-check, so the numbers they print are the ones the
//! next write would see.

use crate::Context;
use hydro_core::calendar::{CalendarCell, MonthCalendar, WEEKDAY_LABELS};
use hydro_core::milestone::milestone;
use hydro_core::{Tracker, DAILY_GOAL_LITERS};
use hydro_utils::dates::format_date;
use std::io::Write;

fn load_checked(ctx: &Context) -> anyhow::Result<Tracker> {
    let mut tracker = ctx.repo.load_tracker();
    tracker.check_day(ctx.today);
    ctx.repo.save_tracker(&tracker)?;
    Ok(tracker)
}

pub fn run_status(ctx: &Context, out: &mut dyn Write) -> anyhow::Result<()> {
    let tracker = load_checked(ctx)?;
    let level = tracker.level();
    let credited = tracker.is_credited(&ctx.today);

    writeln!(out, "Date:    {}", format_date(&ctx.today))?;
    writeln!(out, "Level:   {}/{} L", level, DAILY_GOAL_LITERS)?;
    writeln!(out, "Streak:  {}🔥", tracker.streak().count)?;
    writeln!(
        out,
        "Today:   {}",
        if credited { "credited" } else { "not yet credited" }
    )?;

    if let Some(next) = milestone(level.liters() + 1) {
        writeln!(
            out,
            "Next:    {}: {} (Rec: {})",
            next.locked_title(),
            next.unlock_hint(),
            next.recommended
        )?;
    }
    if let Some(reached) = milestone(level.liters()) {
        writeln!(out, "{}:", reached.title)?;
        for benefit in reached.benefits {
            writeln!(out, "  • {}", benefit)?;
        }
    }
    Ok(())
}

/// Three-character cell: day number plus a marker.
/// `*` full glass, `<` today, `#` both.
fn format_cell(cell: &CalendarCell) -> String {
    let marker = match (cell.is_today, cell.is_completed) {
        (true, true) => '#',
        (true, false) => '<',
        (false, true) => '*',
        (false, false) => ' ',
    };
    format!("{:>2}{}", cell.day(), marker)
}

pub fn render_calendar(calendar: &MonthCalendar) -> String {
    let mut text = String::new();
    text.push_str(&format!("{:^27}\n", calendar.title()));
    let header: Vec<String> = WEEKDAY_LABELS.iter().map(|l| format!("{:>2} ", l)).collect();
    text.push_str(header.concat().trim_end());
    text.push('\n');

    for week in calendar.weeks() {
        let line: Vec<String> = week
            .iter()
            .map(|slot| match slot {
                Some(cell) => format_cell(cell),
                None => "   ".to_string(),
            })
            .collect();
        text.push_str(line.concat().trim_end());
        text.push('\n');
    }
    text.push_str(&format!(
        "{} full glass day(s) this month.  * full glass  < today  # both\n",
        calendar.completed_count()
    ));
    text
}

pub fn run_calendar(ctx: &Context, out: &mut dyn Write) -> anyhow::Result<()> {
    let tracker = load_checked(ctx)?;
    let calendar = MonthCalendar::for_date(ctx.today, tracker.completed());
    write!(out, "{}", render_calendar(&calendar))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use hydro_core::CompletedDates;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn calendar_layout() {
        let completed: CompletedDates = [date(1), date(18)].into_iter().collect();
        let calendar = MonthCalendar::for_date(date(18), &completed);
        let text = render_calendar(&calendar);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0].trim(), "October 2026");
        assert_eq!(lines[1], " S  M  T  W  T  F  S");
        // Oct 1 2026 is a Thursday
        assert_eq!(lines[2], "             1* 2  3");
        assert!(lines[5].starts_with("18#"));
        assert!(lines.last().unwrap().starts_with("2 full glass day(s)"));
    }

    #[test]
    fn cell_markers() {
        let plain = CalendarCell {
            date: date(5),
            is_today: false,
            is_completed: false,
        };
        assert_eq!(format_cell(&plain), " 5 ");
        assert_eq!(format_cell(&CalendarCell { is_today: true, ..plain }), " 5<");
        assert_eq!(format_cell(&CalendarCell { is_completed: true, ..plain }), " 5*");
    }
}
