//! Commands that change state: add, remove, set, check, reset.

use crate::Context;
use hydro_core::{DayCheck, LevelChange, Tracker, WaterLevel, DAILY_GOAL_LITERS};
use log::info;
use std::io::Write;

fn describe_day(check: DayCheck, tracker: &Tracker) -> Option<String> {
    match check {
        DayCheck::SameDay => None,
        DayCheck::Initialized => Some("Welcome! Your streak starts today.".to_string()),
        DayCheck::Continued => Some(format!(
            "New day, streak continues: {} days.",
            tracker.streak().count
        )),
        DayCheck::Broken => Some("More than a day since last time; streak reset to 0.".to_string()),
        DayCheck::ClockSkew => Some(
            "Today is earlier than the last recorded day; streak left unchanged.".to_string(),
        ),
    }
}

fn write_change(
    change: &LevelChange,
    tracker: &Tracker,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    if let Some(line) = describe_day(change.day, tracker) {
        writeln!(out, "{}", line)?;
    }
    if let Some(celebration) = change.celebration {
        writeln!(out, "Congratulations! 🎉 {}", celebration.headline())?;
        if let Some(line) = celebration.streak_line() {
            writeln!(out, "{}", line)?;
        }
        if celebration.level.is_full() {
            if change.credited {
                writeln!(out, "Today is credited. The glass is empty again.")?;
            } else {
                writeln!(out, "Today was already credited. The glass is empty again.")?;
            }
        }
    }
    writeln!(
        out,
        "Level {}/{} L, streak {}🔥",
        change.level,
        DAILY_GOAL_LITERS,
        tracker.streak().count
    )?;
    Ok(())
}

fn apply(
    ctx: &Context,
    out: &mut dyn Write,
    intent: impl FnOnce(&mut Tracker) -> LevelChange,
) -> anyhow::Result<()> {
    let mut tracker = ctx.repo.load_tracker();
    let change = intent(&mut tracker);
    ctx.repo.save_tracker(&tracker)?;
    info!(
        "{}: level {} -> {}, streak {}",
        ctx.today,
        change.previous,
        change.level,
        tracker.streak().count
    );
    write_change(&change, &tracker, out)
}

pub fn run_add(ctx: &Context, out: &mut dyn Write) -> anyhow::Result<()> {
    apply(ctx, out, |t| t.add_water(ctx.today))
}

pub fn run_remove(ctx: &Context, out: &mut dyn Write) -> anyhow::Result<()> {
    apply(ctx, out, |t| t.remove_water(ctx.today))
}

pub fn run_set(ctx: &Context, level: u8, out: &mut dyn Write) -> anyhow::Result<()> {
    apply(ctx, out, |t| t.set_level(WaterLevel::new(level), ctx.today))
}

pub fn run_check(ctx: &Context, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut tracker = ctx.repo.load_tracker();
    let check = tracker.check_day(ctx.today);
    ctx.repo.save_tracker(&tracker)?;
    match describe_day(check, &tracker) {
        Some(line) => writeln!(out, "{}", line)?,
        None => writeln!(out, "Already checked today.")?,
    }
    writeln!(out, "Streak {}🔥", tracker.streak().count)?;
    Ok(())
}

pub fn run_reset(ctx: &Context, confirmed: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    if !confirmed {
        anyhow::bail!("reset erases the streak; pass --yes to confirm");
    }
    ctx.repo.clear()?;
    info!("State cleared");
    writeln!(out, "Streak and history cleared.")?;
    Ok(())
}
