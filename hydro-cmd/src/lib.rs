//! Command implementations for the Hydro Streak CLI.
//!
//! Each subcommand loads the tracker from a JSON state file, runs the
//! day-check for "today" (the real date unless overridden), applies the
//! command, saves, and prints a short report.

use chrono::NaiveDate;
use clap::Subcommand;
use hydro_store::{FileStore, StreakRepository};
use hydro_utils::dates;
use std::io::Write;
use std::path::Path;

pub mod report;
pub mod water;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show today's level, the streak, and the next milestone
    Status,

    /// Log one liter of water
    Add,

    /// Take back one liter
    Remove,

    /// Set today's level directly (0-5)
    Set {
        #[arg(value_parser = clap::value_parser!(u8).range(0..=5))]
        level: u8,
    },

    /// Run the day-check without logging water
    Check,

    /// Print this month's calendar with full-glass days marked
    Calendar,

    /// Forget the streak, credited days, and today's level
    Reset {
        /// Required; there is no undo
        #[arg(long)]
        yes: bool,
    },
}

/// Where state lives and what day it is.
#[derive(Clone)]
pub struct Context {
    pub repo: StreakRepository,
    pub today: NaiveDate,
}

impl Context {
    /// File-backed context. `date` overrides today's date.
    pub fn open(store_path: &Path, date: Option<NaiveDate>) -> Self {
        log::debug!("Using state file {}", store_path.display());
        Self {
            repo: StreakRepository::new(FileStore::new(store_path)),
            today: date.unwrap_or_else(dates::today),
        }
    }
}

/// clap value parser for `--date`.
pub fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    dates::parse_date(s).map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

pub fn run(command: Command, ctx: &Context, out: &mut dyn Write) -> anyhow::Result<()> {
    match command {
        Command::Status => report::run_status(ctx, out),
        Command::Add => water::run_add(ctx, out),
        Command::Remove => water::run_remove(ctx, out),
        Command::Set { level } => water::run_set(ctx, level, out),
        Command::Check => water::run_check(ctx, out),
        Command::Calendar => report::run_calendar(ctx, out),
        Command::Reset { yes } => water::run_reset(ctx, yes, out),
    }
}
