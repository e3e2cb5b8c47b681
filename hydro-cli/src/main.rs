//! Hydro Streak CLI - log water and check the streak from a terminal.

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hydro-cli",
    version,
    about = "Daily water intake tracker with a streak counter"
)]
struct Cli {
    /// JSON file holding the streak
    #[arg(short = 's', long, global = true, default_value = "hydro-streak.json")]
    store: PathBuf,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(short = 'd', long, global = true, value_parser = hydro_cmd::parse_date_arg)]
    date: Option<NaiveDate>,

    #[command(subcommand)]
    command: hydro_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let ctx = hydro_cmd::Context::open(&cli.store, cli.date);
    log::debug!("Running {:?} for {}", cli.command, ctx.today);
    let mut stdout = std::io::stdout();
    hydro_cmd::run(cli.command, &ctx, &mut stdout)
}
