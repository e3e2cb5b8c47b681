//! End-to-end runs of the CLI commands against a JSON state file.

use chrono::NaiveDate;
use hydro_cmd::{run, Command, Context};
use std::path::PathBuf;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
}

fn temp_store(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("hydro-cmd-{}-{}.json", name, std::process::id()));
    let _ = std::fs::remove_file(&path);
    path
}

fn run_on(path: &PathBuf, today: NaiveDate, command: Command) -> String {
    let ctx = Context::open(path, Some(today));
    let mut out = Vec::new();
    run(command, &ctx, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn filling_the_glass_credits_the_day_once() {
    let path = temp_store("fill");
    for _ in 0..4 {
        run_on(&path, day(18), Command::Add);
    }
    let fifth = run_on(&path, day(18), Command::Add);
    assert!(fifth.contains("You've reached Level 5!"));
    assert!(fifth.contains("🔥 1 day streak! Keep it up!"));
    assert!(fifth.contains("Today is credited."));

    let again = run_on(&path, day(18), Command::Set { level: 5 });
    assert!(again.contains("already credited"));
    assert!(again.contains("streak 1🔥"));

    let status = run_on(&path, day(18), Command::Status);
    assert!(status.contains("Level:   0/5 L"));
    assert!(status.contains("Today:   credited"));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn full_glass_every_day_adds_one_per_day() {
    let path = temp_store("daily");
    for d in 16..=18 {
        for _ in 0..5 {
            run_on(&path, day(d), Command::Add);
        }
    }
    let status = run_on(&path, day(18), Command::Status);
    assert!(status.contains("Streak:  3🔥"));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn earlier_date_keeps_filling_the_glass() {
    let path = temp_store("skew");
    run_on(&path, day(18), Command::Check);
    for _ in 0..3 {
        run_on(&path, day(17), Command::Add);
    }
    let out = run_on(&path, day(17), Command::Add);
    assert!(out.contains("earlier than the last recorded day"));
    assert!(out.contains("Level 4/5 L, streak 0🔥"));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn level_persists_between_runs_on_the_same_day() {
    let path = temp_store("persist");
    run_on(&path, day(18), Command::Add);
    run_on(&path, day(18), Command::Add);
    let out = run_on(&path, day(18), Command::Remove);
    assert!(out.contains("Level 1/5 L"));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn streak_continues_and_breaks_across_days() {
    let path = temp_store("days");
    run_on(&path, day(10), Command::Check);
    let next = run_on(&path, day(11), Command::Check);
    assert!(next.contains("streak continues: 1 days"));

    let gap = run_on(&path, day(14), Command::Check);
    assert!(gap.contains("streak reset to 0"));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn corrupt_state_file_starts_over() {
    let path = temp_store("corrupt");
    std::fs::write(&path, r#"{"waterStreak":"{not json"}"#).unwrap();
    let out = run_on(&path, day(18), Command::Status);
    assert!(out.contains("Streak:  0🔥"));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn reset_needs_confirmation() {
    let path = temp_store("reset");
    run_on(&path, day(18), Command::Add);
    let ctx = Context::open(&path, Some(day(18)));
    let mut out = Vec::new();
    assert!(run(Command::Reset { yes: false }, &ctx, &mut out).is_err());

    let cleared = run_on(&path, day(18), Command::Reset { yes: true });
    assert!(cleared.contains("cleared"));
    let status = run_on(&path, day(18), Command::Status);
    assert!(status.contains("Level:   0/5 L"));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn calendar_marks_today() {
    let path = temp_store("calendar");
    let out = run_on(&path, day(18), Command::Calendar);
    assert!(out.contains("October 2026"));
    assert!(out.contains("18<"));
    std::fs::remove_file(&path).unwrap();
}
