//! Collapsible month calendar. Collapsed it shows today's date; expanded it
//! shows the month with today ringed and credited days in green.

use crate::state::AppState;
use dioxus::prelude::*;
use hydro_core::calendar::{CalendarCell, MonthCalendar, WEEKDAY_LABELS};

fn cell_style(cell: &CalendarCell) -> &'static str {
    match (cell.is_today, cell.is_completed) {
        (true, true) => "width: 24px; height: 24px; border-radius: 9999px; display: flex; align-items: center; justify-content: center; font-size: 12px; border: 2px solid #3B82F6; background: #22C55E; color: white;",
        (true, false) => "width: 24px; height: 24px; border-radius: 9999px; display: flex; align-items: center; justify-content: center; font-size: 12px; border: 2px solid #3B82F6; background: #F3F4F6;",
        (false, true) => "width: 24px; height: 24px; border-radius: 9999px; display: flex; align-items: center; justify-content: center; font-size: 12px; background: #22C55E; color: white;",
        (false, false) => "width: 24px; height: 24px; border-radius: 9999px; display: flex; align-items: center; justify-content: center; font-size: 12px; background: #F3F4F6;",
    }
}

#[component]
pub fn CalendarWidget() -> Element {
    let state = use_context::<AppState>();
    let expanded = (state.calendar_expanded)();
    let today = (state.today)();
    let calendar = MonthCalendar::for_date(today, state.tracker.read().completed());
    let heading = today.format("%-m/%-d/%Y").to_string();
    let title = calendar.title();
    let completed = calendar.completed_count();
    let blanks = calendar.leading_blanks;
    let cells: Vec<(String, u32, &'static str)> = calendar
        .days
        .iter()
        .map(|cell| (cell.date.to_string(), cell.day(), cell_style(cell)))
        .collect();

    let size = if expanded {
        "width: 256px; min-height: 256px;"
    } else {
        "width: 128px; height: 32px; overflow: hidden;"
    };

    rsx! {
        div {
            style: "position: absolute; top: 16px; right: 128px; z-index: 50; background: white; border-radius: 8px; padding: 4px 12px; box-shadow: 0 4px 12px rgba(0,0,0,0.15); cursor: pointer; transition: all 0.3s; {size}",
            onclick: move |_| state.toggle_calendar(),
            div {
                style: "text-align: center; font-weight: bold; color: #374151; margin-bottom: 8px;",
                "{heading}"
            }
            if expanded {
                div {
                    p {
                        style: "margin: 0 0 4px 0; font-size: 12px; color: #6B7280; text-align: center;",
                        "{title}: {completed} full glasses"
                    }
                    div {
                        style: "display: grid; grid-template-columns: repeat(7, 1fr); gap: 4px; font-size: 12px; color: #6B7280; text-align: center; margin-bottom: 4px;",
                        for (i, label) in WEEKDAY_LABELS.iter().enumerate() {
                            div { key: "{i}", "{label}" }
                        }
                    }
                    div {
                        style: "display: grid; grid-template-columns: repeat(7, 1fr); gap: 4px;",
                        for i in 0..blanks {
                            div { key: "blank-{i}" }
                        }
                        for (key, day, style) in cells {
                            div {
                                key: "{key}",
                                style: "{style}",
                                "{day}"
                            }
                        }
                    }
                }
            }
        }
    }
}
