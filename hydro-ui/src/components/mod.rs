//! Dioxus RSX components for the Hydro Streak app.

mod calendar_widget;
mod congrats_overlay;
mod glass;
mod level_cards;
mod storage_notice;
mod streak_badge;

pub use calendar_widget::CalendarWidget;
pub use congrats_overlay::CongratsOverlay;
pub use glass::Glass;
pub use level_cards::{LevelCard, LevelPanel};
pub use storage_notice::StorageNotice;
pub use streak_badge::StreakBadge;
