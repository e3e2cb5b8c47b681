//! Shared Dioxus components for the Hydro Streak web app.
//!
//! This crate provides:
//! - `timer`: `setTimeout` as a Rust future via `js_sys::Promise`
//! - `state`: Reactive AppState with Dioxus Signals, plus the water intents
//! - `components`: RSX components (streak badge, glass, level cards, calendar, overlay)

pub mod components;
pub mod state;
pub mod timer;
