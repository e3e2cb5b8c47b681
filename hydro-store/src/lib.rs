//! Persistence for Hydro Streak.
//!
//! State lives in a plain string key-value store, the same shape as the
//! browser's `localStorage`:
//!
//! - `waterStreak` holds `{"count": <u32>, "lastUpdated": <date|null>}`
//! - `waterCompletedDates` holds a JSON array of "YYYY-MM-DD" dates
//! - `waterLevelToday` holds `{"level": <0-5>, "date": "YYYY-MM-DD"}`
//!
//! # Backends
//!
//! - [`MemoryStore`]: session only, also the fallback when nothing else works
//! - [`FileStore`]: a JSON object file, used by the native CLI
//! - `BrowserStore`: `window.localStorage`, behind the `web` feature
//!
//! # Usage
//!
//! ```rust
//! use hydro_store::{MemoryStore, StreakRepository};
//!
//! let repo = StreakRepository::new(MemoryStore::new());
//! let tracker = repo.load_tracker();
//! assert_eq!(tracker.streak().count, 0);
//! ```

#[cfg(feature = "web")]
mod browser;
#[cfg(not(target_arch = "wasm32"))]
mod file;
mod memory;
pub mod record;
mod repository;

#[cfg(feature = "web")]
pub use browser::BrowserStore;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
pub use memory::MemoryStore;
pub use repository::StreakRepository;

use std::fmt;

/// Key for the streak entry.
pub const STREAK_KEY: &str = "waterStreak";

/// Key for the credited-days entry.
pub const COMPLETED_DATES_KEY: &str = "waterCompletedDates";

/// Key for the glass level of the current day.
pub const LEVEL_KEY: &str = "waterLevelToday";

/// Errors from a storage backend or from decoding what it held.
#[derive(Debug)]
pub enum StoreError {
    /// The backend could not be reached at all (no window, storage disabled).
    Unavailable(String),
    Io(std::io::Error),
    /// The stored value was not what we expected.
    Parse(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StoreError::Io(e) => write!(f, "Storage I/O error: {}", e),
            StoreError::Parse(msg) => write!(f, "Stored value could not be parsed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Parse(e.to_string())
    }
}

/// A string key-value store with `localStorage` semantics.
///
/// Methods take `&self`; backends use interior mutability so a store can be
/// shared behind an `Rc` in single-threaded WASM.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
