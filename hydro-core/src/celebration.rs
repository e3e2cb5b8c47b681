//! The congratulations overlay shown when a new level is reached.
//!
//! A `Celebration` is displayed for one fixed display cycle. The UI shows it
//! through a `Notifier`, starts a timer for `CELEBRATION_DISPLAY_MS`, and
//! dismisses with the token it got back. A stale token (from a celebration that
//! was already replaced) does nothing.

use crate::level::WaterLevel;

/// How long the overlay stays up, in milliseconds.
pub const CELEBRATION_DISPLAY_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Celebration {
    /// The level that was just reached.
    pub level: WaterLevel,
    /// Streak count after the level was applied.
    pub streak_count: u32,
}

impl Celebration {
    pub fn headline(&self) -> String {
        format!("You've reached Level {}!", self.level)
    }

    /// The streak line is only shown for a full glass with a running streak.
    pub fn shows_streak(&self) -> bool {
        self.level.is_full() && self.streak_count > 0
    }

    pub fn streak_line(&self) -> Option<String> {
        self.shows_streak()
            .then(|| format!("🔥 {} day streak! Keep it up!", self.streak_count))
    }
}

/// Identifies one `Notifier::show` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifierToken(u64);

/// Holds at most one active celebration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notifier {
    active: Option<Celebration>,
    generation: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is showing with `celebration`.
    pub fn show(&mut self, celebration: Celebration) -> NotifierToken {
        self.generation += 1;
        self.active = Some(celebration);
        log::debug!("celebration {} shown: level {}", self.generation, celebration.level);
        NotifierToken(self.generation)
    }

    /// Clear the overlay if `token` still names the active celebration.
    pub fn dismiss(&mut self, token: NotifierToken) -> bool {
        if token.0 != self.generation || self.active.is_none() {
            return false;
        }
        self.active = None;
        true
    }

    pub fn current(&self) -> Option<&Celebration> {
        self.active.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn celebration(level: u8, streak_count: u32) -> Celebration {
        Celebration {
            level: WaterLevel::new(level),
            streak_count,
        }
    }

    #[test]
    fn test_streak_line_only_for_full_glass() {
        assert_eq!(celebration(3, 4).streak_line(), None);
        assert_eq!(celebration(5, 0).streak_line(), None);
        assert_eq!(
            celebration(5, 4).streak_line().as_deref(),
            Some("🔥 4 day streak! Keep it up!")
        );
        assert_eq!(celebration(2, 0).headline(), "You've reached Level 2!");
    }

    #[test]
    fn test_dismiss_clears_current() {
        let mut notifier = Notifier::new();
        let token = notifier.show(celebration(1, 0));
        assert_eq!(notifier.current(), Some(&celebration(1, 0)));
        assert!(notifier.dismiss(token));
        assert_eq!(notifier.current(), None);
        assert!(!notifier.dismiss(token));
    }

    #[test]
    fn test_stale_token_does_not_clear_newer_celebration() {
        let mut notifier = Notifier::new();
        let first = notifier.show(celebration(1, 0));
        let second = notifier.show(celebration(2, 0));
        assert!(!notifier.dismiss(first));
        assert_eq!(notifier.current(), Some(&celebration(2, 0)));
        assert!(notifier.dismiss(second));
    }
}
