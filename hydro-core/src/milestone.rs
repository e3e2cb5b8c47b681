//! Per-liter milestone cards: what each liter does for you, and when to drink it.

use crate::level::WaterLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelMilestone {
    /// Liter this card belongs to (1-5).
    pub liter: u8,
    /// Heading once unlocked, e.g. "1st liter".
    pub title: &'static str,
    /// Recommended drinking window.
    pub recommended: &'static str,
    pub benefits: &'static [&'static str],
}

impl LevelMilestone {
    /// Heading while locked, e.g. "LEVEL 1".
    pub fn locked_title(&self) -> String {
        format!("LEVEL {}", self.liter)
    }

    pub fn unlock_hint(&self) -> String {
        format!("Unlock by drinking {}L of water", self.liter)
    }

    pub fn is_unlocked(&self, reached: WaterLevel) -> bool {
        reached.liters() >= self.liter
    }
}

pub const MILESTONES: [LevelMilestone; 5] = [
    LevelMilestone {
        liter: 1,
        title: "1st liter",
        recommended: "7:00-8:30 (AM)",
        benefits: &[
            "Re-hydrates after the night → clearer thinking within 20 min",
            "Kick-starts kidney filtration, urine turns lighter",
        ],
    },
    LevelMilestone {
        liter: 2,
        title: "2nd liter",
        recommended: "10:00-11:30 (AM)",
        benefits: &[
            "Maintains plasma volume → steadier energy and heart rate through midday",
            "Supports saliva & stomach acid production → smoother digestion at lunch",
        ],
    },
    LevelMilestone {
        liter: 3,
        title: "3rd liter",
        recommended: "12:30-2:30 (PM)",
        benefits: &[
            "20-30 kcal extra thermogenesis if taken cool",
            "Noticeable appetite blunting when 300 mL is drunk 30 min pre-meal",
        ],
    },
    LevelMilestone {
        liter: 4,
        title: "4th liter",
        recommended: "5:00-6:30 (PM)",
        benefits: &[
            "Further dilutes blood urea & uric acid → kidneys work easier, risk of stones drops",
            "Synovial fluid replenished → joints feel less \"creaky\" late in the day",
            "Mood steadier; dehydration-triggered cortisol stays low",
        ],
    },
    LevelMilestone {
        liter: 5,
        title: "5th liter",
        recommended: "9:00-10:30 (PM)",
        benefits: &[
            "Supports long workouts or outdoor labor without cardiovascular strain",
            "Maximizes collagen & dermal hydration → skin elasticity improves over weeks",
            "Exercise recovery aided: better nutrient transport & waste removal",
        ],
    },
];

/// The card for a given liter, if there is one.
pub fn milestone(liter: u8) -> Option<&'static LevelMilestone> {
    MILESTONES.iter().find(|m| m.liter == liter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_card_per_liter() {
        for liter in 1..=crate::level::DAILY_GOAL_LITERS {
            assert_eq!(milestone(liter).map(|m| m.liter), Some(liter));
        }
        assert!(milestone(0).is_none());
        assert!(milestone(6).is_none());
    }

    #[test]
    fn test_unlock_follows_level() {
        let third = milestone(3).unwrap();
        assert!(!third.is_unlocked(WaterLevel::new(2)));
        assert!(third.is_unlocked(WaterLevel::new(3)));
        assert_eq!(third.locked_title(), "LEVEL 3");
        assert_eq!(third.unlock_hint(), "Unlock by drinking 3L of water");
    }
}
