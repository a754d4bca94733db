//! Match configuration.
//!
//! The host hands a `MatchConfig` to the controller at construction. It holds
//! the rule constants that are not part of any player's profile.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Match-wide rule constants.
///
/// ```
/// use rust_ccg_match::core::MatchConfig;
///
/// let config = MatchConfig::default().with_hand_slots(7).with_seed(9);
/// assert_eq!(config.hand_slots, 7);
/// assert_eq!(config.timer_interval().as_millis(), 1000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Maximum cards a hand holds. Drawing into a full hand is rejected.
    pub hand_slots: usize,

    /// Elapsed match time between two timer notifications, in milliseconds.
    pub timer_interval_ms: u64,

    /// Seed for deck shuffles. Same seed and same setup give the same decks.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            hand_slots: 5,
            timer_interval_ms: 1000,
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Set the hand capacity.
    #[must_use]
    pub fn with_hand_slots(mut self, slots: usize) -> Self {
        self.hand_slots = slots;
        self
    }

    /// Set the timer notification interval.
    #[must_use]
    pub fn with_timer_interval(mut self, interval: Duration) -> Self {
        self.timer_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Timer notification interval as a `Duration`.
    #[must_use]
    pub fn timer_interval(&self) -> Duration {
        Duration::from_millis(self.timer_interval_ms)
    }
}
