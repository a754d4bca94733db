//! Match-scoped state: the current phase, the outcome, and the match timer.
//!
//! ## MatchPhase
//!
//! The logical phase the state machine is in. The controller only accepts
//! gameplay operations in `InMatch`.
//!
//! ## MatchState
//!
//! Runtime data of one match (not the logical state machine): elapsed time
//! and the timer notifications derived from it. Created at match start and
//! dropped at match end.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::player::PlayerId;

/// Phase of the match state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Waiting for match setup (profiles, cards) to finish loading.
    Initializing,
    /// Match running; commands are accepted.
    InMatch,
    /// Match suspended; the timer does not advance.
    Paused,
    /// Terminal.
    GameOver,
}

impl MatchPhase {
    /// All phases in lifecycle order.
    pub const ALL: [MatchPhase; 4] = [
        MatchPhase::Initializing,
        MatchPhase::InMatch,
        MatchPhase::Paused,
        MatchPhase::GameOver,
    ];

    /// Check if this is the terminal phase.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == MatchPhase::GameOver
    }
}

impl std::fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MatchPhase::Initializing => "initializing",
            MatchPhase::InMatch => "in match",
            MatchPhase::Paused => "paused",
            MatchPhase::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Exactly one player is still standing.
    Winner(PlayerId),
    /// Nobody is left standing.
    Draw,
    /// The match never started (setup failed).
    Aborted,
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Winner(player) => write!(f, "{player} wins"),
            MatchOutcome::Draw => f.write_str("draw"),
            MatchOutcome::Aborted => f.write_str("aborted"),
        }
    }
}

/// Elapsed match time with periodic tick notifications.
///
/// ```
/// use rust_ccg_match::core::MatchState;
/// use std::time::Duration;
///
/// let mut state = MatchState::new(Duration::from_secs(1));
/// assert_eq!(state.tick(Duration::from_millis(600)), None);
/// assert_eq!(state.tick(Duration::from_millis(600)), Some(Duration::from_millis(1200)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchState {
    elapsed: Duration,
    last_signal: Duration,
    interval: Duration,
}

impl MatchState {
    /// Create a timer that signals every `interval` of match time.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            last_signal: Duration::ZERO,
            interval,
        }
    }

    /// Total match time advanced so far.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Advance the timer by `dt`.
    ///
    /// Returns the elapsed time when at least one interval passed since the
    /// previous signal.
    pub fn tick(&mut self, dt: Duration) -> Option<Duration> {
        self.elapsed += dt;

        if self.elapsed - self.last_signal >= self.interval {
            self.last_signal = self.elapsed;
            Some(self.elapsed)
        } else {
            None
        }
    }
}
