//! Controller errors and how loudly each one is logged.
//!
//! Every controller operation returns `Result<_, MatchError>`. `kind()`
//! sorts a failure into one of five classes; `log()` picks the tracing level
//! from that class, so expected gameplay outcomes (empty deck, full hand,
//! health already at minimum) never show up as errors.

use thiserror::Error;
use tracing::{debug, error, warn};

use crate::cards::BehaviourKind;
use crate::core::{EntityId, MatchPhase, PlayerId};
use crate::effects::{ActivationError, TargetError};
use crate::players::{ComponentError, SetupError};
use crate::zones::{ZoneError, ZoneKind};

/// Failure class of a `MatchError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Operation attempted in the wrong phase or order.
    IllegalState,
    /// A referenced player or card does not exist where expected.
    NotFound,
    /// The requested target is not allowed for the behaviour.
    IllegalTarget,
    /// Caller bug or bad data: duplicate ids, missing ids, bad magnitudes.
    InvariantViolation,
    /// Expected outcome with no effect.
    NoOp,
}

/// Why a controller operation was rejected. Rejections never mutate state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("{operation} is not allowed while {phase}")]
    IllegalPhase {
        operation: &'static str,
        phase: MatchPhase,
    },

    #[error("players are already installed")]
    PlayersAlreadyInstalled,

    #[error("decks have not been filled")]
    DecksNotInitialized,

    #[error("decks were already filled this match")]
    DecksAlreadyInitialized,

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("{card} is not in {player}'s {zone}")]
    CardNotInZone {
        player: PlayerId,
        card: EntityId,
        zone: ZoneKind,
    },

    #[error("{0}'s deck is empty")]
    DeckEmpty(PlayerId),

    #[error("{player}'s hand is full ({slots} cards)")]
    HandFull { player: PlayerId, slots: usize },

    #[error("{behaviour} on {card} has no valid target")]
    NoValidTarget {
        card: EntityId,
        behaviour: BehaviourKind,
    },

    #[error(transparent)]
    Zone(#[from] ZoneError),

    #[error(transparent)]
    Component(#[from] ComponentError),

    #[error(transparent)]
    Target(#[from] TargetError),

    #[error(transparent)]
    Activation(#[from] ActivationError),

    #[error(transparent)]
    Setup(#[from] SetupError),
}

impl MatchError {
    /// Failure class.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatchError::IllegalPhase { .. }
            | MatchError::PlayersAlreadyInstalled
            | MatchError::DecksNotInitialized
            | MatchError::DecksAlreadyInitialized => ErrorKind::IllegalState,

            MatchError::UnknownPlayer(_) | MatchError::CardNotInZone { .. } => ErrorKind::NotFound,

            MatchError::DeckEmpty(_) | MatchError::HandFull { .. } => ErrorKind::NoOp,

            MatchError::NoValidTarget { .. } => ErrorKind::IllegalTarget,

            MatchError::Zone(ZoneError::Full { .. }) => ErrorKind::NoOp,
            MatchError::Zone(_) => ErrorKind::InvariantViolation,

            MatchError::Component(err) if err.is_no_op() => ErrorKind::NoOp,
            MatchError::Component(_) => ErrorKind::InvariantViolation,

            MatchError::Target(TargetError::UnknownOwner(_) | TargetError::UnknownPlayer(_)) => {
                ErrorKind::NotFound
            }
            MatchError::Target(_) => ErrorKind::IllegalTarget,

            MatchError::Activation(ActivationError::NoTargetAffected { .. }) => ErrorKind::NoOp,
            MatchError::Activation(ActivationError::NoTargets { .. }) => ErrorKind::IllegalTarget,
            MatchError::Activation(ActivationError::InvalidMagnitude { .. }) => {
                ErrorKind::InvariantViolation
            }

            MatchError::Setup(_) => ErrorKind::InvariantViolation,
        }
    }

    /// Expected gameplay outcome rather than a fault.
    #[must_use]
    pub fn is_no_op(&self) -> bool {
        self.kind() == ErrorKind::NoOp
    }

    /// Log this failure at the level its kind calls for.
    pub fn log(&self, operation: &str) {
        let kind = self.kind();
        match kind {
            ErrorKind::InvariantViolation => error!(operation, ?kind, error = %self, "operation rejected"),
            ErrorKind::IllegalState | ErrorKind::NotFound | ErrorKind::IllegalTarget => {
                warn!(operation, ?kind, error = %self, "operation rejected")
            }
            ErrorKind::NoOp => debug!(operation, error = %self, "operation had no effect"),
        }
    }
}
