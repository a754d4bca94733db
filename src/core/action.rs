//! Commands: the two intents accepted from outside the rules core.
//!
//! A command names its verb and the entities it points at. The controller
//! validates and executes it; successful commands are kept as
//! `CommandRecord`s in submission order.

use serde::{Deserialize, Serialize};

use super::entity::EntityId;
use super::player::PlayerId;

/// A player intent.
///
/// ```
/// use rust_ccg_match::core::{Command, EntityId, PlayerId};
///
/// let draw = Command::draw(PlayerId::new(0));
/// let bolt = Command::use_card(PlayerId::new(1), EntityId(7)).against(EntityId(0));
///
/// assert_eq!(draw.player(), PlayerId::new(0));
/// assert_eq!(bolt.target(), Some(EntityId(0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Move the top card of the player's deck into their hand.
    DrawCard { player: PlayerId },

    /// Play a card from the player's hand, optionally at an explicit target.
    UseCard {
        player: PlayerId,
        card: EntityId,
        target: Option<EntityId>,
    },
}

impl Command {
    /// Create a draw command.
    #[must_use]
    pub fn draw(player: PlayerId) -> Self {
        Self::DrawCard { player }
    }

    /// Create a use-card command with no explicit target.
    #[must_use]
    pub fn use_card(player: PlayerId, card: EntityId) -> Self {
        Self::UseCard {
            player,
            card,
            target: None,
        }
    }

    /// Aim a use-card command at an explicit target. No effect on draws.
    #[must_use]
    pub fn against(mut self, explicit: EntityId) -> Self {
        if let Self::UseCard { target, .. } = &mut self {
            *target = Some(explicit);
        }
        self
    }

    /// The acting player.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            Self::DrawCard { player } | Self::UseCard { player, .. } => *player,
        }
    }

    /// The explicit target, if any.
    #[must_use]
    pub fn target(&self) -> Option<EntityId> {
        match self {
            Self::DrawCard { .. } => None,
            Self::UseCard { target, .. } => *target,
        }
    }

    /// Short verb for logs.
    #[must_use]
    pub fn verb(&self) -> &'static str {
        match self {
            Self::DrawCard { .. } => "draw_card",
            Self::UseCard { .. } => "use_card",
        }
    }
}

/// A command that executed successfully.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The command as submitted.
    pub command: Command,

    /// Position in the match's command history (0-based).
    pub sequence: u32,
}

impl CommandRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(command: Command, sequence: u32) -> Self {
        Self { command, sequence }
    }
}
