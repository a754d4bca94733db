//! Game events.
//!
//! Everything observable that happens in a match is published as a
//! `GameEvent`. Presentation layers subscribe to render it; the state
//! machine subscribes to drive transitions. The core never depends on a
//! listener being present.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::{EntityId, MatchOutcome, MatchPhase, PlayerId};
use crate::players::{ComponentChange, ComponentKind};
use crate::zones::ZoneKind;

/// A match notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A seat was installed.
    PlayerAdded { player: PlayerId, name: String },

    /// A card entered a zone.
    CardAdded {
        player: PlayerId,
        zone: ZoneKind,
        card: EntityId,
    },

    /// A card left a zone.
    CardRemoved {
        player: PlayerId,
        zone: ZoneKind,
        card: EntityId,
    },

    /// A card moved between two zones of the same player. Published after
    /// the matching `CardRemoved` and `CardAdded`.
    CardMoved {
        player: PlayerId,
        card: EntityId,
        from: ZoneKind,
        to: ZoneKind,
    },

    /// A zone's contents or order were replaced (deck fill, shuffle).
    ZoneOrderChanged { player: PlayerId, zone: ZoneKind },

    ComponentChanged {
        player: PlayerId,
        kind: ComponentKind,
        old: i64,
        new: i64,
    },

    ComponentAtMinimum { player: PlayerId, kind: ComponentKind },

    ComponentAtMaximum { player: PlayerId, kind: ComponentKind },

    /// Periodic match timer notification.
    MatchTimerTick { elapsed: Duration },

    /// Pause/resume input.
    PauseToggled,

    StateEntered {
        phase: MatchPhase,
        from: Option<MatchPhase>,
    },

    StateExited { phase: MatchPhase, to: MatchPhase },

    /// The match has a result.
    MatchDecided { outcome: MatchOutcome },
}

impl GameEvent {
    /// Events for one component change: the change itself, then any bound
    /// it crossed into.
    #[must_use]
    pub fn from_component_change(player: PlayerId, change: &ComponentChange) -> Vec<GameEvent> {
        let mut events = vec![GameEvent::ComponentChanged {
            player,
            kind: change.kind,
            old: change.old,
            new: change.new,
        }];
        if change.reached_min() {
            events.push(GameEvent::ComponentAtMinimum {
                player,
                kind: change.kind,
            });
        }
        if change.reached_max() {
            events.push(GameEvent::ComponentAtMaximum {
                player,
                kind: change.kind,
            });
        }
        events
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::PlayerAdded { .. } => "player_added",
            GameEvent::CardAdded { .. } => "card_added",
            GameEvent::CardRemoved { .. } => "card_removed",
            GameEvent::CardMoved { .. } => "card_moved",
            GameEvent::ZoneOrderChanged { .. } => "zone_order_changed",
            GameEvent::ComponentChanged { .. } => "component_changed",
            GameEvent::ComponentAtMinimum { .. } => "component_at_minimum",
            GameEvent::ComponentAtMaximum { .. } => "component_at_maximum",
            GameEvent::MatchTimerTick { .. } => "match_timer_tick",
            GameEvent::PauseToggled => "pause_toggled",
            GameEvent::StateEntered { .. } => "state_entered",
            GameEvent::StateExited { .. } => "state_exited",
            GameEvent::MatchDecided { .. } => "match_decided",
        }
    }

    /// The player the event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::PlayerAdded { player, .. }
            | GameEvent::CardAdded { player, .. }
            | GameEvent::CardRemoved { player, .. }
            | GameEvent::CardMoved { player, .. }
            | GameEvent::ZoneOrderChanged { player, .. }
            | GameEvent::ComponentChanged { player, .. }
            | GameEvent::ComponentAtMinimum { player, .. }
            | GameEvent::ComponentAtMaximum { player, .. } => Some(*player),
            _ => None,
        }
    }
}
