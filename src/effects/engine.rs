//! Behaviour activation - applying a card's behaviours to resolved targets.
//!
//! Dispatch is an exhaustive match over `Behaviour`. Each behaviour pulls the
//! part of the target it needs (health for both current kinds); targets that
//! lack it are skipped, not failed. An activation succeeds when at least one
//! target was affected.

use thiserror::Error;
use tracing::{debug, warn};

use super::targeting::Target;
use crate::cards::{Behaviour, BehaviourKind};
use crate::core::{PlayerId, PlayerMap};
use crate::events::{EventBus, GameEvent};
use crate::players::{Component, ComponentChange, ComponentError, ComponentKind, RuntimePlayer};

/// Why an activation produced no effect.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActivationError {
    #[error("{kind} has no targets")]
    NoTargets { kind: BehaviourKind },

    #[error("{kind} magnitude must be positive, got {amount}")]
    InvalidMagnitude { kind: BehaviourKind, amount: i64 },

    #[error("{kind} affected none of its {attempted} targets")]
    NoTargetAffected { kind: BehaviourKind, attempted: usize },
}

/// Applies behaviours to player state.
pub(crate) struct BehaviourEngine;

impl BehaviourEngine {
    /// Activate one behaviour used by `owner` against `targets`.
    ///
    /// Returns how many targets were affected. Component notifications are
    /// published on `bus` as each target changes.
    pub(crate) fn try_activate(
        behaviour: &Behaviour,
        owner: PlayerId,
        targets: &[Target],
        players: &mut PlayerMap<RuntimePlayer>,
        bus: &EventBus,
    ) -> Result<usize, ActivationError> {
        let kind = behaviour.kind();
        if targets.is_empty() {
            return Err(ActivationError::NoTargets { kind });
        }
        let amount = behaviour.magnitude();
        if amount <= 0 {
            return Err(ActivationError::InvalidMagnitude { kind, amount });
        }

        let mut affected = 0;
        for target in targets {
            let applied = match behaviour {
                Behaviour::DamageHealth { .. } => {
                    Self::adjust_health(players, bus, *target, |health| health.decrease(amount))
                }
                Behaviour::RestoreHealth { .. } => {
                    Self::adjust_health(players, bus, *target, |health| health.increase(amount))
                }
            };
            if applied {
                affected += 1;
            }
        }

        debug!(%owner, %kind, amount, attempted = targets.len(), affected, "behaviour activated");

        if affected == 0 {
            return Err(ActivationError::NoTargetAffected {
                kind,
                attempted: targets.len(),
            });
        }
        Ok(affected)
    }

    /// Apply `change` to the target's health. Returns whether it changed.
    fn adjust_health(
        players: &mut PlayerMap<RuntimePlayer>,
        bus: &EventBus,
        target: Target,
        change: impl FnOnce(&mut Component) -> Result<ComponentChange, ComponentError>,
    ) -> bool {
        let player = match target {
            Target::Player(player) => player,
            Target::Card { card, .. } => {
                debug!(%card, "target has no health, skipped");
                return false;
            }
        };

        let Some(health) = players
            .try_get_mut(player)
            .and_then(|p| p.component_mut(ComponentKind::Health))
        else {
            debug!(%player, "target has no health, skipped");
            return false;
        };

        match change(health) {
            Ok(changed) => {
                for event in GameEvent::from_component_change(player, &changed) {
                    bus.publish(&event);
                }
                true
            }
            Err(err) if err.is_no_op() => {
                debug!(%player, %err, "health unchanged");
                false
            }
            Err(err) => {
                warn!(%player, %err, "health change rejected");
                false
            }
        }
    }
}
