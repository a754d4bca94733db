//! Target resolution.
//!
//! Turns a behaviour's `TargetType` plus an optional explicit target id into
//! the concrete entities the behaviour applies to. Resolution only reads
//! player state.

use smallvec::SmallVec;
use thiserror::Error;

use crate::cards::TargetType;
use crate::core::{EntityId, PlayerId, PlayerMap};
use crate::players::RuntimePlayer;
use crate::zones::ZoneKind;

/// A resolved target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Player(PlayerId),
    /// A card together with the player whose zone holds it.
    Card { owner: PlayerId, card: EntityId },
}

/// Resolved targets in application order.
pub type Targets = SmallVec<[Target; 4]>;

/// Why an explicit target was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("unknown owner {0}")]
    UnknownOwner(PlayerId),

    #[error("{owner} cannot redirect an owner-targeted behaviour to {target}")]
    OwnerRedirect { owner: PlayerId, target: EntityId },

    #[error("{owner} cannot target itself with an enemy behaviour")]
    SelfTarget { owner: PlayerId },

    #[error("no player with id {0}")]
    UnknownPlayer(EntityId),

    #[error("enemy-card behaviour needs an explicit card target")]
    MissingCard,

    #[error("{card} is not in an enemy's in-play zone")]
    CardNotInPlay { card: EntityId },
}

/// Resolves targets against the current players.
pub struct TargetResolver;

impl TargetResolver {
    /// Resolve targets for one behaviour used by `owner`.
    ///
    /// `Ok` with an empty list means there was nothing to hit (an enemy
    /// broadcast in a one-player match).
    pub fn resolve(
        players: &PlayerMap<RuntimePlayer>,
        owner: PlayerId,
        target_type: TargetType,
        explicit: Option<EntityId>,
    ) -> Result<Targets, TargetError> {
        if !players.contains(owner) {
            return Err(TargetError::UnknownOwner(owner));
        }
        let owner_entity = EntityId::player(owner);

        match target_type {
            TargetType::OwnerPlayer => match explicit {
                Some(target) if target != owner_entity => {
                    Err(TargetError::OwnerRedirect { owner, target })
                }
                _ => Ok(smallvec::smallvec![Target::Player(owner)]),
            },

            TargetType::EnemyPlayers => match explicit {
                Some(target) if target == owner_entity => Err(TargetError::SelfTarget { owner }),
                Some(target) => {
                    let player = target
                        .as_player(players.player_count())
                        .ok_or(TargetError::UnknownPlayer(target))?;
                    Ok(smallvec::smallvec![Target::Player(player)])
                }
                None => Ok(players
                    .player_ids()
                    .filter(|&p| p != owner)
                    .map(Target::Player)
                    .collect()),
            },

            TargetType::EnemyCard => {
                let card = explicit.ok_or(TargetError::MissingCard)?;
                players
                    .iter()
                    .filter(|(p, _)| *p != owner)
                    .find(|(_, player)| player.zone(ZoneKind::InPlay).contains(card))
                    .map(|(enemy, _)| smallvec::smallvec![Target::Card { owner: enemy, card }])
                    .ok_or(TargetError::CardNotInPlay { card })
            }
        }
    }
}
