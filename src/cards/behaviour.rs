//! Card behaviours - the effects a card applies when used.
//!
//! A behaviour pairs a kind (what it does) with a magnitude and a target
//! type (who it applies to). Both are fixed when the card is authored; a
//! runtime card only exposes them read-only.

use serde::{Deserialize, Serialize};

/// Rule for selecting which entities a behaviour applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetType {
    /// The player who used the card. Cannot be redirected.
    OwnerPlayer,
    /// One named enemy, or every enemy when no target is named.
    EnemyPlayers,
    /// A named card in an enemy's in-play zone.
    EnemyCard,
}

/// Kind tag of a behaviour, for logs and data tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BehaviourKind {
    DamageHealth,
    RestoreHealth,
}

/// A declared card effect.
///
/// ```
/// use rust_ccg_match::cards::{Behaviour, BehaviourKind, TargetType};
///
/// let bolt = Behaviour::damage(50, TargetType::EnemyPlayers);
/// assert_eq!(bolt.kind(), BehaviourKind::DamageHealth);
/// assert_eq!(bolt.magnitude(), 50);
/// assert_eq!(bolt.target_type(), TargetType::EnemyPlayers);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Behaviour {
    /// Reduce the targets' health, clamped at its minimum.
    DamageHealth { amount: i64, target: TargetType },

    /// Raise the targets' health, clamped at its maximum.
    RestoreHealth { amount: i64, target: TargetType },
}

impl Behaviour {
    /// Create a damage-health behaviour.
    #[must_use]
    pub fn damage(amount: i64, target: TargetType) -> Self {
        Self::DamageHealth { amount, target }
    }

    /// Create a restore-health behaviour.
    #[must_use]
    pub fn restore(amount: i64, target: TargetType) -> Self {
        Self::RestoreHealth { amount, target }
    }

    /// The behaviour's kind tag.
    #[must_use]
    pub fn kind(&self) -> BehaviourKind {
        match self {
            Self::DamageHealth { .. } => BehaviourKind::DamageHealth,
            Self::RestoreHealth { .. } => BehaviourKind::RestoreHealth,
        }
    }

    /// The behaviour's magnitude.
    #[must_use]
    pub fn magnitude(&self) -> i64 {
        match self {
            Self::DamageHealth { amount, .. } | Self::RestoreHealth { amount, .. } => *amount,
        }
    }

    /// How targets are selected.
    #[must_use]
    pub fn target_type(&self) -> TargetType {
        match self {
            Self::DamageHealth { target, .. } | Self::RestoreHealth { target, .. } => *target,
        }
    }

    /// Whether the target type names something this behaviour can act on.
    ///
    /// Health behaviours need players; cards expose no health.
    #[must_use]
    pub fn supports_target(&self) -> bool {
        match (self, self.target_type()) {
            (
                Self::DamageHealth { .. } | Self::RestoreHealth { .. },
                TargetType::OwnerPlayer | TargetType::EnemyPlayers,
            ) => true,
            (Self::DamageHealth { .. } | Self::RestoreHealth { .. }, TargetType::EnemyCard) => false,
        }
    }
}

impl std::fmt::Display for BehaviourKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BehaviourKind::DamageHealth => f.write_str("damage-health"),
            BehaviourKind::RestoreHealth => f.write_str("restore-health"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_accessors() {
        let heal = Behaviour::restore(20, TargetType::OwnerPlayer);

        assert_eq!(heal.kind(), BehaviourKind::RestoreHealth);
        assert_eq!(heal.magnitude(), 20);
        assert_eq!(heal.target_type(), TargetType::OwnerPlayer);
        assert_eq!(heal.kind().to_string(), "restore-health");
    }

    #[test]
    fn test_health_behaviours_need_player_targets() {
        assert!(Behaviour::damage(5, TargetType::EnemyPlayers).supports_target());
        assert!(Behaviour::restore(5, TargetType::OwnerPlayer).supports_target());
        assert!(!Behaviour::damage(5, TargetType::EnemyCard).supports_target());
        assert!(!Behaviour::restore(5, TargetType::EnemyCard).supports_target());
    }

    #[test]
    fn test_behaviour_json_shape() {
        let json = r#"{ "kind": "damage_health", "amount": 50, "target": "EnemyPlayers" }"#;
        let behaviour: Behaviour = serde_json::from_str(json).unwrap();

        assert_eq!(behaviour, Behaviour::damage(50, TargetType::EnemyPlayers));
    }
}
