//! Card definitions - authored card data.
//!
//! `CardDefinition` is what a player's profile lists: name, description and
//! the behaviours the card applies. The controller turns each definition into
//! a `RuntimeCard` with a fresh entity id when decks are filled.

use serde::{Deserialize, Serialize};

use super::behaviour::Behaviour;

/// Static card definition.
///
/// ## Example
///
/// ```
/// use rust_ccg_match::cards::{Behaviour, CardDefinition, TargetType};
///
/// let bolt = CardDefinition::new("Bolt")
///     .with_description("Deals 50 damage to every enemy")
///     .with_behaviour(Behaviour::damage(50, TargetType::EnemyPlayers));
///
/// assert_eq!(bolt.behaviours.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Card name (for display/debugging).
    pub name: String,

    /// Rules text.
    #[serde(default)]
    pub description: String,

    /// Behaviours applied in order when the card is used.
    pub behaviours: Vec<Behaviour>,
}

impl CardDefinition {
    /// Create a definition with no description and no behaviours.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            behaviours: Vec::new(),
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a behaviour (builder pattern).
    #[must_use]
    pub fn with_behaviour(mut self, behaviour: Behaviour) -> Self {
        self.behaviours.push(behaviour);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::TargetType;

    #[test]
    fn test_card_definition_builder() {
        let card = CardDefinition::new("Drain")
            .with_description("Hit and heal")
            .with_behaviour(Behaviour::damage(10, TargetType::EnemyPlayers))
            .with_behaviour(Behaviour::restore(10, TargetType::OwnerPlayer));

        assert_eq!(card.name, "Drain");
        assert_eq!(card.description, "Hit and heal");
        assert_eq!(card.behaviours[1].target_type(), TargetType::OwnerPlayer);
    }

    #[test]
    fn test_description_is_optional_in_json() {
        let json = r#"{
            "name": "Bolt",
            "behaviours": [{ "kind": "damage_health", "amount": 3, "target": "EnemyPlayers" }]
        }"#;
        let card: CardDefinition = serde_json::from_str(json).unwrap();

        assert_eq!(card.description, "");
        assert_eq!(card.behaviours[0].magnitude(), 3);
    }
}
