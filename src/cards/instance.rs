//! Runtime cards - one card instance in a match.
//!
//! A `RuntimeCard` gets its entity id once, when the owning player's deck is
//! filled, and never changes afterwards. Exactly one zone holds it at any time;
//! moving it between zones moves the value, never a copy.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::behaviour::Behaviour;
use super::definition::CardDefinition;
use crate::core::entity::EntityId;

/// Inline capacity for behaviours; authored cards rarely carry more than two.
pub type Behaviours = SmallVec<[Behaviour; 2]>;

/// A card instance in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeCard {
    id: EntityId,
    name: String,
    description: String,
    behaviours: Behaviours,
}

impl RuntimeCard {
    /// Create a card with the given id and no behaviours.
    #[must_use]
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            behaviours: SmallVec::new(),
        }
    }

    /// Instantiate a definition under a fresh id.
    #[must_use]
    pub fn from_definition(id: EntityId, definition: &CardDefinition) -> Self {
        Self {
            id,
            name: definition.name.clone(),
            description: definition.description.clone(),
            behaviours: definition.behaviours.iter().copied().collect(),
        }
    }

    /// Append a behaviour (builder pattern).
    #[must_use]
    pub fn with_behaviour(mut self, behaviour: Behaviour) -> Self {
        self.behaviours.push(behaviour);
        self
    }

    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Behaviours in activation order.
    #[must_use]
    pub fn behaviours(&self) -> &[Behaviour] {
        &self.behaviours
    }
}

impl std::fmt::Display for RuntimeCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::TargetType;

    #[test]
    fn test_from_definition() {
        let def = CardDefinition::new("Bolt")
            .with_description("zap")
            .with_behaviour(Behaviour::damage(50, TargetType::EnemyPlayers));

        let card = RuntimeCard::from_definition(EntityId(4), &def);

        assert_eq!(card.id(), EntityId(4));
        assert_eq!(card.name(), "Bolt");
        assert_eq!(card.description(), "zap");
        assert_eq!(card.behaviours(), def.behaviours.as_slice());
    }

    #[test]
    fn test_display() {
        let card = RuntimeCard::new(EntityId(9), "Spark");
        assert_eq!(card.to_string(), "Spark (Entity(9))");
    }
}
