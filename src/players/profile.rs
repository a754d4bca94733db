//! Player profiles and match setup data.
//!
//! A `MatchSetup` is what the host's loader produces: one `PlayerProfile`
//! per seat, in seat order. It is validated once, when the controller
//! installs the players.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{BehaviourKind, CardDefinition, TargetType};

/// Who drives a seat. The engine only stores the tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerType {
    #[default]
    LocalHuman,
    LocalAi,
}

/// Starting values for a player's components. Minimums are 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentDefaults {
    pub max_health: i64,
    pub current_health: i64,
    pub max_mana: i64,
    pub current_mana: i64,
}

impl Default for ComponentDefaults {
    fn default() -> Self {
        Self {
            max_health: 100,
            current_health: 100,
            max_mana: 10,
            current_mana: 10,
        }
    }
}

impl ComponentDefaults {
    /// Full health at `max` (builder pattern).
    #[must_use]
    pub fn with_health(mut self, max: i64) -> Self {
        self.max_health = max;
        self.current_health = max;
        self
    }

    /// Full mana at `max` (builder pattern).
    #[must_use]
    pub fn with_mana(mut self, max: i64) -> Self {
        self.max_mana = max;
        self.current_mana = max;
        self
    }
}

/// One seat's authored data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,

    #[serde(default)]
    pub player_type: PlayerType,

    #[serde(default)]
    pub components: ComponentDefaults,

    /// Cards in deck order before shuffling.
    pub deck: Vec<CardDefinition>,
}

impl PlayerProfile {
    /// Create a human profile with default components and an empty deck.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            player_type: PlayerType::LocalHuman,
            components: ComponentDefaults::default(),
            deck: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_type(mut self, player_type: PlayerType) -> Self {
        self.player_type = player_type;
        self
    }

    #[must_use]
    pub fn with_components(mut self, components: ComponentDefaults) -> Self {
        self.components = components;
        self
    }

    /// Append `copies` of a card to the deck.
    #[must_use]
    pub fn with_card(mut self, card: CardDefinition, copies: usize) -> Self {
        self.deck.extend(std::iter::repeat(card).take(copies));
        self
    }
}

/// Why match setup data was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("match setup has no players")]
    NoPlayers,

    #[error("match setup has {0} players, at most 255 are supported")]
    TooManyPlayers(usize),

    #[error("player at seat {seat} has no name")]
    UnnamedPlayer { seat: usize },

    #[error("player {player:?} has an empty deck")]
    EmptyDeck { player: String },

    #[error("card {index} in {player:?}'s deck has no name")]
    UnnamedCard { player: String, index: usize },

    #[error("card {card:?} in {player:?}'s deck has no behaviours")]
    CardWithoutBehaviours { player: String, card: String },

    #[error("card {card:?} in {player:?}'s deck uses {behaviour} on unsupported target {target:?}")]
    UnsupportedTarget {
        player: String,
        card: String,
        behaviour: BehaviourKind,
        target: TargetType,
    },

    #[error("player {player:?} has invalid {component} defaults ({current}/{max})")]
    InvalidComponents {
        player: String,
        component: &'static str,
        current: i64,
        max: i64,
    },

    #[error("match setup failed to load: {0}")]
    LoadFailed(String),
}

/// Everything needed to start a match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSetup {
    pub players: Vec<PlayerProfile>,
}

impl MatchSetup {
    #[must_use]
    pub fn new(players: Vec<PlayerProfile>) -> Self {
        Self { players }
    }

    /// Check the setup before any player is installed.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.players.is_empty() {
            return Err(SetupError::NoPlayers);
        }
        if self.players.len() > usize::from(u8::MAX) {
            return Err(SetupError::TooManyPlayers(self.players.len()));
        }

        for (seat, profile) in self.players.iter().enumerate() {
            if profile.name.trim().is_empty() {
                return Err(SetupError::UnnamedPlayer { seat });
            }
            if profile.deck.is_empty() {
                return Err(SetupError::EmptyDeck {
                    player: profile.name.clone(),
                });
            }

            for (index, card) in profile.deck.iter().enumerate() {
                if card.name.trim().is_empty() {
                    return Err(SetupError::UnnamedCard {
                        player: profile.name.clone(),
                        index,
                    });
                }
                if card.behaviours.is_empty() {
                    return Err(SetupError::CardWithoutBehaviours {
                        player: profile.name.clone(),
                        card: card.name.clone(),
                    });
                }
                if let Some(behaviour) = card.behaviours.iter().find(|b| !b.supports_target()) {
                    return Err(SetupError::UnsupportedTarget {
                        player: profile.name.clone(),
                        card: card.name.clone(),
                        behaviour: behaviour.kind(),
                        target: behaviour.target_type(),
                    });
                }
            }

            let c = &profile.components;
            for (component, current, max) in [
                ("health", c.current_health, c.max_health),
                ("mana", c.current_mana, c.max_mana),
            ] {
                if current < 0 || current > max {
                    return Err(SetupError::InvalidComponents {
                        player: profile.name.clone(),
                        component,
                        current,
                        max,
                    });
                }
            }
        }

        Ok(())
    }

    /// Total cards across all decks.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.players.iter().map(|p| p.deck.len()).sum()
    }
}
