//! Core engine types: entities, players, commands, RNG, configuration, match state.
//!
//! This module contains the building blocks every other module depends on.
//! It knows nothing about cards, zones or behaviours.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use entity::{EntityAllocator, EntityId};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::MatchConfig;
pub use action::{Command, CommandRecord};
pub use state::{MatchOutcome, MatchPhase, MatchState};
