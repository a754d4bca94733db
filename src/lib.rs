//! # rust-ccg-match
//!
//! Rules core of a turn-based card game: authoritative match state, validated
//! player commands, behaviour targeting and activation, and the state machine
//! that sequences a match.
//!
//! ## Design Principles
//!
//! 1. **Single Writer**: `GameController` is the only mutator of player
//!    state. Every other component reads it or reacts to events.
//!
//! 2. **Failures Are Values**: Operations return `Result`. A rejected
//!    operation never mutates state, and nothing panics on bad input.
//!
//! 3. **Closed Sets**: Behaviours, target types, events and phases are enums
//!    matched exhaustively.
//!
//! ## Architecture
//!
//! - Single-threaded and tick-driven. The host calls `MatchSession::tick`
//!   once per frame; setup loading is polled, never awaited.
//!
//! - Notifications go through an `EventBus`. Listener lifetime is tied to a
//!   `Subscription` value.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, players, commands, RNG, configuration, match timer
//! - `cards`: Behaviours, card definitions, runtime cards
//! - `zones`: Ordered card sets (deck, hand, in-play, discard)
//! - `players`: Profiles, bounded components, runtime players
//! - `events`: Game events and the event bus
//! - `effects`: Target resolution and behaviour activation
//! - `controller`: The game controller and its errors
//! - `machine`: State machine, setup loading, match session

pub mod core;
pub mod cards;
pub mod zones;
pub mod players;
pub mod events;
pub mod effects;
pub mod controller;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{
    Command, CommandRecord, EntityAllocator, EntityId, GameRng, MatchConfig, MatchOutcome,
    MatchPhase, MatchState, PlayerId, PlayerMap,
};

pub use crate::cards::{Behaviour, BehaviourKind, CardDefinition, RuntimeCard, TargetType};

pub use crate::zones::{OrderedCardSet, ZoneError, ZoneKind};

pub use crate::players::{
    Component, ComponentChange, ComponentDefaults, ComponentError, ComponentKind, MatchSetup,
    PlayerProfile, PlayerType, RuntimePlayer, SetupError,
};

pub use crate::events::{EventBus, GameEvent, Subscription};

pub use crate::effects::{ActivationError, Target, TargetError, TargetResolver};

pub use crate::controller::{ErrorKind, GameController, MatchError};

pub use crate::machine::{MatchLoader, MatchSession, MatchStateMachine, ReadyLoader};
