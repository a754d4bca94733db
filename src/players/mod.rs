//! Players: profiles, bounded components, and runtime seat state.
//!
//! ## Key Types
//!
//! - `PlayerProfile` / `MatchSetup`: Authored data handed in by the host
//! - `Component`: Bounded numeric value (health, mana)
//! - `RuntimePlayer`: Components plus the four zones of one seat

pub mod component;
pub mod profile;
pub mod runtime;

pub use component::{Component, ComponentChange, ComponentError, ComponentKind};
pub use profile::{ComponentDefaults, MatchSetup, PlayerProfile, PlayerType, SetupError};
pub use runtime::RuntimePlayer;
