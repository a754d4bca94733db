//! Card system: behaviours, definitions, and runtime instances.
//!
//! ## Key Types
//!
//! - `Behaviour`: Closed set of card effects (damage, restore)
//! - `TargetType`: How a behaviour picks its targets
//! - `CardDefinition`: Authored card data from a player profile
//! - `RuntimeCard`: A card instance with its match-unique id

pub mod behaviour;
pub mod definition;
pub mod instance;

pub use behaviour::{Behaviour, BehaviourKind, TargetType};
pub use definition::CardDefinition;
pub use instance::{Behaviours, RuntimeCard};
