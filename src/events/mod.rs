//! Match notifications.
//!
//! ## Key Types
//!
//! - `GameEvent`: Closed set of everything observable in a match
//! - `EventBus`: Synchronous publish/subscribe, registration order
//! - `Subscription`: Scoped registration; drop to unregister

pub mod bus;
pub mod event;

pub use bus::{EventBus, ListenerId, Subscription};
pub use event::GameEvent;
