//! Behaviour targeting and activation.
//!
//! - `TargetResolver`: Turns a target type and optional explicit id into
//!   concrete targets
//! - `BehaviourEngine`: Applies a behaviour to those targets
//!
//! Both are stateless. They read and write the player map handed to them and
//! publish component notifications on the bus they are given.
//!
//! Activation mutates player state, so only the controller reaches it:
//!
//! ```compile_fail
//! use rust_ccg_match::effects::BehaviourEngine;
//! ```

mod engine;
mod targeting;

pub use engine::ActivationError;
pub(crate) use engine::BehaviourEngine;
pub use targeting::{Target, TargetError, TargetResolver, Targets};
