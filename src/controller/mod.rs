//! Game controller: the only entry point that mutates match state.
//!
//! ## Key Types
//!
//! - `GameController`: Deck setup, draw, use-card, command execution
//! - `MatchError`: Why an operation was rejected
//! - `ErrorKind`: Failure class, used to pick the log level

pub mod error;
pub mod game;

pub use error::{ErrorKind, MatchError};
pub use game::GameController;
