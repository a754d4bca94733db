//! Match progression: setup loading, phase handlers, and the session that
//! ties them to the controller.
//!
//! ## Key Types
//!
//! - `MatchLoader`: Polled source of match setup data
//! - `MatchStateHandler`: Enter/exit/update for one phase
//! - `MatchStateMachine`: Runs the handlers and applies transitions
//! - `MatchSession`: Owns bus, controller, timer and machine for one match

pub mod loader;
pub mod session;
pub mod state_machine;
pub mod states;

pub use loader::{MatchLoader, ReadyLoader};
pub use session::MatchSession;
pub use state_machine::MatchStateMachine;
pub use states::{GameOver, InMatch, Initializing, MatchContext, MatchStateHandler, Paused};
