//! Zone system for card locations.
//!
//! Each player owns one `OrderedCardSet` per `ZoneKind` (deck, hand, in-play,
//! discard). A card id lives in exactly one set across the whole match.
//!
//! ## Key Types
//!
//! - `ZoneKind`: The four zones every player has
//! - `OrderedCardSet`: Keyed, insertion-ordered card storage
//! - `ZoneError`: Why an add/remove/transfer was rejected

pub mod card_set;
pub mod kind;

pub use card_set::{OrderedCardSet, ZoneError};
pub use kind::ZoneKind;
