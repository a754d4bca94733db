//! Entity identification system.
//!
//! Every runtime object in a match (player, card) has a unique `EntityId`.
//!
//! ## ID Layout
//!
//! IDs are allocated as follows:
//! - `0..player_count`: Reserved for players
//! - `player_count..`: Runtime cards
//!
//! The player range is fixed when the match setup is installed. Card IDs are
//! handed out by an [`EntityAllocator`] exactly once and never reused.
//!
//! ## Usage
//!
//! ```
//! use rust_ccg_match::core::{EntityAllocator, EntityId, PlayerId};
//!
//! let player_count = 2;
//! let mut alloc = EntityAllocator::new(player_count);
//!
//! let card = alloc.next_id();
//! assert!(!card.is_player(player_count));
//! assert_eq!(EntityId::player(PlayerId::new(1)).as_player(player_count), Some(PlayerId::new(1)));
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Unique identifier for any match entity.
///
/// Players and runtime cards both have EntityIds.
/// Use `is_player(player_count)` to check if an ID refers to a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Get the first entity ID available for cards.
    #[must_use]
    pub const fn first_non_player(player_count: usize) -> u32 {
        player_count as u32
    }

    /// Check if this entity ID refers to a player.
    ///
    /// ```
    /// use rust_ccg_match::core::EntityId;
    ///
    /// assert!(EntityId(1).is_player(2));
    /// assert!(!EntityId(1).is_player(1));
    /// ```
    #[must_use]
    pub const fn is_player(self, player_count: usize) -> bool {
        self.0 < player_count as u32
    }

    /// Convert to PlayerId if this is a player entity.
    ///
    /// ```
    /// use rust_ccg_match::core::{EntityId, PlayerId};
    ///
    /// assert_eq!(EntityId(2).as_player(4), Some(PlayerId::new(2)));
    /// assert_eq!(EntityId(2).as_player(2), None);
    /// ```
    #[must_use]
    pub fn as_player(self, player_count: usize) -> Option<PlayerId> {
        if self.is_player(player_count) {
            Some(PlayerId::new(self.0 as u8))
        } else {
            None
        }
    }

    /// Entity ID of a player seat.
    #[must_use]
    pub const fn player(id: PlayerId) -> Self {
        Self(id.0 as u32)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<PlayerId> for EntityId {
    fn from(id: PlayerId) -> Self {
        Self::player(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Hands out card entity IDs above the reserved player range.
#[derive(Clone, Debug)]
pub struct EntityAllocator {
    next: u32,
}

impl EntityAllocator {
    /// Create an allocator for a match with `player_count` seats.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            next: EntityId::first_non_player(player_count),
        }
    }

    /// Allocate a fresh ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// Number of IDs handed out so far, plus the player range.
    #[must_use]
    pub fn high_water_mark(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_player_2_player() {
        let player_count = 2;

        assert!(EntityId(0).is_player(player_count));
        assert!(EntityId(1).is_player(player_count));
        assert!(!EntityId(2).is_player(player_count));
        assert!(!EntityId(100).is_player(player_count));
    }

    #[test]
    fn test_as_player() {
        assert_eq!(EntityId(0).as_player(4), Some(PlayerId::new(0)));
        assert_eq!(EntityId(3).as_player(4), Some(PlayerId::new(3)));
        assert_eq!(EntityId(4).as_player(4), None);
    }

    #[test]
    fn test_player_roundtrip() {
        let entity = EntityId::from(PlayerId::new(3));
        assert_eq!(entity.raw(), 3);
        assert_eq!(entity.as_player(4), Some(PlayerId::new(3)));
    }

    #[test]
    fn test_allocator_skips_player_range() {
        let mut alloc = EntityAllocator::new(3);

        let a = alloc.next_id();
        let b = alloc.next_id();

        assert_eq!(a, EntityId(3));
        assert_eq!(b, EntityId(4));
        assert_eq!(alloc.high_water_mark(), 5);
        assert!(!a.is_player(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", EntityId(42)), "Entity(42)");
    }
}
