//! Zone kinds.
//!
//! Every player owns exactly one card set of each kind.

use serde::{Deserialize, Serialize};

/// A named zone a player's cards can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZoneKind {
    Deck,
    Hand,
    InPlay,
    Discard,
}

impl ZoneKind {
    /// All kinds, in storage order.
    pub const ALL: [ZoneKind; 4] = [
        ZoneKind::Deck,
        ZoneKind::Hand,
        ZoneKind::InPlay,
        ZoneKind::Discard,
    ];

    /// Storage index of this kind.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            ZoneKind::Deck => 0,
            ZoneKind::Hand => 1,
            ZoneKind::InPlay => 2,
            ZoneKind::Discard => 3,
        }
    }
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ZoneKind::Deck => "deck",
            ZoneKind::Hand => "hand",
            ZoneKind::InPlay => "in-play",
            ZoneKind::Discard => "discard",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, kind) in ZoneKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }
}
