//! Ordered card sets - the storage behind every zone.
//!
//! An `OrderedCardSet` owns the `RuntimeCard`s in one zone of one player.
//! Cards are keyed by entity id and kept in insertion order; only `shuffle`
//! and `overwrite` reorder them.
//!
//! Failures are values (`ZoneError`), never panics. The set itself does not
//! log; callers decide how loud a failure is.

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::kind::ZoneKind;
use crate::cards::RuntimeCard;
use crate::core::entity::EntityId;
use crate::core::rng::GameRng;

/// Why a card-set operation was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ZoneError {
    #[error("{card} is already in the {zone}")]
    Duplicate { zone: ZoneKind, card: EntityId },

    #[error("{card} is not in the {zone}")]
    Missing { zone: ZoneKind, card: EntityId },

    #[error("the {zone} is full ({capacity} cards)")]
    Full { zone: ZoneKind, capacity: usize },

    #[error("{card} cannot move from the {zone} to itself")]
    SameZone { zone: ZoneKind, card: EntityId },
}

/// Keyed, order-preserving collection of runtime cards.
///
/// ## Usage
///
/// ```
/// use rust_ccg_match::cards::RuntimeCard;
/// use rust_ccg_match::core::EntityId;
/// use rust_ccg_match::zones::{OrderedCardSet, ZoneKind};
///
/// let mut hand = OrderedCardSet::new(ZoneKind::Hand);
/// hand.try_add_card(RuntimeCard::new(EntityId(10), "Bolt")).unwrap();
/// hand.try_add_card(RuntimeCard::new(EntityId(11), "Salve")).unwrap();
///
/// assert_eq!(hand.first().map(|c| c.id()), Some(EntityId(10)));
/// assert!(hand.try_add_card(RuntimeCard::new(EntityId(10), "Copy")).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct OrderedCardSet {
    zone: ZoneKind,
    cards: FxHashMap<EntityId, RuntimeCard>,
    order: Vec<EntityId>,
}

impl OrderedCardSet {
    /// Create an empty set for the given zone.
    #[must_use]
    pub fn new(zone: ZoneKind) -> Self {
        Self {
            zone,
            cards: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    #[must_use]
    pub fn zone(&self) -> ZoneKind {
        self.zone
    }

    /// Number of cards held.
    #[must_use]
    pub fn count(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: EntityId) -> bool {
        self.cards.contains_key(&card)
    }

    /// Card ids in order (index 0 is the top of a deck).
    #[must_use]
    pub fn ids(&self) -> &[EntityId] {
        &self.order
    }

    /// Cards in order.
    pub fn iter(&self) -> impl Iterator<Item = &RuntimeCard> + '_ {
        self.order.iter().filter_map(move |id| self.cards.get(id))
    }

    /// Append a card at the end of the order.
    ///
    /// Rejected without mutation when the id is already present.
    pub fn try_add_card(&mut self, card: RuntimeCard) -> Result<(), ZoneError> {
        let index = self.order.len();
        self.insert_at(index, card).map_err(|(err, _)| err)
    }

    /// Remove a card by id and hand it back.
    pub fn try_remove_card(&mut self, card: EntityId) -> Result<RuntimeCard, ZoneError> {
        let removed = self.cards.remove(&card).ok_or(ZoneError::Missing {
            zone: self.zone,
            card,
        })?;
        self.order.retain(|&id| id != card);
        Ok(removed)
    }

    /// First card in order.
    #[must_use]
    pub fn first(&self) -> Option<&RuntimeCard> {
        self.order.first().and_then(|id| self.cards.get(id))
    }

    /// Last card in order.
    #[must_use]
    pub fn last(&self) -> Option<&RuntimeCard> {
        self.order.last().and_then(|id| self.cards.get(id))
    }

    /// Look up a card by id.
    #[must_use]
    pub fn get(&self, card: EntityId) -> Option<&RuntimeCard> {
        self.cards.get(&card)
    }

    /// Position of a card in the order.
    #[must_use]
    pub fn position(&self, card: EntityId) -> Option<usize> {
        self.order.iter().position(|&id| id == card)
    }

    /// Replace the whole contents and order.
    ///
    /// The new contents are checked for duplicate ids first; on failure the
    /// set is left as it was.
    pub fn overwrite(&mut self, cards: Vec<RuntimeCard>) -> Result<(), ZoneError> {
        let mut next: FxHashMap<EntityId, RuntimeCard> = FxHashMap::default();
        let mut order = Vec::with_capacity(cards.len());

        for card in cards {
            let id = card.id();
            if next.insert(id, card).is_some() {
                return Err(ZoneError::Duplicate {
                    zone: self.zone,
                    card: id,
                });
            }
            order.push(id);
        }

        self.cards = next;
        self.order = order;
        Ok(())
    }

    /// Uniformly permute the order (Fisher-Yates).
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        for i in (1..self.order.len()).rev() {
            let j = rng.gen_index_inclusive(i);
            self.order.swap(i, j);
        }
    }

    /// Insert at `index` (clamped to the end). A rejected card is handed back
    /// so the caller can return it to where it came from.
    pub(crate) fn insert_at(
        &mut self,
        index: usize,
        card: RuntimeCard,
    ) -> Result<(), (ZoneError, RuntimeCard)> {
        let id = card.id();
        if self.cards.contains_key(&id) {
            let err = ZoneError::Duplicate {
                zone: self.zone,
                card: id,
            };
            return Err((err, card));
        }

        let index = index.min(self.order.len());
        self.order.insert(index, id);
        self.cards.insert(id, card);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn card(id: u32) -> RuntimeCard {
        RuntimeCard::new(EntityId(id), format!("Card {id}"))
    }

    fn set_of(ids: &[u32]) -> OrderedCardSet {
        let mut set = OrderedCardSet::new(ZoneKind::Deck);
        for &id in ids {
            set.try_add_card(card(id)).unwrap();
        }
        set
    }

    #[test]
    fn test_add_preserves_order() {
        let set = set_of(&[12, 10, 11]);

        assert_eq!(set.ids(), &[EntityId(12), EntityId(10), EntityId(11)]);
        assert_eq!(set.first().map(RuntimeCard::id), Some(EntityId(12)));
        assert_eq!(set.last().map(RuntimeCard::id), Some(EntityId(11)));
        assert_eq!(set.count(), 3);
    }

    #[test]
    fn test_duplicate_add_rejected() {
        let mut set = set_of(&[10]);

        let err = set.try_add_card(RuntimeCard::new(EntityId(10), "Other")).unwrap_err();

        assert_eq!(
            err,
            ZoneError::Duplicate {
                zone: ZoneKind::Deck,
                card: EntityId(10)
            }
        );
        assert_eq!(set.count(), 1);
        assert_eq!(set.get(EntityId(10)).map(RuntimeCard::name), Some("Card 10"));
    }

    #[test]
    fn test_remove_missing() {
        let mut set = set_of(&[10]);

        assert!(matches!(
            set.try_remove_card(EntityId(99)),
            Err(ZoneError::Missing { .. })
        ));
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn test_empty_set_has_no_ends() {
        let set = OrderedCardSet::new(ZoneKind::Hand);

        assert!(set.first().is_none());
        assert!(set.last().is_none());
        assert!(set.is_empty());
    }

    #[test]
    fn test_overwrite_replaces_contents() {
        let mut set = set_of(&[1, 2]);

        set.overwrite(vec![card(7), card(5), card(6)]).unwrap();

        assert_eq!(set.ids(), &[EntityId(7), EntityId(5), EntityId(6)]);
        assert!(!set.contains(EntityId(1)));
    }

    #[test]
    fn test_overwrite_with_duplicates_leaves_set_untouched() {
        let mut set = set_of(&[1, 2]);

        let result = set.overwrite(vec![card(7), card(7)]);

        assert!(result.is_err());
        assert_eq!(set.ids(), &[EntityId(1), EntityId(2)]);
    }

    #[test]
    fn test_insert_at_restores_position() {
        let mut set = set_of(&[1, 2, 3]);

        let removed = set.try_remove_card(EntityId(2)).unwrap();
        set.insert_at(1, removed).unwrap();

        assert_eq!(set.ids(), &[EntityId(1), EntityId(2), EntityId(3)]);
    }

    #[test]
    fn test_shuffle_single_card_is_idempotent() {
        let mut set = set_of(&[4]);
        let mut rng = GameRng::new(1);

        for _ in 0..10 {
            set.shuffle(&mut rng);
        }

        assert_eq!(set.ids(), &[EntityId(4)]);
    }

    #[test]
    fn test_shuffle_changes_order() {
        let ids: Vec<u32> = (0..20).collect();
        let mut set = set_of(&ids);
        let before = set.ids().to_vec();

        set.shuffle(&mut GameRng::new(42));

        // Same elements, different order (very likely)
        assert_eq!(set.count(), 20);
        assert_ne!(set.ids(), before.as_slice());
    }

    fn unique_ids() -> impl Strategy<Value = Vec<u32>> {
        prop::collection::hash_set(0u32..500, 0..40).prop_map(|s| s.into_iter().collect())
    }

    proptest! {
        #[test]
        fn prop_added_card_is_retrievable(ids in unique_ids(), extra in 500u32..1000) {
            let mut set = set_of(&ids);

            set.try_add_card(card(extra)).unwrap();

            prop_assert_eq!(set.get(EntityId(extra)).map(RuntimeCard::id), Some(EntityId(extra)));
            prop_assert!(set.try_add_card(card(extra)).is_err());
        }

        #[test]
        fn prop_add_then_remove_restores_count(ids in unique_ids(), extra in 500u32..1000) {
            let mut set = set_of(&ids);
            let before = set.count();

            set.try_add_card(card(extra)).unwrap();
            let removed = set.try_remove_card(EntityId(extra)).unwrap();

            prop_assert_eq!(removed.id(), EntityId(extra));
            prop_assert_eq!(set.count(), before);
        }

        #[test]
        fn prop_shuffle_preserves_members(ids in unique_ids(), seed in any::<u64>()) {
            let mut set = set_of(&ids);

            set.shuffle(&mut GameRng::new(seed));

            let mut after: Vec<u32> = set.ids().iter().map(|id| id.raw()).collect();
            let mut before = ids.clone();
            after.sort_unstable();
            before.sort_unstable();
            prop_assert_eq!(after, before);
            prop_assert_eq!(set.iter().count(), ids.len());
        }
    }
}
