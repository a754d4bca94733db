//! Zone storage and card movement between a player's zones.

use std::collections::HashMap;

use rust_ccg_match::cards::RuntimeCard;
use rust_ccg_match::core::{EntityId, GameRng, PlayerId};
use rust_ccg_match::players::{PlayerType, RuntimePlayer};
use rust_ccg_match::zones::{OrderedCardSet, ZoneError, ZoneKind};

fn deck(ids: &[u32]) -> OrderedCardSet {
    let mut set = OrderedCardSet::new(ZoneKind::Deck);
    for &id in ids {
        set.try_add_card(RuntimeCard::new(EntityId(id), format!("Card {id}")))
            .unwrap();
    }
    set
}

/// Test that every ordering of three cards comes up about equally often.
#[test]
fn test_shuffle_is_uniform() {
    const TRIALS: usize = 6000;
    let mut rng = GameRng::new(7);
    let mut seen: HashMap<Vec<EntityId>, usize> = HashMap::new();

    for _ in 0..TRIALS {
        let mut set = deck(&[1, 2, 3]);
        set.shuffle(&mut rng);
        *seen.entry(set.ids().to_vec()).or_default() += 1;
    }

    assert_eq!(seen.len(), 6);
    let expected = TRIALS / 6;
    for (order, count) in &seen {
        assert!(
            count.abs_diff(expected) < expected / 5,
            "{order:?} came up {count} times, expected about {expected}"
        );
    }
}

#[test]
fn test_shuffle_is_deterministic_per_seed() {
    let ids: Vec<u32> = (10..40).collect();
    let mut a = deck(&ids);
    let mut b = deck(&ids);

    a.shuffle(&mut GameRng::new(99));
    b.shuffle(&mut GameRng::new(99));

    assert_eq!(a.ids(), b.ids());
    assert_eq!(a.count(), 30);
    for id in &ids {
        assert!(a.contains(EntityId(*id)));
    }
}

#[test]
fn test_shuffle_small_sets() {
    let mut rng = GameRng::new(1);
    let mut empty = OrderedCardSet::new(ZoneKind::Deck);
    empty.shuffle(&mut rng);
    assert!(empty.is_empty());

    let mut single = deck(&[5]);
    single.shuffle(&mut rng);
    assert_eq!(single.ids(), &[EntityId(5)]);
}

fn player(deck_ids: &[u32], hand_ids: &[u32]) -> RuntimePlayer {
    let mut player = RuntimePlayer::new(PlayerId::new(0), "Alice", PlayerType::LocalHuman);
    for &id in deck_ids {
        player
            .zone_mut(ZoneKind::Deck)
            .try_add_card(RuntimeCard::new(EntityId(id), "Card"))
            .unwrap();
    }
    for &id in hand_ids {
        player
            .zone_mut(ZoneKind::Hand)
            .try_add_card(RuntimeCard::new(EntityId(id), "Card"))
            .unwrap();
    }
    player
}

#[test]
fn test_transfer_to_full_zone_changes_nothing() {
    let mut alice = player(&[1, 2, 3], &[4, 5]);

    let err = alice
        .transfer_card(EntityId(2), ZoneKind::Deck, ZoneKind::Hand, Some(2))
        .unwrap_err();

    assert_eq!(
        err,
        ZoneError::Full {
            zone: ZoneKind::Hand,
            capacity: 2
        }
    );
    assert_eq!(alice.zone(ZoneKind::Deck).ids(), &[EntityId(1), EntityId(2), EntityId(3)]);
    assert_eq!(alice.zone(ZoneKind::Hand).ids(), &[EntityId(4), EntityId(5)]);
}

#[test]
fn test_transfer_rejects_duplicate_in_destination() {
    // The same id in two zones only happens through direct zone access.
    let mut alice = player(&[1, 2], &[2]);

    let err = alice
        .transfer_card(EntityId(2), ZoneKind::Deck, ZoneKind::Hand, None)
        .unwrap_err();

    assert_eq!(
        err,
        ZoneError::Duplicate {
            zone: ZoneKind::Hand,
            card: EntityId(2)
        }
    );
    assert_eq!(alice.zone(ZoneKind::Deck).count(), 2);
    assert_eq!(alice.zone(ZoneKind::Hand).count(), 1);
}

#[test]
fn test_transfer_missing_and_same_zone() {
    let mut alice = player(&[1], &[]);

    assert_eq!(
        alice.transfer_card(EntityId(9), ZoneKind::Deck, ZoneKind::Hand, None),
        Err(ZoneError::Missing {
            zone: ZoneKind::Deck,
            card: EntityId(9)
        })
    );
    assert_eq!(
        alice.transfer_card(EntityId(1), ZoneKind::Deck, ZoneKind::Deck, None),
        Err(ZoneError::SameZone {
            zone: ZoneKind::Deck,
            card: EntityId(1)
        })
    );
    assert_eq!(alice.locate(EntityId(1)), Some(ZoneKind::Deck));
}

#[test]
fn test_transfer_appends_to_destination() {
    let mut alice = player(&[1, 2, 3], &[7]);

    alice
        .transfer_card(EntityId(2), ZoneKind::Deck, ZoneKind::Hand, None)
        .unwrap();
    alice
        .transfer_card(EntityId(7), ZoneKind::Hand, ZoneKind::Discard, None)
        .unwrap();

    assert_eq!(alice.zone(ZoneKind::Deck).ids(), &[EntityId(1), EntityId(3)]);
    assert_eq!(alice.zone(ZoneKind::Hand).ids(), &[EntityId(2)]);
    assert_eq!(alice.zone(ZoneKind::Discard).ids(), &[EntityId(7)]);
    assert_eq!(alice.card_count(), 4);
}

#[test]
fn test_overwrite_rejects_duplicates() {
    let mut set = deck(&[1, 2]);

    let err = set
        .overwrite(vec![
            RuntimeCard::new(EntityId(3), "A"),
            RuntimeCard::new(EntityId(3), "B"),
        ])
        .unwrap_err();

    assert_eq!(
        err,
        ZoneError::Duplicate {
            zone: ZoneKind::Deck,
            card: EntityId(3)
        }
    );
    assert_eq!(set.ids(), &[EntityId(1), EntityId(2)]);
}
