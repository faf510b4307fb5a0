//! Property-based invariants.
//!
//! - Shuffle is a permutation of its input for every deck size
//! - Draws conserve |deck| + |hand|
//! - Board slot indices stay contiguous under any play/remove sequence

use proptest::prelude::*;

use card_duel::core::GameRng;
use card_duel::zones::Board;
use card_duel::{
    CardCollection, CardDefinition, CardId, CardRegistry, Deck, PlayerId, Session, SessionConfig,
};

fn collection_of(size: u32) -> (CardRegistry, CardCollection) {
    let mut registry = CardRegistry::new();
    let mut collection = CardCollection::new("Property Set");
    for id in 0..size {
        registry.register(CardDefinition::new(CardId::new(id), format!("Card {id}")));
        collection.add(CardId::new(id));
    }
    (registry, collection)
}

proptest! {
    /// For all decks of size N >= 2 and all seeds, shuffling yields the
    /// same multiset of cards at the same length.
    #[test]
    fn shuffle_is_a_permutation(size in 2u32..128, seed in any::<u64>()) {
        let mut deck = Deck::from_cards((0..size).map(CardId::new));
        let mut rng = GameRng::new(seed);

        let mut before: Vec<CardId> = deck.cards().collect();
        deck.shuffle(&mut rng);
        let mut after: Vec<CardId> = deck.cards().collect();

        prop_assert_eq!(before.len(), after.len());
        before.sort_by_key(|c| c.raw());
        after.sort_by_key(|c| c.raw());
        prop_assert_eq!(before, after);
    }

    /// Each successful draw moves exactly one card deck -> hand, so
    /// |deck| + |hand| is conserved across any draw sequence.
    #[test]
    fn draws_conserve_deck_plus_hand(
        deck_size in 1u32..40,
        hand_size in 0usize..5,
        draws in 0usize..50,
        seed in any::<u64>(),
    ) {
        let (registry, collection) = collection_of(deck_size);
        let mut session = Session::begin(
            registry,
            &collection,
            SessionConfig::new().starting_hand_size(hand_size).seed(seed),
        ).unwrap();
        session.finish_setup();

        let total = session.deck_size(PlayerId::One) + session.hand(PlayerId::One).len();
        prop_assert_eq!(total, deck_size as usize);

        for _ in 0..draws {
            let deck_before = session.deck_size(PlayerId::One);
            let drew = session.draw_card(PlayerId::One).is_ok();

            prop_assert_eq!(drew, deck_before > 0);
            prop_assert_eq!(
                session.deck_size(PlayerId::One) + session.hand(PlayerId::One).len(),
                total
            );
            if drew {
                prop_assert_eq!(session.deck_size(PlayerId::One), deck_before - 1);
            }
        }
    }

    /// After any sequence of plays and removals, board slots are exactly
    /// 0..count with no gaps, and count never exceeds the limit.
    #[test]
    fn board_slots_stay_contiguous(
        max_slots in 1usize..8,
        ops in proptest::collection::vec((any::<bool>(), 0u32..16), 0..64),
    ) {
        let mut board = Board::new(max_slots, 150.0);

        for (play, id) in ops {
            let card = CardId::new(id);
            if play {
                let _ = board.play(card);
            } else {
                board.remove(card);
            }

            prop_assert!(board.len() <= max_slots);
            // Slots 0..count are occupied, everything past them is not
            for slot in 0..board.len() {
                prop_assert!(board.card_at(slot).is_some());
            }
            prop_assert_eq!(board.card_at(board.len()), None);
        }
    }

    /// A successful play assigns the next free slot; offsets for the
    /// resulting row are centered and evenly spaced.
    #[test]
    fn board_offsets_centered(count in 1usize..8) {
        let mut board = Board::new(7, 150.0);
        for id in 0..count as u32 {
            board.play(CardId::new(id)).unwrap();
        }

        let offsets = board.offsets();
        prop_assert_eq!(offsets.len(), count);

        // Symmetric around zero
        let sum: f32 = offsets.iter().sum();
        prop_assert!(sum.abs() < 1e-3);

        for pair in offsets.windows(2) {
            prop_assert!((pair[1] - pair[0] - 150.0).abs() < 1e-3);
        }
    }
}
