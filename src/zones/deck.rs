//! Per-player deck: an ordered card sequence drawn from the front.
//!
//! The deck is mutated in exactly two ways during a session: `shuffle`
//! (permutation) and `draw_top` (remove from front). Its size only
//! decreases until the session is reset.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::cards::CardId;
use crate::core::{ActionError, GameRng};

/// An ordered deck of card references.
///
/// Index 0 is the top of the deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<CardId>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck from an ordered card list (first element on top).
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Shuffle the deck in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    /// Remove and return the top card.
    ///
    /// `EmptyDeck` is a recoverable "no more cards" signal; callers decide
    /// what running out of cards means.
    pub fn draw_top(&mut self) -> Result<CardId, ActionError> {
        self.cards.pop_front().ok_or(ActionError::EmptyDeck)
    }

    /// Cards remaining, top first.
    #[must_use]
    pub fn cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().copied()
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_of(ids: impl IntoIterator<Item = u32>) -> Deck {
        Deck::from_cards(ids.into_iter().map(CardId::new))
    }

    #[test]
    fn test_draw_from_front() {
        let mut deck = deck_of([1, 2, 3]);

        assert_eq!(deck.draw_top(), Ok(CardId::new(1)));
        assert_eq!(deck.draw_top(), Ok(CardId::new(2)));
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_empty_deck_signal() {
        let mut deck = Deck::new();
        assert_eq!(deck.draw_top(), Err(ActionError::EmptyDeck));

        let mut deck = deck_of([5]);
        assert!(deck.draw_top().is_ok());
        assert_eq!(deck.draw_top(), Err(ActionError::EmptyDeck));
        // Drawing from an exhausted deck stays a signal, never a crash
        assert_eq!(deck.draw_top(), Err(ActionError::EmptyDeck));
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut deck = deck_of(0..40);
        let mut rng = GameRng::new(42);

        let before: Vec<_> = deck.cards().collect();
        deck.shuffle(&mut rng);
        let after: Vec<_> = deck.cards().collect();

        assert_eq!(before.len(), after.len());
        assert_ne!(before, after);

        let mut sorted = after.clone();
        sorted.sort_by_key(|c| c.raw());
        assert_eq!(sorted, before);
    }

    #[test]
    fn test_shuffle_deterministic_per_seed() {
        let mut a = deck_of(0..20);
        let mut b = deck_of(0..20);

        a.shuffle(&mut GameRng::new(7));
        b.shuffle(&mut GameRng::new(7));

        assert_eq!(
            a.cards().collect::<Vec<_>>(),
            b.cards().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_size_only_decreases() {
        let mut deck = deck_of([1, 2, 3]);

        for expected in (0..3).rev() {
            deck.draw_top().unwrap();
            assert_eq!(deck.len(), expected);
        }
        assert!(deck.is_empty());
    }

    #[test]
    fn test_serialization() {
        let deck = deck_of([1, 2, 3]);
        let json = serde_json::to_string(&deck).unwrap();
        let deserialized: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(deck, deserialized);
    }
}
