//! Per-player hand: an ordered card sequence with list semantics.
//!
//! Hand order is significant: it determines the presentation slot index.
//! `remove` therefore preserves the relative order of the remaining cards.
//! No upper bound is enforced here; the hand limit is a presentation
//! concern.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::zones::layout;

/// An ordered hand of card references.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<CardId>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card to the end of the hand.
    pub fn add(&mut self, card: CardId) {
        self.cards.push(card);
    }

    /// Remove the first card matching `card`.
    ///
    /// Returns `false` when the card is absent. Double removal must not
    /// corrupt other state, so a miss is reported rather than treated as
    /// fatal.
    pub fn remove(&mut self, card: CardId) -> bool {
        if let Some(pos) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(pos);
            true
        } else {
            false
        }
    }

    /// Check if the hand holds a card.
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    /// Position of the first matching card, if present.
    #[must_use]
    pub fn position(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    /// The ordered card list.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Centered presentation offsets for the current hand, in hand order.
    #[must_use]
    pub fn offsets(&self, spacing: f32) -> Vec<f32> {
        layout::row_offsets(self.cards.len(), spacing)
    }
}
