//! Per-player board: a bounded, compacted slot sequence.
//!
//! Slots are the addressing scheme for in-play cards: they are always
//! contiguous `0..count`, compacted toward the start. Removal therefore
//! re-indexes every remaining card - a behavioral guarantee, not a visual
//! nicety, because presentation derives positions from slot indices alone.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::ActionError;
use crate::zones::layout;

/// Default number of board slots.
pub const DEFAULT_MAX_SLOTS: usize = 7;

/// Default horizontal spacing between board slots.
pub const DEFAULT_SLOT_SPACING: f32 = 150.0;

/// A bounded sequence of in-play cards.
///
/// ## Example
///
/// ```
/// use card_duel::zones::Board;
/// use card_duel::cards::CardId;
///
/// let mut board = Board::new(2, 150.0);
///
/// assert_eq!(board.play(CardId::new(1)), Ok(0));
/// assert_eq!(board.play(CardId::new(2)), Ok(1));
/// assert!(board.play(CardId::new(3)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// In-play cards by slot index. Inline storage covers the default
    /// seven-slot board.
    slots: SmallVec<[CardId; DEFAULT_MAX_SLOTS]>,

    max_slots: usize,

    spacing: f32,
}

impl Board {
    /// Create an empty board with the given slot limit and spacing.
    #[must_use]
    pub fn new(max_slots: usize, spacing: f32) -> Self {
        Self {
            slots: SmallVec::new(),
            max_slots,
            spacing,
        }
    }

    /// Place a card in the next free slot.
    ///
    /// Returns the assigned slot index, or `ZoneFull` without mutating
    /// anything when every slot is occupied.
    pub fn play(&mut self, card: CardId) -> Result<usize, ActionError> {
        if self.slots.len() >= self.max_slots {
            return Err(ActionError::ZoneFull {
                limit: self.max_slots,
            });
        }
        self.slots.push(card);
        Ok(self.slots.len() - 1)
    }

    /// Remove the first card matching `card` and compact the slots.
    ///
    /// Remaining cards shift toward slot 0 so indices stay contiguous.
    /// Returns `false` when the card is absent.
    pub fn remove(&mut self, card: CardId) -> bool {
        if let Some(pos) = self.slots.iter().position(|&c| c == card) {
            self.slots.remove(pos);
            true
        } else {
            false
        }
    }

    /// The card occupying a slot, if any.
    #[must_use]
    pub fn card_at(&self, slot: usize) -> Option<CardId> {
        self.slots.get(slot).copied()
    }

    /// The slot a card occupies, if present.
    #[must_use]
    pub fn slot_of(&self, card: CardId) -> Option<usize> {
        self.slots.iter().position(|&c| c == card)
    }

    /// In-play cards in slot order.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.slots
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no card is in play.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Check if every slot is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.max_slots
    }

    /// The slot limit.
    #[must_use]
    pub fn max_slots(&self) -> usize {
        self.max_slots
    }

    /// Centered 1-D offset for one slot given the current count.
    ///
    /// Deterministic in `(index, total)`: the zone recomputes every card's
    /// position whenever the count changes, with no per-card stored
    /// position.
    #[must_use]
    pub fn slot_offset(&self, index: usize, total: usize) -> f32 {
        layout::slot_offset(index, total, self.spacing)
    }

    /// Offsets for every occupied slot, in slot order.
    #[must_use]
    pub fn offsets(&self) -> Vec<f32> {
        layout::row_offsets(self.slots.len(), self.spacing)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SLOTS, DEFAULT_SLOT_SPACING)
    }
}
