//! State-change events for a decoupled presentation layer.
//!
//! The rules engine mutates state synchronously and records a `StateEvent`
//! for every observable change. Presentation subscribes by draining
//! pending events and animating at its own pace; the engine never blocks
//! on or depends on animation completion.
//!
//! The full history stays queryable for replay and debugging.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::PlayerId;

/// An observable state change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StateEvent {
    /// A player's deck was shuffled during setup.
    DeckShuffled { player: PlayerId, deck_size: usize },

    /// A card moved deck -> hand during the initial deal.
    CardDealt {
        player: PlayerId,
        card: CardId,
        hand_index: usize,
    },

    /// The initial shuffle-and-deal sequence completed.
    SetupCompleted,

    /// A turn began for `player`.
    TurnStarted { player: PlayerId, turn: u32 },

    /// A turn ended for `player`.
    TurnEnded { player: PlayerId, turn: u32 },

    /// A card moved deck -> hand at turn time.
    CardDrawn { player: PlayerId, card: CardId },

    /// A card moved hand -> board.
    CardPlayed {
        player: PlayerId,
        card: CardId,
        slot: usize,
    },

    /// A card left the board.
    CardRemoved { player: PlayerId, card: CardId },

    /// Board slots were compacted; presentation should recompute every
    /// card's offset from its new slot index.
    BoardRelaid { player: PlayerId, count: usize },

    /// Hand order or count changed; presentation should re-lay the hand.
    HandRelaid { player: PlayerId, count: usize },

    /// Political power was paid for a card.
    PowerPaid {
        player: PlayerId,
        cost: i64,
        remaining: i64,
    },

    /// Political power was replenished at turn start.
    PowerRefilled { player: PlayerId, balance: i64 },
}

/// Append-only event record with a drain cursor.
///
/// `record` appends; `drain_pending` hands out everything recorded since
/// the previous drain. The persistent vector keeps history clones cheap.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventLog {
    history: Vector<StateEvent>,
    cursor: usize,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn record(&mut self, event: StateEvent) {
        self.history.push_back(event);
    }

    /// Events recorded since the last drain, oldest first.
    pub fn drain_pending(&mut self) -> Vec<StateEvent> {
        let pending: Vec<_> = self.history.iter().skip(self.cursor).cloned().collect();
        self.cursor = self.history.len();
        pending
    }

    /// Number of events not yet drained.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.history.len() - self.cursor
    }

    /// The full ordered history, including drained events.
    #[must_use]
    pub fn history(&self) -> &Vector<StateEvent> {
        &self.history
    }
}
