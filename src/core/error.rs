//! Error taxonomy for session actions and startup.
//!
//! All action errors are recoverable: the caller aborts the attempted
//! action and no state changes. Setup errors are startup-fatal and abort
//! session creation instead of proceeding with degraded state.

use thiserror::Error;

use crate::cards::CardId;

/// Recoverable failures of turn-time actions.
///
/// Returning one of these guarantees the session state is unchanged by the
/// attempted action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The deck has no cards left. A "no more cards" signal, not a crash.
    #[error("the deck is empty")]
    EmptyDeck,

    /// Every board slot is occupied.
    #[error("the board is full ({limit} slots)")]
    ZoneFull { limit: usize },

    /// The player cannot pay the card's political power cost.
    #[error("insufficient political power: cost {cost}, available {available}")]
    InsufficientFunds { cost: i64, available: i64 },

    /// The named card is not in the player's hand.
    #[error("card is not in hand")]
    CardNotInHand,

    /// The initial shuffle-and-deal sequence has not completed yet.
    ///
    /// An expected pre-ready condition: the action is rejected without any
    /// state change.
    #[error("setup has not completed")]
    SetupNotComplete,
}

/// Fatal failures of session creation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The base collection holds no cards.
    #[error("card collection '{name}' is empty")]
    EmptyCollection { name: String },

    /// The collection references a card id the registry does not know.
    #[error("card collection '{name}' references unknown {card}")]
    UnknownCard { name: String, card: CardId },
}
