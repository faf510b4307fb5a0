//! Card zones: deck, hand, and board.
//!
//! Each player owns one of each zone. Zones hold `CardId` references to
//! static definitions and enforce their own invariants:
//!
//! - `Deck`: ordered, drawn from the front, shrinks only
//! - `Hand`: ordered, list semantics, no enforced bound
//! - `Board`: bounded, slots always contiguous and compacted
//!
//! `layout` holds the pure slot-offset arithmetic shared by hand and board
//! presentation.

pub mod board;
pub mod deck;
pub mod hand;
pub mod layout;

pub use board::{Board, DEFAULT_MAX_SLOTS, DEFAULT_SLOT_SPACING};
pub use deck::Deck;
pub use hand::Hand;
