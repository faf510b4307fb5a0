//! # card-duel
//!
//! Engine-agnostic rules core for a two-player card duel: deck, hand,
//! bounded board, political power, and turn alternation, distilled from a
//! scene-graph prototype into a plain library.
//!
//! ## Design Principles
//!
//! 1. **No globals**: One `Session` value owns a whole game. There is no
//!    process-wide manager instance; callers pass the session explicitly.
//!
//! 2. **Synchronous, atomic actions**: Every action either completes its
//!    full effect inside one call or returns an error leaving state
//!    untouched. Animation is a downstream concern fed by events.
//!
//! 3. **Explicit setup gate**: The initial shuffle-and-deal is a sequence
//!    of suspension points (`step_setup`). Until it signals completion,
//!    turn actions are rejected and end-turn requests are no-ops.
//!
//! 4. **Typed references**: In-play cards are `CardId` handles into a
//!    static registry. No runtime type queries, no copied card data.
//!
//! ## Modules
//!
//! - `core`: players, errors, deterministic RNG
//! - `cards`: card definitions, the registry, named collections
//! - `zones`: deck, hand, board, and slot-layout arithmetic
//! - `session`: the session object, turn controller, power pools, events

pub mod cards;
pub mod core;
pub mod session;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    ActionError, GameRng, GameRngState, PlayerId, PlayerPair, SetupError,
};

pub use crate::cards::{CardCollection, CardDefinition, CardId, CardRegistry};

pub use crate::zones::{Board, Deck, Hand};

pub use crate::session::{
    EventLog, PowerPool, RefillPolicy, Session, SessionConfig, SetupStep, StateEvent,
    TurnController, TurnState,
};
