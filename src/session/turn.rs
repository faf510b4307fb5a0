//! Turn alternation with a readiness gate.
//!
//! Exactly one player is active at any time; the only transition is an
//! explicit end-turn. The readiness gate is distinct from the state
//! machine itself: until the initial shuffle-and-deal signals completion,
//! end-turn requests are no-ops, not errors.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Which player's turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    PlayerOneTurn,
    PlayerTwoTurn,
}

impl TurnState {
    /// The active player in this state.
    #[must_use]
    pub const fn active(self) -> PlayerId {
        match self {
            TurnState::PlayerOneTurn => PlayerId::One,
            TurnState::PlayerTwoTurn => PlayerId::Two,
        }
    }

    /// The state in which `player` is active.
    #[must_use]
    pub const fn for_player(player: PlayerId) -> Self {
        match player {
            PlayerId::One => TurnState::PlayerOneTurn,
            PlayerId::Two => TurnState::PlayerTwoTurn,
        }
    }
}

/// Alternates the active player and gates actions to after setup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnController {
    active: PlayerId,
    ready: bool,
    turn_number: u32,
}

impl TurnController {
    /// Create a controller with the given first player, not yet ready.
    #[must_use]
    pub fn new(first_player: PlayerId) -> Self {
        Self {
            active: first_player,
            ready: false,
            turn_number: 1,
        }
    }

    /// Has setup signalled completion?
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Signal that setup has completed; turn actions are accepted from
    /// here on.
    pub fn mark_ready(&mut self) {
        self.ready = true;
    }

    /// The active player.
    #[must_use]
    pub fn active(&self) -> PlayerId {
        self.active
    }

    /// The current turn state.
    #[must_use]
    pub fn state(&self) -> TurnState {
        TurnState::for_player(self.active)
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Flip the active player.
    ///
    /// Returns the new active player, or `None` when setup has not
    /// completed (the request is a no-op, state unchanged).
    pub fn end_turn(&mut self) -> Option<PlayerId> {
        if !self.ready {
            return None;
        }
        self.active = self.active.opponent();
        self.turn_number += 1;
        Some(self.active)
    }
}
