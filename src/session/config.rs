//! Session configuration.
//!
//! A session is configured once at creation: hand size, board bounds,
//! layout spacing, starting political power, and the turn-start refill
//! policy. Defaults mirror the prototype this engine was distilled from
//! (five-card opening hand, seven board slots).

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::zones::{DEFAULT_MAX_SLOTS, DEFAULT_SLOT_SPACING};

/// Default opening hand size.
pub const DEFAULT_STARTING_HAND: usize = 5;

/// Default horizontal spacing between hand cards.
pub const DEFAULT_HAND_SPACING: f32 = 300.0;

/// Turn-start political power replenishment.
///
/// The concrete rule is deliberately a policy, not a constant: the games
/// this engine targets disagree on amount and cap, so callers choose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefillPolicy {
    /// No replenishment at turn start.
    #[default]
    None,
    /// Reset the balance to a fixed amount each turn.
    SetTo(i64),
    /// Add a fixed amount each turn, optionally clamped to a cap.
    Gain { amount: i64, cap: Option<i64> },
}

/// Configuration for a session.
///
/// Built with chained setters, consumed by `Session::begin`.
///
/// ## Example
///
/// ```
/// use card_duel::session::{RefillPolicy, SessionConfig};
///
/// let config = SessionConfig::new()
///     .starting_hand_size(5)
///     .max_board_slots(7)
///     .starting_power(10)
///     .refill(RefillPolicy::Gain { amount: 1, cap: Some(10) })
///     .seed(42);
///
/// assert_eq!(config.starting_hand_size, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Cards dealt to each player during setup.
    pub starting_hand_size: usize,

    /// Board slot limit per player.
    pub max_board_slots: usize,

    /// Horizontal spacing between board slots.
    pub board_spacing: f32,

    /// Horizontal spacing between hand cards.
    pub hand_spacing: f32,

    /// Political power each player starts with.
    pub starting_power: i64,

    /// Turn-start replenishment policy.
    pub refill: RefillPolicy,

    /// Player who takes the first turn.
    pub first_player: PlayerId,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_hand_size: DEFAULT_STARTING_HAND,
            max_board_slots: DEFAULT_MAX_SLOTS,
            board_spacing: DEFAULT_SLOT_SPACING,
            hand_spacing: DEFAULT_HAND_SPACING,
            starting_power: 0,
            refill: RefillPolicy::None,
            first_player: PlayerId::One,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Set the board slot limit.
    #[must_use]
    pub fn max_board_slots(mut self, slots: usize) -> Self {
        assert!(slots > 0, "Board must have at least 1 slot");
        self.max_board_slots = slots;
        self
    }

    /// Set the board slot spacing.
    #[must_use]
    pub fn board_spacing(mut self, spacing: f32) -> Self {
        self.board_spacing = spacing;
        self
    }

    /// Set the hand card spacing.
    #[must_use]
    pub fn hand_spacing(mut self, spacing: f32) -> Self {
        self.hand_spacing = spacing;
        self
    }

    /// Set the starting political power balance.
    #[must_use]
    pub fn starting_power(mut self, power: i64) -> Self {
        self.starting_power = power;
        self
    }

    /// Set the turn-start refill policy.
    #[must_use]
    pub fn refill(mut self, policy: RefillPolicy) -> Self {
        self.refill = policy;
        self
    }

    /// Set the first player.
    #[must_use]
    pub fn first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Set the RNG seed for deterministic shuffles.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
