//! Political power: the per-player resource pool gating card cost.

use serde::{Deserialize, Serialize};

use super::config::RefillPolicy;
use crate::core::ActionError;

/// A player's political power balance.
///
/// Mutated by `pay` (decrement, rejected when insufficient) and `refill`
/// (turn-start replenishment per policy).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerPool {
    balance: i64,
}

impl PowerPool {
    /// Create a pool with the given starting balance.
    #[must_use]
    pub fn new(balance: i64) -> Self {
        Self { balance }
    }

    /// Current balance.
    #[must_use]
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Pure affordability predicate. `cost >= 0` is assumed.
    #[must_use]
    pub fn can_afford(&self, cost: i64) -> bool {
        self.balance >= cost
    }

    /// Pay a cost, decrementing the balance.
    ///
    /// Rejects with `InsufficientFunds` and leaves the balance untouched
    /// when the cost exceeds the balance.
    pub fn pay(&mut self, cost: i64) -> Result<(), ActionError> {
        if !self.can_afford(cost) {
            return Err(ActionError::InsufficientFunds {
                cost,
                available: self.balance,
            });
        }
        self.balance -= cost;
        Ok(())
    }

    /// Apply a turn-start refill policy.
    ///
    /// Returns the new balance when the policy changed anything, `None`
    /// for `RefillPolicy::None`.
    pub fn refill(&mut self, policy: RefillPolicy) -> Option<i64> {
        match policy {
            RefillPolicy::None => None,
            RefillPolicy::SetTo(amount) => {
                self.balance = amount;
                Some(self.balance)
            }
            RefillPolicy::Gain { amount, cap } => {
                self.balance += amount;
                if let Some(cap) = cap {
                    self.balance = self.balance.min(cap);
                }
                Some(self.balance)
            }
        }
    }
}
