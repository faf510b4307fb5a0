//! Core types: players, errors, RNG.
//!
//! The fundamental building blocks shared by every other module.

pub mod error;
pub mod player;
pub mod rng;

pub use error::{ActionError, SetupError};
pub use player::{PlayerId, PlayerPair};
pub use rng::{GameRng, GameRngState};
