//! Session orchestration: configuration, turns, resources, events.
//!
//! The `Session` is the single context object replacing the prototype's
//! process-wide manager singletons. It owns every per-player zone, the
//! turn controller with its readiness gate, the power pools, and the
//! event feed the presentation layer subscribes to.

pub mod config;
pub mod events;
pub mod power;
pub mod session;
pub mod turn;

pub use config::{RefillPolicy, SessionConfig, DEFAULT_HAND_SPACING, DEFAULT_STARTING_HAND};
pub use events::{EventLog, StateEvent};
pub use power::PowerPool;
pub use session::{Session, SetupStep};
pub use turn::{TurnController, TurnState};
