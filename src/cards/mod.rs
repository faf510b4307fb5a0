//! Card definitions, the registry, and named collections.
//!
//! Definitions are static templates loaded at startup. Zones and sessions
//! reference them by `CardId`, never by copy.

pub mod collection;
pub mod definition;
pub mod registry;

pub use collection::CardCollection;
pub use definition::{CardDefinition, CardId};
pub use registry::CardRegistry;
