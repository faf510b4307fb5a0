//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card template:
//! name, political power cost, illustration reference, and effect metadata.
//! In-play cards reference a definition by `CardId`; the definition itself
//! is never copied into play state.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// This identifies the template (e.g. "Campaign Promise"), not a specific
/// copy in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ## Effect metadata
///
/// `attributes` is a `String -> i64` map. Booleans use 0/1, enums use
/// discriminant values. The rules core does not interpret these entries;
/// they are carried for the effect layer and presentation.
///
/// ## Example
///
/// ```
/// use card_duel::cards::{CardDefinition, CardId};
///
/// let card = CardDefinition::new(CardId::new(1), "Campaign Promise")
///     .with_cost(2)
///     .with_illustration("cards/promise.png")
///     .with_attr("draw_on_play", 1);
///
/// assert_eq!(card.cost, 2);
/// assert_eq!(card.get_attr("draw_on_play", 0), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Political power cost to play this card.
    pub cost: i64,

    /// Illustration asset reference. `None` for cards without art.
    pub illustration: Option<String>,

    /// Effect metadata, opaque to the rules core.
    #[serde(default)]
    pub attributes: FxHashMap<String, i64>,
}

impl CardDefinition {
    /// Create a new card definition with zero cost and no illustration.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cost: 0,
            illustration: None,
            attributes: FxHashMap::default(),
        }
    }

    /// Set the political power cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: i64) -> Self {
        self.cost = cost;
        self
    }

    /// Set the illustration reference (builder pattern).
    #[must_use]
    pub fn with_illustration(mut self, path: impl Into<String>) -> Self {
        self.illustration = Some(path.into());
        self
    }

    /// Add an effect metadata entry (builder pattern).
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: i64) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Get an effect metadata value with a default.
    #[must_use]
    pub fn get_attr(&self, key: &str, default: i64) -> i64 {
        self.attributes.get(key).copied().unwrap_or(default)
    }
}
