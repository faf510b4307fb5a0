//! Named card collections - the static base deck.
//!
//! A `CardCollection` is a display name plus an ordered card list. Sessions
//! build each player's starting deck from a collection at startup. The
//! collection is configuration: it is validated against the registry when
//! the session begins and never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::definition::CardId;
use super::registry::CardRegistry;
use crate::core::SetupError;

/// A named, ordered list of card ids.
///
/// Duplicate ids are allowed; a deck may run several copies of a card.
///
/// ## Example
///
/// ```
/// use card_duel::cards::{CardCollection, CardId};
///
/// let collection = CardCollection::new("Base Set")
///     .with_card(CardId::new(1))
///     .with_card(CardId::new(2))
///     .with_card(CardId::new(1));
///
/// assert_eq!(collection.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCollection {
    /// Display name of the collection.
    pub name: String,

    /// Ordered card list.
    cards: Vec<CardId>,
}

impl CardCollection {
    /// Create a new empty collection.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }

    /// Create a collection from an existing card list.
    #[must_use]
    pub fn from_cards(name: impl Into<String>, cards: Vec<CardId>) -> Self {
        Self {
            name: name.into(),
            cards,
        }
    }

    /// Append a card (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card: CardId) -> Self {
        self.cards.push(card);
        self
    }

    /// Append a card.
    pub fn add(&mut self, card: CardId) {
        self.cards.push(card);
    }

    /// The ordered card list.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Number of cards in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the collection holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Validate the collection against a registry.
    ///
    /// An empty collection or a reference to an unregistered card is a
    /// startup-fatal configuration error.
    pub fn validate(&self, registry: &CardRegistry) -> Result<(), SetupError> {
        if self.cards.is_empty() {
            return Err(SetupError::EmptyCollection {
                name: self.name.clone(),
            });
        }

        for &card in &self.cards {
            if !registry.contains(card) {
                return Err(SetupError::UnknownCard {
                    name: self.name.clone(),
                    card,
                });
            }
        }

        Ok(())
    }
}
