//! Card definitions - static card data.
//!
//! `CardDefinition` holds what the host's content data says about a card:
//! its name, what it costs to play, and whether it exhausts. The pools
//! themselves only ever look at the exhaust tag.

use serde::{Deserialize, Serialize};

use crate::battle::Cost;

/// Identifier for a card (a usable skill in the host's content data).
///
/// Opaque to the pools: the same id may appear more than once in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
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

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use deck_battle::cards::{CardDefinition, CardId};
///
/// let smite = CardDefinition::new(CardId::new(7), "Smite")
///     .with_mp_cost(4)
///     .exhausting();
///
/// assert!(smite.exhaust);
/// assert_eq!(smite.mp_cost, 4);
/// assert_eq!(smite.tp_cost, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (menu label).
    pub name: String,

    /// MP required to play the card.
    #[serde(default)]
    pub mp_cost: u32,

    /// TP required to play the card.
    #[serde(default)]
    pub tp_cost: u32,

    /// Played copies leave the battle instead of going to the discard pile.
    #[serde(default)]
    pub exhaust: bool,
}

impl CardDefinition {
    /// Create a new card definition with no costs and no exhaust tag.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            mp_cost: 0,
            tp_cost: 0,
            exhaust: false,
        }
    }

    /// Set the MP cost (builder pattern).
    #[must_use]
    pub fn with_mp_cost(mut self, cost: u32) -> Self {
        self.mp_cost = cost;
        self
    }

    /// Set the TP cost (builder pattern).
    #[must_use]
    pub fn with_tp_cost(mut self, cost: u32) -> Self {
        self.tp_cost = cost;
        self
    }

    /// Tag the card as exhausting (builder pattern).
    #[must_use]
    pub fn exhausting(mut self) -> Self {
        self.exhaust = true;
        self
    }

    /// What playing the card costs.
    #[must_use]
    pub fn cost(&self) -> Cost {
        Cost::new(self.mp_cost, self.tp_cost)
    }
}
