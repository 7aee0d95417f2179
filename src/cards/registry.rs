//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores all card definitions known to the battle.
//! It provides fast lookup by `CardId` and answers exhaust-tag queries.

use rustc_hash::FxHashMap;

use super::catalog::ExhaustLookup;
use super::definition::{CardDefinition, CardId};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use deck_battle::cards::{CardDefinition, CardId, CardRegistry, ExhaustLookup};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new(CardId::new(10), "Slash"));
/// registry.register(CardDefinition::new(CardId::new(11), "Last Stand").exhausting());
///
/// assert_eq!(registry.get(CardId::new(10)).map(|c| c.name.as_str()), Some("Slash"));
/// assert!(registry.is_exhaust(CardId::new(11)));
/// assert!(!registry.is_exhaust(CardId::new(99)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Returns the definition previously stored under the same id, if any.
    /// Content data is allowed to override earlier entries.
    pub fn register(&mut self, card: CardDefinition) -> Option<CardDefinition> {
        self.cards.insert(card.id, card)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardDefinition>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}

impl FromIterator<CardDefinition> for CardRegistry {
    fn from_iter<I: IntoIterator<Item = CardDefinition>>(iter: I) -> Self {
        let mut registry = Self::new();
        for card in iter {
            registry.register(card);
        }
        registry
    }
}

impl ExhaustLookup for CardRegistry {
    fn is_exhaust(&self, card: CardId) -> bool {
        self.get(card).is_some_and(|c| c.exhaust)
    }
}
