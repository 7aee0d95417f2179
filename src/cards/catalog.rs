//! Per-actor card catalogs.
//!
//! An `ActorCatalog` is everything the pools need to know about an actor's
//! cards: which ids the actor can use, and which of those exhaust. The host
//! builds it once per battle and hands it to the coordinator, so the pools
//! never reach back into global content data.

use rustc_hash::FxHashSet;

use super::definition::CardId;
use super::registry::CardRegistry;

/// Answers whether a played card leaves the battle.
pub trait ExhaustLookup {
    /// Check if `card` carries the exhaust tag.
    fn is_exhaust(&self, card: CardId) -> bool;
}

impl ExhaustLookup for FxHashSet<CardId> {
    fn is_exhaust(&self, card: CardId) -> bool {
        self.contains(&card)
    }
}

impl<T: ExhaustLookup + ?Sized> ExhaustLookup for &T {
    fn is_exhaust(&self, card: CardId) -> bool {
        (**self).is_exhaust(card)
    }
}

/// An actor's usable cards plus their exhaust tags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActorCatalog {
    cards: Vec<CardId>,
    exhaust: FxHashSet<CardId>,
}

impl ActorCatalog {
    /// Create a catalog with no exhausting cards.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            exhaust: FxHashSet::default(),
        }
    }

    /// Mark cards as exhausting (builder pattern).
    #[must_use]
    pub fn with_exhaust(mut self, cards: impl IntoIterator<Item = CardId>) -> Self {
        self.exhaust.extend(cards);
        self
    }

    /// Build a catalog for `cards`, copying exhaust tags from `registry`.
    ///
    /// Ids missing from the registry are kept and treated as non-exhausting.
    ///
    /// ```
    /// use deck_battle::cards::{ActorCatalog, CardDefinition, CardId, CardRegistry, ExhaustLookup};
    ///
    /// let registry: CardRegistry = [
    ///     CardDefinition::new(CardId::new(3), "Cleave"),
    ///     CardDefinition::new(CardId::new(4), "Sacrifice").exhausting(),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let catalog = ActorCatalog::from_registry(&registry, [CardId::new(3), CardId::new(4)]);
    /// assert_eq!(catalog.len(), 2);
    /// assert!(catalog.is_exhaust(CardId::new(4)));
    /// ```
    #[must_use]
    pub fn from_registry(registry: &CardRegistry, cards: impl IntoIterator<Item = CardId>) -> Self {
        let cards: Vec<CardId> = cards.into_iter().collect();
        let exhaust = cards
            .iter()
            .copied()
            .filter(|&c| registry.is_exhaust(c))
            .collect();
        Self { cards, exhaust }
    }

    /// All usable cards, before exclusions.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Number of usable cards, before exclusions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the actor has no usable cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl ExhaustLookup for ActorCatalog {
    fn is_exhaust(&self, card: CardId) -> bool {
        self.exhaust.contains(&card)
    }
}
