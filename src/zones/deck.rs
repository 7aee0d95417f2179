//! Draw pile.
//!
//! The deck is a stack: index 0 is the bottom, the last element is the top
//! and is drawn first.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::rng::RandomSource;

/// An actor's draw pile.
///
/// ## Usage
///
/// ```
/// use deck_battle::cards::CardId;
/// use deck_battle::core::GameRng;
/// use deck_battle::zones::Deck;
///
/// let mut rng = GameRng::new(42);
/// let mut deck = Deck::new();
///
/// let catalog: Vec<_> = (1..=6).map(CardId::new).collect();
/// deck.initialize(&catalog, &[CardId::new(1)], &mut rng);
///
/// assert_eq!(deck.len(), 5);
/// let top = deck.draw();
/// assert!(top.is_some());
/// assert_eq!(deck.len(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<CardId>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with `catalog` minus every id in `excluded`,
    /// then shuffle.
    pub fn initialize(&mut self, catalog: &[CardId], excluded: &[CardId], rng: &mut impl RandomSource) {
        self.cards = catalog
            .iter()
            .copied()
            .filter(|c| !excluded.contains(c))
            .collect();
        self.shuffle(rng);
    }

    /// Shuffle in place (Fisher–Yates over the current length).
    pub fn shuffle(&mut self, rng: &mut impl RandomSource) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.next_index(i + 1);
            self.cards.swap(i, j);
        }
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<CardId> {
        self.cards.pop()
    }

    /// Put a card on top. Does not shuffle.
    pub fn add(&mut self, card: CardId) {
        self.cards.push(card);
    }

    /// Put several cards on top, in order. Does not shuffle.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = CardId>) {
        self.cards.extend(cards);
    }

    /// Get the top card without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// Cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    /// Always picks the lowest index, which rotates the deck by one.
    struct ZeroRng;

    impl RandomSource for ZeroRng {
        fn next_index(&mut self, _bound: usize) -> usize {
            0
        }
    }

    /// Always picks the current position, leaving order untouched.
    struct IdentityRng;

    impl RandomSource for IdentityRng {
        fn next_index(&mut self, bound: usize) -> usize {
            bound - 1
        }
    }

    fn ids(raw: &[u32]) -> Vec<CardId> {
        raw.iter().copied().map(CardId::new).collect()
    }

    #[test]
    fn test_initialize_excludes() {
        let mut deck = Deck::new();
        deck.initialize(&ids(&[1, 2, 3, 4]), &ids(&[2, 4]), &mut IdentityRng);

        assert_eq!(deck.cards(), ids(&[1, 3]).as_slice());
    }

    #[test]
    fn test_initialize_excludes_every_copy() {
        let mut deck = Deck::new();
        deck.initialize(&ids(&[5, 5, 6]), &ids(&[5]), &mut IdentityRng);

        assert_eq!(deck.cards(), ids(&[6]).as_slice());
    }

    #[test]
    fn test_initialize_empty_catalog() {
        let mut deck = Deck::new();
        deck.add(CardId::new(9));
        deck.initialize(&[], &[], &mut GameRng::new(1));

        assert!(deck.is_empty());
    }

    #[test]
    fn test_draw_is_lifo() {
        let mut deck = Deck::new();
        deck.add(CardId::new(10));
        deck.add(CardId::new(11));

        assert_eq!(deck.peek(), Some(CardId::new(11)));
        assert_eq!(deck.draw(), Some(CardId::new(11)));
        assert_eq!(deck.draw(), Some(CardId::new(10)));
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn test_shuffle_with_scripted_source() {
        let mut deck = Deck::new();
        deck.extend(ids(&[1, 2, 3, 4]));

        // i=3 swap(3,0): [4,2,3,1]; i=2 swap(2,0): [3,2,4,1]; i=1 swap(1,0): [2,3,4,1]
        deck.shuffle(&mut ZeroRng);

        assert_eq!(deck.cards(), ids(&[2, 3, 4, 1]).as_slice());
    }

    #[test]
    fn test_shuffle_preserves_contents() {
        let mut deck = Deck::new();
        deck.extend((0..20).map(CardId::new));
        let before = deck.cards().to_vec();

        deck.shuffle(&mut GameRng::new(42));

        let mut after = deck.cards().to_vec();
        assert_ne!(before, after);
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut deck = Deck::new();
        deck.shuffle(&mut ZeroRng);
        assert!(deck.is_empty());

        deck.add(CardId::new(1));
        deck.shuffle(&mut ZeroRng);
        assert_eq!(deck.cards(), ids(&[1]).as_slice());
    }
}
