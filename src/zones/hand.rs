//! Hand with two-phase play.
//!
//! Selecting a card **reserves** its slot: the card stays in the hand but
//! can't be looked up, selected again, or reserved twice. Only `commit`
//! takes reserved cards out. A cancelled target selection rolls the last
//! reservation back with `unreserve`.
//!
//! Any `remove` invalidates positions, so it drops every reservation.
//!
//! Deserialized hands are checked: every reserved slot must be inside the
//! hand and appear once.

use smallvec::SmallVec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::CardId;

/// An actor's hand.
///
/// ## Usage
///
/// ```
/// use deck_battle::cards::CardId;
/// use deck_battle::zones::Hand;
///
/// let mut hand = Hand::new();
/// hand.add(CardId::new(1));
/// hand.add(CardId::new(2));
///
/// assert!(hand.reserve(0));
/// assert_eq!(hand.get(0), None);
///
/// let played = hand.commit();
/// assert_eq!(played, vec![CardId::new(1)]);
/// assert_eq!(hand.get(0), Some(CardId::new(2)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHand")]
pub struct Hand {
    cards: Vec<CardId>,

    /// Reserved slots in reservation order. Always valid, never repeated.
    reserved: SmallVec<[usize; 4]>,
}

/// A reservation list that doesn't fit its hand.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("reserved slot {index} is outside a hand of {len} cards")]
    OutOfBounds { index: usize, len: usize },

    #[error("slot {0} is reserved twice")]
    Duplicate(usize),
}

/// Unchecked wire form of a `Hand`.
#[derive(Deserialize)]
struct RawHand {
    cards: Vec<CardId>,
    #[serde(default)]
    reserved: SmallVec<[usize; 4]>,
}

impl TryFrom<RawHand> for Hand {
    type Error = HandError;

    fn try_from(raw: RawHand) -> Result<Self, Self::Error> {
        let mut hand = Hand {
            cards: raw.cards,
            reserved: SmallVec::new(),
        };
        for index in raw.reserved {
            if index >= hand.cards.len() {
                return Err(HandError::OutOfBounds {
                    index,
                    len: hand.cards.len(),
                });
            }
            if !hand.reserve(index) {
                return Err(HandError::Duplicate(index));
            }
        }
        Ok(hand)
    }
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card. The new slot is unreserved.
    pub fn add(&mut self, card: CardId) {
        self.cards.push(card);
    }

    /// Get the card at `index`.
    ///
    /// Reserved slots are invisible: returns `None` for them as well as for
    /// out-of-bounds indices.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<CardId> {
        if self.is_reserved(index) {
            return None;
        }
        self.cards.get(index).copied()
    }

    /// Remove the card at `index`, reserved or not.
    ///
    /// On success every reservation is cleared. Out-of-bounds indices return
    /// `None` and leave the hand untouched.
    pub fn remove(&mut self, index: usize) -> Option<CardId> {
        if index >= self.cards.len() {
            return None;
        }
        let card = self.cards.remove(index);
        self.reserved.clear();
        Some(card)
    }

    /// Reserve the slot at `index`.
    ///
    /// Fails for out-of-bounds or already reserved slots.
    pub fn reserve(&mut self, index: usize) -> bool {
        if index >= self.cards.len() || self.is_reserved(index) {
            return false;
        }
        self.reserved.push(index);
        true
    }

    /// Release the most recent reservation.
    ///
    /// Returns the released index, or `None` if nothing was reserved.
    pub fn unreserve(&mut self) -> Option<usize> {
        self.reserved.pop()
    }

    /// Take every reserved card out of the hand.
    ///
    /// Slots are removed from the highest index down so earlier removals
    /// never shift a slot still waiting to be removed. Cards are returned in
    /// that removal order.
    pub fn commit(&mut self) -> Vec<CardId> {
        let mut indices = std::mem::take(&mut self.reserved);
        indices.sort_unstable_by(|a, b| b.cmp(a));

        indices.into_iter().map(|i| self.cards.remove(i)).collect()
    }

    /// Empty the hand and all reservations, returning the previous contents.
    pub fn clear(&mut self) -> Vec<CardId> {
        self.reserved.clear();
        std::mem::take(&mut self.cards)
    }

    /// Check if the slot at `index` is reserved.
    #[must_use]
    pub fn is_reserved(&self, index: usize) -> bool {
        self.reserved.contains(&index)
    }

    /// Reserved slots in reservation order.
    #[must_use]
    pub fn reserved(&self) -> &[usize] {
        &self.reserved
    }

    /// Number of reserved slots.
    #[must_use]
    pub fn reserved_count(&self) -> usize {
        self.reserved.len()
    }

    /// All cards, reserved slots included.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Number of cards, reserved slots included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
