//! Read-only pool snapshots for the host's HUD.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, ExhaustLookup};
use crate::core::{ActorId, RandomSource};

use super::coordinator::{PoolCoordinator, PoolPhase};

/// One hand position as the HUD sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSlot {
    pub index: usize,
    pub card: CardId,
    pub reserved: bool,
    pub exhaust: bool,
}

/// Snapshot of one actor's piles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckStatus {
    pub actor: ActorId,
    pub phase: PoolPhase,
    pub deck_size: usize,
    pub discard_size: usize,
    pub exhaust_size: usize,
    pub hand: Vec<HandSlot>,
}

impl DeckStatus {
    /// Capture the current state of `pools`.
    #[must_use]
    pub fn capture<R: RandomSource>(pools: &PoolCoordinator<R>) -> Self {
        let hand = pools.hand();
        let slots = hand
            .cards()
            .iter()
            .enumerate()
            .map(|(index, &card)| HandSlot {
                index,
                card,
                reserved: hand.is_reserved(index),
                exhaust: pools.catalog().is_exhaust(card),
            })
            .collect();

        Self {
            actor: pools.actor(),
            phase: pools.phase(),
            deck_size: pools.deck_size(),
            discard_size: pools.discard_size(),
            exhaust_size: pools.exhaust_size(),
            hand: slots,
        }
    }

    /// Hand slots still selectable.
    pub fn available(&self) -> impl Iterator<Item = &HandSlot> {
        self.hand.iter().filter(|slot| !slot.reserved)
    }
}

/// Tracks what the deck counter last showed so it only redraws on change.
///
/// The counter shows deck and discard sizes for the acting actor.
#[derive(Clone, Debug, Default)]
pub struct StatusTracker {
    last: Option<(ActorId, usize, usize)>,
}

impl StatusTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the counter for `pools` needs redrawing, and remember
    /// its values if so.
    pub fn needs_refresh<R: RandomSource>(&mut self, pools: &PoolCoordinator<R>) -> bool {
        let current = (pools.actor(), pools.deck_size(), pools.discard_size());
        if self.last == Some(current) {
            return false;
        }
        self.last = Some(current);
        true
    }

    /// Forget the last shown values, forcing the next check to refresh.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
