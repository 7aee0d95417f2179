//! Spendable actor resources.
//!
//! The host owns an actor's MP and TP; the battle layer only borrows them
//! to check and pay for the draw command and to grey out unaffordable cards.

use serde::{Deserialize, Serialize};

/// Price of a card or command in MP and TP.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cost {
    pub mp: u32,
    pub tp: u32,
}

impl Cost {
    #[must_use]
    pub const fn new(mp: u32, tp: u32) -> Self {
        Self { mp, tp }
    }

    /// Check if the cost is zero.
    #[must_use]
    pub const fn is_free(self) -> bool {
        self.mp == 0 && self.tp == 0
    }
}

/// An actor's current MP and TP.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resources {
    pub mp: u32,
    pub tp: u32,
}

impl Resources {
    #[must_use]
    pub const fn new(mp: u32, tp: u32) -> Self {
        Self { mp, tp }
    }

    /// Check if both pools cover `cost`.
    #[must_use]
    pub fn can_pay(&self, cost: Cost) -> bool {
        self.mp >= cost.mp && self.tp >= cost.tp
    }

    /// Deduct `cost` if affordable. Returns whether anything was paid.
    pub fn pay(&mut self, cost: Cost) -> bool {
        if !self.can_pay(cost) {
            return false;
        }
        self.mp -= cost.mp;
        self.tp -= cost.tp;
        true
    }
}
