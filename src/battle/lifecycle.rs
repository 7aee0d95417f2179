//! Lifecycle hooks called by the host's battle flow.
//!
//! The host owns the battle loop. Its adapter layer calls these hooks at
//! the matching points instead of the pools wrapping host callbacks.
//!
//! ## Call Order
//!
//! ```text
//! on_battle_start
//! loop {
//!     on_turn_start                // every actor, before anyone acts
//!     on_actor_input_start  (1..n) // re-entered after cancelled sub-menus
//!     on_action_start              // chosen action begins executing
//!     on_actor_turn_end
//! }
//! on_battle_end
//! ```

use crate::cards::CardId;

/// Per-actor battle lifecycle.
///
/// Every hook is total: calling one out of order degrades to a no-op or an
/// empty result, never a panic.
pub trait BattleLifecycle {
    /// Battle begins: rebuild all piles from the catalog.
    fn on_battle_start(&mut self);

    /// Turn begins: flush reservations left over from the input phase.
    ///
    /// Returns the cards that were committed.
    fn on_turn_start(&mut self) -> Vec<CardId>;

    /// The actor's input phase opens.
    ///
    /// Draws the turn's hand the first time per turn only. Returns the
    /// number of cards drawn by this call.
    fn on_actor_input_start(&mut self) -> usize;

    /// The actor's chosen action starts executing: commit staged cards.
    ///
    /// Returns the cards that were committed.
    fn on_action_start(&mut self) -> Vec<CardId>;

    /// The actor's turn ends: discard the hand unless configured to keep it.
    fn on_actor_turn_end(&mut self);

    /// Battle is over: abandon all pile state.
    fn on_battle_end(&mut self);
}
