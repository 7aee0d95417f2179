//! # deck-battle
//!
//! Card pool lifecycle for deckbuilder-style turn-based battles.
//!
//! Each actor's usable skills become a deck of cards. Every turn the actor
//! draws a hand, stages cards while picking actions, and commits them when
//! the action actually runs. Played cards go to the discard pile (or leave
//! the battle if they exhaust); an empty deck is refilled by reshuffling the
//! discard pile.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: The host engine owns the battle loop, rendering and
//!    input. It calls `BattleLifecycle` hooks; nothing here wraps or
//!    intercepts host code.
//!
//! 2. **Injected Data**: Catalogs, exhaust tags and configuration are passed
//!    in. There is no global content lookup.
//!
//! 3. **Total Operations**: Bad indices, empty piles and out-of-order calls
//!    return `false`/`None`/empty results. Nothing in the pool logic panics
//!    or errors, since it runs inside a real-time UI loop.
//!
//! 4. **Deterministic**: Shuffles draw from an injected `RandomSource`;
//!    `GameRng` is seedable and forkable.
//!
//! ## Modules
//!
//! - `core`: Actor IDs, RNG, configuration
//! - `cards`: Card IDs, definitions, registry, per-actor catalogs
//! - `zones`: Deck and hand
//! - `battle`: Coordinator, lifecycle hooks, party, HUD and menu models

pub mod core;
pub mod cards;
pub mod zones;
pub mod battle;

// Re-export commonly used types
pub use crate::core::{
    ActorId, ActorMap,
    GameRng, RandomSource,
    DeckConfig, DrawCommandConfig, ConfigError,
};

pub use crate::cards::{ActorCatalog, CardDefinition, CardId, CardRegistry, ExhaustLookup};

pub use crate::zones::{Deck, Hand, HandError};

pub use crate::battle::{
    BattleLifecycle, BattleParty, PartyError,
    PoolCoordinator, PoolPhase, DrawOutcome,
    DeckStatus, HandSlot, StatusTracker,
    HandMenu, MenuEntry, MenuSelection,
    Cost, Resources,
};
