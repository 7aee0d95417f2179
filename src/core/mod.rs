//! Core types: actors, RNG, configuration.
//!
//! Everything here is independent of how cards move between piles.

pub mod actor;
pub mod rng;
pub mod config;

pub use actor::{ActorId, ActorMap, MAX_ACTORS};
pub use rng::{GameRng, RandomSource};
pub use config::{ConfigError, DeckConfig, DrawCommandConfig, DEFAULT_HAND_SIZE};
