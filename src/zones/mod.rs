//! Card piles.
//!
//! Each actor owns one `Deck` and one `Hand`; discard and exhaust piles are
//! plain unordered lists kept by the coordinator.
//!
//! ## Key Types
//!
//! - `Deck`: Stack-ordered draw pile
//! - `Hand`: Ordered hand with reservation/commit

pub mod deck;
pub mod hand;

pub use deck::Deck;
pub use hand::{Hand, HandError};
