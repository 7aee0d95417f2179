//! Card system: definitions, registry, and per-actor catalogs.
//!
//! ## Key Types
//!
//! - `CardId`: Opaque card identifier
//! - `CardDefinition`: Static card data (name, costs, exhaust tag)
//! - `CardRegistry`: Definition lookup
//! - `ActorCatalog`: One actor's usable cards, injected into the pools
//! - `ExhaustLookup`: The single question the pools ask about a card

pub mod catalog;
pub mod definition;
pub mod registry;

pub use catalog::{ActorCatalog, ExhaustLookup};
pub use definition::{CardDefinition, CardId};
pub use registry::CardRegistry;
