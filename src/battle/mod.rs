//! Battle-time pool management.
//!
//! ## Key Types
//!
//! - `PoolCoordinator`: One actor's four piles and their transitions
//! - `BattleLifecycle`: Hooks the host's battle flow calls
//! - `BattleParty`: Pools for every party member
//! - `DeckStatus` / `StatusTracker`: HUD snapshots
//! - `HandMenu`: The card-hand command list
//! - `Resources` / `Cost`: MP and TP bookkeeping for costs

pub mod coordinator;
pub mod lifecycle;
pub mod menu;
pub mod party;
pub mod resources;
pub mod status;

pub use coordinator::{DrawOutcome, PoolCoordinator, PoolPhase};
pub use lifecycle::BattleLifecycle;
pub use menu::{HandMenu, MenuEntry, MenuSelection};
pub use party::{BattleParty, PartyError};
pub use resources::{Cost, Resources};
pub use status::{DeckStatus, HandSlot, StatusTracker};
