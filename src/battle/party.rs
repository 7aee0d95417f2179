//! Party-wide pool management.
//!
//! A `BattleParty` holds one `PoolCoordinator` per party member and fans
//! the host's battle-flow callbacks out to them. Turn start is party-wide;
//! input, action and turn end are per actor.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::cards::{ActorCatalog, CardId};
use crate::core::{ActorId, ActorMap, DeckConfig, GameRng, MAX_ACTORS};

use super::coordinator::PoolCoordinator;
use super::lifecycle::BattleLifecycle;

/// Card pools for every party member.
///
/// Each member shuffles with its own stream forked from the party seed, so
/// one actor's draws never perturb another's.
///
/// ## Example
///
/// ```
/// use deck_battle::battle::BattleParty;
/// use deck_battle::cards::{ActorCatalog, CardId};
/// use deck_battle::core::{ActorId, DeckConfig};
///
/// let catalogs = vec![
///     ActorCatalog::new((3..=9).map(CardId::new)),
///     ActorCatalog::new((10..=16).map(CardId::new)),
/// ];
/// let mut party = BattleParty::new(DeckConfig::default(), catalogs, 7)?;
///
/// party.on_battle_start();
/// party.on_turn_start();
/// party.on_actor_input_start(ActorId::new(1));
///
/// assert_eq!(party.get(ActorId::new(1)).map(|p| p.hand().len()), Some(5));
/// assert_eq!(party.get(ActorId::new(0)).map(|p| p.hand().len()), Some(0));
/// # Ok::<(), deck_battle::battle::PartyError>(())
/// ```
#[derive(Clone, Debug)]
pub struct BattleParty {
    config: Arc<DeckConfig>,
    members: ActorMap<PoolCoordinator>,
}

/// A party that can't be built.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PartyError {
    #[error("party of {count} actors exceeds the limit of {max}")]
    TooManyActors { count: usize, max: usize },
}

impl BattleParty {
    /// Create pools for each catalog, in actor order.
    ///
    /// Fails for more than `MAX_ACTORS` catalogs.
    pub fn new(
        config: DeckConfig,
        catalogs: Vec<ActorCatalog>,
        seed: u64,
    ) -> Result<Self, PartyError> {
        let count = catalogs.len();
        if count > MAX_ACTORS {
            return Err(PartyError::TooManyActors { count, max: MAX_ACTORS });
        }

        let config = Arc::new(config);
        let mut rng = GameRng::new(seed);

        let members = ActorId::all(count)
            .zip(catalogs)
            .map(|(actor, catalog)| {
                PoolCoordinator::new(actor, catalog, Arc::clone(&config), rng.fork())
            })
            .collect();

        let members = ActorMap::from_vec(members)
            .ok_or(PartyError::TooManyActors { count, max: MAX_ACTORS })?;

        Ok(Self { config, members })
    }

    #[must_use]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Number of party members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Get an actor's pools.
    #[must_use]
    pub fn get(&self, actor: ActorId) -> Option<&PoolCoordinator> {
        self.members.get(actor)
    }

    /// Get an actor's pools mutably, for staging and discarding.
    pub fn get_mut(&mut self, actor: ActorId) -> Option<&mut PoolCoordinator> {
        self.members.get_mut(actor)
    }

    /// Iterate over every member's pools.
    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &PoolCoordinator)> {
        self.members.iter()
    }

    // === Lifecycle ===

    /// Set up every member's deck.
    pub fn on_battle_start(&mut self) {
        for (_, pools) in self.members.iter_mut() {
            pools.on_battle_start();
        }
        debug!(members = self.members.len(), "party decks set up");
    }

    /// Flush every member's leftover reservations.
    ///
    /// Returns the committed cards per actor, skipping actors with none.
    pub fn on_turn_start(&mut self) -> Vec<(ActorId, Vec<CardId>)> {
        self.members
            .iter_mut()
            .map(|(actor, pools)| (actor, pools.on_turn_start()))
            .filter(|(_, played)| !played.is_empty())
            .collect()
    }

    /// `actor`'s input phase opens. Returns cards drawn (0 for unknown actors).
    pub fn on_actor_input_start(&mut self, actor: ActorId) -> usize {
        self.members
            .get_mut(actor)
            .map_or(0, |pools| pools.on_actor_input_start())
    }

    /// `actor`'s action begins. Returns the committed cards.
    pub fn on_action_start(&mut self, actor: ActorId) -> Vec<CardId> {
        self.members
            .get_mut(actor)
            .map(|pools| pools.on_action_start())
            .unwrap_or_default()
    }

    /// `actor`'s turn ends.
    pub fn on_actor_turn_end(&mut self, actor: ActorId) {
        if let Some(pools) = self.members.get_mut(actor) {
            pools.on_actor_turn_end();
        }
    }

    /// Every member's turn ends.
    pub fn on_turn_end(&mut self) {
        for (_, pools) in self.members.iter_mut() {
            pools.on_actor_turn_end();
        }
    }

    /// Abandon every member's piles.
    pub fn on_battle_end(&mut self) {
        for (_, pools) in self.members.iter_mut() {
            pools.on_battle_end();
        }
    }
}
