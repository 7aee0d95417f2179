//! Per-actor card pool coordinator.
//!
//! `PoolCoordinator` owns an actor's four piles and every transition
//! between them:
//!
//! ```text
//!            draw                 reserve/commit
//!   Deck ──────────────▶ Hand ──────────────────▶ (played)
//!    ▲                    │                          │
//!    │ reshuffle          │ discard                  ├──▶ Exhaust  (exhaust tag)
//!    │ (when Deck empty)  ▼                          ▼
//!    └─────────────── Discard ◀──────────────────────┘
//! ```
//!
//! Outside of a call, every card of the actor's post-exclusion catalog is in
//! exactly one pile, so `total_cards() == pool_size()` always holds.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cards::{ActorCatalog, CardId, ExhaustLookup};
use crate::core::{ActorId, DeckConfig, GameRng, RandomSource};
use crate::zones::{Deck, Hand};

use super::lifecycle::BattleLifecycle;
use super::resources::Resources;

/// Where an actor's pools are in the battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolPhase {
    /// No battle set up yet, or the last one ended.
    #[default]
    Uninitialized,
    /// Deck built, no hand drawn this turn.
    Ready,
    /// Hand drawn; cards may be staged and committed.
    HandActive,
}

/// Result of using the draw command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// Cost paid and a card drawn.
    Drew(CardId),
    /// Cost paid but deck and discard were both empty.
    PilesEmpty,
    /// The actor can't pay; nothing happened.
    Unaffordable,
    /// The draw command is turned off; nothing happened.
    Disabled,
}

impl DrawOutcome {
    /// The drawn card, if any.
    #[must_use]
    pub fn card(self) -> Option<CardId> {
        match self {
            DrawOutcome::Drew(card) => Some(card),
            _ => None,
        }
    }

    /// Check if the cost was paid.
    #[must_use]
    pub fn paid(self) -> bool {
        matches!(self, DrawOutcome::Drew(_) | DrawOutcome::PilesEmpty)
    }
}

/// Card pools for one actor.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use deck_battle::battle::{BattleLifecycle, PoolCoordinator};
/// use deck_battle::cards::{ActorCatalog, CardId};
/// use deck_battle::core::{ActorId, DeckConfig};
///
/// let catalog = ActorCatalog::new((1..=7).map(CardId::new));
/// let config = Arc::new(DeckConfig::default().with_excluded([]));
/// let mut pools = PoolCoordinator::with_seed(ActorId::new(0), catalog, config, 42);
///
/// pools.on_battle_start();
/// pools.on_actor_input_start();
/// assert_eq!(pools.hand().len(), 5);
///
/// let staged = pools.stage_card(0);
/// assert!(staged.is_some());
/// assert_eq!(pools.on_action_start(), vec![staged.unwrap()]);
///
/// pools.on_actor_turn_end();
/// assert_eq!(pools.discard_size(), 5);
/// assert!(pools.is_conserved());
/// ```
#[derive(Clone, Debug)]
pub struct PoolCoordinator<R = GameRng> {
    actor: ActorId,
    catalog: ActorCatalog,
    config: Arc<DeckConfig>,
    rng: R,

    deck: Deck,
    hand: Hand,
    discard: Vec<CardId>,
    exhaust: Vec<CardId>,

    phase: PoolPhase,
    drawn_this_turn: bool,
    /// Cards in play this battle (catalog minus exclusions).
    pool_size: usize,
}

impl PoolCoordinator<GameRng> {
    /// Create a coordinator shuffling with a `GameRng` seeded from `seed`.
    #[must_use]
    pub fn with_seed(actor: ActorId, catalog: ActorCatalog, config: Arc<DeckConfig>, seed: u64) -> Self {
        Self::new(actor, catalog, config, GameRng::new(seed))
    }
}

impl<R: RandomSource> PoolCoordinator<R> {
    /// Create a coordinator. Piles stay empty until `setup_deck`.
    #[must_use]
    pub fn new(actor: ActorId, catalog: ActorCatalog, config: Arc<DeckConfig>, rng: R) -> Self {
        Self {
            actor,
            catalog,
            config,
            rng,
            deck: Deck::new(),
            hand: Hand::new(),
            discard: Vec::new(),
            exhaust: Vec::new(),
            phase: PoolPhase::Uninitialized,
            drawn_this_turn: false,
            pool_size: 0,
        }
    }

    // === Setup ===

    /// Rebuild every pile for a new battle.
    ///
    /// Discard and exhaust are emptied, the hand is cleared, and the deck is
    /// rebuilt from the catalog minus the configured exclusions.
    pub fn setup_deck(&mut self) {
        self.discard.clear();
        self.exhaust.clear();
        self.hand.clear();
        self.deck
            .initialize(self.catalog.cards(), &self.config.excluded_cards, &mut self.rng);

        self.pool_size = self.deck.len();
        self.drawn_this_turn = false;
        self.phase = PoolPhase::Ready;

        debug!(actor = %self.actor, deck = self.pool_size, "deck set up");
    }

    // === Drawing ===

    /// Draw `hand_size` cards one at a time.
    ///
    /// Returns how many cards actually reached the hand.
    pub fn draw_hand(&mut self) -> usize {
        // A miss means both piles are dry, so later draws would miss too
        let drawn = (0..self.config.hand_size)
            .map_while(|_| self.draw_card())
            .count();

        if self.phase == PoolPhase::Ready {
            self.phase = PoolPhase::HandActive;
        }
        drawn
    }

    /// Draw one card into the hand.
    ///
    /// An empty deck is refilled from the discard pile first. If both are
    /// empty nothing is drawn.
    pub fn draw_card(&mut self) -> Option<CardId> {
        if self.deck.is_empty() {
            self.reshuffle_discard();
        }

        let Some(card) = self.deck.draw() else {
            trace!(actor = %self.actor, "draw with empty deck and discard");
            return None;
        };
        self.hand.add(card);
        Some(card)
    }

    /// Free single draw, for scripted host commands.
    pub fn force_draw(&mut self) -> Option<CardId> {
        self.draw_card()
    }

    /// Move the whole discard pile into the deck and shuffle.
    fn reshuffle_discard(&mut self) {
        if self.discard.is_empty() {
            return;
        }
        let count = self.discard.len();
        self.deck.extend(self.discard.drain(..));
        self.deck.shuffle(&mut self.rng);

        debug!(actor = %self.actor, cards = count, "discard reshuffled into deck");
    }

    // === Draw command ===

    /// Check if the draw command is enabled and affordable.
    #[must_use]
    pub fn can_use_draw_command(&self, resources: &Resources) -> bool {
        let command = &self.config.draw_command;
        command.enabled && resources.can_pay(command.cost())
    }

    /// Pay for and perform one draw. Does not end the turn.
    ///
    /// The cost is paid whenever the command is usable, even if the piles
    /// turn out to be dry.
    pub fn use_draw_command(&mut self, resources: &mut Resources) -> DrawOutcome {
        let command = &self.config.draw_command;
        if !command.enabled {
            return DrawOutcome::Disabled;
        }
        if !resources.pay(command.cost()) {
            return DrawOutcome::Unaffordable;
        }

        match self.draw_card() {
            Some(card) => DrawOutcome::Drew(card),
            None => DrawOutcome::PilesEmpty,
        }
    }

    // === Hand selection ===

    /// Reserve a hand slot. See `Hand::reserve`.
    pub fn reserve(&mut self, hand_index: usize) -> bool {
        self.hand.reserve(hand_index)
    }

    /// Release the most recent reservation. See `Hand::unreserve`.
    pub fn unreserve(&mut self) -> Option<usize> {
        self.hand.unreserve()
    }

    /// The player picked a card: reserve its slot and return it.
    ///
    /// `None` if the slot is reserved or out of bounds.
    pub fn stage_card(&mut self, hand_index: usize) -> Option<CardId> {
        let card = self.hand.get(hand_index)?;
        self.hand.reserve(hand_index);
        trace!(actor = %self.actor, %card, hand_index, "card staged");
        Some(card)
    }

    /// The player backed out of target selection: roll back the last stage.
    pub fn cancel_staged(&mut self) -> Option<usize> {
        self.hand.unreserve()
    }

    /// Take reserved cards out of the hand and route them to their piles.
    ///
    /// Returns the committed cards in removal order.
    pub fn commit(&mut self) -> Vec<CardId> {
        let played = self.hand.commit();
        if !played.is_empty() {
            debug!(actor = %self.actor, cards = played.len(), "reserved cards committed");
        }
        self.process_used_cards(played.iter().copied());
        played
    }

    /// Route played cards: exhaust-tagged ones to the exhaust pile, the rest
    /// to the discard pile.
    pub fn process_used_cards(&mut self, cards: impl IntoIterator<Item = CardId>) {
        for card in cards {
            if self.catalog.is_exhaust(card) {
                trace!(actor = %self.actor, %card, "card exhausted");
                self.exhaust.push(card);
            } else {
                self.discard.push(card);
            }
        }
    }

    // === Discarding ===

    /// Move the whole hand to the discard pile.
    ///
    /// Returns how many cards were discarded.
    pub fn discard_hand(&mut self) -> usize {
        let cards = self.hand.clear();
        let count = cards.len();
        self.discard.extend(cards);
        count
    }

    /// Discard one card from the hand by index. Clears all reservations.
    pub fn manual_discard(&mut self, hand_index: usize) -> bool {
        let Some(card) = self.hand.remove(hand_index) else {
            return false;
        };
        debug!(actor = %self.actor, %card, hand_index, "manual discard");
        self.discard.push(card);
        true
    }

    // === Queries ===

    #[must_use]
    pub fn actor(&self) -> ActorId {
        self.actor
    }

    #[must_use]
    pub fn catalog(&self) -> &ActorCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> PoolPhase {
        self.phase
    }

    /// Check if this turn's hand has already been drawn.
    #[must_use]
    pub fn cards_drawn_this_turn(&self) -> bool {
        self.drawn_this_turn
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[CardId] {
        &self.discard
    }

    #[must_use]
    pub fn exhaust_pile(&self) -> &[CardId] {
        &self.exhaust
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn discard_size(&self) -> usize {
        self.discard.len()
    }

    #[must_use]
    pub fn exhaust_size(&self) -> usize {
        self.exhaust.len()
    }

    /// Number of cards this battle started with.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Cards currently held across all four piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len() + self.exhaust.len()
    }

    /// Check that no card has been lost or duplicated.
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        self.total_cards() == self.pool_size
    }
}

impl<R: RandomSource> BattleLifecycle for PoolCoordinator<R> {
    fn on_battle_start(&mut self) {
        self.setup_deck();
    }

    fn on_turn_start(&mut self) -> Vec<CardId> {
        self.commit()
    }

    fn on_actor_input_start(&mut self) -> usize {
        if self.drawn_this_turn {
            return 0;
        }
        self.drawn_this_turn = true;
        let drawn = self.draw_hand();
        debug!(actor = %self.actor, drawn, "turn hand drawn");
        drawn
    }

    fn on_action_start(&mut self) -> Vec<CardId> {
        self.commit()
    }

    fn on_actor_turn_end(&mut self) {
        if !self.config.keep_hand {
            let discarded = self.discard_hand();
            trace!(actor = %self.actor, discarded, "end of turn discard");
        }
        self.drawn_this_turn = false;
        if self.phase == PoolPhase::HandActive {
            self.phase = PoolPhase::Ready;
        }
    }

    fn on_battle_end(&mut self) {
        self.deck = Deck::new();
        self.hand.clear();
        self.discard.clear();
        self.exhaust.clear();
        self.pool_size = 0;
        self.drawn_this_turn = false;
        self.phase = PoolPhase::Uninitialized;
    }
}
