//! Card-hand command menu.
//!
//! Models the list the host renders while an actor picks a card: one entry
//! per selectable card followed by the draw command. Rendering stays with
//! the host; this module decides what is listed, what is enabled, and what
//! picking or discarding an entry does to the pools.

use crate::cards::{CardId, CardRegistry, ExhaustLookup};
use crate::core::RandomSource;

use super::coordinator::{DrawOutcome, PoolCoordinator};
use super::resources::Resources;

/// One row of the hand menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    /// A card in the hand.
    Card {
        hand_index: usize,
        card: CardId,
        name: String,
        /// The actor can pay the card's costs.
        enabled: bool,
        exhaust: bool,
    },
    /// The draw command.
    Draw { label: String, enabled: bool },
}

impl MenuEntry {
    /// Check if picking this entry does anything.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        match self {
            MenuEntry::Card { enabled, .. } | MenuEntry::Draw { enabled, .. } => *enabled,
        }
    }
}

/// What picking a menu entry did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuSelection {
    /// A card was staged for the pending action.
    Staged(CardId),
    /// The draw command ran.
    Drew(DrawOutcome),
    /// Disabled or missing entry.
    Unavailable,
}

/// The hand menu for one actor at one moment.
///
/// Rebuild it after anything that changes the hand or the actor's
/// resources; entries hold hand indices that go stale otherwise.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HandMenu {
    entries: Vec<MenuEntry>,
}

impl HandMenu {
    /// List the unreserved cards in hand order, then the draw command.
    ///
    /// Cards missing from `registry` are listed under their id and treated
    /// as free.
    #[must_use]
    pub fn build<R: RandomSource>(
        pools: &PoolCoordinator<R>,
        registry: &CardRegistry,
        resources: &Resources,
    ) -> Self {
        let hand = pools.hand();
        let mut entries: Vec<MenuEntry> = hand
            .cards()
            .iter()
            .enumerate()
            .filter(|&(index, _)| !hand.is_reserved(index))
            .map(|(hand_index, &card)| {
                let definition = registry.get(card);
                MenuEntry::Card {
                    hand_index,
                    card,
                    name: definition.map_or_else(|| card.to_string(), |d| d.name.clone()),
                    enabled: definition.map_or(true, |d| resources.can_pay(d.cost())),
                    exhaust: pools.catalog().is_exhaust(card),
                }
            })
            .collect();

        let command = &pools.config().draw_command;
        if command.enabled {
            entries.push(MenuEntry::Draw {
                label: command.label.clone(),
                enabled: pools.can_use_draw_command(resources),
            });
        }

        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, menu_index: usize) -> Option<&MenuEntry> {
        self.entries.get(menu_index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick the entry at `menu_index`.
    ///
    /// A card entry stages its card; the draw entry pays for and draws one
    /// card. Disabled entries do nothing.
    pub fn select<R: RandomSource>(
        &self,
        menu_index: usize,
        pools: &mut PoolCoordinator<R>,
        resources: &mut Resources,
    ) -> MenuSelection {
        match self.entries.get(menu_index) {
            Some(MenuEntry::Card { hand_index, enabled: true, .. }) => pools
                .stage_card(*hand_index)
                .map_or(MenuSelection::Unavailable, MenuSelection::Staged),
            Some(MenuEntry::Draw { enabled: true, .. }) => {
                MenuSelection::Drew(pools.use_draw_command(resources))
            }
            _ => MenuSelection::Unavailable,
        }
    }

    /// Discard the card under `menu_index`.
    ///
    /// Only card entries can be discarded, affordable or not.
    pub fn discard<R: RandomSource>(&self, menu_index: usize, pools: &mut PoolCoordinator<R>) -> bool {
        match self.entries.get(menu_index) {
            Some(MenuEntry::Card { hand_index, .. }) => pools.manual_discard(*hand_index),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::BattleLifecycle;
    use crate::cards::{ActorCatalog, CardDefinition};
    use crate::core::{ActorId, DeckConfig};
    use std::sync::Arc;

    fn registry() -> CardRegistry {
        [
            CardDefinition::new(CardId::new(1), "Strike"),
            CardDefinition::new(CardId::new(2), "Fireball").with_mp_cost(30),
            CardDefinition::new(CardId::new(3), "Offering").exhausting(),
        ]
        .into_iter()
        .collect()
    }

    fn pools() -> PoolCoordinator {
        let catalog = ActorCatalog::from_registry(&registry(), [1, 2, 3].map(CardId::new));
        let config = Arc::new(DeckConfig::default().with_excluded([]).with_hand_size(3));
        let mut pools = PoolCoordinator::with_seed(ActorId::new(0), catalog, config, 11);
        pools.on_battle_start();
        pools.on_actor_input_start();
        pools
    }

    fn card_entry(menu: &HandMenu, card: CardId) -> Option<(usize, &MenuEntry)> {
        menu.entries()
            .iter()
            .enumerate()
            .find(|(_, e)| matches!(e, MenuEntry::Card { card: c, .. } if *c == card))
    }

    #[test]
    fn test_build_lists_cards_then_draw() {
        let pools = pools();
        let menu = HandMenu::build(&pools, &registry(), &Resources::new(10, 0));

        assert_eq!(menu.len(), 4);
        assert!(matches!(menu.get(3), Some(MenuEntry::Draw { enabled: false, .. })));

        let (_, fireball) = card_entry(&menu, CardId::new(2)).unwrap();
        assert!(!fireball.is_enabled());

        let (_, offering) = card_entry(&menu, CardId::new(3)).unwrap();
        assert!(matches!(offering, MenuEntry::Card { exhaust: true, enabled: true, .. }));
    }

    #[test]
    fn test_build_hides_reserved() {
        let mut pools = pools();
        pools.reserve(0);

        let menu = HandMenu::build(&pools, &registry(), &Resources::new(99, 99));

        assert_eq!(menu.len(), 3);
        assert!(menu
            .entries()
            .iter()
            .all(|e| !matches!(e, MenuEntry::Card { hand_index: 0, .. })));
    }

    #[test]
    fn test_select_card_stages_it() {
        let mut pools = pools();
        let mut res = Resources::new(99, 0);
        let menu = HandMenu::build(&pools, &registry(), &res);

        let selection = menu.select(0, &mut pools, &mut res);

        assert_eq!(selection, MenuSelection::Staged(pools.hand().cards()[0]));
        assert!(pools.hand().is_reserved(0));
    }

    #[test]
    fn test_select_disabled_card() {
        let mut pools = pools();
        let mut res = Resources::new(0, 0);
        let menu = HandMenu::build(&pools, &registry(), &res);
        let (index, _) = card_entry(&menu, CardId::new(2)).unwrap();

        assert_eq!(menu.select(index, &mut pools, &mut res), MenuSelection::Unavailable);
        assert_eq!(pools.hand().reserved_count(), 0);
    }

    #[test]
    fn test_select_draw_entry() {
        let mut pools = pools();
        pools.on_actor_turn_end();
        let mut res = Resources::new(0, 10);
        let menu = HandMenu::build(&pools, &registry(), &res);

        let selection = menu.select(0, &mut pools, &mut res);

        assert!(matches!(selection, MenuSelection::Drew(DrawOutcome::Drew(_))));
        assert_eq!(res.tp, 0);
        assert_eq!(pools.hand().len(), 1);
    }

    #[test]
    fn test_discard_only_cards() {
        let mut pools = pools();
        let menu = HandMenu::build(&pools, &registry(), &Resources::new(0, 99));

        assert!(!menu.discard(3, &mut pools)); // draw entry
        assert!(menu.discard(0, &mut pools));
        assert_eq!(pools.hand().len(), 2);
        assert_eq!(pools.discard_size(), 1);
        assert!(!menu.discard(42, &mut pools));
    }

    #[test]
    fn test_draw_entry_hidden_when_disabled() {
        let catalog = ActorCatalog::new([CardId::new(1)]);
        let mut config = DeckConfig::default().with_excluded([]);
        config.draw_command.enabled = false;
        let pools = PoolCoordinator::with_seed(ActorId::new(0), catalog, Arc::new(config), 1);

        let menu = HandMenu::build(&pools, &registry(), &Resources::default());
        assert!(menu.is_empty());
    }
}
