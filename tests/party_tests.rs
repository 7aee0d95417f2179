//! Party integration tests.
//!
//! These tests verify multi-actor behavior:
//! - Each actor's piles are independent
//! - Turn start flushes every member
//! - Per-actor hooks only touch the named actor
//! - Registry-built catalogs carry exhaust tags through to routing

use deck_battle::battle::{BattleParty, DeckStatus, HandMenu, MenuSelection, PoolPhase, Resources};
use deck_battle::cards::{ActorCatalog, CardDefinition, CardId, CardRegistry};
use deck_battle::core::{ActorId, DeckConfig};

fn registry() -> CardRegistry {
    let mut registry = CardRegistry::new();
    registry.register(CardDefinition::new(CardId::new(1), "Attack"));
    registry.register(CardDefinition::new(CardId::new(2), "Guard"));
    for id in 10..20 {
        registry.register(CardDefinition::new(CardId::new(id), format!("Skill {}", id)).with_mp_cost(5));
    }
    registry.register(CardDefinition::new(CardId::new(20), "Final Gambit").exhausting());
    registry
}

/// Two actors: one with the exhausting card, one without.
fn party() -> BattleParty {
    let registry = registry();
    let hero: Vec<CardId> = [1, 2, 10, 11, 12, 13, 14, 20].map(CardId::new).to_vec();
    let mage: Vec<CardId> = [1, 2, 15, 16, 17, 18, 19].map(CardId::new).to_vec();

    BattleParty::new(
        DeckConfig::default(),
        vec![
            ActorCatalog::from_registry(&registry, hero),
            ActorCatalog::from_registry(&registry, mage),
        ],
        1234,
    )
    .unwrap()
}

const HERO: ActorId = ActorId::new(0);
const MAGE: ActorId = ActorId::new(1);

/// Battle start builds every deck without the excluded basics.
#[test]
fn test_battle_start_sets_up_all() {
    let mut party = party();
    party.on_battle_start();

    let hero = party.get(HERO).unwrap();
    let mage = party.get(MAGE).unwrap();

    assert_eq!(hero.deck_size(), 6);
    assert_eq!(mage.deck_size(), 5);
    for (_, pools) in party.iter() {
        assert_eq!(pools.phase(), PoolPhase::Ready);
        assert!(!pools.deck().cards().contains(&CardId::new(1)));
        assert!(!pools.deck().cards().contains(&CardId::new(2)));
    }
}

/// Hooks for one actor leave the other alone.
#[test]
fn test_per_actor_hooks_are_isolated() {
    let mut party = party();
    party.on_battle_start();

    assert_eq!(party.on_actor_input_start(HERO), 5);

    assert_eq!(party.get(HERO).unwrap().hand().len(), 5);
    assert_eq!(party.get(MAGE).unwrap().hand().len(), 0);
    assert_eq!(party.get(MAGE).unwrap().deck_size(), 5);
}

/// Turn start commits leftover reservations for every member.
#[test]
fn test_turn_start_flushes_every_member() {
    let mut party = party();
    party.on_battle_start();
    party.on_actor_input_start(HERO);
    party.on_actor_input_start(MAGE);

    let hero_card = party.get_mut(HERO).unwrap().stage_card(0).unwrap();
    let mage_card = party.get_mut(MAGE).unwrap().stage_card(1).unwrap();

    let flushed = party.on_turn_start();

    assert_eq!(flushed, vec![(HERO, vec![hero_card]), (MAGE, vec![mage_card])]);
    for (_, pools) in party.iter() {
        assert_eq!(pools.hand().len(), 4);
        assert_eq!(pools.hand().reserved_count(), 0);
        assert!(pools.is_conserved());
    }
}

/// Playing the exhausting card through the menu removes it for the battle.
#[test]
fn test_menu_play_exhausting_card() {
    let registry = registry();
    let mut party = party();
    party.on_battle_start();
    party.on_actor_input_start(HERO);
    // Pull the whole deck so the exhausting card is in hand
    party.get_mut(HERO).unwrap().force_draw();

    let mut resources = Resources::new(50, 0);
    let pools = party.get_mut(HERO).unwrap();
    let menu = HandMenu::build(pools, &registry, &resources);
    let gambit = menu
        .entries()
        .iter()
        .position(|e| matches!(e, deck_battle::MenuEntry::Card { card, .. } if *card == CardId::new(20)))
        .expect("whole deck is in hand");

    assert_eq!(
        menu.select(gambit, pools, &mut resources),
        MenuSelection::Staged(CardId::new(20))
    );
    assert_eq!(party.on_action_start(HERO), vec![CardId::new(20)]);

    let hero = party.get(HERO).unwrap();
    assert_eq!(hero.exhaust_pile(), &[CardId::new(20)]);
    assert_eq!(hero.discard_size(), 0);

    let status = DeckStatus::capture(hero);
    assert_eq!(status.exhaust_size, 1);
    assert_eq!(status.hand.len(), 5);
}

/// A whole battle round trip ends with every pile abandoned.
#[test]
fn test_battle_end() {
    let mut party = party();
    party.on_battle_start();
    party.on_actor_input_start(HERO);
    party.on_turn_end();

    party.on_battle_end();

    for (_, pools) in party.iter() {
        assert_eq!(pools.phase(), PoolPhase::Uninitialized);
        assert_eq!(pools.total_cards(), 0);
    }
}

/// Same seed, same shuffles.
#[test]
fn test_party_is_deterministic() {
    let mut a = party();
    let mut b = party();
    a.on_battle_start();
    b.on_battle_start();

    for actor in [HERO, MAGE] {
        assert_eq!(
            a.get(actor).unwrap().deck().cards(),
            b.get(actor).unwrap().deck().cards()
        );
    }
}
