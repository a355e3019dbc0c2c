mod common;

use std::sync::Arc;

use battle_core::{
    BattleEvent, CombatResult, Combatant, EndTurnCommand, EntityId, Faction, MoveCommand,
    Position, Rejection,
};
use common::{BattleBuilder, GOBLIN, HERO, engine, resolve};

const ORC: EntityId = EntityId(3);

fn orc() -> Combatant {
    Combatant::new(
        ORC,
        "Orc",
        Faction::Enemy,
        Position::new(6, 6),
        common::goblin().stats,
    )
}

#[test]
fn end_turn_hands_over_within_round() {
    let state = BattleBuilder::new().build();
    let mut engine = engine([]);

    let resolution = resolve(&mut engine, &state, EndTurnCommand::new(HERO));
    let next = resolution.state();

    assert_eq!(next.active_id(), GOBLIN);
    assert_eq!(next.round(), 1);
    assert_eq!(
        resolution.events(),
        &[
            BattleEvent::TurnEnded { actor: HERO },
            BattleEvent::TurnBegan { actor: GOBLIN },
        ]
    );
}

#[test]
fn wrapping_past_the_end_starts_a_new_round() {
    let state = BattleBuilder::new().active(GOBLIN).round(3).build();
    let mut engine = engine([]);

    let resolution = resolve(&mut engine, &state, EndTurnCommand::new(GOBLIN));

    assert_eq!(resolution.state().active_id(), HERO);
    assert_eq!(resolution.state().round(), 4);
}

#[test]
fn end_turn_clears_the_moved_flag() {
    let state = BattleBuilder::new().build();
    let mut engine = engine([]);

    let moved = resolve(&mut engine, &state, MoveCommand::new(HERO, Position::new(1, 2)));
    assert!(moved.state().has_active_moved());

    let handed = resolve(&mut engine, moved.state(), EndTurnCommand::new(HERO));
    assert!(!handed.state().has_active_moved());
}

#[test]
fn dead_entries_are_skipped() {
    let state = BattleBuilder::new()
        .with(orc())
        .initiative([HERO, GOBLIN, ORC])
        .edit(GOBLIN, |goblin| goblin.is_dead = true)
        .build();
    let mut engine = engine([]);

    let resolution = resolve(&mut engine, &state, EndTurnCommand::new(HERO));

    assert_eq!(resolution.state().active_id(), ORC);
    assert_eq!(resolution.state().round(), 1);
}

#[test]
fn absent_entries_are_skipped() {
    let state = BattleBuilder::new()
        .initiative([HERO, EntityId(77), GOBLIN])
        .build();
    let mut engine = engine([]);

    let resolution = resolve(&mut engine, &state, EndTurnCommand::new(HERO));

    assert_eq!(resolution.state().active_id(), GOBLIN);
    assert_eq!(resolution.state().round(), 1);
}

#[test]
fn lone_survivor_keeps_the_turn_and_bumps_the_round() {
    let state = BattleBuilder::new()
        .with(orc())
        .initiative([HERO, GOBLIN, ORC])
        .edit(GOBLIN, |goblin| goblin.is_dead = true)
        .edit(ORC, |orc| orc.is_dead = true)
        .build();
    let mut engine = engine([]);

    let resolution = resolve(&mut engine, &state, EndTurnCommand::new(HERO));
    let next = resolution.state();

    assert_eq!(next.active_id(), HERO);
    assert_eq!(next.round(), 2);
    assert_eq!(
        resolution.events(),
        &[
            BattleEvent::TurnEnded { actor: HERO },
            BattleEvent::CombatEnded {
                result: CombatResult::Win
            },
        ]
    );
}

#[test]
fn dead_active_may_still_end_its_turn() {
    let state = BattleBuilder::new()
        .with(orc())
        .initiative([HERO, GOBLIN, ORC])
        .edit(GOBLIN, |goblin| goblin.is_dead = true)
        .active(GOBLIN)
        .build();
    let mut engine = engine([]);

    let resolution = resolve(&mut engine, &state, EndTurnCommand::new(GOBLIN));

    assert!(!resolution.is_rejected());
    assert_eq!(resolution.state().active_id(), ORC);
    assert_eq!(
        resolution.events().last(),
        Some(&BattleEvent::TurnBegan { actor: ORC })
    );
}

#[test]
fn nobody_alive_keeps_the_actor_and_the_round() {
    let state = BattleBuilder::new()
        .edit(HERO, |hero| hero.is_dead = true)
        .edit(GOBLIN, |goblin| goblin.is_dead = true)
        .build();
    let mut engine = engine([]);

    let resolution = resolve(&mut engine, &state, EndTurnCommand::new(HERO));

    assert_eq!(resolution.state().active_id(), HERO);
    assert_eq!(resolution.state().round(), 1);
    assert_eq!(
        resolution.events().last(),
        Some(&BattleEvent::CombatEnded {
            result: CombatResult::Win
        })
    );
}

#[test]
fn end_turn_preconditions() {
    let mut engine = engine([]);

    let state = BattleBuilder::new().build();
    let early = resolve(&mut engine, &state, EndTurnCommand::new(GOBLIN));
    assert_eq!(
        early.rejection(),
        Some(&Rejection::ActorNotActive {
            actor: GOBLIN,
            active: HERO,
        })
    );
    assert!(Arc::ptr_eq(early.state(), &state));

    let ghost = BattleBuilder::new().active(EntityId(9)).build();
    let missing = resolve(&mut engine, &ghost, EndTurnCommand::new(EntityId(9)));
    assert_eq!(
        missing.rejection(),
        Some(&Rejection::ActorNotFound(EntityId(9)))
    );
}

#[test]
fn active_outside_initiative_is_refused() {
    let state = BattleBuilder::new().initiative([GOBLIN]).build();
    let mut engine = engine([]);

    let resolution = resolve(&mut engine, &state, EndTurnCommand::new(HERO));

    assert_eq!(
        resolution.rejection(),
        Some(&Rejection::ActiveNotInInitiative(HERO))
    );
    assert!(Arc::ptr_eq(resolution.state(), &state));
    assert!(resolution.events().is_empty());
}

#[test]
fn turn_handover_shares_the_roster() {
    let state = BattleBuilder::new().build();
    let mut engine = engine([]);

    let resolution = resolve(&mut engine, &state, EndTurnCommand::new(HERO));

    assert_eq!(resolution.state().combatants(), state.combatants());
    assert_eq!(resolution.state().grid(), state.grid());
    assert!(std::ptr::eq(
        resolution.state().combatants(),
        state.combatants()
    ));
}
