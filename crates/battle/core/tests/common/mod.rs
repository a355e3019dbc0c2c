#![allow(dead_code)]

use std::sync::Arc;

use battle_core::{
    BattleEngine, BattleEvent, BattleState, Combatant, Command, EntityId, Faction, Grid, Position,
    Resolution, SequenceSource, Stats,
};

pub const HERO: EntityId = EntityId(1);
pub const GOBLIN: EntityId = EntityId(2);

pub fn hero() -> Combatant {
    Combatant::new(
        HERO,
        "Hero",
        Faction::Player,
        Position::new(1, 1),
        Stats::new(16, 30, 30, 6, 5, 3, 8, 1),
    )
}

pub fn goblin() -> Combatant {
    Combatant::new(
        GOBLIN,
        "Goblin",
        Faction::Enemy,
        Position::new(2, 1),
        Stats::new(13, 10, 10, 6, 4, 2, 6, 1),
    )
}

/// Fluent setup for battle fixtures. Defaults to the hero/goblin duel on an
/// open 10x10 grid with the hero active.
pub struct BattleBuilder {
    width: u32,
    height: u32,
    blocked: Vec<Position>,
    combatants: Vec<Combatant>,
    initiative: Vec<EntityId>,
    active: EntityId,
    round: u32,
}

impl BattleBuilder {
    pub fn new() -> Self {
        Self {
            width: 10,
            height: 10,
            blocked: Vec::new(),
            combatants: vec![hero(), goblin()],
            initiative: vec![HERO, GOBLIN],
            active: HERO,
            round: 1,
        }
    }

    pub fn blocked(mut self, cells: impl IntoIterator<Item = Position>) -> Self {
        self.blocked.extend(cells);
        self
    }

    /// Adds a combatant, replacing any existing one with the same id.
    pub fn with(mut self, combatant: Combatant) -> Self {
        self.combatants.retain(|c| c.id != combatant.id);
        self.combatants.push(combatant);
        self
    }

    /// Rewrites the combatant with `id` in place.
    pub fn edit(mut self, id: EntityId, f: impl FnOnce(&mut Combatant)) -> Self {
        if let Some(combatant) = self.combatants.iter_mut().find(|c| c.id == id) {
            f(combatant);
        }
        self
    }

    pub fn initiative(mut self, order: impl IntoIterator<Item = EntityId>) -> Self {
        self.initiative = order.into_iter().collect();
        self
    }

    pub fn active(mut self, active: EntityId) -> Self {
        self.active = active;
        self
    }

    pub fn round(mut self, round: u32) -> Self {
        self.round = round;
        self
    }

    pub fn build(self) -> Arc<BattleState> {
        let state = BattleState::new(
            Grid::new(self.width, self.height, self.blocked),
            self.combatants,
            self.initiative,
            self.active,
        )
        .expect("fixture must be valid")
        .with_round(self.round)
        .expect("fixture round must be positive");
        Arc::new(state)
    }
}

pub fn engine(rolls: impl IntoIterator<Item = i32>) -> BattleEngine<SequenceSource> {
    BattleEngine::new(SequenceSource::new(rolls))
}

/// Resolves a single command, panicking on a defect.
pub fn resolve(
    engine: &mut BattleEngine<SequenceSource>,
    state: &Arc<BattleState>,
    command: impl Into<Command>,
) -> Resolution {
    engine
        .resolve(state, &command.into())
        .expect("resolution must not fail")
}

pub fn kinds(events: &[BattleEvent]) -> Vec<&'static str> {
    events.iter().map(BattleEvent::kind).collect()
}
