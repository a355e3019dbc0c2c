//! Authoritative battle state representation.
//!
//! A [`BattleState`] is an immutable snapshot. The engine never edits one in
//! place; every successful resolution builds a new version that shares the
//! untouched sub-collections (`Arc`) with its predecessor, so older versions stay
//! valid and independently referenceable.
mod error;
pub mod types;

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

pub use error::InitializationError;
pub use types::{Combatant, EntityId, Faction, Grid, Position, Stats};

use crate::config::CombatConfig;
use crate::event::CombatResult;

/// Canonical snapshot of a battle in progress.
///
/// # Invariants
///
/// - the initiative order is fixed at creation; dead entries are skipped, never removed
/// - occupancy lists exactly the living combatants, one cell each
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    round: u32,
    active: EntityId,
    has_active_moved: bool,
    initiative: Arc<[EntityId]>,
    combatants: Arc<BTreeMap<EntityId, Combatant>>,
    grid: Grid,
}

impl BattleState {
    /// Assembles a battle at round one from host-provided setup data.
    ///
    /// Occupancy is derived from the living roster; any occupancy already on
    /// `grid` is discarded. The active identity is not checked here.
    pub fn new(
        grid: Grid,
        combatants: impl IntoIterator<Item = Combatant>,
        initiative: impl IntoIterator<Item = EntityId>,
        active: EntityId,
    ) -> Result<Self, InitializationError> {
        let mut roster = BTreeMap::new();
        let mut occupancy = BTreeMap::new();

        for combatant in combatants {
            let id = combatant.id;
            if combatant.is_alive() {
                let position = combatant.position;
                if !grid.contains(position) {
                    return Err(InitializationError::OutOfBounds {
                        combatant: id,
                        position,
                        width: grid.width(),
                        height: grid.height(),
                    });
                }
                if grid.is_blocked(position) {
                    return Err(InitializationError::OnBlockedCell {
                        combatant: id,
                        position,
                    });
                }
                if let Some(&occupant) = occupancy.get(&position) {
                    return Err(InitializationError::CellShared {
                        combatant: id,
                        occupant,
                        position,
                    });
                }
                occupancy.insert(position, id);
            }

            if roster.insert(id, combatant).is_some() {
                return Err(InitializationError::DuplicateCombatant(id));
            }
        }

        let initiative: Vec<EntityId> = initiative.into_iter().collect();
        let mut seen = HashSet::with_capacity(initiative.len());
        for &id in &initiative {
            if !seen.insert(id) {
                return Err(InitializationError::DuplicateInitiative(id));
            }
        }

        Ok(Self {
            round: CombatConfig::FIRST_ROUND,
            active,
            has_active_moved: false,
            initiative: initiative.into(),
            combatants: Arc::new(roster),
            grid: grid.with_occupancy(occupancy),
        })
    }

    /// Overrides the round counter, for resuming a battle mid-fight.
    pub fn with_round(mut self, round: u32) -> Result<Self, InitializationError> {
        if round == 0 {
            return Err(InitializationError::ZeroRound);
        }
        self.round = round;
        Ok(self)
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Identity whose turn it is.
    pub fn active_id(&self) -> EntityId {
        self.active
    }

    /// Whether the active combatant has spent its move this turn.
    pub fn has_active_moved(&self) -> bool {
        self.has_active_moved
    }

    pub fn initiative(&self) -> &[EntityId] {
        &self.initiative
    }

    pub fn combatants(&self) -> &BTreeMap<EntityId, Combatant> {
        &self.combatants
    }

    pub fn combatant(&self, id: EntityId) -> Option<&Combatant> {
        self.combatants.get(&id)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Living combatants in identity order.
    pub fn living(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.values().filter(|c| c.is_alive())
    }

    /// Win when no enemy stands, Lose when no player stands, otherwise `None`.
    ///
    /// Win is checked first, so a field with nobody alive reports `Win`.
    pub fn outcome(&self) -> Option<CombatResult> {
        let has_faction = |faction: Faction| self.living().any(|c| c.faction == faction);

        if !has_faction(Faction::Enemy) {
            Some(CombatResult::Win)
        } else if !has_faction(Faction::Player) {
            Some(CombatResult::Lose)
        } else {
            None
        }
    }

    /// Next version with `combatant` replaced and `grid` swapped in.
    ///
    /// Only the combatant map is copied; the initiative order is shared.
    pub(crate) fn with_combatant(&self, combatant: Combatant, grid: Grid) -> Self {
        let mut combatants = BTreeMap::clone(&self.combatants);
        combatants.insert(combatant.id, combatant);
        Self {
            combatants: Arc::new(combatants),
            grid,
            initiative: Arc::clone(&self.initiative),
            ..*self
        }
    }

    pub(crate) fn with_active_moved(self) -> Self {
        Self {
            has_active_moved: true,
            ..self
        }
    }

    /// Next version handing the turn to `active`; every collection is shared.
    pub(crate) fn with_turn(&self, active: EntityId, round: u32) -> Self {
        Self {
            round,
            active,
            has_active_moved: false,
            initiative: Arc::clone(&self.initiative),
            combatants: Arc::clone(&self.combatants),
            grid: self.grid.clone(),
        }
    }
}

#[cfg(feature = "serde")]
impl BattleState {
    /// SHA-256 over the bincode encoding of this state.
    ///
    /// Two states with equal roots are field-for-field identical, which makes
    /// replay comparisons cheap for hosts that persist battles.
    pub fn state_root(&self) -> Result<[u8; 32], bincode::Error> {
        use sha2::{Digest, Sha256};

        let bytes = bincode::serialize(self)?;
        Ok(Sha256::digest(&bytes).into())
    }
}
