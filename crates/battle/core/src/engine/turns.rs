use std::sync::Arc;

use crate::command::EndTurnCommand;
use crate::config::CombatConfig;
use crate::event::BattleEvent;
use crate::state::{BattleState, EntityId};

use super::errors::Rejection;
use super::transition::{CommandTransition, ResolveContext, TransitionError};

/// Next living identity after `current` in initiative order, and whether the
/// scan wrapped past the end of the order.
///
/// Absent and dead identities are skipped. A full cycle may land back on
/// `current`; that counts as a wrap. When nobody in the order is alive the
/// turn stays with the entry at `current` and the round does not advance.
fn next_in_initiative(state: &BattleState, current: usize) -> (EntityId, bool) {
    let order = state.initiative();
    let len = order.len();

    for step in 1..=len {
        let index = (current + step) % len;
        let candidate = order[index];
        let alive = state.combatant(candidate).is_some_and(|c| c.is_alive());
        if alive {
            return (candidate, index <= current);
        }
    }

    (order[current], false)
}

impl CommandTransition for EndTurnCommand {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &BattleState, _config: &CombatConfig) -> Result<(), Rejection> {
        let active = state.active_id();
        if self.actor != active {
            return Err(Rejection::ActorNotActive {
                actor: self.actor,
                active,
            });
        }

        if state.combatant(self.actor).is_none() {
            return Err(Rejection::ActorNotFound(self.actor));
        }

        Ok(())
    }

    fn apply(
        &self,
        state: &Arc<BattleState>,
        ctx: &mut ResolveContext<'_>,
    ) -> Result<Arc<BattleState>, TransitionError> {
        ctx.emit(BattleEvent::TurnEnded { actor: self.actor });

        let current = state
            .initiative()
            .iter()
            .position(|&id| id == self.actor)
            .ok_or(Rejection::ActiveNotInInitiative(self.actor))?;

        let (next_actor, wrapped) = next_in_initiative(state, current);
        let round = if wrapped {
            state.round().saturating_add(1)
        } else {
            state.round()
        };

        let next = state.with_turn(next_actor, round);

        match next.outcome() {
            Some(result) => ctx.emit(BattleEvent::CombatEnded { result }),
            None => ctx.emit(BattleEvent::TurnBegan { actor: next_actor }),
        }

        Ok(Arc::new(next))
    }
}
