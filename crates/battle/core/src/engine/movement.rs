use std::sync::Arc;

use crate::command::MoveCommand;
use crate::config::CombatConfig;
use crate::event::BattleEvent;
use crate::state::{BattleState, EntityId};

use super::errors::{Rejection, ResolveError};
use super::transition::{CommandTransition, ResolveContext, TransitionError, active_combatant};

impl CommandTransition for MoveCommand {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &BattleState, _config: &CombatConfig) -> Result<(), Rejection> {
        let actor = active_combatant(state, self.actor)?;

        if state.has_active_moved() {
            return Err(Rejection::AlreadyMoved(self.actor));
        }

        let grid = state.grid();
        let destination = self.destination;
        if !grid.contains(destination) {
            return Err(Rejection::OutOfBounds { destination });
        }

        if destination == actor.position {
            return Err(Rejection::AlreadyAtDestination { destination });
        }

        if grid.is_blocked(destination) {
            return Err(Rejection::Blocked { destination });
        }

        if let Some(occupant) = grid.occupant(destination) {
            return Err(Rejection::Occupied {
                destination,
                occupant,
            });
        }

        let length = grid
            .path_length(actor.position, destination)
            .ok_or(Rejection::NoPath {
                from: actor.position,
                to: destination,
            })?;

        let speed = actor.stats.speed;
        if i64::from(length) > i64::from(speed) {
            return Err(Rejection::PathExceedsSpeed { length, speed });
        }

        Ok(())
    }

    fn apply(
        &self,
        state: &Arc<BattleState>,
        ctx: &mut ResolveContext<'_>,
    ) -> Result<Arc<BattleState>, TransitionError> {
        let actor = state
            .combatant(self.actor)
            .ok_or(Rejection::ActorNotFound(self.actor))?;
        let origin = actor.position;

        if state.grid().occupant(origin) != Some(actor.id) {
            return Err(ResolveError::OccupancyDesync {
                actor: actor.id,
                position: origin,
            }
            .into());
        }

        let grid = state.grid().with_moved(actor.id, origin, self.destination);
        let next = state
            .with_combatant(actor.moved_to(self.destination), grid)
            .with_active_moved();

        ctx.emit(BattleEvent::Moved {
            actor: actor.id,
            from: origin,
            to: self.destination,
        });

        Ok(Arc::new(next))
    }
}
