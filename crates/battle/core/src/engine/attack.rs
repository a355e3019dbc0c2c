use std::sync::Arc;

use crate::combat::check_hit;
use crate::command::{AttackCommand, AttackType};
use crate::config::CombatConfig;
use crate::event::BattleEvent;
use crate::state::{BattleState, EntityId};

use super::errors::Rejection;
use super::transition::{CommandTransition, ResolveContext, TransitionError, active_combatant};

impl AttackCommand {
    /// Chebyshev reach of this attack for the given attacker range stat.
    ///
    /// A negative range stat reaches nothing beyond the attacker's own cell.
    fn reach(&self, attacker_range: i32, config: &CombatConfig) -> u32 {
        match self.attack_type {
            AttackType::Melee => config.melee_reach,
            AttackType::Ranged => u32::try_from(attacker_range).unwrap_or(0),
        }
    }
}

impl CommandTransition for AttackCommand {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &BattleState, config: &CombatConfig) -> Result<(), Rejection> {
        let actor = active_combatant(state, self.actor)?;

        let target = state
            .combatant(self.target)
            .ok_or(Rejection::TargetNotFound(self.target))?;

        if target.is_dead {
            return Err(Rejection::TargetAlreadyDead(self.target));
        }

        let distance = actor.position.chebyshev_distance(target.position);
        let range = self.reach(actor.stats.range, config);
        if distance > range {
            return Err(Rejection::OutOfRange { distance, range });
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
        let target = state
            .combatant(self.target)
            .ok_or(Rejection::TargetNotFound(self.target))?;

        ctx.emit(BattleEvent::AttackDeclared {
            actor: actor.id,
            target: target.id,
            attack_type: self.attack_type,
        });

        let d20 = ctx.roll_d20()?;
        let roll = check_hit(d20, actor.stats.attack_mod, target.stats.armor_class);
        ctx.emit(BattleEvent::AttackRolled {
            actor: actor.id,
            target: target.id,
            d20: roll.d20,
            total: roll.total,
            is_crit: roll.is_crit,
            is_hit: roll.is_hit,
        });

        if !roll.is_hit {
            return Ok(Arc::clone(state));
        }

        let amount = ctx.roll_damage(actor.stats.damage_die, actor.stats.damage_mod, roll.is_crit)?;
        ctx.emit(BattleEvent::DamageRolled {
            actor: actor.id,
            target: target.id,
            amount,
            is_crit: roll.is_crit,
        });

        let wounded = target.damaged(amount);
        ctx.emit(BattleEvent::DamageApplied {
            target: target.id,
            amount,
            new_hp: wounded.stats.hp,
        });

        let died = wounded.is_dead;
        let grid = if died {
            state.grid().without_occupant(target.position)
        } else {
            state.grid().clone()
        };
        let next = state.with_combatant(wounded, grid);

        if died {
            ctx.emit(BattleEvent::CombatantDied { target: target.id });
        }

        if let Some(result) = next.outcome() {
            ctx.emit(BattleEvent::CombatEnded { result });
        }

        Ok(Arc::new(next))
    }
}
