//! Command transition dispatch and execution logic.

use std::sync::Arc;

use crate::combat::{DiceError, roll_d20, roll_damage};
use crate::config::CombatConfig;
use crate::env::RandomSource;
use crate::event::BattleEvent;
use crate::state::{BattleState, Combatant, EntityId};

use super::errors::{Rejection, ResolveError};

/// Identifies which stage of the transition pipeline stopped a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TransitionPhase {
    PreValidate,
    Apply,
}

impl TransitionPhase {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
        }
    }
}

/// Failure of a single transition, before the engine sorts it into a
/// rejection or a fatal error.
#[derive(Debug)]
pub(crate) enum TransitionError {
    Rejected(TransitionPhase, Rejection),
    Defect(ResolveError),
}

impl From<Rejection> for TransitionError {
    fn from(rejection: Rejection) -> Self {
        TransitionError::Rejected(TransitionPhase::Apply, rejection)
    }
}

impl From<ResolveError> for TransitionError {
    fn from(error: ResolveError) -> Self {
        TransitionError::Defect(error)
    }
}

impl From<DiceError> for TransitionError {
    fn from(error: DiceError) -> Self {
        TransitionError::Defect(error.into())
    }
}

/// Per-call scratch space: the randomness source, the rules, and the event log.
pub(crate) struct ResolveContext<'a> {
    rng: &'a mut dyn RandomSource,
    pub(crate) config: &'a CombatConfig,
    events: Vec<BattleEvent>,
}

impl<'a> ResolveContext<'a> {
    pub(crate) fn new(rng: &'a mut dyn RandomSource, config: &'a CombatConfig) -> Self {
        Self {
            rng,
            config,
            events: Vec::new(),
        }
    }

    pub(crate) fn emit(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub(crate) fn roll_d20(&mut self) -> Result<i32, DiceError> {
        roll_d20(&mut *self.rng)
    }

    pub(crate) fn roll_damage(
        &mut self,
        die: i32,
        modifier: i32,
        is_crit: bool,
    ) -> Result<i32, DiceError> {
        roll_damage(&mut *self.rng, die, modifier, is_crit)
    }

    pub(crate) fn into_events(self) -> Vec<BattleEvent> {
        self.events
    }
}

/// State transition for one command kind.
///
/// `pre_validate` runs every precondition that does not need randomness and
/// must not emit events. `apply` builds the next state version and records
/// events; it may still reject, in which case the engine discards whatever
/// events were emitted.
pub(crate) trait CommandTransition {
    fn actor(&self) -> EntityId;

    fn pre_validate(&self, state: &BattleState, config: &CombatConfig) -> Result<(), Rejection>;

    fn apply(
        &self,
        state: &Arc<BattleState>,
        ctx: &mut ResolveContext<'_>,
    ) -> Result<Arc<BattleState>, TransitionError>;
}

/// Executes a transition through the two-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions against the untouched state
/// 2. `apply` - Build the next state version and emit events
#[inline]
pub(crate) fn drive_transition<T>(
    transition: &T,
    state: &Arc<BattleState>,
    ctx: &mut ResolveContext<'_>,
) -> Result<Arc<BattleState>, TransitionError>
where
    T: CommandTransition,
{
    tracing::trace!(actor = %transition.actor(), "validating command");

    transition
        .pre_validate(state, ctx.config)
        .map_err(|rejection| TransitionError::Rejected(TransitionPhase::PreValidate, rejection))?;

    transition.apply(state, ctx)
}

/// Shared actor checks for commands that require a living, active actor.
///
/// Order matters: not-active, then not-found, then dead.
pub(crate) fn active_combatant(
    state: &BattleState,
    actor: EntityId,
) -> Result<&Combatant, Rejection> {
    let active = state.active_id();
    if actor != active {
        return Err(Rejection::ActorNotActive { actor, active });
    }

    let combatant = state
        .combatant(actor)
        .ok_or(Rejection::ActorNotFound(actor))?;

    if combatant.is_dead {
        return Err(Rejection::ActorDead(actor));
    }

    Ok(combatant)
}
