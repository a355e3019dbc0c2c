//! Command resolution pipeline.
//!
//! The [`BattleEngine`] is the only way to advance a [`BattleState`]. It takes
//! a state version and a command, and answers with either a new version plus
//! the events that produced it, or the untouched input plus the reason the
//! command was refused. Broken collaborators surface as [`ResolveError`] on a
//! separate channel.

mod attack;
mod errors;
mod movement;
mod transition;
mod turns;

pub use errors::{Rejection, ResolveError};

use std::sync::Arc;

use crate::command::Command;
use crate::config::CombatConfig;
use crate::env::RandomSource;
use crate::error::CoreError;
use crate::event::BattleEvent;
use crate::state::BattleState;

use transition::{ResolveContext, TransitionError, drive_transition};

/// Outcome of resolving one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The command took effect. `state` may be the input itself when nothing
    /// changed (a missed attack).
    Applied {
        state: Arc<BattleState>,
        events: Vec<BattleEvent>,
    },
    /// The command was refused. `state` is the input `Arc`, unchanged.
    Rejected {
        state: Arc<BattleState>,
        reason: Rejection,
    },
}

impl Resolution {
    pub fn state(&self) -> &Arc<BattleState> {
        match self {
            Resolution::Applied { state, .. } | Resolution::Rejected { state, .. } => state,
        }
    }

    /// Events in emission order; empty for a rejection.
    pub fn events(&self) -> &[BattleEvent] {
        match self {
            Resolution::Applied { events, .. } => events,
            Resolution::Rejected { .. } => &[],
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Resolution::Applied { .. } => None,
            Resolution::Rejected { reason, .. } => Some(reason),
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Resolution::Rejected { .. })
    }

    /// Splits into the resulting state, its events and the rejection, if any.
    pub fn into_parts(self) -> (Arc<BattleState>, Vec<BattleEvent>, Option<Rejection>) {
        match self {
            Resolution::Applied { state, events } => (state, events, None),
            Resolution::Rejected { state, reason } => (state, Vec::new(), Some(reason)),
        }
    }
}

/// Result of folding a command sequence with [`BattleEngine::replay`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Replay {
    /// State after the last applied command.
    pub state: Arc<BattleState>,
    /// Events of every applied command, concatenated in order.
    pub events: Vec<BattleEvent>,
    /// Refused commands, by index into the input sequence.
    pub rejections: Vec<(usize, Rejection)>,
}

/// Resolves commands against battle state versions.
///
/// The engine owns its randomness source; `&mut self` keeps draws in call
/// order. It holds no battle state of its own, so one engine can drive any
/// number of independent battles.
pub struct BattleEngine<R> {
    rng: R,
    config: CombatConfig,
}

impl<R: RandomSource> BattleEngine<R> {
    /// Creates an engine with the default combat rules.
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, CombatConfig::default())
    }

    pub fn with_config(rng: R, config: CombatConfig) -> Self {
        Self { rng, config }
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Resolves `command` against `state`.
    ///
    /// Rejections consume no randomness and return `state` itself. A missed
    /// attack is applied but leaves the state untouched, so it also returns
    /// the input `Arc`.
    pub fn resolve(
        &mut self,
        state: &Arc<BattleState>,
        command: &Command,
    ) -> Result<Resolution, ResolveError> {
        let mut ctx = ResolveContext::new(&mut self.rng, &self.config);

        let result = match command {
            Command::Move(move_command) => drive_transition(move_command, state, &mut ctx),
            Command::Attack(attack_command) => drive_transition(attack_command, state, &mut ctx),
            Command::EndTurn(end_turn) => drive_transition(end_turn, state, &mut ctx),
        };

        match result {
            Ok(next) => {
                let events = ctx.into_events();
                tracing::debug!(
                    command = command.as_str(),
                    actor = %command.actor(),
                    round = next.round(),
                    events = events.len(),
                    "command resolved"
                );
                Ok(Resolution::Applied {
                    state: next,
                    events,
                })
            }
            Err(TransitionError::Rejected(phase, reason)) => {
                let severity = reason.severity();
                if severity.is_internal() {
                    tracing::warn!(
                        command = command.as_str(),
                        actor = %command.actor(),
                        phase = phase.as_str(),
                        code = reason.error_code(),
                        severity = severity.as_str(),
                        %reason,
                        "command rejected on inconsistent state"
                    );
                } else {
                    tracing::debug!(
                        command = command.as_str(),
                        actor = %command.actor(),
                        phase = phase.as_str(),
                        code = reason.error_code(),
                        severity = severity.as_str(),
                        %reason,
                        "command rejected"
                    );
                }
                Ok(Resolution::Rejected {
                    state: Arc::clone(state),
                    reason,
                })
            }
            Err(TransitionError::Defect(error)) => {
                tracing::warn!(
                    command = command.as_str(),
                    actor = %command.actor(),
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    %error,
                    "command resolution aborted"
                );
                Err(error)
            }
        }
    }

    /// Resolves `commands` in order, starting from `state`.
    ///
    /// Each command sees the state left by the last applied one; rejected
    /// commands are recorded and skipped. The first defect aborts the fold.
    pub fn replay<'c>(
        &mut self,
        state: &Arc<BattleState>,
        commands: impl IntoIterator<Item = &'c Command>,
    ) -> Result<Replay, ResolveError> {
        let mut current = Arc::clone(state);
        let mut events = Vec::new();
        let mut rejections = Vec::new();

        for (index, command) in commands.into_iter().enumerate() {
            let (next, emitted, rejection) = self.resolve(&current, command)?.into_parts();
            if let Some(reason) = rejection {
                rejections.push((index, reason));
            }
            events.extend(emitted);
            current = next;
        }

        Ok(Replay {
            state: current,
            events,
            rejections,
        })
    }
}
