//! Deterministic rules for turn-based grid battles.
//!
//! `battle-core` resolves one command at a time against an immutable
//! [`BattleState`] and returns the next state version with an ordered event
//! log, or the untouched input with the reason the command was refused. All
//! randomness comes from a host-supplied [`RandomSource`], so a fixed source
//! and a fixed command sequence always reproduce the same battle.
pub mod combat;
pub mod command;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod state;

pub use combat::{AttackRoll, DiceError};
pub use command::{AttackCommand, AttackType, Command, EndTurnCommand, MoveCommand};
pub use config::CombatConfig;
pub use engine::{BattleEngine, Rejection, Replay, Resolution, ResolveError};
pub use env::{PcgSource, RandomError, RandomSource, SequenceSource};
pub use error::{CoreError, ErrorSeverity};
pub use event::{BattleEvent, CombatResult};
pub use state::{
    BattleState, Combatant, EntityId, Faction, Grid, InitializationError, Position, Stats,
};
