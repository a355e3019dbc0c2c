//! Commands a host submits to the engine.
//!
//! The set is closed: adding a command kind means adding a variant here, and
//! every `match` in the engine stops compiling until it is handled.

use crate::state::{EntityId, Position};

/// How an attack reaches its target.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttackType {
    /// Adjacent strike, reach set by the combat config.
    Melee,
    /// Uses the attacker's `range` stat.
    Ranged,
}

/// Step the actor to `destination` along a cardinal path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveCommand {
    pub actor: EntityId,
    pub destination: Position,
}

impl MoveCommand {
    pub fn new(actor: EntityId, destination: Position) -> Self {
        Self { actor, destination }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackCommand {
    pub actor: EntityId,
    pub target: EntityId,
    pub attack_type: AttackType,
}

impl AttackCommand {
    pub fn new(actor: EntityId, target: EntityId, attack_type: AttackType) -> Self {
        Self {
            actor,
            target,
            attack_type,
        }
    }

    pub fn melee(actor: EntityId, target: EntityId) -> Self {
        Self::new(actor, target, AttackType::Melee)
    }

    pub fn ranged(actor: EntityId, target: EntityId) -> Self {
        Self::new(actor, target, AttackType::Ranged)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndTurnCommand {
    pub actor: EntityId,
}

impl EndTurnCommand {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

/// Any command the engine can resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    Move(MoveCommand),
    Attack(AttackCommand),
    EndTurn(EndTurnCommand),
}

impl Command {
    /// Identity that issued the command.
    pub fn actor(&self) -> EntityId {
        match self {
            Command::Move(command) => command.actor,
            Command::Attack(command) => command.actor,
            Command::EndTurn(command) => command.actor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Move(_) => "move",
            Command::Attack(_) => "attack",
            Command::EndTurn(_) => "end_turn",
        }
    }
}

impl From<MoveCommand> for Command {
    fn from(command: MoveCommand) -> Self {
        Command::Move(command)
    }
}

impl From<AttackCommand> for Command {
    fn from(command: AttackCommand) -> Self {
        Command::Attack(command)
    }
}

impl From<EndTurnCommand> for Command {
    fn from(command: EndTurnCommand) -> Self {
        Command::EndTurn(command)
    }
}
