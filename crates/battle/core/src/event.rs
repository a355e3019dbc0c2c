//! Domain events emitted by the engine.
//!
//! Each successful resolution produces an ordered, append-only list of
//! [`BattleEvent`]s. Hosts replay or display them; the engine never reads them
//! back.

use crate::command::AttackType;
use crate::state::{EntityId, Position};

/// Final result of a battle, from the player side's point of view.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CombatResult {
    /// No living enemy remains.
    Win,
    /// No living player remains.
    Lose,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    AttackDeclared {
        actor: EntityId,
        target: EntityId,
        attack_type: AttackType,
    },
    AttackRolled {
        actor: EntityId,
        target: EntityId,
        /// Natural die face.
        d20: i32,
        /// Die face plus the attacker's modifier.
        total: i32,
        is_crit: bool,
        is_hit: bool,
    },
    DamageRolled {
        actor: EntityId,
        target: EntityId,
        amount: i32,
        is_crit: bool,
    },
    DamageApplied {
        target: EntityId,
        amount: i32,
        /// Stored hp after the hit, floored at zero.
        new_hp: i32,
    },
    CombatantDied {
        target: EntityId,
    },
    Moved {
        actor: EntityId,
        from: Position,
        to: Position,
    },
    TurnEnded {
        actor: EntityId,
    },
    TurnBegan {
        actor: EntityId,
    },
    CombatEnded {
        result: CombatResult,
    },
}

impl BattleEvent {
    /// Short snake_case tag, stable across versions.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AttackDeclared { .. } => "attack_declared",
            Self::AttackRolled { .. } => "attack_rolled",
            Self::DamageRolled { .. } => "damage_rolled",
            Self::DamageApplied { .. } => "damage_applied",
            Self::CombatantDied { .. } => "combatant_died",
            Self::Moved { .. } => "moved",
            Self::TurnEnded { .. } => "turn_ended",
            Self::TurnBegan { .. } => "turn_began",
            Self::CombatEnded { .. } => "combat_ended",
        }
    }
}
