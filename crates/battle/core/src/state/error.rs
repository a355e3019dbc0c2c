//! State construction errors.

use crate::error::{CoreError, ErrorSeverity};
use crate::state::{EntityId, Position};

/// Errors raised while assembling a [`super::BattleState`] from host data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializationError {
    /// Two roster entries share an identity.
    #[error("combatant {0} appears more than once in the roster")]
    DuplicateCombatant(EntityId),

    /// The initiative order lists an identity twice.
    #[error("combatant {0} appears more than once in the initiative order")]
    DuplicateInitiative(EntityId),

    /// A living combatant stands outside the grid.
    #[error("combatant {combatant} at {position} is out of bounds (grid size: {width}x{height})")]
    OutOfBounds {
        combatant: EntityId,
        position: Position,
        width: u32,
        height: u32,
    },

    /// A living combatant stands on a blocked cell.
    #[error("combatant {combatant} stands on blocked cell {position}")]
    OnBlockedCell {
        combatant: EntityId,
        position: Position,
    },

    /// Two living combatants share a cell.
    #[error("combatant {combatant} shares cell {position} with {occupant}")]
    CellShared {
        combatant: EntityId,
        occupant: EntityId,
        position: Position,
    },

    /// Rounds are counted from one.
    #[error("round counter must start at 1 or later")]
    ZeroRound,
}

impl CoreError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use InitializationError::*;
        match self {
            DuplicateCombatant(_) => "STATE_DUPLICATE_COMBATANT",
            DuplicateInitiative(_) => "STATE_DUPLICATE_INITIATIVE",
            OutOfBounds { .. } => "STATE_OUT_OF_BOUNDS",
            OnBlockedCell { .. } => "STATE_ON_BLOCKED_CELL",
            CellShared { .. } => "STATE_CELL_SHARED",
            ZeroRound => "STATE_ZERO_ROUND",
        }
    }
}
