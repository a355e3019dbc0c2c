//! Rejection reasons and fatal resolution errors.

use crate::combat::DiceError;
use crate::error::{CoreError, ErrorSeverity};
use crate::state::{EntityId, Position};

/// Why a command was refused. An ordinary gameplay outcome, never a fault.
///
/// The `Display` string is the human-readable reason; the fields carry the
/// details a host may want to surface.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    #[error("actor not active")]
    ActorNotActive { actor: EntityId, active: EntityId },

    #[error("actor not found")]
    ActorNotFound(EntityId),

    #[error("actor is dead")]
    ActorDead(EntityId),

    #[error("actor has already moved this turn")]
    AlreadyMoved(EntityId),

    #[error("move out of bounds")]
    OutOfBounds { destination: Position },

    #[error("already at destination")]
    AlreadyAtDestination { destination: Position },

    #[error("destination is blocked")]
    Blocked { destination: Position },

    #[error("destination is occupied")]
    Occupied {
        destination: Position,
        occupant: EntityId,
    },

    #[error("no path to destination")]
    NoPath { from: Position, to: Position },

    #[error("path exceeds speed")]
    PathExceedsSpeed { length: u32, speed: i32 },

    #[error("target not found")]
    TargetNotFound(EntityId),

    #[error("target is already dead")]
    TargetAlreadyDead(EntityId),

    #[error("target out of range")]
    OutOfRange { distance: u32, range: u32 },

    #[error("active combatant not in initiative")]
    ActiveNotInInitiative(EntityId),
}

impl CoreError for Rejection {
    fn severity(&self) -> ErrorSeverity {
        use Rejection::*;
        match self {
            ActorNotFound(_) | TargetNotFound(_) => ErrorSeverity::Validation,
            ActorNotActive { .. } | ActorDead(_) | AlreadyMoved(_) => ErrorSeverity::Recoverable,
            OutOfBounds { .. } | AlreadyAtDestination { .. } => ErrorSeverity::Validation,
            Blocked { .. } | Occupied { .. } | NoPath { .. } | PathExceedsSpeed { .. } => {
                ErrorSeverity::Recoverable
            }
            TargetAlreadyDead(_) | OutOfRange { .. } => ErrorSeverity::Recoverable,
            ActiveNotInInitiative(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use Rejection::*;
        match self {
            ActorNotActive { .. } => "REJECT_ACTOR_NOT_ACTIVE",
            ActorNotFound(_) => "REJECT_ACTOR_NOT_FOUND",
            ActorDead(_) => "REJECT_ACTOR_DEAD",
            AlreadyMoved(_) => "REJECT_ALREADY_MOVED",
            OutOfBounds { .. } => "REJECT_OUT_OF_BOUNDS",
            AlreadyAtDestination { .. } => "REJECT_ALREADY_AT_DESTINATION",
            Blocked { .. } => "REJECT_BLOCKED",
            Occupied { .. } => "REJECT_OCCUPIED",
            NoPath { .. } => "REJECT_NO_PATH",
            PathExceedsSpeed { .. } => "REJECT_PATH_EXCEEDS_SPEED",
            TargetNotFound(_) => "REJECT_TARGET_NOT_FOUND",
            TargetAlreadyDead(_) => "REJECT_TARGET_ALREADY_DEAD",
            OutOfRange { .. } => "REJECT_OUT_OF_RANGE",
            ActiveNotInInitiative(_) => "REJECT_ACTIVE_NOT_IN_INITIATIVE",
        }
    }
}

/// A collaborator broke its contract; the resolution was aborted.
///
/// Absent states, absent commands and unknown command kinds cannot be
/// expressed through the engine's signature, so what remains are randomness
/// faults and corrupted states.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolveError {
    #[error("dice roll failed: {0}")]
    Dice(#[from] DiceError),

    #[error("occupancy desync for actor {actor} at {position}")]
    OccupancyDesync { actor: EntityId, position: Position },
}

impl CoreError for ResolveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Dice(error) => error.severity(),
            Self::OccupancyDesync { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Dice(error) => error.error_code(),
            Self::OccupancyDesync { .. } => "RESOLVE_OCCUPANCY_DESYNC",
        }
    }
}
