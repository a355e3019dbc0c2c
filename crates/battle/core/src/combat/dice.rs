//! Dice over the randomness capability.

use crate::config::CombatConfig;
use crate::env::{RandomError, RandomSource};
use crate::error::{CoreError, ErrorSeverity};

/// Failures while rolling a die. All of them are defects.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiceError {
    #[error("die must have at least one side (got {sides})")]
    InvalidDie { sides: i32 },

    #[error("random source returned {value} for a d{sides}")]
    OutOfRange { value: i32, sides: i32 },

    #[error(transparent)]
    Random(#[from] RandomError),
}

impl CoreError for DiceError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidDie { .. } => ErrorSeverity::Internal,
            Self::OutOfRange { .. } | Self::Random(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDie { .. } => "DICE_INVALID_DIE",
            Self::OutOfRange { .. } => "DICE_OUT_OF_RANGE",
            Self::Random(error) => error.error_code(),
        }
    }
}

/// Rolls a die with `sides` faces, returning a value in `1..=sides`.
///
/// Draws exactly one value from `rng`. A source that answers outside the
/// requested range is reported, never clamped.
pub fn roll_die<R>(rng: &mut R, sides: i32) -> Result<i32, DiceError>
where
    R: RandomSource + ?Sized,
{
    if sides < 1 {
        return Err(DiceError::InvalidDie { sides });
    }

    let max_exclusive = sides.checked_add(1).ok_or(DiceError::InvalidDie { sides })?;
    let value = rng.next_in(1, max_exclusive)?;
    if !(1..=sides).contains(&value) {
        return Err(DiceError::OutOfRange { value, sides });
    }

    tracing::trace!(sides, value, "rolled die");
    Ok(value)
}

pub fn roll_d20<R>(rng: &mut R) -> Result<i32, DiceError>
where
    R: RandomSource + ?Sized,
{
    roll_die(rng, CombatConfig::D20_SIDES)
}
