//! Randomness capability errors.

use crate::error::{CoreError, ErrorSeverity};

/// Errors raised by a [`super::RandomSource`].
///
/// All of them are host defects: the engine surfaces them as fatal
/// resolution errors, never as gameplay rejections.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RandomError {
    /// A fixed-sequence source ran out of values.
    #[error("random sequence exhausted")]
    Exhausted,

    /// The next queued value cannot satisfy the requested range.
    #[error("queued value {value} is outside [{min_inclusive}, {max_exclusive})")]
    Unsatisfiable {
        value: i32,
        min_inclusive: i32,
        max_exclusive: i32,
    },

    /// The caller asked for a range with no members.
    #[error("empty range [{min_inclusive}, {max_exclusive})")]
    EmptyRange {
        min_inclusive: i32,
        max_exclusive: i32,
    },
}

impl CoreError for RandomError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Exhausted => "RANDOM_EXHAUSTED",
            Self::Unsatisfiable { .. } => "RANDOM_UNSATISFIABLE",
            Self::EmptyRange { .. } => "RANDOM_EMPTY_RANGE",
        }
    }
}
