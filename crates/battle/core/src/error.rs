//! Common error infrastructure for battle-core.
//!
//! Two tiers of failure exist and they never share a channel:
//!
//! - **Rejections** ([`crate::engine::Rejection`]) are ordinary gameplay outcomes.
//!   They travel inside [`crate::engine::Resolution::Rejected`].
//! - **Defects** ([`crate::engine::ResolveError`]) mean a collaborator broke its
//!   contract. They travel through the `Err` side of `resolve`.
//!
//! Every error enum implements [`CoreError`] so hosts can classify failures
//! without matching on concrete variants.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same actor may succeed with a different command
/// - **Validation**: the command referenced something that does not exist
/// - **Internal**: state inconsistency that indicates a bug upstream
/// - **Fatal**: a collaborator broke its contract; the call was aborted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Examples: destination blocked, target out of range
    Recoverable,

    /// Examples: actor not found, target not found
    Validation,

    /// Examples: active combatant missing from initiative
    Internal,

    /// Examples: randomness source exhausted or out of contract
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all battle-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are stable identifiers; never reuse one for a new meaning
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
