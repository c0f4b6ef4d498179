//! Common error infrastructure for cue-core.
//!
//! This module provides the shared severity classification used by every error
//! type in the crate. Domain-specific errors (e.g. `SnookerError`,
//! `CenturyError`) are defined next to the actions they validate.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each variant of play has its own error enum
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **No Panics**: Rejections are values, the live match is never left half-applied

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The caller may retry with a different action
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative action.
    ///
    /// Examples: nothing to undo yet
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: wrong ball in the colour sequence, action after the frame is decided
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: cached team score out of sync, current player index out of range,
    /// a score pushed past the `i32` range
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all cue-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, logging, and testing.
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_internal_is_internal() {
        let all = [
            ErrorSeverity::Recoverable,
            ErrorSeverity::Validation,
            ErrorSeverity::Internal,
        ];
        let internal: Vec<_> = all.iter().filter(|s| s.is_internal()).collect();
        assert_eq!(internal, [&ErrorSeverity::Internal]);
        assert_eq!(
            all.map(|s| s.as_str()),
            ["recoverable", "validation", "internal"]
        );
    }
}
