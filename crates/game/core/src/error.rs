//! Common error infrastructure for adventure-core.
//!
//! Domain-specific errors (e.g. `CombatError`, `MutationError`) are defined in
//! their respective modules alongside the operations they validate. This
//! module provides the classification shared by all of them.
//!
//! # Handling Rules
//!
//! - **Validation** errors never escape a turn: the public entry points turn
//!   them into a `Failure: ...` outcome and leave state untouched.
//! - **Recoverable** errors come from malformed collaborator data: the single
//!   offending item is logged and skipped.
//! - **Internal** errors are structural repairs (e.g. a combat participant that
//!   can no longer be resolved) and are handled like recoverable ones.
//! - **Fatal** errors only arise while setting up a world and propagate.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Malformed or stale collaborator data; skip the item and continue.
    ///
    /// Examples: mutation referencing a missing location, quest without id
    Recoverable,

    /// Invalid player input, reported back as a failure outcome.
    ///
    /// Examples: target not present, not the player's turn
    Validation,

    /// Unexpected state inconsistency that the engine repairs locally.
    ///
    /// Examples: combat participant no longer resolvable by name
    Internal,

    /// No valid state exists to operate on.
    ///
    /// Examples: world data fails to load at all
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

    /// Returns true if processing can continue after this error.
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Fatal)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all adventure-core errors.
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
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
