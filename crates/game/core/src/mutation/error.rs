use crate::error::{ErrorSeverity, GameError};

/// Why a single mutation was skipped.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MutationError {
    #[error("location '{0}' does not exist")]
    LocationNotFound(String),

    #[error("character '{0}' does not exist")]
    CharacterNotFound(String),

    #[error("location '{location}' already has a character named '{name}'")]
    DuplicateCharacter { location: String, name: String },

    #[error("location '{location}' has no exit '{exit}'")]
    ExitNotFound { location: String, exit: String },

    #[error("exit '{exit}' of '{location}' leads to '{actual}', not '{expected}'")]
    ExitDestinationMismatch {
        location: String,
        exit: String,
        expected: String,
        actual: String,
    },

    #[error("damage amount must not be negative (got {0})")]
    NegativeDamage(i32),

    #[error("field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("malformed operation: {0}")]
    Malformed(String),
}

impl GameError for MutationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LocationNotFound(_) => "MUTATION_LOCATION_NOT_FOUND",
            Self::CharacterNotFound(_) => "MUTATION_CHARACTER_NOT_FOUND",
            Self::DuplicateCharacter { .. } => "MUTATION_DUPLICATE_CHARACTER",
            Self::ExitNotFound { .. } => "MUTATION_EXIT_NOT_FOUND",
            Self::ExitDestinationMismatch { .. } => "MUTATION_EXIT_DESTINATION_MISMATCH",
            Self::NegativeDamage(_) => "MUTATION_NEGATIVE_DAMAGE",
            Self::EmptyField(_) => "MUTATION_EMPTY_FIELD",
            Self::Malformed(_) => "MUTATION_MALFORMED",
        }
    }
}
