//! Error types for the combat engine.

use crate::error::{ErrorSeverity, GameError};

/// Rejections of a combat command.
///
/// All of these are reported to the player as a failure outcome and leave
/// the combat record untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error("Who are you trying to attack?")]
    MissingTarget,

    #[error("You must specify a target to attack.")]
    MissingCombatTarget,

    #[error("You don't see '{0}' here.")]
    TargetNotPresent(String),

    #[error("You decide against attacking yourself.")]
    SelfTarget,

    #[error("You cannot fight in the void.")]
    NoLocation,

    #[error("It is not your turn. {actor} is acting.")]
    NotYourTurn { actor: String },

    #[error("'{0}' is not in this fight.")]
    NotAParticipant(String),

    #[error("That is not a valid action in combat.")]
    InvalidCombatAction,

    #[error("You can't do that right now.")]
    NotInCombat,
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoLocation => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingTarget => "COMBAT_MISSING_TARGET",
            Self::MissingCombatTarget => "COMBAT_MISSING_COMBAT_TARGET",
            Self::TargetNotPresent(_) => "COMBAT_TARGET_NOT_PRESENT",
            Self::SelfTarget => "COMBAT_SELF_TARGET",
            Self::NoLocation => "COMBAT_NO_LOCATION",
            Self::NotYourTurn { .. } => "COMBAT_NOT_YOUR_TURN",
            Self::NotAParticipant(_) => "COMBAT_NOT_A_PARTICIPANT",
            Self::InvalidCombatAction => "COMBAT_INVALID_ACTION",
            Self::NotInCombat => "COMBAT_NOT_IN_COMBAT",
        }
    }
}
