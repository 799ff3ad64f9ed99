//! Action resolution errors.
//!
//! Every variant is a player-input validation failure: the display text is
//! what the player reads after `Failure:`.

use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("You are lost in the void.")]
    NoLocation,

    // ===== inventory =====
    #[error("You need to specify what to take.")]
    MissingTakeTarget,

    #[error("The '{0}' is not here.")]
    ItemNotHere(String),

    #[error("You need to specify what to drop.")]
    MissingDropTarget,

    #[error("You do not have a '{0}'.")]
    NotCarrying(String),

    #[error("You need to specify both an item and who to give it to.")]
    MissingGiveParameters,

    #[error("You don't see '{0}' here.")]
    RecipientNotHere(String),

    // ===== use =====
    #[error("You need to specify what item to use.")]
    MissingUseTarget,

    #[error("The {0} doesn't seem to have a use.")]
    NoUse(String),

    #[error("What do you want to use the {0} on?")]
    MissingUnlockTarget(String),

    #[error("You don't see a '{0}' to use this on.")]
    UnlockTargetNotHere(String),

    #[error("You can't use the {item} on a {kind}.")]
    NotAFixture { item: String, kind: &'static str },

    #[error("It doesn't seem to work on the {0}.")]
    DoesNotFit(String),

    // ===== equipment =====
    #[error("You need to specify what item to equip.")]
    MissingEquipTarget,

    #[error("You do not have a '{0}' in your inventory.")]
    NotInInventory(String),

    #[error("The {0} is not something you can equip.")]
    NotEquippable(String),

    #[error("You need to specify what item to unequip.")]
    MissingUnequipTarget,

    #[error("You do not have a '{0}' equipped.")]
    NotEquipped(String),

    // ===== fixtures =====
    #[error("You need to specify what to interact with.")]
    MissingInteractTarget,

    #[error("You can't seem to find a '{0}' here.")]
    InteractTargetNotHere(String),

    #[error("You can't seem to interact with the '{0}' in that way.")]
    NotInteractable(String),

    #[error("The {0} is locked.")]
    Locked(String),

    #[error("It is already open.")]
    AlreadyOpen,

    #[error("You're not sure how to interact with the {0}.")]
    NoInteraction(String),

    #[error("You don't see any '{0}' here.")]
    NothingToSee(String),

    // ===== travel and time =====
    #[error("You need to specify where to go.")]
    MissingDestination,

    #[error("You can't seem to find a way to do that.")]
    NoSuchExit,

    #[error("The way to '{0}' is blocked by mysterious forces.")]
    UnknownDestination(String),

    #[error("You need to specify how long to wait.")]
    InvalidDuration,

    // ===== skill checks =====
    #[error("You need to specify which skill to test.")]
    MissingSkill,

    #[error("The difficulty of that {0} check is unclear.")]
    MissingDifficulty(String),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoLocation | Self::UnknownDestination(_) => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoLocation => "ACTION_NO_LOCATION",
            Self::MissingTakeTarget => "ACTION_MISSING_TAKE_TARGET",
            Self::ItemNotHere(_) => "ACTION_ITEM_NOT_HERE",
            Self::MissingDropTarget => "ACTION_MISSING_DROP_TARGET",
            Self::NotCarrying(_) => "ACTION_NOT_CARRYING",
            Self::MissingGiveParameters => "ACTION_MISSING_GIVE_PARAMETERS",
            Self::RecipientNotHere(_) => "ACTION_RECIPIENT_NOT_HERE",
            Self::MissingUseTarget => "ACTION_MISSING_USE_TARGET",
            Self::NoUse(_) => "ACTION_NO_USE",
            Self::MissingUnlockTarget(_) => "ACTION_MISSING_UNLOCK_TARGET",
            Self::UnlockTargetNotHere(_) => "ACTION_UNLOCK_TARGET_NOT_HERE",
            Self::NotAFixture { .. } => "ACTION_NOT_A_FIXTURE",
            Self::DoesNotFit(_) => "ACTION_DOES_NOT_FIT",
            Self::MissingEquipTarget => "ACTION_MISSING_EQUIP_TARGET",
            Self::NotInInventory(_) => "ACTION_NOT_IN_INVENTORY",
            Self::NotEquippable(_) => "ACTION_NOT_EQUIPPABLE",
            Self::MissingUnequipTarget => "ACTION_MISSING_UNEQUIP_TARGET",
            Self::NotEquipped(_) => "ACTION_NOT_EQUIPPED",
            Self::MissingInteractTarget => "ACTION_MISSING_INTERACT_TARGET",
            Self::InteractTargetNotHere(_) => "ACTION_INTERACT_TARGET_NOT_HERE",
            Self::NotInteractable(_) => "ACTION_NOT_INTERACTABLE",
            Self::Locked(_) => "ACTION_LOCKED",
            Self::AlreadyOpen => "ACTION_ALREADY_OPEN",
            Self::NoInteraction(_) => "ACTION_NO_INTERACTION",
            Self::NothingToSee(_) => "ACTION_NOTHING_TO_SEE",
            Self::MissingDestination => "ACTION_MISSING_DESTINATION",
            Self::NoSuchExit => "ACTION_NO_SUCH_EXIT",
            Self::UnknownDestination(_) => "ACTION_UNKNOWN_DESTINATION",
            Self::InvalidDuration => "ACTION_INVALID_DURATION",
            Self::MissingSkill => "ACTION_MISSING_SKILL",
            Self::MissingDifficulty(_) => "ACTION_MISSING_DIFFICULTY",
        }
    }
}
