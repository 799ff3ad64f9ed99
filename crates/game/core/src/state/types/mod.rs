pub mod character;
pub mod combat;
pub mod item;
pub mod location;
pub mod quest;
pub mod reputation;

// Re-export character types
pub use character::{AbilityScores, Character, DEFAULT_ABILITY_SCORE, Equipment, ability_modifier};

// Re-export combat record types
pub use combat::{CombatResult, CombatState, CombatSummary};

// Re-export item types
pub use item::{ARMOR_CLASS_BONUS, ATTACK_BONUS, Item, MAIN_HAND, POTION_CATEGORY, UseEffect, name_matches};

// Re-export world types
pub use location::{GameWorld, Interactable, InteractableState, LocalEntity, Location, WorldError};

// Re-export quest types
pub use quest::{Objective, ObjectiveKind, Quest, QuestStatus, RECIPIENT_DETAIL};

// Re-export reputation types
pub use reputation::{Reputation, ReputationLevel};
