//! Deterministic rules core for a narrated text adventure.
//!
//! `adventure-core` owns the game state and every rule that changes it: the
//! combat turn-order state machine, the mutation interpreter that applies
//! declarative world changes, the quest, progression and reputation trackers,
//! and the hourly world tick. Prose is produced elsewhere from the structured
//! [`Outcome`] and [`Notification`] values returned here.
//!
//! Player commands enter through [`resolve_intent`] (or [`play_turn`], which
//! also runs the observers); collaborator-authored changes enter through
//! [`apply_mutations`] or, for raw JSON, [`decode::apply_authored`].
pub mod action;
pub mod combat;
pub mod config;
#[cfg(feature = "serde")]
pub mod decode;
pub mod engine;
pub mod env;
pub mod error;
pub mod intent;
pub mod mutation;
pub mod notify;
pub mod outcome;
pub mod state;
pub mod tracker;

pub use action::{ActionError, CheckRoll, SkillRuling, adjudicate, resolve_intent, roll_check};
pub use combat::{AttackOutcome, AttackProfile, AttackResult, DamageDice, DiceError};
pub use config::GameConfig;
pub use engine::{CombatEngine, CombatError};
pub use env::{
    AlwaysAttackPlayer, CombatDecision, CombatPolicy, CombatView, GameEnv, PcgRng, RngOracle,
    RollKind, ScriptedRng, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use intent::{Intent, IntentKind};
pub use mutation::{
    MalformedEntry, Mutation, MutationError, MutationRecord, MutationReport, MutationStatus,
    apply_decoded, apply_mutation, apply_mutations,
};
pub use notify::Notification;
pub use outcome::{Outcome, OutcomeStatus};
pub use state::{
    AbilityScores, Character, CharacterResolver, CombatResult, CombatState, CombatSummary,
    Equipment, GameState, GameWorld, Interactable, InteractableState, Item, LocalEntity, Location,
    Objective, ObjectiveKind, Quest, QuestStatus, Reputation, ReputationLevel, TimeOfDay,
    UseEffect, WorldError,
};
pub use tracker::{
    FleeingBystanders, QuestError, QuestUpdate, ReputationTable, ReputationTracker,
    TickCollaborator, TickReport, TurnObservers, TurnReport, WorldTick, accept_quest, award_xp,
    check_for_levelup, check_for_quest_updates, play_turn, start_quest,
};
