//! Deterministic action handlers.
//!
//! [`resolve_intent`] is the single entry point: attacks, and every command
//! issued while a fight is active, go to the [`CombatEngine`]; everything else
//! is resolved here against the state. Rejected commands come back as a
//! failure [`Outcome`] and leave the state untouched.
//!
//! # Module Structure
//!
//! - `inventory`: take, drop, give and use
//! - `equipment`: equip and unequip
//! - `interact`: fixtures and looking around
//! - `movement`: travel along exits and waiting
//! - `skill`: ability checks and referee rulings

pub mod equipment;
pub mod error;
pub mod interact;
pub mod inventory;
pub mod movement;
pub mod skill;

pub use error::ActionError;
pub use skill::{CheckRoll, SkillRuling, adjudicate, roll_check};

use crate::engine::CombatEngine;
use crate::env::GameEnv;
use crate::error::GameError;
use crate::intent::{Intent, IntentKind};
use crate::outcome::Outcome;
use crate::state::GameState;

/// Resolves one player intent to an outcome.
pub fn resolve_intent(state: &mut GameState, env: GameEnv<'_>, intent: &Intent) -> Outcome {
    if state.in_combat() {
        return CombatEngine::new(state, env).initiate_or_continue(intent);
    }

    let result = match &intent.intent {
        IntentKind::TakeItem => inventory::take(state, intent),
        IntentKind::DropItem => inventory::drop(state, intent),
        IntentKind::GiveItem => inventory::give(state, intent),
        IntentKind::UseItem => inventory::use_item(state, intent),
        IntentKind::Equip => equipment::equip(state, intent),
        IntentKind::Unequip => equipment::unequip(state, intent),
        IntentKind::Interact => interact::interact(state, intent),
        IntentKind::Look => interact::look(state, intent),
        IntentKind::Move => movement::travel(state, intent),
        IntentKind::PassTime => movement::pass_time(state, intent),
        IntentKind::SkillCheck => skill::skill_check(state, &env, intent),
        IntentKind::Dialogue => Ok(Outcome::automatic()),
        IntentKind::Attack => return CombatEngine::new(state, env).initiate_or_continue(intent),
        IntentKind::Other(tag) => {
            tracing::debug!(intent = %tag, "no rules for intent; narrator decides");
            Ok(Outcome::automatic())
        }
    };

    result.unwrap_or_else(|error| {
        if error.severity().is_internal() {
            tracing::error!(code = error.error_code(), %error, "action failed");
        } else {
            tracing::debug!(code = error.error_code(), %error, "action rejected");
        }
        Outcome::failure(error.to_string())
    })
}
