//! Combat turn-order state machine.
//!
//! The [`CombatEngine`] is the authoritative reducer for the combat record
//! stored in [`GameState::combat`]. A fight moves through
//! `Inactive → InProgress → Resolved(Victory | Defeat)`:
//!
//! - an attack intent with no active fight starts one (initiative, opening
//!   attack, then the turn loop);
//! - the turn loop runs NPC turns until it reaches the player, where it
//!   suspends and returns control to the caller;
//! - the next player attack re-enters the loop where it left off;
//! - the record is destroyed the instant a side is beaten.
//!
//! Participants are stored by name and resolved through
//! [`CharacterResolver`] on every access.

mod attack;
mod errors;
mod initiation;
mod turns;

pub use errors::CombatError;

use crate::env::GameEnv;
use crate::error::GameError;
use crate::intent::{Intent, IntentKind};
use crate::outcome::Outcome;
use crate::state::{CharacterResolver, CombatState, GameState};

/// Drives one fight through initiation, player turns and NPC turns.
pub struct CombatEngine<'a> {
    state: &'a mut GameState,
    env: GameEnv<'a>,
}

impl<'a> CombatEngine<'a> {
    pub fn new(state: &'a mut GameState, env: GameEnv<'a>) -> Self {
        Self { state, env }
    }

    /// Returns the active combat record, if any.
    pub fn combat(&self) -> Option<&CombatState> {
        self.state.combat.as_ref()
    }

    /// Starts a fight or resumes the suspended one with the player's command.
    ///
    /// Rejected commands come back as a failure outcome and change nothing.
    pub fn initiate_or_continue(&mut self, intent: &Intent) -> Outcome {
        let result = match (&self.state.combat, &intent.intent) {
            (None, IntentKind::Attack) => self.initiate(intent),
            (None, _) => Err(CombatError::NotInCombat),
            (Some(_), _) => self.player_turn(intent),
        };

        result.unwrap_or_else(|error| {
            tracing::debug!(code = error.error_code(), %error, "combat command rejected");
            Outcome::failure(error.to_string())
        })
    }

    /// Resolves the player's attack on their own turn.
    fn player_turn(&mut self, intent: &Intent) -> Result<Outcome, CombatError> {
        let player_name = self.state.player.name.clone();
        let Some(combat) = self.state.combat.as_ref() else {
            return Err(CombatError::NotInCombat);
        };

        match combat.current() {
            Some(actor) if actor == player_name => {}
            Some(actor) => {
                tracing::debug!(%actor, "player command received outside the player's turn");
                return Err(CombatError::NotYourTurn {
                    actor: actor.to_string(),
                });
            }
            None => {
                tracing::warn!("combat resumed at a round boundary; advancing to the player");
                return Ok(self.run_loop(Vec::new()));
            }
        }

        if intent.intent != IntentKind::Attack {
            return Err(CombatError::InvalidCombatAction);
        }
        let query = intent.target().ok_or(CombatError::MissingCombatTarget)?;
        let target = self
            .find_opponent(combat, &player_name, query)
            .ok_or_else(|| CombatError::NotAParticipant(query.to_string()))?;

        let mut narration = Vec::new();
        narration.extend(self.execute_attack(&player_name, &target));
        if let Some(combat) = self.state.combat.as_mut() {
            combat.advance();
        }
        Ok(self.run_loop(narration))
    }

    /// First resolvable non-player participant whose name contains `query`.
    fn find_opponent(&self, combat: &CombatState, player_name: &str, query: &str) -> Option<String> {
        combat
            .participants
            .iter()
            .filter(|name| name.as_str() != player_name)
            .filter_map(|name| self.state.resolve(name))
            .find(|character| character.matches(query))
            .map(|character| character.name.clone())
    }
}
