use crate::env::RollKind;
use crate::intent::Intent;
use crate::outcome::Outcome;
use crate::state::{CharacterResolver, CombatState};

use super::{CombatEngine, CombatError};

impl<'a> CombatEngine<'a> {
    /// Opens a fight against the intent's target.
    ///
    /// Participants are the player, every hostile character present and the
    /// target (forced hostile); defeated characters never join. Initiative is
    /// rolled once, d20 + DEX modifier, sorted high to low with ties kept in
    /// insertion order. The opening attack resolves immediately and the
    /// pointer moves past the player's slot.
    pub(super) fn initiate(&mut self, intent: &Intent) -> Result<Outcome, CombatError> {
        let query = intent.target().ok_or(CombatError::MissingTarget)?;
        let player_name = self.state.player.name.clone();

        let location = self.state.current_location().ok_or_else(|| {
            tracing::error!(location = %self.state.current_location_id, "cannot fight in a missing location");
            CombatError::NoLocation
        })?;

        let target_name = match self.state.find_character_in_location(query) {
            Some(target) if target.name == player_name => return Err(CombatError::SelfTarget),
            Some(target) if target.is_defeated() => {
                return Err(CombatError::TargetNotPresent(query.to_string()));
            }
            Some(target) => target.name.clone(),
            None if self.state.player.matches(query) => return Err(CombatError::SelfTarget),
            None => return Err(CombatError::TargetNotPresent(query.to_string())),
        };

        let mut entrants = vec![player_name.clone()];
        entrants.extend(
            location
                .characters
                .iter()
                .filter(|c| !c.is_defeated() && (c.is_hostile || c.name == target_name))
                .map(|c| c.name.clone()),
        );

        tracing::info!(target = %target_name, participants = entrants.len(), "combat initiated");

        let mut rolled = Vec::with_capacity(entrants.len());
        for name in entrants {
            let dexterity_mod = match self.state.resolve_mut(&name) {
                Some(character) => {
                    if name != player_name {
                        character.is_hostile = true;
                    }
                    character.stats.modifier("dexterity")
                }
                None => 0,
            };
            let d20 = self.env.roll(self.state, RollKind::Initiative, 20);
            let initiative = d20 as i32 + dexterity_mod;
            tracing::debug!(%name, d20, initiative, "initiative rolled");
            rolled.push((name, initiative));
        }
        // stable: ties keep insertion order
        rolled.sort_by(|a, b| b.1.cmp(&a.1));

        let mut combat = CombatState::new(rolled.into_iter().map(|(name, _)| name).collect());
        combat.turn_index = combat.position(&player_name).unwrap_or(0);
        self.state.combat = Some(combat);

        let mut narration = vec![format!(
            "You draw your weapon and attack {target_name}! Combat has begun."
        )];
        narration.extend(self.execute_attack(&player_name, &target_name));
        if let Some(combat) = self.state.combat.as_mut() {
            combat.advance();
        }

        Ok(self.run_loop(narration))
    }
}
