use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use crate::config::GameConfig;
use crate::mutation::Mutation;
use crate::state::GameState;

use super::schedule::TickCollaborator;

/// Personality tag marking characters that run from fights.
pub const COWARD_TAG: &str = "coward";

/// Cowardly bystanders leave the player's location while a fight is on.
///
/// Each bystander flees through the first exit that leads somewhere real and
/// then rests for a fixed number of turns before it may flee again.
#[derive(Debug)]
pub struct FleeingBystanders {
    cooldown_turns: u64,
    /// Character name → first turn it may flee again.
    ready_at: Mutex<BTreeMap<String, u64>>,
}

impl FleeingBystanders {
    pub fn new(cooldown_turns: u64) -> Self {
        Self {
            cooldown_turns,
            ready_at: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.flee_cooldown_turns)
    }

    pub fn is_resting(&self, name: &str, turn: u64) -> bool {
        let ready_at = self.ready_at.lock().unwrap_or_else(PoisonError::into_inner);
        ready_at.get(name).is_some_and(|ready| turn < *ready)
    }

    fn rest(&self, name: &str, turn: u64) {
        let mut ready_at = self.ready_at.lock().unwrap_or_else(PoisonError::into_inner);
        ready_at.insert(name.to_string(), turn.saturating_add(self.cooldown_turns));
    }
}

impl Default for FleeingBystanders {
    fn default() -> Self {
        Self::new(GameConfig::DEFAULT_FLEE_COOLDOWN_TURNS)
    }
}

impl TickCollaborator for FleeingBystanders {
    fn name(&self) -> &'static str {
        "fleeing_bystanders"
    }

    fn on_hour(&self, state: &GameState) -> Vec<Mutation> {
        let (Some(combat), Some(location)) = (&state.combat, state.current_location()) else {
            return Vec::new();
        };

        let mut moves = Vec::new();
        for character in &location.characters {
            if combat.contains(&character.name)
                || !character.has_tag(COWARD_TAG)
                || self.is_resting(&character.name, state.turn_count)
            {
                continue;
            }
            let Some(exit) = location.exits.values().find(|id| state.world.contains(id)) else {
                tracing::info!(character = %character.name, location = %location.id, "no way to flee");
                continue;
            };
            tracing::info!(character = %character.name, from = %location.id, to = %exit, "bystander flees");
            moves.push(Mutation::move_npc(&character.name, exit));
            self.rest(&character.name, state.turn_count);
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Character, CombatState, GameWorld, Location};

    fn state() -> GameState {
        let world = GameWorld::new()
            .with_location(
                Location::new("tavern", "Tavern")
                    .with_character(Character::new("Bandit").hostile())
                    .with_character(Character::new("Bard").with_tag("coward"))
                    .with_character(Character::new("Barkeep"))
                    .with_exit("a collapsed stair", "cellar")
                    .with_exit("the front door", "street"),
            )
            .with_location(Location::new("street", "Street"));
        let mut state = GameState::new(Character::new("Hero"), "tavern", world);
        state.combat = Some(CombatState::new(vec!["Hero".into(), "Bandit".into()]));
        state
    }

    #[test]
    fn cowards_flee_through_first_real_exit() {
        let behavior = FleeingBystanders::new(10);
        let moves = behavior.on_hour(&state());
        assert_eq!(moves, [Mutation::move_npc("Bard", "street")]);
    }

    #[test]
    fn quiet_without_a_fight() {
        let behavior = FleeingBystanders::new(10);
        let mut state = state();
        state.combat = None;
        assert!(behavior.on_hour(&state).is_empty());
    }

    #[test]
    fn fleeing_starts_a_cooldown() {
        let behavior = FleeingBystanders::new(10);
        let mut state = state();
        state.turn_count = 4;
        assert_eq!(behavior.on_hour(&state).len(), 1);

        state.turn_count = 13;
        assert!(behavior.on_hour(&state).is_empty());
        assert!(behavior.is_resting("Bard", 13));

        state.turn_count = 14;
        assert_eq!(behavior.on_hour(&state).len(), 1);
    }
}
