//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the player, the world
//! graph, quests, reputation and the combat record. Collaborators read this
//! state freely but mutate it only through the engine, the action handlers and
//! the mutation interpreter.
pub mod types;

pub use types::{
    ARMOR_CLASS_BONUS, ATTACK_BONUS, AbilityScores, Character, CombatResult, CombatState,
    CombatSummary, DEFAULT_ABILITY_SCORE, Equipment, GameWorld, Interactable, InteractableState,
    Item, LocalEntity, Location, MAIN_HAND, Objective, ObjectiveKind, POTION_CATEGORY, Quest,
    QuestStatus, RECIPIENT_DETAIL, Reputation, ReputationLevel, UseEffect, WorldError,
    ability_modifier, name_matches,
};

use std::collections::BTreeMap;

use crate::config::GameConfig;

/// Coarse time band derived from the in-game clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=20 => Self::Evening,
            _ => Self::Night,
        }
    }
}

/// Resolves combat participants by name at the moment of use.
///
/// The combat record never holds references; every access goes through a
/// resolver so a character that moved away simply stops resolving.
pub trait CharacterResolver {
    fn resolve(&self, name: &str) -> Option<&Character>;

    fn resolve_mut(&mut self, name: &str) -> Option<&mut Character>;
}

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for deterministic dice.
    ///
    /// Set once at game initialization and never modified.
    /// Combined with `nonce` to derive a unique seed for each roll.
    #[cfg_attr(feature = "serde", serde(default))]
    pub game_seed: u64,

    /// Number of dice rolled so far (monotonically increasing).
    #[cfg_attr(feature = "serde", serde(default))]
    pub nonce: u64,

    pub player: Character,
    pub current_location_id: String,
    pub world: GameWorld,

    #[cfg_attr(feature = "serde", serde(default))]
    pub turn_count: u64,
    /// Minutes since day zero, midnight.
    pub minutes_elapsed: u32,

    #[cfg_attr(feature = "serde", serde(default))]
    pub quest_log: BTreeMap<String, Quest>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub combat: Option<CombatState>,
    /// Summary of the most recently finished fight.
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_combat: Option<CombatSummary>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub reputation: Reputation,
}

impl GameState {
    /// Creates a fresh state at 08:00 of day zero.
    pub fn new(player: Character, start_location_id: impl Into<String>, world: GameWorld) -> Self {
        Self {
            game_seed: 0,
            nonce: 0,
            player,
            current_location_id: start_location_id.into(),
            world,
            turn_count: 0,
            minutes_elapsed: GameConfig::DEFAULT_STARTING_MINUTES,
            quest_log: BTreeMap::new(),
            combat: None,
            last_combat: None,
            reputation: Reputation::new(),
        }
    }

    pub fn with_seed(mut self, game_seed: u64) -> Self {
        self.game_seed = game_seed;
        self
    }

    pub fn with_minutes(mut self, minutes_elapsed: u32) -> Self {
        self.minutes_elapsed = minutes_elapsed;
        self
    }

    pub fn current_location(&self) -> Option<&Location> {
        self.world.get(&self.current_location_id)
    }

    pub fn current_location_mut(&mut self) -> Option<&mut Location> {
        self.world.get_mut(&self.current_location_id)
    }

    pub fn in_combat(&self) -> bool {
        self.combat.is_some()
    }

    /// Substring lookup in the current location (characters first).
    pub fn find_in_location(&self, query: &str) -> Option<LocalEntity> {
        self.current_location()?.find(query)
    }

    /// Character in the current location whose name contains `query`.
    ///
    /// Returns `None` when the query resolves to an item or fixture first.
    pub fn find_character_in_location(&self, query: &str) -> Option<&Character> {
        let location = self.current_location()?;
        match location.find(query)? {
            LocalEntity::Character(index) => location.characters.get(index),
            _ => None,
        }
    }

    /// Clock hour, 0 to 23.
    pub fn current_hour(&self) -> u32 {
        (self.minutes_elapsed / GameConfig::MINUTES_PER_HOUR) % GameConfig::HOURS_PER_DAY
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_hour(self.current_hour())
    }
}

impl CharacterResolver for GameState {
    /// Exact-name lookup against the player and the current location.
    fn resolve(&self, name: &str) -> Option<&Character> {
        if self.player.name == name {
            return Some(&self.player);
        }
        self.current_location()?.character(name)
    }

    fn resolve_mut(&mut self, name: &str) -> Option<&mut Character> {
        if self.player.name == name {
            return Some(&mut self.player);
        }
        let location = self.world.get_mut(&self.current_location_id)?;
        location.character_mut(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        let world = GameWorld::new()
            .with_location(
                Location::new("square", "Town Square")
                    .with_character(Character::new("Guard Captain"))
                    .with_item(Item::new("Guard's Helmet")),
            )
            .with_location(Location::new("gate", "Gate").with_character(Character::new("Beggar")));
        GameState::new(Character::new("Hero"), "square", world)
    }

    #[test]
    fn resolver_sees_player_and_local_characters_only() {
        let mut state = state();
        assert!(state.resolve("Hero").is_some());
        assert!(state.resolve("Guard Captain").is_some());
        assert!(state.resolve("Beggar").is_none());
        assert!(state.resolve("guard captain").is_none());

        if let Some(captain) = state.resolve_mut("Guard Captain") {
            captain.hp = 3;
        }
        assert_eq!(state.resolve("Guard Captain").map(|c| c.hp), Some(3));
    }

    #[test]
    fn character_lookup_yields_to_earlier_match() {
        let state = state();
        assert_eq!(
            state.find_character_in_location("guard").map(|c| c.name.as_str()),
            Some("Guard Captain")
        );
        assert!(state.find_character_in_location("helmet").is_none());
    }

    #[test]
    fn time_of_day_bands() {
        let state = state();
        assert_eq!(state.time_of_day(), TimeOfDay::Morning);
        assert_eq!(state.clone().with_minutes(12 * 60).time_of_day(), TimeOfDay::Afternoon);
        assert_eq!(state.clone().with_minutes(20 * 60 + 59).time_of_day(), TimeOfDay::Evening);
        assert_eq!(state.clone().with_minutes(21 * 60).time_of_day(), TimeOfDay::Night);
        assert_eq!(state.clone().with_minutes(28 * 60).time_of_day(), TimeOfDay::Night);
        assert_eq!(state.with_minutes(29 * 60).current_hour(), 5);
    }
}
