//! Post-action observers run in a fixed order after every resolved intent.

use crate::action::resolve_intent;
use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::intent::{Intent, IntentKind};
use crate::notify::Notification;
use crate::outcome::Outcome;
use crate::state::GameState;

use super::progression::award_xp;
use super::quest::check_for_quest_updates;
use super::reputation::ReputationTracker;
use super::schedule::{TickReport, WorldTick};

/// Everything the observers produced for one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub outcome: Outcome,
    pub notifications: Vec<Notification>,
    pub completed_quests: Vec<String>,
    pub tick: Option<TickReport>,
}

impl TurnReport {
    fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            notifications: Vec::new(),
            completed_quests: Vec::new(),
            tick: None,
        }
    }
}

/// Quest tracker, progression, reputation, then the hourly tick.
#[derive(Debug, Default)]
pub struct TurnObservers {
    config: GameConfig,
    reputation: ReputationTracker,
    tick: WorldTick,
}

impl TurnObservers {
    pub fn new(config: GameConfig, reputation: ReputationTracker, tick: WorldTick) -> Self {
        Self {
            config,
            reputation,
            tick,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn tick(&self) -> &WorldTick {
        &self.tick
    }

    /// Runs every observer against one resolved action.
    ///
    /// `minutes_before` is the clock value before the action; the tick only
    /// runs if the action crossed an hour boundary.
    pub fn observe(
        &self,
        state: &mut GameState,
        intent: &Intent,
        outcome: Outcome,
        minutes_before: u32,
    ) -> TurnReport {
        let mut report = TurnReport::new(outcome);

        let quests = check_for_quest_updates(state, intent, &report.outcome);
        report.notifications.extend(quests.notifications);
        report.completed_quests = quests.completed;
        report
            .notifications
            .extend(award_xp(&mut state.player, quests.xp_reward, &self.config));

        if !report.outcome.is_failure() {
            report
                .notifications
                .extend(self.process_reputation_event(state, intent));
        }

        report.tick = self.tick.observe(state, minutes_before);
        report
    }

    /// Reputation change for the character `intent` acted on.
    ///
    /// The recipient of a gift, otherwise the intent target, looked up in the
    /// player's current location.
    pub fn process_reputation_event(&self, state: &mut GameState, intent: &Intent) -> Option<Notification> {
        let query = match intent.intent {
            IntentKind::GiveItem => intent.recipient(),
            _ => intent.target(),
        }?;
        let location = state.world.get(&state.current_location_id)?;
        let target = location
            .characters
            .iter()
            .find(|c| c.matches(query))?;
        self.reputation
            .process_event(&mut state.reputation, &intent.intent, Some(target))
    }
}

/// Resolves one intent and runs the observers, counting the turn.
pub fn play_turn(
    state: &mut GameState,
    env: GameEnv<'_>,
    observers: &TurnObservers,
    intent: &Intent,
) -> TurnReport {
    state.turn_count += 1;
    let minutes_before = state.minutes_elapsed;
    let outcome = resolve_intent(state, env, intent);
    tracing::debug!(turn = state.turn_count, intent = %intent.intent, status = ?outcome.status, "turn resolved");
    observers.observe(state, intent, outcome, minutes_before)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::state::{Character, GameWorld, Item, Location, Objective, ObjectiveKind, Quest};
    use crate::tracker::{FleeingBystanders, quest::start_quest};

    fn state() -> GameState {
        let world = GameWorld::new()
            .with_location(
                Location::new("gate", "Gate")
                    .with_character(Character::new("Sergeant").with_faction("town_guard"))
                    .with_exit("the road", "road"),
            )
            .with_location(Location::new("road", "Road"));
        let player = Character::new("Hero").with_item(Item::new("Bread"));
        GameState::new(player, "gate", world).with_minutes(8 * 60 + 50)
    }

    #[test]
    fn gift_runs_quest_xp_and_reputation_in_order() {
        let config = GameConfig::default();
        let rng = ScriptedRng::new([10]);
        let env = GameEnv::with_rng(&rng, &config);
        let observers = TurnObservers::default();
        let mut state = state();
        let quest = Quest::new("feed", "Feed the Guard")
            .with_xp_reward(100)
            .with_objective(
                Objective::new("give", ObjectiveKind::GiveItem, "bread")
                    .with_detail("recipient", "sergeant")
                    .with_description("Give the sergeant some bread"),
            );
        start_quest(&mut state, quest).expect("new quest");

        let report = play_turn(&mut state, env, &observers, &Intent::give("bread", "Sergeant"));

        let lines: Vec<_> = report.notifications.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            [
                "[Objective Complete] Give the sergeant some bread",
                "[Quest Complete] Feed the Guard",
                "[You gained 100 experience points!]",
                "[Level Up!] You are now level 2.",
                "[Reputation] Your standing with town_guard has improved (neutral).",
            ]
        );
        assert_eq!(state.reputation.score("town_guard"), 5);
        assert_eq!(state.turn_count, 1);
        assert!(report.tick.is_none());
    }

    #[test]
    fn failed_action_changes_no_reputation() {
        let config = GameConfig::default();
        let rng = ScriptedRng::new([10]);
        let env = GameEnv::with_rng(&rng, &config);
        let observers = TurnObservers::default();
        let mut state = state();

        let report = play_turn(&mut state, env, &observers, &Intent::give("sword", "serg"));
        assert!(report.outcome.is_failure());
        assert!(report.notifications.is_empty());
        assert_eq!(state.reputation.score("town_guard"), 0);
    }

    #[test]
    fn waiting_past_the_hour_ticks_the_world() {
        let config = GameConfig::default();
        let rng = ScriptedRng::new([10]);
        let env = GameEnv::with_rng(&rng, &config);
        let observers = TurnObservers::new(
            config.clone(),
            ReputationTracker::default(),
            WorldTick::new().with_collaborator(FleeingBystanders::from_config(&config)),
        );
        let mut state = state();

        let report = play_turn(&mut state, env, &observers, &Intent::pass_time(30));
        let tick = report.tick.expect("crossed 09:00");
        assert_eq!(tick.hour, 9);
        assert_eq!(tick.collaborators.len(), 1);
    }
}
