//! Hourly world tick.
//!
//! When the clock crosses an hour boundary, characters follow their schedules
//! first; registered collaborators (behavior, weather, events) then contribute
//! their own mutations, applied in registration order through the mutation
//! interpreter.

use crate::config::GameConfig;
use crate::mutation::{Mutation, MutationReport, apply_mutations};
use crate::state::GameState;

/// Source of world changes run once per in-game hour.
pub trait TickCollaborator: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Mutations to apply for the hour `state` is now in.
    fn on_hour(&self, state: &GameState) -> Vec<Mutation>;
}

/// True when `after` lies in a later clock hour than `before`.
pub fn crossed_hour(minutes_before: u32, minutes_after: u32) -> bool {
    minutes_after / GameConfig::MINUTES_PER_HOUR > minutes_before / GameConfig::MINUTES_PER_HOUR
}

/// Schedule key for `hour`, e.g. `"07:00"`.
pub fn schedule_key(hour: u32) -> String {
    format!("{hour:02}:00")
}

/// `move_npc` for every scheduled character not already where its schedule
/// puts it this hour.
pub fn scheduled_moves(state: &GameState) -> Vec<Mutation> {
    let key = schedule_key(state.current_hour());
    let mut moves = Vec::new();
    for location in state.world.locations.values() {
        for character in &location.characters {
            let Some(destination) = character.schedule.as_ref().and_then(|s| s.get(&key)) else {
                continue;
            };
            if *destination != location.id {
                tracing::info!(
                    character = %character.name,
                    from = %location.id,
                    to = %destination,
                    hour = %key,
                    "scheduled move"
                );
                moves.push(Mutation::move_npc(&character.name, destination));
            }
        }
    }
    moves
}

/// What one hourly tick changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub hour: u32,
    pub schedules: MutationReport,
    /// One report per collaborator, in registration order.
    pub collaborators: Vec<(&'static str, MutationReport)>,
}

impl TickReport {
    pub fn applied(&self) -> usize {
        self.schedules.applied() + self.collaborators.iter().map(|(_, r)| r.applied()).sum::<usize>()
    }
}

/// Runs schedules and collaborators once per crossed hour.
#[derive(Default)]
pub struct WorldTick {
    collaborators: Vec<Box<dyn TickCollaborator>>,
}

impl WorldTick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collaborator(mut self, collaborator: impl TickCollaborator + 'static) -> Self {
        self.register(collaborator);
        self
    }

    pub fn register(&mut self, collaborator: impl TickCollaborator + 'static) {
        self.collaborators.push(Box::new(collaborator));
    }

    /// Ticks if the clock moved into a new hour since `minutes_before`.
    pub fn observe(&self, state: &mut GameState, minutes_before: u32) -> Option<TickReport> {
        crossed_hour(minutes_before, state.minutes_elapsed).then(|| self.run_hourly_tick(state))
    }

    /// Applies schedule moves, then each collaborator's mutations.
    pub fn run_hourly_tick(&self, state: &mut GameState) -> TickReport {
        let hour = state.current_hour();
        tracing::info!(hour, "hourly world tick");

        let moves = scheduled_moves(state);
        let schedules = apply_mutations(state, moves);

        let mut collaborators = Vec::with_capacity(self.collaborators.len());
        for collaborator in &self.collaborators {
            let mutations = collaborator.on_hour(state);
            tracing::debug!(collaborator = collaborator.name(), count = mutations.len(), "tick contribution");
            collaborators.push((collaborator.name(), apply_mutations(state, mutations)));
        }

        TickReport {
            hour,
            schedules,
            collaborators,
        }
    }
}

impl std::fmt::Debug for WorldTick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.collaborators.iter().map(|c| c.name()).collect();
        f.debug_struct("WorldTick").field("collaborators", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Character, GameWorld, Location};

    struct Storm;

    impl TickCollaborator for Storm {
        fn name(&self) -> &'static str {
            "storm"
        }

        fn on_hour(&self, state: &GameState) -> Vec<Mutation> {
            // sees the baker already moved
            let baker_home = state.world.find_character_anywhere("baker").map(|(_, at)| at.to_string());
            vec![Mutation::UpdateLocationDescription {
                location_id: "square".into(),
                new_description: format!("Rain lashes the square. Baker at {baker_home:?}."),
            }]
        }
    }

    fn state(minutes: u32) -> GameState {
        let baker = Character::new("Baker").with_schedule([("09:00", "bakery"), ("18:00", "square")]);
        let world = GameWorld::new()
            .with_location(Location::new("square", "Square").with_character(baker))
            .with_location(Location::new("bakery", "Bakery"));
        GameState::new(Character::new("Hero"), "square", world).with_minutes(minutes)
    }

    #[test]
    fn hour_crossing_is_floor_based() {
        assert!(!crossed_hour(480, 539));
        assert!(crossed_hour(539, 540));
        assert!(crossed_hour(480, 700));
        assert!(!crossed_hour(540, 540));
    }

    #[test]
    fn no_tick_within_the_same_hour() {
        let tick = WorldTick::new().with_collaborator(Storm);
        let mut state = state(530);
        assert!(tick.observe(&mut state, 500).is_none());
    }

    #[test]
    fn schedules_run_before_collaborators() {
        let tick = WorldTick::new().with_collaborator(Storm);
        let mut state = state(545);

        let report = tick.observe(&mut state, 530).expect("crossed into 09:00");
        assert_eq!(report.hour, 9);
        assert_eq!(report.schedules.applied(), 1);
        assert_eq!(report.applied(), 2);
        assert!(state.world.get("bakery").is_some_and(|l| l.character("Baker").is_some()));
        assert_eq!(
            state.world.get("square").map(|l| l.description.as_str()),
            Some("Rain lashes the square. Baker at Some(\"bakery\").")
        );
    }

    #[test]
    fn characters_already_in_place_stay() {
        let mut state = state(18 * 60);
        assert!(scheduled_moves(&state).is_empty());
        state.minutes_elapsed = 9 * 60;
        assert_eq!(scheduled_moves(&state), [Mutation::move_npc("Baker", "bakery")]);
    }
}
