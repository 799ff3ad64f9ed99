use crate::intent::Intent;
use crate::outcome::Outcome;
use crate::state::GameState;

use super::ActionError;

/// Moves the player along an exit whose destination id equals the target.
///
/// Exits into locations the world does not hold yet fail; generating them is
/// the content layer's job.
pub fn travel(state: &mut GameState, intent: &Intent) -> Result<Outcome, ActionError> {
    let destination = intent.target().ok_or(ActionError::MissingDestination)?;
    let current = state.current_location().ok_or(ActionError::NoLocation)?;

    if current.exit_to(destination).is_none() {
        tracing::info!(from = %current.id, to = destination, "no exit leads there");
        return Err(ActionError::NoSuchExit);
    }
    if !state.world.contains(destination) {
        tracing::warn!(from = %current.id, to = destination, "exit points at a missing location");
        return Err(ActionError::UnknownDestination(destination.to_string()));
    }

    tracing::info!(from = %state.current_location_id, to = destination, "player moved");
    state.current_location_id = destination.to_string();
    Ok(Outcome::success().with_subject(destination))
}

/// Advances the clock by a positive number of minutes.
pub fn pass_time(state: &mut GameState, intent: &Intent) -> Result<Outcome, ActionError> {
    let minutes = intent
        .duration
        .filter(|d| *d > 0)
        .and_then(|d| u32::try_from(d).ok())
        .ok_or(ActionError::InvalidDuration)?;

    state.minutes_elapsed = state.minutes_elapsed.saturating_add(minutes);
    tracing::info!(minutes, now = state.minutes_elapsed, "time passed");
    Ok(Outcome::success())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Character, GameWorld, Location};

    fn state() -> GameState {
        let world = GameWorld::new()
            .with_location(
                Location::new("square", "Square")
                    .with_exit("north road", "gate")
                    .with_exit("dark alley", "unbuilt"),
            )
            .with_location(Location::new("gate", "Gate"));
        GameState::new(Character::new("Hero"), "square", world)
    }

    #[test]
    fn travel_follows_existing_exits_only() {
        let mut state = state();
        assert_eq!(travel(&mut state, &Intent::go("tavern")), Err(ActionError::NoSuchExit));
        assert_eq!(
            travel(&mut state, &Intent::go("unbuilt")),
            Err(ActionError::UnknownDestination("unbuilt".into()))
        );
        assert_eq!(state.current_location_id, "square");

        travel(&mut state, &Intent::go("gate")).expect("exit exists");
        assert_eq!(state.current_location_id, "gate");
    }

    #[test]
    fn pass_time_requires_positive_duration() {
        let mut state = state();
        let before = state.minutes_elapsed;
        assert_eq!(pass_time(&mut state, &Intent::pass_time(0)), Err(ActionError::InvalidDuration));
        assert_eq!(pass_time(&mut state, &Intent::pass_time(-30)), Err(ActionError::InvalidDuration));

        pass_time(&mut state, &Intent::pass_time(90)).expect("positive");
        assert_eq!(state.minutes_elapsed, before + 90);
    }
}
