//! Fixtures and inspection.

use crate::intent::Intent;
use crate::outcome::Outcome;
use crate::state::{GameState, LocalEntity};

use super::ActionError;

/// Opens a container once or flips a toggle.
///
/// An opened container spills its contents onto the location floor.
pub fn interact(state: &mut GameState, intent: &Intent) -> Result<Outcome, ActionError> {
    let query = intent.target().ok_or(ActionError::MissingInteractTarget)?;
    let location = state
        .world
        .get_mut(&state.current_location_id)
        .ok_or(ActionError::NoLocation)?;

    let index = match location.find(query) {
        Some(LocalEntity::Interactable(index)) => index,
        Some(_) => return Err(ActionError::NotInteractable(query.to_string())),
        None => return Err(ActionError::InteractTargetNotHere(query.to_string())),
    };
    let fixture = &mut location.interactables[index];
    let name = fixture.name.clone();

    if fixture.state.locked {
        return Err(ActionError::Locked(name));
    }

    if let Some(contents) = fixture.state.container.as_mut() {
        if fixture.state.opened {
            return Err(ActionError::AlreadyOpen);
        }
        fixture.state.opened = true;
        let loot = std::mem::take(contents);
        tracing::info!(fixture = %name, items = loot.len(), "player opened container");

        let detail = if loot.is_empty() { "Open empty" } else { "Open and loot" };
        location.items.extend(loot);
        return Ok(Outcome::success_with(detail).with_subject(name));
    }

    if let Some(on) = fixture.state.toggled.as_mut() {
        *on = !*on;
        tracing::info!(fixture = %name, on = *on, "player toggled fixture");
        return Ok(Outcome::success().with_subject(name));
    }

    Err(ActionError::NoInteraction(name))
}

/// Names what the target resolved to. Never changes state.
///
/// Without a target the narrator describes the surroundings.
pub fn look(state: &GameState, intent: &Intent) -> Result<Outcome, ActionError> {
    let Some(query) = intent.target() else {
        return Ok(Outcome::automatic().with_detail("Look at surroundings"));
    };

    let found = state.current_location().and_then(|location| {
        let entity = location.find(query)?;
        let name = match entity {
            LocalEntity::Character(i) => &location.characters[i].name,
            LocalEntity::Item(i) => &location.items[i].name,
            LocalEntity::Interactable(i) => &location.interactables[i].name,
        };
        Some((entity.kind(), name.clone()))
    });
    let found = found.or_else(|| {
        state
            .player
            .find_inventory_item(query)
            .map(|i| ("item_in_inventory", state.player.inventory[i].name.clone()))
    });

    let (kind, name) = found.ok_or_else(|| ActionError::NothingToSee(query.to_string()))?;
    Ok(Outcome::success_with(format!("Look at {kind} - {name}")).with_subject(name))
}
