//! Item transfers and item use.
//!
//! Every transfer removes the item from its container before inserting it
//! anywhere else, so an item is never in two places.

use crate::intent::Intent;
use crate::outcome::Outcome;
use crate::state::{GameState, LocalEntity, UseEffect};

use super::ActionError;

/// Location floor → player inventory.
pub fn take(state: &mut GameState, intent: &Intent) -> Result<Outcome, ActionError> {
    let query = intent.target().ok_or(ActionError::MissingTakeTarget)?;
    let location = state
        .world
        .get_mut(&state.current_location_id)
        .ok_or(ActionError::NoLocation)?;

    let Some(LocalEntity::Item(index)) = location.find(query) else {
        tracing::info!(query, location = %location.id, "item to take is not here");
        return Err(ActionError::ItemNotHere(query.to_string()));
    };

    let item = location.items.remove(index);
    tracing::info!(item = %item.name, location = %location.id, "player took item");
    let name = item.name.clone();
    state.player.inventory.push(item);
    Ok(Outcome::success().with_subject(name))
}

/// Player inventory → location floor.
pub fn drop(state: &mut GameState, intent: &Intent) -> Result<Outcome, ActionError> {
    let query = intent.target().ok_or(ActionError::MissingDropTarget)?;
    let index = state
        .player
        .find_inventory_item(query)
        .ok_or_else(|| ActionError::NotCarrying(query.to_string()))?;
    let location = state
        .world
        .get_mut(&state.current_location_id)
        .ok_or(ActionError::NoLocation)?;

    let item = state.player.inventory.remove(index);
    tracing::info!(item = %item.name, location = %location.id, "player dropped item");
    let name = item.name.clone();
    location.items.push(item);
    Ok(Outcome::success().with_subject(name))
}

/// Player inventory → a character in the same location.
pub fn give(state: &mut GameState, intent: &Intent) -> Result<Outcome, ActionError> {
    let (Some(query), Some(recipient_query)) = (intent.target(), intent.recipient()) else {
        return Err(ActionError::MissingGiveParameters);
    };
    let index = state
        .player
        .find_inventory_item(query)
        .ok_or_else(|| ActionError::NotCarrying(query.to_string()))?;
    let recipient_name = state
        .find_character_in_location(recipient_query)
        .map(|c| c.name.clone())
        .ok_or_else(|| ActionError::RecipientNotHere(recipient_query.to_string()))?;

    let recipient = state
        .world
        .get_mut(&state.current_location_id)
        .and_then(|location| location.character_mut(&recipient_name))
        .ok_or_else(|| ActionError::RecipientNotHere(recipient_query.to_string()))?;

    let item = state.player.inventory.remove(index);
    tracing::info!(item = %item.name, recipient = %recipient_name, "player gave item");
    let name = item.name.clone();
    recipient.inventory.push(item);
    Ok(Outcome::success().with_subject(name))
}

/// Triggers an inventory item's use effect.
pub fn use_item(state: &mut GameState, intent: &Intent) -> Result<Outcome, ActionError> {
    let query = intent.target().ok_or(ActionError::MissingUseTarget)?;
    let index = state
        .player
        .find_inventory_item(query)
        .ok_or_else(|| ActionError::NotCarrying(query.to_string()))?;
    let item = &state.player.inventory[index];
    let item_name = item.name.clone();

    match item.use_effect.clone() {
        None => Err(ActionError::NoUse(item_name)),

        Some(UseEffect::Heal { amount }) => {
            let consumed = item.is_consumable();
            state.player.heal(amount);
            if consumed {
                state.player.inventory.remove(index);
            }
            tracing::info!(item = %item_name, amount, hp = state.player.hp, consumed, "player healed");
            Ok(Outcome::success().with_subject(item_name))
        }

        Some(UseEffect::Unlock) => {
            let unlocks_id = item.unlocks_id.clone();
            let fixture_query = intent
                .target_on()
                .ok_or_else(|| ActionError::MissingUnlockTarget(item_name.clone()))?;
            let location = state
                .world
                .get_mut(&state.current_location_id)
                .ok_or(ActionError::NoLocation)?;

            let fixture = match location.find(fixture_query) {
                Some(LocalEntity::Interactable(index)) => &mut location.interactables[index],
                Some(other) => {
                    return Err(ActionError::NotAFixture {
                        item: item_name,
                        kind: other.kind(),
                    });
                }
                None => return Err(ActionError::UnlockTargetNotHere(fixture_query.to_string())),
            };

            if unlocks_id.as_deref() != Some(fixture.id.as_str()) || !fixture.state.locked {
                return Err(ActionError::DoesNotFit(fixture.name.clone()));
            }
            fixture.state.locked = false;
            tracing::info!(item = %item_name, fixture = %fixture.name, "player unlocked fixture");
            Ok(Outcome::success().with_subject(fixture.name.clone()))
        }
    }
}
