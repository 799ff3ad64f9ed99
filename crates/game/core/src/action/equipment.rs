use crate::intent::Intent;
use crate::outcome::Outcome;
use crate::state::GameState;

use super::ActionError;

/// Moves an inventory item into its slot; the slot's previous occupant
/// returns to the inventory.
pub fn equip(state: &mut GameState, intent: &Intent) -> Result<Outcome, ActionError> {
    let query = intent.target().ok_or(ActionError::MissingEquipTarget)?;
    let player = &mut state.player;
    let index = player
        .find_inventory_item(query)
        .ok_or_else(|| ActionError::NotInInventory(query.to_string()))?;
    let Some(slot) = player.inventory[index].equipment_slot.clone() else {
        return Err(ActionError::NotEquippable(player.inventory[index].name.clone()));
    };

    let item = player.inventory.remove(index);
    let name = item.name.clone();
    if let Some(displaced) = player.equipment.equip(slot.clone(), item) {
        tracing::info!(item = %displaced.name, slot = %slot, "displaced item returned to inventory");
        player.inventory.push(displaced);
    }
    tracing::info!(item = %name, slot = %slot, "player equipped item");
    Ok(Outcome::success_with(format!("Equipped {name}")).with_subject(name))
}

/// Moves the first equipped item matching the target back to the inventory.
pub fn unequip(state: &mut GameState, intent: &Intent) -> Result<Outcome, ActionError> {
    let query = intent.target().ok_or(ActionError::MissingUnequipTarget)?;
    let player = &mut state.player;
    let slot = player
        .equipment
        .find(query)
        .map(|(slot, _)| slot.to_string())
        .ok_or_else(|| ActionError::NotEquipped(query.to_string()))?;
    let item = player
        .equipment
        .unequip(&slot)
        .ok_or_else(|| ActionError::NotEquipped(query.to_string()))?;

    let name = item.name.clone();
    tracing::info!(item = %name, slot = %slot, "player unequipped item");
    player.inventory.push(item);
    Ok(Outcome::success_with(format!("Unequipped {name}")).with_subject(name))
}
