//! The interpreter: applies mutations one by one, skipping bad ones.

use crate::error::GameError;
use crate::state::GameState;

use super::error::MutationError;
use super::ops::Mutation;

/// Per-operation result.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", content = "reason", rename_all = "snake_case"))]
pub enum MutationStatus {
    Applied,
    /// Well-formed but referenced something missing or invalid.
    Skipped(String),
    /// Could not be decoded into any known operation.
    Malformed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutationRecord {
    /// Wire tag, or `unknown` when it could not be read.
    pub op: String,
    pub status: MutationStatus,
}

/// An authored entry that failed to decode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MalformedEntry {
    pub op: Option<String>,
    pub reason: String,
}

/// What happened to each operation of a batch, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutationReport {
    pub records: Vec<MutationRecord>,
}

impl MutationReport {
    pub fn applied(&self) -> usize {
        self.count(|s| matches!(s, MutationStatus::Applied))
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, MutationStatus::Skipped(_)))
    }

    pub fn malformed(&self) -> usize {
        self.count(|s| matches!(s, MutationStatus::Malformed(_)))
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn extend(&mut self, other: MutationReport) {
        self.records.extend(other.records);
    }

    fn count(&self, predicate: impl Fn(&MutationStatus) -> bool) -> usize {
        self.records.iter().filter(|r| predicate(&r.status)).count()
    }
}

/// Applies `mutations` in order.
///
/// A failing operation is logged and skipped; it never stops the batch and
/// never surfaces as an error. Partial application is expected.
pub fn apply_mutations(
    state: &mut GameState,
    mutations: impl IntoIterator<Item = Mutation>,
) -> MutationReport {
    apply_decoded(state, mutations.into_iter().map(Ok))
}

/// Applies a decoded authored batch, recording malformed entries in place.
pub fn apply_decoded(
    state: &mut GameState,
    entries: impl IntoIterator<Item = Result<Mutation, MalformedEntry>>,
) -> MutationReport {
    let mut report = MutationReport::default();

    for entry in entries {
        let record = match entry {
            Ok(mutation) => {
                let op = mutation.op();
                let status = match apply_mutation(state, mutation) {
                    Ok(()) => MutationStatus::Applied,
                    Err(error) => {
                        tracing::error!(op, code = error.error_code(), %error, "skipping mutation");
                        MutationStatus::Skipped(error.to_string())
                    }
                };
                MutationRecord {
                    op: op.to_string(),
                    status,
                }
            }
            Err(entry) => {
                let op = entry.op.unwrap_or_else(|| "unknown".to_string());
                tracing::error!(op = %op, reason = %entry.reason, "skipping malformed mutation");
                MutationRecord {
                    op,
                    status: MutationStatus::Malformed(entry.reason),
                }
            }
        };
        report.records.push(record);
    }

    report
}

/// Applies a single operation.
///
/// Idempotent operations that change nothing (adding a status already
/// present, moving a character to where it already is) still succeed.
pub fn apply_mutation(state: &mut GameState, mutation: Mutation) -> Result<(), MutationError> {
    match mutation {
        Mutation::DamagePlayer { amount } => {
            if amount < 0 {
                return Err(MutationError::NegativeDamage(amount));
            }
            state.player.hp = state.player.hp.saturating_sub(amount);
            tracing::info!(amount, hp = state.player.reported_hp(), "player took damage");
        }

        Mutation::AddPlayerStatus { effect } => {
            let effect = non_empty(effect, "effect")?;
            if state.player.add_status(&effect) {
                tracing::info!(%effect, "player gained status effect");
            }
        }

        Mutation::RemovePlayerStatus { effect } => {
            let effect = non_empty(effect, "effect")?;
            if state.player.remove_status(&effect) {
                tracing::info!(%effect, "player lost status effect");
            }
        }

        Mutation::MoveNpc {
            character_name,
            new_location_id,
        } => move_npc(state, &character_name, &new_location_id)?,

        Mutation::AddCharacter {
            location_id,
            character,
        } => {
            let character = *character;
            if character.name.trim().is_empty() {
                return Err(MutationError::EmptyField("character.name"));
            }
            let location = state
                .world
                .get_mut(&location_id)
                .ok_or_else(|| MutationError::LocationNotFound(location_id.clone()))?;
            if location.character(&character.name).is_some() {
                return Err(MutationError::DuplicateCharacter {
                    location: location_id,
                    name: character.name,
                });
            }
            tracing::info!(name = %character.name, location = %location_id, "added character");
            location.characters.push(character);
        }

        Mutation::RemoveCharacter {
            location_id,
            character_name,
        } => {
            let location = state
                .world
                .get_mut(&location_id)
                .ok_or_else(|| MutationError::LocationNotFound(location_id.clone()))?;
            location
                .remove_character(&character_name)
                .ok_or_else(|| MutationError::CharacterNotFound(character_name.clone()))?;
            tracing::info!(name = %character_name, location = %location_id, "removed character");
        }

        Mutation::UpdateLocationDescription {
            location_id,
            new_description,
        } => {
            let location = state
                .world
                .get_mut(&location_id)
                .ok_or_else(|| MutationError::LocationNotFound(location_id.clone()))?;
            location.description = new_description;
            tracing::info!(location = %location_id, "updated location description");
        }

        Mutation::AddExit {
            location_id,
            exit_description,
            destination_id,
        } => {
            let exit_description = non_empty(exit_description, "exit_description")?;
            let destination_id = non_empty(destination_id, "destination_id")?;
            let location = state
                .world
                .get_mut(&location_id)
                .ok_or_else(|| MutationError::LocationNotFound(location_id.clone()))?;
            tracing::info!(location = %location_id, exit = %exit_description, destination = %destination_id, "added exit");
            location.exits.insert(exit_description, destination_id);
        }

        Mutation::RemoveExit {
            location_id,
            exit_description,
            destination_id,
        } => {
            let location = state
                .world
                .get_mut(&location_id)
                .ok_or_else(|| MutationError::LocationNotFound(location_id.clone()))?;
            let current = location
                .exits
                .get(&exit_description)
                .ok_or_else(|| MutationError::ExitNotFound {
                    location: location_id.clone(),
                    exit: exit_description.clone(),
                })?;
            if let Some(expected) = destination_id.filter(|expected| expected != current) {
                return Err(MutationError::ExitDestinationMismatch {
                    location: location_id,
                    exit: exit_description,
                    expected,
                    actual: current.clone(),
                });
            }
            location.exits.remove(&exit_description);
            tracing::info!(location = %location_id, exit = %exit_description, "removed exit");
        }
    }

    Ok(())
}

fn move_npc(state: &mut GameState, name: &str, destination: &str) -> Result<(), MutationError> {
    if !state.world.contains(destination) {
        return Err(MutationError::LocationNotFound(destination.to_string()));
    }
    let (exact_name, origin) = state
        .world
        .find_character_anywhere(name)
        .map(|(character, location)| (character.name.clone(), location.to_string()))
        .ok_or_else(|| MutationError::CharacterNotFound(name.to_string()))?;

    if origin == destination {
        tracing::debug!(%exact_name, location = %origin, "character already at destination");
        return Ok(());
    }

    let character = state
        .world
        .get_mut(&origin)
        .and_then(|location| location.remove_character(&exact_name))
        .ok_or_else(|| MutationError::CharacterNotFound(exact_name.clone()))?;
    match state.world.get_mut(destination) {
        Some(location) => location.characters.push(character),
        // unreachable after the existence check; restore the character
        None => {
            if let Some(location) = state.world.get_mut(&origin) {
                location.characters.push(character);
            }
            return Err(MutationError::LocationNotFound(destination.to_string()));
        }
    }

    tracing::info!(name = %exact_name, from = %origin, to = %destination, "moved character");
    Ok(())
}

fn non_empty(value: String, field: &'static str) -> Result<String, MutationError> {
    if value.trim().is_empty() {
        return Err(MutationError::EmptyField(field));
    }
    Ok(value)
}
