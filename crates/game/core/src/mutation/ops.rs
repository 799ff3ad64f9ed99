//! Declarative world-change operations.
//!
//! The `op` tag and field names are shared with externally authored content
//! and must not be renamed.

use crate::state::Character;

/// One declarative change to player or world state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "snake_case"))]
pub enum Mutation {
    DamagePlayer {
        amount: i32,
    },
    AddPlayerStatus {
        effect: String,
    },
    RemovePlayerStatus {
        effect: String,
    },
    MoveNpc {
        character_name: String,
        new_location_id: String,
    },
    AddCharacter {
        location_id: String,
        character: Box<Character>,
    },
    RemoveCharacter {
        location_id: String,
        character_name: String,
    },
    UpdateLocationDescription {
        location_id: String,
        new_description: String,
    },
    AddExit {
        location_id: String,
        exit_description: String,
        destination_id: String,
    },
    RemoveExit {
        location_id: String,
        exit_description: String,
        /// When present, the exit is only removed if it leads here.
        #[cfg_attr(feature = "serde", serde(default))]
        destination_id: Option<String>,
    },
}

impl Mutation {
    pub fn move_npc(character_name: impl Into<String>, new_location_id: impl Into<String>) -> Self {
        Self::MoveNpc {
            character_name: character_name.into(),
            new_location_id: new_location_id.into(),
        }
    }

    /// Wire tag of this operation.
    pub fn op(&self) -> &'static str {
        match self {
            Self::DamagePlayer { .. } => "damage_player",
            Self::AddPlayerStatus { .. } => "add_player_status",
            Self::RemovePlayerStatus { .. } => "remove_player_status",
            Self::MoveNpc { .. } => "move_npc",
            Self::AddCharacter { .. } => "add_character",
            Self::RemoveCharacter { .. } => "remove_character",
            Self::UpdateLocationDescription { .. } => "update_location_description",
            Self::AddExit { .. } => "add_exit",
            Self::RemoveExit { .. } => "remove_exit",
        }
    }

    /// Whether this op touches the player rather than the world.
    pub fn targets_player(&self) -> bool {
        matches!(
            self,
            Self::DamagePlayer { .. } | Self::AddPlayerStatus { .. } | Self::RemovePlayerStatus { .. }
        )
    }
}
