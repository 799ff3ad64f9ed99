//! Quest and objective records.

use std::collections::BTreeMap;

/// Detail key naming who must receive a `give_item` objective's item.
pub const RECIPIENT_DETAIL: &str = "recipient";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum QuestStatus {
    #[default]
    Active,
    Completed,
}

/// Objective type tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ObjectiveKind {
    AcquireItem,
    KillTarget,
    ReachLocation,
    GiveItem,
    Interact,
}

/// One quantified sub-goal.
///
/// `is_complete` never reverts once set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objective {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ObjectiveKind,
    pub target: String,
    #[cfg_attr(feature = "serde", serde(default = "default_required_count"))]
    pub required_count: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_count: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_complete: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub details: BTreeMap<String, String>,
}

#[cfg(feature = "serde")]
fn default_required_count() -> u32 {
    1
}

impl Objective {
    pub fn new(id: impl Into<String>, kind: ObjectiveKind, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            kind,
            target: target.into(),
            required_count: 1,
            current_count: 0,
            is_complete: false,
            details: BTreeMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_required_count(mut self, count: u32) -> Self {
        self.required_count = count;
        self
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Counts one matching event.
    ///
    /// Returns true only on the event that completes the objective.
    pub fn record_progress(&mut self) -> bool {
        if self.is_complete {
            return false;
        }
        self.current_count = self.current_count.saturating_add(1);
        if self.current_count >= self.required_count {
            self.is_complete = true;
            return true;
        }
        false
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quest {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default = "default_quest_name"))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: QuestStatus,
    #[cfg_attr(feature = "serde", serde(default))]
    pub objectives: Vec<Objective>,
    /// Experience granted when the quest completes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub xp_reward: u32,
}

#[cfg(feature = "serde")]
fn default_quest_name() -> String {
    "Unnamed Quest".to_string()
}

impl Quest {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            status: QuestStatus::Active,
            objectives: Vec::new(),
            xp_reward: 0,
        }
    }

    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objectives.push(objective);
        self
    }

    pub fn with_xp_reward(mut self, xp: u32) -> Self {
        self.xp_reward = xp;
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == QuestStatus::Active
    }

    pub fn all_objectives_complete(&self) -> bool {
        self.objectives.iter().all(|o| o.is_complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_fires_completion_once() {
        let mut objective =
            Objective::new("rats", ObjectiveKind::KillTarget, "Rat").with_required_count(2);
        assert!(!objective.record_progress());
        assert!(objective.record_progress());
        assert!(!objective.record_progress());
        assert_eq!(objective.current_count, 2);
        assert!(objective.is_complete);
    }

    #[test]
    fn objective_kind_parses_snake_case_tags() {
        assert_eq!("acquire_item".parse::<ObjectiveKind>(), Ok(ObjectiveKind::AcquireItem));
        assert_eq!(ObjectiveKind::ReachLocation.to_string(), "reach_location");
        assert!("collect".parse::<ObjectiveKind>().is_err());
    }
}
