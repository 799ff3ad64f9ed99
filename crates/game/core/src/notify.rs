//! Player-facing notifications emitted by the trackers.

use std::fmt;

use crate::state::ReputationLevel;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Notification {
    QuestStarted {
        quest_id: String,
        name: String,
        description: String,
    },
    ObjectiveComplete {
        quest_id: String,
        objective_id: String,
        description: String,
    },
    QuestComplete {
        quest_id: String,
        name: String,
    },
    XpGained {
        amount: u32,
    },
    /// One notice per award, naming the final level reached.
    LevelUp {
        level: u32,
        levels_gained: u32,
    },
    ReputationChanged {
        faction: String,
        delta: i32,
        score: i32,
        level: ReputationLevel,
    },
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuestStarted { name, .. } => write!(f, "[Quest Started] {name}"),
            Self::ObjectiveComplete { description, .. } => {
                write!(f, "[Objective Complete] {description}")
            }
            Self::QuestComplete { name, .. } => write!(f, "[Quest Complete] {name}"),
            Self::XpGained { amount } => write!(f, "[You gained {amount} experience points!]"),
            Self::LevelUp { level, .. } => write!(f, "[Level Up!] You are now level {level}."),
            Self::ReputationChanged {
                faction, delta, level, ..
            } => {
                let direction = if *delta >= 0 { "improved" } else { "worsened" };
                write!(f, "[Reputation] Your standing with {faction} has {direction} ({level}).")
            }
        }
    }
}
