//! Quest intake and objective tracking.
//!
//! Objective matching is case-insensitive substring matching on free-text
//! names, so "barrel" matches "Ale Barrel" but "barrel of ale" does not.

use crate::error::{ErrorSeverity, GameError};
use crate::intent::{Intent, IntentKind};
use crate::notify::Notification;
use crate::outcome::{Outcome, OutcomeStatus};
use crate::state::{
    GameState, Objective, ObjectiveKind, Quest, QuestStatus, RECIPIENT_DETAIL, name_matches,
};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuestError {
    #[error("quest has no id")]
    EmptyId,

    #[error("quest '{0}' is already in the quest log")]
    AlreadyStarted(String),

    #[error("You don't see {0} here to accept a quest from.")]
    GiverNotHere(String),

    #[error("{giver} has not offered you '{quest}'.")]
    NotOffered { giver: String, quest: String },

    #[error("no quest '{0}' is defined here")]
    UnknownQuest(String),
}

impl GameError for QuestError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyId | Self::AlreadyStarted(_) | Self::UnknownQuest(_) => {
                ErrorSeverity::Recoverable
            }
            Self::GiverNotHere(_) | Self::NotOffered { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyId => "QUEST_EMPTY_ID",
            Self::AlreadyStarted(_) => "QUEST_ALREADY_STARTED",
            Self::GiverNotHere(_) => "QUEST_GIVER_NOT_HERE",
            Self::NotOffered { .. } => "QUEST_NOT_OFFERED",
            Self::UnknownQuest(_) => "QUEST_UNKNOWN",
        }
    }
}

/// Adds `quest` to the quest log as active.
///
/// Progress carried on the definition is kept; a duplicate or id-less quest is
/// logged and leaves the log unchanged.
pub fn start_quest(state: &mut GameState, mut quest: Quest) -> Result<Notification, QuestError> {
    let id = quest.id.trim().to_string();
    let rejection = if id.is_empty() {
        Some(QuestError::EmptyId)
    } else if state.quest_log.contains_key(&id) {
        Some(QuestError::AlreadyStarted(id.clone()))
    } else {
        None
    };
    if let Some(error) = rejection {
        tracing::warn!(code = error.error_code(), %error, "quest not started");
        return Err(error);
    }

    quest.id = id.clone();
    quest.status = QuestStatus::Active;
    tracing::info!(quest = %id, name = %quest.name, "quest started");
    let notification = Notification::QuestStarted {
        quest_id: id.clone(),
        name: quest.name.clone(),
        description: quest.description.clone(),
    };
    state.quest_log.insert(id, quest);
    Ok(notification)
}

/// Accepts a quest offered by a character in the current location.
///
/// The definition comes from the location's quest list; the offer is removed
/// from the giver once accepted.
pub fn accept_quest(
    state: &mut GameState,
    giver_query: &str,
    quest_id: &str,
) -> Result<Notification, QuestError> {
    let giver_name = state
        .find_character_in_location(giver_query)
        .map(|c| c.name.clone())
        .ok_or_else(|| QuestError::GiverNotHere(giver_query.to_string()))?;
    let location = state
        .world
        .get_mut(&state.current_location_id)
        .ok_or_else(|| QuestError::UnknownQuest(quest_id.to_string()))?;

    let quest = location
        .quests
        .iter()
        .find(|q| q.id == quest_id)
        .cloned()
        .ok_or_else(|| QuestError::UnknownQuest(quest_id.to_string()))?;
    let giver = location
        .character_mut(&giver_name)
        .ok_or_else(|| QuestError::GiverNotHere(giver_query.to_string()))?;
    let Some(offer) = giver.available_quest_ids.iter().position(|id| id == quest_id) else {
        return Err(QuestError::NotOffered {
            giver: giver_name,
            quest: quest_id.to_string(),
        });
    };
    giver.available_quest_ids.remove(offer);

    start_quest(state, quest)
}

/// Result of scanning the quest log after one resolved action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestUpdate {
    pub notifications: Vec<Notification>,
    /// Quests that completed on this event, in log order.
    pub completed: Vec<String>,
    /// Sum of `xp_reward` over `completed`.
    pub xp_reward: u32,
}

/// Advances every active quest's incomplete objectives that `intent` and
/// `outcome` satisfy.
///
/// Only successful outcomes count. An objective fires its completion notice
/// once, and a quest completes exactly once, on the event that finishes its
/// last objective.
pub fn check_for_quest_updates(
    state: &mut GameState,
    intent: &Intent,
    outcome: &Outcome,
) -> QuestUpdate {
    let mut update = QuestUpdate::default();
    if !outcome.is_success() {
        return update;
    }

    let event = QuestEvent::new(state, intent, outcome);
    for quest in state.quest_log.values_mut().filter(|q| q.is_active()) {
        let mut finished_objective = false;
        for objective in quest.objectives.iter_mut().filter(|o| !o.is_complete) {
            if !event.matches(objective) {
                continue;
            }
            tracing::debug!(quest = %quest.id, objective = %objective.id, "objective progressed");
            if objective.record_progress() {
                tracing::info!(quest = %quest.id, objective = %objective.id, "objective complete");
                update.notifications.push(Notification::ObjectiveComplete {
                    quest_id: quest.id.clone(),
                    objective_id: objective.id.clone(),
                    description: objective.description.clone(),
                });
                finished_objective = true;
            }
        }

        if finished_objective && quest.all_objectives_complete() {
            quest.status = QuestStatus::Completed;
            tracing::info!(quest = %quest.id, name = %quest.name, "quest complete");
            update.notifications.push(Notification::QuestComplete {
                quest_id: quest.id.clone(),
                name: quest.name.clone(),
            });
            update.completed.push(quest.id.clone());
            update.xp_reward = update.xp_reward.saturating_add(quest.xp_reward);
        }
    }
    update
}

/// What one action did, read once before the quest log is borrowed mutably.
struct QuestEvent<'a> {
    kind: &'a IntentKind,
    /// Full resolved name when the handler reported one, else the raw target.
    subject: Option<&'a str>,
    recipient: Option<&'a str>,
    victory: bool,
    fought: Vec<String>,
    location: String,
}

impl<'a> QuestEvent<'a> {
    fn new(state: &GameState, intent: &'a Intent, outcome: &'a Outcome) -> Self {
        let victory = outcome.status == OutcomeStatus::Victory;
        let fought = match (&state.last_combat, victory) {
            (Some(summary), true) => summary.roster.clone(),
            _ => Vec::new(),
        };
        Self {
            kind: &intent.intent,
            subject: outcome.subject.as_deref().or(intent.target()),
            recipient: intent.recipient(),
            victory,
            fought,
            location: state.current_location_id.clone(),
        }
    }

    fn subject_matches(&self, target: &str) -> bool {
        self.subject.is_some_and(|name| name_matches(name, target))
    }

    fn matches(&self, objective: &Objective) -> bool {
        match objective.kind {
            ObjectiveKind::AcquireItem => {
                *self.kind == IntentKind::TakeItem && self.subject_matches(&objective.target)
            }
            ObjectiveKind::KillTarget => {
                self.victory && self.fought.iter().any(|name| *name == objective.target)
            }
            ObjectiveKind::ReachLocation => {
                *self.kind == IntentKind::Move && self.location == objective.target
            }
            ObjectiveKind::GiveItem => {
                let recipient_ok = match (self.recipient, objective.details.get(RECIPIENT_DETAIL)) {
                    (Some(given_to), Some(required)) => name_matches(given_to, required),
                    _ => false,
                };
                *self.kind == IntentKind::GiveItem
                    && recipient_ok
                    && self.subject_matches(&objective.target)
            }
            ObjectiveKind::Interact => {
                *self.kind == IntentKind::Interact && self.subject_matches(&objective.target)
            }
        }
    }
}
