//! Observers that react to resolved actions: quests, experience, reputation
//! and the hourly world tick.

pub mod behavior;
pub mod pipeline;
pub mod progression;
pub mod quest;
pub mod reputation;
pub mod schedule;

pub use behavior::{COWARD_TAG, FleeingBystanders};
pub use pipeline::{TurnObservers, TurnReport, play_turn};
pub use progression::{award_xp, check_for_levelup};
pub use quest::{QuestError, QuestUpdate, accept_quest, check_for_quest_updates, start_quest};
pub use reputation::{ReputationTable, ReputationTracker};
pub use schedule::{
    TickCollaborator, TickReport, WorldTick, crossed_hour, schedule_key, scheduled_moves,
};
