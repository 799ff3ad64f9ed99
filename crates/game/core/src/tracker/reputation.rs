//! Faction standing changes driven by player actions.

use std::collections::BTreeMap;

use crate::intent::IntentKind;
use crate::notify::Notification;
use crate::state::{Character, Reputation};

/// Faction → intent tag → score delta.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ReputationTable(BTreeMap<String, BTreeMap<String, i32>>);

impl ReputationTable {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with_delta(mut self, faction: &str, intent: &IntentKind, delta: i32) -> Self {
        self.0
            .entry(faction.to_string())
            .or_default()
            .insert(intent.as_str().to_string(), delta);
        self
    }

    pub fn is_configured(&self, faction: &str) -> bool {
        self.0.contains_key(faction)
    }

    /// Delta for `intent` against `faction`; unconfigured pairs are zero.
    pub fn delta(&self, faction: &str, intent: &IntentKind) -> i32 {
        self.0
            .get(faction)
            .and_then(|deltas| deltas.get(intent.as_str()))
            .copied()
            .unwrap_or(0)
    }

    pub fn factions(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl Default for ReputationTable {
    fn default() -> Self {
        Self::empty()
            .with_delta("town_guard", &IntentKind::GiveItem, 5)
            .with_delta("town_guard", &IntentKind::Attack, -50)
            .with_delta("thieves_guild", &IntentKind::Attack, -20)
            .with_delta("thieves_guild", &IntentKind::GiveItem, 2)
    }
}

/// Applies table deltas to the player's reputation.
#[derive(Clone, Debug, Default)]
pub struct ReputationTracker {
    table: ReputationTable,
}

impl ReputationTracker {
    pub fn new(table: ReputationTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ReputationTable {
        &self.table
    }

    /// Adjusts standing with `target`'s faction for `intent`.
    ///
    /// Targets without a faction, unconfigured factions and zero deltas
    /// change nothing and emit nothing.
    pub fn process_event(
        &self,
        reputation: &mut Reputation,
        intent: &IntentKind,
        target: Option<&Character>,
    ) -> Option<Notification> {
        let faction = target?.faction.as_deref()?;
        if !self.table.is_configured(faction) {
            tracing::debug!(faction, "faction has no reputation table");
            return None;
        }
        let delta = self.table.delta(faction, intent);
        if delta == 0 {
            return None;
        }

        let score = reputation.adjust(faction, delta);
        let level = reputation.level(faction);
        tracing::info!(faction, delta, score, %level, "reputation changed");
        Some(Notification::ReputationChanged {
            faction: faction.to_string(),
            delta,
            score,
            level,
        })
    }
}
