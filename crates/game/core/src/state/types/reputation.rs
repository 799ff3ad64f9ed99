use std::collections::BTreeMap;

/// Faction standing derived from a score; never stored.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReputationLevel {
    Revered,
    Trusted,
    Friendly,
    Neutral,
    Unfriendly,
    Disliked,
    Hated,
}

impl ReputationLevel {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s > 50 => Self::Revered,
            s if s > 20 => Self::Trusted,
            s if s > 5 => Self::Friendly,
            s if s < -50 => Self::Hated,
            s if s < -20 => Self::Disliked,
            s if s < -5 => Self::Unfriendly,
            _ => Self::Neutral,
        }
    }
}

/// Faction name → score. A faction that was never touched scores 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Reputation(BTreeMap<String, i32>);

impl Reputation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self, faction: &str) -> i32 {
        self.0.get(faction).copied().unwrap_or(0)
    }

    /// Adds `delta`, creating the entry at 0 first. Returns the new score.
    pub fn adjust(&mut self, faction: &str, delta: i32) -> i32 {
        let score = self.0.entry(faction.to_string()).or_insert(0);
        *score = score.saturating_add(delta);
        *score
    }

    pub fn level(&self, faction: &str) -> ReputationLevel {
        ReputationLevel::from_score(self.score(faction))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.0.iter().map(|(faction, score)| (faction.as_str(), *score))
    }
}
