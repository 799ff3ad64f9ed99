//! Ability checks.
//!
//! A check is one d20 plus the ability modifier against a difficulty class;
//! ties succeed. Unknown abilities read as a score of 10.

use crate::env::{GameEnv, RollKind};
use crate::intent::Intent;
use crate::mutation::{MalformedEntry, Mutation, MutationReport, apply_decoded};
use crate::outcome::Outcome;
use crate::state::GameState;

use super::ActionError;

const D20: u32 = 20;

/// One resolved check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckRoll {
    pub skill: String,
    pub roll: u32,
    pub modifier: i32,
    pub dc: i32,
}

impl CheckRoll {
    pub fn total(&self) -> i32 {
        self.roll as i32 + self.modifier
    }

    pub fn passed(&self) -> bool {
        self.total() >= self.dc
    }

    fn outcome(&self) -> Outcome {
        let verdict = if self.passed() { "passed" } else { "failed" };
        let detail = format!(
            "{} check {verdict} ({} vs DC {})",
            self.skill,
            self.total(),
            self.dc
        );
        if self.passed() {
            Outcome::success_with(detail)
        } else {
            Outcome::failure(detail)
        }
    }
}

/// Rolls a player check for `skill` against `dc`.
pub fn roll_check(state: &mut GameState, env: &GameEnv<'_>, skill: &str, dc: i32) -> CheckRoll {
    let skill = skill.trim().to_lowercase();
    let modifier = state.player.stats.modifier(&skill);
    let roll = env.roll(state, RollKind::SkillCheck, D20);
    let check = CheckRoll {
        skill,
        roll,
        modifier,
        dc,
    };
    tracing::info!(
        skill = %check.skill,
        roll,
        modifier,
        total = check.total(),
        dc,
        passed = check.passed(),
        "skill check"
    );
    check
}

/// Resolves a `skill_check` intent carrying its own skill and DC.
pub fn skill_check(
    state: &mut GameState,
    env: &GameEnv<'_>,
    intent: &Intent,
) -> Result<Outcome, ActionError> {
    let skill = intent
        .skill
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ActionError::MissingSkill)?;
    let dc = intent
        .dc
        .ok_or_else(|| ActionError::MissingDifficulty(skill.to_string()))?;

    Ok(roll_check(state, env, skill, dc).outcome())
}

/// A referee's ruling on a freeform action: whether it can be attempted,
/// the check it needs and what happens on either result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillRuling {
    pub is_possible: bool,
    pub reasoning: Option<String>,
    pub skill: Option<String>,
    pub dc: Option<i32>,
    pub on_success: Vec<Result<Mutation, MalformedEntry>>,
    pub on_failure: Vec<Result<Mutation, MalformedEntry>>,
}

impl SkillRuling {
    pub fn check(skill: impl Into<String>, dc: i32) -> Self {
        Self {
            is_possible: true,
            skill: Some(skill.into()),
            dc: Some(dc),
            ..Self::default()
        }
    }

    pub fn impossible(reasoning: impl Into<String>) -> Self {
        Self {
            is_possible: false,
            reasoning: Some(reasoning.into()),
            ..Self::default()
        }
    }

    pub fn on_success(mut self, mutations: impl IntoIterator<Item = Mutation>) -> Self {
        self.on_success = mutations.into_iter().map(Ok).collect();
        self
    }

    pub fn on_failure(mut self, mutations: impl IntoIterator<Item = Mutation>) -> Self {
        self.on_failure = mutations.into_iter().map(Ok).collect();
        self
    }
}

/// Rolls the ruling's check and applies the matching consequence list.
///
/// An impossible action fails without a roll. A ruling with no skill or DC
/// fails the same way and changes nothing.
pub fn adjudicate(
    state: &mut GameState,
    env: &GameEnv<'_>,
    ruling: SkillRuling,
) -> (Outcome, MutationReport) {
    if !ruling.is_possible {
        let reason = ruling
            .reasoning
            .unwrap_or_else(|| "That is beyond your abilities.".to_string());
        return (Outcome::failure(reason), MutationReport::default());
    }

    let (Some(skill), Some(dc)) = (ruling.skill.as_deref(), ruling.dc) else {
        let error = match ruling.skill {
            Some(skill) => ActionError::MissingDifficulty(skill),
            None => ActionError::MissingSkill,
        };
        tracing::warn!(%error, "incomplete skill ruling");
        return (Outcome::failure(error.to_string()), MutationReport::default());
    };

    let check = roll_check(state, env, skill, dc);
    let consequences = if check.passed() {
        ruling.on_success
    } else {
        ruling.on_failure
    };
    let report = apply_decoded(state, consequences);
    (check.outcome(), report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::ScriptedRng;
    use crate::state::{Character, GameWorld, Location};

    fn state() -> GameState {
        let world = GameWorld::new().with_location(Location::new("cliff", "Cliff"));
        GameState::new(Character::new("Hero").with_stat("strength", 14), "cliff", world)
    }

    #[test]
    fn ties_pass_and_modifier_applies() {
        let config = GameConfig::default();
        let rng = ScriptedRng::new([10]);
        let env = GameEnv::with_rng(&rng, &config);
        let mut state = state();

        // 10 + 2 meets DC 12
        let outcome = skill_check(&mut state, &env, &Intent::skill_check("Strength", 12)).expect("complete");
        assert_eq!(outcome.to_string(), "Success: strength check passed (12 vs DC 12)");

        // unknown skill reads as 10, modifier 0
        let outcome = skill_check(&mut state, &env, &Intent::skill_check("charisma", 11)).expect("complete");
        assert!(outcome.is_failure());
        assert_eq!(state.nonce, 2);
    }

    #[test]
    fn incomplete_intents_are_rejected() {
        let config = GameConfig::default();
        let rng = ScriptedRng::new([20]);
        let env = GameEnv::with_rng(&rng, &config);
        let mut state = state();

        let mut intent = Intent::skill_check("dexterity", 10);
        intent.dc = None;
        assert_eq!(
            skill_check(&mut state, &env, &intent),
            Err(ActionError::MissingDifficulty("dexterity".into()))
        );
        intent.skill = None;
        assert_eq!(skill_check(&mut state, &env, &intent), Err(ActionError::MissingSkill));
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn ruling_applies_failure_consequences() {
        let config = GameConfig::default();
        let rng = ScriptedRng::new([2]);
        let env = GameEnv::with_rng(&rng, &config);
        let mut state = state();

        let ruling = SkillRuling::check("dexterity", 15)
            .on_success([Mutation::AddPlayerStatus { effect: "nimble".into() }])
            .on_failure([
                Mutation::DamagePlayer { amount: 4 },
                Mutation::AddPlayerStatus { effect: "poisoned".into() },
            ]);
        let (outcome, report) = adjudicate(&mut state, &env, ruling);

        assert!(outcome.is_failure());
        assert_eq!(report.applied(), 2);
        assert_eq!(state.player.hp, 16);
        assert!(state.player.has_status("poisoned"));
        assert!(!state.player.has_status("nimble"));
    }

    #[test]
    fn impossible_ruling_does_not_roll() {
        let config = GameConfig::default();
        let rng = ScriptedRng::new([20]);
        let env = GameEnv::with_rng(&rng, &config);
        let mut state = state();

        let (outcome, report) = adjudicate(&mut state, &env, SkillRuling::impossible("No mortal can fly."));
        assert_eq!(outcome.to_string(), "Failure: No mortal can fly.");
        assert!(report.is_empty());
        assert_eq!(rng.consumed(), 0);
    }
}
