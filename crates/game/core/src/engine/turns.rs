use crate::env::{CombatDecision, CombatView};
use crate::outcome::Outcome;
use crate::state::{CharacterResolver, CombatResult, CombatSummary};

use super::CombatEngine;

const VICTORY: &str = "The last of your foes has been defeated!";
const DEFEAT: &str = "You have been vanquished.";
const YOUR_TURN: &str = "It is your turn to act.";

/// Turn advancement for CombatEngine.
impl<'a> CombatEngine<'a> {
    /// Runs turns until the player must act or the fight is over.
    ///
    /// This is the engine's only suspension point: on the player's turn the
    /// record stays in place and the accumulated narration is returned.
    pub(super) fn run_loop(&mut self, mut narration: Vec<String>) -> Outcome {
        loop {
            if let Some(result) = self.check_termination() {
                return self.finish(result, narration);
            }

            let player_name = self.state.player.name.clone();
            let Some(combat) = self.state.combat.as_mut() else {
                return Outcome::ongoing().with_narration(narration);
            };

            if combat.is_round_complete() {
                let round = combat.wrap_round();
                narration.push(format!("--- Round {round} ---"));
                continue;
            }

            let Some(name) = combat.current().map(str::to_string) else {
                continue;
            };

            let defeated = match self.state.resolve(&name) {
                Some(actor) => actor.is_defeated(),
                None => {
                    tracing::warn!(%name, "combat participant no longer resolvable; dropping");
                    if let Some(combat) = self.state.combat.as_mut() {
                        combat.remove(&name);
                    }
                    continue;
                }
            };

            if defeated {
                self.advance();
                continue;
            }

            if name == player_name {
                return Outcome::ongoing()
                    .with_detail(YOUR_TURN)
                    .with_narration(narration);
            }

            narration.push(self.npc_turn(&name));
            self.advance();
        }
    }

    fn advance(&mut self) {
        if let Some(combat) = self.state.combat.as_mut() {
            combat.advance();
        }
    }

    /// Asks the policy for the NPC's action and resolves it.
    fn npc_turn(&mut self, name: &str) -> String {
        let decision = {
            let (Some(combat), Some(actor)) = (self.state.combat.as_ref(), self.state.resolve(name))
            else {
                return format!("{name} hesitates, unsure what to do.");
            };
            let view = CombatView {
                actor,
                player: &self.state.player,
                participants: &combat.participants,
                round: combat.round,
            };
            self.env.policy().decide(&view)
        };

        match decision {
            CombatDecision::Attack { target } if self.can_attack(name, &target) => self
                .execute_attack(name, &target)
                .unwrap_or_else(|| format!("{name} hesitates, unsure what to do.")),
            CombatDecision::Attack { target } => {
                tracing::debug!(actor = %name, %target, "policy chose an invalid target");
                format!("{name} hesitates, unsure what to do.")
            }
            CombatDecision::Hesitate => format!("{name} hesitates, unsure what to do."),
        }
    }

    fn can_attack(&self, attacker: &str, target: &str) -> bool {
        attacker != target
            && self
                .state
                .combat
                .as_ref()
                .is_some_and(|combat| combat.contains(target))
            && self.state.resolve(target).is_some()
    }

    /// Player at ≤0 HP loses; no living resolvable opponent wins.
    fn check_termination(&self) -> Option<CombatResult> {
        let combat = self.state.combat.as_ref()?;
        let player = &self.state.player;

        if player.is_defeated() {
            return Some(CombatResult::Defeat);
        }

        let any_opponent_standing = combat
            .participants
            .iter()
            .filter(|name| name.as_str() != player.name)
            .filter_map(|name| self.state.resolve(name))
            .any(|character| !character.is_defeated());

        (!any_opponent_standing).then_some(CombatResult::Victory)
    }

    /// Destroys the combat record and reports the result.
    fn finish(&mut self, result: CombatResult, narration: Vec<String>) -> Outcome {
        let Some(combat) = self.state.combat.take() else {
            return Outcome::ongoing().with_narration(narration);
        };
        tracing::info!(?result, rounds = combat.round, "combat ended");

        self.state.last_combat = Some(CombatSummary {
            result,
            roster: combat.roster,
            rounds: combat.round,
        });

        match result {
            CombatResult::Victory => Outcome::victory(VICTORY).with_narration(narration),
            CombatResult::Defeat => Outcome::defeat(DEFEAT).with_narration(narration),
        }
    }
}
