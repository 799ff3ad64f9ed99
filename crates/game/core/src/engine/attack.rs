use crate::combat::{AttackOutcome, AttackProfile, DamageDice, resolve_attack};
use crate::env::RollKind;
use crate::state::CharacterResolver;

use super::CombatEngine;

const FALLBACK_UNARMED: DamageDice = DamageDice::new(1, 4);

impl<'a> CombatEngine<'a> {
    /// Resolves one attack between two named characters.
    ///
    /// A lethal hit removes the target from the initiative order at once.
    /// Returns `None` when either side can no longer be resolved.
    pub(super) fn execute_attack(&mut self, attacker_name: &str, target_name: &str) -> Option<String> {
        let unarmed = DamageDice::parse_or(&self.env.config().unarmed_damage, FALLBACK_UNARMED);
        let profile = AttackProfile::of(self.state.resolve(attacker_name)?, unarmed);
        let armor_class = self.state.resolve(target_name)?.total_armor_class();

        let env = self.env;
        let d20 = env.roll(self.state, RollKind::Attack, 20);
        let state = &mut *self.state;
        let result = resolve_attack(&profile, armor_class, d20, |dice| {
            (0..dice.count)
                .map(|_| env.roll(state, RollKind::Damage, dice.sides))
                .collect()
        });

        let damage = match (result.outcome, result.damage) {
            (AttackOutcome::Hit, Some(damage)) => damage,
            _ => {
                tracing::info!(attacker = attacker_name, target = target_name, roll = result.total, armor_class, "attack missed");
                return Some(format!("{attacker_name} attacks {target_name} but misses."));
            }
        };

        let target = self.state.resolve_mut(target_name)?;
        target.hp = target.hp.saturating_sub(damage);
        let defeated = target.is_defeated();
        tracing::info!(
            attacker = attacker_name,
            target = target_name,
            roll = result.total,
            damage,
            hp = target.reported_hp(),
            max_hp = target.max_hp,
            "attack hit"
        );

        let mut line = format!("{attacker_name}'s attack hits {target_name} for {damage} damage!");
        if defeated {
            line.push_str(&format!(" {target_name} collapses, defeated!"));
            if let Some(combat) = self.state.combat.as_mut() {
                combat.remove(target_name);
            }
        }
        Some(line)
    }
}
