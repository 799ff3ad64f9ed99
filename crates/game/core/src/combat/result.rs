//! Attack profiles and resolution.

use crate::state::Character;

use super::dice::DamageDice;
use super::hit::{attack_total, check_hit};

/// Attack-relevant numbers of a character, captured before rolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackProfile {
    pub strength: i32,
    pub attack_bonus: i32,
    pub dice: DamageDice,
}

impl AttackProfile {
    /// Reads the main-hand weapon, falling back to `unarmed` dice.
    pub fn of(character: &Character, unarmed: DamageDice) -> Self {
        let dice = character
            .weapon_dice()
            .map(|expr| DamageDice::parse_or(expr, unarmed))
            .unwrap_or(unarmed);
        Self {
            strength: character.stats.get("strength"),
            attack_bonus: character.total_attack_bonus(),
            dice,
        }
    }
}

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    Miss,
    Hit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub outcome: AttackOutcome,
    /// Attack roll total including modifiers.
    pub total: i32,
    /// Damage dealt (None if miss).
    pub damage: Option<i32>,
}

/// Resolve a complete attack (hit check + damage sum).
///
/// `damage_faces` are only consulted on a hit. The caller rolls them lazily
/// through the closure so a miss consumes no damage dice.
pub fn resolve_attack(
    attacker: &AttackProfile,
    defender_armor_class: i32,
    d20: u32,
    damage_faces: impl FnOnce(DamageDice) -> Vec<u32>,
) -> AttackResult {
    let total = attack_total(d20, attacker.strength, attacker.attack_bonus);

    if !check_hit(total, defender_armor_class) {
        return AttackResult {
            outcome: AttackOutcome::Miss,
            total,
            damage: None,
        };
    }

    let faces = damage_faces(attacker.dice);
    AttackResult {
        outcome: AttackOutcome::Hit,
        total,
        damage: Some(DamageDice::total(&faces)),
    }
}
