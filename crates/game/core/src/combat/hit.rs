//! Attack roll and hit test.

use crate::state::ability_modifier;

/// Attack roll total.
///
/// # Formula
///
/// ```text
/// total = d20 + ⌊(STR − 10) / 2⌋ + attack_bonus
/// ```
pub fn attack_total(d20: u32, strength: i32, attack_bonus: i32) -> i32 {
    d20 as i32 + ability_modifier(strength) + attack_bonus
}

/// Returns `true` if the attack total meets or beats the armor class.
pub fn check_hit(total: i32, armor_class: i32) -> bool {
    total >= armor_class
}
