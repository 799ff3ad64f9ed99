//! Combat resolution math.
//!
//! Pure functions for the d20 attack roll, the hit test and damage dice.
//! Dice come in as already-rolled faces so every function here is
//! deterministic and side-effect free; the engine does the rolling.
//!
//! # Core Functions
//!
//! - `attack_total`: d20 face + strength modifier + attack bonus
//! - `check_hit`: total against armor class (ties hit)
//! - `resolve_attack`: hit check plus damage sum

pub mod dice;
pub mod hit;
pub mod result;

pub use dice::{DamageDice, DiceError};
pub use hit::{attack_total, check_hit};
pub use result::{AttackOutcome, AttackProfile, AttackResult, resolve_attack};
