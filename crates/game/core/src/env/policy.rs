//! NPC combat decision point.

use crate::state::Character;

/// Read-only view handed to a [`CombatPolicy`].
#[derive(Clone, Copy, Debug)]
pub struct CombatView<'v> {
    pub actor: &'v Character,
    pub player: &'v Character,
    /// Initiative order as it stands this turn.
    pub participants: &'v [String],
    pub round: u32,
}

/// What an NPC does with its turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CombatDecision {
    Attack { target: String },
    Hesitate,
}

/// Chooses an NPC's action during its combat turn.
pub trait CombatPolicy: Send + Sync {
    fn decide(&self, view: &CombatView<'_>) -> CombatDecision;
}

/// Every NPC attacks the player.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysAttackPlayer;

impl CombatPolicy for AlwaysAttackPlayer {
    fn decide(&self, view: &CombatView<'_>) -> CombatDecision {
        CombatDecision::Attack {
            target: view.player.name.clone(),
        }
    }
}
