//! Injected collaborators the rules need but do not own.
//!
//! [`GameEnv`] bundles the dice oracle, the NPC combat policy and the tunable
//! configuration so the engine and the action handlers can be driven with
//! real or scripted implementations without changing their code.
mod policy;
mod rng;

pub use policy::{AlwaysAttackPlayer, CombatDecision, CombatPolicy, CombatView};
pub use rng::{PcgRng, RngOracle, RollKind, ScriptedRng, compute_seed};

use crate::config::GameConfig;
use crate::state::GameState;

static DEFAULT_POLICY: AlwaysAttackPlayer = AlwaysAttackPlayer;

/// Aggregates the read-only collaborators required by the rules.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    rng: &'a dyn RngOracle,
    policy: &'a dyn CombatPolicy,
    config: &'a GameConfig,
}

impl<'a> GameEnv<'a> {
    pub fn new(rng: &'a dyn RngOracle, policy: &'a dyn CombatPolicy, config: &'a GameConfig) -> Self {
        Self {
            rng,
            policy,
            config,
        }
    }

    /// Environment using the default NPC policy.
    pub fn with_rng(rng: &'a dyn RngOracle, config: &'a GameConfig) -> Self {
        Self::new(rng, &DEFAULT_POLICY, config)
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    pub fn policy(&self) -> &'a dyn CombatPolicy {
        self.policy
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    /// Rolls one die and advances the state's roll nonce.
    pub fn roll(&self, state: &mut GameState, kind: RollKind, sides: u32) -> u32 {
        let seed = compute_seed(state.game_seed, state.nonce, kind as u32);
        state.nonce = state.nonce.wrapping_add(1);
        self.rng.roll_die(seed, sides.max(1))
    }
}

impl std::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
