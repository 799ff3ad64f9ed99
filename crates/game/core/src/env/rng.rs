//! RNG oracle for deterministic dice.
//!
//! Every die in the game (initiative, attack rolls, damage, skill checks) is
//! drawn through [`RngOracle`]. Seeds are derived from the game seed and a
//! per-roll nonce, so a saved game replays identically.

use std::sync::atomic::{AtomicUsize, Ordering};

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&self, seed: u64, sides: u32) -> u32 {
        (self.next_u32(seed) % sides.max(1)) + 1
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 32-bit output from 64-bit state. Deterministic, fast
/// and stateless from the caller's point of view.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Which roll a seed is derived for.
///
/// Keeps independent rolls made under the same nonce from colliding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum RollKind {
    Initiative = 0,
    Attack = 1,
    Damage = 2,
    SkillCheck = 3,
}

/// Compute a deterministic seed for one roll.
///
/// # Arguments
///
/// * `game_seed` - Base seed set at game start
/// * `nonce` - Roll sequence number (increments each die)
/// * `context` - Roll kind discriminator
pub fn compute_seed(game_seed: u64, nonce: u64, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Replays a fixed sequence of die faces, ignoring seeds.
///
/// Faces are clamped to the die being rolled; the sequence wraps around once
/// exhausted. Used for scripted encounters and tests.
#[derive(Debug, Default)]
pub struct ScriptedRng {
    faces: Vec<u32>,
    cursor: AtomicUsize,
}

impl ScriptedRng {
    pub fn new(faces: impl Into<Vec<u32>>) -> Self {
        Self {
            faces: faces.into(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Number of faces handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }

    fn next_face(&self) -> u32 {
        if self.faces.is_empty() {
            return 1;
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.faces[index % self.faces.len()]
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.next_face().saturating_sub(1)
    }

    fn roll_die(&self, _seed: u64, sides: u32) -> u32 {
        self.next_face().clamp(1, sides.max(1))
    }
}
