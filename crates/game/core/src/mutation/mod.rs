//! Mutation interpreter.
//!
//! The single write path for player and world state outside the combat
//! record. Skill-check side effects, scheduled events, behavior collaborators
//! and quest acceptance all hand their changes here as [`Mutation`] values.

mod apply;
mod error;
mod ops;

pub use apply::{
    MalformedEntry, MutationRecord, MutationReport, MutationStatus, apply_decoded, apply_mutation,
    apply_mutations,
};
pub use error::MutationError;
pub use ops::Mutation;
