//! Data-driven content and loaders.
//!
//! This crate reads the tunables and world data an adventure starts from:
//! - Game configuration (`config.toml`)
//! - Faction reputation tables (`reputation.toml`)
//! - Locations (`locations/*.toml`) and the starting manifest (`world.toml`)
//!
//! All loaders deserialize straight into `adventure-core` types with serde.
//! A load failure means no valid state exists, so errors propagate.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, ReputationLoader, WorldLoader, WorldManifest,
};
