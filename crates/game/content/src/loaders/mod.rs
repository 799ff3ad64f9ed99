//! Content loaders for reading game data from files.
//!
//! Each loader turns one TOML file (or directory of files) into the
//! `adventure-core` type it describes.

pub mod config;
pub mod factory;
pub mod reputation;
pub mod world;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use reputation::ReputationLoader;
pub use world::{WorldLoader, WorldManifest};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
