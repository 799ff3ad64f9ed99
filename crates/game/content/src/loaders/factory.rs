//! Content factory for building a playable game from data files.

use std::path::{Path, PathBuf};

use adventure_core::{
    FleeingBystanders, GameConfig, GameState, ReputationTable, ReputationTracker, TurnObservers,
    WorldTick,
};

use crate::loaders::{ConfigLoader, LoadResult, ReputationLoader, WorldLoader, WorldManifest};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── reputation.toml
/// ├── world.toml
/// └── locations/
///     ├── square.toml
///     └── gate.toml
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load faction tables from `reputation.toml`.
    ///
    /// Without the file the built-in table applies.
    pub fn load_reputation(&self) -> LoadResult<ReputationTable> {
        let path = self.data_dir.join("reputation.toml");
        if !path.exists() {
            tracing::info!(path = %path.display(), "no reputation table; using defaults");
            return Ok(ReputationTable::default());
        }
        ReputationLoader::load(&path)
    }

    /// Load the world from `locations/` and start it per `world.toml`.
    pub fn load_game(&self, config: &GameConfig) -> LoadResult<GameState> {
        let world = WorldLoader::load_dir(&self.data_dir.join("locations"))?;
        let manifest = WorldManifest::load(&self.data_dir.join("world.toml"))?;
        manifest.into_state(world, config.starting_minutes)
    }

    /// Observers wired with the loaded reputation table and the built-in
    /// fleeing-bystander behavior.
    pub fn load_observers(&self, config: &GameConfig) -> LoadResult<TurnObservers> {
        let reputation = ReputationTracker::new(self.load_reputation()?);
        let tick = WorldTick::new().with_collaborator(FleeingBystanders::from_config(config));
        Ok(TurnObservers::new(config.clone(), reputation, tick))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
