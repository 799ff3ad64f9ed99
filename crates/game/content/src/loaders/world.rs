//! World loader: one TOML file per location plus a starting manifest.

use std::path::{Path, PathBuf};

use adventure_core::{Character, GameState, GameWorld, Location};

use crate::loaders::{LoadResult, read_file};

/// Where a new game starts and who plays it.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct WorldManifest {
    pub start_location: String,
    pub player: Character,
    #[serde(default)]
    pub game_seed: u64,
}

impl WorldManifest {
    pub fn load(path: &Path) -> LoadResult<Self> {
        let content = read_file(path)?;
        toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse world manifest {}: {}", path.display(), e))
    }

    /// Builds the opening state; the start location must exist in `world`.
    pub fn into_state(self, world: GameWorld, starting_minutes: u32) -> LoadResult<GameState> {
        if !world.contains(&self.start_location) {
            anyhow::bail!("Start location '{}' is not part of the world", self.start_location);
        }
        Ok(GameState::new(self.player, self.start_location, world)
            .with_seed(self.game_seed)
            .with_minutes(starting_minutes))
    }
}

/// Loader for a directory of location files.
pub struct WorldLoader;

impl WorldLoader {
    /// Loads every `*.toml` file in `dir`, in file-name order.
    ///
    /// A file without an id is skipped with a warning; an unreadable file,
    /// a duplicate id or an empty world fails the load.
    pub fn load_dir(dir: &Path) -> LoadResult<GameWorld> {
        if !dir.is_dir() {
            anyhow::bail!("Location directory does not exist: {}", dir.display());
        }

        let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
            .map_err(|e| anyhow::anyhow!("Failed to list {}: {}", dir.display(), e))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .collect();
        files.sort();

        let mut world = GameWorld::new();
        for path in &files {
            let location = Self::load_location(path)?;
            if location.id.trim().is_empty() {
                tracing::warn!(file = %path.display(), "skipping location without an id");
                continue;
            }
            world
                .add_location(location)
                .map_err(|e| anyhow::anyhow!("Invalid location in {}: {}", path.display(), e))?;
        }

        if world.locations.is_empty() {
            anyhow::bail!("No valid location files found in {}", dir.display());
        }
        tracing::info!(locations = world.locations.len(), "world loaded");
        Ok(world)
    }

    pub fn load_location(path: &Path) -> LoadResult<Location> {
        let content = read_file(path)?;
        toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse location {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SQUARE: &str = r#"
id = "square"
name = "Town Square"
description = "A fountain gurgles."

[exits]
"the north road" = "gate"

[[characters]]
name = "Guard Captain"
faction = "town_guard"
hp = 30
max_hp = 30

[characters.stats]
strength = 15

[[items]]
name = "Copper Coin"
"#;

    const GATE: &str = r#"
id = "gate"
name = "North Gate"
"#;

    #[test]
    fn loads_locations_in_name_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("b_square.toml"), SQUARE).expect("write");
        fs::write(dir.path().join("a_gate.toml"), GATE).expect("write");
        fs::write(dir.path().join("notes.txt"), "ignored").expect("write");

        let world = WorldLoader::load_dir(dir.path()).expect("valid world");
        assert_eq!(world.locations.len(), 2);
        let square = world.get("square").expect("square");
        assert_eq!(square.exit_to("gate"), Some("the north road"));
        assert_eq!(square.characters[0].stats.get("strength"), 15);
        assert_eq!(square.characters[0].faction.as_deref(), Some("town_guard"));
    }

    #[test]
    fn blank_ids_are_skipped_but_empty_worlds_fail() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("nowhere.toml"), "id = \"\"\nname = \"Nowhere\"\n").expect("write");
        assert!(WorldLoader::load_dir(dir.path()).is_err());

        fs::write(dir.path().join("gate.toml"), GATE).expect("write");
        let world = WorldLoader::load_dir(dir.path()).expect("one valid location");
        assert_eq!(world.locations.len(), 1);
    }

    #[test]
    fn duplicate_ids_fail_the_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("gate.toml"), GATE).expect("write");
        fs::write(dir.path().join("gate_again.toml"), GATE).expect("write");
        assert!(WorldLoader::load_dir(dir.path()).is_err());
    }

    #[test]
    fn missing_directory_fails() {
        assert!(WorldLoader::load_dir(Path::new("/nonexistent/locations")).is_err());
    }

    #[test]
    fn manifest_requires_known_start() {
        let manifest: WorldManifest = toml::from_str(
            "start_location = \"cellar\"\ngame_seed = 7\n\n[player]\nname = \"Arion\"\n",
        )
        .expect("valid manifest");
        let world = GameWorld::new().with_location(Location::new("gate", "Gate"));
        assert!(manifest.clone().into_state(world.clone(), 480).is_err());

        let world = world.with_location(Location::new("cellar", "Cellar"));
        let state = manifest.into_state(world, 480).expect("start exists");
        assert_eq!(state.player.name, "Arion");
        assert_eq!(state.game_seed, 7);
        assert_eq!(state.current_location_id, "cellar");
    }
}
