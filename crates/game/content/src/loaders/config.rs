//! Game configuration loader.

use std::path::Path;

use adventure_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their defaults, so an empty file is valid.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        if config.xp_growth_percent < 100 {
            anyhow::bail!(
                "xp_growth_percent must be at least 100 (got {})",
                config.xp_growth_percent
            );
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("flee_cooldown_turns = 3\nunarmed_damage = \"1d2\"\n")
            .expect("valid config");
        assert_eq!(config.flee_cooldown_turns, 3);
        assert_eq!(config.unarmed_damage, "1d2");
        assert_eq!(config.default_xp_to_next_level, 100);
        assert_eq!(config.xp_growth_percent, 150);
    }

    #[test]
    fn shrinking_thresholds_are_rejected() {
        assert!(ConfigLoader::parse("xp_growth_percent = 50").is_err());
        assert!(ConfigLoader::parse("xp_growth_percent = \"fast\"").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let error = ConfigLoader::load(Path::new("/nonexistent/config.toml")).expect_err("missing");
        assert!(error.to_string().contains("/nonexistent/config.toml"));
    }
}
