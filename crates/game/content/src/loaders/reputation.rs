//! Faction reputation table loader.

use std::path::Path;

use adventure_core::ReputationTable;

use crate::loaders::{LoadResult, read_file};

/// Loads a faction → intent → delta table.
///
/// ```toml
/// [town_guard]
/// give_item = 5
/// attack = -50
/// ```
pub struct ReputationLoader;

impl ReputationLoader {
    pub fn load(path: &Path) -> LoadResult<ReputationTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ReputationTable> {
        let table: ReputationTable = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse reputation TOML: {}", e))?;
        tracing::debug!(factions = table.factions().count(), "reputation table loaded");
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adventure_core::IntentKind;

    #[test]
    fn parses_faction_tables() {
        let table = ReputationLoader::parse(
            "[town_guard]\ngive_item = 5\nattack = -50\n\n[merchants]\ngive_item = 1\n",
        )
        .expect("valid table");
        assert_eq!(table.delta("town_guard", &IntentKind::Attack), -50);
        assert_eq!(table.delta("merchants", &IntentKind::GiveItem), 1);
        assert_eq!(table.delta("merchants", &IntentKind::Attack), 0);
        assert!(!table.is_configured("thieves_guild"));
    }

    #[test]
    fn non_integer_delta_is_an_error() {
        assert!(ReputationLoader::parse("[town_guard]\nattack = \"a lot\"\n").is_err());
    }
}
