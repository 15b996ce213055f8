//! Content factory for loading battle data from a data directory.

use std::path::{Path, PathBuf};

use battle_core::{BattleConfig, CharacterRecord, Skill};

use crate::loaders::{CharacterLoader, ConfigLoader, LoadResult, SkillCatalogLoader};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── skills.ron
/// └── characters.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load balance configuration from `config.toml`.
    ///
    /// A missing file yields the standard configuration.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using standard rules");
            return Ok(BattleConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the skill catalog from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<Vec<Skill>> {
        let path = self.data_dir.join("skills.ron");
        SkillCatalogLoader::load(&path)
    }

    /// Load the character roster from `characters.ron`, resolving skill ids
    /// against `catalog` (load via `load_skills()`).
    pub fn load_characters(&self, catalog: &[Skill]) -> LoadResult<Vec<(String, CharacterRecord)>> {
        let path = self.data_dir.join("characters.ron");
        CharacterLoader::load(&path, catalog)
    }

    /// Load one character by id.
    pub fn load_character(&self, character_id: &str) -> LoadResult<CharacterRecord> {
        let catalog = self.load_skills()?;
        self.load_characters(&catalog)?
            .into_iter()
            .find(|(id, _)| id == character_id)
            .map(|(_, record)| record)
            .ok_or_else(|| anyhow::anyhow!("Unknown character '{}'", character_id))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
