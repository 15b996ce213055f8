//! Character roster loader.
//!
//! Characters name their skills by catalog id; loading resolves every id
//! against an already-loaded skill catalog.

use std::collections::HashMap;
use std::path::Path;

use battle_core::{CharacterRecord, Skill, StatsRecord};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Character entry as written in `characters.ron`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CharacterSpec {
    pub name: String,
    pub stats: StatsRecord,
    /// Catalog skill ids.
    pub skills: Vec<String>,
}

/// Loader for character rosters from RON files.
pub struct CharacterLoader;

impl CharacterLoader {
    /// Load a roster from a RON file.
    ///
    /// RON format: `Vec<(String, CharacterSpec)>`
    ///
    /// # Returns
    ///
    /// Returns a Vec of (character_id, CharacterRecord), in file order.
    pub fn load(path: &Path, catalog: &[Skill]) -> LoadResult<Vec<(String, CharacterRecord)>> {
        let content = read_file(path)?;
        Self::parse(&content, catalog)
    }

    pub fn parse(content: &str, catalog: &[Skill]) -> LoadResult<Vec<(String, CharacterRecord)>> {
        let raw_data: Vec<(String, CharacterSpec)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse character roster RON: {}", e))?;

        let by_id: HashMap<&str, &Skill> = catalog.iter().map(|skill| (skill.id(), skill)).collect();

        let mut characters = Vec::with_capacity(raw_data.len());
        for (character_id, spec) in raw_data {
            let skills = spec
                .skills
                .iter()
                .map(|skill_id| {
                    by_id.get(skill_id.as_str()).map(|skill| (*skill).clone()).ok_or_else(|| {
                        anyhow::anyhow!(
                            "Character '{}' references unknown skill '{}'",
                            character_id,
                            skill_id
                        )
                    })
                })
                .collect::<LoadResult<Vec<_>>>()?;

            let name = if spec.name.is_empty() {
                character_id.clone()
            } else {
                spec.name
            };

            characters.push((
                character_id,
                CharacterRecord {
                    name,
                    stats: spec.stats,
                    skills,
                },
            ));
        }

        tracing::debug!(count = characters.len(), "character roster loaded");
        Ok(characters)
    }
}
