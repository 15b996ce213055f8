//! Skill catalog loader.

use std::collections::HashSet;
use std::path::Path;

use battle_core::Skill;
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Skill catalog structure for RON files.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillCatalog {
    pub skills: Vec<Skill>,
}

/// Loader for skill catalogs from RON files.
pub struct SkillCatalogLoader;

impl SkillCatalogLoader {
    /// Load a skill catalog from a RON file.
    ///
    /// Each entry goes through skill normalization: absent numbers take the
    /// category defaults, out-of-range numbers are clamped, and an unknown
    /// category fails the whole load.
    pub fn load(path: &Path) -> LoadResult<Vec<Skill>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Skill>> {
        let catalog: SkillCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for skill in &catalog.skills {
            if !seen.insert(skill.id()) {
                anyhow::bail!("Duplicate skill id '{}' in catalog", skill.id());
            }
        }

        tracing::debug!(count = catalog.skills.len(), "skill catalog loaded");
        Ok(catalog.skills)
    }
}
