//! Data-driven battle content.
//!
//! Loads the three kinds of data a battle needs from a data directory:
//! - Skill catalogs (RON)
//! - Character rosters referencing catalog skills by id (RON)
//! - Balance configuration (TOML)
//!
//! Everything loaded here is plain battle-core data; the engine never knows
//! which file a skill or character came from.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CharacterLoader, CharacterSpec, ConfigLoader, ContentFactory, LoadResult, SkillCatalogLoader,
};
