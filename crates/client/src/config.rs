//! Process configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Settings for one automated battle run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Directory holding `config.toml`, `skills.ron` and `characters.ron`.
    pub data_dir: PathBuf,
    pub user: String,
    pub enemy: String,
    /// Fixed seed; `None` draws one from the operating system.
    pub seed: Option<u64>,
    pub max_turns: u32,
    /// When set, logs are also written to `battle.log` in this directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            user: "knight".to_string(),
            enemy: "slime".to_string(),
            seed: None,
            max_turns: 50,
            log_dir: None,
        }
    }
}

impl RunConfig {
    /// Construct run configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_DATA_DIR` - Content directory (default: `data`)
    /// - `BATTLE_USER` - Character id for the user side (default: `knight`)
    /// - `BATTLE_ENEMY` - Character id for the enemy side (default: `slime`)
    /// - `BATTLE_SEED` - Optional u64 seed for a reproducible battle
    /// - `BATTLE_MAX_TURNS` - Turn limit (default: 50)
    /// - `BATTLE_LOG_DIR` - Optional directory for a log file
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("BATTLE_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Some(user) = read_env::<String>("BATTLE_USER") {
            config.user = user;
        }
        if let Some(enemy) = read_env::<String>("BATTLE_ENEMY") {
            config.enemy = enemy;
        }
        config.seed = read_env::<u64>("BATTLE_SEED");
        if let Some(max_turns) = read_env::<u32>("BATTLE_MAX_TURNS") {
            config.max_turns = max_turns.max(1);
        }
        config.log_dir = read_env::<PathBuf>("BATTLE_LOG_DIR");

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
