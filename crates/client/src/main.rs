//! Battle client binary.
//!
//! Loads content from the data directory, runs one automated battle between
//! two characters and prints every turn result to stdout as a JSON line.
//!
//! # Examples
//!
//! ```bash
//! BATTLE_USER=sorceress BATTLE_ENEMY=warlock BATTLE_SEED=42 cargo run -p battle-client
//! ```

mod config;
mod logging;

use std::io::Write;

use anyhow::{Context, Result};
use battle_content::ContentFactory;
use battle_runtime::{BattleOutcome, BattleSession, StdRngSource};

use crate::config::RunConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = RunConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!("Starting battle client");
    tracing::info!("Data directory: {}", config.data_dir.display());

    let factory = ContentFactory::new(&config.data_dir);
    let battle_config = factory.load_config()?;
    let user = factory
        .load_character(&config.user)
        .with_context(|| format!("Failed to load user character '{}'", config.user))?;
    let enemy = factory
        .load_character(&config.enemy)
        .with_context(|| format!("Failed to load enemy character '{}'", config.enemy))?;

    let rng = match config.seed {
        Some(seed) => {
            tracing::info!("Seed: {}", seed);
            StdRngSource::seeded(seed)
        }
        None => StdRngSource::from_entropy(),
    };

    let mut session = BattleSession::new(&user, &enemy, battle_config, rng);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for _ in 0..config.max_turns {
        if session.is_over() {
            break;
        }
        let result = session.auto_turn()?;
        serde_json::to_writer(&mut out, result)?;
        writeln!(out)?;
    }
    out.flush()?;

    match session.outcome() {
        Some(BattleOutcome::Winner(side)) => {
            tracing::info!("Battle over after {} turns: {} wins", session.state().turn, side)
        }
        Some(BattleOutcome::Draw) => {
            tracing::info!("Battle over after {} turns: draw", session.state().turn)
        }
        None => tracing::warn!(
            "Turn limit of {} reached without a winner",
            config.max_turns
        ),
    }

    Ok(())
}
