//! Battle session runtime.
//!
//! Wraps the deterministic engine from `battle-core` in a session that owns
//! the battle state between turns, validates the player's pick, chooses the
//! opponent's skill and keeps the turn history.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the turn loop and its errors
//! - [`ai`] provides skill selection strategies for computer-driven sides
//! - [`rng`] adapts `rand` generators to the engine's randomness source

pub mod ai;
pub mod error;
pub mod rng;
pub mod session;

pub use ai::{SkillSelector, TacticalSelector};
pub use error::{Result, SessionError};
pub use rng::StdRngSource;
pub use session::{BattleOutcome, BattleSession};
