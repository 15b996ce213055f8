//! Errors surfaced by a battle session.

use battle_core::{BattleError, ErrorSeverity, UsageError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("the battle is already over")]
    BattleOver,

    #[error("skill '{0}' is not in the player's skill list")]
    UnknownSkill(String),

    #[error("skill '{skill}' cannot be used this turn: {source}")]
    Unusable {
        skill: String,
        #[source]
        source: UsageError,
    },
}

impl BattleError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::BattleOver => ErrorSeverity::Validation,
            Self::UnknownSkill(_) => ErrorSeverity::Validation,
            Self::Unusable { source, .. } => source.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BattleOver => "SESSION_BATTLE_OVER",
            Self::UnknownSkill(_) => "SESSION_UNKNOWN_SKILL",
            Self::Unusable { source, .. } => source.error_code(),
        }
    }
}
