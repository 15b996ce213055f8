//! Common error infrastructure for battle-core.
//!
//! Turn resolution itself never fails: misses, failed seals and battle end are
//! normal outcomes recorded in the [`TurnResult`](crate::TurnResult). Errors
//! exist only at the two boundaries around the engine:
//!
//! - **Skill validation** ([`SkillError`]): an untyped skill record that cannot
//!   become a [`Skill`](crate::Skill).
//! - **Skill selection** ([`UsageError`]): a skill that may not be offered for
//!   the upcoming turn.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each boundary has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The caller may pick a different skill and try again
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors indicating corrupted battle state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - retry with an alternative skill.
    ///
    /// Examples: skill sealed, not enough MP, cooldown pending
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown skill category, blank skill id
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - battle state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all battle errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait BattleError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// A skill record rejected at the validation boundary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SkillError {
    #[error("unknown skill category '{0}'")]
    UnknownCategory(String),

    #[error("skill id must not be blank")]
    EmptyId,
}

impl BattleError for SkillError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCategory(_) => "SKILL_UNKNOWN_CATEGORY",
            Self::EmptyId => "SKILL_EMPTY_ID",
        }
    }
}

/// Why a skill cannot be offered for the upcoming turn.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("skill is sealed until turn {until}")]
    Sealed { until: u32 },

    #[error("requires at least {required} MP (current {current})")]
    MpBelowThreshold { required: u32, current: u32 },

    #[error("requires HP at or below {percent}% (current {current}%)")]
    HpTooHigh { percent: u32, current: u32 },

    #[error("requires HP at or above {percent}% (current {current}%)")]
    HpTooLow { percent: u32, current: u32 },

    #[error("requires an active '{0}' field effect")]
    FieldMissing(String),

    #[error("on cooldown for {remaining} more turn(s)")]
    OnCooldown { remaining: u32 },

    #[error("usable from turn {required} (upcoming turn {upcoming})")]
    TooEarly { required: u32, upcoming: u32 },

    #[error("requires the opponent to have a sealed skill")]
    NoSealedOpponentSkill,

    #[error("not enough MP: costs {cost}, current {current}")]
    InsufficientMp { cost: u32, current: u32 },

    #[error("a defeated combatant cannot act")]
    Defeated,
}

impl BattleError for UsageError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Defeated => ErrorSeverity::Validation,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Sealed { .. } => "USAGE_SEALED",
            Self::MpBelowThreshold { .. } => "USAGE_MP_ABOVE",
            Self::HpTooHigh { .. } => "USAGE_HP_BELOW",
            Self::HpTooLow { .. } => "USAGE_HP_ABOVE",
            Self::FieldMissing(_) => "USAGE_FIELD_EXISTS",
            Self::OnCooldown { .. } => "USAGE_COOLDOWN",
            Self::TooEarly { .. } => "USAGE_TURN_COUNT",
            Self::NoSealedOpponentSkill => "USAGE_SEALED_ENEMY",
            Self::InsufficientMp { .. } => "USAGE_INSUFFICIENT_MP",
            Self::Defeated => "USAGE_DEFEATED",
        }
    }
}
