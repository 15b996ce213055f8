//! Selection-time usage conditions.
//!
//! Conditions gate whether a skill may be *offered* for the upcoming turn.
//! They are checked by [`crate::selection::check_usage`]; turn execution never
//! consults them.

use super::EffectTarget;

/// A single usage requirement declared by a skill.
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UsageCondition {
    /// Caster MP must be at least this value.
    MpAbove(u32),
    /// Target HP percentage must not exceed `percent`.
    HpBelow {
        percent: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        target: EffectTarget,
    },
    /// Target HP percentage must be at least `percent`.
    HpAbove {
        percent: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        target: EffectTarget,
    },
    /// A field effect of this kind must be active.
    FieldExists(String),
    /// At least this many turns must have passed since the skill was last used.
    Cooldown(u32),
    /// The upcoming turn number must be at least this value.
    TurnCount(u32),
    /// The opponent must have at least one sealed skill.
    SealedEnemy,
}

impl UsageCondition {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
