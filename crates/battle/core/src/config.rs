//! Balance parameters for turn resolution.
//!
//! Every number the formulas use lives here and is passed explicitly to the
//! functions that need it. [`BattleConfig::default`] reproduces the standard
//! rules; loaders may override any subset (the struct is `serde(default)`).

use crate::combat::TypeAdvantageTable;
use crate::skill::SkillCategory;
use crate::state::{Stat, StatBlock};

/// Complete set of balance parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Base stats used for any stat a character record omits.
    pub default_stats: StatBlock,
    pub default_max_hp: u32,
    pub default_max_mp: u32,
    pub hit: HitParams,
    pub damage: DamageParams,
    pub defense: DefenseParams,
    pub seal: SealParams,
    pub field: FieldCoefficients,
    pub priority: PriorityParams,
    pub type_advantage: TypeAdvantageTable,
}

impl BattleConfig {
    // ===== standard defaults =====
    pub const DEFAULT_STAT: i32 = 50;
    pub const DEFAULT_MAX_HP: u32 = 100;
    pub const DEFAULT_MAX_MP: u32 = 100;

    pub fn new() -> Self {
        Self {
            default_stats: StatBlock::uniform(Self::DEFAULT_STAT),
            default_max_hp: Self::DEFAULT_MAX_HP,
            default_max_mp: Self::DEFAULT_MAX_MP,
            hit: HitParams::default(),
            damage: DamageParams::default(),
            defense: DefenseParams::default(),
            seal: SealParams::default(),
            field: FieldCoefficients::default(),
            priority: PriorityParams::default(),
            type_advantage: TypeAdvantageTable::STANDARD,
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Hit and critical parameters.
///
/// `hit_chance = clamp(accuracy × (1 + Δagility / agility_divisor), min, max)`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HitParams {
    pub min_chance: f64,
    pub max_chance: f64,
    pub agility_divisor: f64,
    /// Critical threshold as a fraction of the hit chance.
    pub critical_ratio: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self {
            min_chance: 10.0,
            max_chance: 100.0,
            agility_divisor: 200.0,
            critical_ratio: 0.10,
        }
    }
}

/// Damage formula parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DamageParams {
    pub random_min: f64,
    pub random_max: f64,
    /// `k` in the mitigation fraction `defense / (defense + k)`.
    pub defense_constant: f64,
    pub critical_multiplier: f64,
    /// Floor applied to a landed hit before the critical multiplier.
    pub minimum: f64,
}

impl Default for DamageParams {
    fn default() -> Self {
        Self {
            random_min: 0.9,
            random_max: 1.1,
            defense_constant: 100.0,
            critical_multiplier: 1.5,
            minimum: 1.0,
        }
    }
}

/// Defense-category parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DefenseParams {
    pub default_duration: u32,
    /// Cap on the reported damage-reduction percentage.
    pub max_reduction_percent: u32,
}

impl Default for DefenseParams {
    fn default() -> Self {
        Self {
            default_duration: 1,
            max_reduction_percent: 50,
        }
    }
}

/// Seal-category parameters.
///
/// `seal_chance = clamp(power × (1 + (magic − resistance) / magic_divisor), min, max)`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SealParams {
    pub min_chance: f64,
    pub max_chance: f64,
    pub magic_divisor: f64,
    /// One sealed skill per this much power (rounded up, at least one).
    pub power_per_skill: u32,
    pub default_duration: u32,
}

impl Default for SealParams {
    fn default() -> Self {
        Self {
            min_chance: 5.0,
            max_chance: 95.0,
            magic_divisor: 200.0,
            power_per_skill: 30,
            default_duration: 2,
        }
    }
}

/// Per-stat multipliers applied to a field skill's power.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatWeights {
    pub attack: f64,
    pub defense: f64,
    pub magic: f64,
    pub agility: f64,
    pub resistance: f64,
}

impl StatWeights {
    pub fn weight(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::Magic => self.magic,
            Stat::Agility => self.agility,
            Stat::Resistance => self.resistance,
        }
    }

    /// `floor(power × weight)` for every stat.
    pub fn scale(&self, power: u32) -> StatBlock {
        StatBlock::from_fn(|stat| (f64::from(power) * self.weight(stat)).floor() as i32)
    }
}

/// Field-category parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldCoefficients {
    pub bonus_to_owner: StatWeights,
    pub penalty_to_enemy: StatWeights,
    pub default_duration: u32,
}

impl Default for FieldCoefficients {
    fn default() -> Self {
        Self {
            bonus_to_owner: StatWeights {
                attack: 0.15,
                defense: 0.10,
                magic: 0.10,
                ..StatWeights::default()
            },
            penalty_to_enemy: StatWeights {
                attack: 0.05,
                defense: 0.05,
                agility: 0.08,
                ..StatWeights::default()
            },
            default_duration: 3,
        }
    }
}

/// Action-order parameters.
///
/// `priority = agility + bias[category] + uniform(0, jitter)`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PriorityParams {
    pub attack_bias: i32,
    pub defense_bias: i32,
    pub seal_bias: i32,
    pub field_bias: i32,
    pub recovery_bias: i32,
    pub jitter: f64,
}

impl PriorityParams {
    pub fn bias(&self, category: SkillCategory) -> i32 {
        match category {
            SkillCategory::Attack => self.attack_bias,
            SkillCategory::Defense => self.defense_bias,
            SkillCategory::Seal => self.seal_bias,
            SkillCategory::Field => self.field_bias,
            SkillCategory::Recovery => self.recovery_bias,
        }
    }
}

impl Default for PriorityParams {
    fn default() -> Self {
        Self {
            attack_bias: -10,
            defense_bias: 30,
            seal_bias: 10,
            field_bias: 0,
            recovery_bias: 20,
            jitter: 10.0,
        }
    }
}
