//! Skill definitions consumed by the engine.
//!
//! A [`Skill`] is immutable once built and carries no trace of where it came
//! from: catalog skills and generated skills share this shape. Numeric fields
//! are normalized on construction (category defaults for absent values,
//! clamping for out-of-range ones), so resolvers never re-validate them.

mod condition;
mod effect;

pub use condition::UsageCondition;
pub use effect::{EffectKind, EffectSpec, EffectTarget, HealResource};

use crate::error::SkillError;

/// The closed set of skill categories.
///
/// Each category has exactly one resolver in [`crate::resolve`]. The
/// discriminant order is the row/column order of the type-advantage table.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SkillCategory {
    /// Deals damage.
    Attack,
    /// Raises the caster's defense buffer for the turn.
    Defense,
    /// Denies opponent skills for a number of turns.
    Seal,
    /// Places a standing stat modifier on the shared field.
    Field,
    /// Restores HP or MP.
    Recovery,
}

impl SkillCategory {
    /// Number of categories.
    pub const COUNT: usize = 5;

    /// Row/column index in the type-advantage table.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Power used when a skill omits it.
    pub const fn default_power(self) -> u32 {
        match self {
            Self::Attack => 50,
            Self::Defense => 40,
            Self::Seal => 50,
            Self::Field => 40,
            Self::Recovery => 30,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Immutable skill definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SkillDefinition"))]
pub struct Skill {
    id: String,
    name: String,
    category: SkillCategory,
    power: u32,
    cost: u32,
    accuracy: u32,
    effects: Vec<EffectSpec>,
    conditions: Vec<UsageCondition>,
}

impl Skill {
    pub const POWER_MIN: u32 = 5;
    pub const POWER_MAX: u32 = 100;
    pub const COST_MIN: u32 = 1;
    pub const COST_MAX: u32 = 50;
    pub const ACCURACY_MIN: u32 = 50;
    pub const ACCURACY_MAX: u32 = 100;

    pub const DEFAULT_COST: u32 = 15;
    pub const DEFAULT_ACCURACY: u32 = 85;

    /// Id of the fallback skill returned by [`Skill::basic_attack`].
    pub const BASIC_ATTACK_ID: &'static str = "basic_attack";

    /// Create a skill with the category's default numbers and no effects.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: SkillCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            power: category.default_power(),
            cost: Self::DEFAULT_COST,
            accuracy: Self::DEFAULT_ACCURACY,
            effects: Vec::new(),
            conditions: Vec::new(),
        }
    }

    /// Free fallback attack used when a side has nothing else to cast.
    ///
    /// This is the only skill whose cost sits below [`Skill::COST_MIN`].
    pub fn basic_attack() -> Self {
        Self {
            id: Self::BASIC_ATTACK_ID.to_string(),
            name: "Basic Attack".to_string(),
            category: SkillCategory::Attack,
            power: 20,
            cost: 0,
            accuracy: 90,
            effects: vec![EffectSpec::Damage {
                value: 20,
                target: EffectTarget::Opponent,
            }],
            conditions: Vec::new(),
        }
    }

    /// Set power, clamped to `[5, 100]`.
    pub fn with_power(mut self, power: u32) -> Self {
        self.power = power.clamp(Self::POWER_MIN, Self::POWER_MAX);
        self
    }

    /// Set MP cost, clamped to `[1, 50]`.
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost.clamp(Self::COST_MIN, Self::COST_MAX);
        self
    }

    /// Set accuracy, clamped to `[50, 100]`.
    pub fn with_accuracy(mut self, accuracy: u32) -> Self {
        self.accuracy = accuracy.clamp(Self::ACCURACY_MIN, Self::ACCURACY_MAX);
        self
    }

    pub fn with_effect(mut self, effect: EffectSpec) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_condition(mut self, condition: UsageCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> SkillCategory {
        self.category
    }

    pub fn power(&self) -> u32 {
        self.power
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn accuracy(&self) -> u32 {
        self.accuracy
    }

    pub fn effects(&self) -> &[EffectSpec] {
        &self.effects
    }

    pub fn conditions(&self) -> &[UsageCondition] {
        &self.conditions
    }

    /// First declared effect of the given kind.
    pub fn effect(&self, kind: EffectKind) -> Option<&EffectSpec> {
        self.effects.iter().find(|effect| effect.kind() == kind)
    }
}

/// Untyped skill record as produced by catalogs and generators.
///
/// Every numeric field is optional and may be out of range; the category is a
/// free-form string. Converting into a [`Skill`] is the validation boundary:
/// absent numbers take category defaults, out-of-range numbers are clamped,
/// and an unknown category is rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SkillDefinition {
    pub id: String,
    pub name: String,
    pub category: String,
    pub power: Option<i64>,
    pub cost: Option<i64>,
    pub accuracy: Option<i64>,
    pub effects: Vec<EffectSpec>,
    pub conditions: Vec<UsageCondition>,
}

impl TryFrom<SkillDefinition> for Skill {
    type Error = SkillError;

    fn try_from(definition: SkillDefinition) -> Result<Self, Self::Error> {
        if definition.id.trim().is_empty() {
            return Err(SkillError::EmptyId);
        }

        let category: SkillCategory = definition
            .category
            .parse()
            .map_err(|_| SkillError::UnknownCategory(definition.category.clone()))?;

        let name = if definition.name.is_empty() {
            definition.id.clone()
        } else {
            definition.name
        };

        let power = clamp_field(
            definition.power,
            category.default_power(),
            Self::POWER_MIN,
            Self::POWER_MAX,
        );
        // the fallback attack is the only skill allowed below COST_MIN
        let cost_min = if definition.id == Self::BASIC_ATTACK_ID {
            0
        } else {
            Self::COST_MIN
        };
        let cost = clamp_field(
            definition.cost,
            Self::DEFAULT_COST,
            cost_min,
            Self::COST_MAX,
        );
        let accuracy = clamp_field(
            definition.accuracy,
            Self::DEFAULT_ACCURACY,
            Self::ACCURACY_MIN,
            Self::ACCURACY_MAX,
        );

        Ok(Self {
            id: definition.id,
            name,
            category,
            power,
            cost,
            accuracy,
            effects: definition.effects,
            conditions: definition.conditions,
        })
    }
}

fn clamp_field(value: Option<i64>, default: u32, min: u32, max: u32) -> u32 {
    match value {
        Some(raw) => raw.clamp(i64::from(min), i64::from(max)) as u32,
        None => default,
    }
}
