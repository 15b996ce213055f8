//! Per-category effect resolution.
//!
//! Each [`SkillCategory`] has exactly one resolver. A resolver reads the skill,
//! the caster and the target, mutates the state it was handed, and returns an
//! [`EffectRecord`] describing what happened. Resolvers never touch anything
//! outside their arguments.

pub mod attack;
pub mod defense;
pub mod field;
pub mod recovery;
pub mod seal;

pub use attack::{calculate_attack_damage, resolve_attack};
pub use defense::{defense_value, resolve_defense};
pub use field::{NEUTRAL_FIELD, build_field_effect, resolve_field};
pub use recovery::{heal_amount, resolve_recovery};
pub use seal::{calculate_seal_chance, resolve_seal, sealed_skill_count};

use crate::combat::DamageBreakdown;
use crate::config::BattleConfig;
use crate::rng::RngSource;
use crate::skill::{EffectKind, EffectTarget, HealResource, Skill, SkillCategory};
use crate::state::{BattleState, Side, StatBlock};

/// What one resolved action did. Serialized with a `type` tag.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum EffectRecord {
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Damage {
        /// HP taken from the target; 0 on a miss.
        value: u32,
        is_hit: bool,
        is_critical: bool,
        miss: bool,
        hit_chance: f64,
        roll: f64,
        breakdown: Option<DamageBreakdown>,
    },
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Defense {
        /// Defense added to the caster's buffer.
        value: u32,
        /// Buffer total after this action.
        buffer: u32,
        duration: u32,
        damage_reduction_percent: u32,
    },
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Heal {
        resource: HealResource,
        target: EffectTarget,
        /// Computed heal amount before clamping to the maximum.
        value: u32,
        /// Amount actually restored.
        restored: u32,
    },
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Seal {
        success: bool,
        chance: f64,
        roll: f64,
        /// Names of the skills sealed by this action.
        sealed_skills: Vec<String>,
        duration: u32,
    },
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Field {
        kind: String,
        power: u32,
        duration: u32,
        expires_at_turn: u32,
        bonus_to_owner: StatBlock,
        penalty_to_enemy: StatBlock,
    },
}

impl EffectRecord {
    /// Damage dealt by this record, 0 for non-damage records.
    pub fn damage(&self) -> u32 {
        match self {
            Self::Damage { value, .. } => *value,
            _ => 0,
        }
    }
}

/// Everything a resolver needs besides the skill and the state.
#[derive(Clone, Copy, Debug)]
pub struct ActionContext<'a> {
    pub actor: Side,
    /// Number of the turn being resolved.
    pub turn: u32,
    /// Category the target acted with before this turn began.
    pub target_last: Option<SkillCategory>,
    pub config: &'a BattleConfig,
}

/// Route a skill to the resolver for its category.
pub fn dispatch<R: RngSource + ?Sized>(
    skill: &Skill,
    ctx: &ActionContext<'_>,
    state: &mut BattleState,
    rng: &mut R,
) -> EffectRecord {
    let config = ctx.config;
    match skill.category() {
        SkillCategory::Attack => {
            let (caster, target) = state.pair_mut(ctx.actor);
            resolve_attack(skill, caster, target, ctx.target_last, config, rng)
        }
        SkillCategory::Defense => {
            resolve_defense(skill, state.combatant_mut(ctx.actor), &config.defense)
        }
        SkillCategory::Recovery => {
            let (caster, target) = state.pair_mut(ctx.actor);
            resolve_recovery(skill, caster, target)
        }
        SkillCategory::Seal => {
            let (caster, target) = state.pair_mut(ctx.actor);
            resolve_seal(skill, caster, target, ctx.turn, &config.seal, rng)
        }
        SkillCategory::Field => {
            resolve_field(skill, ctx.actor, &mut state.field, ctx.turn, &config.field)
        }
    }
}

/// Duration declared by the skill's first effect of `kind`, ignoring zero.
fn declared_duration(skill: &Skill, kind: EffectKind) -> Option<u32> {
    skill
        .effect(kind)
        .and_then(|effect| effect.duration())
        .filter(|turns| *turns > 0)
}
