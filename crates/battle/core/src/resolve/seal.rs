//! Seal category: denies opponent skills for a number of turns.

use super::{EffectRecord, declared_duration};
use crate::config::SealParams;
use crate::rng::{RngSource, shuffle};
use crate::skill::{EffectKind, Skill};
use crate::state::{CombatantState, SealedSkill, Stat};

/// Calculate seal chance from power and the magic/resistance gap.
///
/// # Formula
///
/// ```text
/// seal_chance = power × (1 + (magic − resistance) / divisor)
/// clamped to [min, max]
/// ```
pub fn calculate_seal_chance(power: u32, magic: i32, resistance: i32, params: &SealParams) -> f64 {
    let diff = f64::from(magic) - f64::from(resistance);
    let chance = f64::from(power) * (1.0 + diff / params.magic_divisor);
    chance.clamp(params.min_chance, params.max_chance)
}

/// `max(1, ceil(power / power_per_skill))`
pub fn sealed_skill_count(power: u32, params: &SealParams) -> usize {
    power.div_ceil(params.power_per_skill.max(1)).max(1) as usize
}

/// Roll a seal against `target` at `turn`.
///
/// On success, up to [`sealed_skill_count`] of the target's currently
/// unsealed skills are picked at random and sealed until
/// `turn + duration`. A failed roll still reports chance and roll.
pub fn resolve_seal<R: RngSource + ?Sized>(
    skill: &Skill,
    caster: &CombatantState,
    target: &mut CombatantState,
    turn: u32,
    params: &SealParams,
    rng: &mut R,
) -> EffectRecord {
    let chance = calculate_seal_chance(
        skill.power(),
        caster.effective_stat(Stat::Magic),
        target.effective_stat(Stat::Resistance),
        params,
    );
    let roll = rng.roll_percent();
    let success = roll < chance;
    let duration = declared_duration(skill, EffectKind::Seal).unwrap_or(params.default_duration);

    tracing::trace!(chance, roll, success, "seal roll");

    let mut sealed_skills = Vec::new();
    if success {
        let mut pool: Vec<(String, String)> = target
            .unsealed_skills(turn)
            .map(|candidate| (candidate.id().to_string(), candidate.name().to_string()))
            .collect();
        shuffle(rng, &mut pool);
        pool.truncate(sealed_skill_count(skill.power(), params));

        let expires_at_turn = turn.saturating_add(duration);
        for (skill_id, name) in pool {
            target.sealed_skills.push(SealedSkill {
                skill_id,
                name: name.clone(),
                expires_at_turn,
            });
            sealed_skills.push(name);
        }
    }

    tracing::debug!(
        skill = skill.id(),
        target = %target.name,
        success,
        sealed = ?sealed_skills,
        "seal resolved"
    );

    EffectRecord::Seal {
        success,
        chance,
        roll,
        sealed_skills,
        duration,
    }
}
