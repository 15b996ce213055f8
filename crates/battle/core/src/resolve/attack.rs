//! Attack category: hit check, damage, HP loss.

use super::EffectRecord;
use crate::combat::{DamageInput, DamageOutcome, HitOutcome, calculate_damage, resolve_hit};
use crate::config::BattleConfig;
use crate::rng::RngSource;
use crate::skill::{Skill, SkillCategory};
use crate::state::{CombatantState, Stat};

/// Damage for an already-decided hit check.
///
/// Draws the random factor only when the hit landed.
pub fn calculate_attack_damage<R: RngSource + ?Sized>(
    skill: &Skill,
    attacker: &CombatantState,
    defender: &CombatantState,
    defender_last: Option<SkillCategory>,
    hit: &HitOutcome,
    config: &BattleConfig,
    rng: &mut R,
) -> DamageOutcome {
    if !hit.is_hit {
        return DamageOutcome::MISS;
    }

    let random_factor = rng.range_f64(config.damage.random_min, config.damage.random_max);
    let input = DamageInput {
        power: skill.power(),
        attack: attacker.effective_stat(Stat::Attack),
        defense: defender.effective_stat(Stat::Defense),
        defense_buffer: defender.defense_buffer,
        type_multiplier: config
            .type_advantage
            .multiplier(skill.category(), defender_last),
        random_factor,
        is_critical: hit.is_critical,
    };
    let breakdown = calculate_damage(&input, &config.damage);

    DamageOutcome {
        damage: breakdown.final_damage,
        breakdown: Some(breakdown),
    }
}

/// Resolve an attack against `defender`, subtracting the damage from its HP.
pub fn resolve_attack<R: RngSource + ?Sized>(
    skill: &Skill,
    attacker: &CombatantState,
    defender: &mut CombatantState,
    defender_last: Option<SkillCategory>,
    config: &BattleConfig,
    rng: &mut R,
) -> EffectRecord {
    let hit = resolve_hit(
        skill.accuracy(),
        attacker.effective_stat(Stat::Agility),
        defender.effective_stat(Stat::Agility),
        &config.hit,
        rng,
    );
    let outcome =
        calculate_attack_damage(skill, attacker, defender, defender_last, &hit, config, rng);
    defender.apply_damage(outcome.damage);

    tracing::debug!(
        skill = skill.id(),
        target = %defender.name,
        damage = outcome.damage,
        is_hit = hit.is_hit,
        is_critical = hit.is_critical,
        "attack resolved"
    );

    EffectRecord::Damage {
        value: outcome.damage,
        is_hit: hit.is_hit,
        is_critical: hit.is_critical,
        miss: !hit.is_hit,
        hit_chance: hit.hit_chance,
        roll: hit.roll,
        breakdown: outcome.breakdown,
    }
}
