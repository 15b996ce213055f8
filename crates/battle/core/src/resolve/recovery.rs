//! Recovery category: restores HP or MP.

use super::EffectRecord;
use crate::skill::{EffectKind, EffectSpec, EffectTarget, HealResource, Skill};
use crate::state::{CombatantState, Stat};

/// `floor(power × (1 + magic / 100))`
pub fn heal_amount(power: u32, magic: i32) -> u32 {
    (f64::from(power) * (1.0 + f64::from(magic) / 100.0))
        .floor()
        .max(0.0) as u32
}

/// Heal the target named by the skill's heal effect (the caster by default).
///
/// The amount is computed from the caster's magic and clamped to the
/// recipient's maximum.
pub fn resolve_recovery(
    skill: &Skill,
    caster: &mut CombatantState,
    opponent: &mut CombatantState,
) -> EffectRecord {
    let value = heal_amount(skill.power(), caster.effective_stat(Stat::Magic));

    let (resource, target) = match skill.effect(EffectKind::Heal) {
        Some(EffectSpec::Heal { resource, target }) => (*resource, *target),
        _ => (HealResource::default(), EffectTarget::default()),
    };

    let recipient = match target {
        EffectTarget::Caster => caster,
        EffectTarget::Opponent => opponent,
    };
    let restored = match resource {
        HealResource::Hp => recipient.restore_hp(value),
        HealResource::Mp => recipient.restore_mp(value),
    };

    tracing::debug!(
        skill = skill.id(),
        recipient = %recipient.name,
        %resource,
        value,
        restored,
        "recovery resolved"
    );

    EffectRecord::Heal {
        resource,
        target,
        value,
        restored,
    }
}
