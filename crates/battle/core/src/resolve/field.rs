//! Field category: places a standing modifier on the shared field.

use super::{EffectRecord, declared_duration};
use crate::config::FieldCoefficients;
use crate::skill::{EffectKind, EffectSpec, Skill};
use crate::state::{Field, FieldEffect, Side};

/// Field kind used when a skill declares none.
pub const NEUTRAL_FIELD: &str = "neutral";

/// Build the field effect a skill would place for `owner` at `turn`.
pub fn build_field_effect(
    skill: &Skill,
    owner: Side,
    turn: u32,
    params: &FieldCoefficients,
) -> FieldEffect {
    let kind = match skill.effect(EffectKind::Field) {
        Some(EffectSpec::Field { kind, .. }) if !kind.is_empty() => kind.clone(),
        _ => NEUTRAL_FIELD.to_string(),
    };
    let duration = declared_duration(skill, EffectKind::Field).unwrap_or(params.default_duration);

    FieldEffect {
        owner,
        kind,
        power: skill.power(),
        bonus_to_owner: params.bonus_to_owner.scale(skill.power()),
        penalty_to_enemy: params.penalty_to_enemy.scale(skill.power()),
        expires_at_turn: turn.saturating_add(duration),
    }
}

/// Place the skill's field effect, owned by `owner`.
pub fn resolve_field(
    skill: &Skill,
    owner: Side,
    field: &mut Field,
    turn: u32,
    params: &FieldCoefficients,
) -> EffectRecord {
    let effect = build_field_effect(skill, owner, turn, params);
    let record = EffectRecord::Field {
        kind: effect.kind.clone(),
        power: effect.power,
        duration: effect.expires_at_turn - turn,
        expires_at_turn: effect.expires_at_turn,
        bonus_to_owner: effect.bonus_to_owner,
        penalty_to_enemy: effect.penalty_to_enemy,
    };

    tracing::debug!(
        skill = skill.id(),
        %owner,
        kind = %effect.kind,
        expires_at_turn = effect.expires_at_turn,
        "field placed"
    );
    field.place(effect);

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::SkillCategory;

    #[test]
    fn effect_carries_floored_modifiers_and_expiry() {
        let skill = Skill::new("mire", "Mire", SkillCategory::Field)
            .with_power(45)
            .with_effect(EffectSpec::Field {
                kind: "swamp".into(),
                duration: Some(4),
            });

        let effect = build_field_effect(&skill, Side::Enemy, 2, &FieldCoefficients::default());

        assert_eq!(effect.owner, Side::Enemy);
        assert_eq!(effect.kind, "swamp");
        assert_eq!(effect.expires_at_turn, 6);
        assert_eq!(effect.bonus_to_owner.attack, 6);
        assert_eq!(effect.penalty_to_enemy.agility, 3);
    }

    #[test]
    fn undeclared_field_is_neutral_for_three_turns() {
        let skill = Skill::new("haze", "Haze", SkillCategory::Field);
        let mut field = Field::new();

        let record = resolve_field(&skill, Side::User, &mut field, 1, &FieldCoefficients::default());

        assert_eq!(field.active_effects.len(), 1);
        assert_eq!(field.active_effects[0].kind, NEUTRAL_FIELD);
        assert!(matches!(
            record,
            EffectRecord::Field {
                duration: 3,
                expires_at_turn: 4,
                ..
            }
        ));
    }
}
