//! Defense category: raises the caster's defense buffer.

use super::{EffectRecord, declared_duration};
use crate::config::DefenseParams;
use crate::skill::{EffectKind, Skill};
use crate::state::{CombatantState, Stat};

/// `floor(power × (1 + defense / 100))`
pub fn defense_value(power: u32, defense: i32) -> u32 {
    (f64::from(power) * (1.0 + f64::from(defense) / 100.0))
        .floor()
        .max(0.0) as u32
}

/// Add the skill's defense value to the caster's buffer.
///
/// Buffers accumulate within a turn; the engine zeroes them before the next
/// turn's actions.
pub fn resolve_defense(
    skill: &Skill,
    caster: &mut CombatantState,
    params: &DefenseParams,
) -> EffectRecord {
    let value = defense_value(skill.power(), caster.effective_stat(Stat::Defense));
    caster.defense_buffer = caster.defense_buffer.saturating_add(value);

    let duration = declared_duration(skill, EffectKind::Defense).unwrap_or(params.default_duration);

    tracing::debug!(
        skill = skill.id(),
        caster = %caster.name,
        value,
        buffer = caster.defense_buffer,
        "defense resolved"
    );

    EffectRecord::Defense {
        value,
        buffer: caster.defense_buffer,
        duration,
        damage_reduction_percent: (value / 2).min(params.max_reduction_percent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BattleConfig;
    use crate::skill::{EffectSpec, SkillCategory};
    use crate::state::{CharacterRecord, init_battle_state};

    fn guard() -> Skill {
        Skill::new("guard", "Guard", SkillCategory::Defense).with_power(40)
    }

    #[test]
    fn value_scales_with_defense_stat() {
        assert_eq!(defense_value(40, 50), 60);
        assert_eq!(defense_value(40, 0), 40);
        assert_eq!(defense_value(33, 50), 49); // 49.5
    }

    #[test]
    fn repeated_defense_accumulates() {
        let mut caster = init_battle_state(&CharacterRecord::default(), &BattleConfig::default());
        let params = DefenseParams::default();

        resolve_defense(&guard(), &mut caster, &params);
        let record = resolve_defense(&guard(), &mut caster, &params);

        assert_eq!(caster.defense_buffer, 120);
        assert!(matches!(record, EffectRecord::Defense { buffer: 120, .. }));
    }

    #[test]
    fn reported_reduction_is_capped() {
        let mut caster = init_battle_state(&CharacterRecord::default(), &BattleConfig::default());
        let params = DefenseParams::default();

        let weak = resolve_defense(&guard().with_power(20), &mut caster, &params);
        assert!(matches!(
            weak,
            EffectRecord::Defense {
                value: 30,
                damage_reduction_percent: 15,
                ..
            }
        ));

        let strong = resolve_defense(&guard().with_power(100), &mut caster, &params);
        assert!(matches!(
            strong,
            EffectRecord::Defense {
                damage_reduction_percent: 50,
                ..
            }
        ));
    }

    #[test]
    fn declared_duration_overrides_default() {
        let mut caster = init_battle_state(&CharacterRecord::default(), &BattleConfig::default());
        let skill = guard().with_effect(EffectSpec::Defense {
            value: 40,
            duration: Some(2),
        });

        let record = resolve_defense(&skill, &mut caster, &DefenseParams::default());
        assert!(matches!(record, EffectRecord::Defense { duration: 2, .. }));
    }
}
