//! Selection-time gating.
//!
//! Decides whether a skill may be offered to a side for the upcoming turn.
//! Turn execution never calls into this module: the engine charges MP and
//! resolves whatever it is given.

use crate::error::UsageError;
use crate::skill::{EffectTarget, Skill, UsageCondition};
use crate::state::{BattleState, CombatantState, Side};

/// Check every usage rule for `skill` cast by `side` on the upcoming turn.
///
/// Rules are evaluated in order: defeat, seals, declared conditions, then MP
/// cost. The first failing rule is returned.
pub fn check_usage(skill: &Skill, side: Side, state: &BattleState) -> Result<(), UsageError> {
    let upcoming = state.upcoming_turn();
    let caster = state.combatant(side);
    let opponent = state.combatant(side.opponent());

    if caster.is_defeated() {
        return Err(UsageError::Defeated);
    }

    if let Some(until) = caster.sealed_until(skill.id(), upcoming) {
        return Err(UsageError::Sealed { until });
    }

    for condition in skill.conditions() {
        check_condition(condition, skill, caster, opponent, state, upcoming)?;
    }

    if caster.mp < skill.cost() {
        return Err(UsageError::InsufficientMp {
            cost: skill.cost(),
            current: caster.mp,
        });
    }

    Ok(())
}

fn check_condition(
    condition: &UsageCondition,
    skill: &Skill,
    caster: &CombatantState,
    opponent: &CombatantState,
    state: &BattleState,
    upcoming: u32,
) -> Result<(), UsageError> {
    let pick = |target: &EffectTarget| match target {
        EffectTarget::Caster => caster,
        EffectTarget::Opponent => opponent,
    };

    match condition {
        UsageCondition::MpAbove(required) => {
            if caster.mp < *required {
                return Err(UsageError::MpBelowThreshold {
                    required: *required,
                    current: caster.mp,
                });
            }
        }
        UsageCondition::HpBelow { percent, target } => {
            let current = pick(target).hp_percent();
            if current > f64::from(*percent) {
                return Err(UsageError::HpTooHigh {
                    percent: *percent,
                    current: current.floor() as u32,
                });
            }
        }
        UsageCondition::HpAbove { percent, target } => {
            let current = pick(target).hp_percent();
            if current < f64::from(*percent) {
                return Err(UsageError::HpTooLow {
                    percent: *percent,
                    current: current.floor() as u32,
                });
            }
        }
        UsageCondition::FieldExists(kind) => {
            if !state.field.has_kind(kind, upcoming) {
                return Err(UsageError::FieldMissing(kind.clone()));
            }
        }
        UsageCondition::Cooldown(turns) => {
            // Never-used skills are ready.
            if let Some(&last_used) = caster.skill_cooldowns.get(skill.id()) {
                let elapsed = upcoming.saturating_sub(last_used);
                if elapsed < *turns {
                    return Err(UsageError::OnCooldown {
                        remaining: turns - elapsed,
                    });
                }
            }
        }
        UsageCondition::TurnCount(required) => {
            if upcoming < *required {
                return Err(UsageError::TooEarly {
                    required: *required,
                    upcoming,
                });
            }
        }
        UsageCondition::SealedEnemy => {
            if !opponent
                .sealed_skills
                .iter()
                .any(|sealed| sealed.is_active(upcoming))
            {
                return Err(UsageError::NoSealedOpponentSkill);
            }
        }
    }

    Ok(())
}

/// Whether `skill_id` is sealed for `side` on the upcoming turn.
pub fn is_sealed(skill_id: &str, side: Side, state: &BattleState) -> bool {
    state
        .combatant(side)
        .sealed_until(skill_id, state.upcoming_turn())
        .is_some()
}

/// Skills `side` may select for the upcoming turn, in declaration order.
pub fn available_skills(side: Side, state: &BattleState) -> Vec<&Skill> {
    state
        .combatant(side)
        .skills
        .iter()
        .filter(|skill| check_usage(skill, side, state).is_ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BattleConfig;
    use crate::error::BattleError;
    use crate::skill::SkillCategory;
    use crate::state::{CharacterRecord, FieldEffect, SealedSkill, StatBlock, init_battle_state};

    fn state_with(skills: Vec<Skill>) -> BattleState {
        let config = BattleConfig::default();
        let user = CharacterRecord {
            name: "User".into(),
            skills,
            ..CharacterRecord::default()
        };
        let enemy = CharacterRecord {
            name: "Enemy".into(),
            ..CharacterRecord::default()
        };
        BattleState::new(
            init_battle_state(&user, &config),
            init_battle_state(&enemy, &config),
        )
    }

    fn skill(condition: UsageCondition) -> Skill {
        Skill::new("gated", "Gated", SkillCategory::Attack).with_condition(condition)
    }

    #[test]
    fn unconditioned_skill_only_needs_mp() {
        let mut state = state_with(vec![]);
        let plain = Skill::new("plain", "Plain", SkillCategory::Attack).with_cost(20);
        assert_eq!(check_usage(&plain, Side::User, &state), Ok(()));

        state.user.mp = 19;
        assert_eq!(
            check_usage(&plain, Side::User, &state),
            Err(UsageError::InsufficientMp {
                cost: 20,
                current: 19
            })
        );
    }

    #[test]
    fn seal_blocks_until_its_expiry_turn() {
        let gated = Skill::new("slash", "Slash", SkillCategory::Attack);
        let mut state = state_with(vec![gated.clone()]);
        state.user.sealed_skills.push(SealedSkill {
            skill_id: "slash".into(),
            name: "Slash".into(),
            expires_at_turn: 3,
        });

        state.turn = 1; // upcoming 2
        assert_eq!(
            check_usage(&gated, Side::User, &state),
            Err(UsageError::Sealed { until: 3 })
        );
        assert!(is_sealed("slash", Side::User, &state));

        state.turn = 2; // upcoming 3
        assert_eq!(check_usage(&gated, Side::User, &state), Ok(()));
        assert!(!is_sealed("slash", Side::User, &state));
    }

    #[test]
    fn hp_conditions_read_the_named_target() {
        let mut state = state_with(vec![]);
        state.enemy.hp = 20;

        let finisher = skill(UsageCondition::HpBelow {
            percent: 30,
            target: EffectTarget::Opponent,
        });
        assert_eq!(check_usage(&finisher, Side::User, &state), Ok(()));

        let desperate = skill(UsageCondition::HpBelow {
            percent: 30,
            target: EffectTarget::Caster,
        });
        assert_eq!(
            check_usage(&desperate, Side::User, &state),
            Err(UsageError::HpTooHigh {
                percent: 30,
                current: 100
            })
        );

        let confident = skill(UsageCondition::HpAbove {
            percent: 50,
            target: EffectTarget::Caster,
        });
        let err = check_usage(&confident, Side::Enemy, &state).unwrap_err();
        assert_eq!(err.error_code(), "USAGE_HP_ABOVE");
    }

    #[test]
    fn cooldown_counts_from_last_use() {
        let gated = skill(UsageCondition::Cooldown(3));
        let mut state = state_with(vec![]);
        assert_eq!(check_usage(&gated, Side::User, &state), Ok(()));

        state.user.skill_cooldowns.insert("gated".into(), 2);
        state.turn = 3; // upcoming 4, elapsed 2
        assert_eq!(
            check_usage(&gated, Side::User, &state),
            Err(UsageError::OnCooldown { remaining: 1 })
        );

        state.turn = 4;
        assert_eq!(check_usage(&gated, Side::User, &state), Ok(()));
    }

    #[test]
    fn turn_count_uses_upcoming_turn() {
        let gated = skill(UsageCondition::TurnCount(3));
        let mut state = state_with(vec![]);

        state.turn = 1;
        assert_eq!(
            check_usage(&gated, Side::User, &state),
            Err(UsageError::TooEarly {
                required: 3,
                upcoming: 2
            })
        );

        state.turn = 2;
        assert_eq!(check_usage(&gated, Side::User, &state), Ok(()));
    }

    #[test]
    fn field_and_sealed_enemy_conditions() {
        let mut state = state_with(vec![]);
        let needs_field = skill(UsageCondition::FieldExists("storm".into()));
        let needs_seal = skill(UsageCondition::SealedEnemy);

        assert_eq!(
            check_usage(&needs_field, Side::User, &state),
            Err(UsageError::FieldMissing("storm".into()))
        );
        assert_eq!(
            check_usage(&needs_seal, Side::User, &state),
            Err(UsageError::NoSealedOpponentSkill)
        );

        state.field.place(FieldEffect {
            owner: Side::Enemy,
            kind: "storm".into(),
            power: 40,
            bonus_to_owner: StatBlock::ZERO,
            penalty_to_enemy: StatBlock::ZERO,
            expires_at_turn: 2,
        });
        state.enemy.sealed_skills.push(SealedSkill {
            skill_id: "x".into(),
            name: "X".into(),
            expires_at_turn: 2,
        });
        assert_eq!(check_usage(&needs_field, Side::User, &state), Ok(()));
        assert_eq!(check_usage(&needs_seal, Side::User, &state), Ok(()));

        state.turn = 1; // both expire on the upcoming turn
        assert!(check_usage(&needs_field, Side::User, &state).is_err());
        assert!(check_usage(&needs_seal, Side::User, &state).is_err());
    }

    #[test]
    fn available_skills_filters_in_declaration_order() {
        let state = state_with(vec![
            Skill::new("a", "A", SkillCategory::Attack),
            Skill::new("b", "B", SkillCategory::Attack)
                .with_condition(UsageCondition::MpAbove(200)),
            Skill::new("c", "C", SkillCategory::Recovery),
        ]);

        let ids: Vec<&str> = available_skills(Side::User, &state)
            .into_iter()
            .map(Skill::id)
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn defeated_side_has_nothing_available() {
        let mut state = state_with(vec![Skill::new("a", "A", SkillCategory::Attack)]);
        state.user.hp = 0;
        assert!(available_skills(Side::User, &state).is_empty());
    }
}
