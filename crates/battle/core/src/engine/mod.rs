//! Turn orchestration.
//!
//! [`BattleEngine`] is the only writer of [`BattleState`] during a turn. One
//! call to [`BattleEngine::execute_turn`] walks every [`TurnPhase`] in order
//! and returns a [`TurnResult`]; there is no error path, since misses, failed
//! seals and battle end are ordinary outcomes.
//!
//! ```text
//! AwaitingActions → OrderResolved → ActionsApplied → FieldResolved → Cleaned
//!     → TurnComplete | BattleEnded
//! ```

mod field;
mod phase;
mod result;
mod scheduler;

pub use field::{apply_field_effects, cleanup};
pub use phase::TurnPhase;
pub use result::{ActorReport, BattleSummary, FieldChange, FieldReport, TurnResult};
pub use scheduler::{ActionOrder, calculate_priority, order_by_priority, schedule};

use crate::config::BattleConfig;
use crate::resolve::{self, ActionContext, EffectRecord};
use crate::rng::RngSource;
use crate::skill::Skill;
use crate::state::{BattleState, Side};

/// Resolves turns against a borrowed battle state.
pub struct BattleEngine<'a> {
    state: &'a mut BattleState,
    config: &'a BattleConfig,
}

impl<'a> BattleEngine<'a> {
    pub fn new(state: &'a mut BattleState, config: &'a BattleConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &BattleState {
        &*self.state
    }

    /// Resolve one full turn with both chosen skills.
    ///
    /// Advances `state.turn` first, so the returned result and every expiry
    /// written during the turn use the new turn number. Skills are not
    /// re-validated here: MP is charged (floored at zero) whether or not the
    /// caster could afford it.
    ///
    /// Field modifiers from effects still active at the new turn are applied
    /// before ordering and cleared again in cleanup, so an effect expiring at
    /// turn `T` shapes actions up to turn `T - 1` and none on turn `T`.
    pub fn execute_turn<R: RngSource + ?Sized>(
        &mut self,
        user_skill: &Skill,
        enemy_skill: &Skill,
        rng: &mut R,
    ) -> TurnResult {
        // AwaitingActions
        self.state.user.defense_buffer = 0;
        self.state.enemy.defense_buffer = 0;
        self.state.turn += 1;
        let turn = self.state.turn;
        let previous = (self.state.user.last_skill, self.state.enemy.last_skill);
        apply_field_effects(self.state, turn);
        tracing::debug!(
            turn,
            phase = TurnPhase::AwaitingActions.as_str(),
            user_skill = user_skill.id(),
            enemy_skill = enemy_skill.id(),
        );

        // OrderResolved
        let order = schedule(
            user_skill,
            enemy_skill,
            self.state,
            &self.config.priority,
            rng,
        );
        tracing::debug!(
            turn,
            phase = TurnPhase::OrderResolved.as_str(),
            first = %order.sides[0],
            user_priority = order.user_priority,
            enemy_priority = order.enemy_priority,
        );

        // ActionsApplied
        let mut user = ActorReport::pending(user_skill, order.user_priority);
        let mut enemy = ActorReport::pending(enemy_skill, order.enemy_priority);
        let mut changes = Vec::new();

        for side in order.sides {
            let (skill, report, target_last) = match side {
                Side::User => (user_skill, &mut user, previous.1),
                Side::Enemy => (enemy_skill, &mut enemy, previous.0),
            };
            let ctx = ActionContext {
                actor: side,
                turn,
                target_last,
                config: self.config,
            };
            self.apply_action(skill, &ctx, report, &mut changes, rng);
        }
        tracing::debug!(turn, phase = TurnPhase::ActionsApplied.as_str());

        // FieldResolved
        apply_field_effects(self.state, turn);
        tracing::debug!(
            turn,
            phase = TurnPhase::FieldResolved.as_str(),
            active = self.state.field.active_effects.len(),
        );

        // Cleaned
        changes.extend(cleanup(self.state, turn));
        tracing::debug!(turn, phase = TurnPhase::Cleaned.as_str());

        let summary = BattleSummary::from_state(self.state);
        let phase = if summary.is_battle_end {
            TurnPhase::BattleEnded
        } else {
            TurnPhase::TurnComplete
        };
        tracing::debug!(
            turn,
            phase = phase.as_str(),
            user_hp = summary.user_hp,
            enemy_hp = summary.enemy_hp,
            winner = ?summary.winner,
        );

        TurnResult {
            turn,
            user,
            enemy,
            action_order: order.sides,
            field: FieldReport { changes },
            summary,
            phase,
        }
    }

    /// Run the cleanup step for the current turn again.
    pub fn cleanup(&mut self) -> Vec<FieldChange> {
        cleanup(self.state, self.state.turn)
    }

    fn apply_action<R: RngSource + ?Sized>(
        &mut self,
        skill: &Skill,
        ctx: &ActionContext<'_>,
        report: &mut ActorReport,
        changes: &mut Vec<FieldChange>,
        rng: &mut R,
    ) {
        let caster = self.state.combatant_mut(ctx.actor);
        if caster.is_defeated() {
            tracing::debug!(
                side = %ctx.actor,
                skill = skill.id(),
                "actor defeated, action skipped"
            );
            report.skipped = true;
            return;
        }

        let before = caster.mp;
        caster.spend_mp(skill.cost());
        report.mp_cost = before - caster.mp;
        caster.last_skill = Some(skill.category());
        caster.skill_cooldowns.insert(skill.id().to_string(), ctx.turn);

        let record = resolve::dispatch(skill, ctx, self.state, rng);
        if let EffectRecord::Field {
            kind,
            power,
            expires_at_turn,
            ..
        } = &record
        {
            changes.push(FieldChange::Placed {
                owner: ctx.actor,
                kind: kind.clone(),
                power: *power,
                expires_at_turn: *expires_at_turn,
            });
        }
        report.effects.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{PcgRng, ScriptedRng};
    use crate::selection::is_sealed;
    use crate::skill::{EffectSpec, EffectTarget, HealResource, SkillCategory};
    use crate::state::{CharacterRecord, StatsRecord, init_battle_state};

    fn record(name: &str, agility: i32, skills: Vec<Skill>) -> CharacterRecord {
        CharacterRecord {
            name: name.into(),
            stats: StatsRecord {
                agility: Some(agility),
                ..StatsRecord::default()
            },
            skills,
        }
    }

    fn battle(user_agility: i32, enemy_agility: i32) -> BattleState {
        let config = BattleConfig::default();
        BattleState::new(
            init_battle_state(&record("User", user_agility, vec![strike(), guard()]), &config),
            init_battle_state(&record("Enemy", enemy_agility, vec![strike(), guard()]), &config),
        )
    }

    fn strike() -> Skill {
        Skill::new("strike", "Strike", SkillCategory::Attack)
            .with_power(70)
            .with_accuracy(100)
    }

    fn guard() -> Skill {
        Skill::new("guard", "Guard", SkillCategory::Defense).with_power(40)
    }

    /// Restores MP the caster already has; changes nothing else.
    fn wait() -> Skill {
        Skill::new("wait", "Wait", SkillCategory::Recovery)
            .with_cost(1)
            .with_effect(EffectSpec::Heal {
                resource: HealResource::Mp,
                target: EffectTarget::Caster,
            })
    }

    fn run<R: RngSource + ?Sized>(
        state: &mut BattleState,
        user: &Skill,
        enemy: &Skill,
        rng: &mut R,
    ) -> TurnResult {
        let config = BattleConfig::default();
        BattleEngine::new(state, &config).execute_turn(user, enemy, rng)
    }

    #[test]
    fn turn_number_advances_and_is_reported() {
        let mut state = battle(50, 50);
        let mut rng = ScriptedRng::constant(0.5);

        let first = run(&mut state, &wait(), &wait(), &mut rng);
        let second = run(&mut state, &wait(), &wait(), &mut rng);

        assert_eq!(first.turn, 1);
        assert_eq!(second.turn, 2);
        assert_eq!(state.turn, 2);
        assert_eq!(first.phase, TurnPhase::TurnComplete);
    }

    #[test]
    fn defense_outpaces_attack_and_buffer_resets_next_turn() {
        let mut state = battle(50, 50);
        let mut rng = ScriptedRng::constant(0.5);

        let result = run(&mut state, &strike(), &guard(), &mut rng);

        assert_eq!(result.action_order, [Side::Enemy, Side::User]);
        assert_eq!(state.enemy.defense_buffer, 60);
        // 105 raw against 50 defense + 60 buffer
        assert_eq!(result.user.effects[0].damage(), 50);

        run(&mut state, &wait(), &wait(), &mut rng);
        assert_eq!(state.enemy.defense_buffer, 0);
    }

    #[test]
    fn lethal_damage_floors_hp_and_ends_the_battle() {
        let mut state = battle(50, 50);
        state.enemy.hp = 3;
        let mut rng = ScriptedRng::constant(0.5);

        let result = run(&mut state, &strike(), &wait(), &mut rng);

        assert_eq!(state.enemy.hp, 0);
        assert!(result.summary.is_battle_end);
        assert_eq!(result.summary.winner, Some(Side::User));
        assert_eq!(result.phase, TurnPhase::BattleEnded);
    }

    #[test]
    fn defeated_actor_is_skipped() {
        let mut state = battle(50, 80);
        state.user.hp = 1;
        let mut rng = ScriptedRng::constant(0.5);

        let result = run(&mut state, &strike(), &strike(), &mut rng);

        assert_eq!(result.action_order, [Side::Enemy, Side::User]);
        assert_eq!(state.user.hp, 0);
        assert!(result.user.skipped);
        assert!(result.user.effects.is_empty());
        assert_eq!(result.user.mp_cost, 0);
        assert_eq!(state.user.mp, state.user.max_mp);
        assert!(state.user.last_skill.is_none());
        assert!(state.user.skill_cooldowns.is_empty());
        assert_eq!(result.summary.winner, Some(Side::Enemy));
    }

    #[test]
    fn insufficient_mp_does_not_block_execution() {
        let mut state = battle(50, 50);
        state.user.mp = 5;
        let expensive = strike().with_cost(40);
        let mut rng = ScriptedRng::constant(0.5);

        let result = run(&mut state, &expensive, &wait(), &mut rng);

        assert_eq!(state.user.mp, 0);
        assert_eq!(result.user.mp_cost, 5);
        assert!(result.user.effects[0].damage() >= 1);
        assert_eq!(state.user.last_skill, Some(SkillCategory::Attack));
        assert_eq!(state.user.skill_cooldowns.get("strike"), Some(&1));
    }

    fn raw_damage(result: &TurnResult) -> f64 {
        match &result.user.effects[0] {
            EffectRecord::Damage {
                breakdown: Some(breakdown),
                ..
            } => breakdown.raw_damage,
            other => panic!("expected a landed hit, got {other:?}"),
        }
    }

    #[test]
    fn field_effect_contributes_until_its_expiry_turn() {
        let mut state = battle(50, 50);
        state.enemy.max_hp = 500;
        state.enemy.hp = 500;
        let gale = Skill::new("gale", "Gale", SkillCategory::Field)
            .with_power(40)
            .with_effect(EffectSpec::Field {
                kind: "gale".into(),
                duration: Some(2),
            });
        let mut rng = ScriptedRng::constant(0.5);

        // turn 1: placed, expires at 3
        let placed = run(&mut state, &gale, &wait(), &mut rng);
        assert!(matches!(
            placed.field.changes.as_slice(),
            [FieldChange::Placed {
                owner: Side::User,
                expires_at_turn: 3,
                ..
            }]
        ));
        assert!(state.user.field_bonus.is_zero());
        assert!(state.enemy.field_penalty.is_zero());

        // turn 2: attack 50 + 6 from the field, random factor 1.0
        let boosted = run(&mut state, &strike(), &wait(), &mut rng);
        assert!((raw_damage(&boosted) - 70.0 * 1.56).abs() < 1e-9);
        assert_eq!(state.field.active_effects.len(), 1);

        // turn 3: expired before anyone acts
        let expired = run(&mut state, &strike(), &wait(), &mut rng);
        assert_eq!(raw_damage(&expired), 105.0);
        assert!(state.user.field_bonus.is_zero());
        assert!(state.enemy.field_penalty.is_zero());
        assert!(state.field.is_empty());
        assert!(matches!(
            expired.field.changes.as_slice(),
            [FieldChange::Expired {
                owner: Side::User,
                ..
            }]
        ));
    }

    #[test]
    fn one_turn_field_never_reaches_a_later_action() {
        let mut state = battle(50, 50);
        state.enemy.max_hp = 500;
        state.enemy.hp = 500;
        let surge = Skill::new("surge", "Surge", SkillCategory::Field)
            .with_power(100)
            .with_effect(EffectSpec::Field {
                kind: "surge".into(),
                duration: Some(1),
            });
        let mut rng = ScriptedRng::constant(0.5);

        run(&mut state, &surge, &wait(), &mut rng);
        let result = run(&mut state, &strike(), &wait(), &mut rng);

        assert_eq!(raw_damage(&result), 105.0);
        assert!(state.field.is_empty());
    }

    #[test]
    fn sealed_skill_returns_on_its_expiry_turn() {
        let mut state = battle(50, 50);
        state.user.skills = vec![strike()];
        let bind = Skill::new("bind", "Bind", SkillCategory::Seal)
            .with_power(50)
            .with_effect(EffectSpec::Seal { duration: Some(2) });
        // jitter, jitter, seal roll 10 < 50, shuffle is a no-op for one skill
        let mut rng = ScriptedRng::new([0.5, 0.5, 0.1]);

        run(&mut state, &wait(), &bind, &mut rng);
        assert_eq!(state.user.sealed_skills[0].expires_at_turn, 3);
        assert!(is_sealed("strike", Side::User, &state)); // upcoming turn 2

        let mut rng = ScriptedRng::constant(0.5);
        run(&mut state, &wait(), &wait(), &mut rng);
        assert!(!is_sealed("strike", Side::User, &state)); // upcoming turn 3

        run(&mut state, &wait(), &wait(), &mut rng);
        assert!(state.user.sealed_skills.is_empty());
    }

    #[test]
    fn repeated_cleanup_changes_nothing() {
        let config = BattleConfig::default();
        let mut state = battle(50, 50);
        let mut rng = PcgRng::seeded(1);
        let haze = Skill::new("haze", "Haze", SkillCategory::Field)
            .with_effect(EffectSpec::Field {
                kind: "haze".into(),
                duration: Some(1),
            });

        let mut engine = BattleEngine::new(&mut state, &config);
        engine.execute_turn(&haze, &wait(), &mut rng);
        let snapshot = engine.state().clone();

        assert!(engine.cleanup().is_empty());
        assert!(engine.cleanup().is_empty());
        assert_eq!(engine.state(), &snapshot);
    }

    #[test]
    fn type_advantage_reads_the_previous_turn() {
        let mut state = battle(50, 50);
        state.enemy.last_skill = Some(SkillCategory::Recovery);
        let mut rng = ScriptedRng::constant(0.5);

        // enemy guards first this turn; the attack still sees its recovery
        let result = run(&mut state, &strike(), &guard(), &mut rng);

        match &result.user.effects[0] {
            EffectRecord::Damage { breakdown, .. } => {
                assert_eq!(breakdown.map(|b| b.type_multiplier), Some(1.4));
            }
            other => panic!("unexpected record {other:?}"),
        }
        assert_eq!(state.enemy.last_skill, Some(SkillCategory::Defense));
    }

    #[test]
    fn same_seed_same_battle() {
        let mut left = battle(55, 45);
        let mut right = left.clone();
        let mut left_rng = PcgRng::seeded(2024);
        let mut right_rng = PcgRng::seeded(2024);

        for _ in 0..5 {
            let a = run(&mut left, &strike(), &guard(), &mut left_rng);
            let b = run(&mut right, &strike(), &guard(), &mut right_rng);
            assert_eq!(a, b);
        }
        assert_eq!(left, right);
    }
}
