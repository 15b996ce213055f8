//! Situational skill picking.

use battle_core::{
    BattleState, CombatantState, RngSource, Side, Skill, SkillCategory, available_skills,
};

use super::SkillSelector;

/// Rule-based selector reacting to resources and the opponent's condition.
///
/// # Decision Process
///
/// Rules are tried in order over the usable skills; a rule that does not fire
/// falls through to the next one.
///
/// 1. **Recover**: own HP below `low_hp_percent` → first Recovery skill, with
///    probability `recover_chance`
/// 2. **Burst**: own MP above `high_mp_percent` → random Attack skill with
///    power above `strong_power`, with probability `burst_chance`
/// 3. **Set up**: own HP above `healthy_percent` during the first
///    `opening_turns` turns → first Field skill, with probability
///    `setup_chance`
/// 4. **Finish**: opponent HP below `finisher_percent` → random Attack skill
/// 5. **Default**: uniform pick over everything usable
///
/// With nothing usable the side falls back to [`Skill::basic_attack`].
#[derive(Clone, Debug, PartialEq)]
pub struct TacticalSelector {
    pub low_hp_percent: f64,
    pub recover_chance: f64,
    pub high_mp_percent: f64,
    pub strong_power: u32,
    pub burst_chance: f64,
    pub healthy_percent: f64,
    pub opening_turns: u32,
    pub setup_chance: f64,
    pub finisher_percent: f64,
}

impl Default for TacticalSelector {
    fn default() -> Self {
        Self {
            low_hp_percent: 30.0,
            recover_chance: 0.7,
            high_mp_percent: 60.0,
            strong_power: 60,
            burst_chance: 0.5,
            healthy_percent: 70.0,
            opening_turns: 3,
            setup_chance: 0.4,
            finisher_percent: 30.0,
        }
    }
}

impl TacticalSelector {
    /// Applies the decision rules to an explicit pool.
    ///
    /// Returns `None` only when `pool` is empty.
    pub fn pick<'s>(
        &self,
        pool: &[&'s Skill],
        me: &CombatantState,
        opponent: &CombatantState,
        upcoming_turn: u32,
        rng: &mut dyn RngSource,
    ) -> Option<&'s Skill> {
        if pool.is_empty() {
            return None;
        }

        let hp = me.hp_percent();
        let mp = me.mp_percent();

        tracing::debug!(
            "TacticalSelector: name={}, hp={:.1}%, mp={:.1}%, opponent_hp={:.1}%, turn={}, pool={}",
            me.name,
            hp,
            mp,
            opponent.hp_percent(),
            upcoming_turn,
            pool.len()
        );

        // ====================================================================
        // Rule 1: Recover
        // ====================================================================

        if hp < self.low_hp_percent
            && let Some(heal) = first_of(pool, SkillCategory::Recovery)
            && rng.next_unit() < self.recover_chance
        {
            tracing::debug!("  → {} (recover)", heal.id());
            return Some(heal);
        }

        // ====================================================================
        // Rule 2: Burst
        // ====================================================================

        if mp > self.high_mp_percent {
            let strong: Vec<&Skill> = pool
                .iter()
                .copied()
                .filter(|skill| {
                    skill.category() == SkillCategory::Attack && skill.power() > self.strong_power
                })
                .collect();

            if !strong.is_empty() && rng.next_unit() < self.burst_chance {
                let skill = strong[rng.below(strong.len())];
                tracing::debug!("  → {} (burst)", skill.id());
                return Some(skill);
            }
        }

        // ====================================================================
        // Rule 3: Set up
        // ====================================================================

        if hp > self.healthy_percent
            && upcoming_turn <= self.opening_turns
            && let Some(field) = first_of(pool, SkillCategory::Field)
            && rng.next_unit() < self.setup_chance
        {
            tracing::debug!("  → {} (set up)", field.id());
            return Some(field);
        }

        // ====================================================================
        // Rule 4: Finish
        // ====================================================================

        if opponent.hp_percent() < self.finisher_percent {
            let attacks: Vec<&Skill> = pool
                .iter()
                .copied()
                .filter(|skill| skill.category() == SkillCategory::Attack)
                .collect();

            if !attacks.is_empty() {
                let skill = attacks[rng.below(attacks.len())];
                tracing::debug!("  → {} (finish)", skill.id());
                return Some(skill);
            }
        }

        let skill = pool[rng.below(pool.len())];
        tracing::debug!("  → {} (default)", skill.id());
        Some(skill)
    }
}

impl SkillSelector for TacticalSelector {
    fn select(&mut self, side: Side, state: &BattleState, rng: &mut dyn RngSource) -> Skill {
        let pool = available_skills(side, state);
        self.pick(
            &pool,
            state.combatant(side),
            state.combatant(side.opponent()),
            state.upcoming_turn(),
            rng,
        )
        .cloned()
        .unwrap_or_else(|| {
            tracing::debug!("TacticalSelector: nothing usable, falling back to basic attack");
            Skill::basic_attack()
        })
    }
}

fn first_of<'s>(pool: &[&'s Skill], category: SkillCategory) -> Option<&'s Skill> {
    pool.iter().copied().find(|skill| skill.category() == category)
}
