//! Action ordering.

use crate::config::PriorityParams;
use crate::rng::RngSource;
use crate::skill::{Skill, SkillCategory};
use crate::state::{BattleState, Side, Stat};

/// Resolved order for one turn plus the priorities that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActionOrder {
    pub sides: [Side; 2],
    pub user_priority: f64,
    pub enemy_priority: f64,
}

impl ActionOrder {
    pub fn priority(&self, side: Side) -> f64 {
        match side {
            Side::User => self.user_priority,
            Side::Enemy => self.enemy_priority,
        }
    }
}

/// `priority = agility + bias[category] + jitter`
pub fn calculate_priority(
    category: SkillCategory,
    agility: i32,
    jitter: f64,
    params: &PriorityParams,
) -> f64 {
    f64::from(agility) + f64::from(params.bias(category)) + jitter
}

/// Higher priority acts first; an exact tie goes to the user.
pub fn order_by_priority(user_priority: f64, enemy_priority: f64) -> [Side; 2] {
    if user_priority >= enemy_priority {
        [Side::User, Side::Enemy]
    } else {
        [Side::Enemy, Side::User]
    }
}

/// Draw jitter for the user, then the enemy, and order the two actions.
pub fn schedule<R: RngSource + ?Sized>(
    user_skill: &Skill,
    enemy_skill: &Skill,
    state: &BattleState,
    params: &PriorityParams,
    rng: &mut R,
) -> ActionOrder {
    let user_priority = calculate_priority(
        user_skill.category(),
        state.user.effective_stat(Stat::Agility),
        rng.range_f64(0.0, params.jitter),
        params,
    );
    let enemy_priority = calculate_priority(
        enemy_skill.category(),
        state.enemy.effective_stat(Stat::Agility),
        rng.range_f64(0.0, params.jitter),
        params,
    );

    ActionOrder {
        sides: order_by_priority(user_priority, enemy_priority),
        user_priority,
        enemy_priority,
    }
}
