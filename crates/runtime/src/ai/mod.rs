//! Skill selection for computer-driven sides.
//!
//! A [`SkillSelector`] looks at the battle state before a turn and names the
//! skill its side will use. Selectors only read the state; every random draw
//! comes from the session's [`RngSource`] so a seeded session stays
//! reproducible.

mod tactical;

pub use tactical::TacticalSelector;

use battle_core::{BattleState, RngSource, Side, Skill};

/// Chooses the skill a side uses on the upcoming turn.
pub trait SkillSelector {
    /// Returns the skill `side` will use.
    ///
    /// Implementations should only return skills that pass
    /// [`battle_core::check_usage`], falling back to [`Skill::basic_attack`]
    /// when nothing is usable.
    fn select(&mut self, side: Side, state: &BattleState, rng: &mut dyn RngSource) -> Skill;
}

impl<S: SkillSelector + ?Sized> SkillSelector for Box<S> {
    fn select(&mut self, side: Side, state: &BattleState, rng: &mut dyn RngSource) -> Skill {
        (**self).select(side, state, rng)
    }
}
