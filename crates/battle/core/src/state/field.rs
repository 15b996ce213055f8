//! Shared battlefield state.
//!
//! Field effects are standing, duration-bound stat modifiers. They belong to
//! the shared [`Field`], not to either combatant; the [`Side`] that cast one is
//! recorded as its owner.
//!
//! # Turn-based Duration
//!
//! Effects store `expires_at_turn`. An effect placed on turn `P` shows up in
//! the state once `P`'s actions are applied and shapes the actions of turns
//! `P + 1 ..= expires_at_turn - 1`. It is purged in the cleanup of turn
//! `expires_at_turn`, and a one-turn effect never reaches a later action.

use super::{Side, StatBlock};

/// A standing stat modifier owned by one side.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldEffect {
    pub owner: Side,
    /// Free-form field kind declared by the casting skill (e.g. `"frost"`).
    pub kind: String,
    pub power: u32,
    pub bonus_to_owner: StatBlock,
    pub penalty_to_enemy: StatBlock,
    pub expires_at_turn: u32,
}

impl FieldEffect {
    pub fn is_active(&self, turn: u32) -> bool {
        turn < self.expires_at_turn
    }
}

/// Effects currently placed on the battlefield.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    pub active_effects: Vec<FieldEffect>,
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(&mut self, effect: FieldEffect) {
        self.active_effects.push(effect);
    }

    /// Effects still contributing at `turn`.
    pub fn active_at(&self, turn: u32) -> impl Iterator<Item = &FieldEffect> + '_ {
        self.active_effects
            .iter()
            .filter(move |effect| effect.is_active(turn))
    }

    /// Whether an effect of `kind` is still contributing at `turn`.
    pub fn has_kind(&self, kind: &str, turn: u32) -> bool {
        self.active_at(turn).any(|effect| effect.kind == kind)
    }

    /// Drop effects whose expiry has been reached. Returns how many were removed.
    pub fn purge_expired(&mut self, turn: u32) -> usize {
        let before = self.active_effects.len();
        self.active_effects.retain(|effect| effect.is_active(turn));
        before - self.active_effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active_effects.is_empty()
    }
}
