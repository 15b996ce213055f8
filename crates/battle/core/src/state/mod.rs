//! Battle state owned by the calling session between turns.
//!
//! [`BattleState`] is the single mutable input of the engine: both
//! combatants, the shared [`Field`], and the number of the last resolved
//! turn. The engine borrows it for the duration of one turn and retains
//! nothing afterwards.

mod combatant;
mod field;

pub use combatant::{
    CharacterRecord, CombatantState, SealedSkill, Stat, StatBlock, StatsRecord, init_battle_state,
};
pub use field::{Field, FieldEffect};

/// One of the two battle participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Side {
    User,
    Enemy,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::User => Self::Enemy,
            Self::Enemy => Self::User,
        }
    }
}

/// Complete state of one battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    pub user: CombatantState,
    pub enemy: CombatantState,
    pub field: Field,
    /// Number of the last resolved turn; 0 before the first turn.
    pub turn: u32,
}

impl BattleState {
    pub fn new(user: CombatantState, enemy: CombatantState) -> Self {
        Self {
            user,
            enemy,
            field: Field::new(),
            turn: 0,
        }
    }

    /// Number of the turn the next `execute_turn` call will resolve.
    pub fn upcoming_turn(&self) -> u32 {
        self.turn + 1
    }

    pub fn combatant(&self, side: Side) -> &CombatantState {
        match side {
            Side::User => &self.user,
            Side::Enemy => &self.enemy,
        }
    }

    pub fn combatant_mut(&mut self, side: Side) -> &mut CombatantState {
        match side {
            Side::User => &mut self.user,
            Side::Enemy => &mut self.enemy,
        }
    }

    /// Split borrow: `(side, side.opponent())`.
    pub fn pair_mut(&mut self, side: Side) -> (&mut CombatantState, &mut CombatantState) {
        match side {
            Side::User => (&mut self.user, &mut self.enemy),
            Side::Enemy => (&mut self.enemy, &mut self.user),
        }
    }

    pub fn is_over(&self) -> bool {
        self.user.is_defeated() || self.enemy.is_defeated()
    }

    /// The side still standing once the battle is over.
    ///
    /// `None` while the battle continues or when both sides fell together.
    pub fn winner(&self) -> Option<Side> {
        match (self.user.is_defeated(), self.enemy.is_defeated()) {
            (false, true) => Some(Side::User),
            (true, false) => Some(Side::Enemy),
            _ => None,
        }
    }
}
