//! Output records of a resolved turn.

use super::TurnPhase;
use crate::resolve::EffectRecord;
use crate::skill::Skill;
use crate::state::{BattleState, Side};

/// Everything one turn did, for reporting and narration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TurnResult {
    /// Number of the resolved turn.
    pub turn: u32,
    pub user: ActorReport,
    pub enemy: ActorReport,
    /// Sides in the order they acted.
    pub action_order: [Side; 2],
    pub field: FieldReport,
    pub summary: BattleSummary,
    /// Terminal phase: `TurnComplete` or `BattleEnded`.
    pub phase: TurnPhase,
}

impl TurnResult {
    pub fn actor(&self, side: Side) -> &ActorReport {
        match side {
            Side::User => &self.user,
            Side::Enemy => &self.enemy,
        }
    }

    pub fn is_battle_end(&self) -> bool {
        self.summary.is_battle_end
    }
}

/// One side's action for the turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ActorReport {
    pub skill: Skill,
    pub effects: Vec<EffectRecord>,
    /// MP actually charged; 0 when the action was skipped.
    pub mp_cost: u32,
    /// The actor was at 0 HP when its action came up.
    pub skipped: bool,
    pub priority: f64,
}

impl ActorReport {
    pub(crate) fn pending(skill: &Skill, priority: f64) -> Self {
        Self {
            skill: skill.clone(),
            effects: Vec::new(),
            mp_cost: 0,
            skipped: false,
            priority,
        }
    }
}

/// Changes made to the shared field during the turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldReport {
    pub changes: Vec<FieldChange>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "change", rename_all = "snake_case"))]
pub enum FieldChange {
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Placed {
        owner: Side,
        kind: String,
        power: u32,
        expires_at_turn: u32,
    },
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Expired {
        owner: Side,
        kind: String,
    },
}

/// Post-turn snapshot of both sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BattleSummary {
    pub user_hp: u32,
    pub user_mp: u32,
    pub user_max_hp: u32,
    pub user_max_mp: u32,
    pub enemy_hp: u32,
    pub enemy_mp: u32,
    pub enemy_max_hp: u32,
    pub enemy_max_mp: u32,
    pub is_battle_end: bool,
    /// `None` while the battle continues or when both sides fell together.
    pub winner: Option<Side>,
}

impl BattleSummary {
    pub fn from_state(state: &BattleState) -> Self {
        Self {
            user_hp: state.user.hp,
            user_mp: state.user.mp,
            user_max_hp: state.user.max_hp,
            user_max_mp: state.user.max_mp,
            enemy_hp: state.enemy.hp,
            enemy_mp: state.enemy.mp,
            enemy_max_hp: state.enemy.max_hp,
            enemy_max_mp: state.enemy.max_mp,
            is_battle_end: state.is_over(),
            winner: state.winner(),
        }
    }
}
