/// Stages of a single turn, in execution order.
///
/// Every turn ends in either [`TurnPhase::TurnComplete`] or
/// [`TurnPhase::BattleEnded`]; that terminal phase is reported in the
/// [`TurnResult`](super::TurnResult).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TurnPhase {
    /// Both skills supplied; defense buffers cleared.
    AwaitingActions,
    /// Action order decided.
    OrderResolved,
    /// Both actions executed (or skipped).
    ActionsApplied,
    /// Field modifiers recomputed.
    FieldResolved,
    /// Expired field effects and seals purged.
    Cleaned,
    TurnComplete,
    BattleEnded,
}

impl TurnPhase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AwaitingActions => "awaiting_actions",
            Self::OrderResolved => "order_resolved",
            Self::ActionsApplied => "actions_applied",
            Self::FieldResolved => "field_resolved",
            Self::Cleaned => "cleaned",
            Self::TurnComplete => "turn_complete",
            Self::BattleEnded => "battle_ended",
        }
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::TurnComplete | Self::BattleEnded)
    }
}
