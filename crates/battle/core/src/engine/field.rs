//! Standing field modifiers and end-of-turn cleanup.

use super::FieldChange;
use crate::state::{BattleState, Side};

/// Rebuild both sides' field modifiers from the effects active at `turn`.
///
/// Runs at the start of a turn, before ordering, and again once the turn's
/// actions are applied so newly placed effects show up in the state.
/// Modifiers are zeroed first and multiple effects stack additively.
pub fn apply_field_effects(state: &mut BattleState, turn: u32) {
    let BattleState {
        user, enemy, field, ..
    } = state;

    user.clear_field_modifiers();
    enemy.clear_field_modifiers();

    for effect in field.active_at(turn) {
        let (owner, opponent) = match effect.owner {
            Side::User => (&mut *user, &mut *enemy),
            Side::Enemy => (&mut *enemy, &mut *user),
        };
        owner.field_bonus.add(&effect.bonus_to_owner);
        opponent.field_penalty.add(&effect.penalty_to_enemy);
    }
}

/// Purge field effects and seals whose expiry is `<= turn`, then zero both
/// sides' field modifiers.
///
/// Between turns no modifier is in place; the next turn rebuilds them from
/// the surviving effects. Returns one [`FieldChange::Expired`] per removed
/// field effect. Running it again for the same turn removes nothing.
pub fn cleanup(state: &mut BattleState, turn: u32) -> Vec<FieldChange> {
    let expired: Vec<FieldChange> = state
        .field
        .active_effects
        .iter()
        .filter(|effect| !effect.is_active(turn))
        .map(|effect| FieldChange::Expired {
            owner: effect.owner,
            kind: effect.kind.clone(),
        })
        .collect();

    state.field.purge_expired(turn);
    state.user.clear_field_modifiers();
    state.enemy.clear_field_modifiers();
    let seals = state.user.purge_expired_seals(turn) + state.enemy.purge_expired_seals(turn);

    if !expired.is_empty() || seals > 0 {
        tracing::debug!(turn, fields = expired.len(), seals, "expired effects purged");
    }

    expired
}
