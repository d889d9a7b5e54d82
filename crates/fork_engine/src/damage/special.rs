use super::context::DamageContext;
use crate::moves::MoveId;
use crate::state::State;

/// Moves whose damage is a fixed amount rather than formula-driven.
/// Type immunity is checked by the caller before this applies.
pub fn fixed_damage(state: &State, ctx: &DamageContext) -> Option<f32> {
    match ctx.move_id {
        MoveId::Seismictoss | MoveId::Nightshade => {
            let attacker = state.get_side(ctx.attacking_side).get_active();
            Some(attacker.level as f32)
        }
        MoveId::Superfang => {
            let defender = state
                .get_side(ctx.attacking_side.get_other_side())
                .get_active();
            Some(((defender.hp / 2) as f32).max(1.0))
        }
        _ => None,
    }
}
