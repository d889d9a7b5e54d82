use super::context::DamageContext;
use crate::state::State;
use crate::types::{type_effectiveness, PokemonType};

/// Type effectiveness of the attack against the current defender, including
/// groundedness handling for Ground moves.
pub fn move_effectiveness(state: &State, ctx: &DamageContext) -> f32 {
    let defender_side = state.get_side(ctx.attacking_side.get_other_side());
    let defender = defender_side.get_active();

    if ctx.move_type == PokemonType::Ground {
        if !defender_side.active_is_grounded() {
            return 0.0;
        }
        // A pinned Flying type is hit through its Flying component
        let mut types = defender.current_types();
        for t in types.iter_mut() {
            if *t == PokemonType::Flying {
                *t = PokemonType::Typeless;
            }
        }
        return type_effectiveness(ctx.move_type, &types);
    }

    type_effectiveness(ctx.move_type, &defender.current_types())
}
