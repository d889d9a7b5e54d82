use crate::damage::DamageContext;
use crate::moves::MoveCategory;
use crate::state::{PokemonStatus, State, Weather};
use crate::types::PokemonType;

// ============================================================================
// Offense modifiers (owner is the attacker)
// ============================================================================

pub fn blaze(state: &State, ctx: &DamageContext) -> f32 {
    let attacker = state.get_side(ctx.attacking_side).get_active();
    if ctx.move_type == PokemonType::Fire && attacker.hp * 3 <= attacker.maxhp {
        1.5
    } else {
        1.0
    }
}

pub fn solar_power(state: &State, ctx: &DamageContext) -> f32 {
    let in_sun = matches!(state.weather.weather_type, Weather::Sun | Weather::HarshSun);
    if in_sun && ctx.category == MoveCategory::Special {
        1.5
    } else {
        1.0
    }
}

pub fn guts(state: &State, ctx: &DamageContext) -> f32 {
    let attacker = state.get_side(ctx.attacking_side).get_active();
    if attacker.status != PokemonStatus::None && ctx.category == MoveCategory::Physical {
        1.5
    } else {
        1.0
    }
}

pub fn huge_power(_state: &State, ctx: &DamageContext) -> f32 {
    if ctx.category == MoveCategory::Physical {
        2.0
    } else {
        1.0
    }
}

/// Boosts Dark moves fired by anyone on the field, so it registers as both
/// an offense and a defense modifier.
pub fn dark_aura(_state: &State, ctx: &DamageContext) -> f32 {
    if ctx.move_type == PokemonType::Dark {
        4.0 / 3.0
    } else {
        1.0
    }
}

// ============================================================================
// Defense modifiers (owner is the defender)
// ============================================================================

pub fn thick_fat(_state: &State, ctx: &DamageContext) -> f32 {
    if matches!(ctx.move_type, PokemonType::Fire | PokemonType::Ice) {
        0.5
    } else {
        1.0
    }
}

pub fn multiscale(state: &State, ctx: &DamageContext) -> f32 {
    let defender = state.get_side(ctx.attacking_side.get_other_side()).get_active();
    if defender.hp == defender.maxhp {
        0.5
    } else {
        1.0
    }
}
