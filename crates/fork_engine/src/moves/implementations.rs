//! Move hook implementations.
//!
//! Condition checks and variable-power formulas for moves registered in
//! `MOVE_REGISTRY`.

use crate::damage::DamageContext;
use crate::items::ItemId;
use crate::state::{PokemonStatus, State};

// ============================================================================
// Knock Off: 1.5x if target has a removable item
// ============================================================================

pub fn knockoff_condition(state: &State, ctx: &DamageContext) -> bool {
    let defender = state.get_side(ctx.attacking_side.get_other_side()).get_active();
    defender.item != ItemId::None
}

// ============================================================================
// Venoshock: 2x if target is poisoned
// ============================================================================

pub fn venoshock_condition(state: &State, ctx: &DamageContext) -> bool {
    let defender = state.get_side(ctx.attacking_side.get_other_side()).get_active();
    matches!(defender.status, PokemonStatus::Poison | PokemonStatus::Toxic)
}

// ============================================================================
// Hex: 2x if target has any major status condition
// ============================================================================

pub fn hex_condition(state: &State, ctx: &DamageContext) -> bool {
    let defender = state.get_side(ctx.attacking_side.get_other_side()).get_active();
    defender.status != PokemonStatus::None
}

// ============================================================================
// Brine: 2x if target is at or below 50% HP
// ============================================================================

pub fn brine_condition(state: &State, ctx: &DamageContext) -> bool {
    let defender = state.get_side(ctx.attacking_side.get_other_side()).get_active();
    defender.hp * 2 <= defender.maxhp
}

// ============================================================================
// Facade: 2x if the user has a major status condition
// ============================================================================

pub fn facade_condition(state: &State, ctx: &DamageContext) -> bool {
    let attacker = state.get_side(ctx.attacking_side).get_active();
    attacker.status != PokemonStatus::None
}

// ============================================================================
// Bolt Beak: 2x if the user acts before the target
// ============================================================================

pub fn boltbeak_condition(_state: &State, ctx: &DamageContext) -> bool {
    ctx.first_move
}

// ============================================================================
// Acrobatics: 2x if the user holds no item
// ============================================================================

pub fn acrobatics_condition(state: &State, ctx: &DamageContext) -> bool {
    state.get_side(ctx.attacking_side).get_active().item == ItemId::None
}

// ============================================================================
// Pursuit: 2x when the target is switching out this turn
// ============================================================================

pub fn pursuit_condition(_state: &State, ctx: &DamageContext) -> bool {
    ctx.defender_switching
}

// ============================================================================
// Grass Knot / Low Kick: power from target weight
// ============================================================================

pub fn grass_knot_power(state: &State, ctx: &DamageContext, _bp: f32) -> f32 {
    let defender = state.get_side(ctx.attacking_side.get_other_side()).get_active();
    let weight = defender.id.data().weight_kg;
    if weight >= 200.0 {
        120.0
    } else if weight >= 100.0 {
        100.0
    } else if weight >= 50.0 {
        80.0
    } else if weight >= 25.0 {
        60.0
    } else if weight >= 10.0 {
        40.0
    } else {
        20.0
    }
}

// ============================================================================
// Heavy Slam: power from user/target weight ratio
// ============================================================================

pub fn heavy_slam_power(state: &State, ctx: &DamageContext, _bp: f32) -> f32 {
    let attacker = state.get_side(ctx.attacking_side).get_active();
    let defender = state.get_side(ctx.attacking_side.get_other_side()).get_active();
    let ratio = defender.id.data().weight_kg / attacker.id.data().weight_kg;
    if ratio > 0.5 {
        40.0
    } else if ratio > 0.3335 {
        60.0
    } else if ratio > 0.2501 {
        80.0
    } else if ratio > 0.2001 {
        100.0
    } else {
        120.0
    }
}

// ============================================================================
// Eruption: power scales with the user's remaining HP
// ============================================================================

pub fn eruption_power(state: &State, ctx: &DamageContext, bp: f32) -> f32 {
    let attacker = state.get_side(ctx.attacking_side).get_active();
    (bp * attacker.hp as f32 / attacker.maxhp as f32).max(1.0)
}
