//! Damage modifier chain.
//!
//! Stats resolve first (stat overrides, stages, stage-ignoring abilities),
//! then a single f32 multiplier accumulates every percentage modifier in
//! a fixed order.

use super::context::DamageContext;
use crate::abilities::{ability_hooks, AbilityFlags};
use crate::items::item_hooks;
use crate::moves::{MoveCategory, MoveFlags, MoveId, MOVE_REGISTRY};
use crate::state::{
    apply_stat_boost, Pokemon, PokemonBoostableStat, PokemonSideCondition, PokemonStatus, State,
    Terrain, Weather,
};
use crate::types::PokemonType;

/// Base power after per-move hooks (conditional doublings, weight and
/// health scaling).
pub fn effective_base_power(state: &State, ctx: &DamageContext) -> f32 {
    let mv = ctx.move_id.data();
    let mut base_power = mv.base_power as f32;
    if let Some(hooks) = MOVE_REGISTRY[ctx.move_id as usize].as_ref() {
        if let Some(condition) = hooks.on_base_power_condition {
            if condition(state, ctx) {
                base_power *= hooks.conditional_multiplier;
            }
        }
        if let Some(modify) = hooks.on_modify_base_power {
            base_power = modify(state, ctx, base_power);
        }
    }
    base_power
}

/// Effective (offense, defense) pair for this attack. Handles stat
/// overrides, stat stages, and stage-ignoring abilities.
pub fn compute_effective_stats(state: &State, ctx: &DamageContext) -> (i16, i16) {
    let (attacker_side, defender_side) = state.get_both_sides(ctx.attacking_side);
    let attacker = attacker_side.get_active();
    let defender = defender_side.get_active();

    let (offense_base, offense_stage) = match ctx.move_id {
        // Body Press attacks with the user's Defense
        MoveId::Bodypress => (
            attacker.defense,
            attacker_side.get_boost(PokemonBoostableStat::Defense),
        ),
        // Foul Play attacks with the target's Attack
        MoveId::Foulplay => (
            defender.attack,
            defender_side.get_boost(PokemonBoostableStat::Attack),
        ),
        _ => match ctx.category {
            MoveCategory::Physical => (
                attacker.attack,
                attacker_side.get_boost(PokemonBoostableStat::Attack),
            ),
            _ => (
                attacker.special_attack,
                attacker_side.get_boost(PokemonBoostableStat::SpecialAttack),
            ),
        },
    };

    // Psyshock targets physical Defense with a special attack
    let targets_physical_defense =
        ctx.category == MoveCategory::Physical || ctx.move_id == MoveId::Psyshock;
    let (defense_base, defense_stage) = if targets_physical_defense {
        (
            defender.defense,
            defender_side.get_boost(PokemonBoostableStat::Defense),
        )
    } else {
        (
            defender.special_defense,
            defender_side.get_boost(PokemonBoostableStat::SpecialDefense),
        )
    };

    let offense_stage = if defender.ability.has_flag(AbilityFlags::IGNORES_BOOSTS) {
        0
    } else {
        offense_stage
    };
    let defense_stage = if attacker.ability.has_flag(AbilityFlags::IGNORES_BOOSTS) {
        0
    } else {
        defense_stage
    };

    let offense = apply_stat_boost(offense_base, offense_stage);
    let mut defense = apply_stat_boost(defense_base, defense_stage);

    // Sandstorm raises Rock-type special defense
    if !targets_physical_defense
        && state.weather.weather_type == Weather::Sand
        && defender.has_type(PokemonType::Rock)
    {
        defense = (defense as f32 * 1.5) as i16;
    }

    (offense.max(1), defense.max(1))
}

pub fn stab_multiplier(attacker: &Pokemon, move_type: PokemonType) -> f32 {
    if move_type == PokemonType::Typeless {
        return 1.0;
    }
    let original = attacker.types[0] == move_type || attacker.types[1] == move_type;
    let mut stab = if attacker.terastallized && attacker.tera_type == move_type {
        if original {
            2.0
        } else {
            1.5
        }
    } else if original {
        1.5
    } else {
        1.0
    };
    if stab > 1.0 && attacker.ability == crate::abilities::AbilityId::Adaptability {
        stab = 2.0;
    }
    stab
}

fn weather_multiplier(weather: Weather, move_type: PokemonType) -> f32 {
    match (weather, move_type) {
        (Weather::HarshSun, PokemonType::Water) => 0.0,
        (Weather::HeavyRain, PokemonType::Fire) => 0.0,
        (Weather::Sun | Weather::HarshSun, PokemonType::Fire) => 1.5,
        (Weather::Sun, PokemonType::Water) => 0.5,
        (Weather::Rain | Weather::HeavyRain, PokemonType::Water) => 1.5,
        (Weather::Rain, PokemonType::Fire) => 0.5,
        _ => 1.0,
    }
}

fn terrain_multiplier(state: &State, ctx: &DamageContext) -> f32 {
    let (attacker_side, defender_side) = state.get_both_sides(ctx.attacking_side);
    match state.terrain.terrain_type {
        Terrain::ElectricTerrain
            if ctx.move_type == PokemonType::Electric && attacker_side.active_is_grounded() =>
        {
            1.3
        }
        Terrain::GrassyTerrain if ctx.move_id == MoveId::Earthquake => 0.5,
        Terrain::GrassyTerrain
            if ctx.move_type == PokemonType::Grass && attacker_side.active_is_grounded() =>
        {
            1.3
        }
        Terrain::PsychicTerrain
            if ctx.move_type == PokemonType::Psychic && attacker_side.active_is_grounded() =>
        {
            1.3
        }
        Terrain::MistyTerrain
            if ctx.move_type == PokemonType::Dragon && defender_side.active_is_grounded() =>
        {
            0.5
        }
        _ => 1.0,
    }
}

/// Every multiplier except type effectiveness, in application order:
/// STAB, weather, terrain, burn, screens, abilities, items.
pub fn final_damage_multiplier(state: &State, ctx: &DamageContext) -> f32 {
    let (attacker_side, defender_side) = state.get_both_sides(ctx.attacking_side);
    let attacker = attacker_side.get_active();
    let defender = defender_side.get_active();
    let mv = ctx.move_id.data();

    let mut modifier = stab_multiplier(attacker, ctx.move_type);
    modifier *= weather_multiplier(state.weather.weather_type, ctx.move_type);
    modifier *= terrain_multiplier(state, ctx);

    if attacker.status == PokemonStatus::Burn
        && ctx.category == MoveCategory::Physical
        && !attacker.ability.has_flag(AbilityFlags::IGNORES_BURN_PENALTY)
        && !mv.flags.contains(MoveFlags::IGNORES_BURN)
    {
        modifier *= 0.5;
    }

    if !mv.flags.contains(MoveFlags::BREAKS_SCREENS) {
        let conditions = &defender_side.side_conditions;
        let screened = match ctx.category {
            MoveCategory::Physical => conditions.get(PokemonSideCondition::Reflect) > 0,
            MoveCategory::Special => conditions.get(PokemonSideCondition::LightScreen) > 0,
            MoveCategory::Status => false,
        };
        if screened || conditions.get(PokemonSideCondition::AuroraVeil) > 0 {
            modifier *= 0.5;
        }
    }

    if let Some(hooks) = ability_hooks(attacker.ability) {
        if let Some(offense_mod) = hooks.offense_mod {
            modifier *= offense_mod(state, ctx);
        }
    }
    if let Some(hooks) = ability_hooks(defender.ability) {
        if let Some(defense_mod) = hooks.defense_mod {
            modifier *= defense_mod(state, ctx);
        }
    }
    if let Some(hooks) = item_hooks(attacker.item) {
        if let Some(damage_mod) = hooks.damage_mod {
            modifier *= damage_mod(state, ctx);
        }
    }

    modifier
}
