use crate::instruction::{BoostInstruction, DamageInstruction, HealInstruction, Instruction};
use crate::state::{PokemonBoostableStat, SideReference, State, Weather};

pub fn speed_boost(state: &State, side_ref: SideReference) -> Vec<Instruction> {
    let raise = state
        .get_side(side_ref)
        .clamped_boost_delta(PokemonBoostableStat::Speed, 1);
    if raise == 0 {
        return Vec::new();
    }
    vec![Instruction::Boost(BoostInstruction {
        side_ref,
        stat: PokemonBoostableStat::Speed,
        amount: raise,
    })]
}

pub fn rain_dish(state: &State, side_ref: SideReference) -> Vec<Instruction> {
    if !matches!(state.weather.weather_type, Weather::Rain | Weather::HeavyRain) {
        return Vec::new();
    }
    let owner = state.get_side(side_ref).get_active();
    let heal = (owner.maxhp / 16).min(owner.maxhp - owner.hp);
    if heal == 0 {
        return Vec::new();
    }
    vec![Instruction::Heal(HealInstruction {
        side_ref,
        heal_amount: heal,
    })]
}

/// The flip side of the sun-powered offense boost.
pub fn solar_power(state: &State, side_ref: SideReference) -> Vec<Instruction> {
    if !matches!(state.weather.weather_type, Weather::Sun | Weather::HarshSun) {
        return Vec::new();
    }
    let owner = state.get_side(side_ref).get_active();
    vec![Instruction::Damage(DamageInstruction {
        side_ref,
        damage_amount: (owner.maxhp / 8).min(owner.hp),
    })]
}
