use crate::state::{PokemonStatus, SideReference, State, Weather};

pub fn chlorophyll(state: &State, _side_ref: SideReference) -> f32 {
    if matches!(state.weather.weather_type, Weather::Sun | Weather::HarshSun) {
        2.0
    } else {
        1.0
    }
}

pub fn swift_swim(state: &State, _side_ref: SideReference) -> f32 {
    if matches!(state.weather.weather_type, Weather::Rain | Weather::HeavyRain) {
        2.0
    } else {
        1.0
    }
}

pub fn sand_rush(state: &State, _side_ref: SideReference) -> f32 {
    if state.weather.weather_type == Weather::Sand {
        2.0
    } else {
        1.0
    }
}

/// While statused the owner moves half again as fast. The paralysis speed
/// cut is separately waived by flag.
pub fn quick_feet(state: &State, side_ref: SideReference) -> f32 {
    if state.get_side(side_ref).get_active().status != PokemonStatus::None {
        1.5
    } else {
        1.0
    }
}
