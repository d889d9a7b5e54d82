use crate::instruction::{ChangeTerrainInstruction, ChangeWeatherInstruction, Instruction};
use crate::state::{SideReference, State, Terrain, Weather};

/// Ability-set weather has no expiry. Setting the weather that is already
/// up produces nothing.
fn set_weather(state: &State, weather: Weather) -> Vec<Instruction> {
    if state.weather.weather_type == weather {
        return Vec::new();
    }
    vec![Instruction::ChangeWeather(ChangeWeatherInstruction {
        new_weather: weather,
        new_weather_turns_remaining: -1,
        previous_weather: state.weather.weather_type,
        previous_weather_turns_remaining: state.weather.turns_remaining,
    })]
}

fn set_terrain(state: &State, terrain: Terrain) -> Vec<Instruction> {
    if state.terrain.terrain_type == terrain {
        return Vec::new();
    }
    vec![Instruction::ChangeTerrain(ChangeTerrainInstruction {
        new_terrain: terrain,
        new_terrain_turns_remaining: -1,
        previous_terrain: state.terrain.terrain_type,
        previous_terrain_turns_remaining: state.terrain.turns_remaining,
    })]
}

pub fn drizzle(state: &State, _side_ref: SideReference) -> Vec<Instruction> {
    set_weather(state, Weather::Rain)
}

pub fn drought(state: &State, _side_ref: SideReference) -> Vec<Instruction> {
    set_weather(state, Weather::Sun)
}

pub fn sand_stream(state: &State, _side_ref: SideReference) -> Vec<Instruction> {
    set_weather(state, Weather::Sand)
}

pub fn snow_warning(state: &State, _side_ref: SideReference) -> Vec<Instruction> {
    set_weather(state, Weather::Snow)
}

pub fn grassy_surge(state: &State, _side_ref: SideReference) -> Vec<Instruction> {
    set_terrain(state, Terrain::GrassyTerrain)
}
