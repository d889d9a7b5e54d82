//! Data-driven full-turn scenarios.
//!
//! Uses `libtest-mimic` to generate individual tests from fixtures,
//! allowing filtering with `cargo test pursuit` etc. Each fixture builds a
//! position, generates the branch set for one pair of choices, and checks
//! branch probabilities, halted flags, and instruction kinds. Exact damage
//! amounts are pinned by the unit tests next to the generator.

use fork_engine::abilities::AbilityId;
use fork_engine::damage::DamageRolls;
use fork_engine::generate_instructions_from_move_pair;
use fork_engine::instruction::Instruction;
use fork_engine::items::ItemId;
use fork_engine::moves::{MoveChoice, MoveId};
use fork_engine::species::{PokemonSpec, SpeciesId};
use fork_engine::state::{
    Pokemon, PokemonIndex, PokemonMoveIndex, PokemonStatus, Side, State, Terrain, TerrainState,
    VolatileStatus, Weather, WeatherState, MAX_TEAM_SIZE,
};
use fork_engine::types::PokemonType;

use libtest_mimic::{Arguments, Failed, Trial};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

const PROBABILITY_TOLERANCE: f32 = 1e-4;

// ============================================================================
// Fixture Data Structures
// ============================================================================

#[derive(Deserialize)]
struct ScenarioFixture {
    #[allow(dead_code)]
    meta: Option<serde_json::Value>,
    cases: Vec<ScenarioCase>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioCase {
    pub id: String,
    #[allow(dead_code)]
    pub name: String,
    #[serde(rename = "sideOne")]
    pub side_one: SideData,
    #[serde(rename = "sideTwo")]
    pub side_two: SideData,
    #[serde(rename = "choiceOne")]
    pub choice_one: ChoiceData,
    #[serde(rename = "choiceTwo")]
    pub choice_two: ChoiceData,
    pub field: Option<FieldData>,
    pub rolls: Option<String>,
    pub expected: ExpectedResult,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SideData {
    pub team: Vec<MemberData>,
    pub conditions: Option<ConditionsData>,
    #[serde(rename = "substituteHealth")]
    pub substitute_health: Option<i16>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MemberData {
    pub species: String,
    #[serde(default)]
    pub moves: Vec<String>,
    pub level: Option<i8>,
    pub item: Option<String>,
    pub ability: Option<String>,
    pub status: Option<String>,
    pub hp: Option<i16>,
    #[serde(rename = "teraType")]
    pub tera_type: Option<String>,
}

/// One side's action. At most one field is set; an empty object passes.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ChoiceData {
    #[serde(rename = "move")]
    pub move_name: Option<String>,
    pub tera: Option<String>,
    pub switch: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct ConditionsData {
    pub stealthrock: Option<i8>,
    pub spikes: Option<i8>,
    pub toxicspikes: Option<i8>,
    pub stickyweb: Option<i8>,
    pub toxiccount: Option<i8>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct FieldData {
    pub weather: Option<String>,
    pub terrain: Option<String>,
    #[serde(rename = "trickRoom")]
    pub trick_room: Option<bool>,
    #[serde(rename = "teraAllowed")]
    pub tera_allowed: Option<bool>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ExpectedResult {
    pub branches: Vec<ExpectedBranch>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ExpectedBranch {
    pub probability: f32,
    #[serde(default)]
    pub halted: bool,
    pub kinds: Vec<String>,
}

// ============================================================================
// Test Helpers
// ============================================================================

fn normalize(name: &str) -> String {
    name.to_lowercase().replace(['-', ' ', '\'', '.'], "")
}

fn build_member(data: &MemberData) -> Result<Pokemon, String> {
    let species_key = normalize(&data.species);
    let mut spec = PokemonSpec::from_str(&species_key)
        .ok_or_else(|| format!("Unknown species: {}", data.species))?;

    if let Some(level) = data.level {
        spec = spec.level(level);
    }

    if let Some(ref ability_str) = data.ability {
        let ability = AbilityId::from_str(&normalize(ability_str))
            .ok_or_else(|| format!("Unknown ability: {}", ability_str))?;
        spec = spec.ability(ability);
    }

    if let Some(ref item_str) = data.item {
        let item = ItemId::from_str(&normalize(item_str))
            .ok_or_else(|| format!("Unknown item: {}", item_str))?;
        spec = spec.item(item);
    }

    if let Some(ref tera_str) = data.tera_type {
        let tera = PokemonType::from_str(&normalize(tera_str))
            .ok_or_else(|| format!("Unknown tera type: {}", tera_str))?;
        spec = spec.tera_type(tera);
    }

    let mut moves = Vec::with_capacity(data.moves.len());
    for move_str in &data.moves {
        let move_id = MoveId::from_str(&normalize(move_str))
            .ok_or_else(|| format!("Unknown move: {}", move_str))?;
        moves.push(move_id);
    }
    spec = spec.moves(&moves);

    let mut pokemon = spec.build();

    if let Some(ref status_str) = data.status {
        pokemon.status = match status_str.as_str() {
            "brn" => PokemonStatus::Burn,
            "par" => PokemonStatus::Paralyze,
            "slp" => PokemonStatus::Sleep,
            "frz" => PokemonStatus::Freeze,
            "psn" => PokemonStatus::Poison,
            "tox" => PokemonStatus::Toxic,
            other => return Err(format!("Unknown status: {}", other)),
        };
    }

    if let Some(hp) = data.hp {
        pokemon.hp = hp.min(pokemon.maxhp);
    }

    Ok(pokemon)
}

fn build_side(data: &SideData, side: &mut Side) -> Result<(), String> {
    if data.team.is_empty() {
        return Err("A side needs at least one team member".into());
    }
    for (slot, member) in data.team.iter().take(MAX_TEAM_SIZE).enumerate() {
        side.pokemon[slot] = build_member(member)?;
    }

    if let Some(ref conditions) = data.conditions {
        side.side_conditions.stealth_rock = conditions.stealthrock.unwrap_or_default();
        side.side_conditions.spikes = conditions.spikes.unwrap_or_default();
        side.side_conditions.toxic_spikes = conditions.toxicspikes.unwrap_or_default();
        side.side_conditions.sticky_web = conditions.stickyweb.unwrap_or_default();
        side.side_conditions.toxic_count = conditions.toxiccount.unwrap_or_default();
    }

    if let Some(substitute_health) = data.substitute_health {
        side.substitute_health = substitute_health;
        side.volatile_statuses.insert(VolatileStatus::SUBSTITUTE);
    }

    Ok(())
}

fn apply_field(field: &Option<FieldData>, state: &mut State) -> Result<(), String> {
    let Some(field) = field else { return Ok(()) };

    if let Some(ref weather_str) = field.weather {
        let weather_type = match weather_str.to_lowercase().as_str() {
            "sun" => Weather::Sun,
            "rain" => Weather::Rain,
            "sand" | "sandstorm" => Weather::Sand,
            "snow" => Weather::Snow,
            other => return Err(format!("Unknown weather: {}", other)),
        };
        state.weather = WeatherState {
            weather_type,
            turns_remaining: -1,
        };
    }

    if let Some(ref terrain_str) = field.terrain {
        let terrain_type = match terrain_str.to_lowercase().as_str() {
            "electric" => Terrain::ElectricTerrain,
            "grassy" => Terrain::GrassyTerrain,
            "misty" => Terrain::MistyTerrain,
            "psychic" => Terrain::PsychicTerrain,
            other => return Err(format!("Unknown terrain: {}", other)),
        };
        state.terrain = TerrainState {
            terrain_type,
            turns_remaining: 5,
        };
    }

    if field.trick_room == Some(true) {
        state.trick_room = true;
    }
    if field.tera_allowed == Some(true) {
        state.tera_allowed = true;
    }

    Ok(())
}

fn move_slot(side: &Side, name: &str) -> Result<PokemonMoveIndex, String> {
    let move_id =
        MoveId::from_str(&normalize(name)).ok_or_else(|| format!("Unknown move: {}", name))?;
    for index in PokemonMoveIndex::ALL {
        if side.get_active().moves[index as usize].id == move_id {
            return Ok(index);
        }
    }
    Err(format!("Active combatant does not know {}", name))
}

fn reserve_slot(side: &Side, name: &str) -> Result<PokemonIndex, String> {
    let species =
        SpeciesId::from_str(&normalize(name)).ok_or_else(|| format!("Unknown species: {}", name))?;
    for index in PokemonIndex::ALL {
        if index != side.active_index && side.pokemon[index as usize].id == species {
            return Ok(index);
        }
    }
    Err(format!("No reserve named {}", name))
}

fn resolve_choice(data: &ChoiceData, side: &Side) -> Result<MoveChoice, String> {
    if let Some(ref name) = data.move_name {
        return move_slot(side, name).map(MoveChoice::Move);
    }
    if let Some(ref name) = data.tera {
        return move_slot(side, name).map(MoveChoice::MoveTera);
    }
    if let Some(ref name) = data.switch {
        return reserve_slot(side, name).map(MoveChoice::Switch);
    }
    Ok(MoveChoice::None)
}

fn resolve_rolls(rolls: &Option<String>) -> Result<DamageRolls, String> {
    match rolls.as_deref() {
        None | Some("average") => Ok(DamageRolls::Average),
        Some("minmaxaverage") => Ok(DamageRolls::MinMaxAverage),
        Some(other) => Err(format!("Unknown roll policy: {}", other)),
    }
}

fn instruction_kind(instruction: &Instruction) -> &'static str {
    match instruction {
        Instruction::Damage(_) => "Damage",
        Instruction::Heal(_) => "Heal",
        Instruction::DamageSubstitute(_) => "DamageSubstitute",
        Instruction::SetSubstituteHealth(_) => "SetSubstituteHealth",
        Instruction::Switch(_) => "Switch",
        Instruction::ApplyVolatileStatus(_) => "ApplyVolatileStatus",
        Instruction::RemoveVolatileStatus(_) => "RemoveVolatileStatus",
        Instruction::ChangeStatus(_) => "ChangeStatus",
        Instruction::Boost(_) => "Boost",
        Instruction::ChangeSideCondition(_) => "ChangeSideCondition",
        Instruction::ChangeWeather(_) => "ChangeWeather",
        Instruction::ChangeTerrain(_) => "ChangeTerrain",
        Instruction::ToggleTrickRoom => "ToggleTrickRoom",
        Instruction::ChangeType(_) => "ChangeType",
        Instruction::ChangeItem(_) => "ChangeItem",
        Instruction::ChangeStats(_) => "ChangeStats",
        Instruction::EnableMove(_) => "EnableMove",
        Instruction::DisableMove(_) => "DisableMove",
        Instruction::DecrementPP(_) => "DecrementPP",
        Instruction::ToggleTerastallized(_) => "ToggleTerastallized",
        Instruction::SetFutureSight(_) => "SetFutureSight",
        Instruction::DecrementFutureSight(_) => "DecrementFutureSight",
        Instruction::SetWish(_) => "SetWish",
        Instruction::DecrementWish(_) => "DecrementWish",
    }
}

/// Branch order is a by-product of generation order, so both sides of the
/// comparison are sorted on the same key before being zipped together.
fn sort_key(kinds: &[String], halted: bool, probability: f32) -> (String, bool, i64) {
    (
        kinds.join(","),
        halted,
        (probability * 1_000_000.0) as i64,
    )
}

// ============================================================================
// Test Runner
// ============================================================================

fn run_scenario_test(case: &ScenarioCase) -> Result<(), String> {
    let mut state = State::default();
    build_side(&case.side_one, &mut state.side_one)
        .map_err(|e| format!("Side one setup failed: {}", e))?;
    build_side(&case.side_two, &mut state.side_two)
        .map_err(|e| format!("Side two setup failed: {}", e))?;
    apply_field(&case.field, &mut state)?;

    let choice_one = resolve_choice(&case.choice_one, &state.side_one)
        .map_err(|e| format!("Side one choice: {}", e))?;
    let choice_two = resolve_choice(&case.choice_two, &state.side_two)
        .map_err(|e| format!("Side two choice: {}", e))?;
    let rolls = resolve_rolls(&case.rolls)?;

    let before = state;
    let branches = generate_instructions_from_move_pair(&mut state, &choice_one, &choice_two, rolls);

    if state != before {
        return Err("Generation left the state mutated".into());
    }

    let total: f32 = branches.iter().map(|branch| branch.probability).sum();
    if (total - 1.0).abs() > PROBABILITY_TOLERANCE {
        return Err(format!("Probabilities sum to {} instead of 1", total));
    }

    for branch in &branches {
        state.apply_instructions(&branch.instruction_list);
        state.reverse_instructions(&branch.instruction_list);
        if state != before {
            return Err(format!(
                "Apply/reverse round trip diverged on branch {:?}",
                branch.instruction_list
            ));
        }
    }

    if branches.len() != case.expected.branches.len() {
        return Err(format!(
            "Expected {} branches, got {}:\n{:#?}",
            case.expected.branches.len(),
            branches.len(),
            branches
        ));
    }

    let mut actual: Vec<(Vec<String>, bool, f32)> = branches
        .iter()
        .map(|branch| {
            let kinds = branch
                .instruction_list
                .iter()
                .map(|instruction| instruction_kind(instruction).to_string())
                .collect();
            (kinds, branch.halted, branch.probability)
        })
        .collect();
    actual.sort_by_key(|(kinds, halted, probability)| sort_key(kinds, *halted, *probability));

    let mut expected: Vec<(Vec<String>, bool, f32)> = case
        .expected
        .branches
        .iter()
        .map(|branch| (branch.kinds.clone(), branch.halted, branch.probability))
        .collect();
    expected.sort_by_key(|(kinds, halted, probability)| sort_key(kinds, *halted, *probability));

    for (i, ((actual_kinds, actual_halted, actual_probability), (kinds, halted, probability))) in
        actual.iter().zip(expected.iter()).enumerate()
    {
        if actual_kinds != kinds {
            return Err(format!(
                "Branch {} kinds mismatch:\n  expected {:?}\n  got      {:?}",
                i, kinds, actual_kinds
            ));
        }
        if actual_halted != halted {
            return Err(format!(
                "Branch {} ({:?}) halted flag: expected {}, got {}",
                i, kinds, halted, actual_halted
            ));
        }
        if (actual_probability - probability).abs() > PROBABILITY_TOLERANCE {
            return Err(format!(
                "Branch {} ({:?}) probability: expected {}, got {}",
                i, kinds, probability, actual_probability
            ));
        }
    }

    Ok(())
}

// ============================================================================
// Harness
// ============================================================================

fn main() {
    let args = Arguments::from_args();

    // Path is relative to the crate directory, where cargo runs test binaries
    let path = "../../tests/fixtures/scenarios/turns.json";
    let file = File::open(path).expect(&format!("Failed to open turns.json at {}", path));
    let reader = BufReader::new(file);
    let fixture: ScenarioFixture =
        serde_json::from_reader(reader).expect("Failed to parse turns.json");

    let tests: Vec<Trial> = fixture
        .cases
        .into_iter()
        .map(|case| {
            let test_name = format!("turn::{}", sanitize_name(&case.id));
            Trial::test(test_name, move || {
                run_scenario_test(&case).map_err(Failed::from)
            })
        })
        .collect();

    libtest_mimic::run(&args, tests).exit();
}

/// Sanitize a fixture id for use as a test identifier
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
