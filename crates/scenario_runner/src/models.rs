//! Position file formats.
//!
//! A position is either a friendly team spec (species and move names,
//! camelCase keys) or a fully serialized `State`, distinguished by shape.

use anyhow::{Context, Result};
use serde::Deserialize;

use fork_engine::abilities::AbilityId;
use fork_engine::items::ItemId;
use fork_engine::moves::MoveId;
use fork_engine::species::PokemonSpec;
use fork_engine::state::{
    Pokemon, PokemonIndex, PokemonStatus, Side, State, Terrain, TerrainState, VolatileStatus,
    Weather, WeatherState, MAX_TEAM_SIZE,
};
use fork_engine::types::PokemonType;

#[derive(Deserialize)]
#[serde(untagged)]
pub enum PositionFile {
    Spec(BattleSpec),
    Raw(Box<State>),
}

impl PositionFile {
    pub fn into_state(self) -> Result<State> {
        match self {
            PositionFile::Spec(spec) => spec.build(),
            PositionFile::Raw(state) => Ok(*state),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct BattleSpec {
    #[serde(rename = "sideOne")]
    pub side_one: SideSpec,
    #[serde(rename = "sideTwo")]
    pub side_two: SideSpec,
    pub field: Option<FieldSpec>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SideSpec {
    pub team: Vec<MemberSpec>,
    /// Index into `team` of the combatant currently out
    pub active: Option<usize>,
    pub conditions: Option<ConditionsSpec>,
    #[serde(rename = "substituteHealth")]
    pub substitute_health: Option<i16>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MemberSpec {
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

#[derive(Deserialize, Debug, Default, Clone)]
pub struct ConditionsSpec {
    pub stealthrock: Option<i8>,
    pub spikes: Option<i8>,
    pub toxicspikes: Option<i8>,
    pub stickyweb: Option<i8>,
    pub toxiccount: Option<i8>,
    pub reflect: Option<i8>,
    pub lightscreen: Option<i8>,
    pub auroraveil: Option<i8>,
    pub tailwind: Option<i8>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct FieldSpec {
    pub weather: Option<String>,
    pub terrain: Option<String>,
    #[serde(rename = "trickRoom")]
    pub trick_room: Option<bool>,
    #[serde(rename = "teraAllowed")]
    pub tera_allowed: Option<bool>,
}

pub fn normalize(name: &str) -> String {
    name.to_lowercase().replace(['-', ' ', '\'', '.'], "")
}

impl BattleSpec {
    pub fn build(&self) -> Result<State> {
        let mut state = State::default();
        build_side(&self.side_one, &mut state.side_one).context("side one")?;
        build_side(&self.side_two, &mut state.side_two).context("side two")?;

        let Some(ref field) = self.field else {
            return Ok(state);
        };
        if let Some(ref weather_str) = field.weather {
            let weather_type = match weather_str.to_lowercase().as_str() {
                "sun" => Weather::Sun,
                "rain" => Weather::Rain,
                "sand" | "sandstorm" => Weather::Sand,
                "snow" => Weather::Snow,
                other => anyhow::bail!("unknown weather: {}", other),
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
                other => anyhow::bail!("unknown terrain: {}", other),
            };
            state.terrain = TerrainState {
                terrain_type,
                turns_remaining: 5,
            };
        }
        state.trick_room = field.trick_room.unwrap_or_default();
        state.tera_allowed = field.tera_allowed.unwrap_or_default();
        Ok(state)
    }
}

fn build_side(spec: &SideSpec, side: &mut Side) -> Result<()> {
    if spec.team.is_empty() {
        anyhow::bail!("team is empty");
    }
    if spec.team.len() > MAX_TEAM_SIZE {
        anyhow::bail!("team larger than {} members", MAX_TEAM_SIZE);
    }
    for (slot, member) in spec.team.iter().enumerate() {
        side.pokemon[slot] = build_member(member)?;
    }

    if let Some(active) = spec.active {
        if active >= spec.team.len() {
            anyhow::bail!("active index {} out of range", active);
        }
        side.active_index = PokemonIndex::ALL[active];
    }

    if let Some(ref conditions) = spec.conditions {
        let sc = &mut side.side_conditions;
        sc.stealth_rock = conditions.stealthrock.unwrap_or_default();
        sc.spikes = conditions.spikes.unwrap_or_default();
        sc.toxic_spikes = conditions.toxicspikes.unwrap_or_default();
        sc.sticky_web = conditions.stickyweb.unwrap_or_default();
        sc.toxic_count = conditions.toxiccount.unwrap_or_default();
        sc.reflect = conditions.reflect.unwrap_or_default();
        sc.light_screen = conditions.lightscreen.unwrap_or_default();
        sc.aurora_veil = conditions.auroraveil.unwrap_or_default();
        sc.tailwind = conditions.tailwind.unwrap_or_default();
    }

    if let Some(substitute_health) = spec.substitute_health {
        side.substitute_health = substitute_health;
        side.volatile_statuses.insert(VolatileStatus::SUBSTITUTE);
    }

    Ok(())
}

fn build_member(spec: &MemberSpec) -> Result<Pokemon> {
    let mut builder = PokemonSpec::from_str(&normalize(&spec.species))
        .ok_or_else(|| anyhow::anyhow!("unknown species: {}", spec.species))?;

    if let Some(level) = spec.level {
        builder = builder.level(level);
    }
    if let Some(ref ability_str) = spec.ability {
        let ability = AbilityId::from_str(&normalize(ability_str))
            .ok_or_else(|| anyhow::anyhow!("unknown ability: {}", ability_str))?;
        builder = builder.ability(ability);
    }
    if let Some(ref item_str) = spec.item {
        let item = ItemId::from_str(&normalize(item_str))
            .ok_or_else(|| anyhow::anyhow!("unknown item: {}", item_str))?;
        builder = builder.item(item);
    }
    if let Some(ref tera_str) = spec.tera_type {
        let tera = PokemonType::from_str(&normalize(tera_str))
            .ok_or_else(|| anyhow::anyhow!("unknown tera type: {}", tera_str))?;
        builder = builder.tera_type(tera);
    }

    let mut moves = Vec::with_capacity(spec.moves.len());
    for move_str in &spec.moves {
        let move_id = MoveId::from_str(&normalize(move_str))
            .ok_or_else(|| anyhow::anyhow!("unknown move: {}", move_str))?;
        moves.push(move_id);
    }
    let mut pokemon = builder.moves(&moves).build();

    if let Some(ref status_str) = spec.status {
        pokemon.status = parse_status(status_str)?;
    }
    if let Some(hp) = spec.hp {
        pokemon.hp = hp.clamp(0, pokemon.maxhp);
    }

    Ok(pokemon)
}

fn parse_status(status: &str) -> Result<PokemonStatus> {
    match status {
        "brn" => Ok(PokemonStatus::Burn),
        "par" => Ok(PokemonStatus::Paralyze),
        "slp" => Ok(PokemonStatus::Sleep),
        "frz" => Ok(PokemonStatus::Freeze),
        "psn" => Ok(PokemonStatus::Poison),
        "tox" => Ok(PokemonStatus::Toxic),
        other => anyhow::bail!("unknown status: {}", other),
    }
}
