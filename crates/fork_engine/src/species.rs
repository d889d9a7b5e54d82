//! Species data and combatant construction.
//!
//! The species table is the closed, pre-validated data store for base
//! stats, typing and weight. `PokemonSpec` is the builder used by tests
//! and the scenario runner to assemble battle-ready combatants.

use serde::{Deserialize, Serialize};

use crate::abilities::AbilityId;
use crate::items::ItemId;
use crate::moves::MoveId;
use crate::state::{MoveSlot, Pokemon, MAX_MOVES};
use crate::types::PokemonType;

/// Default level for constructed combatants
pub const DEFAULT_LEVEL: i8 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SpeciesId {
    Aromatisse,
    Azumarill,
    Blissey,
    Breloom,
    Bronzong,
    Clefable,
    Dragonite,
    Dugtrio,
    Excadrill,
    Ferrothorn,
    Garchomp,
    Gengar,
    Gothitelle,
    Gyarados,
    Heatran,
    Hitmonlee,
    Magnezone,
    Mew,
    Pelipper,
    Pikachu,
    Raichu,
    Rillaboom,
    Serperior,
    Skarmory,
    Slurpuff,
    Starmie,
    Talonflame,
    Torkoal,
    Toxapex,
    Tyranitar,
    Venusaur,
    Victini,
    Whimsicott,
    Xatu,
    Yveltal,
}

impl SpeciesId {
    pub const COUNT: usize = 35;

    pub fn from_str(s: &str) -> Option<Self> {
        SPECIES_NAMES.get(&s.to_lowercase()).copied()
    }

    #[inline]
    pub fn data(&self) -> &'static SpeciesData {
        &SPECIES_TABLE[*self as usize]
    }
}

/// Fixed per-species properties.
#[derive(Debug)]
pub struct SpeciesData {
    pub name: &'static str,
    /// Base stats [HP, Atk, Def, SpA, SpD, Spe]
    pub base_stats: [i16; 6],
    pub types: [PokemonType; 2],
    /// Weight in kilograms (weight-ratio move power tables)
    pub weight_kg: f32,
    /// Default ability when the builder does not override it
    pub ability: AbilityId,
}

use crate::types::PokemonType as T;

#[rustfmt::skip]
static SPECIES_TABLE: [SpeciesData; SpeciesId::COUNT] = [
    SpeciesData { name: "aromatisse", base_stats: [101,  72,  72,  99,  89,  29], types: [T::Fairy,    T::Fairy],    weight_kg: 15.5,  ability: AbilityId::None },
    SpeciesData { name: "azumarill",  base_stats: [100,  50,  80,  60,  80,  50], types: [T::Water,    T::Fairy],    weight_kg: 28.5,  ability: AbilityId::Hugepower },
    SpeciesData { name: "blissey",    base_stats: [255,  10,  10,  75, 135,  55], types: [T::Normal,   T::Normal],   weight_kg: 46.8,  ability: AbilityId::Naturalcure },
    SpeciesData { name: "breloom",    base_stats: [ 60, 130,  80,  60,  60,  70], types: [T::Grass,    T::Fighting], weight_kg: 39.2,  ability: AbilityId::Effectspore },
    SpeciesData { name: "bronzong",   base_stats: [ 67,  89, 116,  79, 116,  33], types: [T::Steel,    T::Psychic],  weight_kg: 187.0, ability: AbilityId::Levitate },
    SpeciesData { name: "clefable",   base_stats: [ 95,  70,  73,  95,  90,  60], types: [T::Fairy,    T::Fairy],    weight_kg: 40.0,  ability: AbilityId::Magicguard },
    SpeciesData { name: "dragonite",  base_stats: [ 91, 134,  95, 100, 100,  80], types: [T::Dragon,   T::Flying],   weight_kg: 210.0, ability: AbilityId::Multiscale },
    SpeciesData { name: "dugtrio",    base_stats: [ 35, 100,  50,  50,  70, 120], types: [T::Ground,   T::Ground],   weight_kg: 33.3,  ability: AbilityId::Arenatrap },
    SpeciesData { name: "excadrill",  base_stats: [110, 135,  60,  50,  65,  88], types: [T::Ground,   T::Steel],    weight_kg: 40.4,  ability: AbilityId::Sandrush },
    SpeciesData { name: "ferrothorn", base_stats: [ 74,  94, 131,  54, 116,  20], types: [T::Grass,    T::Steel],    weight_kg: 110.0, ability: AbilityId::Ironbarbs },
    SpeciesData { name: "garchomp",   base_stats: [108, 130,  95,  80,  85, 102], types: [T::Dragon,   T::Ground],   weight_kg: 95.0,  ability: AbilityId::Roughskin },
    SpeciesData { name: "gengar",     base_stats: [ 60,  65,  60, 130,  75, 110], types: [T::Ghost,    T::Poison],   weight_kg: 40.5,  ability: AbilityId::Levitate },
    SpeciesData { name: "gothitelle", base_stats: [ 70,  55,  95,  95, 110,  65], types: [T::Psychic,  T::Psychic],  weight_kg: 44.0,  ability: AbilityId::Shadowtag },
    SpeciesData { name: "gyarados",   base_stats: [ 95, 125,  79,  60, 100,  81], types: [T::Water,    T::Flying],   weight_kg: 235.0, ability: AbilityId::Intimidate },
    SpeciesData { name: "heatran",    base_stats: [ 91,  90, 106, 130, 106,  77], types: [T::Fire,     T::Steel],    weight_kg: 430.0, ability: AbilityId::Flashfire },
    SpeciesData { name: "hitmonlee",  base_stats: [ 50, 120,  53,  35, 110,  87], types: [T::Fighting, T::Fighting], weight_kg: 49.8,  ability: AbilityId::Limber },
    SpeciesData { name: "magnezone",  base_stats: [ 70,  70, 115, 130,  90,  60], types: [T::Electric, T::Steel],    weight_kg: 180.0, ability: AbilityId::Magnetpull },
    SpeciesData { name: "mew",        base_stats: [100, 100, 100, 100, 100, 100], types: [T::Psychic,  T::Psychic],  weight_kg: 4.0,   ability: AbilityId::None },
    SpeciesData { name: "pelipper",   base_stats: [ 60,  50, 100,  95,  70,  65], types: [T::Water,    T::Flying],   weight_kg: 28.0,  ability: AbilityId::Drizzle },
    SpeciesData { name: "pikachu",    base_stats: [ 35,  55,  40,  50,  50,  90], types: [T::Electric, T::Electric], weight_kg: 6.0,   ability: AbilityId::Static },
    SpeciesData { name: "raichu",     base_stats: [ 60,  90,  55,  90,  80, 110], types: [T::Electric, T::Electric], weight_kg: 30.0,  ability: AbilityId::Static },
    SpeciesData { name: "rillaboom",  base_stats: [100, 125,  90,  60,  70,  85], types: [T::Grass,    T::Grass],    weight_kg: 90.0,  ability: AbilityId::Grassysurge },
    SpeciesData { name: "serperior",  base_stats: [ 75,  75,  95,  75,  95, 113], types: [T::Grass,    T::Grass],    weight_kg: 63.0,  ability: AbilityId::None },
    SpeciesData { name: "skarmory",   base_stats: [ 65,  80, 140,  40,  70,  70], types: [T::Steel,    T::Flying],   weight_kg: 50.5,  ability: AbilityId::Sturdy },
    SpeciesData { name: "slurpuff",   base_stats: [ 82,  80,  86,  85,  75,  72], types: [T::Fairy,    T::Fairy],    weight_kg: 5.0,   ability: AbilityId::Sweetveil },
    SpeciesData { name: "starmie",    base_stats: [ 60,  75,  85, 100,  85, 115], types: [T::Water,    T::Psychic],  weight_kg: 80.0,  ability: AbilityId::Naturalcure },
    SpeciesData { name: "talonflame", base_stats: [ 78,  81,  71,  74,  69, 126], types: [T::Fire,     T::Flying],   weight_kg: 24.5,  ability: AbilityId::Galewings },
    SpeciesData { name: "torkoal",    base_stats: [ 70,  85, 140,  85,  70,  20], types: [T::Fire,     T::Fire],     weight_kg: 80.4,  ability: AbilityId::Drought },
    SpeciesData { name: "toxapex",    base_stats: [ 50,  63, 152,  53, 142,  35], types: [T::Poison,   T::Water],    weight_kg: 14.5,  ability: AbilityId::Regenerator },
    SpeciesData { name: "tyranitar",  base_stats: [100, 134, 110,  95, 100,  61], types: [T::Rock,     T::Dark],     weight_kg: 202.0, ability: AbilityId::Sandstream },
    SpeciesData { name: "venusaur",   base_stats: [ 80,  82,  83, 100, 100,  80], types: [T::Grass,    T::Poison],   weight_kg: 100.0, ability: AbilityId::Chlorophyll },
    SpeciesData { name: "victini",    base_stats: [100, 100, 100, 100, 100, 100], types: [T::Psychic,  T::Fire],     weight_kg: 4.0,   ability: AbilityId::Victorystar },
    SpeciesData { name: "whimsicott", base_stats: [ 60,  67,  85,  77,  75, 116], types: [T::Grass,    T::Fairy],    weight_kg: 6.6,   ability: AbilityId::Prankster },
    SpeciesData { name: "xatu",       base_stats: [ 65,  75,  70,  95,  70,  95], types: [T::Psychic,  T::Flying],   weight_kg: 15.0,  ability: AbilityId::None },
    SpeciesData { name: "yveltal",    base_stats: [126, 131,  95, 131,  98,  99], types: [T::Dark,     T::Flying],   weight_kg: 203.0, ability: AbilityId::Darkaura },
];

static SPECIES_NAMES: phf::Map<&'static str, SpeciesId> = phf::phf_map! {
    "aromatisse" => SpeciesId::Aromatisse,
    "azumarill" => SpeciesId::Azumarill,
    "blissey" => SpeciesId::Blissey,
    "breloom" => SpeciesId::Breloom,
    "bronzong" => SpeciesId::Bronzong,
    "clefable" => SpeciesId::Clefable,
    "dragonite" => SpeciesId::Dragonite,
    "dugtrio" => SpeciesId::Dugtrio,
    "excadrill" => SpeciesId::Excadrill,
    "ferrothorn" => SpeciesId::Ferrothorn,
    "garchomp" => SpeciesId::Garchomp,
    "gengar" => SpeciesId::Gengar,
    "gothitelle" => SpeciesId::Gothitelle,
    "gyarados" => SpeciesId::Gyarados,
    "heatran" => SpeciesId::Heatran,
    "hitmonlee" => SpeciesId::Hitmonlee,
    "magnezone" => SpeciesId::Magnezone,
    "mew" => SpeciesId::Mew,
    "pelipper" => SpeciesId::Pelipper,
    "pikachu" => SpeciesId::Pikachu,
    "raichu" => SpeciesId::Raichu,
    "rillaboom" => SpeciesId::Rillaboom,
    "serperior" => SpeciesId::Serperior,
    "skarmory" => SpeciesId::Skarmory,
    "slurpuff" => SpeciesId::Slurpuff,
    "starmie" => SpeciesId::Starmie,
    "talonflame" => SpeciesId::Talonflame,
    "torkoal" => SpeciesId::Torkoal,
    "toxapex" => SpeciesId::Toxapex,
    "tyranitar" => SpeciesId::Tyranitar,
    "venusaur" => SpeciesId::Venusaur,
    "victini" => SpeciesId::Victini,
    "whimsicott" => SpeciesId::Whimsicott,
    "xatu" => SpeciesId::Xatu,
    "yveltal" => SpeciesId::Yveltal,
};

// ============================================================================
// Stat Calculation
// ============================================================================

/// Fixed IV used for every stat
const IV: i32 = 31;
/// Fixed EV used for every stat (85 each, the even random-battle spread)
const EV: i32 = 85;

/// HP formula: floor((2*Base + IV + floor(EV/4)) * Level / 100) + Level + 10
pub fn calculate_hp(base: i16, level: i8) -> i16 {
    let base = base as i32;
    let level = level as i32;
    ((2 * base + IV + EV / 4) * level / 100 + level + 10) as i16
}

/// Non-HP formula: floor((2*Base + IV + floor(EV/4)) * Level / 100) + 5
pub fn calculate_stat(base: i16, level: i8) -> i16 {
    let base = base as i32;
    let level = level as i32;
    ((2 * base + IV + EV / 4) * level / 100 + 5) as i16
}

// ============================================================================
// Builder
// ============================================================================

/// Blueprint for assembling a battle-ready combatant.
///
/// Stats derive from the species table with the fixed IV/EV spread; the
/// builder overrides identity-level properties only.
#[derive(Clone, Debug)]
pub struct PokemonSpec {
    pub species: SpeciesId,
    pub level: i8,
    pub ability: Option<AbilityId>,
    pub item: ItemId,
    pub moves: Vec<MoveId>,
    pub tera_type: Option<PokemonType>,
}

impl PokemonSpec {
    pub fn new(species: SpeciesId) -> Self {
        Self {
            species,
            level: DEFAULT_LEVEL,
            ability: None,
            item: ItemId::None,
            moves: Vec::new(),
            tera_type: None,
        }
    }

    pub fn from_str(species_key: &str) -> Option<Self> {
        SpeciesId::from_str(species_key).map(Self::new)
    }

    pub fn level(mut self, level: i8) -> Self {
        self.level = level.clamp(1, 100);
        self
    }

    pub fn ability(mut self, ability: AbilityId) -> Self {
        self.ability = Some(ability);
        self
    }

    pub fn item(mut self, item: ItemId) -> Self {
        self.item = item;
        self
    }

    pub fn moves(mut self, moves: &[MoveId]) -> Self {
        self.moves = moves.to_vec();
        self
    }

    pub fn tera_type(mut self, tera_type: PokemonType) -> Self {
        self.tera_type = Some(tera_type);
        self
    }

    pub fn build(&self) -> Pokemon {
        let data = self.species.data();
        let hp = calculate_hp(data.base_stats[0], self.level);

        let mut slots = [MoveSlot::empty(); MAX_MOVES];
        for (i, move_id) in self.moves.iter().take(MAX_MOVES).enumerate() {
            slots[i] = MoveSlot {
                id: *move_id,
                disabled: false,
                pp: move_id.data().pp,
            };
        }

        Pokemon {
            id: self.species,
            level: self.level,
            types: data.types,
            hp,
            maxhp: hp,
            ability: self.ability.unwrap_or(data.ability),
            item: self.item,
            attack: calculate_stat(data.base_stats[1], self.level),
            defense: calculate_stat(data.base_stats[2], self.level),
            special_attack: calculate_stat(data.base_stats[3], self.level),
            special_defense: calculate_stat(data.base_stats[4], self.level),
            speed: calculate_stat(data.base_stats[5], self.level),
            moves: slots,
            ..Pokemon::with_tera_type(self.tera_type.unwrap_or(data.types[0]))
        }
    }
}
