//! Type definitions and the type-effectiveness chart.

use serde::{Deserialize, Serialize};

/// Element types. `Typeless` fills the second slot of single-typed
/// combatants and is neutral in both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
    Typeless,
}

impl PokemonType {
    pub const COUNT: usize = 19;

    pub fn from_str(s: &str) -> Option<Self> {
        TYPE_NAMES.get(&s.to_lowercase()).copied()
    }
}

static TYPE_NAMES: phf::Map<&'static str, PokemonType> = phf::phf_map! {
    "normal" => PokemonType::Normal,
    "fire" => PokemonType::Fire,
    "water" => PokemonType::Water,
    "electric" => PokemonType::Electric,
    "grass" => PokemonType::Grass,
    "ice" => PokemonType::Ice,
    "fighting" => PokemonType::Fighting,
    "poison" => PokemonType::Poison,
    "ground" => PokemonType::Ground,
    "flying" => PokemonType::Flying,
    "psychic" => PokemonType::Psychic,
    "bug" => PokemonType::Bug,
    "rock" => PokemonType::Rock,
    "ghost" => PokemonType::Ghost,
    "dragon" => PokemonType::Dragon,
    "dark" => PokemonType::Dark,
    "steel" => PokemonType::Steel,
    "fairy" => PokemonType::Fairy,
    "typeless" => PokemonType::Typeless,
};

/// Effectiveness multipliers, indexed `TYPE_CHART[attacking][defending]`.
///
/// Column order matches the `PokemonType` discriminant order. The final
/// row/column is `Typeless` (neutral everywhere).
#[rustfmt::skip]
pub const TYPE_CHART: [[f32; PokemonType::COUNT]; PokemonType::COUNT] = [
    // Nor  Fir  Wat  Ele  Gra  Ice  Fig  Poi  Gro  Fly  Psy  Bug  Roc  Gho  Dra  Dar  Ste  Fai  ---
    [  1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0, 1.0, 1.0, 0.5, 1.0, 1.0], // Normal
    [  1.0, 0.5, 0.5, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 2.0, 1.0, 1.0], // Fire
    [  1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0], // Water
    [  1.0, 1.0, 2.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0], // Electric
    [  1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 1.0, 0.5, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 0.5, 1.0, 1.0], // Grass
    [  1.0, 0.5, 0.5, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0], // Ice
    [  2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5, 0.5, 0.5, 2.0, 0.0, 1.0, 2.0, 2.0, 0.5, 1.0], // Fighting
    [  1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 0.0, 2.0, 1.0], // Poison
    [  1.0, 2.0, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.0, 1.0, 0.5, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0], // Ground
    [  1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0], // Flying
    [  1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 0.0, 0.5, 1.0, 1.0], // Psychic
    [  1.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.5, 0.5, 1.0, 0.5, 2.0, 1.0, 1.0, 0.5, 1.0, 2.0, 0.5, 0.5, 1.0], // Bug
    [  1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0], // Rock
    [  0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0, 1.0], // Ghost
    [  1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 0.0, 1.0], // Dragon
    [  1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5, 1.0], // Dark
    [  1.0, 0.5, 0.5, 0.5, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 0.5, 2.0, 1.0], // Steel
    [  1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 0.5, 1.0, 1.0], // Fairy
    [  1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0], // Typeless
];

/// Chained effectiveness of a move type against both defending type slots.
pub fn type_effectiveness(move_type: PokemonType, defender_types: &[PokemonType; 2]) -> f32 {
    let first = TYPE_CHART[move_type as usize][defender_types[0] as usize];
    if defender_types[1] == defender_types[0] {
        return first;
    }
    first * TYPE_CHART[move_type as usize][defender_types[1] as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_lookup() {
        assert_eq!(PokemonType::from_str("fire"), Some(PokemonType::Fire));
        assert_eq!(PokemonType::from_str("Fire"), Some(PokemonType::Fire));
        assert_eq!(PokemonType::from_str("invalid"), None);
    }

    #[test]
    fn test_single_type_matchups() {
        // Water vs Fire = 2x
        assert_eq!(
            type_effectiveness(PokemonType::Water, &[PokemonType::Fire, PokemonType::Fire]),
            2.0
        );
        // Ground vs Flying = 0x
        assert_eq!(
            type_effectiveness(PokemonType::Ground, &[PokemonType::Flying, PokemonType::Flying]),
            0.0
        );
        // Electric vs Ground = 0x
        assert_eq!(
            type_effectiveness(PokemonType::Electric, &[PokemonType::Ground, PokemonType::Ground]),
            0.0
        );
    }

    #[test]
    fn test_dual_type_chaining() {
        // Ice vs Grass/Flying = 4x
        assert_eq!(
            type_effectiveness(PokemonType::Ice, &[PokemonType::Grass, PokemonType::Flying]),
            4.0
        );
        // Electric vs Water/Flying = 4x
        assert_eq!(
            type_effectiveness(PokemonType::Electric, &[PokemonType::Water, PokemonType::Flying]),
            4.0
        );
        // Fighting vs Poison/Ghost = 0x (immunity dominates)
        assert_eq!(
            type_effectiveness(PokemonType::Fighting, &[PokemonType::Poison, PokemonType::Ghost]),
            0.0
        );
        // Grass vs Water/Ground = 4x
        assert_eq!(
            type_effectiveness(PokemonType::Grass, &[PokemonType::Water, PokemonType::Ground]),
            4.0
        );
    }

    #[test]
    fn test_typeless_is_neutral() {
        for t in [PokemonType::Normal, PokemonType::Ghost, PokemonType::Steel] {
            assert_eq!(
                type_effectiveness(PokemonType::Typeless, &[t, t]),
                1.0
            );
            assert_eq!(
                type_effectiveness(t, &[PokemonType::Typeless, PokemonType::Typeless]),
                1.0
            );
        }
    }
}
