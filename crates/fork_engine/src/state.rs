//! Battle state representation.
//!
//! The full battle is a stack-allocated `State`: two `Side`s of six
//! combatants each plus field-wide effects. Everything is `Copy` so the
//! search layer above can snapshot states cheaply, and every field is
//! reachable by the instruction log for exact apply/revert round-trips.

use serde::{Deserialize, Serialize};

use crate::abilities::AbilityId;
use crate::items::ItemId;
use crate::moves::MoveId;
use crate::species::SpeciesId;
use crate::types::PokemonType;

/// Maximum team size per side
pub const MAX_TEAM_SIZE: usize = 6;

/// Number of move slots per combatant
pub const MAX_MOVES: usize = 4;

// ============================================================================
// Indices
// ============================================================================

/// Which side of the battle an operation refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SideReference {
    SideOne,
    SideTwo,
}

impl SideReference {
    #[inline]
    pub fn get_other_side(&self) -> SideReference {
        match self {
            SideReference::SideOne => SideReference::SideTwo,
            SideReference::SideTwo => SideReference::SideOne,
        }
    }
}

/// Team slot index. Stable for the whole battle: switching changes which
/// slot is active, never where a combatant lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PokemonIndex {
    P0,
    P1,
    P2,
    P3,
    P4,
    P5,
}

impl PokemonIndex {
    pub const ALL: [PokemonIndex; MAX_TEAM_SIZE] = [
        PokemonIndex::P0,
        PokemonIndex::P1,
        PokemonIndex::P2,
        PokemonIndex::P3,
        PokemonIndex::P4,
        PokemonIndex::P5,
    ];
}

/// Move slot index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PokemonMoveIndex {
    M0,
    M1,
    M2,
    M3,
}

impl PokemonMoveIndex {
    pub const ALL: [PokemonMoveIndex; MAX_MOVES] = [
        PokemonMoveIndex::M0,
        PokemonMoveIndex::M1,
        PokemonMoveIndex::M2,
        PokemonMoveIndex::M3,
    ];
}

// ============================================================================
// Field Effects
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weather {
    #[default]
    None,
    Sun,
    Rain,
    Sand,
    Snow,
    HarshSun,
    HeavyRain,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherState {
    pub weather_type: Weather,
    /// -1 means the weather does not expire
    pub turns_remaining: i8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terrain {
    #[default]
    None,
    ElectricTerrain,
    GrassyTerrain,
    MistyTerrain,
    PsychicTerrain,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainState {
    pub terrain_type: Terrain,
    pub turns_remaining: i8,
}

// ============================================================================
// Status & Volatile Flags
// ============================================================================

/// Major status conditions (at most one at a time)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PokemonStatus {
    #[default]
    None,
    Burn,
    Freeze,
    Paralyze,
    Poison,
    Sleep,
    Toxic,
}

bitflags::bitflags! {
    /// Volatile conditions on the active slot (multiple can be active).
    /// Cleared when the slot's occupant leaves the field.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct VolatileStatus: u16 {
        const CONFUSION         = 1 << 0;
        const FLINCH            = 1 << 1;
        const SUBSTITUTE        = 1 << 2;
        const LEECH_SEED        = 1 << 3;
        const TAUNT             = 1 << 4;
        const PROTECT           = 1 << 5;
        const PARTIALLY_TRAPPED = 1 << 6;
        const PHANTOM_FORCE     = 1 << 7;  // Two-turn charge in progress
        const TYPE_CHANGE       = 1 << 8;  // Active typing differs from species
        const SMACK_DOWN        = 1 << 9;
    }
}

// ============================================================================
// Boosts & Side Conditions
// ============================================================================

/// Stat axes that can hold a -6..=+6 stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PokemonBoostableStat {
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
    Accuracy,
    Evasion,
}

/// Addressable side-condition counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PokemonSideCondition {
    AuroraVeil,
    LightScreen,
    Protect,
    Reflect,
    Spikes,
    StealthRock,
    StickyWeb,
    Tailwind,
    ToxicSpikes,
    ToxicCount,
}

/// Per-side counters for hazards, screens and bookkeeping.
///
/// Everything is a small signed counter so the instruction log can move
/// any of them by a delta and revert by the negated delta.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideConditions {
    pub aurora_veil: i8,
    pub light_screen: i8,
    pub protect: i8,
    pub reflect: i8,
    pub spikes: i8,
    pub stealth_rock: i8,
    pub sticky_web: i8,
    pub tailwind: i8,
    pub toxic_spikes: i8,
    pub toxic_count: i8,
}

impl SideConditions {
    #[inline]
    pub fn get(&self, condition: PokemonSideCondition) -> i8 {
        match condition {
            PokemonSideCondition::AuroraVeil => self.aurora_veil,
            PokemonSideCondition::LightScreen => self.light_screen,
            PokemonSideCondition::Protect => self.protect,
            PokemonSideCondition::Reflect => self.reflect,
            PokemonSideCondition::Spikes => self.spikes,
            PokemonSideCondition::StealthRock => self.stealth_rock,
            PokemonSideCondition::StickyWeb => self.sticky_web,
            PokemonSideCondition::Tailwind => self.tailwind,
            PokemonSideCondition::ToxicSpikes => self.toxic_spikes,
            PokemonSideCondition::ToxicCount => self.toxic_count,
        }
    }

    #[inline]
    pub fn update(&mut self, condition: PokemonSideCondition, delta: i8) {
        let slot = match condition {
            PokemonSideCondition::AuroraVeil => &mut self.aurora_veil,
            PokemonSideCondition::LightScreen => &mut self.light_screen,
            PokemonSideCondition::Protect => &mut self.protect,
            PokemonSideCondition::Reflect => &mut self.reflect,
            PokemonSideCondition::Spikes => &mut self.spikes,
            PokemonSideCondition::StealthRock => &mut self.stealth_rock,
            PokemonSideCondition::StickyWeb => &mut self.sticky_web,
            PokemonSideCondition::Tailwind => &mut self.tailwind,
            PokemonSideCondition::ToxicSpikes => &mut self.toxic_spikes,
            PokemonSideCondition::ToxicCount => &mut self.toxic_count,
        };
        *slot += delta;
    }
}

// ============================================================================
// Combatants
// ============================================================================

/// One move slot: identity plus the mutable bits the engine tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSlot {
    pub id: MoveId,
    pub disabled: bool,
    pub pp: i8,
}

impl MoveSlot {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            id: MoveId::None,
            disabled: true,
            pp: 0,
        }
    }
}

/// A single combatant. Stats are final values computed at build time;
/// boosts live on the `Side` because they belong to the field position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: SpeciesId,
    pub level: i8,
    pub types: [PokemonType; 2],
    pub hp: i16,
    pub maxhp: i16,
    pub ability: AbilityId,
    pub item: ItemId,
    pub attack: i16,
    pub defense: i16,
    pub special_attack: i16,
    pub special_defense: i16,
    pub speed: i16,
    pub status: PokemonStatus,
    pub tera_type: PokemonType,
    pub terastallized: bool,
    pub moves: [MoveSlot; MAX_MOVES],
}

impl Default for Pokemon {
    fn default() -> Self {
        Self::with_tera_type(PokemonType::Normal)
    }
}

impl Pokemon {
    /// Empty slot placeholder (0 HP, no moves). Used to pad short teams.
    pub fn with_tera_type(tera_type: PokemonType) -> Self {
        Self {
            id: SpeciesId::Pikachu,
            level: 1,
            types: [PokemonType::Typeless, PokemonType::Typeless],
            hp: 0,
            maxhp: 0,
            ability: AbilityId::None,
            item: ItemId::None,
            attack: 0,
            defense: 0,
            special_attack: 0,
            special_defense: 0,
            speed: 0,
            status: PokemonStatus::None,
            tera_type,
            terastallized: false,
            moves: [MoveSlot::empty(); MAX_MOVES],
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Current typing, accounting for terastallization.
    #[inline]
    pub fn has_type(&self, pkmn_type: PokemonType) -> bool {
        if self.terastallized {
            self.tera_type == pkmn_type
        } else {
            self.types[0] == pkmn_type || self.types[1] == pkmn_type
        }
    }

    #[inline]
    pub fn current_types(&self) -> [PokemonType; 2] {
        if self.terastallized {
            [self.tera_type, self.tera_type]
        } else {
            self.types
        }
    }

    /// Raw (unboosted) value of a boostable stat. Accuracy and evasion
    /// have no stored stat; callers handle those stages separately.
    pub fn base_stat(&self, stat: PokemonBoostableStat) -> i16 {
        match stat {
            PokemonBoostableStat::Attack => self.attack,
            PokemonBoostableStat::Defense => self.defense,
            PokemonBoostableStat::SpecialAttack => self.special_attack,
            PokemonBoostableStat::SpecialDefense => self.special_defense,
            PokemonBoostableStat::Speed => self.speed,
            PokemonBoostableStat::Accuracy | PokemonBoostableStat::Evasion => 0,
        }
    }
}

// ============================================================================
// Sides
// ============================================================================

/// One player's half of the battle: the team, the active slot, and the
/// position-bound state (boosts, volatiles, hazards, delayed effects).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Side {
    pub active_index: PokemonIndex,
    pub pokemon: [Pokemon; MAX_TEAM_SIZE],
    pub side_conditions: SideConditions,
    pub volatile_statuses: VolatileStatus,
    /// Remaining substitute HP while SUBSTITUTE is up
    pub substitute_health: i16,
    /// (turns until it lands, stored heal amount); 0 turns = inactive
    pub wish: (i8, i16),
    /// (turns until it lands, slot that launched it); 0 turns = inactive
    pub future_sight: (i8, PokemonIndex),
    pub attack_boost: i8,
    pub defense_boost: i8,
    pub special_attack_boost: i8,
    pub special_defense_boost: i8,
    pub speed_boost: i8,
    pub accuracy_boost: i8,
    pub evasion_boost: i8,
    /// Set once terastallization has been spent for the battle
    pub used_tera: bool,
}

impl Default for Side {
    fn default() -> Self {
        Self {
            active_index: PokemonIndex::P0,
            pokemon: [Pokemon::default(); MAX_TEAM_SIZE],
            side_conditions: SideConditions::default(),
            volatile_statuses: VolatileStatus::empty(),
            substitute_health: 0,
            wish: (0, 0),
            future_sight: (0, PokemonIndex::P0),
            attack_boost: 0,
            defense_boost: 0,
            special_attack_boost: 0,
            special_defense_boost: 0,
            speed_boost: 0,
            accuracy_boost: 0,
            evasion_boost: 0,
            used_tera: false,
        }
    }
}

impl Side {
    #[inline]
    pub fn get_active(&self) -> &Pokemon {
        &self.pokemon[self.active_index as usize]
    }

    #[inline]
    pub fn get_active_mut(&mut self) -> &mut Pokemon {
        &mut self.pokemon[self.active_index as usize]
    }

    pub fn get_boost(&self, stat: PokemonBoostableStat) -> i8 {
        match stat {
            PokemonBoostableStat::Attack => self.attack_boost,
            PokemonBoostableStat::Defense => self.defense_boost,
            PokemonBoostableStat::SpecialAttack => self.special_attack_boost,
            PokemonBoostableStat::SpecialDefense => self.special_defense_boost,
            PokemonBoostableStat::Speed => self.speed_boost,
            PokemonBoostableStat::Accuracy => self.accuracy_boost,
            PokemonBoostableStat::Evasion => self.evasion_boost,
        }
    }

    pub fn get_boost_mut(&mut self, stat: PokemonBoostableStat) -> &mut i8 {
        match stat {
            PokemonBoostableStat::Attack => &mut self.attack_boost,
            PokemonBoostableStat::Defense => &mut self.defense_boost,
            PokemonBoostableStat::SpecialAttack => &mut self.special_attack_boost,
            PokemonBoostableStat::SpecialDefense => &mut self.special_defense_boost,
            PokemonBoostableStat::Speed => &mut self.speed_boost,
            PokemonBoostableStat::Accuracy => &mut self.accuracy_boost,
            PokemonBoostableStat::Evasion => &mut self.evasion_boost,
        }
    }

    /// Boost-adjusted value of a stored stat for the active combatant.
    #[inline]
    pub fn calculate_boosted_stat(&self, stat: PokemonBoostableStat) -> i16 {
        apply_stat_boost(self.get_active().base_stat(stat), self.get_boost(stat))
    }

    /// How much of `desired` actually lands once the [-6, 6] cap is applied.
    /// Returns 0 when the stage is already pinned at the relevant extreme.
    pub fn clamped_boost_delta(&self, stat: PokemonBoostableStat, desired: i8) -> i8 {
        let current = self.get_boost(stat);
        (current + desired).clamp(-6, 6) - current
    }

    /// Whether the active combatant touches the ground. Flying types,
    /// Levitate and Air Balloon float unless Smack Down pinned them.
    pub fn active_is_grounded(&self) -> bool {
        if self.volatile_statuses.contains(VolatileStatus::SMACK_DOWN) {
            return true;
        }
        let active = self.get_active();
        !(active.has_type(PokemonType::Flying)
            || active.ability == AbilityId::Levitate
            || active.item == ItemId::Airballoon)
    }

    /// Slots that could be switched into: alive and not currently active.
    pub fn alive_reserve_indices(&self) -> Vec<PokemonIndex> {
        PokemonIndex::ALL
            .iter()
            .copied()
            .filter(|&idx| idx != self.active_index && self.pokemon[idx as usize].is_alive())
            .collect()
    }

    #[inline]
    pub fn has_alive_reserve(&self) -> bool {
        !self.alive_reserve_indices().is_empty()
    }
}

// ============================================================================
// Battle State
// ============================================================================

/// The complete battle position. `Copy` keeps rollout snapshots cheap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub side_one: Side,
    pub side_two: Side,
    pub weather: WeatherState,
    pub terrain: TerrainState,
    pub trick_room: bool,
    /// Whether terastallization is available at all in this battle format
    pub tera_allowed: bool,
}

impl State {
    #[inline]
    pub fn get_side(&self, side_ref: SideReference) -> &Side {
        match side_ref {
            SideReference::SideOne => &self.side_one,
            SideReference::SideTwo => &self.side_two,
        }
    }

    #[inline]
    pub fn get_side_mut(&mut self, side_ref: SideReference) -> &mut Side {
        match side_ref {
            SideReference::SideOne => &mut self.side_one,
            SideReference::SideTwo => &mut self.side_two,
        }
    }

    /// Disjoint mutable borrows of (referenced side, other side).
    #[inline]
    pub fn get_both_sides_mut(&mut self, side_ref: SideReference) -> (&mut Side, &mut Side) {
        match side_ref {
            SideReference::SideOne => (&mut self.side_one, &mut self.side_two),
            SideReference::SideTwo => (&mut self.side_two, &mut self.side_one),
        }
    }

    #[inline]
    pub fn get_both_sides(&self, side_ref: SideReference) -> (&Side, &Side) {
        match side_ref {
            SideReference::SideOne => (&self.side_one, &self.side_two),
            SideReference::SideTwo => (&self.side_two, &self.side_one),
        }
    }

    /// Whether the given side's active cannot receive `status` right now.
    /// Covers existing status, typing, abilities, and terrain protection.
    pub fn immune_to_status(&self, side_ref: SideReference, status: PokemonStatus) -> bool {
        let side = self.get_side(side_ref);
        let active = side.get_active();
        if active.status != PokemonStatus::None || active.hp <= 0 {
            return true;
        }
        if side.active_is_grounded() {
            match self.terrain.terrain_type {
                Terrain::MistyTerrain => return true,
                Terrain::ElectricTerrain if status == PokemonStatus::Sleep => return true,
                _ => {}
            }
        }
        match status {
            PokemonStatus::Burn => active.has_type(PokemonType::Fire),
            PokemonStatus::Freeze => active.has_type(PokemonType::Ice),
            PokemonStatus::Paralyze => {
                active.has_type(PokemonType::Electric) || active.ability == AbilityId::Limber
            }
            PokemonStatus::Poison | PokemonStatus::Toxic => {
                active.has_type(PokemonType::Poison) || active.has_type(PokemonType::Steel)
            }
            PokemonStatus::Sleep => active.ability == AbilityId::Sweetveil,
            PokemonStatus::None => true,
        }
    }
}

// ============================================================================
// Stage Multipliers
// ============================================================================

/// Apply a stat stage to a stored stat.
/// Stages clamp to -6..=+6; multipliers are (2+s)/2 up, 2/(2-s) down.
#[inline]
pub fn apply_stat_boost(base: i16, stage: i8) -> i16 {
    let stage = stage.clamp(-6, 6) as i32;
    let (numerator, denominator) = if stage >= 0 {
        (2 + stage, 2)
    } else {
        (2, 2 - stage)
    };
    ((base as i32 * numerator) / denominator) as i16
}

/// Accuracy/evasion stage multiplier: (3+s)/3 up, 3/(3-s) down.
#[inline]
pub fn accuracy_stage_multiplier(stage: i8) -> f32 {
    let stage = stage.clamp(-6, 6) as f32;
    if stage >= 0.0 {
        (3.0 + stage) / 3.0
    } else {
        3.0 / (3.0 - stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<State>();
    }

    #[test]
    fn test_stat_boost() {
        assert_eq!(apply_stat_boost(100, 0), 100); // No boost
        assert_eq!(apply_stat_boost(100, 1), 150); // +1 = 3/2
        assert_eq!(apply_stat_boost(100, 2), 200); // +2 = 4/2
        assert_eq!(apply_stat_boost(100, 6), 400); // +6 = 8/2
        assert_eq!(apply_stat_boost(100, -1), 66); // -1 = 2/3
        assert_eq!(apply_stat_boost(100, -6), 25); // -6 = 2/8
        assert_eq!(apply_stat_boost(203, 1), 304); // 203 * 3 / 2
    }

    #[test]
    fn test_accuracy_stage() {
        assert_eq!(accuracy_stage_multiplier(0), 1.0);
        assert_eq!(accuracy_stage_multiplier(1), 4.0 / 3.0);
        assert_eq!(accuracy_stage_multiplier(-1), 0.75);
        assert_eq!(accuracy_stage_multiplier(-6), 1.0 / 3.0);
    }

    #[test]
    fn test_side_condition_update() {
        let mut side = Side::default();
        side.side_conditions
            .update(PokemonSideCondition::Spikes, 1);
        side.side_conditions
            .update(PokemonSideCondition::Spikes, 1);
        assert_eq!(side.side_conditions.get(PokemonSideCondition::Spikes), 2);
        side.side_conditions
            .update(PokemonSideCondition::Spikes, -2);
        assert_eq!(side.side_conditions.get(PokemonSideCondition::Spikes), 0);
    }

    #[test]
    fn test_has_type_respects_tera() {
        let mut mon = Pokemon::default();
        mon.types = [PokemonType::Water, PokemonType::Flying];
        mon.tera_type = PokemonType::Ground;
        assert!(mon.has_type(PokemonType::Flying));
        assert!(!mon.has_type(PokemonType::Ground));
        mon.terastallized = true;
        assert!(mon.has_type(PokemonType::Ground));
        assert!(!mon.has_type(PokemonType::Flying));
    }

    #[test]
    fn test_both_sides_split() {
        let mut state = State::default();
        let (ours, theirs) = state.get_both_sides_mut(SideReference::SideTwo);
        ours.attack_boost = 2;
        theirs.attack_boost = -1;
        assert_eq!(state.side_two.attack_boost, 2);
        assert_eq!(state.side_one.attack_boost, -1);
    }
}
