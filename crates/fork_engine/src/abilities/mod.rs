//! Ability system hooks and registry.
//!
//! Abilities plug into the generator at fixed extension points. Simple
//! yes/no properties (boost-drop blocking, powder immunity) live in
//! `ABILITY_FLAGS`; anything that emits instructions or modifies a
//! number goes through `ABILITY_REGISTRY` hooks.

pub mod hooks;
pub mod implementations;
pub mod registry;

pub use hooks::AbilityHooks;
pub use registry::{ability_hooks, ABILITY_FLAGS, ABILITY_REGISTRY};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AbilityId {
    #[default]
    None,
    Adaptability,
    Arenatrap,
    Beastboost,
    Blaze,
    Chlorophyll,
    Clearbody,
    Darkaura,
    Defiant,
    Drizzle,
    Drought,
    Effectspore,
    Flamebody,
    Flashfire,
    Galewings,
    Grassysurge,
    Guts,
    Hugepower,
    Intimidate,
    Ironbarbs,
    Levitate,
    Limber,
    Magicguard,
    Magnetpull,
    Moxie,
    Multiscale,
    Naturalcure,
    Overcoat,
    Prankster,
    Protean,
    Quickfeet,
    Raindish,
    Regenerator,
    Roughskin,
    Sandrush,
    Sandstream,
    Shadowtag,
    Snowwarning,
    Solarpower,
    Speedboost,
    Static,
    Sturdy,
    Sweetveil,
    Swiftswim,
    Thickfat,
    Triage,
    Unaware,
    Victorystar,
    Voltabsorb,
    Waterabsorb,
}

impl AbilityId {
    /// Total number of abilities
    pub const COUNT: usize = 50;

    pub fn from_str(s: &str) -> Option<Self> {
        ABILITY_NAMES.get(&s.to_lowercase()).copied()
    }
}

bitflags::bitflags! {
    /// Passive yes/no ability properties checked inline by the engine.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct AbilityFlags: u16 {
        /// Opponent-inflicted stat drops are blocked outright
        const BLOCKS_STAT_DROPS     = 1 << 0;
        /// Opponent-inflicted stat drops trigger +2 Attack
        const PUNISHES_STAT_DROPS   = 1 << 1;
        /// Immune to powder moves
        const IMMUNE_POWDER         = 1 << 2;
        /// Stat stages are ignored in damage calculation against this side
        const IGNORES_BOOSTS        = 1 << 3;
        /// Burn does not halve this attacker's physical damage
        const IGNORES_BURN_PENALTY  = 1 << 4;
        /// Paralysis does not halve effective speed
        const PARALYSIS_SPEED_EXEMPT = 1 << 5;
        /// Immune to all indirect damage (hazards, weather, status, recoil)
        const IMMUNE_INDIRECT       = 1 << 6;
    }
}

static ABILITY_NAMES: phf::Map<&'static str, AbilityId> = phf::phf_map! {
    "adaptability" => AbilityId::Adaptability,
    "arenatrap" => AbilityId::Arenatrap,
    "beastboost" => AbilityId::Beastboost,
    "blaze" => AbilityId::Blaze,
    "chlorophyll" => AbilityId::Chlorophyll,
    "clearbody" => AbilityId::Clearbody,
    "darkaura" => AbilityId::Darkaura,
    "defiant" => AbilityId::Defiant,
    "drizzle" => AbilityId::Drizzle,
    "drought" => AbilityId::Drought,
    "effectspore" => AbilityId::Effectspore,
    "flamebody" => AbilityId::Flamebody,
    "flashfire" => AbilityId::Flashfire,
    "galewings" => AbilityId::Galewings,
    "grassysurge" => AbilityId::Grassysurge,
    "guts" => AbilityId::Guts,
    "hugepower" => AbilityId::Hugepower,
    "intimidate" => AbilityId::Intimidate,
    "ironbarbs" => AbilityId::Ironbarbs,
    "levitate" => AbilityId::Levitate,
    "limber" => AbilityId::Limber,
    "magicguard" => AbilityId::Magicguard,
    "magnetpull" => AbilityId::Magnetpull,
    "moxie" => AbilityId::Moxie,
    "multiscale" => AbilityId::Multiscale,
    "naturalcure" => AbilityId::Naturalcure,
    "none" => AbilityId::None,
    "overcoat" => AbilityId::Overcoat,
    "prankster" => AbilityId::Prankster,
    "protean" => AbilityId::Protean,
    "quickfeet" => AbilityId::Quickfeet,
    "raindish" => AbilityId::Raindish,
    "regenerator" => AbilityId::Regenerator,
    "roughskin" => AbilityId::Roughskin,
    "sandrush" => AbilityId::Sandrush,
    "sandstream" => AbilityId::Sandstream,
    "shadowtag" => AbilityId::Shadowtag,
    "snowwarning" => AbilityId::Snowwarning,
    "solarpower" => AbilityId::Solarpower,
    "speedboost" => AbilityId::Speedboost,
    "static" => AbilityId::Static,
    "sturdy" => AbilityId::Sturdy,
    "sweetveil" => AbilityId::Sweetveil,
    "swiftswim" => AbilityId::Swiftswim,
    "thickfat" => AbilityId::Thickfat,
    "triage" => AbilityId::Triage,
    "unaware" => AbilityId::Unaware,
    "victorystar" => AbilityId::Victorystar,
    "voltabsorb" => AbilityId::Voltabsorb,
    "waterabsorb" => AbilityId::Waterabsorb,
};

impl AbilityId {
    /// Flags for this ability (empty for most).
    #[inline]
    pub fn flags(self) -> AbilityFlags {
        ABILITY_FLAGS[self as usize]
    }

    #[inline]
    pub fn has_flag(self, flag: AbilityFlags) -> bool {
        self.flags().contains(flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(AbilityId::from_str("Intimidate"), Some(AbilityId::Intimidate));
        assert_eq!(AbilityId::from_str("waterabsorb"), Some(AbilityId::Waterabsorb));
        assert_eq!(AbilityId::from_str("wonderguard"), None);
    }

    #[test]
    fn test_flags() {
        assert!(AbilityId::Clearbody.has_flag(AbilityFlags::BLOCKS_STAT_DROPS));
        assert!(AbilityId::Defiant.has_flag(AbilityFlags::PUNISHES_STAT_DROPS));
        assert!(AbilityId::Unaware.has_flag(AbilityFlags::IGNORES_BOOSTS));
        assert!(AbilityId::Magicguard.has_flag(AbilityFlags::IMMUNE_INDIRECT));
        assert!(!AbilityId::Static.has_flag(AbilityFlags::BLOCKS_STAT_DROPS));
    }
}
