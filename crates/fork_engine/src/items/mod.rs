//! Held item hooks and registry.

pub mod hooks;
pub mod implementations;
pub mod registry;

pub use hooks::ItemHooks;
pub use registry::{item_hooks, ITEM_FLAGS, ITEM_REGISTRY};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ItemId {
    #[default]
    None,
    Airballoon,
    Blacksludge,
    Charcoal,
    Choiceband,
    Choicescarf,
    Choicespecs,
    Electricseed,
    Expertbelt,
    Flameorb,
    Heavydutyboots,
    Leftovers,
    Lifeorb,
    Mysticwater,
    Rockyhelmet,
    Shedshell,
    Toxicorb,
}

impl ItemId {
    /// Total number of items
    pub const COUNT: usize = 17;

    pub fn from_str(s: &str) -> Option<Self> {
        ITEM_NAMES.get(&s.to_lowercase()).copied()
    }

    #[inline]
    pub fn flags(self) -> ItemFlags {
        ITEM_FLAGS[self as usize]
    }

    #[inline]
    pub fn has_flag(self, flag: ItemFlags) -> bool {
        self.flags().contains(flag)
    }
}

bitflags::bitflags! {
    /// Passive item properties checked inline by the engine.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct ItemFlags: u8 {
        /// Holder ignores entry hazards when switching in
        const HAZARD_IMMUNE    = 1 << 0;
        /// Holder can switch out regardless of trapping effects
        const CAN_ALWAYS_SWITCH = 1 << 1;
        /// Holder is locked into its first chosen move
        const CHOICE_LOCK      = 1 << 2;
    }
}

static ITEM_NAMES: phf::Map<&'static str, ItemId> = phf::phf_map! {
    "airballoon" => ItemId::Airballoon,
    "blacksludge" => ItemId::Blacksludge,
    "charcoal" => ItemId::Charcoal,
    "choiceband" => ItemId::Choiceband,
    "choicescarf" => ItemId::Choicescarf,
    "choicespecs" => ItemId::Choicespecs,
    "electricseed" => ItemId::Electricseed,
    "expertbelt" => ItemId::Expertbelt,
    "flameorb" => ItemId::Flameorb,
    "heavydutyboots" => ItemId::Heavydutyboots,
    "leftovers" => ItemId::Leftovers,
    "lifeorb" => ItemId::Lifeorb,
    "mysticwater" => ItemId::Mysticwater,
    "none" => ItemId::None,
    "rockyhelmet" => ItemId::Rockyhelmet,
    "shedshell" => ItemId::Shedshell,
    "toxicorb" => ItemId::Toxicorb,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(ItemId::from_str("Leftovers"), Some(ItemId::Leftovers));
        assert_eq!(ItemId::from_str("rockyhelmet"), Some(ItemId::Rockyhelmet));
        assert_eq!(ItemId::from_str("masterball"), None);
    }

    #[test]
    fn test_flags() {
        assert!(ItemId::Heavydutyboots.has_flag(ItemFlags::HAZARD_IMMUNE));
        assert!(ItemId::Shedshell.has_flag(ItemFlags::CAN_ALWAYS_SWITCH));
        assert!(ItemId::Choiceband.has_flag(ItemFlags::CHOICE_LOCK));
        assert!(ItemId::Choicescarf.has_flag(ItemFlags::CHOICE_LOCK));
        assert!(!ItemId::Leftovers.has_flag(ItemFlags::CHOICE_LOCK));
    }
}
