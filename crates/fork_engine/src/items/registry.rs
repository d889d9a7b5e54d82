use crate::items::hooks::ItemHooks;
use crate::items::implementations::*;
use crate::items::{ItemFlags, ItemId};

pub static ITEM_REGISTRY: [Option<ItemHooks>; ItemId::COUNT] = {
    let mut registry: [Option<ItemHooks>; ItemId::COUNT] = [None; ItemId::COUNT];

    // =========================================================================
    // Item Hook Registrations
    // =========================================================================

    registry[ItemId::Leftovers as usize] = Some(ItemHooks {
        end_of_turn: Some(end_of_turn_leftovers),
        ..ItemHooks::NONE
    });

    registry[ItemId::Blacksludge as usize] = Some(ItemHooks {
        end_of_turn: Some(end_of_turn_black_sludge),
        ..ItemHooks::NONE
    });

    registry[ItemId::Flameorb as usize] = Some(ItemHooks {
        end_of_turn: Some(end_of_turn_flame_orb),
        ..ItemHooks::NONE
    });

    registry[ItemId::Toxicorb as usize] = Some(ItemHooks {
        end_of_turn: Some(end_of_turn_toxic_orb),
        ..ItemHooks::NONE
    });

    registry[ItemId::Rockyhelmet as usize] = Some(ItemHooks {
        on_contact: Some(on_contact_rocky_helmet),
        ..ItemHooks::NONE
    });

    registry[ItemId::Choiceband as usize] = Some(ItemHooks {
        damage_mod: Some(damage_mod_choice_band),
        ..ItemHooks::NONE
    });

    registry[ItemId::Choicespecs as usize] = Some(ItemHooks {
        damage_mod: Some(damage_mod_choice_specs),
        ..ItemHooks::NONE
    });

    registry[ItemId::Choicescarf as usize] = Some(ItemHooks {
        speed_multiplier: Some(speed_multiplier_choice_scarf),
        ..ItemHooks::NONE
    });

    registry[ItemId::Lifeorb as usize] = Some(ItemHooks {
        damage_mod: Some(damage_mod_life_orb),
        after_move_hit: Some(after_move_hit_life_orb),
        ..ItemHooks::NONE
    });

    registry[ItemId::Expertbelt as usize] = Some(ItemHooks {
        damage_mod: Some(damage_mod_expert_belt),
        ..ItemHooks::NONE
    });

    registry[ItemId::Charcoal as usize] = Some(ItemHooks {
        damage_mod: Some(damage_mod_charcoal),
        ..ItemHooks::NONE
    });

    registry[ItemId::Mysticwater as usize] = Some(ItemHooks {
        damage_mod: Some(damage_mod_mystic_water),
        ..ItemHooks::NONE
    });

    registry[ItemId::Electricseed as usize] = Some(ItemHooks {
        on_switch_in: Some(on_switch_in_electric_seed),
        ..ItemHooks::NONE
    });

    registry
};

pub static ITEM_FLAGS: [ItemFlags; ItemId::COUNT] = {
    let mut flags = [ItemFlags::empty(); ItemId::COUNT];
    flags[ItemId::Heavydutyboots as usize] = ItemFlags::HAZARD_IMMUNE;
    flags[ItemId::Shedshell as usize] = ItemFlags::CAN_ALWAYS_SWITCH;
    flags[ItemId::Choiceband as usize] = ItemFlags::CHOICE_LOCK;
    flags[ItemId::Choicescarf as usize] = ItemFlags::CHOICE_LOCK;
    flags[ItemId::Choicespecs as usize] = ItemFlags::CHOICE_LOCK;
    flags
};

/// Hook table for an item, if it registers any behavior.
#[inline]
pub fn item_hooks(id: ItemId) -> Option<&'static ItemHooks> {
    ITEM_REGISTRY[id as usize].as_ref()
}
