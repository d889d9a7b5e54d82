//! Ability hook registry.
//!
//! Two parallel tables indexed by `AbilityId`: `ABILITY_REGISTRY` for
//! behavior hooks and `ABILITY_FLAGS` for passive properties the engine
//! checks inline.

use super::hooks::AbilityHooks;
use super::implementations::*;
use super::{AbilityFlags, AbilityId};

pub static ABILITY_REGISTRY: [Option<AbilityHooks>; AbilityId::COUNT] = {
    let mut registry: [Option<AbilityHooks>; AbilityId::COUNT] = [None; AbilityId::COUNT];

    // =========================================================================
    // Switch-in effects
    // =========================================================================

    registry[AbilityId::Drizzle as usize] = Some(AbilityHooks {
        on_switch_in: Some(weather_setters::drizzle),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Drought as usize] = Some(AbilityHooks {
        on_switch_in: Some(weather_setters::drought),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Sandstream as usize] = Some(AbilityHooks {
        on_switch_in: Some(weather_setters::sand_stream),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Snowwarning as usize] = Some(AbilityHooks {
        on_switch_in: Some(weather_setters::snow_warning),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Grassysurge as usize] = Some(AbilityHooks {
        on_switch_in: Some(weather_setters::grassy_surge),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Intimidate as usize] = Some(AbilityHooks {
        on_switch_in: Some(intimidate::intimidate),
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // Contact punishment
    // =========================================================================

    registry[AbilityId::Static as usize] = Some(AbilityHooks {
        on_contact: Some(contact::static_),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Flamebody as usize] = Some(AbilityHooks {
        on_contact: Some(contact::flame_body),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Effectspore as usize] = Some(AbilityHooks {
        on_contact: Some(contact::effect_spore),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Roughskin as usize] = Some(AbilityHooks {
        on_contact: Some(contact::rough_skin),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Ironbarbs as usize] = Some(AbilityHooks {
        on_contact: Some(contact::iron_barbs),
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // Damage modifiers
    // =========================================================================

    registry[AbilityId::Blaze as usize] = Some(AbilityHooks {
        offense_mod: Some(damage_modifiers::blaze),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Guts as usize] = Some(AbilityHooks {
        offense_mod: Some(damage_modifiers::guts),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Hugepower as usize] = Some(AbilityHooks {
        offense_mod: Some(damage_modifiers::huge_power),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Darkaura as usize] = Some(AbilityHooks {
        offense_mod: Some(damage_modifiers::dark_aura),
        defense_mod: Some(damage_modifiers::dark_aura),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Thickfat as usize] = Some(AbilityHooks {
        defense_mod: Some(damage_modifiers::thick_fat),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Multiscale as usize] = Some(AbilityHooks {
        defense_mod: Some(damage_modifiers::multiscale),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Solarpower as usize] = Some(AbilityHooks {
        offense_mod: Some(damage_modifiers::solar_power),
        end_of_turn: Some(residuals::solar_power),
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // Attack absorption
    // =========================================================================

    registry[AbilityId::Voltabsorb as usize] = Some(AbilityHooks {
        absorb: Some(immunity::volt_absorb),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Waterabsorb as usize] = Some(AbilityHooks {
        absorb: Some(immunity::water_absorb),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Flashfire as usize] = Some(AbilityHooks {
        absorb: Some(immunity::flash_fire),
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // Speed and priority
    // =========================================================================

    registry[AbilityId::Chlorophyll as usize] = Some(AbilityHooks {
        speed_multiplier: Some(speed::chlorophyll),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Swiftswim as usize] = Some(AbilityHooks {
        speed_multiplier: Some(speed::swift_swim),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Sandrush as usize] = Some(AbilityHooks {
        speed_multiplier: Some(speed::sand_rush),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Quickfeet as usize] = Some(AbilityHooks {
        speed_multiplier: Some(speed::quick_feet),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Prankster as usize] = Some(AbilityHooks {
        priority_modifier: Some(priority::prankster),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Galewings as usize] = Some(AbilityHooks {
        priority_modifier: Some(priority::gale_wings),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Triage as usize] = Some(AbilityHooks {
        priority_modifier: Some(priority::triage),
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // End of turn and knockouts
    // =========================================================================

    registry[AbilityId::Speedboost as usize] = Some(AbilityHooks {
        end_of_turn: Some(residuals::speed_boost),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Raindish as usize] = Some(AbilityHooks {
        end_of_turn: Some(residuals::rain_dish),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Moxie as usize] = Some(AbilityHooks {
        on_kill: Some(stat_modifiers::moxie),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Beastboost as usize] = Some(AbilityHooks {
        on_kill: Some(stat_modifiers::beast_boost),
        ..AbilityHooks::NONE
    });

    registry
};

pub static ABILITY_FLAGS: [AbilityFlags; AbilityId::COUNT] = {
    let mut flags = [AbilityFlags::empty(); AbilityId::COUNT];
    flags[AbilityId::Clearbody as usize] = AbilityFlags::BLOCKS_STAT_DROPS;
    flags[AbilityId::Defiant as usize] = AbilityFlags::PUNISHES_STAT_DROPS;
    flags[AbilityId::Overcoat as usize] = AbilityFlags::IMMUNE_POWDER;
    flags[AbilityId::Unaware as usize] = AbilityFlags::IGNORES_BOOSTS;
    flags[AbilityId::Guts as usize] = AbilityFlags::IGNORES_BURN_PENALTY;
    flags[AbilityId::Quickfeet as usize] = AbilityFlags::PARALYSIS_SPEED_EXEMPT;
    flags[AbilityId::Magicguard as usize] = AbilityFlags::IMMUNE_INDIRECT;
    flags
};

/// Hook table for an ability, if it registers any behavior.
#[inline]
pub fn ability_hooks(id: AbilityId) -> Option<&'static AbilityHooks> {
    ABILITY_REGISTRY[id as usize].as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_coverage() {
        assert!(ability_hooks(AbilityId::Intimidate).is_some());
        assert!(ability_hooks(AbilityId::None).is_none());
        assert!(ability_hooks(AbilityId::Levitate).is_none());
    }

    #[test]
    fn test_hooks_match_concern() {
        let drizzle = ability_hooks(AbilityId::Drizzle).unwrap();
        assert!(drizzle.on_switch_in.is_some());
        assert!(drizzle.on_contact.is_none());

        let static_hooks = ability_hooks(AbilityId::Static).unwrap();
        assert!(static_hooks.on_contact.is_some());

        let solar = ability_hooks(AbilityId::Solarpower).unwrap();
        assert!(solar.offense_mod.is_some());
        assert!(solar.end_of_turn.is_some());
    }
}
