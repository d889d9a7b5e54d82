//! Move hook registry.
//!
//! Static registry mapping MoveId to MoveHooks for conditional move logic.

use super::hooks::MoveHooks;
use super::implementations::*;
use crate::moves::MoveId;

pub static MOVE_REGISTRY: [Option<MoveHooks>; MoveId::COUNT] = {
    let mut registry: [Option<MoveHooks>; MoveId::COUNT] = [None; MoveId::COUNT];

    // =========================================================================
    // Conditional Base Power Moves (OnBasePowerCondition + multiplier)
    // =========================================================================

    // Knock Off: 1.5x if target has a removable item
    registry[MoveId::Knockoff as usize] = Some(MoveHooks {
        on_base_power_condition: Some(knockoff_condition),
        conditional_multiplier: 1.5,
        ..MoveHooks::NONE
    });

    // Venoshock: 2x if target is poisoned
    registry[MoveId::Venoshock as usize] = Some(MoveHooks {
        on_base_power_condition: Some(venoshock_condition),
        conditional_multiplier: 2.0,
        ..MoveHooks::NONE
    });

    // Hex: 2x if target has any status
    registry[MoveId::Hex as usize] = Some(MoveHooks {
        on_base_power_condition: Some(hex_condition),
        conditional_multiplier: 2.0,
        ..MoveHooks::NONE
    });

    // Brine: 2x if target is at or below 50% HP
    registry[MoveId::Brine as usize] = Some(MoveHooks {
        on_base_power_condition: Some(brine_condition),
        conditional_multiplier: 2.0,
        ..MoveHooks::NONE
    });

    // Facade: 2x if statused (burn penalty exemption lives in the data flags)
    registry[MoveId::Facade as usize] = Some(MoveHooks {
        on_base_power_condition: Some(facade_condition),
        conditional_multiplier: 2.0,
        ..MoveHooks::NONE
    });

    // Bolt Beak: 2x when moving before the target
    registry[MoveId::Boltbeak as usize] = Some(MoveHooks {
        on_base_power_condition: Some(boltbeak_condition),
        conditional_multiplier: 2.0,
        ..MoveHooks::NONE
    });

    // Acrobatics: 2x without a held item
    registry[MoveId::Acrobatics as usize] = Some(MoveHooks {
        on_base_power_condition: Some(acrobatics_condition),
        conditional_multiplier: 2.0,
        ..MoveHooks::NONE
    });

    // Pursuit: 2x against a target that is switching out
    registry[MoveId::Pursuit as usize] = Some(MoveHooks {
        on_base_power_condition: Some(pursuit_condition),
        conditional_multiplier: 2.0,
        ..MoveHooks::NONE
    });

    // =========================================================================
    // Variable Power Moves (Weight, HP)
    // =========================================================================

    registry[MoveId::Grassknot as usize] = Some(MoveHooks {
        on_modify_base_power: Some(grass_knot_power),
        ..MoveHooks::NONE
    });

    registry[MoveId::Heavyslam as usize] = Some(MoveHooks {
        on_modify_base_power: Some(heavy_slam_power),
        ..MoveHooks::NONE
    });

    registry[MoveId::Eruption as usize] = Some(MoveHooks {
        on_modify_base_power: Some(eruption_power),
        ..MoveHooks::NONE
    });

    registry
};
