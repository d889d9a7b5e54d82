//! Move hook type definitions.
//!
//! Hooks cover move-specific damage logic that the static data table
//! cannot express: conditional power boosts (Knock Off, Hex) and
//! variable power formulas (Grass Knot, Eruption).

use crate::damage::DamageContext;
use crate::state::State;

// ============================================================================
// Move Hook Type Definitions
// ============================================================================

/// Checked during base power calculation; when it returns true the
/// registered `conditional_multiplier` is applied.
pub type OnBasePowerCondition = fn(state: &State, ctx: &DamageContext) -> bool;

/// Replaces the base power outright. Used for weight- and HP-scaled
/// formulas where a flat multiplier is not enough.
pub type OnModifyBasePower = fn(state: &State, ctx: &DamageContext, bp: f32) -> f32;

// ============================================================================
// MoveHooks Struct
// ============================================================================

/// Hook table for moves with conditional damage behavior.
#[derive(Clone, Copy, Default)]
pub struct MoveHooks {
    /// Condition check for simple multiplier boosts
    pub on_base_power_condition: Option<OnBasePowerCondition>,

    /// Multiplier to apply when the condition is true
    pub conditional_multiplier: f32,

    /// Custom base power modification function
    pub on_modify_base_power: Option<OnModifyBasePower>,
}

impl MoveHooks {
    /// Empty hooks (default)
    pub const NONE: Self = Self {
        on_base_power_condition: None,
        conditional_multiplier: 1.0,
        on_modify_base_power: None,
    };
}
