use crate::damage::DamageContext;
use crate::instruction::Instruction;
use crate::state::{SideReference, State};

/// Fires when the holder switches in (terrain seeds).
pub type OnSwitchIn = fn(state: &State, side_ref: SideReference) -> Vec<Instruction>;

/// Fires when the holder is hit by a contact move. Deterministic, unlike
/// ability contact effects.
pub type OnContact = fn(state: &State, side_ref: SideReference) -> Vec<Instruction>;

/// Residual effect for the holder at end of turn.
pub type EndOfTurn = fn(state: &State, side_ref: SideReference) -> Vec<Instruction>;

/// Multiplier on the holder's outgoing damage.
pub type DamageMod = fn(state: &State, ctx: &DamageContext) -> f32;

/// Multiplier on the holder's effective speed.
pub type SpeedMultiplier = fn(state: &State, side_ref: SideReference) -> f32;

/// Fires after the holder's damaging move has landed (recoil items).
pub type AfterMoveHit = fn(state: &State, side_ref: SideReference) -> Vec<Instruction>;

/// Hook table for one item. Registered per-id in `ITEM_REGISTRY`.
#[derive(Clone, Copy)]
pub struct ItemHooks {
    pub on_switch_in: Option<OnSwitchIn>,
    pub on_contact: Option<OnContact>,
    pub end_of_turn: Option<EndOfTurn>,
    pub damage_mod: Option<DamageMod>,
    pub speed_multiplier: Option<SpeedMultiplier>,
    pub after_move_hit: Option<AfterMoveHit>,
}

impl ItemHooks {
    pub const NONE: ItemHooks = ItemHooks {
        on_switch_in: None,
        on_contact: None,
        end_of_turn: None,
        damage_mod: None,
        speed_multiplier: None,
        after_move_hit: None,
    };
}
