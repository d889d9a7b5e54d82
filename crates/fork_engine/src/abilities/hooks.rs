use crate::damage::DamageContext;
use crate::instruction::Instruction;
use crate::moves::Move;
use crate::state::{SideReference, State};

/// Emits instructions when the owner switches in (weather setters, Intimidate).
pub type OnSwitchIn = fn(state: &State, side_ref: SideReference) -> Vec<Instruction>;

/// Branches produced when the owner is hit by a contact move. `side_ref` is
/// the ability owner (the defender); the attacker is the other side. Each
/// entry is (probability, instructions) and the probabilities sum to 1.0.
pub type OnContact = fn(state: &State, side_ref: SideReference) -> Vec<(f32, Vec<Instruction>)>;

/// Deterministic end-of-turn residual for the owner's side.
pub type EndOfTurn = fn(state: &State, side_ref: SideReference) -> Vec<Instruction>;

/// Fires when the owner's move faints the opposing active.
pub type OnKill = fn(state: &State, side_ref: SideReference) -> Vec<Instruction>;

/// Multiplier applied to the owner's effective speed.
pub type SpeedMultiplier = fn(state: &State, side_ref: SideReference) -> f32;

/// Additive priority adjustment for the owner's chosen move.
pub type PriorityModifier = fn(state: &State, side_ref: SideReference, mv: &Move) -> i8;

/// If the incoming move is absorbed, returns the replacement instructions
/// (possibly empty) instead of the normal damage path. `side_ref` is the
/// defender owning the ability.
pub type Absorb = fn(state: &State, side_ref: SideReference, ctx: &DamageContext) -> Option<Vec<Instruction>>;

/// Multiplier on outgoing damage when the owner is the attacker.
pub type OffenseMod = fn(state: &State, ctx: &DamageContext) -> f32;

/// Multiplier on incoming damage when the owner is the defender.
pub type DefenseMod = fn(state: &State, ctx: &DamageContext) -> f32;

/// Hook table for one ability. Registered per-id in `ABILITY_REGISTRY`.
#[derive(Clone, Copy)]
pub struct AbilityHooks {
    pub on_switch_in: Option<OnSwitchIn>,
    pub on_contact: Option<OnContact>,
    pub end_of_turn: Option<EndOfTurn>,
    pub on_kill: Option<OnKill>,
    pub speed_multiplier: Option<SpeedMultiplier>,
    pub priority_modifier: Option<PriorityModifier>,
    pub absorb: Option<Absorb>,
    pub offense_mod: Option<OffenseMod>,
    pub defense_mod: Option<DefenseMod>,
}

impl AbilityHooks {
    pub const NONE: AbilityHooks = AbilityHooks {
        on_switch_in: None,
        on_contact: None,
        end_of_turn: None,
        on_kill: None,
        speed_multiplier: None,
        priority_modifier: None,
        absorb: None,
        offense_mod: None,
        defense_mod: None,
    };
}
