use crate::damage::DamageContext;
use crate::instruction::{HealInstruction, Instruction};
use crate::state::{SideReference, State};
use crate::types::PokemonType;

/// Absorbing an attack of the keyed type heals a quarter of max HP. At full
/// HP the move still fizzles, just without a heal instruction.
fn absorb_and_heal(
    state: &State,
    side_ref: SideReference,
    ctx: &DamageContext,
    absorbed_type: PokemonType,
) -> Option<Vec<Instruction>> {
    if ctx.move_type != absorbed_type {
        return None;
    }
    let owner = state.get_side(side_ref).get_active();
    let heal = (owner.maxhp / 4).min(owner.maxhp - owner.hp);
    if heal > 0 {
        Some(vec![Instruction::Heal(HealInstruction {
            side_ref,
            heal_amount: heal,
        })])
    } else {
        Some(Vec::new())
    }
}

pub fn volt_absorb(
    state: &State,
    side_ref: SideReference,
    ctx: &DamageContext,
) -> Option<Vec<Instruction>> {
    absorb_and_heal(state, side_ref, ctx, PokemonType::Electric)
}

pub fn water_absorb(
    state: &State,
    side_ref: SideReference,
    ctx: &DamageContext,
) -> Option<Vec<Instruction>> {
    absorb_and_heal(state, side_ref, ctx, PokemonType::Water)
}

/// Nullifies Fire moves outright.
pub fn flash_fire(
    _state: &State,
    _side_ref: SideReference,
    ctx: &DamageContext,
) -> Option<Vec<Instruction>> {
    if ctx.move_type == PokemonType::Fire {
        Some(Vec::new())
    } else {
        None
    }
}
