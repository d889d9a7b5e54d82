use crate::abilities::AbilityFlags;
use crate::instruction::{ChangeStatusInstruction, DamageInstruction, Instruction};
use crate::state::{PokemonStatus, SideReference, State};
use crate::types::PokemonType;

/// Shared branch shape for a single-status contact punishment. The owner is
/// the defender; the attacker is on the other side.
fn contact_status(
    state: &State,
    side_ref: SideReference,
    status: PokemonStatus,
    chance: f32,
) -> Vec<(f32, Vec<Instruction>)> {
    let attacker_ref = side_ref.get_other_side();
    if state.immune_to_status(attacker_ref, status) {
        return vec![(1.0, Vec::new())];
    }
    let attacker_side = state.get_side(attacker_ref);
    vec![
        (
            chance,
            vec![Instruction::ChangeStatus(ChangeStatusInstruction {
                side_ref: attacker_ref,
                pokemon_index: attacker_side.active_index,
                old_status: PokemonStatus::None,
                new_status: status,
            })],
        ),
        (1.0 - chance, Vec::new()),
    ]
}

pub fn static_(state: &State, side_ref: SideReference) -> Vec<(f32, Vec<Instruction>)> {
    contact_status(state, side_ref, PokemonStatus::Paralyze, 0.30)
}

pub fn flame_body(state: &State, side_ref: SideReference) -> Vec<(f32, Vec<Instruction>)> {
    contact_status(state, side_ref, PokemonStatus::Burn, 0.30)
}

/// 9% poison, 10% paralysis, 11% sleep. Branches whose status the attacker
/// is immune to collapse into the no-effect branch.
pub fn effect_spore(state: &State, side_ref: SideReference) -> Vec<(f32, Vec<Instruction>)> {
    let attacker_ref = side_ref.get_other_side();
    let attacker_side = state.get_side(attacker_ref);
    let attacker = attacker_side.get_active();
    if attacker.has_type(PokemonType::Grass) || attacker.ability.has_flag(AbilityFlags::IMMUNE_POWDER)
    {
        return vec![(1.0, Vec::new())];
    }

    let mut branches: Vec<(f32, Vec<Instruction>)> = Vec::new();
    let mut no_effect_chance = 0.70;
    for (chance, status) in [
        (0.09, PokemonStatus::Poison),
        (0.10, PokemonStatus::Paralyze),
        (0.11, PokemonStatus::Sleep),
    ] {
        if state.immune_to_status(attacker_ref, status) {
            no_effect_chance += chance;
        } else {
            branches.push((
                chance,
                vec![Instruction::ChangeStatus(ChangeStatusInstruction {
                    side_ref: attacker_ref,
                    pokemon_index: attacker_side.active_index,
                    old_status: PokemonStatus::None,
                    new_status: status,
                })],
            ));
        }
    }
    branches.push((no_effect_chance, Vec::new()));
    branches
}

/// Chip damage to the attacker, one eighth of its max HP.
fn contact_recoil(state: &State, side_ref: SideReference) -> Vec<(f32, Vec<Instruction>)> {
    let attacker_ref = side_ref.get_other_side();
    let attacker = state.get_side(attacker_ref).get_active();
    if attacker.ability.has_flag(AbilityFlags::IMMUNE_INDIRECT) || attacker.hp <= 0 {
        return vec![(1.0, Vec::new())];
    }
    vec![(
        1.0,
        vec![Instruction::Damage(DamageInstruction {
            side_ref: attacker_ref,
            damage_amount: (attacker.maxhp / 8).min(attacker.hp),
        })],
    )]
}

pub fn rough_skin(state: &State, side_ref: SideReference) -> Vec<(f32, Vec<Instruction>)> {
    contact_recoil(state, side_ref)
}

pub fn iron_barbs(state: &State, side_ref: SideReference) -> Vec<(f32, Vec<Instruction>)> {
    contact_recoil(state, side_ref)
}
