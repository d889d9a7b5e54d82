//! Item hook implementations.

use crate::abilities::AbilityFlags;
use crate::damage::DamageContext;
use crate::instruction::{
    BoostInstruction, ChangeItemInstruction, ChangeStatusInstruction, DamageInstruction,
    HealInstruction, Instruction,
};
use crate::items::ItemId;
use crate::moves::MoveCategory;
use crate::state::{PokemonBoostableStat, PokemonStatus, SideReference, State, Terrain};
use crate::types::{type_effectiveness, PokemonType};

// Leftovers: restore 1/16 max HP at end of turn.
pub fn end_of_turn_leftovers(state: &State, side_ref: SideReference) -> Vec<Instruction> {
    let holder = state.get_side(side_ref).get_active();
    let heal = (holder.maxhp / 16).min(holder.maxhp - holder.hp);
    if heal == 0 {
        return Vec::new();
    }
    vec![Instruction::Heal(HealInstruction {
        side_ref,
        heal_amount: heal,
    })]
}

// Black Sludge: heals Poison types 1/16, hurts everyone else 1/8.
pub fn end_of_turn_black_sludge(state: &State, side_ref: SideReference) -> Vec<Instruction> {
    let holder = state.get_side(side_ref).get_active();
    if holder.has_type(PokemonType::Poison) {
        let heal = (holder.maxhp / 16).min(holder.maxhp - holder.hp);
        if heal == 0 {
            return Vec::new();
        }
        vec![Instruction::Heal(HealInstruction {
            side_ref,
            heal_amount: heal,
        })]
    } else {
        if holder.ability.has_flag(AbilityFlags::IMMUNE_INDIRECT) {
            return Vec::new();
        }
        vec![Instruction::Damage(DamageInstruction {
            side_ref,
            damage_amount: (holder.maxhp / 8).min(holder.hp),
        })]
    }
}

// Flame Orb: burns the holder at end of turn if it can be burned.
pub fn end_of_turn_flame_orb(state: &State, side_ref: SideReference) -> Vec<Instruction> {
    orb_status(state, side_ref, PokemonStatus::Burn)
}

// Toxic Orb: badly poisons the holder at end of turn.
pub fn end_of_turn_toxic_orb(state: &State, side_ref: SideReference) -> Vec<Instruction> {
    orb_status(state, side_ref, PokemonStatus::Toxic)
}

fn orb_status(state: &State, side_ref: SideReference, status: PokemonStatus) -> Vec<Instruction> {
    if state.immune_to_status(side_ref, status) {
        return Vec::new();
    }
    let side = state.get_side(side_ref);
    vec![Instruction::ChangeStatus(ChangeStatusInstruction {
        side_ref,
        pokemon_index: side.active_index,
        old_status: PokemonStatus::None,
        new_status: status,
    })]
}

// Rocky Helmet: attackers making contact lose 1/6 max HP.
pub fn on_contact_rocky_helmet(state: &State, side_ref: SideReference) -> Vec<Instruction> {
    let attacker_ref = side_ref.get_other_side();
    let attacker = state.get_side(attacker_ref).get_active();
    if attacker.ability.has_flag(AbilityFlags::IMMUNE_INDIRECT) || attacker.hp <= 0 {
        return Vec::new();
    }
    vec![Instruction::Damage(DamageInstruction {
        side_ref: attacker_ref,
        damage_amount: (attacker.maxhp / 6).min(attacker.hp),
    })]
}

// Choice Band: 1.5x physical damage.
pub fn damage_mod_choice_band(_state: &State, ctx: &DamageContext) -> f32 {
    if ctx.category == MoveCategory::Physical {
        1.5
    } else {
        1.0
    }
}

// Choice Specs: 1.5x special damage.
pub fn damage_mod_choice_specs(_state: &State, ctx: &DamageContext) -> f32 {
    if ctx.category == MoveCategory::Special {
        1.5
    } else {
        1.0
    }
}

// Life Orb: 1.3x damage on every damaging move.
pub fn damage_mod_life_orb(_state: &State, _ctx: &DamageContext) -> f32 {
    1.3
}

// Expert Belt: 1.2x on super effective hits.
pub fn damage_mod_expert_belt(state: &State, ctx: &DamageContext) -> f32 {
    let defender = state
        .get_side(ctx.attacking_side.get_other_side())
        .get_active();
    if type_effectiveness(ctx.move_type, &defender.current_types()) > 1.0 {
        1.2
    } else {
        1.0
    }
}

// Charcoal: 1.2x Fire moves.
pub fn damage_mod_charcoal(_state: &State, ctx: &DamageContext) -> f32 {
    if ctx.move_type == PokemonType::Fire {
        1.2
    } else {
        1.0
    }
}

// Mystic Water: 1.2x Water moves.
pub fn damage_mod_mystic_water(_state: &State, ctx: &DamageContext) -> f32 {
    if ctx.move_type == PokemonType::Water {
        1.2
    } else {
        1.0
    }
}

// Choice Scarf: 1.5x speed.
pub fn speed_multiplier_choice_scarf(_state: &State, _side_ref: SideReference) -> f32 {
    1.5
}

// Life Orb: holder loses 1/10 max HP after a damaging move lands.
pub fn after_move_hit_life_orb(state: &State, side_ref: SideReference) -> Vec<Instruction> {
    let holder = state.get_side(side_ref).get_active();
    if holder.ability.has_flag(AbilityFlags::IMMUNE_INDIRECT) || holder.hp <= 0 {
        return Vec::new();
    }
    vec![Instruction::Damage(DamageInstruction {
        side_ref,
        damage_amount: (holder.maxhp / 10).min(holder.hp),
    })]
}

// Electric Seed: +1 Defense on entering Electric Terrain, then consumed.
pub fn on_switch_in_electric_seed(state: &State, side_ref: SideReference) -> Vec<Instruction> {
    if state.terrain.terrain_type != Terrain::ElectricTerrain {
        return Vec::new();
    }
    let side = state.get_side(side_ref);
    let mut instructions = Vec::new();
    let raise = side.clamped_boost_delta(PokemonBoostableStat::Defense, 1);
    if raise != 0 {
        instructions.push(Instruction::Boost(BoostInstruction {
            side_ref,
            stat: PokemonBoostableStat::Defense,
            amount: raise,
        }));
    }
    instructions.push(Instruction::ChangeItem(ChangeItemInstruction {
        side_ref,
        new_item: ItemId::None,
        current_item: ItemId::Electricseed,
    }));
    instructions
}
