//! Atomic state mutations and the apply/reverse mutator.
//!
//! Every change the engine makes to a `State` is recorded as an
//! `Instruction`. Applying a list and then reversing it restores the
//! state bit-for-bit, which is what lets the generator walk a branch,
//! inspect the outcome and roll back without cloning the state.
//!
//! Instructions that overwrite a value (weather, terrain, item, types,
//! status) carry the previous value inline so reversal never has to
//! guess.

use serde::{Deserialize, Serialize};

use crate::abilities::AbilityId;
use crate::items::ItemId;
use crate::state::{
    PokemonIndex, PokemonMoveIndex, PokemonSideCondition, PokemonStatus, SideReference, State,
    Terrain, VolatileStatus, Weather,
};
use crate::types::PokemonType;

// ============================================================================
// Instruction Vocabulary
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DamageInstruction {
    pub side_ref: SideReference,
    pub damage_amount: i16,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealInstruction {
    pub side_ref: SideReference,
    pub heal_amount: i16,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DamageSubstituteInstruction {
    pub side_ref: SideReference,
    pub damage_amount: i16,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetSubstituteHealthInstruction {
    pub side_ref: SideReference,
    pub new_health: i16,
    pub old_health: i16,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwitchInstruction {
    pub side_ref: SideReference,
    pub previous_index: PokemonIndex,
    pub next_index: PokemonIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VolatileStatusInstruction {
    pub side_ref: SideReference,
    pub volatile_status: VolatileStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangeStatusInstruction {
    pub side_ref: SideReference,
    pub pokemon_index: PokemonIndex,
    pub old_status: PokemonStatus,
    pub new_status: PokemonStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoostInstruction {
    pub side_ref: SideReference,
    pub stat: crate::state::PokemonBoostableStat,
    /// Actual stage delta after clamping to [-6, +6] at computation time
    pub amount: i8,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangeSideConditionInstruction {
    pub side_ref: SideReference,
    pub side_condition: PokemonSideCondition,
    pub amount: i8,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangeWeatherInstruction {
    pub new_weather: Weather,
    pub new_weather_turns_remaining: i8,
    pub previous_weather: Weather,
    pub previous_weather_turns_remaining: i8,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangeTerrainInstruction {
    pub new_terrain: Terrain,
    pub new_terrain_turns_remaining: i8,
    pub previous_terrain: Terrain,
    pub previous_terrain_turns_remaining: i8,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangeTypeInstruction {
    pub side_ref: SideReference,
    pub new_types: [PokemonType; 2],
    pub old_types: [PokemonType; 2],
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangeItemInstruction {
    pub side_ref: SideReference,
    pub new_item: ItemId,
    pub current_item: ItemId,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangeStatsInstruction {
    pub side_ref: SideReference,
    /// [Atk, Def, SpA, SpD, Spe]
    pub new_stats: [i16; 5],
    pub old_stats: [i16; 5],
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveSlotInstruction {
    pub side_ref: SideReference,
    pub move_index: PokemonMoveIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecrementPPInstruction {
    pub side_ref: SideReference,
    pub move_index: PokemonMoveIndex,
    pub amount: i8,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToggleTerastallizedInstruction {
    pub side_ref: SideReference,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetFutureSightInstruction {
    pub side_ref: SideReference,
    pub pokemon_index: PokemonIndex,
    pub previous_index: PokemonIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetWishInstruction {
    pub side_ref: SideReference,
    pub health: i16,
    pub previous_health: i16,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SideReferenceInstruction {
    pub side_ref: SideReference,
}

/// One atomic, reversible state change.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Instruction {
    Damage(DamageInstruction),
    Heal(HealInstruction),
    DamageSubstitute(DamageSubstituteInstruction),
    SetSubstituteHealth(SetSubstituteHealthInstruction),
    Switch(SwitchInstruction),
    ApplyVolatileStatus(VolatileStatusInstruction),
    RemoveVolatileStatus(VolatileStatusInstruction),
    ChangeStatus(ChangeStatusInstruction),
    Boost(BoostInstruction),
    ChangeSideCondition(ChangeSideConditionInstruction),
    ChangeWeather(ChangeWeatherInstruction),
    ChangeTerrain(ChangeTerrainInstruction),
    ToggleTrickRoom,
    ChangeType(ChangeTypeInstruction),
    ChangeItem(ChangeItemInstruction),
    ChangeStats(ChangeStatsInstruction),
    EnableMove(MoveSlotInstruction),
    DisableMove(MoveSlotInstruction),
    DecrementPP(DecrementPPInstruction),
    ToggleTerastallized(ToggleTerastallizedInstruction),
    SetFutureSight(SetFutureSightInstruction),
    DecrementFutureSight(SideReferenceInstruction),
    SetWish(SetWishInstruction),
    DecrementWish(SideReferenceInstruction),
}

// ============================================================================
// Weighted Branches
// ============================================================================

/// One possible way the turn plays out: an ordered instruction list with
/// the probability of that line occurring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateInstructions {
    pub probability: f32,
    pub instruction_list: Vec<Instruction>,
    /// Set when an interrupting event (pivot switch with reserves ready,
    /// crash-move miss) means the rest of the turn should not be
    /// simulated from this branch.
    pub halted: bool,
}

impl Default for StateInstructions {
    fn default() -> Self {
        Self {
            probability: 1.0,
            instruction_list: Vec::new(),
            halted: false,
        }
    }
}

impl StateInstructions {
    pub fn new(probability: f32) -> Self {
        Self {
            probability,
            instruction_list: Vec::new(),
            halted: false,
        }
    }

    #[inline]
    pub fn halt(&mut self) {
        self.halted = true;
    }

    /// Apply an instruction to the state and record it in the log, so
    /// later steps of the same branch see its effect.
    #[inline]
    pub fn push_and_apply(&mut self, state: &mut State, instruction: Instruction) {
        state.apply_one(&instruction);
        self.instruction_list.push(instruction);
    }

    /// Record a batch produced by a hook, applying each in order.
    pub fn extend_and_apply(&mut self, state: &mut State, instructions: Vec<Instruction>) {
        for instruction in instructions {
            self.push_and_apply(state, instruction);
        }
    }
}

// ============================================================================
// Mutator
// ============================================================================

/// Documented layer caps for hazard side conditions. Anything not listed
/// is bounded by generation logic, not by the mutator.
fn side_condition_cap(condition: PokemonSideCondition) -> i8 {
    match condition {
        PokemonSideCondition::Spikes => 3,
        PokemonSideCondition::ToxicSpikes => 2,
        PokemonSideCondition::StealthRock => 1,
        PokemonSideCondition::StickyWeb => 1,
        _ => i8::MAX,
    }
}

impl State {
    /// Replay a full instruction list in order.
    pub fn apply_instructions(&mut self, instructions: &[Instruction]) {
        for instruction in instructions {
            self.apply_one(instruction);
        }
    }

    /// Undo a full instruction list in reverse order.
    pub fn reverse_instructions(&mut self, instructions: &[Instruction]) {
        for instruction in instructions.iter().rev() {
            self.reverse_one(instruction);
        }
    }

    pub fn apply_one(&mut self, instruction: &Instruction) {
        match instruction {
            Instruction::Damage(i) => {
                let active = self.get_side_mut(i.side_ref).get_active_mut();
                let maxhp = active.maxhp;
                active.hp = (active.hp - i.damage_amount).clamp(0, maxhp);
            }
            Instruction::Heal(i) => {
                let active = self.get_side_mut(i.side_ref).get_active_mut();
                let maxhp = active.maxhp;
                active.hp = (active.hp + i.heal_amount).clamp(0, maxhp);
            }
            Instruction::DamageSubstitute(i) => {
                let side = self.get_side_mut(i.side_ref);
                side.substitute_health -= i.damage_amount;
            }
            Instruction::SetSubstituteHealth(i) => {
                self.get_side_mut(i.side_ref).substitute_health = i.new_health;
            }
            Instruction::Switch(i) => {
                self.get_side_mut(i.side_ref).active_index = i.next_index;
            }
            Instruction::ApplyVolatileStatus(i) => {
                self.get_side_mut(i.side_ref)
                    .volatile_statuses
                    .insert(i.volatile_status);
            }
            Instruction::RemoveVolatileStatus(i) => {
                self.get_side_mut(i.side_ref)
                    .volatile_statuses
                    .remove(i.volatile_status);
            }
            Instruction::ChangeStatus(i) => {
                self.get_side_mut(i.side_ref).pokemon[i.pokemon_index as usize].status =
                    i.new_status;
            }
            Instruction::Boost(i) => {
                let boost = self.get_side_mut(i.side_ref).get_boost_mut(i.stat);
                *boost = (*boost + i.amount).clamp(-6, 6);
            }
            Instruction::ChangeSideCondition(i) => {
                let side = self.get_side_mut(i.side_ref);
                let current = side.side_conditions.get(i.side_condition);
                let next = (current + i.amount).clamp(0, side_condition_cap(i.side_condition));
                side.side_conditions
                    .update(i.side_condition, next - current);
            }
            Instruction::ChangeWeather(i) => {
                self.weather.weather_type = i.new_weather;
                self.weather.turns_remaining = i.new_weather_turns_remaining;
            }
            Instruction::ChangeTerrain(i) => {
                self.terrain.terrain_type = i.new_terrain;
                self.terrain.turns_remaining = i.new_terrain_turns_remaining;
            }
            Instruction::ToggleTrickRoom => {
                self.trick_room = !self.trick_room;
            }
            Instruction::ChangeType(i) => {
                self.get_side_mut(i.side_ref).get_active_mut().types = i.new_types;
            }
            Instruction::ChangeItem(i) => {
                self.get_side_mut(i.side_ref).get_active_mut().item = i.new_item;
            }
            Instruction::ChangeStats(i) => {
                let active = self.get_side_mut(i.side_ref).get_active_mut();
                active.attack = i.new_stats[0];
                active.defense = i.new_stats[1];
                active.special_attack = i.new_stats[2];
                active.special_defense = i.new_stats[3];
                active.speed = i.new_stats[4];
            }
            Instruction::EnableMove(i) => {
                self.get_side_mut(i.side_ref).get_active_mut().moves[i.move_index as usize]
                    .disabled = false;
            }
            Instruction::DisableMove(i) => {
                self.get_side_mut(i.side_ref).get_active_mut().moves[i.move_index as usize]
                    .disabled = true;
            }
            Instruction::DecrementPP(i) => {
                self.get_side_mut(i.side_ref).get_active_mut().moves[i.move_index as usize].pp -=
                    i.amount;
            }
            Instruction::ToggleTerastallized(i) => {
                let side = self.get_side_mut(i.side_ref);
                side.used_tera = !side.used_tera;
                let active = side.get_active_mut();
                active.terastallized = !active.terastallized;
            }
            Instruction::SetFutureSight(i) => {
                self.get_side_mut(i.side_ref).future_sight = (3, i.pokemon_index);
            }
            Instruction::DecrementFutureSight(i) => {
                self.get_side_mut(i.side_ref).future_sight.0 -= 1;
            }
            Instruction::SetWish(i) => {
                self.get_side_mut(i.side_ref).wish = (2, i.health);
            }
            Instruction::DecrementWish(i) => {
                self.get_side_mut(i.side_ref).wish.0 -= 1;
            }
        }
    }

    pub fn reverse_one(&mut self, instruction: &Instruction) {
        match instruction {
            Instruction::Damage(i) => {
                let active = self.get_side_mut(i.side_ref).get_active_mut();
                let maxhp = active.maxhp;
                active.hp = (active.hp + i.damage_amount).clamp(0, maxhp);
            }
            Instruction::Heal(i) => {
                let active = self.get_side_mut(i.side_ref).get_active_mut();
                let maxhp = active.maxhp;
                active.hp = (active.hp - i.heal_amount).clamp(0, maxhp);
            }
            Instruction::DamageSubstitute(i) => {
                let side = self.get_side_mut(i.side_ref);
                side.substitute_health += i.damage_amount;
            }
            Instruction::SetSubstituteHealth(i) => {
                self.get_side_mut(i.side_ref).substitute_health = i.old_health;
            }
            Instruction::Switch(i) => {
                self.get_side_mut(i.side_ref).active_index = i.previous_index;
            }
            Instruction::ApplyVolatileStatus(i) => {
                self.get_side_mut(i.side_ref)
                    .volatile_statuses
                    .remove(i.volatile_status);
            }
            Instruction::RemoveVolatileStatus(i) => {
                self.get_side_mut(i.side_ref)
                    .volatile_statuses
                    .insert(i.volatile_status);
            }
            Instruction::ChangeStatus(i) => {
                self.get_side_mut(i.side_ref).pokemon[i.pokemon_index as usize].status =
                    i.old_status;
            }
            Instruction::Boost(i) => {
                let boost = self.get_side_mut(i.side_ref).get_boost_mut(i.stat);
                *boost = (*boost - i.amount).clamp(-6, 6);
            }
            Instruction::ChangeSideCondition(i) => {
                let side = self.get_side_mut(i.side_ref);
                let current = side.side_conditions.get(i.side_condition);
                let next = (current - i.amount).clamp(0, side_condition_cap(i.side_condition));
                side.side_conditions
                    .update(i.side_condition, next - current);
            }
            Instruction::ChangeWeather(i) => {
                self.weather.weather_type = i.previous_weather;
                self.weather.turns_remaining = i.previous_weather_turns_remaining;
            }
            Instruction::ChangeTerrain(i) => {
                self.terrain.terrain_type = i.previous_terrain;
                self.terrain.turns_remaining = i.previous_terrain_turns_remaining;
            }
            Instruction::ToggleTrickRoom => {
                self.trick_room = !self.trick_room;
            }
            Instruction::ChangeType(i) => {
                self.get_side_mut(i.side_ref).get_active_mut().types = i.old_types;
            }
            Instruction::ChangeItem(i) => {
                self.get_side_mut(i.side_ref).get_active_mut().item = i.current_item;
            }
            Instruction::ChangeStats(i) => {
                let active = self.get_side_mut(i.side_ref).get_active_mut();
                active.attack = i.old_stats[0];
                active.defense = i.old_stats[1];
                active.special_attack = i.old_stats[2];
                active.special_defense = i.old_stats[3];
                active.speed = i.old_stats[4];
            }
            Instruction::EnableMove(i) => {
                self.get_side_mut(i.side_ref).get_active_mut().moves[i.move_index as usize]
                    .disabled = true;
            }
            Instruction::DisableMove(i) => {
                self.get_side_mut(i.side_ref).get_active_mut().moves[i.move_index as usize]
                    .disabled = false;
            }
            Instruction::DecrementPP(i) => {
                self.get_side_mut(i.side_ref).get_active_mut().moves[i.move_index as usize].pp +=
                    i.amount;
            }
            Instruction::ToggleTerastallized(i) => {
                let side = self.get_side_mut(i.side_ref);
                side.used_tera = !side.used_tera;
                let active = side.get_active_mut();
                active.terastallized = !active.terastallized;
            }
            Instruction::SetFutureSight(i) => {
                self.get_side_mut(i.side_ref).future_sight = (0, i.previous_index);
            }
            Instruction::DecrementFutureSight(i) => {
                self.get_side_mut(i.side_ref).future_sight.0 += 1;
            }
            Instruction::SetWish(i) => {
                self.get_side_mut(i.side_ref).wish = (0, i.previous_health);
            }
            Instruction::DecrementWish(i) => {
                self.get_side_mut(i.side_ref).wish.0 += 1;
            }
        }
    }
}
