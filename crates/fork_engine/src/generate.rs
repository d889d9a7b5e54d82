//! Branching turn resolution.
//!
//! `generate_instructions_from_move_pair` is the engine's entry point: given
//! both sides' chosen actions it produces every way the turn can play out,
//! as probability-weighted instruction lists. Chance events fork the current
//! branch; each fork applies its instructions to the state so later steps
//! see their effects, then unwinds to the fork point before the next arm.
//! A branch that transfers control back to the caller mid-turn (a pivot
//! move, a crash-move miss) is marked `halted` and skips both the remaining
//! action and the end-of-turn phase.

use crate::abilities::{ability_hooks, AbilityFlags, AbilityId};
use crate::damage::special::fixed_damage;
use crate::damage::{calculate_damage, damage_rolls, get_base_damage, DamageContext, DamageRolls};
use crate::end_of_turn::add_end_of_turn_instructions;
use crate::instruction::{
    BoostInstruction, ChangeItemInstruction, ChangeSideConditionInstruction,
    ChangeStatusInstruction, ChangeTypeInstruction, ChangeWeatherInstruction,
    ChangeTerrainInstruction, DamageInstruction, DamageSubstituteInstruction, HealInstruction,
    Instruction, MoveSlotInstruction, SetFutureSightInstruction, SetSubstituteHealthInstruction,
    SetWishInstruction, StateInstructions, SwitchInstruction, ToggleTerastallizedInstruction,
    VolatileStatusInstruction,
};
use crate::items::{item_hooks, ItemFlags, ItemId};
use crate::moves::{
    Move, MoveCategory, MoveChoice, MoveFlags, MoveId, MoveTarget, Secondary, SecondaryEffect,
    StatChanges, StatusEffect, VolatileEffect,
};
use crate::state::{
    accuracy_stage_multiplier, PokemonBoostableStat, PokemonIndex, PokemonMoveIndex,
    PokemonSideCondition, PokemonStatus, SideReference, State, Terrain, VolatileStatus, Weather,
};
use crate::turn_order::first_to_move;
use crate::types::{type_effectiveness, PokemonType};

const WAKE_CHANCE: f32 = 0.33;
const THAW_CHANCE: f32 = 0.20;
const FULL_PARALYSIS_CHANCE: f32 = 0.25;
const CONFUSION_SELF_HIT_CHANCE: f32 = 1.0 / 3.0;
const CONFUSION_SELF_HIT_POWER: u32 = 40;
const AVERAGE_ROLL: f32 = 0.925;
const SET_WEATHER_TURNS: i8 = 5;
const SET_TERRAIN_TURNS: i8 = 5;
const TAILWIND_TURNS: i8 = 4;

const SIDES: [SideReference; 2] = [SideReference::SideOne, SideReference::SideTwo];

const BOOSTABLE_STATS: [PokemonBoostableStat; 7] = [
    PokemonBoostableStat::Attack,
    PokemonBoostableStat::Defense,
    PokemonBoostableStat::SpecialAttack,
    PokemonBoostableStat::SpecialDefense,
    PokemonBoostableStat::Speed,
    PokemonBoostableStat::Accuracy,
    PokemonBoostableStat::Evasion,
];

const HAZARDS: [PokemonSideCondition; 4] = [
    PokemonSideCondition::Spikes,
    PokemonSideCondition::ToxicSpikes,
    PokemonSideCondition::StealthRock,
    PokemonSideCondition::StickyWeb,
];

/// Everything a move resolution step needs to know about the attack in
/// flight. Built once per move action and threaded through the pipeline.
struct MoveContext {
    attacking_side: SideReference,
    slot: PokemonMoveIndex,
    move_id: MoveId,
    mv: &'static Move,
    damage: DamageContext,
    opponent_attacking: bool,
    policy: DamageRolls,
}

impl MoveContext {
    #[inline]
    fn defending_side(&self) -> SideReference {
        self.attacking_side.get_other_side()
    }

    #[inline]
    fn first_move(&self) -> bool {
        self.damage.first_move
    }
}

// ============================================================================
// Fork bookkeeping
// ============================================================================

/// Where to rewind the working branch after exploring one arm of a fork.
#[derive(Clone, Copy)]
struct Checkpoint {
    len: usize,
    probability: f32,
}

fn checkpoint(branch: &StateInstructions) -> Checkpoint {
    Checkpoint {
        len: branch.instruction_list.len(),
        probability: branch.probability,
    }
}

/// Undo every instruction recorded past the checkpoint and restore the
/// branch's probability and halt flag to their values at that point.
fn restore(state: &mut State, branch: &mut StateInstructions, cp: Checkpoint) {
    while branch.instruction_list.len() > cp.len {
        if let Some(instruction) = branch.instruction_list.pop() {
            state.reverse_one(&instruction);
        }
    }
    branch.probability = cp.probability;
    branch.halted = false;
}

// ============================================================================
// Turn entry
// ============================================================================

/// Resolve one full turn from a pair of chosen actions.
///
/// Returns the exhaustive set of weighted outcome branches, deduplicated by
/// instruction-list equality. The state is returned exactly as it was
/// passed in; every exploration is unwound before this returns.
pub fn generate_instructions_from_move_pair(
    state: &mut State,
    side_one_choice: &MoveChoice,
    side_two_choice: &MoveChoice,
    policy: DamageRolls,
) -> Vec<StateInstructions> {
    let starting_indices = [state.side_one.active_index, state.side_two.active_index];

    let first = resolve_acting_order(state, side_one_choice, side_two_choice);
    let second = first.get_other_side();
    let (first_choice, second_choice) = match first {
        SideReference::SideOne => (side_one_choice, side_two_choice),
        SideReference::SideTwo => (side_two_choice, side_one_choice),
    };

    let opening = run_action(
        state,
        first,
        first_choice,
        second_choice,
        true,
        StateInstructions::default(),
        policy,
    );

    // The second action is skipped in any branch where its combatant went
    // down or was dragged out before getting to act.
    let mut resolved: Vec<StateInstructions> = Vec::with_capacity(opening.len());
    for branch in opening {
        if branch.halted {
            resolved.push(branch);
            continue;
        }
        state.apply_instructions(&branch.instruction_list);
        let skip_second = {
            let side = state.get_side(second);
            !side.get_active().is_alive() || side.active_index != starting_indices[second as usize]
        };
        state.reverse_instructions(&branch.instruction_list);

        if skip_second {
            resolved.push(branch);
        } else {
            resolved.extend(run_action(
                state,
                second,
                second_choice,
                first_choice,
                false,
                branch,
                policy,
            ));
        }
    }

    let mut finished: Vec<StateInstructions> = Vec::with_capacity(resolved.len());
    for mut branch in resolved {
        if !branch.halted {
            state.apply_instructions(&branch.instruction_list);
            add_end_of_turn_instructions(state, &mut branch);
            state.reverse_instructions(&branch.instruction_list);
        }
        finished.push(branch);
    }

    merge_duplicate_branches(&mut finished);
    finished
}

// ============================================================================
// Acting order
// ============================================================================

/// Pursuit intercepts a fleeing target before the switch resolves; otherwise
/// ordering is priority, then effective speed.
fn resolve_acting_order(
    state: &State,
    side_one_choice: &MoveChoice,
    side_two_choice: &MoveChoice,
) -> SideReference {
    if chose_pursuit(state, SideReference::SideOne, side_one_choice) && side_two_choice.is_switch()
    {
        return SideReference::SideOne;
    }
    if chose_pursuit(state, SideReference::SideTwo, side_two_choice) && side_one_choice.is_switch()
    {
        return SideReference::SideTwo;
    }
    first_to_move(state, side_one_choice, side_two_choice)
}

fn chose_pursuit(state: &State, side_ref: SideReference, choice: &MoveChoice) -> bool {
    choice.move_index().map_or(false, |slot| {
        state.get_side(side_ref).get_active().moves[slot as usize].id == MoveId::Pursuit
    })
}

fn run_action(
    state: &mut State,
    acting_side: SideReference,
    choice: &MoveChoice,
    opponent_choice: &MoveChoice,
    first_move: bool,
    incoming: StateInstructions,
    policy: DamageRolls,
) -> Vec<StateInstructions> {
    match choice {
        MoveChoice::None => vec![incoming],
        MoveChoice::Switch(target) => {
            let mut branch = incoming;
            state.apply_instructions(&branch.instruction_list);
            generate_switch_instructions(state, &mut branch, acting_side, *target);
            state.reverse_instructions(&branch.instruction_list);
            vec![branch]
        }
        MoveChoice::Move(slot) | MoveChoice::MoveTera(slot) => run_move(
            state,
            acting_side,
            *slot,
            choice.is_tera(),
            opponent_choice,
            first_move,
            incoming,
            policy,
        ),
    }
}

// ============================================================================
// Switching
// ============================================================================

/// Append the full switch sequence: outgoing bookkeeping, the switch itself,
/// then entry hazards and switch-in triggers for the replacement.
fn generate_switch_instructions(
    state: &mut State,
    branch: &mut StateInstructions,
    side_ref: SideReference,
    next_index: PokemonIndex,
) {
    let previous_index = state.get_side(side_ref).active_index;

    let (outgoing_alive, outgoing_ability, outgoing_status, outgoing_hp, outgoing_maxhp) = {
        let outgoing = state.get_side(side_ref).get_active();
        (
            outgoing.is_alive(),
            outgoing.ability,
            outgoing.status,
            outgoing.hp,
            outgoing.maxhp,
        )
    };

    if outgoing_alive {
        if outgoing_ability == AbilityId::Naturalcure && outgoing_status != PokemonStatus::None {
            branch.push_and_apply(
                state,
                Instruction::ChangeStatus(ChangeStatusInstruction {
                    side_ref,
                    pokemon_index: previous_index,
                    old_status: outgoing_status,
                    new_status: PokemonStatus::None,
                }),
            );
        }
        if outgoing_ability == AbilityId::Regenerator && outgoing_hp < outgoing_maxhp {
            let heal_amount = (outgoing_maxhp / 3).min(outgoing_maxhp - outgoing_hp);
            branch.push_and_apply(
                state,
                Instruction::Heal(HealInstruction {
                    side_ref,
                    heal_amount,
                }),
            );
        }
    }

    // Choice locks wear off once the holder leaves the field.
    let locked_slots: Vec<PokemonMoveIndex> = {
        let active = state.get_side(side_ref).get_active();
        PokemonMoveIndex::ALL
            .into_iter()
            .filter(|slot| {
                let move_slot = &active.moves[*slot as usize];
                move_slot.disabled && move_slot.id != MoveId::None
            })
            .collect()
    };
    for move_index in locked_slots {
        branch.push_and_apply(
            state,
            Instruction::EnableMove(MoveSlotInstruction {
                side_ref,
                move_index,
            }),
        );
    }

    // Stat stages do not follow the combatant out.
    for stat in BOOSTABLE_STATS {
        let boost = state.get_side(side_ref).get_boost(stat);
        if boost != 0 {
            branch.push_and_apply(
                state,
                Instruction::Boost(BoostInstruction {
                    side_ref,
                    stat,
                    amount: -boost,
                }),
            );
        }
    }

    // Protean typing reverts to the dex entry on the way out.
    if state
        .get_side(side_ref)
        .volatile_statuses
        .contains(VolatileStatus::TYPE_CHANGE)
    {
        let (old_types, new_types) = {
            let active = state.get_side(side_ref).get_active();
            (active.types, active.id.data().types)
        };
        if old_types != new_types {
            branch.push_and_apply(
                state,
                Instruction::ChangeType(ChangeTypeInstruction {
                    side_ref,
                    new_types,
                    old_types,
                }),
            );
        }
    }

    let volatiles = state.get_side(side_ref).volatile_statuses;
    for volatile_status in volatiles.iter() {
        branch.push_and_apply(
            state,
            Instruction::RemoveVolatileStatus(VolatileStatusInstruction {
                side_ref,
                volatile_status,
            }),
        );
    }
    let substitute_health = state.get_side(side_ref).substitute_health;
    if substitute_health > 0 {
        branch.push_and_apply(
            state,
            Instruction::SetSubstituteHealth(SetSubstituteHealthInstruction {
                side_ref,
                new_health: 0,
                old_health: substitute_health,
            }),
        );
    }

    let toxic_count = state.get_side(side_ref).side_conditions.toxic_count;
    if toxic_count > 0 {
        branch.push_and_apply(
            state,
            Instruction::ChangeSideCondition(ChangeSideConditionInstruction {
                side_ref,
                side_condition: PokemonSideCondition::ToxicCount,
                amount: -toxic_count,
            }),
        );
    }

    branch.push_and_apply(
        state,
        Instruction::Switch(SwitchInstruction {
            side_ref,
            previous_index,
            next_index,
        }),
    );

    switch_in_effects(state, branch, side_ref);
}

/// Entry hazards in their fixed order, then ability and item triggers.
/// Each hazard re-checks that the newcomer is still standing.
fn switch_in_effects(state: &mut State, branch: &mut StateInstructions, side_ref: SideReference) {
    let hazard_immune = state
        .get_side(side_ref)
        .get_active()
        .item
        .has_flag(ItemFlags::HAZARD_IMMUNE);

    if !hazard_immune {
        if state.get_side(side_ref).side_conditions.stealth_rock > 0 {
            let damage_amount = {
                let active = state.get_side(side_ref).get_active();
                if active.ability.has_flag(AbilityFlags::IMMUNE_INDIRECT) {
                    0
                } else {
                    let effectiveness =
                        type_effectiveness(PokemonType::Rock, &active.current_types());
                    ((active.maxhp as f32 * effectiveness / 8.0) as i16).min(active.hp)
                }
            };
            if damage_amount > 0 {
                branch.push_and_apply(
                    state,
                    Instruction::Damage(DamageInstruction {
                        side_ref,
                        damage_amount,
                    }),
                );
            }
        }
        if !state.get_side(side_ref).get_active().is_alive() {
            return;
        }

        let spikes = state.get_side(side_ref).side_conditions.spikes;
        if spikes > 0 && state.get_side(side_ref).active_is_grounded() {
            let damage_amount = {
                let active = state.get_side(side_ref).get_active();
                if active.ability.has_flag(AbilityFlags::IMMUNE_INDIRECT) {
                    0
                } else {
                    let divisor = match spikes {
                        1 => 8,
                        2 => 6,
                        _ => 4,
                    };
                    (active.maxhp / divisor).min(active.hp)
                }
            };
            if damage_amount > 0 {
                branch.push_and_apply(
                    state,
                    Instruction::Damage(DamageInstruction {
                        side_ref,
                        damage_amount,
                    }),
                );
            }
        }
        if !state.get_side(side_ref).get_active().is_alive() {
            return;
        }

        if state.get_side(side_ref).side_conditions.sticky_web > 0
            && state.get_side(side_ref).active_is_grounded()
        {
            let ability = state.get_side(side_ref).get_active().ability;
            if !ability.has_flag(AbilityFlags::BLOCKS_STAT_DROPS) {
                let delta = state
                    .get_side(side_ref)
                    .clamped_boost_delta(PokemonBoostableStat::Speed, -1);
                if delta != 0 {
                    branch.push_and_apply(
                        state,
                        Instruction::Boost(BoostInstruction {
                            side_ref,
                            stat: PokemonBoostableStat::Speed,
                            amount: delta,
                        }),
                    );
                }
                if ability.has_flag(AbilityFlags::PUNISHES_STAT_DROPS) {
                    let rise = state
                        .get_side(side_ref)
                        .clamped_boost_delta(PokemonBoostableStat::Attack, 2);
                    if rise != 0 {
                        branch.push_and_apply(
                            state,
                            Instruction::Boost(BoostInstruction {
                                side_ref,
                                stat: PokemonBoostableStat::Attack,
                                amount: rise,
                            }),
                        );
                    }
                }
            }
        }

        let layers = state.get_side(side_ref).side_conditions.toxic_spikes;
        if layers > 0 && state.get_side(side_ref).active_is_grounded() {
            if state
                .get_side(side_ref)
                .get_active()
                .has_type(PokemonType::Poison)
            {
                // A grounded poison type soaks the spikes up.
                branch.push_and_apply(
                    state,
                    Instruction::ChangeSideCondition(ChangeSideConditionInstruction {
                        side_ref,
                        side_condition: PokemonSideCondition::ToxicSpikes,
                        amount: -layers,
                    }),
                );
            } else {
                let status = if layers >= 2 {
                    PokemonStatus::Toxic
                } else {
                    PokemonStatus::Poison
                };
                if !state.immune_to_status(side_ref, status) {
                    let pokemon_index = state.get_side(side_ref).active_index;
                    branch.push_and_apply(
                        state,
                        Instruction::ChangeStatus(ChangeStatusInstruction {
                            side_ref,
                            pokemon_index,
                            old_status: PokemonStatus::None,
                            new_status: status,
                        }),
                    );
                }
            }
        }
    }

    if !state.get_side(side_ref).get_active().is_alive() {
        return;
    }

    let ability = state.get_side(side_ref).get_active().ability;
    if let Some(hook) = ability_hooks(ability).and_then(|hooks| hooks.on_switch_in) {
        let instructions = hook(state, side_ref);
        branch.extend_and_apply(state, instructions);
    }

    let item = state.get_side(side_ref).get_active().item;
    if let Some(hook) = item_hooks(item).and_then(|hooks| hooks.on_switch_in) {
        let instructions = hook(state, side_ref);
        branch.extend_and_apply(state, instructions);
    }
}

// ============================================================================
// Move resolution
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn run_move(
    state: &mut State,
    attacking_side: SideReference,
    slot: PokemonMoveIndex,
    terastallize: bool,
    opponent_choice: &MoveChoice,
    first_move: bool,
    incoming: StateInstructions,
    policy: DamageRolls,
) -> Vec<StateInstructions> {
    let mut branch = incoming;
    let mut out: Vec<StateInstructions> = Vec::new();
    state.apply_instructions(&branch.instruction_list);

    if !state.get_side(attacking_side).get_active().is_alive() {
        state.reverse_instructions(&branch.instruction_list);
        out.push(branch);
        return out;
    }

    if terastallize {
        let side = state.get_side(attacking_side);
        if !side.used_tera && !side.get_active().terastallized {
            branch.push_and_apply(
                state,
                Instruction::ToggleTerastallized(ToggleTerastallizedInstruction {
                    side_ref: attacking_side,
                }),
            );
        }
    }

    let move_id = state.get_side(attacking_side).get_active().moves[slot as usize].id;
    let opponent_attacking = match opponent_choice {
        MoveChoice::Move(opponent_slot) | MoveChoice::MoveTera(opponent_slot) => {
            let opponent = state.get_side(attacking_side.get_other_side()).get_active();
            opponent.moves[*opponent_slot as usize].id.data().category != MoveCategory::Status
        }
        _ => false,
    };
    let ctx = MoveContext {
        attacking_side,
        slot,
        move_id,
        mv: move_id.data(),
        damage: DamageContext::new(
            attacking_side,
            move_id,
            first_move,
            opponent_choice.is_switch(),
        ),
        opponent_attacking,
        policy,
    };

    // Committing to a move with a choice item locks the other slots. The
    // lock lands even if the move is then interrupted or misses.
    choice_lock(state, &ctx, &mut branch);

    before_move(state, &ctx, &mut branch, &mut out);

    state.reverse_instructions(&branch.instruction_list);
    out
}

fn choice_lock(state: &mut State, ctx: &MoveContext, branch: &mut StateInstructions) {
    let lockable: Vec<PokemonMoveIndex> = {
        let active = state.get_side(ctx.attacking_side).get_active();
        if !active.item.has_flag(ItemFlags::CHOICE_LOCK) {
            return;
        }
        PokemonMoveIndex::ALL
            .into_iter()
            .filter(|slot| {
                let move_slot = &active.moves[*slot as usize];
                *slot != ctx.slot && move_slot.id != MoveId::None && !move_slot.disabled
            })
            .collect()
    };
    for move_index in lockable {
        branch.push_and_apply(
            state,
            Instruction::DisableMove(MoveSlotInstruction {
                side_ref: ctx.attacking_side,
                move_index,
            }),
        );
    }
}

/// Pre-move interruption gauntlet: flinch, then the major status, then
/// confusion, then taunt. Each stop is a terminal branch; surviving all of
/// them reaches `execute_move`.
fn before_move(
    state: &mut State,
    ctx: &MoveContext,
    branch: &mut StateInstructions,
    out: &mut Vec<StateInstructions>,
) {
    if state
        .get_side(ctx.attacking_side)
        .volatile_statuses
        .contains(VolatileStatus::FLINCH)
    {
        // The flinch volatile is cleared in end-of-turn bookkeeping.
        out.push(branch.clone());
        return;
    }

    let status = state.get_side(ctx.attacking_side).get_active().status;
    match status {
        PokemonStatus::Sleep => {
            let cp = checkpoint(branch);
            branch.probability *= 1.0 - WAKE_CHANCE;
            out.push(branch.clone());
            restore(state, branch, cp);

            branch.probability *= WAKE_CHANCE;
            let pokemon_index = state.get_side(ctx.attacking_side).active_index;
            branch.push_and_apply(
                state,
                Instruction::ChangeStatus(ChangeStatusInstruction {
                    side_ref: ctx.attacking_side,
                    pokemon_index,
                    old_status: PokemonStatus::Sleep,
                    new_status: PokemonStatus::None,
                }),
            );
            check_confusion(state, ctx, branch, out);
            restore(state, branch, cp);
        }
        PokemonStatus::Freeze => {
            let cp = checkpoint(branch);
            branch.probability *= 1.0 - THAW_CHANCE;
            out.push(branch.clone());
            restore(state, branch, cp);

            branch.probability *= THAW_CHANCE;
            let pokemon_index = state.get_side(ctx.attacking_side).active_index;
            branch.push_and_apply(
                state,
                Instruction::ChangeStatus(ChangeStatusInstruction {
                    side_ref: ctx.attacking_side,
                    pokemon_index,
                    old_status: PokemonStatus::Freeze,
                    new_status: PokemonStatus::None,
                }),
            );
            check_confusion(state, ctx, branch, out);
            restore(state, branch, cp);
        }
        PokemonStatus::Paralyze => {
            let cp = checkpoint(branch);
            branch.probability *= FULL_PARALYSIS_CHANCE;
            out.push(branch.clone());
            restore(state, branch, cp);

            branch.probability *= 1.0 - FULL_PARALYSIS_CHANCE;
            check_confusion(state, ctx, branch, out);
            restore(state, branch, cp);
        }
        _ => check_confusion(state, ctx, branch, out),
    }
}

fn check_confusion(
    state: &mut State,
    ctx: &MoveContext,
    branch: &mut StateInstructions,
    out: &mut Vec<StateInstructions>,
) {
    if !state
        .get_side(ctx.attacking_side)
        .volatile_statuses
        .contains(VolatileStatus::CONFUSION)
    {
        check_taunt(state, ctx, branch, out);
        return;
    }

    let cp = checkpoint(branch);
    branch.probability *= CONFUSION_SELF_HIT_CHANCE;
    let damage_amount = confusion_self_hit_damage(state, ctx.attacking_side);
    if damage_amount > 0 {
        branch.push_and_apply(
            state,
            Instruction::Damage(DamageInstruction {
                side_ref: ctx.attacking_side,
                damage_amount,
            }),
        );
    }
    out.push(branch.clone());
    restore(state, branch, cp);

    branch.probability *= 1.0 - CONFUSION_SELF_HIT_CHANCE;
    check_taunt(state, ctx, branch, out);
    restore(state, branch, cp);
}

/// The confusion self-hit is a typeless 40 base power physical attack
/// against the user's own defense, taken at the average roll.
fn confusion_self_hit_damage(state: &State, side_ref: SideReference) -> i16 {
    let side = state.get_side(side_ref);
    let active = side.get_active();
    let attack = side.calculate_boosted_stat(PokemonBoostableStat::Attack);
    let defense = side.calculate_boosted_stat(PokemonBoostableStat::Defense);
    let base = get_base_damage(
        active.level as u32,
        CONFUSION_SELF_HIT_POWER,
        attack as u32,
        defense as u32,
    );
    ((base as f32 * AVERAGE_ROLL) as i16).max(1).min(active.hp)
}

fn check_taunt(
    state: &mut State,
    ctx: &MoveContext,
    branch: &mut StateInstructions,
    out: &mut Vec<StateInstructions>,
) {
    if ctx.mv.category == MoveCategory::Status
        && state
            .get_side(ctx.attacking_side)
            .volatile_statuses
            .contains(VolatileStatus::TAUNT)
    {
        out.push(branch.clone());
        return;
    }
    execute_move(state, ctx, branch, out);
}

fn execute_move(
    state: &mut State,
    ctx: &MoveContext,
    branch: &mut StateInstructions,
    out: &mut Vec<StateInstructions>,
) {
    // Two-turn moves: the first use only commits to the charge; the release
    // clears it and runs the move as normal.
    if ctx.mv.flags.contains(MoveFlags::CHARGE) {
        let charging = state
            .get_side(ctx.attacking_side)
            .volatile_statuses
            .contains(VolatileStatus::PHANTOM_FORCE);
        if charging {
            branch.push_and_apply(
                state,
                Instruction::RemoveVolatileStatus(VolatileStatusInstruction {
                    side_ref: ctx.attacking_side,
                    volatile_status: VolatileStatus::PHANTOM_FORCE,
                }),
            );
        } else {
            branch.push_and_apply(
                state,
                Instruction::ApplyVolatileStatus(VolatileStatusInstruction {
                    side_ref: ctx.attacking_side,
                    volatile_status: VolatileStatus::PHANTOM_FORCE,
                }),
            );
            out.push(branch.clone());
            return;
        }
    }

    protean_retype(state, ctx, branch);

    let protected = {
        let defender_side = state.get_side(ctx.defending_side());
        defender_side
            .volatile_statuses
            .contains(VolatileStatus::PROTECT)
            && ctx.mv.flags.contains(MoveFlags::PROTECT)
    };
    if protected {
        out.push(branch.clone());
        return;
    }

    match ctx.mv.category {
        MoveCategory::Status => run_status_move(state, ctx, branch, out),
        _ => run_damaging_move(state, ctx, branch, out),
    }
}

/// Protean retypes the user to the move's type before it resolves, once per
/// stay on the field.
fn protean_retype(state: &mut State, ctx: &MoveContext, branch: &mut StateInstructions) {
    let change = {
        let side = state.get_side(ctx.attacking_side);
        let active = side.get_active();
        if active.ability != AbilityId::Protean
            || active.terastallized
            || ctx.mv.move_type == PokemonType::Typeless
            || side
                .volatile_statuses
                .contains(VolatileStatus::TYPE_CHANGE)
        {
            None
        } else {
            let new_types = [ctx.mv.move_type, PokemonType::Typeless];
            if active.types == new_types {
                None
            } else {
                Some((new_types, active.types))
            }
        }
    };
    if let Some((new_types, old_types)) = change {
        branch.push_and_apply(
            state,
            Instruction::ChangeType(ChangeTypeInstruction {
                side_ref: ctx.attacking_side,
                new_types,
                old_types,
            }),
        );
        branch.push_and_apply(
            state,
            Instruction::ApplyVolatileStatus(VolatileStatusInstruction {
                side_ref: ctx.attacking_side,
                volatile_status: VolatileStatus::TYPE_CHANGE,
            }),
        );
    }
}

/// Combined accuracy of the move after stage differences and the user's
/// ability. 1.0 means the miss branch is never generated.
fn move_hit_chance(state: &State, ctx: &MoveContext) -> f32 {
    if ctx.mv.accuracy == 0 || ctx.mv.target == MoveTarget::User {
        return 1.0;
    }
    let attacker_side = state.get_side(ctx.attacking_side);
    if ctx.move_id == MoveId::Toxic
        && attacker_side.get_active().has_type(PokemonType::Poison)
    {
        return 1.0;
    }
    let defender_side = state.get_side(ctx.defending_side());
    let stage = (attacker_side.accuracy_boost - defender_side.evasion_boost).clamp(-6, 6);
    let mut chance =
        ctx.mv.accuracy as f32 / 100.0 * accuracy_stage_multiplier(stage);
    if attacker_side.get_active().ability == AbilityId::Victorystar {
        chance *= 1.1;
    }
    chance.min(1.0)
}

/// Whether the move's payload lands on the opposing combatant itself, as
/// opposed to the user or the field.
fn targets_opposing_pokemon(mv: &'static Move) -> bool {
    mv.flags.contains(MoveFlags::DRAG)
        || mv.status.map_or(false, |s| s.target == MoveTarget::Opponent)
        || mv
            .volatile_status
            .map_or(false, |v| v.target == MoveTarget::Opponent)
        || mv.boosts.map_or(false, |b| b.target == MoveTarget::Opponent)
}

// ============================================================================
// Status moves
// ============================================================================

fn run_status_move(
    state: &mut State,
    ctx: &MoveContext,
    branch: &mut StateInstructions,
    out: &mut Vec<StateInstructions>,
) {
    let pokemon_directed = targets_opposing_pokemon(ctx.mv) || ctx.move_id == MoveId::Trick;
    let failed = {
        let defender = state.get_side(ctx.defending_side()).get_active();
        let attacker = state.get_side(ctx.attacking_side).get_active();

        let powder_blocked = ctx.mv.flags.contains(MoveFlags::POWDER)
            && (defender.has_type(PokemonType::Grass)
                || defender.ability.has_flag(AbilityFlags::IMMUNE_POWDER));

        // Direct status infliction respects type immunity (Thunder Wave
        // against a ground type, Toxic against steel).
        let type_blocked = ctx.mv.status.map_or(false, |effect| {
            effect.target == MoveTarget::Opponent
                && type_effectiveness(ctx.mv.move_type, &defender.current_types()) == 0.0
        });

        let prankster_blocked = pokemon_directed
            && attacker.ability == AbilityId::Prankster
            && defender.has_type(PokemonType::Dark);

        let sub_blocked = pokemon_directed
            && state
                .get_side(ctx.defending_side())
                .volatile_statuses
                .contains(VolatileStatus::SUBSTITUTE)
            && !ctx.mv.flags.contains(MoveFlags::SOUND)
            && !ctx.mv.flags.contains(MoveFlags::DRAG)
            && ctx.move_id != MoveId::Defog;

        powder_blocked || type_blocked || prankster_blocked || sub_blocked
    };
    if failed {
        out.push(branch.clone());
        return;
    }

    let hit_chance = move_hit_chance(state, ctx);
    if hit_chance >= 1.0 {
        status_move_hit(state, ctx, branch, out);
        return;
    }

    let cp = checkpoint(branch);
    branch.probability *= 1.0 - hit_chance;
    out.push(branch.clone());
    restore(state, branch, cp);

    branch.probability *= hit_chance;
    status_move_hit(state, ctx, branch, out);
    restore(state, branch, cp);
}

fn status_move_hit(
    state: &mut State,
    ctx: &MoveContext,
    branch: &mut StateInstructions,
    out: &mut Vec<StateInstructions>,
) {
    if ctx.mv.flags.contains(MoveFlags::DRAG) {
        run_drag_move(state, ctx, branch, out);
        return;
    }

    match ctx.move_id {
        MoveId::Substitute => substitute_move(state, ctx, branch),
        MoveId::Wish => wish_move(state, ctx, branch),
        MoveId::Futuresight => future_sight_move(state, ctx, branch),
        MoveId::Protect => protect_move(state, ctx, branch),
        MoveId::Haze => haze_move(state, branch),
        MoveId::Trick => trick_move(state, ctx, branch),
        MoveId::Defog => defog_move(state, ctx, branch),
        MoveId::Trickroom => branch.push_and_apply(state, Instruction::ToggleTrickRoom),
        MoveId::Raindance => weather_move(state, branch, Weather::Rain),
        MoveId::Sunnyday => weather_move(state, branch, Weather::Sun),
        MoveId::Sandstorm => weather_move(state, branch, Weather::Sand),
        MoveId::Snowscape => weather_move(state, branch, Weather::Snow),
        MoveId::Electricterrain => terrain_move(state, branch, Terrain::ElectricTerrain),
        MoveId::Grassyterrain => terrain_move(state, branch, Terrain::GrassyTerrain),
        MoveId::Mistyterrain => terrain_move(state, branch, Terrain::MistyTerrain),
        MoveId::Psychicterrain => terrain_move(state, branch, Terrain::PsychicTerrain),
        MoveId::Spikes => {
            hazard_move(state, ctx, branch, PokemonSideCondition::Spikes, 3)
        }
        MoveId::Toxicspikes => {
            hazard_move(state, ctx, branch, PokemonSideCondition::ToxicSpikes, 2)
        }
        MoveId::Stealthrock => {
            hazard_move(state, ctx, branch, PokemonSideCondition::StealthRock, 1)
        }
        MoveId::Stickyweb => {
            hazard_move(state, ctx, branch, PokemonSideCondition::StickyWeb, 1)
        }
        MoveId::Reflect => {
            side_condition_move(state, branch, ctx.attacking_side, PokemonSideCondition::Reflect, 1)
        }
        MoveId::Lightscreen => side_condition_move(
            state,
            branch,
            ctx.attacking_side,
            PokemonSideCondition::LightScreen,
            1,
        ),
        MoveId::Auroraveil => {
            if state.weather.weather_type == Weather::Snow {
                side_condition_move(
                    state,
                    branch,
                    ctx.attacking_side,
                    PokemonSideCondition::AuroraVeil,
                    1,
                );
            }
        }
        MoveId::Tailwind => side_condition_move(
            state,
            branch,
            ctx.attacking_side,
            PokemonSideCondition::Tailwind,
            TAILWIND_TURNS,
        ),
        _ => generic_status_effects(state, ctx, branch),
    }

    out.push(branch.clone());
}

/// Phazing forks once per alive reserve on the defending side, each arm a
/// full forced switch.
fn run_drag_move(
    state: &mut State,
    ctx: &MoveContext,
    branch: &mut StateInstructions,
    out: &mut Vec<StateInstructions>,
) {
    let defender_ref = ctx.defending_side();
    let reserves = state.get_side(defender_ref).alive_reserve_indices();
    if reserves.is_empty() {
        out.push(branch.clone());
        return;
    }

    let share = 1.0 / reserves.len() as f32;
    let cp = checkpoint(branch);
    for target in reserves {
        branch.probability *= share;
        generate_switch_instructions(state, branch, defender_ref, target);
        out.push(branch.clone());
        restore(state, branch, cp);
    }
}

fn substitute_move(state: &mut State, ctx: &MoveContext, branch: &mut StateInstructions) {
    let side_ref = ctx.attacking_side;
    let (hp, maxhp, has_sub, old_health) = {
        let side = state.get_side(side_ref);
        let active = side.get_active();
        (
            active.hp,
            active.maxhp,
            side.volatile_statuses.contains(VolatileStatus::SUBSTITUTE),
            side.substitute_health,
        )
    };
    let cost = maxhp / 4;
    if has_sub || hp <= cost {
        return;
    }
    branch.push_and_apply(
        state,
        Instruction::Damage(DamageInstruction {
            side_ref,
            damage_amount: cost,
        }),
    );
    branch.push_and_apply(
        state,
        Instruction::SetSubstituteHealth(SetSubstituteHealthInstruction {
            side_ref,
            new_health: cost,
            old_health,
        }),
    );
    branch.push_and_apply(
        state,
        Instruction::ApplyVolatileStatus(VolatileStatusInstruction {
            side_ref,
            volatile_status: VolatileStatus::SUBSTITUTE,
        }),
    );
}

fn wish_move(state: &mut State, ctx: &MoveContext, branch: &mut StateInstructions) {
    let side_ref = ctx.attacking_side;
    let (pending, previous_health, maxhp) = {
        let side = state.get_side(side_ref);
        (side.wish.0, side.wish.1, side.get_active().maxhp)
    };
    if pending > 0 {
        return;
    }
    branch.push_and_apply(
        state,
        Instruction::SetWish(SetWishInstruction {
            side_ref,
            health: maxhp / 2,
            previous_health,
        }),
    );
}

fn future_sight_move(state: &mut State, ctx: &MoveContext, branch: &mut StateInstructions) {
    let side_ref = ctx.attacking_side;
    let (pending, previous_index, pokemon_index) = {
        let side = state.get_side(side_ref);
        (side.future_sight.0, side.future_sight.1, side.active_index)
    };
    if pending > 0 {
        return;
    }
    branch.push_and_apply(
        state,
        Instruction::SetFutureSight(SetFutureSightInstruction {
            side_ref,
            pokemon_index,
            previous_index,
        }),
    );
}

/// Consecutive protects fail outright here; success probability is not
/// modelled beyond the first use.
fn protect_move(state: &mut State, ctx: &MoveContext, branch: &mut StateInstructions) {
    let side_ref = ctx.attacking_side;
    if state.get_side(side_ref).side_conditions.protect > 0 {
        return;
    }
    branch.push_and_apply(
        state,
        Instruction::ApplyVolatileStatus(VolatileStatusInstruction {
            side_ref,
            volatile_status: VolatileStatus::PROTECT,
        }),
    );
}

fn haze_move(state: &mut State, branch: &mut StateInstructions) {
    for side_ref in SIDES {
        for stat in BOOSTABLE_STATS {
            let boost = state.get_side(side_ref).get_boost(stat);
            if boost != 0 {
                branch.push_and_apply(
                    state,
                    Instruction::Boost(BoostInstruction {
                        side_ref,
                        stat,
                        amount: -boost,
                    }),
                );
            }
        }
    }
}

fn trick_move(state: &mut State, ctx: &MoveContext, branch: &mut StateInstructions) {
    let attacker_ref = ctx.attacking_side;
    let defender_ref = ctx.defending_side();
    let (attacker_item, defender_item) = {
        (
            state.get_side(attacker_ref).get_active().item,
            state.get_side(defender_ref).get_active().item,
        )
    };
    if attacker_item == defender_item {
        return;
    }
    branch.push_and_apply(
        state,
        Instruction::ChangeItem(ChangeItemInstruction {
            side_ref: attacker_ref,
            new_item: defender_item,
            current_item: attacker_item,
        }),
    );
    branch.push_and_apply(
        state,
        Instruction::ChangeItem(ChangeItemInstruction {
            side_ref: defender_ref,
            new_item: attacker_item,
            current_item: defender_item,
        }),
    );
}

/// Defog lowers evasion, then sweeps hazards from both sides and screens
/// from the target's side. A substitute stops only the evasion drop.
fn defog_move(state: &mut State, ctx: &MoveContext, branch: &mut StateInstructions) {
    let defender_ref = ctx.defending_side();

    let behind_sub = state
        .get_side(defender_ref)
        .volatile_statuses
        .contains(VolatileStatus::SUBSTITUTE);
    if !behind_sub {
        if let Some(changes) = ctx.mv.boosts {
            apply_stat_changes(state, ctx, branch, &changes);
        }
    }

    for side_ref in [defender_ref, ctx.attacking_side] {
        for condition in HAZARDS {
            let count = state.get_side(side_ref).side_conditions.get(condition);
            if count > 0 {
                branch.push_and_apply(
                    state,
                    Instruction::ChangeSideCondition(ChangeSideConditionInstruction {
                        side_ref,
                        side_condition: condition,
                        amount: -count,
                    }),
                );
            }
        }
    }
    for condition in [
        PokemonSideCondition::Reflect,
        PokemonSideCondition::LightScreen,
        PokemonSideCondition::AuroraVeil,
    ] {
        let count = state.get_side(defender_ref).side_conditions.get(condition);
        if count > 0 {
            branch.push_and_apply(
                state,
                Instruction::ChangeSideCondition(ChangeSideConditionInstruction {
                    side_ref: defender_ref,
                    side_condition: condition,
                    amount: -count,
                }),
            );
        }
    }
}

fn weather_move(state: &mut State, branch: &mut StateInstructions, new_weather: Weather) {
    if state.weather.weather_type == new_weather {
        return;
    }
    branch.push_and_apply(
        state,
        Instruction::ChangeWeather(ChangeWeatherInstruction {
            new_weather,
            new_weather_turns_remaining: SET_WEATHER_TURNS,
            previous_weather: state.weather.weather_type,
            previous_weather_turns_remaining: state.weather.turns_remaining,
        }),
    );
}

fn terrain_move(state: &mut State, branch: &mut StateInstructions, new_terrain: Terrain) {
    if state.terrain.terrain_type == new_terrain {
        return;
    }
    branch.push_and_apply(
        state,
        Instruction::ChangeTerrain(ChangeTerrainInstruction {
            new_terrain,
            new_terrain_turns_remaining: SET_TERRAIN_TURNS,
            previous_terrain: state.terrain.terrain_type,
            previous_terrain_turns_remaining: state.terrain.turns_remaining,
        }),
    );
}

fn hazard_move(
    state: &mut State,
    ctx: &MoveContext,
    branch: &mut StateInstructions,
    condition: PokemonSideCondition,
    cap: i8,
) {
    let target_ref = ctx.defending_side();
    if state.get_side(target_ref).side_conditions.get(condition) >= cap {
        return;
    }
    branch.push_and_apply(
        state,
        Instruction::ChangeSideCondition(ChangeSideConditionInstruction {
            side_ref: target_ref,
            side_condition: condition,
            amount: 1,
        }),
    );
}

/// Screens and tailwind: fail while already up, otherwise set their counter.
fn side_condition_move(
    state: &mut State,
    branch: &mut StateInstructions,
    side_ref: SideReference,
    condition: PokemonSideCondition,
    amount: i8,
) {
    if state.get_side(side_ref).side_conditions.get(condition) > 0 {
        return;
    }
    branch.push_and_apply(
        state,
        Instruction::ChangeSideCondition(ChangeSideConditionInstruction {
            side_ref,
            side_condition: condition,
            amount,
        }),
    );
}

/// Data-driven status move payload: status, stat stages, volatile, heal.
fn generic_status_effects(state: &mut State, ctx: &MoveContext, branch: &mut StateInstructions) {
    if let Some(effect) = ctx.mv.status {
        apply_status_effect(state, ctx, branch, effect);
    }
    if let Some(changes) = ctx.mv.boosts {
        apply_stat_changes(state, ctx, branch, &changes);
    }
    if let Some(effect) = ctx.mv.volatile_status {
        apply_volatile_effect(state, ctx, branch, effect);
    }
    if let Some((numerator, denominator)) = ctx.mv.heal {
        apply_heal_fraction(state, ctx.attacking_side, branch, numerator, denominator);
    }
}

fn effect_target(ctx: &MoveContext, target: MoveTarget) -> SideReference {
    match target {
        MoveTarget::User => ctx.attacking_side,
        MoveTarget::Opponent => ctx.defending_side(),
    }
}

fn apply_status_effect(
    state: &mut State,
    ctx: &MoveContext,
    branch: &mut StateInstructions,
    effect: StatusEffect,
) {
    let target_ref = effect_target(ctx, effect.target);
    if state.immune_to_status(target_ref, effect.status) {
        return;
    }
    let pokemon_index = state.get_side(target_ref).active_index;
    branch.push_and_apply(
        state,
        Instruction::ChangeStatus(ChangeStatusInstruction {
            side_ref: target_ref,
            pokemon_index,
            old_status: PokemonStatus::None,
            new_status: effect.status,
        }),
    );
}

/// Stage changes with blocker and punisher abilities applied for drops
/// inflicted on the opponent.
fn apply_stat_changes(
    state: &mut State,
    ctx: &MoveContext,
    branch: &mut StateInstructions,
    changes: &StatChanges,
) {
    let target_ref = effect_target(ctx, changes.target);
    let opponent_directed = changes.target == MoveTarget::Opponent;
    let target_ability = state.get_side(target_ref).get_active().ability;

    let mut dropped = false;
    for (stat, delta) in changes.changes {
        if opponent_directed
            && *delta < 0
            && target_ability.has_flag(AbilityFlags::BLOCKS_STAT_DROPS)
        {
            continue;
        }
        let amount = state.get_side(target_ref).clamped_boost_delta(*stat, *delta);
        if amount == 0 {
            continue;
        }
        branch.push_and_apply(
            state,
            Instruction::Boost(BoostInstruction {
                side_ref: target_ref,
                stat: *stat,
                amount,
            }),
        );
        if opponent_directed && *delta < 0 {
            dropped = true;
        }
    }

    if dropped && target_ability.has_flag(AbilityFlags::PUNISHES_STAT_DROPS) {
        let amount = state
            .get_side(target_ref)
            .clamped_boost_delta(PokemonBoostableStat::Attack, 2);
        if amount != 0 {
            branch.push_and_apply(
                state,
                Instruction::Boost(BoostInstruction {
                    side_ref: target_ref,
                    stat: PokemonBoostableStat::Attack,
                    amount,
                }),
            );
        }
    }
}

fn apply_volatile_effect(
    state: &mut State,
    ctx: &MoveContext,
    branch: &mut StateInstructions,
    effect: VolatileEffect,
) {
    let target_ref = effect_target(ctx, effect.target);
    let blocked = {
        let side = state.get_side(target_ref);
        side.volatile_statuses.contains(effect.volatile_status)
            || (effect.volatile_status == VolatileStatus::LEECH_SEED
                && side.get_active().has_type(PokemonType::Grass))
    };
    if blocked {
        return;
    }
    branch.push_and_apply(
        state,
        Instruction::ApplyVolatileStatus(VolatileStatusInstruction {
            side_ref: target_ref,
            volatile_status: effect.volatile_status,
        }),
    );
}

fn apply_heal_fraction(
    state: &mut State,
    side_ref: SideReference,
    branch: &mut StateInstructions,
    numerator: i16,
    denominator: i16,
) {
    let (maxhp, missing) = {
        let active = state.get_side(side_ref).get_active();
        (active.maxhp, active.maxhp - active.hp)
    };
    if missing <= 0 {
        return;
    }
    let heal_amount =
        (((maxhp as i32 * numerator as i32) / denominator as i32) as i16).min(missing);
    if heal_amount > 0 {
        branch.push_and_apply(
            state,
            Instruction::Heal(HealInstruction {
                side_ref,
                heal_amount,
            }),
        );
    }
}

// ============================================================================
// Damaging moves
// ============================================================================

fn run_damaging_move(
    state: &mut State,
    ctx: &MoveContext,
    branch: &mut StateInstructions,
    out: &mut Vec<StateInstructions>,
) {
    // Sucker Punch connects only against a foe committed to attacking, and
    // only while that foe has not yet moved.
    if ctx.move_id == MoveId::Suckerpunch && !(ctx.first_move() && ctx.opponent_attacking) {
        out.push(branch.clone());
        return;
    }

    let hit_chance = move_hit_chance(state, ctx);
    if hit_chance >= 1.0 {
        damaging_hit(state, ctx, branch, out);
        return;
    }

    let cp = checkpoint(branch);
    branch.probability *= 1.0 - hit_chance;
    if let Some((numerator, denominator)) = ctx.mv.crash {
        let side_ref = ctx.attacking_side;
        let (maxhp, hp) = {
            let active = state.get_side(side_ref).get_active();
            (active.maxhp, active.hp)
        };
        let damage_amount =
            (((maxhp as i32 * numerator as i32) / denominator as i32) as i16).min(hp);
        if damage_amount > 0 {
            branch.push_and_apply(
                state,
                Instruction::Damage(DamageInstruction {
                    side_ref,
                    damage_amount,
                }),
            );
        }
        branch.halt();
    }
    out.push(branch.clone());
    restore(state, branch, cp);

    branch.probability *= hit_chance;
    damaging_hit(state, ctx, branch, out);
    restore(state, branch, cp);
}

fn damaging_hit(
    state: &mut State,
    ctx: &MoveContext,
    branch: &mut StateInstructions,
    out: &mut Vec<StateInstructions>,
) {
    // Absorbing abilities swallow the hit entirely.
    let absorbed = {
        let defender_ref = ctx.defending_side();
        let ability = state.get_side(defender_ref).get_active().ability;
        ability_hooks(ability)
            .and_then(|hooks| hooks.absorb)
            .and_then(|hook| hook(state, defender_ref, &ctx.damage))
    };
    if let Some(instructions) = absorbed {
        branch.extend_and_apply(state, instructions);
        out.push(branch.clone());
        return;
    }

    let max_damage = calculate_damage(state, &ctx.damage);
    if max_damage <= 0.0 {
        out.push(branch.clone());
        return;
    }

    let rolls = if fixed_damage(state, &ctx.damage).is_some() {
        vec![(1.0, max_damage as i16)]
    } else {
        damage_rolls(max_damage, ctx.policy)
    };

    let defender_ref = ctx.defending_side();
    let sub_hit = state
        .get_side(defender_ref)
        .volatile_statuses
        .contains(VolatileStatus::SUBSTITUTE)
        && !ctx.mv.flags.contains(MoveFlags::SOUND);

    let cp = checkpoint(branch);
    for (roll_chance, roll_damage) in rolls {
        branch.probability *= roll_chance;

        if sub_hit {
            let sub_health = state.get_side(defender_ref).substitute_health;
            let dealt = roll_damage.min(sub_health);
            if dealt > 0 {
                branch.push_and_apply(
                    state,
                    Instruction::DamageSubstitute(DamageSubstituteInstruction {
                        side_ref: defender_ref,
                        damage_amount: dealt,
                    }),
                );
                if dealt >= sub_health {
                    branch.push_and_apply(
                        state,
                        Instruction::RemoveVolatileStatus(VolatileStatusInstruction {
                            side_ref: defender_ref,
                            volatile_status: VolatileStatus::SUBSTITUTE,
                        }),
                    );
                }
            }
            post_damage_effects(state, ctx, dealt, true, branch, out);
        } else {
            let dealt = {
                let defender = state.get_side(defender_ref).get_active();
                let mut dealt = roll_damage.min(defender.hp);
                // Sturdy keeps a full-health combatant at 1 HP.
                if defender.ability == AbilityId::Sturdy
                    && defender.hp == defender.maxhp
                    && dealt >= defender.hp
                {
                    dealt = defender.hp - 1;
                }
                dealt
            };
            if dealt > 0 {
                branch.push_and_apply(
                    state,
                    Instruction::Damage(DamageInstruction {
                        side_ref: defender_ref,
                        damage_amount: dealt,
                    }),
                );
            }
            post_damage_effects(state, ctx, dealt, false, branch, out);
        }

        restore(state, branch, cp);
    }
}

/// Contact punishment first: the defender's ability may fork, the defender's
/// item adds deterministically inside each arm.
fn post_damage_effects(
    state: &mut State,
    ctx: &MoveContext,
    dealt: i16,
    sub_hit: bool,
    branch: &mut StateInstructions,
    out: &mut Vec<StateInstructions>,
) {
    let defender_ref = ctx.defending_side();
    let contact = ctx.mv.flags.contains(MoveFlags::CONTACT)
        && !sub_hit
        && dealt > 0
        && state.get_side(defender_ref).get_active().is_alive();

    let ability_arms = if contact {
        let ability = state.get_side(defender_ref).get_active().ability;
        ability_hooks(ability)
            .and_then(|hooks| hooks.on_contact)
            .map(|hook| hook(state, defender_ref))
    } else {
        None
    };

    match ability_arms {
        Some(arms) if !arms.is_empty() => {
            let cp = checkpoint(branch);
            for (chance, instructions) in arms {
                branch.probability *= chance;
                branch.extend_and_apply(state, instructions);
                contact_item_punishment(state, ctx, dealt, sub_hit, contact, branch, out);
                restore(state, branch, cp);
            }
        }
        _ => contact_item_punishment(state, ctx, dealt, sub_hit, contact, branch, out),
    }
}

fn contact_item_punishment(
    state: &mut State,
    ctx: &MoveContext,
    dealt: i16,
    sub_hit: bool,
    contact: bool,
    branch: &mut StateInstructions,
    out: &mut Vec<StateInstructions>,
) {
    if contact {
        let item = state.get_side(ctx.defending_side()).get_active().item;
        if let Some(hook) = item_hooks(item).and_then(|hooks| hooks.on_contact) {
            let instructions = hook(state, ctx.defending_side());
            branch.extend_and_apply(state, instructions);
        }
    }
    after_hit_effects(state, ctx, dealt, sub_hit, branch, out);
}

fn after_hit_effects(
    state: &mut State,
    ctx: &MoveContext,
    dealt: i16,
    sub_hit: bool,
    branch: &mut StateInstructions,
    out: &mut Vec<StateInstructions>,
) {
    let attacker_ref = ctx.attacking_side;
    let defender_ref = ctx.defending_side();

    // Knock Off strips the target's item; a substitute shields it.
    if ctx.move_id == MoveId::Knockoff && !sub_hit && dealt > 0 {
        let item = {
            let defender = state.get_side(defender_ref).get_active();
            if defender.is_alive() { defender.item } else { ItemId::None }
        };
        if item != ItemId::None {
            branch.push_and_apply(
                state,
                Instruction::ChangeItem(ChangeItemInstruction {
                    side_ref: defender_ref,
                    new_item: ItemId::None,
                    current_item: item,
                }),
            );
        }
    }

    // An air balloon pops on the first hit that connects.
    if dealt > 0 && !sub_hit {
        let popped = {
            let defender = state.get_side(defender_ref).get_active();
            defender.is_alive() && defender.item == ItemId::Airballoon
        };
        if popped {
            branch.push_and_apply(
                state,
                Instruction::ChangeItem(ChangeItemInstruction {
                    side_ref: defender_ref,
                    new_item: ItemId::None,
                    current_item: ItemId::Airballoon,
                }),
            );
        }
    }

    let attacker_alive = state.get_side(attacker_ref).get_active().is_alive();
    if attacker_alive && dealt > 0 {
        if let Some((numerator, denominator)) = ctx.mv.drain {
            let missing = {
                let attacker = state.get_side(attacker_ref).get_active();
                attacker.maxhp - attacker.hp
            };
            let heal_amount = (((dealt as i32 * numerator as i32) / denominator as i32) as i16)
                .min(missing);
            if heal_amount > 0 {
                branch.push_and_apply(
                    state,
                    Instruction::Heal(HealInstruction {
                        side_ref: attacker_ref,
                        heal_amount,
                    }),
                );
            }
        }
        if let Some((numerator, denominator)) = ctx.mv.recoil {
            let (immune, hp) = {
                let attacker = state.get_side(attacker_ref).get_active();
                (
                    attacker.ability.has_flag(AbilityFlags::IMMUNE_INDIRECT),
                    attacker.hp,
                )
            };
            if !immune {
                let damage_amount =
                    (((dealt as i32 * numerator as i32) / denominator as i32) as i16).min(hp);
                if damage_amount > 0 {
                    branch.push_and_apply(
                        state,
                        Instruction::Damage(DamageInstruction {
                            side_ref: attacker_ref,
                            damage_amount,
                        }),
                    );
                }
            }
        }
    }

    // Rapid Spin sweeps the user's own side clear on any connecting hit.
    if ctx.move_id == MoveId::Rapidspin && dealt > 0 {
        rapid_spin_cleanup(state, attacker_ref, branch);
    }

    apply_secondaries(state, ctx, 0, dealt, sub_hit, branch, out);
}

fn rapid_spin_cleanup(state: &mut State, side_ref: SideReference, branch: &mut StateInstructions) {
    for condition in HAZARDS {
        let count = state.get_side(side_ref).side_conditions.get(condition);
        if count > 0 {
            branch.push_and_apply(
                state,
                Instruction::ChangeSideCondition(ChangeSideConditionInstruction {
                    side_ref,
                    side_condition: condition,
                    amount: -count,
                }),
            );
        }
    }
    if state
        .get_side(side_ref)
        .volatile_statuses
        .contains(VolatileStatus::LEECH_SEED)
    {
        branch.push_and_apply(
            state,
            Instruction::RemoveVolatileStatus(VolatileStatusInstruction {
                side_ref,
                volatile_status: VolatileStatus::LEECH_SEED,
            }),
        );
    }
}

/// Cross-product over the move's secondary effects. A secondary whose
/// effect cannot land collapses instead of forking a dead arm.
fn apply_secondaries(
    state: &mut State,
    ctx: &MoveContext,
    index: usize,
    dealt: i16,
    sub_hit: bool,
    branch: &mut StateInstructions,
    out: &mut Vec<StateInstructions>,
) {
    let secondary = match ctx.mv.secondaries.get(index) {
        Some(secondary) => secondary,
        None => {
            finish_attack(state, ctx, dealt, sub_hit, branch, out);
            return;
        }
    };

    let skip = match secondary.target {
        MoveTarget::Opponent => {
            sub_hit
                || !state
                    .get_side(ctx.defending_side())
                    .get_active()
                    .is_alive()
        }
        MoveTarget::User => {
            !state
                .get_side(ctx.attacking_side)
                .get_active()
                .is_alive()
        }
    };
    if skip {
        apply_secondaries(state, ctx, index + 1, dealt, sub_hit, branch, out);
        return;
    }

    let chance = (secondary.chance as f32 / 100.0).min(1.0);
    let cp = checkpoint(branch);

    if chance >= 1.0 {
        apply_one_secondary(state, ctx, secondary, branch);
        apply_secondaries(state, ctx, index + 1, dealt, sub_hit, branch, out);
        return;
    }

    branch.probability *= chance;
    let before_len = branch.instruction_list.len();
    apply_one_secondary(state, ctx, secondary, branch);
    if branch.instruction_list.len() == before_len {
        // The effect cannot land; both arms would be identical.
        branch.probability = cp.probability;
        apply_secondaries(state, ctx, index + 1, dealt, sub_hit, branch, out);
        return;
    }
    apply_secondaries(state, ctx, index + 1, dealt, sub_hit, branch, out);
    restore(state, branch, cp);

    branch.probability *= 1.0 - chance;
    apply_secondaries(state, ctx, index + 1, dealt, sub_hit, branch, out);
    restore(state, branch, cp);
}

fn apply_one_secondary(
    state: &mut State,
    ctx: &MoveContext,
    secondary: &Secondary,
    branch: &mut StateInstructions,
) {
    match secondary.effect {
        SecondaryEffect::Status(status) => {
            apply_status_effect(
                state,
                ctx,
                branch,
                StatusEffect {
                    target: secondary.target,
                    status,
                },
            );
        }
        SecondaryEffect::VolatileStatus(volatile_status) => {
            // A flinch can only matter against a foe that has yet to move.
            if volatile_status == VolatileStatus::FLINCH && !ctx.first_move() {
                return;
            }
            apply_volatile_effect(
                state,
                ctx,
                branch,
                VolatileEffect {
                    target: secondary.target,
                    volatile_status,
                },
            );
        }
        SecondaryEffect::Boost(changes) => {
            apply_stat_changes(
                state,
                ctx,
                branch,
                &StatChanges {
                    target: secondary.target,
                    changes,
                },
            );
        }
    }
}

fn finish_attack(
    state: &mut State,
    ctx: &MoveContext,
    dealt: i16,
    _sub_hit: bool,
    branch: &mut StateInstructions,
    out: &mut Vec<StateInstructions>,
) {
    let attacker_ref = ctx.attacking_side;
    let defender_ref = ctx.defending_side();

    if dealt > 0 {
        let after_hit = {
            let attacker = state.get_side(attacker_ref).get_active();
            if attacker.is_alive() {
                item_hooks(attacker.item).and_then(|hooks| hooks.after_move_hit)
            } else {
                None
            }
        };
        if let Some(hook) = after_hit {
            let instructions = hook(state, attacker_ref);
            branch.extend_and_apply(state, instructions);
        }
    }

    if dealt > 0 && !state.get_side(defender_ref).get_active().is_alive() {
        let on_kill = {
            let attacker = state.get_side(attacker_ref).get_active();
            if attacker.is_alive() {
                ability_hooks(attacker.ability).and_then(|hooks| hooks.on_kill)
            } else {
                None
            }
        };
        if let Some(hook) = on_kill {
            let instructions = hook(state, attacker_ref);
            branch.extend_and_apply(state, instructions);
        }
    }

    // Pivot moves hand the turn back to the caller to pick the replacement.
    if ctx.mv.flags.contains(MoveFlags::PIVOT) {
        let side = state.get_side(attacker_ref);
        if side.get_active().is_alive() && side.has_alive_reserve() {
            branch.halt();
            out.push(branch.clone());
            return;
        }
    }

    out.push(branch.clone());
}

// ============================================================================
// Deduplication
// ============================================================================

/// Merge branches that produced identical instruction lists, summing their
/// probabilities. First occurrence keeps its position.
fn merge_duplicate_branches(branches: &mut Vec<StateInstructions>) {
    let mut index = 0;
    while index < branches.len() {
        let mut other = index + 1;
        while other < branches.len() {
            if branches[index].instruction_list == branches[other].instruction_list
                && branches[index].halted == branches[other].halted
            {
                let merged = branches[other].probability;
                branches[index].probability += merged;
                branches.remove(other);
            } else {
                other += 1;
            }
        }
        index += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MoveSlot, Pokemon};

    fn battler(speed: i16) -> Pokemon {
        let mut pokemon = Pokemon::default();
        pokemon.level = 100;
        pokemon.types = [PokemonType::Normal, PokemonType::Typeless];
        pokemon.hp = 200;
        pokemon.maxhp = 200;
        pokemon.attack = 100;
        pokemon.defense = 100;
        pokemon.special_attack = 100;
        pokemon.special_defense = 100;
        pokemon.speed = speed;
        pokemon.moves[0] = MoveSlot {
            id: MoveId::Tackle,
            disabled: false,
            pp: 32,
        };
        pokemon.moves[1] = MoveSlot {
            id: MoveId::Charm,
            disabled: false,
            pp: 32,
        };
        pokemon
    }

    fn setup(side_one_speed: i16, side_two_speed: i16) -> State {
        let mut state = State::default();
        state.side_one.pokemon[0] = battler(side_one_speed);
        state.side_two.pokemon[0] = battler(side_two_speed);
        state
    }

    fn give_move(state: &mut State, side_ref: SideReference, slot: usize, id: MoveId) {
        state.get_side_mut(side_ref).get_active_mut().moves[slot] = MoveSlot {
            id,
            disabled: false,
            pp: 16,
        };
    }

    fn generate(
        state: &mut State,
        side_one_choice: MoveChoice,
        side_two_choice: MoveChoice,
    ) -> Vec<StateInstructions> {
        generate_instructions_from_move_pair(
            state,
            &side_one_choice,
            &side_two_choice,
            DamageRolls::Average,
        )
    }

    fn damage(side_ref: SideReference, damage_amount: i16) -> Instruction {
        Instruction::Damage(DamageInstruction {
            side_ref,
            damage_amount,
        })
    }

    #[test]
    fn test_quiet_turn_is_a_single_branch() {
        let mut state = setup(120, 80);
        let before = state;
        let branches = generate(
            &mut state,
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::Move(PokemonMoveIndex::M0),
        );

        assert_eq!(branches.len(), 1);
        assert!((branches[0].probability - 1.0).abs() < 1e-6);
        assert!(!branches[0].halted);
        assert_eq!(
            branches[0].instruction_list,
            vec![
                damage(SideReference::SideTwo, 48),
                damage(SideReference::SideOne, 48),
            ]
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_powder_into_grass_fails_cleanly() {
        let mut state = setup(120, 80);
        give_move(&mut state, SideReference::SideOne, 0, MoveId::Spore);
        state.side_two.get_active_mut().types = [PokemonType::Grass, PokemonType::Typeless];

        let branches = generate(
            &mut state,
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::None,
        );

        assert_eq!(branches.len(), 1);
        assert!((branches[0].probability - 1.0).abs() < 1e-6);
        assert!(branches[0].instruction_list.is_empty());
    }

    #[test]
    fn test_full_paralysis_forks_the_turn() {
        let mut state = setup(120, 80);
        state.side_one.get_active_mut().status = PokemonStatus::Paralyze;

        let branches = generate(
            &mut state,
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::None,
        );

        assert_eq!(branches.len(), 2);
        assert!((branches[0].probability - 0.25).abs() < 1e-6);
        assert!(branches[0].instruction_list.is_empty());
        assert!((branches[1].probability - 0.75).abs() < 1e-6);
        assert_eq!(
            branches[1].instruction_list,
            vec![damage(SideReference::SideTwo, 48)]
        );
    }

    #[test]
    fn test_contact_punishment_forks_after_damage() {
        let mut state = setup(120, 80);
        state.side_two.get_active_mut().ability = AbilityId::Static;

        let branches = generate(
            &mut state,
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::None,
        );

        assert_eq!(branches.len(), 2);
        assert!((branches[0].probability - 0.30).abs() < 1e-6);
        assert_eq!(
            branches[0].instruction_list,
            vec![
                damage(SideReference::SideTwo, 48),
                Instruction::ChangeStatus(ChangeStatusInstruction {
                    side_ref: SideReference::SideOne,
                    pokemon_index: PokemonIndex::P0,
                    old_status: PokemonStatus::None,
                    new_status: PokemonStatus::Paralyze,
                }),
            ]
        );
        assert!((branches[1].probability - 0.70).abs() < 1e-6);
        assert_eq!(
            branches[1].instruction_list,
            vec![damage(SideReference::SideTwo, 48)]
        );
    }

    #[test]
    fn test_accuracy_and_secondary_compose() {
        let mut state = setup(120, 80);
        give_move(&mut state, SideReference::SideOne, 0, MoveId::Rockslide);

        let branches = generate(
            &mut state,
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::None,
        );

        assert_eq!(branches.len(), 3);
        // 90% to hit, 30% of those flinch
        assert!((branches[0].probability - 0.27).abs() < 1e-6);
        assert_eq!(branches[0].instruction_list[0], damage(SideReference::SideTwo, 60));
        assert_eq!(
            branches[0].instruction_list[1],
            Instruction::ApplyVolatileStatus(VolatileStatusInstruction {
                side_ref: SideReference::SideTwo,
                volatile_status: VolatileStatus::FLINCH,
            })
        );
        assert!((branches[1].probability - 0.63).abs() < 1e-6);
        assert_eq!(
            branches[1].instruction_list,
            vec![damage(SideReference::SideTwo, 60)]
        );
        assert!((branches[2].probability - 0.10).abs() < 1e-6);
        assert!(branches[2].instruction_list.is_empty());
    }

    #[test]
    fn test_crash_move_miss_halts_the_branch() {
        let mut state = setup(120, 80);
        give_move(&mut state, SideReference::SideOne, 0, MoveId::Highjumpkick);

        let branches = generate(
            &mut state,
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::Move(PokemonMoveIndex::M0),
        );

        assert_eq!(branches.len(), 2);
        // Fighting into a normal type at 2x knocks out the 200 HP target,
        // so the defender never gets to act.
        assert!((branches[0].probability - 0.9).abs() < 1e-6);
        assert!(!branches[0].halted);
        assert_eq!(
            branches[0].instruction_list,
            vec![damage(SideReference::SideTwo, 200)]
        );
        // The miss crashes the user for half its max HP and ends the branch.
        assert!((branches[1].probability - 0.1).abs() < 1e-6);
        assert!(branches[1].halted);
        assert_eq!(
            branches[1].instruction_list,
            vec![damage(SideReference::SideOne, 100)]
        );
    }

    #[test]
    fn test_pivot_breaks_the_turn_with_reserves() {
        let mut state = setup(120, 80);
        give_move(&mut state, SideReference::SideOne, 0, MoveId::Uturn);
        state.side_one.pokemon[1] = battler(90);

        let branches = generate(
            &mut state,
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::None,
        );

        assert_eq!(branches.len(), 1);
        assert!(branches[0].halted);
        assert_eq!(
            branches[0].instruction_list,
            vec![damage(SideReference::SideTwo, 55)]
        );
    }

    #[test]
    fn test_pivot_without_reserves_completes_the_turn() {
        let mut state = setup(120, 80);
        give_move(&mut state, SideReference::SideOne, 0, MoveId::Uturn);

        let branches = generate(
            &mut state,
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::None,
        );

        assert_eq!(branches.len(), 1);
        assert!(!branches[0].halted);
        assert_eq!(
            branches[0].instruction_list,
            vec![damage(SideReference::SideTwo, 55)]
        );
    }

    #[test]
    fn test_drag_forks_once_per_reserve() {
        let mut state = setup(120, 80);
        give_move(&mut state, SideReference::SideOne, 0, MoveId::Whirlwind);
        state.side_two.pokemon[1] = battler(70);
        state.side_two.pokemon[2] = battler(60);

        let branches = generate(
            &mut state,
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::None,
        );

        assert_eq!(branches.len(), 2);
        for (branch, target) in branches.iter().zip([PokemonIndex::P1, PokemonIndex::P2]) {
            assert!((branch.probability - 0.5).abs() < 1e-6);
            assert_eq!(
                branch.instruction_list,
                vec![Instruction::Switch(SwitchInstruction {
                    side_ref: SideReference::SideTwo,
                    previous_index: PokemonIndex::P0,
                    next_index: target,
                })]
            );
        }
    }

    #[test]
    fn test_mutual_drag_silences_the_dragged_side() {
        // Both sides pick whirlwind; the faster one drags first, so the
        // dragged side's own whirlwind never resolves.
        let mut state = setup(120, 80);
        give_move(&mut state, SideReference::SideOne, 0, MoveId::Whirlwind);
        give_move(&mut state, SideReference::SideTwo, 0, MoveId::Whirlwind);
        for slot in 1..6 {
            state.side_two.pokemon[slot] = battler(70);
        }

        let branches = generate(
            &mut state,
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::Move(PokemonMoveIndex::M0),
        );

        assert_eq!(branches.len(), 5);
        let targets = [
            PokemonIndex::P1,
            PokemonIndex::P2,
            PokemonIndex::P3,
            PokemonIndex::P4,
            PokemonIndex::P5,
        ];
        for (branch, target) in branches.iter().zip(targets) {
            assert!((branch.probability - 0.2).abs() < 1e-6);
            assert!(!branch.halted);
            assert_eq!(
                branch.instruction_list,
                vec![Instruction::Switch(SwitchInstruction {
                    side_ref: SideReference::SideTwo,
                    previous_index: PokemonIndex::P0,
                    next_index: target,
                })]
            );
        }
    }

    #[test]
    fn test_pursuit_doubles_and_precedes_a_switch() {
        let mut state = setup(50, 100);
        give_move(&mut state, SideReference::SideOne, 0, MoveId::Pursuit);
        state.side_two.pokemon[1] = battler(70);

        let branches = generate(
            &mut state,
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::Switch(PokemonIndex::P1),
        );

        // The slower pursuit user still catches the fleeing target at
        // doubled power, then the switch resolves.
        assert_eq!(branches.len(), 1);
        assert_eq!(
            branches[0].instruction_list,
            vec![
                damage(SideReference::SideTwo, 63),
                Instruction::Switch(SwitchInstruction {
                    side_ref: SideReference::SideTwo,
                    previous_index: PokemonIndex::P0,
                    next_index: PokemonIndex::P1,
                }),
            ]
        );
    }

    #[test]
    fn test_protect_blocks_and_starts_its_counter() {
        let mut state = setup(120, 80);
        give_move(&mut state, SideReference::SideTwo, 0, MoveId::Protect);

        let branches = generate(
            &mut state,
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::Move(PokemonMoveIndex::M0),
        );

        assert_eq!(branches.len(), 1);
        assert_eq!(
            branches[0].instruction_list,
            vec![
                Instruction::ApplyVolatileStatus(VolatileStatusInstruction {
                    side_ref: SideReference::SideTwo,
                    volatile_status: VolatileStatus::PROTECT,
                }),
                Instruction::RemoveVolatileStatus(VolatileStatusInstruction {
                    side_ref: SideReference::SideTwo,
                    volatile_status: VolatileStatus::PROTECT,
                }),
                Instruction::ChangeSideCondition(ChangeSideConditionInstruction {
                    side_ref: SideReference::SideTwo,
                    side_condition: PokemonSideCondition::Protect,
                    amount: 1,
                }),
            ]
        );
    }

    #[test]
    fn test_substitute_blocks_status_moves() {
        let mut state = setup(120, 80);
        give_move(&mut state, SideReference::SideOne, 0, MoveId::Thunderwave);
        state.side_two.volatile_statuses |= VolatileStatus::SUBSTITUTE;
        state.side_two.substitute_health = 50;

        let branches = generate(
            &mut state,
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::None,
        );

        assert_eq!(branches.len(), 1);
        assert!(branches[0].instruction_list.is_empty());
    }

    #[test]
    fn test_substitute_takes_the_hit() {
        let mut state = setup(120, 80);
        state.side_two.volatile_statuses |= VolatileStatus::SUBSTITUTE;
        state.side_two.substitute_health = 50;

        let branches = generate(
            &mut state,
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::None,
        );

        assert_eq!(branches.len(), 1);
        assert_eq!(
            branches[0].instruction_list,
            vec![Instruction::DamageSubstitute(DamageSubstituteInstruction {
                side_ref: SideReference::SideTwo,
                damage_amount: 48,
            })]
        );
    }

    #[test]
    fn test_substitute_breaks_at_zero() {
        let mut state = setup(120, 80);
        state.side_two.volatile_statuses |= VolatileStatus::SUBSTITUTE;
        state.side_two.substitute_health = 30;

        let branches = generate(
            &mut state,
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::None,
        );

        assert_eq!(branches.len(), 1);
        assert_eq!(
            branches[0].instruction_list,
            vec![
                Instruction::DamageSubstitute(DamageSubstituteInstruction {
                    side_ref: SideReference::SideTwo,
                    damage_amount: 30,
                }),
                Instruction::RemoveVolatileStatus(VolatileStatusInstruction {
                    side_ref: SideReference::SideTwo,
                    volatile_status: VolatileStatus::SUBSTITUTE,
                }),
            ]
        );
    }

    #[test]
    fn test_choice_item_locks_the_other_slots() {
        let mut state = setup(120, 80);
        state.side_one.get_active_mut().item = ItemId::Choicescarf;

        let branches = generate(
            &mut state,
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::None,
        );

        assert_eq!(branches.len(), 1);
        assert_eq!(
            branches[0].instruction_list,
            vec![
                Instruction::DisableMove(MoveSlotInstruction {
                    side_ref: SideReference::SideOne,
                    move_index: PokemonMoveIndex::M1,
                }),
                damage(SideReference::SideTwo, 48),
            ]
        );
    }

    #[test]
    fn test_switch_through_stealth_rock() {
        let mut state = setup(120, 80);
        state.side_one.pokemon[1] = battler(90);
        state.side_one.side_conditions.stealth_rock = 1;

        let branches = generate(
            &mut state,
            MoveChoice::Switch(PokemonIndex::P1),
            MoveChoice::None,
        );

        assert_eq!(branches.len(), 1);
        assert_eq!(
            branches[0].instruction_list,
            vec![
                Instruction::Switch(SwitchInstruction {
                    side_ref: SideReference::SideOne,
                    previous_index: PokemonIndex::P0,
                    next_index: PokemonIndex::P1,
                }),
                damage(SideReference::SideOne, 25),
            ]
        );
    }

    #[test]
    fn test_knockout_skips_the_second_action() {
        let mut state = setup(120, 80);
        give_move(&mut state, SideReference::SideOne, 0, MoveId::Highjumpkick);

        let branches = generate(
            &mut state,
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::Move(PokemonMoveIndex::M0),
        );

        // The hit knocks out before the defender moves; the miss halts.
        // Neither branch contains a defender action.
        for branch in &branches {
            assert!(!branch
                .instruction_list
                .contains(&damage(SideReference::SideOne, 48)));
        }
    }

    #[test]
    fn test_immune_arms_merge_into_one_branch() {
        let mut state = setup(120, 80);
        give_move(&mut state, SideReference::SideOne, 0, MoveId::Thunder);
        state.side_two.get_active_mut().types = [PokemonType::Ground, PokemonType::Typeless];

        let branches = generate(
            &mut state,
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::None,
        );

        // Hit and miss arms both resolve to nothing against a ground type
        // and collapse into a single certain branch.
        assert_eq!(branches.len(), 1);
        assert!((branches[0].probability - 1.0).abs() < 1e-6);
        assert!(branches[0].instruction_list.is_empty());
    }

    #[test]
    fn test_min_max_average_rolls_fork() {
        let mut state = setup(120, 80);
        let branches = generate_instructions_from_move_pair(
            &mut state,
            &MoveChoice::Move(PokemonMoveIndex::M0),
            &MoveChoice::None,
            DamageRolls::MinMaxAverage,
        );

        assert_eq!(branches.len(), 3);
        let amounts: Vec<i16> = branches
            .iter()
            .map(|branch| match branch.instruction_list[0] {
                Instruction::Damage(DamageInstruction { damage_amount, .. }) => damage_amount,
                _ => panic!("expected a damage instruction"),
            })
            .collect();
        assert_eq!(amounts, vec![44, 48, 52]);
        for branch in &branches {
            assert!((branch.probability - 1.0 / 3.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_branches_round_trip_through_the_state() {
        let mut state = setup(120, 80);
        give_move(&mut state, SideReference::SideOne, 0, MoveId::Rockslide);
        state.side_two.get_active_mut().ability = AbilityId::Static;
        state.side_two.get_active_mut().item = ItemId::Leftovers;
        state.side_two.get_active_mut().hp = 150;
        let before = state;

        let branches = generate(
            &mut state,
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::Move(PokemonMoveIndex::M0),
        );

        assert_eq!(state, before);
        for branch in &branches {
            state.apply_instructions(&branch.instruction_list);
            state.reverse_instructions(&branch.instruction_list);
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let mut state = setup(120, 80);
        give_move(&mut state, SideReference::SideOne, 0, MoveId::Rockslide);
        state.side_one.get_active_mut().status = PokemonStatus::Paralyze;

        let branches = generate(
            &mut state,
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::None,
        );

        let total: f32 = branches.iter().map(|branch| branch.probability).sum();
        assert!((total - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_charge_turn_then_release() {
        let mut state = setup(120, 80);
        give_move(&mut state, SideReference::SideOne, 0, MoveId::Phantomforce);
        // A ghost move needs a target that isn't immune to it.
        state.side_two.get_active_mut().types = [PokemonType::Water, PokemonType::Typeless];

        let branches = generate(
            &mut state,
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::None,
        );

        // First use only commits to the charge.
        assert_eq!(branches.len(), 1);
        assert_eq!(
            branches[0].instruction_list,
            vec![Instruction::ApplyVolatileStatus(VolatileStatusInstruction {
                side_ref: SideReference::SideOne,
                volatile_status: VolatileStatus::PHANTOM_FORCE,
            })]
        );

        // Release turn clears the volatile and deals damage.
        state.side_one.volatile_statuses |= VolatileStatus::PHANTOM_FORCE;
        let branches = generate(
            &mut state,
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::None,
        );
        assert_eq!(branches.len(), 1);
        assert_eq!(
            branches[0].instruction_list[0],
            Instruction::RemoveVolatileStatus(VolatileStatusInstruction {
                side_ref: SideReference::SideOne,
                volatile_status: VolatileStatus::PHANTOM_FORCE,
            })
        );
        assert!(matches!(
            branches[0].instruction_list[1],
            Instruction::Damage(_)
        ));
    }

    #[test]
    fn test_haze_resets_both_sides() {
        let mut state = setup(120, 80);
        give_move(&mut state, SideReference::SideOne, 0, MoveId::Haze);
        state.side_one.attack_boost = 2;
        state.side_two.speed_boost = -1;

        let branches = generate(
            &mut state,
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::None,
        );

        assert_eq!(branches.len(), 1);
        assert_eq!(
            branches[0].instruction_list,
            vec![
                Instruction::Boost(BoostInstruction {
                    side_ref: SideReference::SideOne,
                    stat: PokemonBoostableStat::Attack,
                    amount: -2,
                }),
                Instruction::Boost(BoostInstruction {
                    side_ref: SideReference::SideTwo,
                    stat: PokemonBoostableStat::Speed,
                    amount: 1,
                }),
            ]
        );
    }

    #[test]
    fn test_terastallizing_toggles_before_the_move() {
        let mut state = setup(120, 80);
        state.tera_allowed = true;
        state.side_one.get_active_mut().tera_type = PokemonType::Normal;

        let branches = generate(
            &mut state,
            MoveChoice::MoveTera(PokemonMoveIndex::M0),
            MoveChoice::None,
        );

        assert_eq!(branches.len(), 1);
        assert_eq!(
            branches[0].instruction_list[0],
            Instruction::ToggleTerastallized(ToggleTerastallizedInstruction {
                side_ref: SideReference::SideOne,
            })
        );
        // Normal tera on a normal type upgrades the STAB multiplier to 2x:
        // 35 * 2 = 70 max, 64 at the average roll.
        assert_eq!(
            branches[0].instruction_list[1],
            damage(SideReference::SideTwo, 64)
        );
    }
}
