//! Between-turns residuals.
//!
//! Runs after both actions have resolved, in a fixed phase order with side
//! one processed before side two inside each phase. Every phase re-checks
//! liveness against the partially advanced state, so a combatant that
//! faints to an early residual stops taking later ones.

use crate::abilities::{ability_hooks, AbilityFlags};
use crate::damage::{get_base_damage, move_effectiveness, stab_multiplier, DamageContext};
use crate::instruction::{
    ChangeSideConditionInstruction, DamageInstruction, HealInstruction, Instruction,
    SideReferenceInstruction, StateInstructions, VolatileStatusInstruction,
};
use crate::items::item_hooks;
use crate::moves::MoveId;
use crate::state::{
    PokemonBoostableStat, PokemonSideCondition, PokemonStatus, SideReference, State, Terrain,
    VolatileStatus, Weather,
};
use crate::types::PokemonType;

const SIDES: [SideReference; 2] = [SideReference::SideOne, SideReference::SideTwo];

/// Append this turn's residual effects to an already-advanced branch.
///
/// The state must reflect `branch.instruction_list`; each residual is
/// applied as it is recorded so later phases see earlier ones.
pub fn add_end_of_turn_instructions(state: &mut State, branch: &mut StateInstructions) {
    weather_damage(state, branch);
    grassy_terrain_heal(state, branch);
    item_residuals(state, branch);
    status_residuals(state, branch);
    ability_residuals(state, branch);
    trapped_damage(state, branch);
    leech_seed(state, branch);
    future_sight(state, branch);
    wish(state, branch);
    protect_bookkeeping(state, branch);
    fainted_cleanup(state, branch);
}

fn weather_damage(state: &mut State, branch: &mut StateInstructions) {
    if state.weather.weather_type != Weather::Sand {
        return;
    }
    for side_ref in SIDES {
        let active = state.get_side(side_ref).get_active();
        if !active.is_alive()
            || active.has_type(PokemonType::Rock)
            || active.has_type(PokemonType::Ground)
            || active.has_type(PokemonType::Steel)
            || active.ability.has_flag(AbilityFlags::IMMUNE_INDIRECT)
        {
            continue;
        }
        let damage = (active.maxhp / 16).min(active.hp);
        branch.push_and_apply(
            state,
            Instruction::Damage(DamageInstruction {
                side_ref,
                damage_amount: damage,
            }),
        );
    }
}

fn grassy_terrain_heal(state: &mut State, branch: &mut StateInstructions) {
    if state.terrain.terrain_type != Terrain::GrassyTerrain {
        return;
    }
    for side_ref in SIDES {
        let side = state.get_side(side_ref);
        let active = side.get_active();
        if !active.is_alive() || active.hp == active.maxhp || !side.active_is_grounded() {
            continue;
        }
        let heal = (active.maxhp / 16).min(active.maxhp - active.hp);
        branch.push_and_apply(
            state,
            Instruction::Heal(HealInstruction {
                side_ref,
                heal_amount: heal,
            }),
        );
    }
}

fn item_residuals(state: &mut State, branch: &mut StateInstructions) {
    for side_ref in SIDES {
        let active = state.get_side(side_ref).get_active();
        if !active.is_alive() {
            continue;
        }
        if let Some(hooks) = item_hooks(active.item) {
            if let Some(end_of_turn) = hooks.end_of_turn {
                let instructions = end_of_turn(state, side_ref);
                branch.extend_and_apply(state, instructions);
            }
        }
    }
}

fn status_residuals(state: &mut State, branch: &mut StateInstructions) {
    for side_ref in SIDES {
        let active = state.get_side(side_ref).get_active();
        if !active.is_alive() {
            continue;
        }
        let immune = active.ability.has_flag(AbilityFlags::IMMUNE_INDIRECT);
        match active.status {
            PokemonStatus::Burn => {
                if !immune {
                    let damage = (active.maxhp / 16).min(active.hp);
                    branch.push_and_apply(
                        state,
                        Instruction::Damage(DamageInstruction {
                            side_ref,
                            damage_amount: damage,
                        }),
                    );
                }
            }
            PokemonStatus::Poison => {
                if !immune {
                    let damage = (active.maxhp / 8).min(active.hp);
                    branch.push_and_apply(
                        state,
                        Instruction::Damage(DamageInstruction {
                            side_ref,
                            damage_amount: damage,
                        }),
                    );
                }
            }
            PokemonStatus::Toxic => {
                if !immune {
                    let count = state.get_side(side_ref).side_conditions.toxic_count;
                    let damage =
                        (active.maxhp / 16 * (count as i16 + 1)).min(active.hp);
                    branch.push_and_apply(
                        state,
                        Instruction::Damage(DamageInstruction {
                            side_ref,
                            damage_amount: damage,
                        }),
                    );
                }
                // The ramp counter advances even when the damage is blocked
                branch.push_and_apply(
                    state,
                    Instruction::ChangeSideCondition(ChangeSideConditionInstruction {
                        side_ref,
                        side_condition: PokemonSideCondition::ToxicCount,
                        amount: 1,
                    }),
                );
            }
            _ => {}
        }
    }
}

fn ability_residuals(state: &mut State, branch: &mut StateInstructions) {
    for side_ref in SIDES {
        let active = state.get_side(side_ref).get_active();
        if !active.is_alive() {
            continue;
        }
        if let Some(hooks) = ability_hooks(active.ability) {
            if let Some(end_of_turn) = hooks.end_of_turn {
                let instructions = end_of_turn(state, side_ref);
                branch.extend_and_apply(state, instructions);
            }
        }
    }
}

fn trapped_damage(state: &mut State, branch: &mut StateInstructions) {
    for side_ref in SIDES {
        let side = state.get_side(side_ref);
        let active = side.get_active();
        if !active.is_alive()
            || !side.volatile_statuses.contains(VolatileStatus::PARTIALLY_TRAPPED)
            || active.ability.has_flag(AbilityFlags::IMMUNE_INDIRECT)
        {
            continue;
        }
        let damage = (active.maxhp / 8).min(active.hp);
        branch.push_and_apply(
            state,
            Instruction::Damage(DamageInstruction {
                side_ref,
                damage_amount: damage,
            }),
        );
    }
}

fn leech_seed(state: &mut State, branch: &mut StateInstructions) {
    for side_ref in SIDES {
        let side = state.get_side(side_ref);
        let active = side.get_active();
        if !active.is_alive()
            || !side.volatile_statuses.contains(VolatileStatus::LEECH_SEED)
            || active.ability.has_flag(AbilityFlags::IMMUNE_INDIRECT)
        {
            continue;
        }
        let sapped = (active.maxhp / 8).min(active.hp);
        branch.push_and_apply(
            state,
            Instruction::Damage(DamageInstruction {
                side_ref,
                damage_amount: sapped,
            }),
        );
        let other_ref = side_ref.get_other_side();
        let other = state.get_side(other_ref).get_active();
        if other.is_alive() && other.hp < other.maxhp {
            let heal = sapped.min(other.maxhp - other.hp);
            branch.push_and_apply(
                state,
                Instruction::Heal(HealInstruction {
                    side_ref: other_ref,
                    heal_amount: heal,
                }),
            );
        }
    }
}

fn future_sight(state: &mut State, branch: &mut StateInstructions) {
    for side_ref in SIDES {
        if state.get_side(side_ref).future_sight.0 == 0 {
            continue;
        }
        branch.push_and_apply(
            state,
            Instruction::DecrementFutureSight(SideReferenceInstruction { side_ref }),
        );
        if state.get_side(side_ref).future_sight.0 > 0 {
            continue;
        }
        let target_ref = side_ref.get_other_side();
        let target_side = state.get_side(target_ref);
        let target = target_side.get_active();
        if !target.is_alive() {
            continue;
        }
        // The hit comes from the slot that launched it, boosts not included
        let launcher_index = state.get_side(side_ref).future_sight.1;
        let launcher = &state.get_side(side_ref).pokemon[launcher_index as usize];
        let mv = MoveId::Futuresight.data();
        let ctx = DamageContext::new(side_ref, MoveId::Futuresight, false, false);
        let effectiveness = move_effectiveness(state, &ctx);
        if effectiveness == 0.0 {
            continue;
        }
        let defense =
            target_side.calculate_boosted_stat(PokemonBoostableStat::SpecialDefense);
        let base = get_base_damage(
            launcher.level as u32,
            mv.base_power as u32,
            launcher.special_attack.max(1) as u32,
            defense.max(1) as u32,
        );
        let stab = stab_multiplier(launcher, mv.move_type);
        let damage = (base as f32 * stab * effectiveness * 0.925) as i16;
        let damage = damage.max(1).min(target.hp);
        branch.push_and_apply(
            state,
            Instruction::Damage(DamageInstruction {
                side_ref: target_ref,
                damage_amount: damage,
            }),
        );
    }
}

fn wish(state: &mut State, branch: &mut StateInstructions) {
    for side_ref in SIDES {
        let (turns, stored_heal) = state.get_side(side_ref).wish;
        if turns == 0 {
            continue;
        }
        branch.push_and_apply(
            state,
            Instruction::DecrementWish(SideReferenceInstruction { side_ref }),
        );
        if state.get_side(side_ref).wish.0 > 0 {
            continue;
        }
        let active = state.get_side(side_ref).get_active();
        if active.is_alive() && active.hp < active.maxhp {
            let heal = stored_heal.min(active.maxhp - active.hp);
            branch.push_and_apply(
                state,
                Instruction::Heal(HealInstruction {
                    side_ref,
                    heal_amount: heal,
                }),
            );
        }
    }
}

fn protect_bookkeeping(state: &mut State, branch: &mut StateInstructions) {
    for side_ref in SIDES {
        let side = state.get_side(side_ref);
        if side.volatile_statuses.contains(VolatileStatus::PROTECT) {
            branch.push_and_apply(
                state,
                Instruction::RemoveVolatileStatus(VolatileStatusInstruction {
                    side_ref,
                    volatile_status: VolatileStatus::PROTECT,
                }),
            );
            branch.push_and_apply(
                state,
                Instruction::ChangeSideCondition(ChangeSideConditionInstruction {
                    side_ref,
                    side_condition: PokemonSideCondition::Protect,
                    amount: 1,
                }),
            );
        } else {
            let streak = side.side_conditions.protect;
            if streak > 0 {
                branch.push_and_apply(
                    state,
                    Instruction::ChangeSideCondition(ChangeSideConditionInstruction {
                        side_ref,
                        side_condition: PokemonSideCondition::Protect,
                        amount: -streak,
                    }),
                );
            }
        }
    }
}

fn fainted_cleanup(state: &mut State, branch: &mut StateInstructions) {
    for side_ref in SIDES {
        let side = state.get_side(side_ref);
        let volatiles = side.volatile_statuses;
        if !side.get_active().is_alive() {
            for volatile_status in volatiles.iter() {
                branch.push_and_apply(
                    state,
                    Instruction::RemoveVolatileStatus(VolatileStatusInstruction {
                        side_ref,
                        volatile_status,
                    }),
                );
            }
        } else if volatiles.contains(VolatileStatus::FLINCH) {
            branch.push_and_apply(
                state,
                Instruction::RemoveVolatileStatus(VolatileStatusInstruction {
                    side_ref,
                    volatile_status: VolatileStatus::FLINCH,
                }),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::AbilityId;
    use crate::items::ItemId;
    use crate::state::{PokemonIndex, TerrainState, WeatherState};

    fn setup() -> State {
        let mut state = State::default();
        for side in [&mut state.side_one, &mut state.side_two] {
            let active = side.get_active_mut();
            active.level = 81;
            active.types = [PokemonType::Normal, PokemonType::Typeless];
            active.hp = 160;
            active.maxhp = 160;
            active.special_attack = 100;
            active.special_defense = 100;
        }
        state
    }

    fn run(state: &mut State) -> StateInstructions {
        let mut branch = StateInstructions::default();
        add_end_of_turn_instructions(state, &mut branch);
        branch
    }

    #[test]
    fn test_quiet_position_produces_nothing() {
        let mut state = setup();
        let branch = run(&mut state);
        assert!(branch.instruction_list.is_empty());
    }

    #[test]
    fn test_sand_chips_both_sides() {
        let mut state = setup();
        state.weather = WeatherState {
            weather_type: Weather::Sand,
            turns_remaining: -1,
        };
        let branch = run(&mut state);
        assert_eq!(
            branch.instruction_list,
            vec![
                Instruction::Damage(DamageInstruction {
                    side_ref: SideReference::SideOne,
                    damage_amount: 10,
                }),
                Instruction::Damage(DamageInstruction {
                    side_ref: SideReference::SideTwo,
                    damage_amount: 10,
                }),
            ]
        );
        assert_eq!(state.side_one.get_active().hp, 150);
    }

    #[test]
    fn test_sand_spares_rock_types_and_magic_guard() {
        let mut state = setup();
        state.weather.weather_type = Weather::Sand;
        state.side_one.get_active_mut().types = [PokemonType::Rock, PokemonType::Typeless];
        state.side_two.get_active_mut().ability = AbilityId::Magicguard;
        let branch = run(&mut state);
        assert!(branch.instruction_list.is_empty());
    }

    #[test]
    fn test_snow_does_not_chip() {
        let mut state = setup();
        state.weather.weather_type = Weather::Snow;
        let branch = run(&mut state);
        assert!(branch.instruction_list.is_empty());
    }

    #[test]
    fn test_grassy_terrain_heals_grounded_only() {
        let mut state = setup();
        state.terrain = TerrainState {
            terrain_type: Terrain::GrassyTerrain,
            turns_remaining: 3,
        };
        state.side_one.get_active_mut().hp = 100;
        let two = state.side_two.get_active_mut();
        two.hp = 100;
        two.types = [PokemonType::Flying, PokemonType::Typeless];
        let branch = run(&mut state);
        assert_eq!(
            branch.instruction_list,
            vec![Instruction::Heal(HealInstruction {
                side_ref: SideReference::SideOne,
                heal_amount: 10,
            })]
        );
    }

    #[test]
    fn test_leftovers_heal_before_burn_damage() {
        let mut state = setup();
        let active = state.side_one.get_active_mut();
        active.hp = 100;
        active.item = ItemId::Leftovers;
        active.status = PokemonStatus::Burn;
        let branch = run(&mut state);
        assert_eq!(
            branch.instruction_list,
            vec![
                Instruction::Heal(HealInstruction {
                    side_ref: SideReference::SideOne,
                    heal_amount: 10,
                }),
                Instruction::Damage(DamageInstruction {
                    side_ref: SideReference::SideOne,
                    damage_amount: 10,
                }),
            ]
        );
    }

    #[test]
    fn test_toxic_ramps_with_counter() {
        let mut state = setup();
        state.side_one.get_active_mut().status = PokemonStatus::Toxic;
        state.side_one.side_conditions.toxic_count = 2;
        let branch = run(&mut state);
        assert_eq!(
            branch.instruction_list,
            vec![
                Instruction::Damage(DamageInstruction {
                    side_ref: SideReference::SideOne,
                    damage_amount: 30,
                }),
                Instruction::ChangeSideCondition(ChangeSideConditionInstruction {
                    side_ref: SideReference::SideOne,
                    side_condition: PokemonSideCondition::ToxicCount,
                    amount: 1,
                }),
            ]
        );
        assert_eq!(state.side_one.side_conditions.toxic_count, 3);
    }

    #[test]
    fn test_magic_guard_blocks_toxic_damage_not_ramp() {
        let mut state = setup();
        let active = state.side_one.get_active_mut();
        active.status = PokemonStatus::Toxic;
        active.ability = AbilityId::Magicguard;
        let branch = run(&mut state);
        assert_eq!(
            branch.instruction_list,
            vec![Instruction::ChangeSideCondition(
                ChangeSideConditionInstruction {
                    side_ref: SideReference::SideOne,
                    side_condition: PokemonSideCondition::ToxicCount,
                    amount: 1,
                }
            )]
        );
    }

    #[test]
    fn test_speed_boost_raises_stage() {
        let mut state = setup();
        state.side_one.get_active_mut().ability = AbilityId::Speedboost;
        let branch = run(&mut state);
        assert_eq!(branch.instruction_list.len(), 1);
        assert_eq!(state.side_one.speed_boost, 1);
    }

    #[test]
    fn test_leech_seed_saps_and_heals() {
        let mut state = setup();
        state
            .side_one
            .volatile_statuses
            .insert(VolatileStatus::LEECH_SEED);
        state.side_two.get_active_mut().hp = 155;
        let branch = run(&mut state);
        assert_eq!(
            branch.instruction_list,
            vec![
                Instruction::Damage(DamageInstruction {
                    side_ref: SideReference::SideOne,
                    damage_amount: 20,
                }),
                Instruction::Heal(HealInstruction {
                    side_ref: SideReference::SideTwo,
                    heal_amount: 5,
                }),
            ]
        );
    }

    #[test]
    fn test_binding_chip() {
        let mut state = setup();
        state
            .side_one
            .volatile_statuses
            .insert(VolatileStatus::PARTIALLY_TRAPPED);
        let branch = run(&mut state);
        assert_eq!(
            branch.instruction_list,
            vec![Instruction::Damage(DamageInstruction {
                side_ref: SideReference::SideOne,
                damage_amount: 20,
            })]
        );
    }

    #[test]
    fn test_wish_counts_down_then_heals() {
        let mut state = setup();
        state.side_one.wish = (2, 80);
        state.side_one.get_active_mut().hp = 50;
        let branch = run(&mut state);
        assert_eq!(branch.instruction_list.len(), 1);
        assert_eq!(state.side_one.wish, (1, 80));

        let branch = run(&mut state);
        assert_eq!(
            branch.instruction_list,
            vec![
                Instruction::DecrementWish(SideReferenceInstruction {
                    side_ref: SideReference::SideOne,
                }),
                Instruction::Heal(HealInstruction {
                    side_ref: SideReference::SideOne,
                    heal_amount: 80,
                }),
            ]
        );
        assert_eq!(state.side_one.get_active().hp, 130);
        assert_eq!(state.side_one.wish, (0, 80));
    }

    #[test]
    fn test_wish_heal_clamps_to_missing_hp() {
        let mut state = setup();
        state.side_one.wish = (1, 80);
        state.side_one.get_active_mut().hp = 150;
        let branch = run(&mut state);
        assert_eq!(branch.instruction_list.len(), 2);
        assert_eq!(state.side_one.get_active().hp, 160);
    }

    #[test]
    fn test_future_sight_lands_when_counter_runs_out() {
        let mut state = setup();
        state.side_one.future_sight = (1, PokemonIndex::P0);
        let active = state.side_one.get_active_mut();
        active.types = [PokemonType::Psychic, PokemonType::Typeless];
        let branch = run(&mut state);
        assert_eq!(branch.instruction_list.len(), 2);
        assert_eq!(
            branch.instruction_list[0],
            Instruction::DecrementFutureSight(SideReferenceInstruction {
                side_ref: SideReference::SideOne,
            })
        );
        // level 81, bp 120, 100/100 offense into defense: base 83, stab 1.5,
        // neutral hit, then the averaged roll
        assert_eq!(
            branch.instruction_list[1],
            Instruction::Damage(DamageInstruction {
                side_ref: SideReference::SideTwo,
                damage_amount: 115,
            })
        );
    }

    #[test]
    fn test_protect_streak_increments_and_resets() {
        let mut state = setup();
        state
            .side_one
            .volatile_statuses
            .insert(VolatileStatus::PROTECT);
        let branch = run(&mut state);
        assert_eq!(branch.instruction_list.len(), 2);
        assert_eq!(state.side_one.side_conditions.protect, 1);
        assert!(!state
            .side_one
            .volatile_statuses
            .contains(VolatileStatus::PROTECT));

        // The turn after not protecting, the streak resets
        let branch = run(&mut state);
        assert_eq!(
            branch.instruction_list,
            vec![Instruction::ChangeSideCondition(
                ChangeSideConditionInstruction {
                    side_ref: SideReference::SideOne,
                    side_condition: PokemonSideCondition::Protect,
                    amount: -1,
                }
            )]
        );
        assert_eq!(state.side_one.side_conditions.protect, 0);
    }

    #[test]
    fn test_fainted_active_loses_volatiles() {
        let mut state = setup();
        let active = state.side_one.get_active_mut();
        active.hp = 0;
        state
            .side_one
            .volatile_statuses
            .insert(VolatileStatus::CONFUSION | VolatileStatus::LEECH_SEED);
        let branch = run(&mut state);
        assert_eq!(branch.instruction_list.len(), 2);
        assert!(state.side_one.volatile_statuses.is_empty());
    }

    #[test]
    fn test_flinch_clears_from_living_active() {
        let mut state = setup();
        state
            .side_one
            .volatile_statuses
            .insert(VolatileStatus::FLINCH);
        let branch = run(&mut state);
        assert_eq!(
            branch.instruction_list,
            vec![Instruction::RemoveVolatileStatus(VolatileStatusInstruction {
                side_ref: SideReference::SideOne,
                volatile_status: VolatileStatus::FLINCH,
            })]
        );
    }

    #[test]
    fn test_round_trip_restores_state() {
        let mut state = setup();
        state.weather.weather_type = Weather::Sand;
        state.side_one.get_active_mut().status = PokemonStatus::Toxic;
        state.side_two.get_active_mut().item = ItemId::Leftovers;
        state.side_two.get_active_mut().hp = 100;
        state.side_one.wish = (1, 40);
        let original = state;
        let branch = run(&mut state);
        assert!(!branch.instruction_list.is_empty());
        state.reverse_instructions(&branch.instruction_list);
        assert_eq!(state, original);
    }
}
