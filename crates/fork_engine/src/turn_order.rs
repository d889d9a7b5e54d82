//! Action ordering within a turn.
//!
//! Switches resolve before moves, moves resolve by priority bracket, and
//! brackets break on effective speed. Trick Room inverts the speed
//! comparison without touching priority. Exact ties always favor side two
//! so the generator stays deterministic.

use crate::abilities::{ability_hooks, AbilityFlags};
use crate::items::item_hooks;
use crate::moves::{MoveChoice, MoveId};
use crate::state::{PokemonBoostableStat, PokemonStatus, SideReference, State, Terrain};

/// Speed of a side's active combatant after boosts, ability and item
/// multipliers, Tailwind and paralysis. Truncates like the cartridge.
pub fn effective_speed(state: &State, side_ref: SideReference) -> i16 {
    let side = state.get_side(side_ref);
    let active = side.get_active();
    let mut speed = side.calculate_boosted_stat(PokemonBoostableStat::Speed) as f32;

    if let Some(hooks) = ability_hooks(active.ability) {
        if let Some(multiplier) = hooks.speed_multiplier {
            speed *= multiplier(state, side_ref);
        }
    }
    if let Some(hooks) = item_hooks(active.item) {
        if let Some(multiplier) = hooks.speed_multiplier {
            speed *= multiplier(state, side_ref);
        }
    }
    if side.side_conditions.tailwind > 0 {
        speed *= 1.5;
    }
    if active.status == PokemonStatus::Paralyze
        && !active.ability.has_flag(AbilityFlags::PARALYSIS_SPEED_EXEMPT)
    {
        speed *= 0.5;
    }

    speed as i16
}

/// Priority bracket for a chosen action. Moves read the data table plus
/// any ability shift; switches and forced passes sort as bracket zero.
pub fn effective_priority(state: &State, side_ref: SideReference, choice: &MoveChoice) -> i8 {
    let slot = match choice.move_index() {
        Some(slot) => slot,
        None => return 0,
    };
    let side = state.get_side(side_ref);
    let active = side.get_active();
    let move_id = active.moves[slot as usize].id;
    let mv = move_id.data();

    let mut priority = mv.priority;
    if let Some(hooks) = ability_hooks(active.ability) {
        if let Some(modifier) = hooks.priority_modifier {
            priority += modifier(state, side_ref, mv);
        }
    }
    if move_id == MoveId::Grassyglide
        && state.terrain.terrain_type == Terrain::GrassyTerrain
        && side.active_is_grounded()
    {
        priority += 1;
    }

    priority
}

/// Which side's action resolves first this turn.
///
/// Pursuit against a switching target is handled before this is consulted,
/// so here a switch always outruns a move.
pub fn first_to_move(
    state: &State,
    side_one_choice: &MoveChoice,
    side_two_choice: &MoveChoice,
) -> SideReference {
    match (side_one_choice.is_switch(), side_two_choice.is_switch()) {
        (true, false) => SideReference::SideOne,
        (false, true) => SideReference::SideTwo,
        (true, true) => faster_side(state),
        (false, false) => {
            let side_one_priority =
                effective_priority(state, SideReference::SideOne, side_one_choice);
            let side_two_priority =
                effective_priority(state, SideReference::SideTwo, side_two_choice);
            if side_one_priority > side_two_priority {
                SideReference::SideOne
            } else if side_two_priority > side_one_priority {
                SideReference::SideTwo
            } else {
                faster_side(state)
            }
        }
    }
}

/// Speed comparison within a priority bracket. Ties go to side two.
fn faster_side(state: &State) -> SideReference {
    let side_one_speed = effective_speed(state, SideReference::SideOne);
    let side_two_speed = effective_speed(state, SideReference::SideTwo);
    let side_one_outspeeds = if state.trick_room {
        side_one_speed < side_two_speed
    } else {
        side_one_speed > side_two_speed
    };
    if side_one_outspeeds {
        SideReference::SideOne
    } else {
        SideReference::SideTwo
    }
}
