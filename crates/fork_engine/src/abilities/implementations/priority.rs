use crate::moves::{Move, MoveCategory, MoveFlags};
use crate::state::{SideReference, State};
use crate::types::PokemonType;

pub fn prankster(_state: &State, _side_ref: SideReference, mv: &Move) -> i8 {
    if mv.category == MoveCategory::Status {
        1
    } else {
        0
    }
}

/// Flying moves gain priority only while the owner is at full HP.
pub fn gale_wings(state: &State, side_ref: SideReference, mv: &Move) -> i8 {
    let owner = state.get_side(side_ref).get_active();
    if mv.move_type == PokemonType::Flying && owner.hp == owner.maxhp {
        1
    } else {
        0
    }
}

pub fn triage(_state: &State, _side_ref: SideReference, mv: &Move) -> i8 {
    if mv.flags.contains(MoveFlags::HEAL) {
        3
    } else {
        0
    }
}
