use crate::moves::{MoveCategory, MoveId};
use crate::state::SideReference;
use crate::types::PokemonType;

/// Everything the damage pipeline needs to know about one attack, resolved
/// once before the hit branches are generated.
#[derive(Clone, Copy, Debug)]
pub struct DamageContext {
    /// Which side is attacking
    pub attacking_side: SideReference,
    /// Move being used
    pub move_id: MoveId,
    /// Move category
    pub category: MoveCategory,
    /// Move type
    pub move_type: PokemonType,
    /// Whether the attacker acts before the defender this turn
    pub first_move: bool,
    /// Whether the defender's chosen action this turn is a switch
    pub defender_switching: bool,
}

impl DamageContext {
    pub fn new(
        attacking_side: SideReference,
        move_id: MoveId,
        first_move: bool,
        defender_switching: bool,
    ) -> Self {
        let mv = move_id.data();
        DamageContext {
            attacking_side,
            move_id,
            category: mv.category,
            move_type: mv.move_type,
            first_move,
            defender_switching,
        }
    }
}
