//! Legal action enumeration.
//!
//! Produces each side's choices for the coming turn: usable move slots,
//! terastallized variants while tera is still available, and switches to
//! alive reserves. Faints force replacement and the healthy side waits.

use crate::abilities::AbilityId;
use crate::items::ItemFlags;
use crate::moves::{MoveChoice, MoveFlags, MoveId};
use crate::state::{PokemonMoveIndex, Side, SideReference, State, VolatileStatus};
use crate::types::PokemonType;

impl State {
    /// All legal `(side_one, side_two)` choices from this position.
    pub fn get_all_options(&self) -> (Vec<MoveChoice>, Vec<MoveChoice>) {
        let side_one_fainted = !self.side_one.get_active().is_alive();
        let side_two_fainted = !self.side_two.get_active().is_alive();

        match (side_one_fainted, side_two_fainted) {
            (true, true) => (
                switch_options(&self.side_one),
                switch_options(&self.side_two),
            ),
            (true, false) => (switch_options(&self.side_one), vec![MoveChoice::None]),
            (false, true) => (vec![MoveChoice::None], switch_options(&self.side_two)),
            (false, false) => (
                side_options(self, SideReference::SideOne),
                side_options(self, SideReference::SideTwo),
            ),
        }
    }
}

/// Forced replacement after a faint. Trapping never applies here.
fn switch_options(side: &Side) -> Vec<MoveChoice> {
    let mut options: Vec<MoveChoice> = side
        .alive_reserve_indices()
        .into_iter()
        .map(MoveChoice::Switch)
        .collect();
    if options.is_empty() {
        options.push(MoveChoice::None);
    }
    options
}

fn side_options(state: &State, side_ref: SideReference) -> Vec<MoveChoice> {
    let side = state.get_side(side_ref);
    let active = side.get_active();

    // Mid charge move the only legal action is releasing it.
    if side.volatile_statuses.contains(VolatileStatus::PHANTOM_FORCE) {
        for slot in PokemonMoveIndex::ALL {
            if active.moves[slot as usize].id.data().flags.contains(MoveFlags::CHARGE) {
                return vec![MoveChoice::Move(slot)];
            }
        }
    }

    let mut options = Vec::new();
    for slot in PokemonMoveIndex::ALL {
        let move_slot = &active.moves[slot as usize];
        if move_slot.id != MoveId::None && !move_slot.disabled && move_slot.pp > 0 {
            options.push(MoveChoice::Move(slot));
        }
    }
    if state.tera_allowed && !side.used_tera && !active.terastallized {
        for slot in PokemonMoveIndex::ALL {
            let move_slot = &active.moves[slot as usize];
            if move_slot.id != MoveId::None && !move_slot.disabled && move_slot.pp > 0 {
                options.push(MoveChoice::MoveTera(slot));
            }
        }
    }
    if !is_trapped(state, side_ref) {
        for reserve in side.alive_reserve_indices() {
            options.push(MoveChoice::Switch(reserve));
        }
    }
    if options.is_empty() {
        options.push(MoveChoice::None);
    }
    options
}

/// Whether a side's active combatant is prevented from switching out.
pub fn is_trapped(state: &State, side_ref: SideReference) -> bool {
    let side = state.get_side(side_ref);
    let active = side.get_active();

    if active.item.has_flag(ItemFlags::CAN_ALWAYS_SWITCH) {
        return false;
    }
    if active.has_type(PokemonType::Ghost) {
        return false;
    }
    if side.volatile_statuses.contains(VolatileStatus::PARTIALLY_TRAPPED) {
        return true;
    }

    let opponent = state.get_side(side_ref.get_other_side()).get_active();
    match opponent.ability {
        AbilityId::Shadowtag => true,
        AbilityId::Magnetpull => active.has_type(PokemonType::Steel),
        AbilityId::Arenatrap => side.active_is_grounded(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemId;
    use crate::state::PokemonIndex;

    fn team_member(speed: i16) -> crate::state::Pokemon {
        let mut pokemon = crate::state::Pokemon::default();
        pokemon.level = 81;
        pokemon.types = [PokemonType::Normal, PokemonType::Typeless];
        pokemon.hp = 100;
        pokemon.maxhp = 100;
        pokemon.speed = speed;
        pokemon
    }

    fn setup() -> State {
        let mut state = State::default();
        for side in [&mut state.side_one, &mut state.side_two] {
            for slot in PokemonIndex::ALL {
                side.pokemon[slot as usize] = team_member(100);
            }
            let active = side.get_active_mut();
            let move_ids = [MoveId::Tackle, MoveId::Charm, MoveId::Growl, MoveId::Willowisp];
            for (i, id) in move_ids.into_iter().enumerate() {
                active.moves[i].id = id;
                active.moves[i].disabled = false;
                active.moves[i].pp = 32;
            }
        }
        state
    }

    #[test]
    fn test_moves_then_switches() {
        let state = setup();
        let (one, two) = state.get_all_options();
        let expected = vec![
            MoveChoice::Move(PokemonMoveIndex::M0),
            MoveChoice::Move(PokemonMoveIndex::M1),
            MoveChoice::Move(PokemonMoveIndex::M2),
            MoveChoice::Move(PokemonMoveIndex::M3),
            MoveChoice::Switch(PokemonIndex::P1),
            MoveChoice::Switch(PokemonIndex::P2),
            MoveChoice::Switch(PokemonIndex::P3),
            MoveChoice::Switch(PokemonIndex::P4),
            MoveChoice::Switch(PokemonIndex::P5),
        ];
        assert_eq!(one, expected);
        assert_eq!(two, expected);
    }

    #[test]
    fn test_tera_variants_between_moves_and_switches() {
        let mut state = setup();
        state.tera_allowed = true;
        let (one, _) = state.get_all_options();
        assert_eq!(one.len(), 13);
        assert_eq!(one[4], MoveChoice::MoveTera(PokemonMoveIndex::M0));
        assert_eq!(one[7], MoveChoice::MoveTera(PokemonMoveIndex::M3));
        assert_eq!(one[8], MoveChoice::Switch(PokemonIndex::P1));
    }

    #[test]
    fn test_spent_tera_removes_tera_options() {
        let mut state = setup();
        state.tera_allowed = true;
        state.side_one.used_tera = true;
        let (one, two) = state.get_all_options();
        assert_eq!(one.len(), 9);
        assert_eq!(two.len(), 13);
    }

    #[test]
    fn test_disabled_and_exhausted_slots_excluded() {
        let mut state = setup();
        {
            let active = state.side_one.get_active_mut();
            active.moves[PokemonMoveIndex::M1 as usize].disabled = true;
            active.moves[PokemonMoveIndex::M3 as usize].pp = 0;
        }
        let (one, _) = state.get_all_options();
        assert_eq!(
            &one[..2],
            &[
                MoveChoice::Move(PokemonMoveIndex::M0),
                MoveChoice::Move(PokemonMoveIndex::M2),
            ]
        );
        assert_eq!(one.len(), 7);
    }

    #[test]
    fn test_fainted_active_forces_switches() {
        let mut state = setup();
        state.side_one.get_active_mut().hp = 0;
        let (one, two) = state.get_all_options();
        assert_eq!(
            one,
            vec![
                MoveChoice::Switch(PokemonIndex::P1),
                MoveChoice::Switch(PokemonIndex::P2),
                MoveChoice::Switch(PokemonIndex::P3),
                MoveChoice::Switch(PokemonIndex::P4),
                MoveChoice::Switch(PokemonIndex::P5),
            ]
        );
        assert_eq!(two, vec![MoveChoice::None]);
    }

    #[test]
    fn test_fainted_with_no_reserves_passes() {
        let mut state = setup();
        for slot in PokemonIndex::ALL {
            state.side_one.pokemon[slot as usize].hp = 0;
        }
        let (one, two) = state.get_all_options();
        assert_eq!(one, vec![MoveChoice::None]);
        assert_eq!(two, vec![MoveChoice::None]);
    }

    #[test]
    fn test_double_faint_both_replace() {
        let mut state = setup();
        state.side_one.get_active_mut().hp = 0;
        state.side_two.get_active_mut().hp = 0;
        let (one, two) = state.get_all_options();
        assert_eq!(one.len(), 5);
        assert_eq!(two.len(), 5);
        assert!(one.iter().all(|choice| choice.is_switch()));
        assert!(two.iter().all(|choice| choice.is_switch()));
    }

    #[test]
    fn test_shadow_tag_blocks_switches() {
        let mut state = setup();
        state.side_two.get_active_mut().ability = AbilityId::Shadowtag;
        let (one, two) = state.get_all_options();
        assert_eq!(one.len(), 4);
        assert!(one.iter().all(|choice| !choice.is_switch()));
        assert_eq!(two.len(), 9);
    }

    #[test]
    fn test_ghost_types_ignore_trapping() {
        let mut state = setup();
        state.side_two.get_active_mut().ability = AbilityId::Shadowtag;
        state.side_one.get_active_mut().types = [PokemonType::Ghost, PokemonType::Typeless];
        assert!(!is_trapped(&state, SideReference::SideOne));
    }

    #[test]
    fn test_shed_shell_ignores_trapping() {
        let mut state = setup();
        state.side_two.get_active_mut().ability = AbilityId::Shadowtag;
        state.side_one.get_active_mut().item = ItemId::Shedshell;
        assert!(!is_trapped(&state, SideReference::SideOne));
    }

    #[test]
    fn test_magnet_pull_traps_steel_only() {
        let mut state = setup();
        state.side_two.get_active_mut().ability = AbilityId::Magnetpull;
        assert!(!is_trapped(&state, SideReference::SideOne));
        state.side_one.get_active_mut().types = [PokemonType::Steel, PokemonType::Typeless];
        assert!(is_trapped(&state, SideReference::SideOne));
    }

    #[test]
    fn test_arena_trap_spares_airborne() {
        let mut state = setup();
        state.side_two.get_active_mut().ability = AbilityId::Arenatrap;
        assert!(is_trapped(&state, SideReference::SideOne));
        state.side_one.get_active_mut().types = [PokemonType::Flying, PokemonType::Typeless];
        assert!(!is_trapped(&state, SideReference::SideOne));
    }

    #[test]
    fn test_partial_trap_blocks_switches() {
        let mut state = setup();
        state
            .side_one
            .volatile_statuses
            .insert(VolatileStatus::PARTIALLY_TRAPPED);
        assert!(is_trapped(&state, SideReference::SideOne));
    }

    #[test]
    fn test_charge_release_is_only_option() {
        let mut state = setup();
        {
            let active = state.side_one.get_active_mut();
            active.moves[PokemonMoveIndex::M2 as usize].id = MoveId::Phantomforce;
        }
        state
            .side_one
            .volatile_statuses
            .insert(VolatileStatus::PHANTOM_FORCE);
        let (one, _) = state.get_all_options();
        assert_eq!(one, vec![MoveChoice::Move(PokemonMoveIndex::M2)]);
    }
}
