use crate::instruction::{BoostInstruction, Instruction};
use crate::state::{PokemonBoostableStat, SideReference, State};

pub fn moxie(state: &State, side_ref: SideReference) -> Vec<Instruction> {
    let raise = state
        .get_side(side_ref)
        .clamped_boost_delta(PokemonBoostableStat::Attack, 1);
    if raise == 0 {
        return Vec::new();
    }
    vec![Instruction::Boost(BoostInstruction {
        side_ref,
        stat: PokemonBoostableStat::Attack,
        amount: raise,
    })]
}

/// Raises the owner's highest stored stat. Ties resolve in stat order:
/// attack, defense, special attack, special defense, speed.
pub fn beast_boost(state: &State, side_ref: SideReference) -> Vec<Instruction> {
    let side = state.get_side(side_ref);
    let owner = side.get_active();
    let mut best_stat = PokemonBoostableStat::Attack;
    let mut best_value = i16::MIN;
    for stat in [
        PokemonBoostableStat::Attack,
        PokemonBoostableStat::Defense,
        PokemonBoostableStat::SpecialAttack,
        PokemonBoostableStat::SpecialDefense,
        PokemonBoostableStat::Speed,
    ] {
        let value = owner.base_stat(stat);
        if value > best_value {
            best_value = value;
            best_stat = stat;
        }
    }
    let raise = side.clamped_boost_delta(best_stat, 1);
    if raise == 0 {
        return Vec::new();
    }
    vec![Instruction::Boost(BoostInstruction {
        side_ref,
        stat: best_stat,
        amount: raise,
    })]
}
