use crate::abilities::AbilityFlags;
use crate::instruction::{BoostInstruction, Instruction};
use crate::state::{PokemonBoostableStat, SideReference, State};

/// Attack drop on the opposing active when the owner switches in. Respects
/// drop-blocking abilities and drop-punishing abilities on the target.
pub fn intimidate(state: &State, side_ref: SideReference) -> Vec<Instruction> {
    let target_ref = side_ref.get_other_side();
    let target_side = state.get_side(target_ref);
    let target_flags = target_side.get_active().ability.flags();

    if target_flags.contains(AbilityFlags::BLOCKS_STAT_DROPS) {
        return Vec::new();
    }

    let mut instructions = Vec::new();
    let drop = target_side.clamped_boost_delta(PokemonBoostableStat::Attack, -1);
    if drop != 0 {
        instructions.push(Instruction::Boost(BoostInstruction {
            side_ref: target_ref,
            stat: PokemonBoostableStat::Attack,
            amount: drop,
        }));
    }

    if target_flags.contains(AbilityFlags::PUNISHES_STAT_DROPS) {
        // The punishment boost applies on top of the drop that just landed
        let raise = (target_side.get_boost(PokemonBoostableStat::Attack) + drop + 2).clamp(-6, 6)
            - (target_side.get_boost(PokemonBoostableStat::Attack) + drop);
        if raise != 0 {
            instructions.push(Instruction::Boost(BoostInstruction {
                side_ref: target_ref,
                stat: PokemonBoostableStat::Attack,
                amount: raise,
            }));
        }
    }

    instructions
}
