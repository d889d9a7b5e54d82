//! Damage calculation pipeline.
//!
//! `calculate_damage` resolves one attack to its maximum-roll damage as a
//! float: integer base formula, then type effectiveness, then the modifier
//! chain. `damage_rolls` expands that maximum into the configured roll
//! branches; the generator floors and caps the results against HP.

pub mod context;
pub mod effectiveness;
pub mod formula;
pub mod modifiers;
pub mod special;

pub use context::DamageContext;
pub use effectiveness::move_effectiveness;
pub use formula::get_base_damage;
pub use modifiers::{
    compute_effective_stats, effective_base_power, final_damage_multiplier, stab_multiplier,
};

use serde::{Deserialize, Serialize};

use crate::moves::MoveCategory;
use crate::state::State;

/// How random damage rolls are branched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageRolls {
    /// Single branch at the 92.5% average roll
    #[default]
    Average,
    /// Three equal branches at the 85%, 92.5%, and 100% rolls
    MinMaxAverage,
}

/// Maximum-roll damage for this attack, 0.0 on immunity or a status move.
pub fn calculate_damage(state: &State, ctx: &DamageContext) -> f32 {
    if ctx.category == MoveCategory::Status {
        return 0.0;
    }

    let effectiveness = move_effectiveness(state, ctx);
    if effectiveness == 0.0 {
        return 0.0;
    }

    if let Some(fixed) = special::fixed_damage(state, ctx) {
        return fixed;
    }

    let base_power = effective_base_power(state, ctx);
    if base_power <= 0.0 {
        return 0.0;
    }

    let attacker = state.get_side(ctx.attacking_side).get_active();
    let (offense, defense) = compute_effective_stats(state, ctx);
    let base = get_base_damage(
        attacker.level as u32,
        base_power as u32,
        offense as u32,
        defense as u32,
    );

    base as f32 * effectiveness * final_damage_multiplier(state, ctx)
}

/// Expand a maximum-roll damage into `(probability, floored amount)`
/// branches. A positive hit always deals at least 1.
pub fn damage_rolls(max_damage: f32, policy: DamageRolls) -> Vec<(f32, i16)> {
    if max_damage <= 0.0 {
        return vec![(1.0, 0)];
    }
    let floor_at_least_one = |roll: f32| ((max_damage * roll) as i16).max(1);
    match policy {
        DamageRolls::Average => vec![(1.0, floor_at_least_one(0.925))],
        DamageRolls::MinMaxAverage => vec![
            (1.0 / 3.0, floor_at_least_one(0.85)),
            (1.0 / 3.0, floor_at_least_one(0.925)),
            (1.0 / 3.0, floor_at_least_one(1.0)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::MoveId;
    use crate::state::{PokemonStatus, SideReference, State};
    use crate::types::PokemonType;

    fn setup(attacker_types: [PokemonType; 2], defender_types: [PokemonType; 2]) -> State {
        let mut state = State::default();
        let attacker = state.side_one.get_active_mut();
        attacker.level = 100;
        attacker.types = attacker_types;
        attacker.hp = 300;
        attacker.maxhp = 300;
        attacker.attack = 250;
        attacker.special_attack = 250;
        let defender = state.side_two.get_active_mut();
        defender.level = 100;
        defender.types = defender_types;
        defender.hp = 300;
        defender.maxhp = 300;
        defender.defense = 120;
        defender.special_defense = 120;
        state
    }

    #[test]
    fn test_neutral_damage_with_stab() {
        let state = setup(
            [PokemonType::Water, PokemonType::Typeless],
            [PokemonType::Normal, PokemonType::Typeless],
        );
        let ctx = DamageContext::new(SideReference::SideOne, MoveId::Surf, true, false);
        // base 159, stab 1.5, neutral effectiveness
        assert_eq!(calculate_damage(&state, &ctx), 238.5);
    }

    #[test]
    fn test_super_effective_doubles() {
        let state = setup(
            [PokemonType::Water, PokemonType::Typeless],
            [PokemonType::Fire, PokemonType::Typeless],
        );
        let ctx = DamageContext::new(SideReference::SideOne, MoveId::Surf, true, false);
        assert_eq!(calculate_damage(&state, &ctx), 477.0);
    }

    #[test]
    fn test_immunity_is_zero() {
        let state = setup(
            [PokemonType::Normal, PokemonType::Typeless],
            [PokemonType::Ghost, PokemonType::Typeless],
        );
        let ctx = DamageContext::new(SideReference::SideOne, MoveId::Tackle, true, false);
        assert_eq!(calculate_damage(&state, &ctx), 0.0);
    }

    #[test]
    fn test_fixed_damage_equals_level() {
        let state = setup(
            [PokemonType::Fighting, PokemonType::Typeless],
            [PokemonType::Normal, PokemonType::Typeless],
        );
        let ctx = DamageContext::new(SideReference::SideOne, MoveId::Seismictoss, true, false);
        assert_eq!(calculate_damage(&state, &ctx), 100.0);
    }

    #[test]
    fn test_fixed_damage_respects_immunity() {
        let state = setup(
            [PokemonType::Fighting, PokemonType::Typeless],
            [PokemonType::Ghost, PokemonType::Typeless],
        );
        let ctx = DamageContext::new(SideReference::SideOne, MoveId::Seismictoss, true, false);
        assert_eq!(calculate_damage(&state, &ctx), 0.0);
    }

    #[test]
    fn test_burn_halves_physical() {
        let mut state = setup(
            [PokemonType::Normal, PokemonType::Typeless],
            [PokemonType::Normal, PokemonType::Typeless],
        );
        let ctx = DamageContext::new(SideReference::SideOne, MoveId::Tackle, true, false);
        let unburned = calculate_damage(&state, &ctx);
        state.side_one.get_active_mut().status = PokemonStatus::Burn;
        let burned = calculate_damage(&state, &ctx);
        assert_eq!(burned, unburned / 2.0);
    }

    #[test]
    fn test_damage_rolls_average() {
        assert_eq!(damage_rolls(238.5, DamageRolls::Average), vec![(1.0, 220)]);
    }

    #[test]
    fn test_damage_rolls_min_max_average() {
        let rolls = damage_rolls(238.5, DamageRolls::MinMaxAverage);
        assert_eq!(rolls.len(), 3);
        assert_eq!(rolls[0].1, 202);
        assert_eq!(rolls[1].1, 220);
        assert_eq!(rolls[2].1, 238);
        let total: f32 = rolls.iter().map(|(p, _)| p).sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_damage_single_branch() {
        assert_eq!(damage_rolls(0.0, DamageRolls::MinMaxAverage), vec![(1.0, 0)]);
    }

    #[test]
    fn test_positive_hit_deals_at_least_one() {
        for (_, amount) in damage_rolls(0.4, DamageRolls::MinMaxAverage) {
            assert_eq!(amount, 1);
        }
        assert_eq!(damage_rolls(0.4, DamageRolls::Average), vec![(1.0, 1)]);
    }
}
