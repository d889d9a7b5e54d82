//! Benchmarks for full-turn branch generation.
//!
//! Target: enough turns/sec that a tree search can expand thousands of
//! positions per move decision.
//!
//! Run with:
//!   cargo bench --package fork_engine --bench branch_generation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fork_engine::state::{PokemonIndex, PokemonMoveIndex};
use fork_engine::{
    generate_instructions_from_move_pair, DamageRolls, ItemId, MoveChoice, MoveId, PokemonSpec,
    SpeciesId, State,
};

/// A singles endgame with residuals, hazards and branchy moves on both
/// sides: the worst case a search actually hits.
fn competitive_state() -> State {
    let mut state = State::default();

    let side_one = [
        PokemonSpec::new(SpeciesId::Garchomp)
            .item(ItemId::Rockyhelmet)
            .moves(&[
                MoveId::Earthquake,
                MoveId::Rockslide,
                MoveId::Swordsdance,
                MoveId::Substitute,
            ]),
        PokemonSpec::new(SpeciesId::Heatran)
            .item(ItemId::Leftovers)
            .moves(&[MoveId::Fireblast, MoveId::Earthpower, MoveId::Stealthrock]),
        PokemonSpec::new(SpeciesId::Starmie)
            .moves(&[MoveId::Hydropump, MoveId::Icebeam, MoveId::Rapidspin]),
    ];
    let side_two = [
        PokemonSpec::new(SpeciesId::Tyranitar)
            .item(ItemId::Choiceband)
            .moves(&[
                MoveId::Crunch,
                MoveId::Stoneedge,
                MoveId::Pursuit,
                MoveId::Icepunch,
            ]),
        PokemonSpec::new(SpeciesId::Skarmory)
            .item(ItemId::Rockyhelmet)
            .moves(&[MoveId::Spikes, MoveId::Whirlwind, MoveId::Ironhead]),
        PokemonSpec::new(SpeciesId::Toxapex)
            .item(ItemId::Blacksludge)
            .moves(&[MoveId::Scald, MoveId::Toxic, MoveId::Recover]),
    ];

    for (slot, spec) in side_one.iter().enumerate() {
        state.side_one.pokemon[slot] = spec.build();
    }
    for (slot, spec) in side_two.iter().enumerate() {
        state.side_two.pokemon[slot] = spec.build();
    }
    state.side_one.side_conditions.spikes = 2;
    state.side_two.side_conditions.stealth_rock = 1;
    state
}

fn bench_quiet_turn(c: &mut Criterion) {
    let mut state = competitive_state();

    // Earthquake into Crunch: accuracy cannot fail, no secondaries fire.
    c.bench_function("generate_quiet_turn", |b| {
        b.iter(|| {
            generate_instructions_from_move_pair(
                black_box(&mut state),
                &MoveChoice::Move(PokemonMoveIndex::M0),
                &MoveChoice::Move(PokemonMoveIndex::M0),
                DamageRolls::Average,
            )
        })
    });
}

fn bench_branchy_turn(c: &mut Criterion) {
    let mut state = competitive_state();

    // Rock Slide into Stone Edge: two accuracy checks, a flinch roll and
    // contact punishment all stack up.
    let mut group = c.benchmark_group("generate_branchy_turn");
    group.bench_function("average_roll", |b| {
        b.iter(|| {
            generate_instructions_from_move_pair(
                black_box(&mut state),
                &MoveChoice::Move(PokemonMoveIndex::M1),
                &MoveChoice::Move(PokemonMoveIndex::M1),
                DamageRolls::Average,
            )
        })
    });
    group.bench_function("min_max_average", |b| {
        b.iter(|| {
            generate_instructions_from_move_pair(
                black_box(&mut state),
                &MoveChoice::Move(PokemonMoveIndex::M1),
                &MoveChoice::Move(PokemonMoveIndex::M1),
                DamageRolls::MinMaxAverage,
            )
        })
    });
    group.finish();
}

fn bench_switch_turn(c: &mut Criterion) {
    let mut state = competitive_state();

    // Switching through two layers of spikes while Pursuit punishes.
    c.bench_function("generate_pursuit_switch", |b| {
        b.iter(|| {
            generate_instructions_from_move_pair(
                black_box(&mut state),
                &MoveChoice::Switch(PokemonIndex::P1),
                &MoveChoice::Move(PokemonMoveIndex::M2),
                DamageRolls::Average,
            )
        })
    });
}

fn bench_full_ply_expansion(c: &mut Criterion) {
    // One search ply: enumerate every legal pair and expand each.
    let mut state = competitive_state();

    c.bench_function("expand_full_ply", |b| {
        b.iter(|| {
            let (side_one_options, side_two_options) = state.get_all_options();
            let mut branch_count = 0usize;
            for one in &side_one_options {
                for two in &side_two_options {
                    branch_count +=
                        generate_instructions_from_move_pair(&mut state, one, two, DamageRolls::Average)
                            .len();
                }
            }
            black_box(branch_count)
        })
    });
}

criterion_group!(
    benches,
    bench_quiet_turn,
    bench_branchy_turn,
    bench_switch_turn,
    bench_full_ply_expansion,
);

criterion_main!(benches);
