//! Benchmarks for instruction apply/reverse throughput.
//!
//! A search applies a branch, recurses, then reverses it on the way back
//! up; both directions sit on the hot path.
//!
//! Run with:
//!   cargo bench --package fork_engine --bench instruction_replay

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fork_engine::state::PokemonMoveIndex;
use fork_engine::{
    generate_instructions_from_move_pair, DamageRolls, MoveChoice, MoveId, PokemonSpec, SpeciesId,
    State, StateInstructions,
};

fn setup() -> (State, Vec<StateInstructions>) {
    let mut state = State::default();
    state.side_one.pokemon[0] = PokemonSpec::new(SpeciesId::Garchomp)
        .moves(&[MoveId::Rockslide, MoveId::Earthquake])
        .build();
    state.side_two.pokemon[0] = PokemonSpec::new(SpeciesId::Gyarados)
        .moves(&[MoveId::Waterfall, MoveId::Icefang])
        .build();

    let branches = generate_instructions_from_move_pair(
        &mut state,
        &MoveChoice::Move(PokemonMoveIndex::M0),
        &MoveChoice::Move(PokemonMoveIndex::M0),
        DamageRolls::MinMaxAverage,
    );
    (state, branches)
}

fn bench_apply_reverse(c: &mut Criterion) {
    let (mut state, branches) = setup();
    let longest = branches
        .iter()
        .max_by_key(|branch| branch.instruction_list.len())
        .cloned()
        .unwrap();

    c.bench_function("apply_reverse_longest_branch", |b| {
        b.iter(|| {
            state.apply_instructions(black_box(&longest.instruction_list));
            state.reverse_instructions(black_box(&longest.instruction_list));
        })
    });
}

fn bench_replay_all(c: &mut Criterion) {
    let (mut state, branches) = setup();

    let mut group = c.benchmark_group("replay_all_branches");
    group.throughput(Throughput::Elements(branches.len() as u64));
    group.bench_function("round_trip", |b| {
        b.iter(|| {
            for branch in &branches {
                state.apply_instructions(&branch.instruction_list);
                state.reverse_instructions(&branch.instruction_list);
            }
        })
    });
    group.finish();
}

fn bench_options_enumeration(c: &mut Criterion) {
    let (state, _) = setup();

    c.bench_function("enumerate_options", |b| {
        b.iter(|| black_box(&state).get_all_options())
    });
}

criterion_group!(
    benches,
    bench_apply_reverse,
    bench_replay_all,
    bench_options_enumeration,
);

criterion_main!(benches);
