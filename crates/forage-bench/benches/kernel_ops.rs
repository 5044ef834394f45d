//! Criterion micro-benchmarks for the per-step kernel phases.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use forage_bench::{action_schedule, reference_state, stress_state};
use forage_kernel::{eat_all, move_all, observe_all, render, resolve_collisions, transition};

/// Benchmark: one full transition on the reference profile.
fn bench_transition_reference(c: &mut Criterion) {
    let state = reference_state(42).unwrap();
    let actions = action_schedule(state.agents().len(), 0);

    c.bench_function("transition_reference", |b| {
        b.iter(|| {
            let out = transition(black_box(&state), black_box(&actions)).unwrap();
            black_box(&out);
        });
    });
}

/// Benchmark: 100 chained transitions on the reference profile.
fn bench_rollout_100(c: &mut Criterion) {
    let initial = reference_state(42).unwrap();
    let n = initial.agents().len();
    let schedule: Vec<_> = (0..100).map(|t| action_schedule(n, t)).collect();

    c.bench_function("rollout_100_reference", |b| {
        b.iter(|| {
            let mut state = initial.clone();
            for actions in &schedule {
                state = transition(&state, actions).unwrap().state;
            }
            black_box(&state);
        });
    });
}

/// Benchmark: one full transition on the stress profile.
fn bench_transition_stress(c: &mut Criterion) {
    let state = stress_state(42).unwrap();
    let actions = action_schedule(state.agents().len(), 0);

    c.bench_function("transition_stress", |b| {
        b.iter(|| {
            let out = transition(black_box(&state), black_box(&actions)).unwrap();
            black_box(&out);
        });
    });
}

/// Benchmark: the movement, arbitration and eating phases in isolation.
fn bench_phases_stress(c: &mut Criterion) {
    let state = stress_state(7).unwrap();
    let actions = action_schedule(state.agents().len(), 1);
    let proposed = move_all(state.agents(), &actions, state.foods(), state.shape());
    let settled = resolve_collisions(&proposed, state.agents());

    c.bench_function("move_all_stress", |b| {
        b.iter(|| {
            let moved = move_all(state.agents(), &actions, state.foods(), state.shape());
            black_box(&moved);
        });
    });

    c.bench_function("resolve_collisions_stress", |b| {
        b.iter(|| {
            let resolved = resolve_collisions(black_box(&proposed), state.agents());
            black_box(&resolved);
        });
    });

    c.bench_function("eat_all_stress", |b| {
        b.iter(|| {
            let outcomes = eat_all(black_box(&settled), state.foods());
            black_box(&outcomes);
        });
    });
}

/// Benchmark: render both occupancy grids of the stress profile.
fn bench_render_stress(c: &mut Criterion) {
    let state = stress_state(42).unwrap();

    c.bench_function("render_stress", |b| {
        b.iter(|| {
            let agents = render(state.agents(), state.shape());
            let foods = render(state.foods(), state.shape());
            black_box((&agents, &foods));
        });
    });
}

/// Benchmark: every agent's fov-2 view on the reference profile.
fn bench_observe_all_reference(c: &mut Criterion) {
    let state = reference_state(42).unwrap();

    c.bench_function("observe_all_fov2_reference", |b| {
        b.iter(|| {
            let views = observe_all(black_box(&state), 2).unwrap();
            black_box(&views);
        });
    });
}

criterion_group!(
    benches,
    bench_transition_reference,
    bench_rollout_100,
    bench_transition_stress,
    bench_phases_stress,
    bench_render_stress,
    bench_observe_all_reference
);
criterion_main!(benches);
