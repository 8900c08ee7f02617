//! Search Benchmarks
//!
//! Cache throughput and full Nim solves using Criterion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ggp_search::cache::FifoCache;
use ggp_search::core::State;
use ggp_search::games::nim::Nim;
use ggp_search::heuristic::ConstantHeuristic;
use ggp_search::rules::CachedStateMachine;
use ggp_search::search::{SearchConfig, SearchEngine};

fn bench_fifo_insert_wrapping(c: &mut Criterion) {
    let states: Vec<State> = (0..8192u32).map(|i| State::from_facts([i, i + 1])).collect();

    c.bench_function("fifo_insert_wrapping", |b| {
        b.iter(|| {
            let mut cache = FifoCache::new(4096);
            for (i, state) in states.iter().enumerate() {
                cache.insert(state.clone(), i);
            }
            black_box(cache.len())
        })
    });
}

fn bench_state_construction(c: &mut Criterion) {
    c.bench_function("state_from_32_facts", |b| {
        b.iter(|| black_box(State::from_facts(0..32u32)))
    });
}

fn bench_nim_solve(c: &mut Criterion) {
    let nim = Nim::new(&[3, 4, 5]);
    let root = nim.initial_state();

    c.bench_function("nim_345_solve", |b| {
        b.iter(|| {
            let mut engine = SearchEngine::new(nim.clone(), nim.clone(), SearchConfig::default());
            black_box(engine.search(&root).ok())
        })
    });
}

fn bench_nim_solve_cached(c: &mut Criterion) {
    let nim = Nim::new(&[3, 4, 5]);
    let root = nim.initial_state();

    c.bench_function("nim_345_solve_cached_machine", |b| {
        b.iter(|| {
            let machine = CachedStateMachine::new(nim.clone());
            let mut engine = SearchEngine::new(machine, nim.clone(), SearchConfig::default());
            black_box(engine.search(&root).ok())
        })
    });
}

fn bench_nim_deepening(c: &mut Criterion) {
    let nim = Nim::new(&[2, 3, 4]);
    let root = nim.initial_state();

    c.bench_function("nim_234_iterative_deepening", |b| {
        b.iter(|| {
            let mut engine = SearchEngine::new(nim.clone(), nim.clone(), SearchConfig::default())
                .with_heuristic(ConstantHeuristic::new(50.0));
            black_box(engine.search(&root).ok())
        })
    });
}

criterion_group!(
    benches,
    bench_fifo_insert_wrapping,
    bench_state_construction,
    bench_nim_solve,
    bench_nim_solve_cached,
    bench_nim_deepening,
);
criterion_main!(benches);
