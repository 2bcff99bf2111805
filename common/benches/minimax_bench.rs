use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_common::games::tictactoe::{GameState, SearchEngine};

fn state_after(moves: &[(usize, usize)]) -> GameState {
    let mut state = GameState::new();
    for &(row, col) in moves {
        let _ = state.apply_move(row, col);
    }
    state
}

fn bench_self_play_game() {
    let mut engine = SearchEngine::from_seed(42);
    let mut state = GameState::new();
    while !state.is_over() {
        if engine.choose_move(&mut state).is_err() {
            break;
        }
    }
}

fn bench_first_search_move() {
    // Centre and a corner taken: the first position the opening shortcut no
    // longer covers, and the largest tree the search ever walks.
    let mut state = state_after(&[(1, 1), (0, 0)]);
    let mut engine = SearchEngine::from_seed(42);
    let _ = engine.choose_move(&mut state);
}

fn bench_mid_game_move() {
    let mut state = state_after(&[(1, 1), (0, 0), (2, 2), (0, 2)]);
    let mut engine = SearchEngine::from_seed(42);
    let _ = engine.choose_move(&mut state);
}

fn bench_score_moves(state: &GameState, engine: &SearchEngine) {
    black_box(engine.score_moves(state));
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("self_play_game", |b| {
        b.iter(bench_self_play_game)
    });

    group.bench_function("first_search_move", |b| {
        b.iter(bench_first_search_move)
    });

    group.bench_function("mid_game_move", |b| {
        b.iter(bench_mid_game_move)
    });

    let state = state_after(&[(0, 1)]);
    let engine = SearchEngine::from_seed(42);
    group.bench_function("score_moves_eight_open", |b| {
        b.iter(|| bench_score_moves(&state, &engine))
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
