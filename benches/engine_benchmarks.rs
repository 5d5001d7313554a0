//! Benchmarks for checkers engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use checkers_engine::board::{Board, Color, Engine, Optimization, ScoringMode, SearchParams};

const MIDDLEGAME: &str = ".b.b.b.b/......../.b...b.b/..b.w.../...w...w/w.w...../.W.w.w.w/........";
const QUEENS: &str = "......../..B...../......../...b.w../......../.....W../......../B.......";

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::initial();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.generate_moves_ordered(Color::White)))
    });

    let middlegame = Board::from_text(MIDDLEGAME);
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.generate_moves_ordered(Color::White)))
    });

    let queens = Board::from_text(QUEENS);
    group.bench_function("queens", |b| {
        b.iter(|| black_box(queens.generate_moves_ordered(Color::Black)))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    for depth in [3, 4, 5] {
        for optimization in [Optimization::O0, Optimization::O1] {
            let id = BenchmarkId::new(format!("startpos-{optimization}"), depth);
            group.bench_with_input(id, &depth, |b, &depth| {
                let params = SearchParams::new(depth)
                    .with_optimization(optimization)
                    .with_no_random(true);
                b.iter(|| Engine::new(params).find_best_turn(&Board::initial(), Color::White))
            });
        }
    }

    let middlegame = Board::from_text(MIDDLEGAME);
    for depth in [3, 4] {
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            let params = SearchParams::new(depth).with_no_random(true);
            b.iter(|| Engine::new(params).find_best_turn(&middlegame, Color::White))
        });
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let positions = [
        ("startpos", Board::initial()),
        ("middlegame", Board::from_text(MIDDLEGAME)),
        ("queens", Board::from_text(QUEENS)),
    ];

    for (name, board) in positions {
        for mode in [ScoringMode::Number, ScoringMode::NumberAndPotential] {
            group.bench_with_input(BenchmarkId::new(name, mode), &board, |b, board| {
                b.iter(|| black_box(board.evaluate(Color::White, mode)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_search, bench_eval);
criterion_main!(benches);
