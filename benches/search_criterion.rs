use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_0x88::game_state::chess_rules::{STARTING_POSITION_FEN, TRICKY_POSITION_FEN};
use chess_0x88::game_state::chess_types::GameState;
use chess_0x88::search::board_scoring::PieceSquareScorer;
use chess_0x88::search::iterative_deepening::{SearchConfig, SearchContext};

const CASES: &[(&str, &str)] = &[
    ("start", STARTING_POSITION_FEN),
    ("tricky", TRICKY_POSITION_FEN),
    ("middlegame", "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10"),
];

fn search_depth() -> u8 {
    match std::env::var("CHESS_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => 5,
        _ => 4,
    }
}

fn bench_search(c: &mut Criterion) {
    let depth = search_depth();

    let mut group = c.benchmark_group(format!("search_d{depth}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    for (name, fen) in CASES {
        let game = GameState::from_fen(fen).expect("benchmark FEN should parse");
        let mut context = SearchContext::new(PieceSquareScorer);

        group.bench_with_input(BenchmarkId::from_parameter(name), &game, |b, game| {
            b.iter(|| {
                let result = context.search(black_box(game), SearchConfig { max_depth: depth });
                assert!(result.best_move.is_some());
                black_box(result.nodes)
            });
        });
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
