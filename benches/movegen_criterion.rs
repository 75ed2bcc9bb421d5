//! Move-generation throughput measured through perft from the starting
//! position. Node counts are checked once before timing so a generator
//! regression fails loudly instead of producing a fast-but-wrong number.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use quince_chess::game_state::board::Board;
use quince_chess::game_state::chess_types::Color;
use quince_chess::move_generation::perft::perft;

const EXPECTED_NODES: [usize; 3] = [20, 400, 8902];

fn bench_perft_startpos(c: &mut Criterion) {
    let board = Board::new();

    for (depth, expected) in (1u8..=3).zip(EXPECTED_NODES) {
        let counts = perft(&board, Color::White, depth);
        assert_eq!(
            counts.nodes, expected,
            "perft({depth}) from the starting position is wrong"
        );
    }

    let mut group = c.benchmark_group("perft_startpos");
    for (depth, expected) in (1u8..=3).zip(EXPECTED_NODES) {
        group.throughput(Throughput::Elements(expected as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| perft(&board, Color::White, depth));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_perft_startpos);
criterion_main!(benches);
