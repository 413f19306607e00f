use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bitboard_perft::move_generation::perft::perft;
use bitboard_perft::utils::reference_positions::REFERENCE_POSITIONS;

/// Deepest depth benchmarked per position, by suite.
fn max_nodes_for_suite() -> (&'static str, u64) {
    match std::env::var("PERFT_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => ("standard", 5_000_000),
        _ => ("quick", 100_000),
    }
}

fn bench_perft(c: &mut Criterion) {
    let (suite_name, max_nodes) = max_nodes_for_suite();

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for position in REFERENCE_POSITIONS.iter() {
        let game = position
            .game_state()
            .expect("reference position should build");

        for (depth_idx, &expected_nodes) in position.expected_nodes.iter().enumerate() {
            if expected_nodes > max_nodes {
                break;
            }
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let mut warmup_game = game.clone();
            assert_eq!(
                perft(&mut warmup_game, depth),
                expected_nodes,
                "node mismatch in warmup for {} depth {}",
                position.name,
                depth
            );

            group.throughput(Throughput::Elements(expected_nodes));
            let bench_name = format!("{}_d{}", position.name, depth);
            let mut bench_game = game.clone();

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                &expected_nodes,
                |b, &expected| {
                    b.iter(|| {
                        let nodes = perft(black_box(&mut bench_game), black_box(depth));
                        assert_eq!(nodes, expected);
                        black_box(nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
