use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gradus::generator::{ranges::difficulty_ranges, sampler::board_combinations};

fn synthetic_pool(sequences: usize, pieces_per_sequence: usize) -> Vec<Vec<String>> {
    (0..sequences)
        .map(|s| {
            (0..pieces_per_sequence)
                .map(|p| format!("piece {s} {p} 1 1 2 2"))
                .collect()
        })
        .collect()
}

fn bench_board_combinations(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_combinations");
    let pool = synthetic_pool(8, 12);

    for k in [3usize, 5, 7] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| board_combinations(black_box(&pool), k as f64));
        });
    }
    group.finish();
}

fn bench_difficulty_ranges(c: &mut Criterion) {
    c.bench_function("difficulty_ranges_20", |b| {
        b.iter(|| difficulty_ranges(black_box(20)));
    });
}

criterion_group!(benches, bench_board_combinations, bench_difficulty_ranges);
criterion_main!(benches);
