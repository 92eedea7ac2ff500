use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::*;

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("place_mines");
    for (name, config) in [
        ("beginner", DifficultyConfig::BEGINNER),
        ("intermediate", DifficultyConfig::INTERMEDIATE),
        ("expert", DifficultyConfig::EXPERT),
    ] {
        let board = create_empty_board(config.rows, config.cols);
        let safe = (config.rows / 2, config.cols / 2);
        let mut seed = 0;
        group.bench_function(name, |b| {
            b.iter(|| {
                seed += 1;
                black_box(place_mines(&board, config.mines, safe, None, seed))
            })
        });
    }
    group.finish();
}

fn bench_flood_fill(c: &mut Criterion) {
    let empty = create_empty_board(50, 50);
    let (sparse, _) = place_mines(&empty, 1, (0, 0), Some(&[(49, 49)]), 0);
    let (expert, _) = place_mines(&create_empty_board(16, 30), 99, (8, 15), None, 42);

    let mut group = c.benchmark_group("reveal_region");
    group.bench_function("open_50x50", |b| {
        b.iter(|| black_box(reveal_region(&sparse, (0, 0))))
    });
    group.bench_function("expert_first_click", |b| {
        b.iter(|| black_box(reveal_region(&expert, (8, 15))))
    });
    group.finish();
}

criterion_group!(benches, bench_placement, bench_flood_fill);
criterion_main!(benches);
