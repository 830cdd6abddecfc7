//! Benchmarks for flower-board generation.

use criterion::{Criterion, criterion_group, criterion_main};
use hexudoku_core::GameBoardState;
use hexudoku_generator::{BoardGenerator, fill_board_with_attempts};
use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;

fn bench_fill(c: &mut Criterion) {
    c.bench_function("fill_flower_board", |b| {
        let mut rng = Pcg64Mcg::seed_from_u64(42);
        b.iter(|| {
            let mut board = GameBoardState::flower();
            fill_board_with_attempts(&mut board, &mut rng, 64).expect("board is fillable");
            board
        });
    });
}

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_puzzle", |b| {
        let generator = BoardGenerator::new().max_fill_attempts(64);
        let mut seed = 0_u64;
        b.iter(|| {
            seed += 1;
            generator
                .generate_with_seed(seed)
                .expect("generation succeeds")
        });
    });
}

criterion_group!(benches, bench_fill, bench_generate);
criterion_main!(benches);
