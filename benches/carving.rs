use criterion::{criterion_group, criterion_main, Criterion};
use maze_walk::{
    carver::MazeCarver,
    driver::{Driver, StepBudget},
    random,
    units::GridSize,
    verify,
};

fn bench_random_walk_maze_32(c: &mut Criterion) {
    c.bench_function("random_walk_maze_32", |b| {
        b.iter(|| {
            let mut carver = MazeCarver::new(GridSize(32), random::seeded_rng(32)).unwrap();
            carver.run_to_completion()
        })
    });
}

fn bench_driven_maze_32_steps_1000(c: &mut Criterion) {
    c.bench_function("driven_maze_32_steps_1000", |b| {
        b.iter(|| {
            let mut carver = MazeCarver::new(GridSize(32), random::seeded_rng(32)).unwrap();
            Driver::new(StepBudget::Steps(1000)).run(&mut carver, |_, _| {})
        })
    });
}

fn bench_verify_maze_64(c: &mut Criterion) {
    let mut carver = MazeCarver::new(GridSize(64), random::seeded_rng(64)).unwrap();
    let _ = carver.run_to_completion();
    c.bench_function("verify_maze_64", move |b| {
        b.iter(|| verify::verify_perfect_maze(carver.grid()).is_ok())
    });
}

criterion_group!(
    benches,
    bench_random_walk_maze_32,
    bench_driven_maze_32_steps_1000,
    bench_verify_maze_64
);
criterion_main!(benches);
