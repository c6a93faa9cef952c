use criterion::{criterion_group, criterion_main, Criterion};
use maze_walk::{
    carver::MazeCarver,
    layout::{self, LayoutConfig},
    random,
    renderers,
    units::GridSize,
};

fn bench_render_image_200(c: &mut Criterion) {
    let mut carver = MazeCarver::new(GridSize(200), random::seeded_rng(200)).unwrap();
    let _ = carver.run_to_completion();
    let options = renderers::RenderOptions::default();
    c.bench_function("render_image_200", move |b| {
        b.iter(|| renderers::render_image(carver.grid(), &options).unwrap())
    });
}

fn bench_render_text_100(c: &mut Criterion) {
    let mut carver = MazeCarver::new(GridSize(100), random::seeded_rng(100)).unwrap();
    let _ = carver.run_to_completion();
    c.bench_function("render_text_100", move |b| b.iter(|| format!("{}", carver.grid())));
}

fn bench_build_scene_100(c: &mut Criterion) {
    let mut carver = MazeCarver::new(GridSize(100), random::seeded_rng(100)).unwrap();
    let _ = carver.run_to_completion();
    let config = LayoutConfig::default();
    c.bench_function("build_scene_100", move |b| {
        b.iter(|| layout::build_scene(carver.grid(), &config))
    });
}

criterion_group!(
    benches,
    bench_render_image_200,
    bench_render_text_100,
    bench_build_scene_100
);
criterion_main!(benches);
