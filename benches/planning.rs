use criterion::{criterion_group, criterion_main, Criterion, black_box};

use inkscroll::generation::{OccupancyRecord, PlacementPlanner, PlannerConfig};
use inkscroll::math::Span;
use inkscroll::scene::{SceneConfig, SceneManager};
use inkscroll::terrain::{FbmNoise, NoiseParams};

fn bench_plan_span(c: &mut Criterion) {
    let noise = FbmNoise::new(12345, NoiseParams::default());
    let config = PlannerConfig::default();
    let planner = PlacementPlanner::new(&noise, &config, 12345);

    c.bench_function("plan_span_512", |b| {
        let mut start = 0.0;
        b.iter(|| {
            let mut occupancy = OccupancyRecord::new(config.step);
            let span = Span::new(start, start + 512.0);
            start += 512.0;
            planner.plan(black_box(span), &mut occupancy)
        });
    });
}

fn bench_initial_load(c: &mut Criterion) {
    c.bench_function("scene_initial_load", |b| {
        b.iter(|| {
            let mut manager = SceneManager::new(SceneConfig::default()).unwrap();
            manager.update();
            black_box(manager.chunk_count())
        });
    });
}

fn bench_scroll(c: &mut Criterion) {
    let mut manager = SceneManager::new(SceneConfig::default()).unwrap();
    manager.update();

    c.bench_function("scene_scroll_600", |b| {
        b.iter(|| {
            manager.scroll(black_box(600.0));
        });
    });
}

criterion_group!(
    benches,
    bench_plan_span,
    bench_initial_load,
    bench_scroll,
);
criterion_main!(benches);
