use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use outline_editor::core::{hit_test, sample_outline, HitTestParams};
use outline_editor::{CurveScheme, CurveSettings, NodeModel, ViewTransform};
use std::hint::black_box;

fn bench_sample_outline(c: &mut Criterion) {
    let model = NodeModel::silhouette();
    let mut group = c.benchmark_group("sample_outline");

    for scheme in [CurveScheme::Cardinal, CurveScheme::RationalCubic] {
        for &steps in &[30usize, 200usize] {
            let settings = CurveSettings {
                scheme,
                cardinal_steps: steps,
                rational_steps: steps,
                ..CurveSettings::default()
            };
            group.bench_with_input(
                BenchmarkId::new(format!("{scheme:?}"), steps),
                &settings,
                |b, settings| {
                    b.iter(|| black_box(sample_outline(black_box(&model), settings)).len())
                },
            );
        }
    }

    group.finish();
}

fn build_query_points(view: &ViewTransform, count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = ((i * 13) % 400) as f32 - 200.0;
            let y = ((i * 7) % 400) as f32 - 200.0;
            view.to_screen(Vec2::new(x, y))
        })
        .collect()
}

fn bench_hit_test(c: &mut Criterion) {
    let model = NodeModel::silhouette();
    let mut view = ViewTransform::new(Vec2::new(1280.0, 720.0));
    view.rotation_deg = 15.0;
    let queries = build_query_points(&view, 1024);
    let params = HitTestParams::default();

    c.bench_function("hit_test_batch_1024", |b| {
        b.iter(|| {
            queries
                .iter()
                .filter(|&&q| !hit_test(&model, &view, black_box(q), &params).is_none())
                .count()
        })
    });
}

criterion_group!(benches, bench_sample_outline, bench_hit_test);
criterion_main!(benches);
