use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vizij_easing_core::{sample_curve, Easing, EasingRegistry, SampleConfig};

fn bench_apply(c: &mut Criterion) {
    c.bench_function("apply_all_curves", |b| {
        b.iter(|| {
            for easing in Easing::all() {
                let _ = black_box(easing.apply(black_box(0.37)));
            }
        })
    });
}

fn bench_registry(c: &mut Criterion) {
    let registry = EasingRegistry::new();
    c.bench_function("registry_evaluate", |b| {
        b.iter(|| registry.evaluate(black_box("ease_in_out_elastic"), black_box(0.37)))
    });
}

fn bench_sampling(c: &mut Criterion) {
    let cfg = SampleConfig { samples: 240 };
    c.bench_function("sample_out_bounce_240", |b| {
        b.iter(|| sample_curve(black_box(&Easing::EaseOutBounce), &cfg))
    });
}

criterion_group!(benches, bench_apply, bench_registry, bench_sampling);
criterion_main!(benches);
