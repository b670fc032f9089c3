use radar_core::{layout, RadarConfig, Size};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for &rings in &[5usize, 50usize, 500usize] {
        let config = RadarConfig { ring_count: rings, ..RadarConfig::default() };
        group.bench_with_input(BenchmarkId::from_parameter(format!("rings{rings}")), &config, |b, cfg| {
            // alternate sizes so every pass looks like a resize
            let mut side = 300.0f64;
            b.iter(|| {
                side = if side > 1_000.0 { 300.0 } else { side + 7.5 };
                black_box(layout(cfg, Size::new(side * 1.25, side)));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
