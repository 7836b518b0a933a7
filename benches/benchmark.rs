use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tractmaps::{assignment_map, streamline_from_points, Bundle};

/// Synthetic bundle of gently curved streamlines, roughly 100 mm long.
fn synthetic_bundle(num_streamlines: usize, points_per_streamline: usize) -> Bundle {
    (0..num_streamlines)
        .map(|s| {
            let offset = s as f32 * 0.5;
            let points: Vec<[f32; 3]> = (0..points_per_streamline)
                .map(|i| {
                    let t = i as f32 / (points_per_streamline - 1) as f32;
                    [
                        t * 100.0,
                        10.0 * (t * 3.0).sin() + offset,
                        5.0 * (t * 2.0).cos(),
                    ]
                })
                .collect();
            streamline_from_points(&points)
        })
        .collect()
}

fn bench_assignment(c: &mut Criterion) {
    let bundle = synthetic_bundle(100, 64);
    c.bench_function("assignment_map_100x64_n100", |b| {
        b.iter(|| assignment_map(black_box(&bundle), black_box(&bundle), black_box(100)).unwrap())
    });
}

criterion_group!(benches, bench_assignment);
criterion_main!(benches);
