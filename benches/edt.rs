use bitmap_sdf::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};

fn circle(cx: usize, cy: usize, radius: usize) -> impl Fn(usize, usize) -> bool {
    move |x, y| {
        let dx = x as f32 - cx as f32;
        let dy = y as f32 - cy as f32;
        (dx * dx + dy * dy).sqrt() < radius as f32
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let size = 256;
    let mask = BinaryMask::from_fn(size, size, circle(size / 2, size / 2, size / 4));

    c.bench_function("sdf_brute_force_256", |bencher| {
        bencher.iter(|| {
            compute_sdf(
                &mask,
                &SdfOptions {
                    method: EnvelopeMethod::BruteForce,
                },
            )
            .unwrap()
        })
    });

    c.bench_function("sdf_linear_256", |bencher| {
        bencher.iter(|| {
            compute_sdf(
                &mask,
                &SdfOptions {
                    method: EnvelopeMethod::Linear,
                },
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
