use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kmeans2d::cluster::{Clustering, Kmeans, Point};
use rand::prelude::*;

fn bench_kmeans(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans");

    // Generate synthetic data
    let mut rng = StdRng::seed_from_u64(42);
    let n = 1000;
    let k = 10;

    let data: Vec<Point> = (0..n)
        .map(|_| Point::new(rng.random::<f32>() * 100.0, rng.random::<f32>() * 100.0))
        .collect();

    group.bench_function("fit_predict_n1000_k10", |b| {
        b.iter(|| {
            let model = Kmeans::new(k).with_max_iter(10).with_seed(42);
            model.fit_predict(black_box(&data)).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_kmeans);
criterion_main!(benches);
