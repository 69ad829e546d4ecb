use cleft::cluster::{Clustering, Kmeans};
use cleft::graph::{combinatorial_laplacian, load_adjacency};
use cleft::spectral::{SpectralClustering, SpectralEmbedder};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;

fn bench_karate(c: &mut Criterion) {
    let mut group = c.benchmark_group("karate");
    let adjacency =
        load_adjacency(concat!(env!("CARGO_MANIFEST_DIR"), "/data/karate.csv")).unwrap();

    group.bench_function("laplacian_embed_kmeans_k2", |b| {
        b.iter(|| {
            let l = combinatorial_laplacian(black_box(&adjacency));
            let e = SpectralEmbedder::new(2).embed(&l).unwrap();
            Kmeans::new(2).with_max_iter(10).with_seed(42).fit_predict(&e.rows()).unwrap();
        })
    });

    group.bench_function("pipeline_default", |b| {
        let model = SpectralClustering::default();
        b.iter(|| model.cluster_adjacency(black_box(&adjacency)).unwrap())
    });

    group.finish();
}

fn bench_kmeans(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans");

    // Generate synthetic data
    let mut rng = StdRng::seed_from_u64(42);
    let n = 1000;
    let d = 16;
    let k = 10;

    let data: Vec<Vec<f64>> = (0..n)
        .map(|_| (0..d).map(|_| rng.random::<f64>()).collect())
        .collect();

    group.bench_function("fit_predict_n1000_d16_k10", |b| {
        b.iter(|| {
            let model = Kmeans::new(k).with_max_iter(10).with_seed(42);
            model.fit_predict(black_box(&data)).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_karate, bench_kmeans);
criterion_main!(benches);
