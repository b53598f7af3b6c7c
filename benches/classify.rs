use basispath::classify::paths::BasisPath;
use basispath::classify::{classify, classify_batch, TestVector};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    for path in BasisPath::ALL {
        let (a, b, s) = path.sides();
        group.bench_function(path.id(), |bench| {
            bench.iter(|| classify(black_box(a), black_box(b), black_box(s)))
        });
    }
    group.finish();
}

fn bench_classify_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_batch");
    // Sides cycle through every path's branch pattern.
    let vectors: Vec<TestVector> = (0..10_000)
        .map(|i| {
            let (a, b, s) = BasisPath::ALL[i % BasisPath::ALL.len()].sides();
            let k = 1.0 + (i / BasisPath::ALL.len()) as f64;
            TestVector::new(format!("case-{i}"), a * k, b * k, s * k)
        })
        .collect();
    group.throughput(Throughput::Elements(vectors.len() as u64));
    group.bench_function("10k", |b| b.iter(|| classify_batch(black_box(&vectors))));
    group.finish();
}

criterion_group!(benches, bench_classify, bench_classify_batch);
criterion_main!(benches);
