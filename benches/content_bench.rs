//! Benchmarks for compliance checks, generation and the store
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use marketing_bot::compliance;
use marketing_bot::generator::Generator;
use marketing_bot::store::{ContentType, FileBackend, MemoryBackend, Store};
use marketing_bot::views;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

const SAMPLE: &str = "Houston's multifamily market continues to demonstrate strengthening \
fundamentals as we analyze the latest data from CoStar. Occupancy reached 90.4% while the \
supply pipeline contracted 34% year-over-year. For informational purposes only.";

fn bench_compliance(c: &mut Criterion) {
    let mut group = c.benchmark_group("compliance");

    for repeat in [1, 10, 30] {
        let text = SAMPLE.repeat(repeat);

        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_function(format!("check_{}x", repeat), |b| {
            b.iter(|| compliance::check(black_box(&text)))
        });
    }

    group.finish();
}

fn bench_generator(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator");

    for &content_type in ContentType::all() {
        let mut generator = Generator::with_rng(StdRng::seed_from_u64(1));

        group.bench_function(content_type.as_str(), |b| {
            b.iter(|| generator.generate(black_box(content_type), "Houston Q4", "Jane Doe"))
        });
    }

    group.finish();
}

fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");

    group.bench_function("memory_review_queue", |b| {
        let store = Store::new(MemoryBackend::new());
        store.init().unwrap();

        b.iter(|| views::review_queue(&store.content().unwrap()))
    });

    group.bench_function("file_reset", |b| {
        let dir = tempdir().unwrap();
        let store = Store::new(FileBackend::new(dir.path().join("store.json")));

        b.iter(|| store.reset().unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_compliance, bench_generator, bench_store);
criterion_main!(benches);
