//! Performance benchmarks for docsync-engine

use docsync_engine::{
    build_batch, select_stale, HookError, Record, RecordTransformer, RetainSet, Transformed,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;

fn create_documents(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            Record::try_from(json!({
                "objectID": format!("page-{}", i),
                "title": format!("Page {}", i),
                "body": "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
            }))
            .unwrap()
        })
        .collect()
}

fn split_into_sections(record: &Record) -> Result<Transformed, HookError> {
    let id = record.object_id().unwrap_or_default();
    let sections = (0..3)
        .map(|n| {
            let mut section = record.clone();
            section.set_object_id(format!("{}#{}", id, n));
            section
        })
        .collect();
    Ok(Transformed::Many(sections))
}

fn bench_build_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_batch");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("identity", size), &size, |b, &size| {
            let transformer = RecordTransformer::identity();
            b.iter_with_setup(
                || create_documents(size),
                |docs| build_batch(black_box(docs), &transformer),
            )
        });

        group.bench_with_input(BenchmarkId::new("fan_out_3", size), &size, |b, &size| {
            let transformer = RecordTransformer::with_hook(split_into_sections);
            b.iter_with_setup(
                || create_documents(size),
                |docs| build_batch(black_box(docs), &transformer),
            )
        });
    }

    group.finish();
}

fn bench_select_stale(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_stale");

    for size in [1000, 10000] {
        let snapshot = create_documents(size);
        // Keep every other page
        let filter = RetainSet::new((0..size).step_by(2).map(|i| format!("page-{}", i)));

        group.bench_with_input(BenchmarkId::new("retain_half", size), &snapshot, |b, snapshot| {
            b.iter(|| select_stale(black_box(snapshot), &filter))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_batch, bench_select_stale);
criterion_main!(benches);
