//! Benchmarks for hit testing and preview computation

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sortable_list::preview::compute_preview;
use sortable_list::{BoundingBox, ElementId, PreviewStyle, Snapshot, SnapshotEntry, Vec2};

fn column(count: usize) -> Snapshot {
    Snapshot::from_entries(
        (0..count)
            .map(|i| SnapshotEntry {
                item: ElementId(i as u64),
                bounds: BoundingBox::new(0.0, i as f32 * 40.0, 300.0, (i + 1) as f32 * 40.0),
            })
            .collect(),
    )
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");

    for count in [10, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));
        let snapshot = column(count);
        let last = Vec2::new(150.0, count as f32 * 40.0 - 20.0);

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| black_box(snapshot.locate(black_box(last))));
        });
    }

    group.finish();
}

fn bench_preview(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_preview");
    let style = PreviewStyle::default();

    for count in [10, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));
        let snapshot = column(count);

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                black_box(compute_preview(
                    &snapshot,
                    Some(count - 1),
                    Some(0),
                    black_box(&style),
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_locate, bench_preview);
criterion_main!(benches);
