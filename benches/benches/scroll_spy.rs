// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::time::Duration;
use vitrine_scroll_spy::{SectionGeometry, SectionTracker};

fn layout(count: u32) -> Vec<(u32, SectionGeometry)> {
    (0..count)
        .map(|i| (i, SectionGeometry::new(f64::from(i) * 700.0, 700.0)))
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_spy/evaluate");

    // Evaluation is a linear scan in declared order, so the probe position
    // decides the cost: sweep the whole document.
    for count in [6_u32, 32, 256] {
        let layout = layout(count);
        let end = f64::from(count) * 700.0;
        group.throughput(Throughput::Elements(u64::from(count)));
        group.bench_with_input(BenchmarkId::new("sweep", count), &layout, |b, layout| {
            let mut tracker = SectionTracker::new(0..count).unwrap();
            let mut offset = 0.0;
            b.iter(|| {
                offset = (offset + 37.0) % end;
                black_box(tracker.evaluate(black_box(offset), layout.as_slice()));
            });
        });
    }

    group.finish();
}

fn bench_frame_coalescing(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_spy/frame");
    let layout = layout(32);

    // Many scroll events per frame versus evaluating each one.
    for events in [1_u32, 8, 64] {
        group.bench_with_input(
            BenchmarkId::new("coalesced", events),
            &events,
            |b, &events| {
                let mut tracker = SectionTracker::new(0..32_u32).unwrap();
                b.iter(|| {
                    for i in 0..events {
                        tracker.on_scroll(f64::from(i) * 11.0);
                    }
                    black_box(tracker.on_frame(layout.as_slice()));
                });
            },
        );
        group.bench_with_input(BenchmarkId::new("eager", events), &events, |b, &events| {
            let mut tracker = SectionTracker::new(0..32_u32).unwrap();
            b.iter(|| {
                for i in 0..events {
                    black_box(tracker.evaluate(f64::from(i) * 11.0, layout.as_slice()));
                }
            });
        });
    }

    group.finish();
}

fn config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = config();
    targets = bench_evaluate, bench_frame_coalescing
}
criterion_main!(benches);
