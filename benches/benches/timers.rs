// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use vitrine_disclosure::{Disclosure, DisclosureChain, DisclosureConfig};
use vitrine_timing::TimerQueue;

fn bench_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing/queue");

    // Interleaved deadlines exercise the sorted insert.
    for len in [4_u64, 64, 1_024] {
        group.bench_with_input(BenchmarkId::new("schedule_drain", len), &len, |b, &len| {
            b.iter_batched(
                TimerQueue::<u64>::new,
                |mut queue| {
                    for i in 0..len {
                        queue.schedule(i, (i * 7919) % 1_000);
                    }
                    black_box(queue.drain_expired(1_000));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_disclosure_churn(c: &mut Criterion) {
    // Rapid open/close cycles as produced by a user clicking through projects.
    c.bench_function("disclosure/chain_churn", |b| {
        let config = DisclosureConfig::default();
        let mut chain: DisclosureChain<u32, u32> = DisclosureChain::new(
            Disclosure::new(config).with_anchor("project-tech-stack"),
            Disclosure::new(config),
        );
        let mut now = 0_u64;
        b.iter(|| {
            now += 50;
            chain.open_parent(now, (now % 5) as u32);
            chain.open_child(now + 10, 1);
            chain.close_parent(now + 20);
            black_box(chain.tick(now + 25));
        });
    });
}

criterion_group!(benches, bench_queue, bench_disclosure_churn);
criterion_main!(benches);
