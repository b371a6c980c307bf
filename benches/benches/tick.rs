// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use barclock_clock::BarcodeClock;
use barclock_layout::{Effects, RenderHandle, ShapeMode};
use barclock_symbol::Symbology;
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

/// `HHMMSS` payloads for a run of consecutive seconds.
fn seconds(start: u32, count: u32) -> Vec<String> {
    (start..start + count)
        .map(|s| {
            let s = s % 86_400;
            format!("{:02}{:02}{:02}", s / 3600, (s / 60) % 60, s % 60)
        })
        .collect()
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("barclock_clock");
    group.sample_size(50);

    let handle = RenderHandle::new(800.0, 800.0)
        .with_shape_mode(ShapeMode::Radial)
        .with_effects(Effects {
            highlight_style: 1,
            ..Effects::default()
        });
    let payloads = seconds(43_170, 60);

    group.bench_function("postnet_minute_of_ticks", |b| {
        b.iter_batched(
            || BarcodeClock::new(Symbology::Postnet),
            |clock| {
                let mut changed = 0_usize;
                for payload in &payloads {
                    let outcome = clock
                        .tick(payload, &handle, |frame| {
                            changed += frame.layout.changed().count();
                        })
                        .expect("clock payloads encode");
                    black_box(outcome);
                }
                black_box(changed);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("postnet_reused_frame", |b| {
        let clock = BarcodeClock::new(Symbology::Postnet);
        clock
            .tick("120000", &handle, |_| {})
            .expect("clock payloads encode");
        b.iter(|| {
            black_box(
                clock
                    .tick("120000", &handle, |_| {})
                    .expect("clock payloads encode"),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
