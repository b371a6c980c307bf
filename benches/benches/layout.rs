// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use barclock_delta::compute_delta;
use barclock_layout::{RenderHandle, ShapeMode, layout};
use barclock_symbol::{EncodeOptions, Symbology, encode};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("barclock_layout");
    let options = EncodeOptions::default();

    for (symbology, previous, current) in [
        (Symbology::Pharmacode, "1000", "1001"),
        (Symbology::Postnet, "235958", "235959"),
    ] {
        let before = encode(symbology, previous, options).unwrap();
        let after = encode(symbology, current, options).unwrap();
        let previous_map = before.barcode_map();

        for mode in [ShapeMode::Linear, ShapeMode::Radial, ShapeMode::Target] {
            let handle = RenderHandle::new(800.0, 600.0).with_shape_mode(mode);
            group.bench_function(format!("{symbology}_{mode:?}_fresh"), |b| {
                b.iter(|| black_box(layout(black_box(&after), &handle, None)));
            });
            group.bench_function(format!("{symbology}_{mode:?}_delta"), |b| {
                b.iter(|| {
                    black_box(layout(black_box(&after), &handle, Some(previous_map.as_slice())))
                });
            });
        }

        let current_map = after.barcode_map();
        group.bench_function(format!("{symbology}_compute_delta"), |b| {
            b.iter(|| black_box(compute_delta(&current_map, Some(previous_map.as_slice()))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
