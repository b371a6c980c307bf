// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use barclock_symbol::{
    EncodeOptions, PHARMACODE_MAX, Symbology, encode, encode_pharmacode, encode_postnet,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("barclock_symbol");

    for &value in &[3_u32, 1_234, PHARMACODE_MAX] {
        group.bench_function(format!("pharmacode(v={value})"), |b| {
            b.iter(|| black_box(encode_pharmacode(black_box(value), true)));
        });
    }

    for &(value, check) in &[(1_200_u64, false), (235_959_u64, false), (235_959_u64, true)] {
        group.bench_function(format!("postnet(v={value},check={check})"), |b| {
            b.iter(|| black_box(encode_postnet(black_box(value), check)));
        });
    }

    let options = EncodeOptions::default();
    group.bench_function("encode_str_postnet(235959)", |b| {
        b.iter(|| black_box(encode(Symbology::Postnet, black_box("235959"), options)));
    });

    group.bench_function("barcode_map_postnet(235959)", |b| {
        let symbol = encode(Symbology::Postnet, "235959", options).unwrap();
        b.iter(|| black_box(symbol.barcode_map()));
    });

    group.finish();
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);
