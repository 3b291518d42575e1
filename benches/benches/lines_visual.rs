// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use canopy_series::{LinesSeriesModel, LinesVisual, run_stage};
use serde_json::{Value, json};

/// `len` lines; every `every`-th row carries its own symbol options.
fn lines_option(len: usize, every: Option<usize>) -> Value {
    let data: Vec<Value> = (0..len)
        .map(|i| {
            let coords = json!([[i, 0], [i, 10]]);
            match every {
                Some(every) if i % every == 0 => json!({
                    "coords": coords,
                    "symbol": ["circle", "arrow"],
                    "symbolSize": [0, 8],
                    "lineStyle": { "opacity": 0.8 },
                }),
                Some(_) => json!({ "coords": coords }),
                None => coords,
            }
        })
        .collect();
    json!({ "symbol": "none", "symbolSize": 6, "data": data })
}

fn bench_lines_visual(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines_visual/pass");

    for len in [256usize, 4_096, 65_536] {
        group.throughput(Throughput::Elements(len as u64));
        for (label, every) in [("plain", None), ("sparse", Some(16)), ("dense", Some(1))] {
            let mut series = LinesSeriesModel::new(lines_option(len, every)).unwrap();
            group.bench_function(BenchmarkId::new(label, len), |b| {
                b.iter(|| black_box(run_stage(&LinesVisual, &mut series)));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_lines_visual);
criterion_main!(benches);
