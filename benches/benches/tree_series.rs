// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use std::time::Duration;

use canopy_series::{SeriesModel, TreeSeriesModel};
use canopy_tree::{Order, Tree};
use serde_json::{Value, json};

/// A tree with `fanout` children per node, `depth` levels deep.
fn nested(fanout: usize, depth: usize) -> Value {
    fn level(prefix: &str, fanout: usize, depth: usize) -> Vec<Value> {
        (0..fanout)
            .map(|i| {
                let name = format!("{prefix}{i}");
                if depth == 1 {
                    json!({ "name": name, "value": i })
                } else {
                    json!({ "name": name.clone(), "children": level(&name, fanout, depth - 1) })
                }
            })
            .collect()
    }
    Value::Array(level("n", fanout, depth))
}

fn node_count(fanout: usize, depth: usize) -> u64 {
    (1..=depth).map(|d| fanout.pow(d as u32) as u64).sum()
}

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_series/create");
    group.measurement_time(Duration::from_secs(3));

    for (fanout, depth) in [(4usize, 4usize), (8, 4), (16, 3)] {
        let data = nested(fanout, depth);
        group.throughput(Throughput::Elements(node_count(fanout, depth)));
        let id = format!("{fanout}x{depth}");

        group.bench_with_input(BenchmarkId::new("tree_only", &id), &data, |b, data| {
            let root = json!({ "name": "series", "children": data });
            b.iter(|| black_box(Tree::create(&root).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("series", &id), &data, |b, data| {
            b.iter_batched(
                || json!({ "name": "series", "data": data }),
                |option| black_box(TreeSeriesModel::new(option).unwrap()),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_series/query");
    let mut series =
        TreeSeriesModel::new(json!({ "name": "series", "data": nested(8, 4) })).unwrap();
    let rows = series.data().count();
    group.throughput(Throughput::Elements(rows as u64));

    group.bench_function("reset_expand_state", |b| {
        b.iter(|| series.reset_expand_state());
    });

    let series = series;
    group.bench_function("item_model_all_rows", |b| {
        b.iter(|| {
            for row in 0..rows {
                black_box(series.item_model(row).get_bool("label.show"));
            }
        });
    });

    group.bench_function("tooltip_all_rows", |b| {
        b.iter(|| {
            for row in 0..rows {
                black_box(series.format_tooltip(row));
            }
        });
    });

    group.bench_function("post_order_walk", |b| {
        b.iter(|| black_box(series.tree().iter(Order::Post).count()));
    });

    group.finish();
}

criterion_group!(benches, bench_create, bench_queries);
criterion_main!(benches);
