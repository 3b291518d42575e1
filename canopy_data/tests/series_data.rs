// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `canopy_data` crate.
//!
//! These exercise how a visual pass and a renderer share one table: series
//! defaults written once, sparse row overrides, and a full reset between
//! passes.

use canopy_data::{SeriesData, Visual};
use serde_json::json;

const FROM_SYMBOL: Visual<String> = Visual::new(0, "fromSymbol");
const FROM_SYMBOL_SIZE: Visual<f64> = Visual::new(2, "fromSymbolSize");

fn lines_table() -> SeriesData {
    SeriesData::from_items([
        json!({ "coords": [[0, 0], [10, 10]] }),
        json!({ "coords": [[0, 0], [5, 5]], "symbol": "arrow" }),
        json!({ "coords": [[1, 1], [2, 2]] }),
    ])
}

#[test]
fn renderer_sees_series_defaults_and_overrides() {
    let mut data = lines_table();
    data.set_visual(FROM_SYMBOL, String::from("none"));
    data.set_visual(FROM_SYMBOL_SIZE, 10.0);
    data.set_item_visual(1, FROM_SYMBOL, String::from("arrow"));

    let symbols: Vec<_> = data
        .indices()
        .map(|idx| data.item_visual(idx, FROM_SYMBOL).cloned())
        .collect();
    assert_eq!(
        symbols,
        [
            Some(String::from("none")),
            Some(String::from("arrow")),
            Some(String::from("none")),
        ]
    );
    assert!(
        data.indices()
            .all(|idx| data.item_visual(idx, FROM_SYMBOL_SIZE) == Some(&10.0))
    );
}

#[test]
fn clearing_between_passes() {
    let mut data = lines_table();
    data.set_visual(FROM_SYMBOL_SIZE, 10.0);
    data.set_item_visual(2, FROM_SYMBOL_SIZE, 3.0);
    assert_eq!(data.overridden_rows(), [2]);

    data.clear_visuals();
    assert!(data.visual(FROM_SYMBOL_SIZE).is_none());
    assert!(data.item_visual(2, FROM_SYMBOL_SIZE).is_none());
    assert_eq!(data.count(), 3);
}

#[test]
fn item_option_flag_can_be_forced() {
    let mut data = SeriesData::from_items([json!(1), json!(2)]);
    assert!(!data.has_item_option());
    data.set_has_item_option(true);
    assert!(data.has_item_option());
}
