// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `canopy_model` crate.
//!
//! These exercise the way series code combines the pieces: a user option is
//! completed from defaults, then per-item models are parented on the result.

use canopy_model::{Model, Truthy, merge_defaults};
use serde_json::json;

fn series_model() -> Model {
    let mut option = json!({
        "symbol": ["arrow", "none"],
        "lineStyle": { "width": 2 },
    });
    merge_defaults(
        &mut option,
        &json!({
            "symbol": ["none", "none"],
            "symbolSize": [10, 10],
            "lineStyle": { "opacity": 0.5 },
        }),
    );
    Model::new(option)
}

#[test]
fn defaults_fill_series_holes() {
    let series = series_model();
    assert_eq!(series.get_str("symbol.0"), Some("arrow"));
    assert_eq!(series.get_f64("symbolSize.1"), Some(10.0));
    assert_eq!(series.get_f64("lineStyle.opacity"), Some(0.5));
    assert_eq!(series.get_f64("lineStyle.width"), Some(2.0));
}

#[test]
fn item_models_inherit_from_series() {
    let series = series_model();
    let item = Model::with_parent(json!({ "coords": [[0, 0], [1, 1]], "symbolSize": 0 }), series);

    // A zero override is present, but not truthy.
    let own = item.get_shallow("symbolSize", true);
    assert_eq!(own, Some(&json!(0)));
    assert!(!own.is_truthy());

    assert_eq!(item.get_f64("lineStyle.opacity"), Some(0.5));
    assert!(item.get_shallow("symbol", true).is_none());
}

#[test]
fn sub_models_chain_through_parents() {
    let series = series_model();
    let item = Model::with_parent(json!({ "lineStyle": { "opacity": 0.9 } }), series);
    let line_style = item.get_model("lineStyle");

    assert_eq!(line_style.get_f64("opacity"), Some(0.9));
    assert_eq!(line_style.get_f64("width"), Some(2.0));
}
