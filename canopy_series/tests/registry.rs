// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `SeriesRegistry` and `install_builtin`.

use canopy_series::visual::OPACITY;
use canopy_series::{SeriesError, SeriesRegistry, install_builtin};
use serde_json::json;

fn builtin() -> SeriesRegistry {
    let mut registry = SeriesRegistry::new();
    install_builtin(&mut registry);
    registry
}

#[test]
fn starts_empty() {
    let registry = SeriesRegistry::new();
    assert!(!registry.contains("tree"));
    assert!(matches!(
        registry.create(json!({ "type": "tree" })),
        Err(SeriesError::UnknownSeriesType(t)) if t == "tree"
    ));
}

#[test]
fn creates_builtin_series() {
    let registry = builtin();
    let tree = registry
        .create(json!({ "type": "tree", "data": [{ "name": "A" }] }))
        .unwrap();
    assert_eq!(tree.series_type(), "tree");
    assert_eq!(tree.data().count(), 2);

    let lines = registry.create(json!({ "type": "lines" })).unwrap();
    assert_eq!(lines.series_type(), "lines");
}

#[test]
fn create_errors() {
    let registry = builtin();
    assert!(matches!(
        registry.create(json!({ "data": [] })),
        Err(SeriesError::MissingSeriesType)
    ));
    assert!(matches!(
        registry.create(json!({ "type": "sunburst" })),
        Err(SeriesError::UnknownSeriesType(t)) if t == "sunburst"
    ));
    assert!(matches!(
        registry.create(json!({ "type": "tree", "data": [{ "name": "A", "children": 1 }] })),
        Err(SeriesError::Tree(_))
    ));
}

#[test]
fn stages_run_for_matching_series_only() {
    let registry = builtin();
    assert_eq!(registry.stages_for("tree").count(), 0);

    let mut tree = registry.create(json!({ "type": "tree" })).unwrap();
    assert!(registry.run_stages(&mut *tree).is_empty());
    assert_eq!(tree.data().visual(OPACITY), None);

    let mut lines = registry
        .create(json!({ "type": "lines", "data": [{ "coords": [] }, { "coords": [] }] }))
        .unwrap();
    let outcomes = registry.run_stages(&mut *lines);
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].rows_visited, 2);
    assert_eq!(lines.data().visual(OPACITY), Some(&0.5));
}

#[test]
#[should_panic(expected = "series type `tree` registered twice")]
fn duplicate_registration_panics() {
    let mut registry = builtin();
    install_builtin(&mut registry);
}
