// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The row-indexed series data table.

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::ops::Range;

use canopy_model::{Model, Value};
use hashbrown::HashMap;

use crate::store::VisualStore;
use crate::visual::Visual;

/// Row-indexed data backing one series.
///
/// Each row keeps its raw option item together with the two columns every
/// series needs (display name and primary numeric value). Raw items are
/// shared with the item models built from them. Visual attributes
/// live in two layers:
///
/// - **Series visuals**, written once per pass with [`SeriesData::set_visual`].
/// - **Item visuals**, sparse per-row overrides written with
///   [`SeriesData::set_item_visual`].
///
/// [`SeriesData::item_visual`] reads a row's override and falls back to the
/// series value.
///
/// ```rust
/// use canopy_data::{SeriesData, Visual};
/// use serde_json::json;
///
/// const SIZE: Visual<f64> = Visual::new(0, "symbolSize");
///
/// let mut data = SeriesData::from_items([json!(3), json!({ "value": 5, "symbolSize": 20 })]);
/// assert_eq!(data.count(), 2);
/// assert!(data.has_item_option());
///
/// data.set_visual(SIZE, 10.0);
/// data.set_item_visual(1, SIZE, 20.0);
/// assert_eq!(data.item_visual(0, SIZE), Some(&10.0));
/// assert_eq!(data.item_visual(1, SIZE), Some(&20.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SeriesData {
    items: Vec<Rc<Value>>,
    names: Vec<String>,
    values: Vec<f64>,
    has_item_option: bool,
    visuals: VisualStore,
    item_visuals: HashMap<usize, VisualStore>,
}

impl SeriesData {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from raw option items.
    ///
    /// `has_item_option` is set as soon as one item is an object, since only
    /// object items can carry per-item options.
    #[must_use]
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let items: Vec<Rc<Value>> = items.into_iter().map(Rc::new).collect();
        let names = items.iter().map(|item| item_name(item)).collect();
        let values = items.iter().map(|item| item_value(item)).collect();
        let has_item_option = items.iter().any(|item| item.is_object());
        log::debug!(
            "series data: {} rows, item options: {has_item_option}",
            items.len()
        );
        Self {
            items,
            names,
            values,
            has_item_option,
            visuals: VisualStore::new(),
            item_visuals: HashMap::new(),
        }
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the row index range, for per-row passes.
    #[must_use]
    #[inline]
    pub fn indices(&self) -> Range<usize> {
        0..self.items.len()
    }

    /// Returns the raw option item of a row.
    #[must_use]
    #[inline]
    pub fn raw_item(&self, idx: usize) -> Option<&Value> {
        self.items.get(idx).map(|item| &**item)
    }

    /// Returns the display name of a row (empty if the item has none).
    #[must_use]
    #[inline]
    pub fn name(&self, idx: usize) -> Option<&str> {
        self.names.get(idx).map(String::as_str)
    }

    /// Returns the primary value of a row, `NaN` when the item has none.
    #[must_use]
    #[inline]
    pub fn value(&self, idx: usize) -> Option<f64> {
        self.values.get(idx).copied()
    }

    /// Returns `true` if any row carries its own option object.
    #[must_use]
    #[inline]
    pub fn has_item_option(&self) -> bool {
        self.has_item_option
    }

    /// Overrides the item-option flag.
    pub fn set_has_item_option(&mut self, has_item_option: bool) {
        self.has_item_option = has_item_option;
    }

    /// Creates the item model of a row, falling back to `parent`.
    ///
    /// The model shares the row's raw item rather than copying it. Rows past
    /// the end produce a `null` option, so every lookup goes straight to
    /// `parent`.
    #[must_use]
    pub fn item_model(&self, idx: usize, parent: Option<Model>) -> Model {
        match self.items.get(idx) {
            Some(item) => Model::from_shared(Rc::clone(item), parent),
            None => Model::from_parts(Value::Null, parent),
        }
    }

    /// Sets a series-level visual.
    pub fn set_visual<T: Clone + 'static>(&mut self, key: Visual<T>, value: T) {
        self.visuals.set(key, value);
    }

    /// Gets a series-level visual.
    #[must_use]
    pub fn visual<T: Clone + 'static>(&self, key: Visual<T>) -> Option<&T> {
        self.visuals.get(key)
    }

    /// Removes a series-level visual.
    pub fn clear_visual<T: Clone + 'static>(&mut self, key: Visual<T>) -> bool {
        self.visuals.remove(key)
    }

    /// Sets a per-row visual override.
    ///
    /// Writes to rows past the end are ignored.
    pub fn set_item_visual<T: Clone + 'static>(&mut self, idx: usize, key: Visual<T>, value: T) {
        if idx >= self.items.len() {
            log::warn!("ignoring visual `{}` for missing row {idx}", key.name());
            return;
        }
        self.item_visuals.entry(idx).or_default().set(key, value);
    }

    /// Gets a row visual, falling back to the series value.
    #[must_use]
    pub fn item_visual<T: Clone + 'static>(&self, idx: usize, key: Visual<T>) -> Option<&T> {
        self.item_visual_shallow(idx, key)
            .or_else(|| self.visuals.get(key))
    }

    /// Gets a row's own override, without falling back.
    #[must_use]
    pub fn item_visual_shallow<T: Clone + 'static>(
        &self,
        idx: usize,
        key: Visual<T>,
    ) -> Option<&T> {
        self.item_visuals.get(&idx).and_then(|store| store.get(key))
    }

    /// Returns the rows that carry at least one visual override, ascending.
    #[must_use]
    pub fn overridden_rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self
            .item_visuals
            .iter()
            .filter(|(_, store)| !store.is_empty())
            .map(|(idx, _)| *idx)
            .collect();
        rows.sort_unstable();
        rows
    }

    /// Drops every per-row override.
    pub fn clear_item_visuals(&mut self) {
        self.item_visuals.clear();
    }

    /// Drops every visual, series-level and per-row.
    pub fn clear_visuals(&mut self) {
        self.visuals.clear();
        self.item_visuals.clear();
    }
}

fn item_name(item: &Value) -> String {
    match item.get("name") {
        Some(Value::String(name)) => name.clone(),
        Some(Value::Number(name)) => name.to_string(),
        _ => String::new(),
    }
}

fn item_value(item: &Value) -> f64 {
    let value = match item {
        Value::Object(map) => map.get("value"),
        other => Some(other),
    };
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::Array(dims)) => dims.first().and_then(Value::as_f64).unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SIZE: Visual<f64> = Visual::new(0, "symbolSize");
    const SYMBOL: Visual<String> = Visual::new(1, "symbol");

    #[test]
    fn names_and_values() {
        let data = SeriesData::from_items([
            json!({ "name": "a", "value": 4 }),
            json!({ "name": 7, "value": [2.5, 9] }),
            json!({ "name": "c" }),
            json!(12),
            json!(null),
        ]);

        assert_eq!(data.name(0), Some("a"));
        assert_eq!(data.name(1), Some("7"));
        assert_eq!(data.name(3), Some(""));
        assert_eq!(data.value(0), Some(4.0));
        assert_eq!(data.value(1), Some(2.5));
        assert!(data.value(2).unwrap().is_nan());
        assert_eq!(data.value(3), Some(12.0));
        assert!(data.value(4).unwrap().is_nan());
        assert_eq!(data.value(5), None);
    }

    #[test]
    fn plain_rows_have_no_item_option() {
        let data = SeriesData::from_items([json!(1), json!([2, 3]), json!(null)]);
        assert!(!data.has_item_option());

        let data = SeriesData::from_items([json!(1), json!({ "value": 2 })]);
        assert!(data.has_item_option());
    }

    #[test]
    fn item_visual_falls_back_to_series() {
        let mut data = SeriesData::from_items([json!(1), json!(2)]);
        data.set_visual(SYMBOL, String::from("circle"));
        data.set_item_visual(1, SYMBOL, String::from("rect"));

        assert_eq!(data.item_visual(0, SYMBOL).map(String::as_str), Some("circle"));
        assert_eq!(data.item_visual(1, SYMBOL).map(String::as_str), Some("rect"));
        assert!(data.item_visual_shallow(0, SYMBOL).is_none());
        assert!(data.item_visual(0, SIZE).is_none());
    }

    #[test]
    fn out_of_range_item_visual_is_ignored() {
        let mut data = SeriesData::from_items([json!(1)]);
        data.set_item_visual(3, SIZE, 4.0);
        assert!(data.overridden_rows().is_empty());
    }

    #[test]
    fn overridden_rows_sorted() {
        let mut data = SeriesData::from_items([json!(1), json!(2), json!(3), json!(4)]);
        data.set_item_visual(3, SIZE, 1.0);
        data.set_item_visual(0, SIZE, 1.0);
        data.set_item_visual(2, SYMBOL, String::from("pin"));
        assert_eq!(data.overridden_rows(), [0, 2, 3]);

        data.clear_item_visuals();
        assert!(data.overridden_rows().is_empty());
    }

    #[test]
    fn item_model_parents_on_series() {
        let data = SeriesData::from_items([json!({ "symbol": "rect" })]);
        let series = Model::new(json!({ "symbol": "circle", "symbolSize": 4 }));

        let item = data.item_model(0, Some(series.clone()));
        assert_eq!(item.get_str("symbol"), Some("rect"));
        assert_eq!(item.get_f64("symbolSize"), Some(4.0));

        let missing = data.item_model(9, Some(series));
        assert_eq!(missing.get_str("symbol"), Some("circle"));
    }

    #[test]
    fn item_model_shares_the_raw_item() {
        let data =
            SeriesData::from_items([json!({ "symbol": "rect", "coords": [[0, 0], [1, 1]] })]);
        let first = data.item_model(0, None);
        let second = data.item_model(0, None);
        let raw = data.raw_item(0).unwrap();
        assert!(core::ptr::eq(first.option(), raw));
        assert!(core::ptr::eq(second.option(), raw));

        let mut edited = data.item_model(0, None);
        *edited.option_mut() = json!({ "symbol": "pin" });
        assert_eq!(edited.get_str("symbol"), Some("pin"));
        assert_eq!(
            data.raw_item(0).and_then(|item| item.get("symbol")),
            Some(&json!("rect"))
        );
    }
}
