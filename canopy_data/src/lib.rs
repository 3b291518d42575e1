// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Data: the row-indexed table behind every series.
//!
//! A series turns its option `data` into a [`SeriesData`]: one row per item,
//! with the raw item kept for per-item option lookups, plus the name and
//! primary numeric value columns. Visual stages write resolved rendering
//! attributes into the same table, either once for the whole series or as
//! sparse per-row overrides, and renderers read them back with
//! [`SeriesData::item_visual`].
//!
//! Visual attributes are addressed by typed keys ([`Visual<T>`]) so writer and
//! reader agree on the value type at compile time:
//!
//! ```rust
//! use canopy_data::{SeriesData, Visual};
//! use serde_json::json;
//!
//! const OPACITY: Visual<f64> = Visual::new(0, "opacity");
//!
//! let mut data = SeriesData::from_items([json!({ "name": "a" }), json!({ "name": "b" })]);
//! data.set_visual(OPACITY, 0.5);
//! data.set_item_visual(1, OPACITY, 0.9);
//!
//! assert_eq!(data.item_visual(0, OPACITY), Some(&0.5));
//! assert_eq!(data.item_visual(1, OPACITY), Some(&0.9));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod store;
mod table;
mod visual;

pub use store::{ErasedVisual, VisualStore};
pub use table::SeriesData;
pub use visual::{Visual, VisualId};
