// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Model: declarative chart options with layered lookup.
//!
//! A chart is configured with a tree of JSON-like options. Series, components
//! and individual data items each see that tree through a [`Model`]: a shared,
//! immutable option value plus an optional *parent* model. Lookups that miss
//! (or hit `null`) in the model's own option fall through to the parent, so an
//! item model naturally inherits from its series, and a series from its
//! defaults.
//!
//! **Own option → parent → parent's parent → … → `None`**
//!
//! ## Core Concepts
//!
//! ### Paths
//!
//! [`OptionPath`] splits a dotted path such as `"lineStyle.opacity"` into
//! segments. Numeric segments index into arrays, so `"symbolSize.1"` reads the
//! second element of a pair.
//!
//! ### Models
//!
//! ```rust
//! use canopy_model::Model;
//! use serde_json::json;
//!
//! let series = Model::new(json!({
//!     "symbol": "circle",
//!     "lineStyle": { "opacity": 0.5, "width": 2 }
//! }));
//! let item = Model::with_parent(json!({ "lineStyle": { "width": 4 } }), series.clone());
//!
//! // Own value wins.
//! assert_eq!(item.get_f64("lineStyle.width"), Some(4.0));
//! // Missing values fall through to the parent.
//! assert_eq!(item.get_f64("lineStyle.opacity"), Some(0.5));
//! // Shallow lookups can opt out of the parent.
//! assert!(item.get_shallow("symbol", true).is_none());
//! assert_eq!(item.get_str("symbol"), Some("circle"));
//! ```
//!
//! ### Defaults and truthiness
//!
//! [`merge_defaults`] fills the holes of a user option from a default option,
//! and [`Truthy`] reproduces the loose truthiness charts use to decide whether
//! an override "is set".
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod merge;
mod model;
mod path;
mod truthy;

pub use error::ModelError;
pub use merge::merge_defaults;
pub use model::Model;
pub use path::OptionPath;
pub use truthy::{Truthy, is_truthy};

/// Re-export of the option value type so dependants agree on one JSON model.
pub use serde_json::Value;
