// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Series: series models and the stages that run over them.
//!
//! A series is configured by a JSON option. This crate turns options into
//! [`SeriesModel`]s and runs [`StageHandler`]s over them to fill the visual
//! columns a renderer reads.
//!
//! - [`TreeSeriesModel`] builds a [`Tree`](canopy_tree::Tree) from nested
//!   `children`, sets each node's initial expansion from `collapsed`,
//!   `expandAndCollapse` and `initialTreeDepth`, and styles leaf and
//!   collapsed nodes through the `leaves` option.
//! - [`LinesSeriesModel`] holds one row per line; [`LinesVisual`] resolves
//!   end symbols, their sizes and opacity into the table.
//! - [`SeriesRegistry`] maps series types to factories and stages. It starts
//!   empty; [`install_builtin`] adds the types above.
//!
//! ```rust
//! use canopy_series::{SeriesRegistry, install_builtin, visual};
//! use serde_json::json;
//!
//! let mut registry = SeriesRegistry::new();
//! install_builtin(&mut registry);
//!
//! let mut lines = registry
//!     .create(json!({
//!         "type": "lines",
//!         "symbol": "arrow",
//!         "data": [
//!             { "coords": [[0, 0], [10, 10]], "symbol": ["circle", "pin"] },
//!             { "coords": [[5, 5], [0, 10]] },
//!         ],
//!     }))
//!     .unwrap();
//! registry.run_stages(&mut *lines);
//!
//! let data = lines.data();
//! assert_eq!(data.visual(visual::FROM_SYMBOL).map(String::as_str), Some("arrow"));
//! assert_eq!(data.item_visual(0, visual::TO_SYMBOL).map(String::as_str), Some("pin"));
//! assert_eq!(data.item_visual(1, visual::TO_SYMBOL).map(String::as_str), Some("arrow"));
//!
//! let tree = registry
//!     .create(json!({
//!         "type": "tree",
//!         "data": [{ "name": "A", "children": [{ "name": "B", "value": 5 }] }],
//!     }))
//!     .unwrap();
//! assert_eq!(tree.format_tooltip(2), "A.B : 5");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod format;
mod layout;
mod lines;
mod pair;
mod registry;
mod series;
mod stage;
mod tree;
mod tree_option;
pub mod visual;

pub use error::SeriesError;
pub use format::encode_html;
pub use layout::{BoxLayout, Length};
pub use lines::LinesSeriesModel;
pub use pair::ScalarOrPair;
pub use registry::{SeriesFactory, SeriesRegistry, install_builtin};
pub use series::SeriesModel;
pub use stage::{DataEach, StageHandler, StageOutcome, run_stage};
pub use tree::TreeSeriesModel;
pub use tree_option::{EdgeShape, Orient, Roam, TreeLayout};
pub use visual::LinesVisual;
