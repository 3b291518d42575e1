// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Tree: hierarchical chart data.
//!
//! Tree-shaped series (trees, treemaps, sunbursts) are configured with a
//! nested option where every node may carry `children`. [`Tree::create`]
//! turns that option into:
//!
//! - an arena of [`TreeNode`]s in pre-order, each with its name, depth,
//!   height, parent, children and expansion flag, and
//! - a [`SeriesData`](canopy_data::SeriesData) table with one row per node,
//!   so per-node options, values and visuals use the same machinery as any
//!   flat series.
//!
//! Node `i` is backed by row `i`. The synthetic root built from the series
//! itself is node `0`; the user's first data item is [`Tree::real_root`].
//!
//! ```rust
//! use canopy_tree::{Order, Tree};
//! use serde_json::json;
//!
//! let tree = Tree::create(&json!({
//!     "name": "series",
//!     "children": [
//!         { "name": "a", "children": [{ "name": "b", "value": 3 }] },
//!     ],
//! }))
//! .unwrap();
//!
//! let b = tree.find_by_name("b").unwrap();
//! assert_eq!(tree[b].depth(), 2);
//! assert_eq!(tree.value(b), Some(3.0));
//! assert_eq!(tree.max_depth(), 2);
//!
//! let names: Vec<_> = tree.iter(Order::Pre).map(|id| tree[id].name()).collect();
//! assert_eq!(names, ["series", "a", "b"]);
//! ```
//!
//! Expansion state starts collapsed everywhere; series code decides the
//! initial state and interaction toggles it with [`Tree::set_expand`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod tree;
mod types;

pub use error::TreeError;
pub use tree::{Traverse, Tree};
pub use types::{NodeId, Order, TreeNode, Walk};
