// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the tree: node identifiers, nodes, and traversal controls.

use alloc::string::String;
use smallvec::SmallVec;

/// Identifier for a node in a [`Tree`](crate::Tree).
///
/// Trees are rebuilt from scratch whenever their option changes, so an id is
/// a plain slot index. The synthetic root is always slot `0`, and slots follow
/// pre-order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: usize) -> Self {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "trees never approach u32::MAX nodes"
        )]
        let idx = idx as u32;
        Self(idx)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Returns the pre-order position of the node.
    #[must_use]
    pub const fn index(self) -> usize {
        self.idx()
    }
}

/// One node of a [`Tree`](crate::Tree).
#[derive(Clone, Debug)]
pub struct TreeNode {
    pub(crate) name: String,
    pub(crate) depth: usize,
    pub(crate) height: usize,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: SmallVec<[NodeId; 4]>,
    pub(crate) is_expand: bool,
    pub(crate) data_index: usize,
}

impl TreeNode {
    /// Display name (empty when the option item has none).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Distance from the root; the root has depth `0`.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Length of the longest downward path counted in nodes; leaves have height `1`.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Parent node, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in option order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether the node's children are shown.
    #[must_use]
    pub fn is_expand(&self) -> bool {
        self.is_expand
    }

    /// Row of the node in the backing [`SeriesData`](canopy_data::SeriesData).
    #[must_use]
    pub fn data_index(&self) -> usize {
        self.data_index
    }

    /// Returns `true` if the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Traversal order for [`Tree::iter`](crate::Tree::iter).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Order {
    /// Parents before children.
    Pre,
    /// Children before parents.
    Post,
}

/// Control value returned by [`Tree::walk_pre_order`](crate::Tree::walk_pre_order) visitors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Walk {
    /// Visit this node's children next.
    Continue,
    /// Do not descend into this node's children.
    SkipChildren,
}
