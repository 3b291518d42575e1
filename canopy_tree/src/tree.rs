// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: construction, traversal, queries.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::ops::Index;

use canopy_data::SeriesData;
use hashbrown::HashMap;
use serde_json::Value;
use smallvec::SmallVec;

use crate::error::TreeError;
use crate::types::{NodeId, Order, TreeNode, Walk};

/// A hierarchy of named nodes backed by a [`SeriesData`] table.
///
/// The tree is built in one go from a nested option with
/// [`Tree::create`]. Nodes are stored in pre-order, and node `i` is backed by
/// row `i` of the table, whose raw item is the node's option (minus its
/// `children`).
#[derive(Clone)]
pub struct Tree {
    nodes: Vec<TreeNode>,
    by_name: HashMap<String, NodeId>,
    data: SeriesData,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tree")
            .field("nodes", &self.nodes.len())
            .field("height", &self.nodes.first().map_or(0, |root| root.height))
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl Tree {
    /// Builds a tree from a nested option.
    ///
    /// `root` must be an object; each node may carry a `name` and a
    /// `children` array of further nodes. The root itself becomes node `0`.
    ///
    /// # Errors
    ///
    /// - [`TreeError::RootNotObject`] if `root` is not an object.
    /// - [`TreeError::ChildrenNotArray`] if some `children` is neither absent,
    ///   `null`, nor an array.
    pub fn create(root: &Value) -> Result<Self, TreeError> {
        if !root.is_object() {
            return Err(TreeError::RootNotObject);
        }

        let mut nodes: Vec<TreeNode> = Vec::new();
        let mut items: Vec<Value> = Vec::new();
        let mut by_name: HashMap<String, NodeId> = HashMap::new();
        let mut stack: Vec<(&Value, Option<NodeId>)> = vec![(root, None)];

        while let Some((item, parent)) = stack.pop() {
            let id = NodeId::new(nodes.len());
            let name = node_name(item);
            by_name.entry(name.clone()).or_insert(id);

            let depth = match parent {
                Some(parent) => {
                    let parent = &mut nodes[parent.idx()];
                    parent.children.push(id);
                    parent.depth + 1
                }
                None => 0,
            };
            nodes.push(TreeNode {
                name,
                depth,
                height: 0,
                parent,
                children: SmallVec::new(),
                is_expand: false,
                data_index: id.idx(),
            });
            items.push(without_children(item));

            match item.get("children") {
                None | Some(Value::Null) => {}
                Some(Value::Array(children)) => {
                    stack.extend(children.iter().rev().map(|child| (child, Some(id))));
                }
                Some(_) => return Err(TreeError::ChildrenNotArray { data_index: id.idx() }),
            }
        }

        let mut tree = Self {
            nodes,
            by_name,
            data: SeriesData::from_items(items),
        };
        tree.update_heights();
        log::debug!(
            "tree created: {} nodes, height {}",
            tree.nodes.len(),
            tree.nodes[0].height
        );
        Ok(tree)
    }

    /// Children always follow their parent in pre-order, so a reverse sweep
    /// sees every child before its parent.
    fn update_heights(&mut self) {
        for idx in (0..self.nodes.len()).rev() {
            let height = self.nodes[idx]
                .children
                .iter()
                .map(|child| self.nodes[child.idx()].height)
                .max()
                .unwrap_or(0);
            self.nodes[idx].height = height + 1;
        }
    }

    /// Returns the synthetic root.
    #[must_use]
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Returns the first child of the root, i.e. the first user data item.
    #[must_use]
    pub fn real_root(&self) -> Option<NodeId> {
        self.nodes[0].children.first().copied()
    }

    /// Returns the number of nodes, including the root.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least its root.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns a node, or `None` for an id from another tree.
    #[must_use]
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.idx())
    }

    /// Returns the backing data table.
    #[must_use]
    #[inline]
    pub fn data(&self) -> &SeriesData {
        &self.data
    }

    /// Returns the backing data table mutably, for visual passes.
    #[must_use]
    #[inline]
    pub fn data_mut(&mut self) -> &mut SeriesData {
        &mut self.data
    }

    /// Returns the node backed by a data row.
    #[must_use]
    pub fn node_by_data_index(&self, data_index: usize) -> Option<NodeId> {
        self.nodes
            .get(data_index)
            .filter(|node| node.data_index == data_index)
            .map(|_| NodeId::new(data_index))
    }

    /// Returns the first node in pre-order with the given name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Returns the primary value of a node, `NaN` when its item has none.
    #[must_use]
    pub fn value(&self, id: NodeId) -> Option<f64> {
        self.get(id).and_then(|node| self.data.value(node.data_index))
    }

    /// Returns the raw option item of a node.
    #[must_use]
    pub fn raw_item(&self, id: NodeId) -> Option<&Value> {
        self.get(id).and_then(|node| self.data.raw_item(node.data_index))
    }

    /// Returns the ancestors of a node, root first.
    #[must_use]
    pub fn ancestors(&self, id: NodeId, include_self: bool) -> Vec<NodeId> {
        let mut ancestors = Vec::new();
        let mut current = if include_self {
            self.get(id).map(|_| id)
        } else {
            self.get(id).and_then(TreeNode::parent)
        };
        while let Some(node) = current {
            ancestors.push(node);
            current = self.nodes[node.idx()].parent;
        }
        ancestors.reverse();
        ancestors
    }

    /// Returns `true` if `ancestor` is a strict ancestor of `node`.
    #[must_use]
    pub fn is_ancestor_of(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.get(node).and_then(TreeNode::parent);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.nodes[parent.idx()].parent;
        }
        false
    }

    /// Returns the largest node depth.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.iter(Order::Pre)
            .map(|id| self.nodes[id.idx()].depth)
            .max()
            .unwrap_or(0)
    }

    /// Returns whether a node is expanded (`false` for unknown ids).
    #[must_use]
    pub fn is_expand(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(TreeNode::is_expand)
    }

    /// Expands or collapses a node.
    pub fn set_expand(&mut self, id: NodeId, expand: bool) {
        if let Some(node) = self.nodes.get_mut(id.idx()) {
            node.is_expand = expand;
        }
    }

    /// Flips a node's expansion and returns the new state.
    pub fn toggle_expand(&mut self, id: NodeId) -> bool {
        let expand = !self.is_expand(id);
        self.set_expand(id, expand);
        expand
    }

    /// Iterates every node from the root.
    #[must_use]
    pub fn iter(&self, order: Order) -> Traverse<'_> {
        self.iter_from(self.root(), order)
    }

    /// Iterates the subtree rooted at `start` (inclusive).
    #[must_use]
    pub fn iter_from(&self, start: NodeId, order: Order) -> Traverse<'_> {
        let stack = if self.get(start).is_some() {
            vec![(start, false)]
        } else {
            Vec::new()
        };
        Traverse {
            tree: self,
            order,
            stack,
        }
    }

    /// Visits the subtree at `start` in pre-order, letting the visitor prune.
    pub fn walk_pre_order<F>(&self, start: NodeId, mut visit: F)
    where
        F: FnMut(NodeId, &TreeNode) -> Walk,
    {
        let Some(_) = self.get(start) else {
            return;
        };
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.idx()];
            if visit(id, node) == Walk::Continue {
                stack.extend(node.children.iter().rev().copied());
            }
        }
    }
}

impl Index<NodeId> for Tree {
    type Output = TreeNode;

    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    fn index(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.idx()]
    }
}

/// Pre- or post-order iterator over node ids.
///
/// Created by [`Tree::iter`] and [`Tree::iter_from`].
#[derive(Debug)]
pub struct Traverse<'a> {
    tree: &'a Tree,
    order: Order,
    /// `(node, children already scheduled)`.
    stack: Vec<(NodeId, bool)>,
}

impl Iterator for Traverse<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let tree = self.tree;
        loop {
            let (id, scheduled) = self.stack.pop()?;
            let children = tree.nodes[id.idx()].children.iter().rev();
            match self.order {
                Order::Pre => {
                    self.stack.extend(children.map(|child| (*child, false)));
                    return Some(id);
                }
                Order::Post if scheduled => return Some(id),
                Order::Post => {
                    self.stack.push((id, true));
                    self.stack.extend(children.map(|child| (*child, false)));
                }
            }
        }
    }
}

fn node_name(item: &Value) -> String {
    match item.get("name") {
        Some(Value::String(name)) => name.clone(),
        Some(Value::Number(name)) => name.to_string(),
        _ => String::new(),
    }
}

fn without_children(item: &Value) -> Value {
    match item {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(key, _)| key.as_str() != "children")
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        ),
        other => other.clone(),
    }
}
