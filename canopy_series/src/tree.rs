// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use canopy_data::SeriesData;
use canopy_model::{Model, ModelError, Value, is_truthy, merge_defaults};
use canopy_tree::{NodeId, Order, Tree};
use kurbo::{Point, Rect, Size};
use serde_json::{Map, json};

use crate::format::{encode_html, push_value};
use crate::layout::BoxLayout;
use crate::tree_option::default_option;
use crate::{EdgeShape, Orient, Roam, ScalarOrPair, SeriesError, SeriesModel, TreeLayout};

/// A tree series: hierarchical data drawn as nodes and edges.
///
/// The series `data` holds the top-level nodes; together they hang below a
/// synthetic root named after the series. Leaf and collapsed nodes resolve
/// their styles through the `leaves` option before the series option.
#[derive(Clone, Debug)]
pub struct TreeSeriesModel {
    model: Model,
    leaves: Model,
    tree: Tree,
    tree_depth: usize,
}

impl TreeSeriesModel {
    /// Registered series type.
    pub const TYPE: &'static str = "tree";

    /// Builds the series from its option, merging in the defaults.
    ///
    /// The tree is created from `{ name, children: data }`, its depth is
    /// measured and every node gets its initial expansion state.
    pub fn new(mut option: Value) -> Result<Self, SeriesError> {
        if !option.is_object() && !option.is_null() {
            return Err(SeriesError::OptionNotObject);
        }
        merge_defaults(&mut option, &default_option());
        let Some(map) = option.as_object_mut() else {
            return Err(SeriesError::OptionNotObject);
        };
        let children = match map.remove("data") {
            None | Some(Value::Null) => Value::Array(Vec::new()),
            Some(children @ Value::Array(_)) => children,
            Some(_) => {
                return Err(SeriesError::DataNotArray {
                    series_type: Self::TYPE,
                });
            }
        };
        let name = map.get("name").cloned().unwrap_or(Value::Null);
        let leaves = map
            .get("leaves")
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));

        let tree = Tree::create(&json!({ "name": name, "children": children }))?;
        let tree_depth = tree.max_depth();
        let model = Model::new(option);
        let leaves = Model::with_parent(leaves, model.clone());

        let mut series = Self {
            model,
            leaves,
            tree,
            tree_depth,
        };
        series.reset_expand_state();
        log::debug!(
            "tree series `{}`: {} nodes, depth {tree_depth}",
            series.name(),
            series.tree.len()
        );
        Ok(series)
    }

    /// Returns the tree.
    #[must_use]
    #[inline]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Returns the tree mutably, e.g. to toggle expansion.
    #[must_use]
    #[inline]
    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    /// Returns the deepest node depth, measured when the series was built.
    #[must_use]
    #[inline]
    pub fn tree_depth(&self) -> usize {
        self.tree_depth
    }

    /// Returns the model leaf and collapsed nodes fall back to.
    #[must_use]
    #[inline]
    pub fn leaves(&self) -> &Model {
        &self.leaves
    }

    /// Returns the depth down to which nodes start expanded.
    ///
    /// This is `initialTreeDepth` when `expandAndCollapse` is on and the
    /// depth is not negative, and the whole tree otherwise.
    #[must_use]
    pub fn expand_tree_depth(&self) -> usize {
        let expand_and_collapse = self.model.get("expandAndCollapse").is_some_and(is_truthy);
        match self.model.get_f64("initialTreeDepth") {
            Some(depth) if expand_and_collapse && depth >= 0.0 => floor_depth(depth),
            _ => self.tree_depth,
        }
    }

    /// Recomputes every node's expansion from the option.
    ///
    /// A non-null `collapsed` on the node's item decides alone, by
    /// truthiness. Other nodes are expanded down to
    /// [`expand_tree_depth`](Self::expand_tree_depth).
    pub fn reset_expand_state(&mut self) {
        let expand_depth = self.expand_tree_depth();
        let ids: Vec<NodeId> = self.tree.iter(Order::Pre).collect();
        for id in ids {
            let collapsed = self
                .tree
                .raw_item(id)
                .and_then(|item| item.get("collapsed"))
                .filter(|collapsed| !collapsed.is_null())
                .map(is_truthy);
            let expand = match collapsed {
                Some(collapsed) => !collapsed,
                None => self.tree[id].depth() <= expand_depth,
            };
            self.tree.set_expand(id, expand);
        }
    }

    /// Returns `true` if the node styles through the `leaves` option.
    ///
    /// That is the case for nodes without children and for collapsed nodes.
    #[must_use]
    pub fn uses_leaves_style(&self, id: NodeId) -> bool {
        self.tree
            .get(id)
            .is_none_or(|node| node.is_leaf() || !node.is_expand())
    }

    /// Tree orientation.
    ///
    /// # Errors
    ///
    /// Returns an error when `orient` is not a known orientation.
    pub fn orient(&self) -> Result<Orient, ModelError> {
        Ok(self.model.get_as("orient")?.unwrap_or_default())
    }

    /// Layout mode.
    ///
    /// # Errors
    ///
    /// Returns an error when `layout` is not a known mode.
    pub fn layout(&self) -> Result<TreeLayout, ModelError> {
        Ok(self.model.get_as("layout")?.unwrap_or_default())
    }

    /// Edge shape in orthogonal layout.
    ///
    /// # Errors
    ///
    /// Returns an error when `edgeShape` is not a known shape.
    pub fn edge_shape(&self) -> Result<EdgeShape, ModelError> {
        Ok(self.model.get_as("edgeShape")?.unwrap_or_default())
    }

    /// Enabled view interactions.
    #[must_use]
    pub fn roam(&self) -> Roam {
        Roam::from_option(self.model.get("roam"))
    }

    /// Current view zoom.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.model.get_f64("zoom").unwrap_or(1.0)
    }

    /// Stores a new view zoom, e.g. after a roam gesture.
    ///
    /// Non-finite values are ignored and the previous zoom is kept.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            log::warn!("ignoring non-finite zoom {zoom}");
            return;
        }
        self.set_root_field("zoom", json!(zoom));
    }

    /// View center, when one is set.
    ///
    /// # Errors
    ///
    /// Returns an error when `center` is not a pair of numbers.
    pub fn center(&self) -> Result<Option<Point>, ModelError> {
        Ok(self
            .model
            .get_as::<(f64, f64)>("center")?
            .map(|(x, y)| Point::new(x, y)))
    }

    /// Stores a new view center, e.g. after a roam gesture.
    ///
    /// A center with a non-finite coordinate is ignored and the previous
    /// center is kept.
    pub fn set_center(&mut self, center: Point) {
        if !center.is_finite() {
            log::warn!("ignoring non-finite center {center:?}");
            return;
        }
        self.set_root_field("center", json!([center.x, center.y]));
    }

    /// Node symbol size; a single number applies to both dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error when `symbolSize` is neither a number nor a pair.
    pub fn symbol_size(&self) -> Result<Size, ModelError> {
        let [width, height] = self
            .model
            .get_as::<ScalarOrPair<f64>>("symbolSize")?
            .map_or([None, None], ScalarOrPair::into_pair);
        Ok(Size::new(width.unwrap_or(0.0), height.unwrap_or(0.0)))
    }

    /// Rectangle the tree occupies inside a container of the given size.
    #[must_use]
    pub fn layout_rect(&self, container: Size) -> Rect {
        BoxLayout::from_model(&self.model).rect(container)
    }

    fn set_root_field(&mut self, key: &str, value: Value) {
        if let Some(map) = self.model.option_mut().as_object_mut() {
            map.insert(String::from(key), value);
        }
        // The option may have been copied on write; keep the leaves chain on
        // the current series model.
        self.leaves.set_parent(Some(self.model.clone()));
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "node depths are integers, so flooring keeps the comparison"
)]
fn floor_depth(depth: f64) -> usize {
    depth as usize
}

impl SeriesModel for TreeSeriesModel {
    fn series_type(&self) -> &'static str {
        Self::TYPE
    }

    fn model(&self) -> &Model {
        &self.model
    }

    fn data(&self) -> &SeriesData {
        self.tree.data()
    }

    fn data_mut(&mut self) -> &mut SeriesData {
        self.tree.data_mut()
    }

    /// Node model parented on the leaves model for leaf and collapsed nodes,
    /// and on the series model otherwise.
    ///
    /// The choice is made on every call, so toggling expansion takes effect
    /// immediately.
    fn item_model(&self, data_index: usize) -> Model {
        let leaves = self
            .tree
            .node_by_data_index(data_index)
            .is_none_or(|id| self.uses_leaves_style(id));
        let parent = if leaves { &self.leaves } else { &self.model };
        self.tree.data().item_model(data_index, Some(parent.clone()))
    }

    /// Dotted name path from the first level below the series down to the
    /// node, followed by its value when it has one.
    fn format_tooltip(&self, data_index: usize) -> String {
        let Some(node) = self.tree.node_by_data_index(data_index) else {
            return String::new();
        };
        let root = self.tree.root();
        let mut text = String::from(self.tree[node].name());
        let mut current = node;
        while let Some(parent) = self.tree[current].parent().filter(|p| *p != root) {
            let mut prefixed = String::from(self.tree[parent].name());
            prefixed.push('.');
            prefixed.push_str(&text);
            text = prefixed;
            current = parent;
        }
        push_value(&mut text, self.tree.value(node));
        encode_html(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(option: Value) -> TreeSeriesModel {
        TreeSeriesModel::new(option).unwrap()
    }

    #[test]
    fn defaults_and_depth() {
        let s = series(json!({
            "name": "flare",
            "data": [{ "name": "A", "children": [{ "name": "B", "value": 5 }] }],
        }));
        assert_eq!(s.tree_depth(), 2);
        assert_eq!(s.tree().len(), 3);
        assert_eq!(s.expand_tree_depth(), 2);
        assert_eq!(s.orient().unwrap(), Orient::LeftRight);
        assert_eq!(s.layout().unwrap(), TreeLayout::Orthogonal);
        assert_eq!(s.edge_shape().unwrap(), EdgeShape::Curve);
        assert_eq!(s.roam(), Roam::empty());
        assert_eq!(s.symbol_size().unwrap(), Size::new(7.0, 7.0));
        assert_eq!(s.center().unwrap(), None);
        assert_eq!(s.name(), "flare");
        assert_eq!(s.model().get("data"), None);
    }

    #[test]
    fn missing_data_gives_bare_root() {
        let s = series(Value::Null);
        assert_eq!(s.tree().len(), 1);
        assert_eq!(s.tree_depth(), 0);
        assert!(s.tree().is_expand(s.tree().root()));
    }

    #[test]
    fn malformed_data() {
        assert_eq!(
            TreeSeriesModel::new(json!({ "data": {} })).unwrap_err(),
            SeriesError::DataNotArray { series_type: "tree" }
        );
        assert_eq!(
            TreeSeriesModel::new(json!("tree")).unwrap_err(),
            SeriesError::OptionNotObject
        );
    }

    #[test]
    fn zoom_and_center_round_trip_through_the_option() {
        let mut s = series(json!({ "roam": true, "data": [{ "name": "A" }] }));
        assert_eq!(s.roam(), Roam::all());
        assert_eq!(s.zoom(), 1.0);
        s.set_zoom(2.5);
        s.set_center(Point::new(10.0, 20.0));
        assert_eq!(s.zoom(), 2.5);
        assert_eq!(s.center().unwrap(), Some(Point::new(10.0, 20.0)));
        // The leaves chain sees the updated series option.
        assert_eq!(s.leaves().get_f64("zoom"), Some(2.5));
    }

    #[test]
    fn non_finite_view_updates_are_ignored() {
        let mut s = series(json!({ "zoom": 3, "center": [1, 2] }));
        s.set_zoom(f64::NAN);
        s.set_zoom(f64::INFINITY);
        assert_eq!(s.zoom(), 3.0);

        s.set_center(Point::new(f64::NAN, 5.0));
        s.set_center(Point::new(5.0, f64::NEG_INFINITY));
        assert_eq!(s.center().unwrap(), Some(Point::new(1.0, 2.0)));

        s.set_zoom(0.5);
        assert_eq!(s.zoom(), 0.5);
    }

    #[test]
    fn clones_keep_their_own_expansion() {
        let mut s = series(json!({ "data": [{ "name": "A", "children": [{ "name": "B" }] }] }));
        let copy = s.clone();
        let a = s.tree().find_by_name("A").unwrap();
        assert!(s.tree().is_expand(a));

        s.tree_mut().toggle_expand(a);
        s.set_zoom(4.0);
        assert!(!s.tree().is_expand(a));
        assert!(copy.tree().is_expand(a));
        assert_eq!(copy.zoom(), 1.0);
        assert_eq!(s.zoom(), 4.0);
    }

    #[test]
    fn typed_accessors_report_bad_values() {
        let s = series(json!({ "orient": "sideways", "symbolSize": [4, 6] }));
        assert!(s.orient().is_err());
        assert_eq!(s.symbol_size().unwrap(), Size::new(4.0, 6.0));

        let s = series(json!({ "orient": "vertical", "layout": "radial" }));
        assert_eq!(s.orient().unwrap(), Orient::TopBottom);
        assert_eq!(s.layout().unwrap(), TreeLayout::Radial);
    }

    #[test]
    fn default_box_is_twelve_percent_inset() {
        let s = series(json!({}));
        let rect = s.layout_rect(Size::new(100.0, 200.0));
        assert_eq!(rect, Rect::new(12.0, 24.0, 88.0, 176.0));
    }
}
