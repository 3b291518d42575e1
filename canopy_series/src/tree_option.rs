// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed root fields of the tree series option.

use canopy_model::Value;
use serde::Deserialize;
use serde_json::json;

/// Direction the tree grows in orthogonal layout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum Orient {
    /// Root on the left.
    #[default]
    #[serde(rename = "LR", alias = "horizontal")]
    LeftRight,
    /// Root on the right.
    #[serde(rename = "RL")]
    RightLeft,
    /// Root at the top.
    #[serde(rename = "TB", alias = "vertical")]
    TopBottom,
    /// Root at the bottom.
    #[serde(rename = "BT")]
    BottomTop,
}

/// Tree layout mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeLayout {
    /// Levels laid out along one axis.
    #[default]
    Orthogonal,
    /// Levels laid out on concentric circles.
    Radial,
}

/// Shape of the edges in orthogonal layout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeShape {
    /// Bezier curves.
    #[default]
    Curve,
    /// Right-angled polylines.
    Polyline,
}

bitflags::bitflags! {
    /// Which view interactions are enabled.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Roam: u8 {
        /// Zooming with the wheel or pinch.
        const SCALE = 0b0000_0001;
        /// Panning by dragging.
        const MOVE  = 0b0000_0010;
    }
}

impl Roam {
    /// Reads a `roam` option: `true`, `"scale"`/`"zoom"` or `"move"`/`"pan"`.
    ///
    /// ```rust
    /// use canopy_series::Roam;
    /// use serde_json::json;
    ///
    /// assert_eq!(Roam::from_option(Some(&json!(true))), Roam::all());
    /// assert_eq!(Roam::from_option(Some(&json!("pan"))), Roam::MOVE);
    /// assert_eq!(Roam::from_option(None), Roam::empty());
    /// ```
    #[must_use]
    pub fn from_option(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Bool(true)) => Self::all(),
            Some(Value::String(s)) => match s.as_str() {
                "scale" | "zoom" => Self::SCALE,
                "move" | "pan" => Self::MOVE,
                _ => Self::empty(),
            },
            _ => Self::empty(),
        }
    }
}

/// Defaults merged under every tree series option.
pub(crate) fn default_option() -> Value {
    json!({
        "z": 2,
        "coordinateSystem": "view",
        "left": "12%",
        "top": "12%",
        "right": "12%",
        "bottom": "12%",
        "layout": "orthogonal",
        "edgeShape": "curve",
        "edgeForkPosition": "50%",
        "roam": false,
        "nodeScaleRatio": 0.4,
        "center": null,
        "zoom": 1,
        "orient": "LR",
        "symbol": "emptyCircle",
        "symbolSize": 7,
        "expandAndCollapse": true,
        "initialTreeDepth": 2,
        "lineStyle": {
            "color": "#ccc",
            "width": 1.5,
            "curveness": 0.5,
        },
        "itemStyle": {
            "color": "lightsteelblue",
            "borderColor": "#c23531",
            "borderWidth": 1.5,
        },
        "label": {
            "show": true,
        },
        "animationEasing": "linear",
        "animationDuration": 700,
        "animationDurationUpdate": 500,
    })
}
