// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box positioning of a series inside its container.

use canopy_model::{Model, Value};
use kurbo::{Point, Rect, Size};

/// A length given either in pixels or as a percentage of the container.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Length {
    /// Absolute length.
    Px(f64),
    /// Percentage of the container extent along the same axis.
    Percent(f64),
}

impl Length {
    /// Parses a number, a numeric string or a `"12%"` string.
    ///
    /// Anything else is treated as unset.
    #[must_use]
    pub fn parse(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(Self::Px),
            Value::String(s) => {
                let s = s.trim();
                match s.strip_suffix('%') {
                    Some(pct) => pct.trim().parse().ok().map(Self::Percent),
                    None => s.parse().ok().map(Self::Px),
                }
            }
            _ => None,
        }
    }

    /// Resolves against the container extent.
    #[must_use]
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::Percent(pct) => extent * pct / 100.0,
        }
    }
}

/// The `left`/`top`/`right`/`bottom`/`width`/`height` fields of an option.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoxLayout {
    /// Distance from the container's left edge.
    pub left: Option<Length>,
    /// Distance from the container's top edge.
    pub top: Option<Length>,
    /// Distance from the container's right edge.
    pub right: Option<Length>,
    /// Distance from the container's bottom edge.
    pub bottom: Option<Length>,
    /// Explicit width.
    pub width: Option<Length>,
    /// Explicit height.
    pub height: Option<Length>,
}

impl BoxLayout {
    /// Reads the box fields from `model`, following its parent chain.
    #[must_use]
    pub fn from_model(model: &Model) -> Self {
        let length = |key: &str| {
            let value = model.get(key)?;
            let length = Length::parse(value);
            if length.is_none() {
                log::warn!("ignoring unsupported `{key}` value {value}");
            }
            length
        };
        Self {
            left: length("left"),
            top: length("top"),
            right: length("right"),
            bottom: length("bottom"),
            width: length("width"),
            height: length("height"),
        }
    }

    /// Computes the rectangle inside a container of the given size.
    ///
    /// An explicit size wins; otherwise the size spans between the two
    /// opposite offsets, with an unset offset counting as zero. When the
    /// leading offset is unset the box is placed from the trailing one.
    #[must_use]
    pub fn rect(&self, container: Size) -> Rect {
        let (x, width) = axis(self.left, self.right, self.width, container.width);
        let (y, height) = axis(self.top, self.bottom, self.height, container.height);
        Rect::from_origin_size(Point::new(x, y), Size::new(width, height))
    }
}

fn axis(
    start: Option<Length>,
    end: Option<Length>,
    size: Option<Length>,
    extent: f64,
) -> (f64, f64) {
    let start = start.map(|l| l.resolve(extent));
    let end = end.map(|l| l.resolve(extent));
    let size = size
        .map(|l| l.resolve(extent))
        .unwrap_or_else(|| extent - start.unwrap_or(0.0) - end.unwrap_or(0.0));
    let origin = match (start, end) {
        (Some(start), _) => start,
        (None, Some(end)) => extent - end - size,
        (None, None) => 0.0,
    };
    (origin, size)
}
