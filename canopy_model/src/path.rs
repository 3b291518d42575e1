// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dotted option paths.

use core::fmt;
use serde_json::Value;
use smallvec::SmallVec;

/// Most option paths are one to three segments deep.
const INLINE_SEGMENTS: usize = 4;

/// A parsed dotted path into an option tree.
///
/// Empty segments are dropped, so `""` is the empty path (which resolves to
/// the option itself) and `"a..b"` is the same as `"a.b"`.
///
/// ```rust
/// use canopy_model::OptionPath;
///
/// let path = OptionPath::parse("lineStyle.opacity");
/// assert_eq!(path.segments(), &["lineStyle", "opacity"]);
/// assert!(OptionPath::parse("").is_empty());
/// ```
#[derive(Clone, PartialEq, Eq, Default)]
pub struct OptionPath<'a> {
    segments: SmallVec<[&'a str; INLINE_SEGMENTS]>,
}

impl<'a> OptionPath<'a> {
    /// Parses a dotted path.
    #[must_use]
    pub fn parse(path: &'a str) -> Self {
        Self {
            segments: path.split('.').filter(|s| !s.is_empty()).collect(),
        }
    }

    /// Builds a path from already split segments.
    #[must_use]
    pub fn from_segments(segments: &[&'a str]) -> Self {
        Self {
            segments: segments.iter().copied().collect(),
        }
    }

    /// Returns the path segments.
    #[must_use]
    #[inline]
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Returns `true` for the empty path.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Resolves the path against a single option value, without any fallback.
    ///
    /// Objects are indexed by key and arrays by numeric segment. Any other
    /// value on the way yields `None`.
    #[must_use]
    pub fn resolve<'v>(&self, mut value: &'v Value) -> Option<&'v Value> {
        for segment in &self.segments {
            value = match value {
                Value::Object(map) => map.get(*segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(value)
    }
}

impl fmt::Debug for OptionPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptionPath({self})")
    }
}

impl fmt::Display for OptionPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl<'a> From<&'a str> for OptionPath<'a> {
    fn from(path: &'a str) -> Self {
        Self::parse(path)
    }
}
