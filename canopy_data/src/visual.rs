// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual attribute keys.
//!
//! This module provides [`VisualId`] for runtime identification and
//! [`Visual<T>`] for typed, const-constructible keys.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

/// A runtime visual attribute identifier.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VisualId(u16);

impl VisualId {
    /// Creates a visual ID from the given index.
    #[must_use]
    #[inline]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Returns the underlying index.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for VisualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VisualId").field(&self.0).finish()
    }
}

/// A typed visual attribute key.
///
/// Keys are plain constants declared by the code that writes the visual
/// (usually a stage handler) and read by whoever renders it. The phantom type
/// ties the key to its value type, so reading `fromSymbolSize` as a string is
/// a compile error rather than a runtime miss.
///
/// ```rust
/// use canopy_data::Visual;
///
/// const OPACITY: Visual<f64> = Visual::new(7, "opacity");
/// assert_eq!(OPACITY.id().index(), 7);
/// assert_eq!(OPACITY.name(), "opacity");
/// ```
///
/// Two keys with the same index address the same slot; declare each attribute
/// once.
pub struct Visual<T> {
    id: VisualId,
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Visual<T> {
    /// Declares a visual key.
    #[must_use]
    #[inline]
    pub const fn new(index: u16, name: &'static str) -> Self {
        Self {
            id: VisualId::new(index),
            name,
            _marker: PhantomData,
        }
    }

    /// Returns the runtime identifier.
    #[must_use]
    #[inline]
    pub const fn id(self) -> VisualId {
        self.id
    }

    /// Returns the attribute name, as used in option and renderer code.
    #[must_use]
    #[inline]
    pub const fn name(self) -> &'static str {
        self.name
    }
}

impl<T> Copy for Visual<T> {}

impl<T> Clone for Visual<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> PartialEq for Visual<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Visual<T> {}

impl<T> Hash for Visual<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Debug for Visual<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Visual")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("type", &core::any::type_name::<T>())
            .finish()
    }
}
