// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sparse storage for visual attribute values.
//!
//! A series writes a handful of visuals (symbol, size, opacity, color) once,
//! and only some rows override a few of them. [`VisualStore`] keeps those
//! values in a sorted `SmallVec` keyed by [`VisualId`] with binary search,
//! so a store with no overrides costs no heap allocation.

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;
use smallvec::SmallVec;

use crate::visual::{Visual, VisualId};

/// Series rarely carry more than a handful of visuals.
const INLINE_CAPACITY: usize = 6;

/// A type-erased visual value.
pub struct ErasedVisual {
    inner: Box<dyn CloneAny>,
    type_id: TypeId,
}

impl ErasedVisual {
    /// Wraps a concrete value.
    #[must_use]
    pub fn new<T: Clone + 'static>(value: T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            inner: Box::new(value),
        }
    }

    /// Returns `true` if the contained value is of type `T`.
    #[must_use]
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Attempts to downcast to `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        if self.is::<T>() {
            self.inner.as_any().downcast_ref()
        } else {
            None
        }
    }
}

impl Clone for ErasedVisual {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_boxed(),
            type_id: self.type_id,
        }
    }
}

impl fmt::Debug for ErasedVisual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedVisual")
            .field("type_id", &self.type_id)
            .finish_non_exhaustive()
    }
}

trait CloneAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn clone_boxed(&self) -> Box<dyn CloneAny>;
}

impl<T: Clone + 'static> CloneAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_boxed(&self) -> Box<dyn CloneAny> {
        Box::new(self.clone())
    }
}

/// Sparse, sorted storage of visual values.
///
/// ```rust
/// use canopy_data::{Visual, VisualStore};
///
/// const SIZE: Visual<f64> = Visual::new(0, "symbolSize");
///
/// let mut store = VisualStore::new();
/// assert!(store.get(SIZE).is_none());
///
/// store.set(SIZE, 10.0);
/// assert_eq!(store.get(SIZE), Some(&10.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct VisualStore {
    entries: SmallVec<[(VisualId, ErasedVisual); INLINE_CAPACITY]>,
}

impl VisualStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no visual is set.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of visuals set.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    fn find(&self, id: VisualId) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&id, |(vid, _)| *vid)
    }

    /// Gets a value, if set with the key's type.
    #[must_use]
    pub fn get<T: Clone + 'static>(&self, key: Visual<T>) -> Option<&T> {
        self.find(key.id())
            .ok()
            .and_then(|idx| self.entries[idx].1.downcast_ref())
    }

    /// Sets a value, replacing any previous value for the key.
    pub fn set<T: Clone + 'static>(&mut self, key: Visual<T>, value: T) {
        let erased = ErasedVisual::new(value);
        match self.find(key.id()) {
            Ok(idx) => self.entries[idx].1 = erased,
            Err(idx) => self.entries.insert(idx, (key.id(), erased)),
        }
    }

    /// Removes a value.
    ///
    /// Returns `true` if a value was removed.
    pub fn remove<T: Clone + 'static>(&mut self, key: Visual<T>) -> bool {
        if let Ok(idx) = self.find(key.id()) {
            self.entries.remove(idx);
            true
        } else {
            false
        }
    }

    /// Returns `true` if the key has a value.
    #[must_use]
    #[inline]
    pub fn contains<T: Clone + 'static>(&self, key: Visual<T>) -> bool {
        self.find(key.id()).is_ok()
    }

    /// Returns the IDs of all set visuals, in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = VisualId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
