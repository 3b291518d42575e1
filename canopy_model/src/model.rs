// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Option models with parent fallback.

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ModelError;
use crate::path::OptionPath;

/// A shared view over an option value with an optional parent model.
///
/// Models are cheap to clone (`Rc`). Lookups walk the parent chain until a
/// non-`null` value is found:
///
/// 1. The model's own option
/// 2. The parent model (recursively)
///
/// Item models are usually created per lookup and parented on a series model,
/// so swapping the parent is how a caller redirects the fallback chain (for
/// example to a "leaves" style bundle).
///
/// ```rust
/// use canopy_model::Model;
/// use serde_json::json;
///
/// let defaults = Model::new(json!({ "label": { "show": true, "position": "left" } }));
/// let node = Model::with_parent(json!({ "label": { "position": "right" } }), defaults);
///
/// let label = node.get_model("label");
/// assert_eq!(label.get_str("position"), Some("right"));
/// assert_eq!(label.get_bool("show"), Some(true));
/// ```
#[derive(Clone, Debug)]
pub struct Model {
    inner: Rc<ModelData>,
}

#[derive(Clone, Debug)]
struct ModelData {
    option: Rc<Value>,
    parent: Option<Model>,
}

impl Model {
    /// Creates a root model with no parent.
    #[must_use]
    pub fn new(option: Value) -> Self {
        Self::from_parts(option, None)
    }

    /// Creates a model that falls back to `parent`.
    #[must_use]
    pub fn with_parent(option: Value, parent: Self) -> Self {
        Self::from_parts(option, Some(parent))
    }

    /// Creates a model from an option and an optional parent.
    #[must_use]
    pub fn from_parts(option: Value, parent: Option<Self>) -> Self {
        Self::from_shared(Rc::new(option), parent)
    }

    /// Creates a model over an option owned elsewhere, without copying it.
    ///
    /// The option is only copied if the model is later written through
    /// [`Model::option_mut`].
    #[must_use]
    pub fn from_shared(option: Rc<Value>, parent: Option<Self>) -> Self {
        Self {
            inner: Rc::new(ModelData { option, parent }),
        }
    }

    /// Returns the model's own option value.
    #[must_use]
    #[inline]
    pub fn option(&self) -> &Value {
        &self.inner.option
    }

    /// Returns the parent model, if any.
    #[must_use]
    #[inline]
    pub fn parent(&self) -> Option<&Self> {
        self.inner.parent.as_ref()
    }

    /// Replaces the parent model.
    ///
    /// Other clones of this model keep their previous parent.
    pub fn set_parent(&mut self, parent: Option<Self>) {
        Rc::make_mut(&mut self.inner).parent = parent;
    }

    /// Returns a mutable reference to the model's own option.
    ///
    /// Other clones of this model, and any other owner of a shared option,
    /// keep their previous option.
    pub fn option_mut(&mut self) -> &mut Value {
        Rc::make_mut(&mut Rc::make_mut(&mut self.inner).option)
    }

    /// Returns `true` if both handles share the same model data.
    #[must_use]
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }

    /// Looks up a dotted path, falling back to the parent chain.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.get_path(&OptionPath::parse(path))
    }

    /// Looks up a parsed path, falling back to the parent chain.
    ///
    /// A `null` value counts as missing.
    #[must_use]
    pub fn get_path(&self, path: &OptionPath<'_>) -> Option<&Value> {
        let mut model = self;
        loop {
            if let Some(value) = path.resolve(&model.inner.option)
                && !value.is_null()
            {
                return Some(value);
            }
            model = model.inner.parent.as_ref()?;
        }
    }

    /// Looks up a single key.
    ///
    /// With `ignore_parent`, only the model's own option is consulted.
    #[must_use]
    pub fn get_shallow(&self, key: &str, ignore_parent: bool) -> Option<&Value> {
        match self.inner.option.get(key) {
            Some(value) if !value.is_null() => Some(value),
            _ if ignore_parent => None,
            _ => self.parent()?.get_shallow(key, false),
        }
    }

    /// Returns a sub-model for `path`.
    ///
    /// The sub-model's option is the value at `path` (or `null`), and its
    /// parent is the parent's sub-model for the same path.
    #[must_use]
    pub fn get_model(&self, path: &str) -> Self {
        self.get_model_path(&OptionPath::parse(path))
    }

    /// Parsed-path form of [`Model::get_model`].
    #[must_use]
    pub fn get_model_path(&self, path: &OptionPath<'_>) -> Self {
        let option = path
            .resolve(&self.inner.option)
            .cloned()
            .unwrap_or(Value::Null);
        let parent = self.parent().map(|parent| parent.get_model_path(path));
        Self::from_parts(option, parent)
    }

    /// Looks up a number.
    #[must_use]
    pub fn get_f64(&self, path: &str) -> Option<f64> {
        self.get(path).and_then(Value::as_f64)
    }

    /// Looks up a string.
    #[must_use]
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    /// Looks up a boolean.
    #[must_use]
    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.get(path).and_then(Value::as_bool)
    }

    /// Looks up a value and deserializes it into `T`.
    ///
    /// Returns `Ok(None)` when nothing along the chain sets the path.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidValue`] when the value does not have the
    /// shape `T` expects.
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ModelError> {
        let Some(value) = self.get(path) else {
            return Ok(None);
        };
        serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|err| ModelError::InvalidValue {
                path: String::from(path),
                message: err.to_string(),
            })
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Value::Null)
    }
}
