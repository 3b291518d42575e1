// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use canopy_model::Value;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// An option given either once for both ends or separately per end.
///
/// `symbol: "arrow"` and `symbol: ["arrow", "arrow"]` mean the same thing.
/// Arrays of any length are accepted: the first two elements are the ends,
/// extra elements are ignored and missing ones are unset. Elements may be
/// `null`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScalarOrPair<T> {
    /// Separate values for the two ends, start first.
    Seq(Vec<Option<T>>),
    /// One value for both ends.
    Scalar(T),
}

impl<T: Clone> ScalarOrPair<T> {
    /// Expands into `[start, end]`.
    ///
    /// ```rust
    /// use canopy_series::ScalarOrPair;
    ///
    /// assert_eq!(ScalarOrPair::Scalar(4.0).into_pair(), [Some(4.0), Some(4.0)]);
    /// assert_eq!(ScalarOrPair::Seq(vec![Some(1.0)]).into_pair(), [Some(1.0), None]);
    /// assert_eq!(
    ///     ScalarOrPair::Seq(vec![None, Some(2.0), Some(3.0)]).into_pair(),
    ///     [None, Some(2.0)]
    /// );
    /// ```
    #[must_use]
    pub fn into_pair(self) -> [Option<T>; 2] {
        match self {
            Self::Seq(values) => {
                let mut values = values.into_iter();
                [values.next().flatten(), values.next().flatten()]
            }
            Self::Scalar(value) => [Some(value.clone()), Some(value)],
        }
    }
}

/// Normalizes an optional raw value into `[start, end]`.
///
/// Missing, `null` and malformed values yield `[None, None]`; malformed ones
/// are logged.
pub(crate) fn endpoints<T>(value: Option<&Value>, key: &str) -> [Option<T>; 2]
where
    T: Clone + DeserializeOwned,
{
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return [None, None];
    };
    match ScalarOrPair::<T>::deserialize(value) {
        Ok(pair) => pair.into_pair(),
        Err(err) => {
            log::warn!("ignoring malformed `{key}`: {err}");
            [None, None]
        }
    }
}
