// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loose truthiness for option values.

use alloc::string::String;
use serde_json::Value;

/// Loose truthiness, as chart options use it to decide whether a value is set.
///
/// `null`, `false`, `0`, `NaN` and the empty string are falsy. Arrays and
/// objects are always truthy, even when empty.
pub trait Truthy {
    /// Returns `true` if the value counts as set.
    fn is_truthy(&self) -> bool;
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => n.as_f64().is_truthy(),
            Self::String(s) => !s.is_empty(),
            Self::Array(_) | Self::Object(_) => true,
        }
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

/// Free-function form of [`Truthy::is_truthy`] for option values.
#[must_use]
#[inline]
pub fn is_truthy(value: &Value) -> bool {
    value.is_truthy()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_truthiness() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));

        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("none")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn scalar_truthiness() {
        assert!(!0.0_f64.is_truthy());
        assert!(!f64::NAN.is_truthy());
        assert!(0.5_f64.is_truthy());
        assert!(!"".is_truthy());
        assert!("arrow".is_truthy());
        assert!(!None::<f64>.is_truthy());
        assert!(Some(3.0_f64).is_truthy());
    }
}
