// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// Error returned when an option value cannot be read as the requested type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelError {
    /// The value at `path` exists but does not have the expected shape.
    InvalidValue {
        /// Dotted path of the offending value.
        path: String,
        /// Deserializer message.
        message: String,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { path, message } => {
                write!(f, "invalid option value at `{path}`: {message}")
            }
        }
    }
}

impl core::error::Error for ModelError {}
