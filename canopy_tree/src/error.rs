// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when an option value cannot be turned into a tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeError {
    /// The root option is not an object.
    RootNotObject,
    /// A node's `children` is set but is not an array.
    ChildrenNotArray {
        /// Pre-order position of the offending node.
        data_index: usize,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootNotObject => f.write_str("tree root option must be an object"),
            Self::ChildrenNotArray { data_index } => {
                write!(f, "`children` of tree node {data_index} must be an array")
            }
        }
    }
}

impl core::error::Error for TreeError {}
