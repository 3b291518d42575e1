// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use canopy_model::ModelError;
use canopy_tree::TreeError;

/// Error returned when a series cannot be created from its option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeriesError {
    /// The series option is neither an object nor `null`.
    OptionNotObject,
    /// The series option has no string `type`.
    MissingSeriesType,
    /// No factory is registered for the series type.
    UnknownSeriesType(String),
    /// The series `data` is set but is not an array.
    DataNotArray {
        /// Type of the series being created.
        series_type: &'static str,
    },
    /// A typed option value is malformed.
    Model(ModelError),
    /// The hierarchical data is malformed.
    Tree(TreeError),
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OptionNotObject => f.write_str("series option must be an object"),
            Self::MissingSeriesType => f.write_str("series option has no `type`"),
            Self::UnknownSeriesType(series_type) => {
                write!(f, "no series registered for type `{series_type}`")
            }
            Self::DataNotArray { series_type } => {
                write!(f, "`data` of `{series_type}` series must be an array")
            }
            Self::Model(err) => write!(f, "{err}"),
            Self::Tree(err) => write!(f, "{err}"),
        }
    }
}

impl core::error::Error for SeriesError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Model(err) => Some(err),
            Self::Tree(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModelError> for SeriesError {
    fn from(err: ModelError) -> Self {
        Self::Model(err)
    }
}

impl From<TreeError> for SeriesError {
    fn from(err: TreeError) -> Self {
        Self::Tree(err)
    }
}
