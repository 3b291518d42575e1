// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt::Debug;

use canopy_data::SeriesData;
use canopy_model::Model;

use crate::format::{encode_html, push_value};

/// A configured series: its option model plus the data table built from it.
///
/// Stage handlers work through this trait so one handler can serve any series
/// type that exposes the options it reads.
pub trait SeriesModel: Debug {
    /// The `type` this series is registered under, e.g. `"tree"`.
    fn series_type(&self) -> &'static str;

    /// The series option with its defaults merged in.
    fn model(&self) -> &Model;

    /// The data table backing the series.
    fn data(&self) -> &SeriesData;

    /// Mutable access to the data table, used by stages to write visuals.
    fn data_mut(&mut self) -> &mut SeriesData;

    /// The series `name`, or `""` when unset.
    fn name(&self) -> &str {
        self.model().get_str("name").unwrap_or("")
    }

    /// Model of one row, parented on the series model.
    ///
    /// Series with per-row style fallbacks override this to pick a different
    /// parent.
    fn item_model(&self, data_index: usize) -> Model {
        self.data()
            .item_model(data_index, Some(self.model().clone()))
    }

    /// HTML-escaped tooltip text for one row: `name : value`.
    fn format_tooltip(&self, data_index: usize) -> String {
        let data = self.data();
        let mut text = String::from(data.name(data_index).unwrap_or(""));
        push_value(&mut text, data.value(data_index));
        encode_html(&text)
    }
}
