// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt::Debug;

use crate::SeriesModel;

/// Per-row callback returned by [`StageHandler::reset`].
pub type DataEach = Box<dyn FnMut(&mut dyn SeriesModel, usize)>;

/// A processing stage run over a series once per render pass.
pub trait StageHandler: Debug {
    /// The series type this stage applies to.
    fn series_type(&self) -> &'static str;

    /// Prepares the stage for a pass.
    ///
    /// Series-level work happens here. When rows need individual treatment the
    /// handler returns a callback which [`run_stage`] invokes once per row.
    fn reset(&self, series: &mut dyn SeriesModel) -> Option<DataEach>;
}

/// What a single [`run_stage`] call did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StageOutcome {
    /// Whether the handler asked for a per-row pass.
    pub per_row: bool,
    /// Number of rows the per-row callback was invoked for.
    pub rows_visited: usize,
}

/// Runs `handler` over `series`: reset, then every row if a callback was
/// returned.
pub fn run_stage(handler: &dyn StageHandler, series: &mut dyn SeriesModel) -> StageOutcome {
    let Some(mut each) = handler.reset(series) else {
        log::debug!(
            "stage for `{}` finished without a per-row pass",
            handler.series_type()
        );
        return StageOutcome::default();
    };
    let count = series.data().count();
    for idx in 0..count {
        each(series, idx);
    }
    log::debug!(
        "stage for `{}` visited {count} rows",
        handler.series_type()
    );
    StageOutcome {
        per_row: true,
        rows_visited: count,
    }
}
