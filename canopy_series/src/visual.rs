// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual keys written by the lines visual stage, and the stage itself.

use alloc::boxed::Box;
use alloc::string::String;

use canopy_data::{SeriesData, Visual};
use canopy_model::Truthy;

use crate::pair::endpoints;
use crate::{DataEach, LinesSeriesModel, SeriesModel, StageHandler};

/// Symbol drawn at the start of a line.
pub const FROM_SYMBOL: Visual<String> = Visual::new(0, "fromSymbol");
/// Symbol drawn at the end of a line.
pub const TO_SYMBOL: Visual<String> = Visual::new(1, "toSymbol");
/// Size of the start symbol.
pub const FROM_SYMBOL_SIZE: Visual<f64> = Visual::new(2, "fromSymbolSize");
/// Size of the end symbol.
pub const TO_SYMBOL_SIZE: Visual<f64> = Visual::new(3, "toSymbolSize");
/// Line opacity.
pub const OPACITY: Visual<f64> = Visual::new(4, "opacity");

/// Stage resolving line end symbols, their sizes and the line opacity.
///
/// Series-level values are always written. Rows are only visited when the
/// series has per-item options, and a row value replaces the series value
/// only when it is truthy, so `0`, `""` and `NaN` never override.
#[derive(Copy, Clone, Debug, Default)]
pub struct LinesVisual;

impl StageHandler for LinesVisual {
    fn series_type(&self) -> &'static str {
        LinesSeriesModel::TYPE
    }

    fn reset(&self, series: &mut dyn SeriesModel) -> Option<DataEach> {
        let model = series.model().clone();
        let [from_symbol, to_symbol] = endpoints::<String>(model.get("symbol"), "symbol");
        let [from_size, to_size] = endpoints::<f64>(model.get("symbolSize"), "symbolSize");
        let opacity = model.get_f64("lineStyle.opacity");

        let data = series.data_mut();
        data.clear_item_visuals();
        put(data, FROM_SYMBOL, from_symbol);
        put(data, TO_SYMBOL, to_symbol);
        put(data, FROM_SYMBOL_SIZE, from_size);
        put(data, TO_SYMBOL_SIZE, to_size);
        put(data, OPACITY, opacity);

        if !data.has_item_option() {
            return None;
        }
        Some(Box::new(resolve_row))
    }
}

fn put<T: Clone + 'static>(data: &mut SeriesData, key: Visual<T>, value: Option<T>) {
    match value {
        Some(value) => data.set_visual(key, value),
        None => {
            data.clear_visual(key);
        }
    }
}

fn resolve_row(series: &mut dyn SeriesModel, idx: usize) {
    let item = series.item_model(idx);
    let [from_symbol, to_symbol] =
        endpoints::<String>(item.get_shallow("symbol", true), "symbol");
    let [from_size, to_size] =
        endpoints::<f64>(item.get_shallow("symbolSize", true), "symbolSize");
    let opacity = item.get_f64("lineStyle.opacity");

    let data = series.data_mut();
    let mut overridden = false;
    let mut put_row = |key: Visual<String>, value: Option<String>| {
        if let Some(value) = value.filter(Truthy::is_truthy) {
            data.set_item_visual(idx, key, value);
            overridden = true;
        }
    };
    put_row(FROM_SYMBOL, from_symbol);
    put_row(TO_SYMBOL, to_symbol);
    let mut put_row = |key: Visual<f64>, value: Option<f64>| {
        if let Some(value) = value.filter(Truthy::is_truthy) {
            data.set_item_visual(idx, key, value);
            overridden = true;
        }
    };
    put_row(FROM_SYMBOL_SIZE, from_size);
    put_row(TO_SYMBOL_SIZE, to_size);
    put_row(OPACITY, opacity);

    if overridden {
        log::trace!("row {idx} overrides line visuals");
    }
}
