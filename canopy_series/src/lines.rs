// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use canopy_data::SeriesData;
use canopy_model::{Model, Value, merge_defaults};
use serde_json::json;

use crate::{SeriesError, SeriesModel};

/// A series of lines between coordinate pairs, one row per line.
#[derive(Clone, Debug)]
pub struct LinesSeriesModel {
    model: Model,
    data: SeriesData,
}

impl LinesSeriesModel {
    /// Registered series type.
    pub const TYPE: &'static str = "lines";

    /// Builds the series from its option, merging in the defaults.
    ///
    /// `data` may be absent; when present it must be an array.
    pub fn new(mut option: Value) -> Result<Self, SeriesError> {
        if !option.is_object() && !option.is_null() {
            return Err(SeriesError::OptionNotObject);
        }
        merge_defaults(&mut option, &default_option());
        let items = match option.as_object_mut().and_then(|map| map.remove("data")) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(SeriesError::DataNotArray {
                    series_type: Self::TYPE,
                });
            }
        };
        Ok(Self {
            model: Model::new(option),
            data: SeriesData::from_items(items),
        })
    }
}

impl SeriesModel for LinesSeriesModel {
    fn series_type(&self) -> &'static str {
        Self::TYPE
    }

    fn model(&self) -> &Model {
        &self.model
    }

    fn data(&self) -> &SeriesData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut SeriesData {
        &mut self.data
    }
}

fn default_option() -> Value {
    json!({
        "coordinateSystem": "geo",
        "z": 2,
        "legendHoverLink": true,
        "xAxisIndex": 0,
        "yAxisIndex": 0,
        "symbol": ["none", "none"],
        "symbolSize": [10, 10],
        "geoIndex": 0,
        "effect": {
            "show": false,
            "period": 4,
            "constantSpeed": 0,
            "symbol": "circle",
            "symbolSize": 3,
            "loop": true,
            "trailLength": 0.2,
        },
        "large": false,
        "largeThreshold": 2000,
        "polyline": false,
        "clip": true,
        "label": {
            "show": false,
            "position": "end",
        },
        "lineStyle": {
            "opacity": 0.5,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_merged() {
        let series = LinesSeriesModel::new(json!({ "lineStyle": { "width": 2 } })).unwrap();
        let model = series.model();
        assert_eq!(model.get_f64("lineStyle.opacity"), Some(0.5));
        assert_eq!(model.get_f64("lineStyle.width"), Some(2.0));
        assert_eq!(model.get("symbol"), Some(&json!(["none", "none"])));
        assert!(series.data().is_empty());
    }

    #[test]
    fn rows_come_from_data() {
        let series = LinesSeriesModel::new(json!({
            "name": "routes",
            "data": [{ "coords": [[0, 0], [1, 1]] }, { "coords": [[2, 2], [3, 3]] }],
        }))
        .unwrap();
        assert_eq!(series.data().count(), 2);
        assert!(series.data().has_item_option());
        assert_eq!(series.name(), "routes");
        assert_eq!(series.model().get("data"), None);
    }

    #[test]
    fn malformed_options() {
        assert_eq!(
            LinesSeriesModel::new(json!([])).unwrap_err(),
            SeriesError::OptionNotObject
        );
        assert_eq!(
            LinesSeriesModel::new(json!({ "data": 3 })).unwrap_err(),
            SeriesError::DataNotArray { series_type: "lines" }
        );
    }
}
