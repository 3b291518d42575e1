// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use canopy_model::Value;
use hashbrown::HashMap;

use crate::stage::run_stage;
use crate::{
    LinesSeriesModel, LinesVisual, SeriesError, SeriesModel, StageHandler, StageOutcome,
    TreeSeriesModel,
};

/// Builds a series from its option.
pub type SeriesFactory = fn(Value) -> Result<Box<dyn SeriesModel>, SeriesError>;

/// Series factories and stage handlers, keyed by series type.
///
/// Nothing is registered implicitly; call [`install_builtin`] for the series
/// types this crate provides.
#[derive(Default)]
pub struct SeriesRegistry {
    factories: HashMap<&'static str, SeriesFactory>,
    stages: Vec<Box<dyn StageHandler>>,
}

impl fmt::Debug for SeriesRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut series: Vec<&str> = self.factories.keys().copied().collect();
        series.sort_unstable();
        f.debug_struct("SeriesRegistry")
            .field("series", &series)
            .field("stages", &self.stages)
            .finish()
    }
}

impl SeriesRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the factory for a series type.
    ///
    /// # Panics
    ///
    /// Panics if the type is already registered.
    pub fn register_series(&mut self, series_type: &'static str, factory: SeriesFactory) {
        let previous = self.factories.insert(series_type, factory);
        assert!(
            previous.is_none(),
            "series type `{series_type}` registered twice"
        );
    }

    /// Registers a stage handler; stages run in registration order.
    pub fn register_stage<H: StageHandler + 'static>(&mut self, handler: H) {
        self.stages.push(Box::new(handler));
    }

    /// Returns `true` if a factory is registered for the series type.
    #[must_use]
    pub fn contains(&self, series_type: &str) -> bool {
        self.factories.contains_key(series_type)
    }

    /// Creates a series from an option carrying its `type`.
    ///
    /// # Errors
    ///
    /// Fails when `type` is missing or unknown, or when the factory rejects
    /// the option.
    pub fn create(&self, option: Value) -> Result<Box<dyn SeriesModel>, SeriesError> {
        let series_type = option
            .get("type")
            .and_then(Value::as_str)
            .ok_or(SeriesError::MissingSeriesType)?;
        let factory = self
            .factories
            .get(series_type)
            .ok_or_else(|| SeriesError::UnknownSeriesType(String::from(series_type)))?;
        log::debug!("creating `{series_type}` series");
        factory(option)
    }

    /// Iterates the stages registered for a series type, in order.
    pub fn stages_for<'a>(
        &'a self,
        series_type: &'a str,
    ) -> impl Iterator<Item = &'a dyn StageHandler> + 'a {
        self.stages
            .iter()
            .map(|stage| -> &'a dyn StageHandler { &**stage })
            .filter(move |stage| stage.series_type() == series_type)
    }

    /// Runs every stage registered for the series' type over it.
    pub fn run_stages(&self, series: &mut dyn SeriesModel) -> Vec<StageOutcome> {
        let series_type = series.series_type();
        self.stages_for(series_type)
            .map(|stage| run_stage(stage, series))
            .collect()
    }
}

fn create_tree(option: Value) -> Result<Box<dyn SeriesModel>, SeriesError> {
    Ok(Box::new(TreeSeriesModel::new(option)?))
}

fn create_lines(option: Value) -> Result<Box<dyn SeriesModel>, SeriesError> {
    Ok(Box::new(LinesSeriesModel::new(option)?))
}

/// Registers the `tree` and `lines` series and the lines visual stage.
///
/// ```rust
/// use canopy_series::{SeriesRegistry, install_builtin};
///
/// let mut registry = SeriesRegistry::new();
/// install_builtin(&mut registry);
/// assert!(registry.contains("tree"));
/// assert!(registry.contains("lines"));
/// assert_eq!(registry.stages_for("lines").count(), 1);
/// ```
pub fn install_builtin(registry: &mut SeriesRegistry) {
    registry.register_series(TreeSeriesModel::TYPE, create_tree);
    registry.register_series(LinesSeriesModel::TYPE, create_lines);
    registry.register_stage(LinesVisual);
}
