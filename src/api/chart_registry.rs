use indexmap::IndexMap;

use crate::core::ChartConfig;
use crate::error::{ConfigError, ConfigResult};

use super::builtin_charts;

/// Default configurations of the selectable chart types.
///
/// `IndexMap` keeps registration order so chart pickers list types stably.
#[derive(Debug, Clone, Default)]
pub struct ChartTypeRegistry {
    defaults: IndexMap<String, ChartConfig>,
}

impl ChartTypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the bundled chart types.
    #[must_use]
    pub fn with_builtin_charts() -> Self {
        let mut defaults = IndexMap::new();
        defaults.insert(
            builtin_charts::PIE_CHART_ID.to_owned(),
            builtin_charts::pie_chart_config(),
        );
        defaults.insert(
            builtin_charts::RECHARTS_TABLE_ID.to_owned(),
            builtin_charts::recharts_table_config(),
        );
        Self { defaults }
    }

    /// Registers a chart type with unique identifier.
    pub fn register(&mut self, chart_id: impl Into<String>, config: ChartConfig) -> ConfigResult<()> {
        let chart_id = chart_id.into();
        if chart_id.is_empty() {
            return Err(ConfigError::InvalidData(
                "chart type id must not be empty".to_owned(),
            ));
        }
        if self.defaults.contains_key(&chart_id) {
            return Err(ConfigError::InvalidData(format!(
                "chart type `{chart_id}` is already registered"
            )));
        }
        self.defaults.insert(chart_id, config);
        Ok(())
    }

    /// Unregisters a chart type by id. Returns `true` when removed.
    pub fn unregister(&mut self, chart_id: &str) -> bool {
        self.defaults.shift_remove(chart_id).is_some()
    }

    #[must_use]
    pub fn default_config(&self, chart_id: &str) -> Option<&ChartConfig> {
        self.defaults.get(chart_id)
    }

    #[must_use]
    pub fn contains(&self, chart_id: &str) -> bool {
        self.defaults.contains_key(chart_id)
    }

    pub fn chart_ids(&self) -> impl Iterator<Item = &str> {
        self.defaults.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.defaults.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }
}
