//! chart-config: chart configuration model and chart-type switch transfer.
//!
//! A chart configuration maps data fields onto typed, size-limited sections and
//! carries style and setting trees. When a user switches chart type, the
//! [`transfer`] module folds the previous configuration into the new chart's
//! defaults so fields and style choices survive wherever they still fit.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;
pub mod transfer;

pub use crate::api::{ChartTypeRegistry, switch_chart_type};
pub use crate::core::{
    ChartConfig, ChartDataSectionType, DataSectionConfig, FieldRowConfig, SectionLimit, StyleNode,
};
pub use crate::error::{ConfigError, ConfigResult};
pub use crate::transfer::{TransferReport, transfer_chart_configs, transfer_chart_configs_with_report};
