//! Entry points for hosts embedding the transfer engine: JSON loading, the
//! chart-type registry and chart-type switching.

pub mod builtin_charts;
pub mod chart_registry;
pub mod chart_switch;
pub mod json_contract;

pub use builtin_charts::{
    PIE_CHART_ID, RECHARTS_TABLE_ID, pie_chart_config, recharts_table_config,
};
pub use chart_registry::ChartTypeRegistry;
pub use chart_switch::switch_chart_type;
pub use json_contract::{CHART_CONFIG_JSON_SCHEMA_V1, ChartConfigJsonContractV1};
