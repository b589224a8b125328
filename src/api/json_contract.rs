use serde::{Deserialize, Serialize};

use crate::core::ChartConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::transfer::TransferReport;

pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ChartConfig,
}

impl ChartConfig {
    /// Parses either a bare configuration or a versioned envelope.
    pub fn from_json_str(input: &str) -> ConfigResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ConfigError::InvalidData(format!("failed to parse chart config json: {e}"))
        })?;
        if value.get("schemaVersion").is_none() {
            return serde_json::from_value(value).map_err(|e| {
                ConfigError::InvalidData(format!("failed to parse chart config json: {e}"))
            });
        }

        let payload: ChartConfigJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            ConfigError::InvalidData(format!("failed to parse chart config json payload: {e}"))
        })?;
        if payload.schema_version != CHART_CONFIG_JSON_SCHEMA_V1 {
            return Err(ConfigError::InvalidData(format!(
                "unsupported chart config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }

    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ConfigError::InvalidData(format!("failed to serialize chart config json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ConfigResult<String> {
        let payload = ChartConfigJsonContractV1 {
            schema_version: CHART_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ConfigError::InvalidData(format!("failed to serialize chart config contract v1: {e}"))
        })
    }
}

impl TransferReport {
    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ConfigError::InvalidData(format!("failed to serialize transfer report json: {e}"))
        })
    }
}
