use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown chart type: `{0}`")]
    UnknownChartType(String),
}
