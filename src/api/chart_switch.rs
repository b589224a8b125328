use tracing::debug;

use crate::core::ChartConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::transfer::transfer_chart_configs_with_report;

use super::ChartTypeRegistry;

/// Switches to `chart_id`, carrying `current` into a fresh copy of its default.
///
/// Fails only when `chart_id` is not registered; the transfer itself is total.
pub fn switch_chart_type(
    registry: &ChartTypeRegistry,
    chart_id: &str,
    current: Option<ChartConfig>,
) -> ConfigResult<ChartConfig> {
    let mut target = registry
        .default_config(chart_id)
        .cloned()
        .ok_or_else(|| ConfigError::UnknownChartType(chart_id.to_owned()))?;
    let Some(mut source) = current else {
        return Ok(target);
    };

    let report = transfer_chart_configs_with_report(&mut target, &mut source);
    debug!(
        chart_id,
        placed = report.placed(),
        dropped = report.dropped(),
        "switch chart type"
    );
    Ok(target)
}
