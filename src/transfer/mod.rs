//! Chart-type switch transfer.
//!
//! When a user swaps chart type, the previous configuration is folded into the
//! new chart's default configuration. Field rows are redistributed across the
//! new data sections and style/setting values are carried over by key. The
//! transfer never fails: rows that do not fit are dropped.

pub mod data_sections;
pub mod style_tree;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ChartConfig, ChartDataSectionType};

pub use data_sections::{
    SectionTransferStats, transfer_chart_data_config, transfer_data_config_impl,
};
pub use style_tree::{
    merge_style_configs, transfer_chart_setting_config, transfer_chart_style_config,
};

/// Per-type row accounting of one transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferReport {
    pub sections: Vec<SectionTransferStats>,
}

impl TransferReport {
    #[must_use]
    pub fn placed(&self) -> usize {
        self.sections.iter().map(|stats| stats.placed).sum()
    }

    #[must_use]
    pub fn dropped(&self) -> usize {
        self.sections.iter().map(|stats| stats.dropped).sum()
    }

    #[must_use]
    pub fn stats_for(&self, section_type: &ChartDataSectionType) -> Option<&SectionTransferStats> {
        self.sections
            .iter()
            .find(|stats| &stats.section_type == section_type)
    }
}

/// Folds `source` into `target`.
///
/// When either side is missing the other is returned unchanged.
#[must_use]
pub fn transfer_chart_configs(
    target: Option<ChartConfig>,
    source: Option<ChartConfig>,
) -> Option<ChartConfig> {
    match (target, source) {
        (Some(mut target), Some(mut source)) => {
            transfer_chart_configs_with_report(&mut target, &mut source);
            Some(target)
        }
        (target, source) => target.or(source),
    }
}

/// In-place variant of [`transfer_chart_configs`].
///
/// `source` rows of every transferred type are drained; its styles and
/// settings are only read.
pub fn transfer_chart_configs_with_report(
    target: &mut ChartConfig,
    source: &mut ChartConfig,
) -> TransferReport {
    let report = TransferReport {
        sections: transfer_chart_data_config(target, source),
    };
    transfer_chart_style_config(target, source);
    transfer_chart_setting_config(target, source);

    debug!(
        placed = report.placed(),
        dropped = report.dropped(),
        "chart config transfer"
    );
    report
}
