use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic role of a data section in a chart's field-mapping panel.
///
/// Tags outside the known set are preserved verbatim in [`Other`](Self::Other)
/// so configurations round-trip, but they never take part in a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartDataSectionType {
    Group,
    Aggregate,
    Color,
    Info,
    Mixed,
    Size,
    Filter,
    Other(String),
}

impl ChartDataSectionType {
    /// Order in which section types are redistributed on a chart-type switch.
    pub const TRANSFER_ORDER: [ChartDataSectionType; 7] = [
        ChartDataSectionType::Group,
        ChartDataSectionType::Aggregate,
        ChartDataSectionType::Color,
        ChartDataSectionType::Info,
        ChartDataSectionType::Mixed,
        ChartDataSectionType::Size,
        ChartDataSectionType::Filter,
    ];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Group => "group",
            Self::Aggregate => "aggregate",
            Self::Color => "color",
            Self::Info => "info",
            Self::Mixed => "mixed",
            Self::Size => "size",
            Self::Filter => "filter",
            Self::Other(tag) => tag,
        }
    }

    #[must_use]
    pub fn is_transferable(&self) -> bool {
        Self::TRANSFER_ORDER.contains(self)
    }
}

impl From<String> for ChartDataSectionType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "group" => Self::Group,
            "aggregate" => Self::Aggregate,
            "color" => Self::Color,
            "info" => Self::Info,
            "mixed" => Self::Mixed,
            "size" => Self::Size,
            "filter" => Self::Filter,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for ChartDataSectionType {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_owned())
    }
}

impl From<ChartDataSectionType> for String {
    fn from(section_type: ChartDataSectionType) -> Self {
        match section_type {
            ChartDataSectionType::Other(tag) => tag,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ChartDataSectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
