pub mod chart_config;
pub mod limit;
pub mod section_type;

pub use chart_config::{ChartConfig, DataSectionConfig, FieldRowConfig, StyleNode};
pub use limit::SectionLimit;
pub use section_type::ChartDataSectionType;
