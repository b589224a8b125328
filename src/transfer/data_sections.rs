use std::cmp::Ordering;
use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::core::{ChartConfig, ChartDataSectionType, DataSectionConfig, FieldRowConfig};

/// Outcome of redistributing one section type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionTransferStats {
    pub section_type: ChartDataSectionType,
    pub placed: usize,
    pub dropped: usize,
}

impl SectionTransferStats {
    #[must_use]
    pub fn new(section_type: ChartDataSectionType) -> Self {
        Self {
            section_type,
            placed: 0,
            dropped: 0,
        }
    }
}

/// Redistributes field rows for every section type in
/// [`ChartDataSectionType::TRANSFER_ORDER`].
pub fn transfer_chart_data_config(
    target: &mut ChartConfig,
    source: &mut ChartConfig,
) -> Vec<SectionTransferStats> {
    ChartDataSectionType::TRANSFER_ORDER
        .iter()
        .map(|section_type| transfer_data_config_impl(section_type, target, source))
        .collect()
}

/// Moves all `section_type` rows from `source` into matching `target` sections.
///
/// Tags outside [`ChartDataSectionType::TRANSFER_ORDER`] are left in place on
/// both sides.
///
/// Rows are drained from `source` in section order and placed one at a time.
/// Each row goes to the eligible section that has not reached its minimum yet,
/// then to the one holding the fewest rows, then to the earliest one. Rows that
/// find no section with spare capacity are dropped.
pub fn transfer_data_config_impl(
    section_type: &ChartDataSectionType,
    target: &mut ChartConfig,
    source: &mut ChartConfig,
) -> SectionTransferStats {
    let mut stats = SectionTransferStats::new(section_type.clone());
    if !section_type.is_transferable() {
        return stats;
    }
    let mut queue: VecDeque<FieldRowConfig> = source
        .datas
        .iter_mut()
        .filter(|section| section.is_of_type(section_type))
        .flat_map(|section| std::mem::take(&mut section.rows))
        .collect();
    if queue.is_empty() {
        return stats;
    }

    let candidates: SmallVec<[usize; 4]> = target
        .datas
        .iter()
        .enumerate()
        .filter(|(_, section)| section.is_of_type(section_type))
        .map(|(index, _)| index)
        .collect();
    if candidates.is_empty() {
        stats.dropped = queue.len();
        warn!(
            section_type = %section_type,
            dropped = stats.dropped,
            "target chart has no matching section, dropping rows"
        );
        return stats;
    }

    while let Some(row) = queue.pop_front() {
        let Some(destination) = pick_destination(&target.datas, &candidates) else {
            stats.dropped = queue.len() + 1;
            warn!(
                section_type = %section_type,
                dropped = stats.dropped,
                "matching sections are full, dropping rows"
            );
            break;
        };
        let section = &mut target.datas[destination];
        section.rows.push(row);
        stats.placed += 1;
        trace!(
            section_type = %section_type,
            section = section.key.as_deref().unwrap_or_default(),
            count = section.rows.len(),
            "placed row"
        );
    }
    stats
}

fn pick_destination(sections: &[DataSectionConfig], candidates: &[usize]) -> Option<usize> {
    // `min_by` keeps the first of equal elements, so ties go to section order.
    candidates
        .iter()
        .copied()
        .filter(|&index| sections[index].has_room_for_another_row())
        .min_by(|&a, &b| compare_destinations(&sections[a], &sections[b]))
}

fn compare_destinations(a: &DataSectionConfig, b: &DataSectionConfig) -> Ordering {
    fill_rank(a)
        .cmp(&fill_rank(b))
        .then_with(|| a.row_count().cmp(&b.row_count()))
}

fn fill_rank(section: &DataSectionConfig) -> u8 {
    if section.has_reached_min() { 1 } else { 0 }
}
