use chart_config::core::{
    ChartConfig, ChartDataSectionType, DataSectionConfig, FieldRowConfig, SectionLimit,
};
use chart_config::transfer::transfer_chart_configs_with_report;
use proptest::prelude::*;
use std::collections::HashSet;

fn section_type_for(index: usize) -> ChartDataSectionType {
    ChartDataSectionType::TRANSFER_ORDER
        .get(index)
        .cloned()
        .unwrap_or_else(|| ChartDataSectionType::from("sort"))
}

fn limit_for(min: usize, max: Option<usize>) -> SectionLimit {
    match max {
        Some(max) if max == min => SectionLimit::Exact(max),
        Some(max) => SectionLimit::range(min, max.max(min)),
        None if min == 0 => SectionLimit::Unbounded,
        None => SectionLimit::at_least(min),
    }
}

fn build_target(specs: &[(usize, usize, Option<usize>, usize)]) -> ChartConfig {
    let mut next = 0usize;
    let datas = specs
        .iter()
        .enumerate()
        .map(|(i, &(type_index, min, max, initial))| {
            let limit = limit_for(min, max);
            let initial = limit.max().map_or(initial, |max| initial.min(max));
            let rows = (0..initial)
                .map(|_| {
                    next += 1;
                    FieldRowConfig::new(format!("t{next}"), "col")
                })
                .collect();
            DataSectionConfig::new(format!("target-{i}"), section_type_for(type_index))
                .with_limit(limit)
                .with_rows(rows)
        })
        .collect();
    ChartConfig::new(datas)
}

fn build_source(specs: &[(usize, usize)]) -> ChartConfig {
    let mut next = 0usize;
    let datas = specs
        .iter()
        .enumerate()
        .map(|(i, &(type_index, count))| {
            let rows = (0..count)
                .map(|_| {
                    next += 1;
                    FieldRowConfig::new(format!("s{next:04}"), "col")
                })
                .collect();
            DataSectionConfig::new(format!("source-{i}"), section_type_for(type_index))
                .with_rows(rows)
        })
        .collect();
    ChartConfig::new(datas)
}

fn target_strategy() -> impl Strategy<Value = Vec<(usize, usize, Option<usize>, usize)>> {
    prop::collection::vec(
        (0usize..8, 0usize..3, prop::option::of(0usize..5), 0usize..4),
        0..10,
    )
}

fn source_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..8, 0usize..7), 0..10)
}

proptest! {
    #[test]
    fn merged_sections_never_exceed_their_upper_bound(
        target_specs in target_strategy(),
        source_specs in source_strategy(),
    ) {
        let mut target = build_target(&target_specs);
        let mut source = build_source(&source_specs);

        transfer_chart_configs_with_report(&mut target, &mut source);

        for section in &target.datas {
            if let Some(max) = section.limit.max() {
                prop_assert!(section.rows.len() <= max);
            }
        }
    }

    #[test]
    fn every_source_row_is_placed_once_or_dropped(
        target_specs in target_strategy(),
        source_specs in source_strategy(),
    ) {
        let mut target = build_target(&target_specs);
        let mut source = build_source(&source_specs);
        let before_target = target.clone();
        let before_source = source.clone();

        let report = transfer_chart_configs_with_report(&mut target, &mut source);

        for section_type in ChartDataSectionType::TRANSFER_ORDER {
            let stats = report.stats_for(&section_type).expect("stats per type");
            prop_assert_eq!(
                stats.placed + stats.dropped,
                before_source.row_count_of_type(&section_type)
            );
            prop_assert_eq!(
                target.row_count_of_type(&section_type),
                before_target.row_count_of_type(&section_type) + stats.placed
            );
            prop_assert_eq!(source.row_count_of_type(&section_type), 0);
        }

        let mut seen = HashSet::new();
        for row in target.datas.iter().flat_map(|section| section.rows.iter()) {
            prop_assert!(seen.insert(row.uid().map(str::to_owned)));
        }
    }

    #[test]
    fn arrivals_keep_source_queue_order_within_each_section(
        target_specs in target_strategy(),
        source_specs in source_strategy(),
    ) {
        let mut target = build_target(&target_specs);
        let mut source = build_source(&source_specs);

        transfer_chart_configs_with_report(&mut target, &mut source);

        for section in &target.datas {
            let arrivals: Vec<&str> = section
                .rows
                .iter()
                .filter_map(|row| row.uid())
                .filter(|uid| uid.starts_with('s'))
                .collect();
            let mut sorted = arrivals.clone();
            sorted.sort_unstable();
            prop_assert_eq!(arrivals, sorted);

            // Initial rows stay in front of arrivals.
            let first_arrival = section
                .rows
                .iter()
                .position(|row| row.uid().is_some_and(|uid| uid.starts_with('s')));
            if let Some(first_arrival) = first_arrival {
                prop_assert!(section.rows[first_arrival..]
                    .iter()
                    .all(|row| row.uid().is_some_and(|uid| uid.starts_with('s'))));
            }
        }
    }

    #[test]
    fn sections_below_minimum_are_served_before_others_grow(
        min_a in 0usize..3,
        min_b in 0usize..3,
        incoming in 0usize..8,
    ) {
        let mut target = ChartConfig::new(vec![
            DataSectionConfig::new("a", ChartDataSectionType::Mixed)
                .with_limit(SectionLimit::range(min_a, 6)),
            DataSectionConfig::new("b", ChartDataSectionType::Mixed)
                .with_limit(SectionLimit::range(min_b, 6)),
        ]);
        let mut source = build_source(&[(4, incoming)]);

        transfer_chart_configs_with_report(&mut target, &mut source);

        let a = target.datas[0].rows.len();
        let b = target.datas[1].rows.len();
        prop_assert_eq!(a + b, incoming);
        if incoming >= min_a + min_b {
            prop_assert!(a >= min_a && b >= min_b);
        }
        if incoming >= min_a.max(min_b) * 2 {
            prop_assert!(a.abs_diff(b) <= 1);
        }
    }
}
