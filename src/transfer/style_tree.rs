use tracing::trace;

use crate::core::{ChartConfig, StyleNode};

/// Copies user-chosen values from `source` onto the matching nodes of `target`.
///
/// Nodes are matched by `key` among siblings. The shape and order of `target`
/// are kept: options only the new chart has stay on their defaults, options both
/// charts share keep the previous value. A target node without children adopts
/// the children of its source match.
pub fn merge_style_configs(target: &mut [StyleNode], source: &[StyleNode]) {
    if target.is_empty() || source.is_empty() {
        return;
    }
    for node in target.iter_mut() {
        if node.value.is_none() {
            node.value = node.default_value.clone();
        }
        let matched = source.iter().find(|candidate| candidate.key == node.key);
        if let Some(value) = matched.and_then(|candidate| candidate.value.as_ref()) {
            trace!(key = %node.key, "carry style value");
            node.value = Some(value.clone());
        }
        if !node.rows.is_empty() {
            let source_rows = matched.map(|candidate| candidate.rows.as_slice());
            merge_style_configs(&mut node.rows, source_rows.unwrap_or_default());
        } else if let Some(candidate) = matched.filter(|candidate| !candidate.rows.is_empty()) {
            node.rows = candidate.rows.clone();
        }
    }
}

pub fn transfer_chart_style_config(target: &mut ChartConfig, source: &ChartConfig) {
    merge_style_configs(&mut target.styles, &source.styles);
}

pub fn transfer_chart_setting_config(target: &mut ChartConfig, source: &ChartConfig) {
    merge_style_configs(&mut target.settings, &source.settings);
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::merge_style_configs;
    use crate::core::StyleNode;

    #[test]
    fn empty_source_leaves_target_untouched() {
        let mut target = vec![StyleNode::leaf("showLabel", "checkbox", json!(true))];
        let before = target.clone();
        merge_style_configs(&mut target, &[]);
        assert_eq!(target, before);
    }

    #[test]
    fn unmatched_target_node_is_seeded_from_default() {
        let mut target = vec![
            StyleNode::leaf("showLabel", "checkbox", json!(true)),
            StyleNode::leaf("rotate", "inputNumber", json!(0)),
        ];
        let source = vec![StyleNode::leaf("showLabel", "checkbox", json!(true)).with_value(json!(false))];
        merge_style_configs(&mut target, &source);
        assert_eq!(target[0].value, Some(json!(false)));
        assert_eq!(target[1].value, Some(json!(0)));
    }

    #[test]
    fn childless_target_adopts_source_children() {
        let mut target = vec![StyleNode {
            key: "reference".to_owned(),
            ..StyleNode::default()
        }];
        let source = vec![StyleNode::group(
            "reference",
            vec![StyleNode::leaf("open", "button", json!(null)).with_value(json!("x"))],
        )];
        merge_style_configs(&mut target, &source);
        assert_eq!(target[0].rows.len(), 1);
        assert_eq!(target[0].rows[0].value, Some(json!("x")));
    }
}
