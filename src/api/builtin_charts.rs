use serde_json::{Value, json};

use crate::core::{ChartConfig, ChartDataSectionType, DataSectionConfig, SectionLimit, StyleNode};

pub const PIE_CHART_ID: &str = "pie-chart";
pub const RECHARTS_TABLE_ID: &str = "recharts-table";

fn font_default(color: &str) -> Value {
    json!({
        "fontFamily": "PingFang SC",
        "fontSize": "12",
        "fontWeight": "normal",
        "fontStyle": "normal",
        "color": color,
    })
}

fn select_items(values: &[&str]) -> Value {
    let items: Vec<Value> = values
        .iter()
        .map(|value| json!({ "label": value, "value": value }))
        .collect();
    json!({ "items": items })
}

fn paging_settings() -> Vec<StyleNode> {
    let mut page_size =
        StyleNode::leaf("pageSize", "inputNumber", json!(1000)).with_label("paging.pageSize");
    page_size.extra.insert(
        "options".to_owned(),
        json!({ "needRefresh": true, "step": 1, "min": 0 }),
    );
    vec![StyleNode::group("paging", vec![page_size])]
}

fn prefixed(prefix: &str, node: StyleNode) -> StyleNode {
    let label = format!("{prefix}.{}", node.key);
    node.with_label(label)
}

pub fn pie_chart_config() -> ChartConfig {
    let mut dimension = DataSectionConfig::new("dimension", ChartDataSectionType::Group)
        .with_required(true)
        .with_limit(SectionLimit::range(0, 1));
    dimension.extra.insert(
        "actions".to_owned(),
        json!({
            "NUMERIC": ["alias", "colorize", "sortable"],
            "STRING": ["alias", "colorize", "sortable"],
        }),
    );
    let mut filter = DataSectionConfig::new("filter", ChartDataSectionType::Filter);
    filter
        .extra
        .insert("allowSameField".to_owned(), json!(true));

    let datas = vec![
        dimension,
        DataSectionConfig::new("metrics", ChartDataSectionType::Aggregate)
            .with_required(true)
            .with_limit(SectionLimit::range(1, 999)),
        filter,
        DataSectionConfig::new("info", ChartDataSectionType::Info),
    ];

    let mut label_position = StyleNode::leaf("position", "select", json!("outside"));
    label_position.extra.insert(
        "options".to_owned(),
        select_items(&["outside", "inside", "center"]),
    );
    let label = StyleNode::group(
        "label",
        vec![
            prefixed("label", StyleNode::leaf("showLabel", "checkbox", json!(true))),
            prefixed("label", label_position),
            StyleNode::leaf("font", "font", font_default("#495057")),
            prefixed("label", StyleNode::leaf("showName", "checkbox", json!(true))),
            prefixed("label", StyleNode::leaf("showValue", "checkbox", json!(false))),
            prefixed("label", StyleNode::leaf("showPercent", "checkbox", json!(true))),
        ],
    );

    let mut legend_type = StyleNode::leaf("type", "select", json!("scroll"));
    legend_type
        .extra
        .insert("options".to_owned(), select_items(&["plain", "scroll"]));
    let mut legend_position = StyleNode::leaf("position", "select", json!("right"));
    legend_position.extra.insert(
        "options".to_owned(),
        select_items(&["right", "top", "bottom", "left"]),
    );
    let legend = StyleNode::group(
        "legend",
        vec![
            prefixed("legend", StyleNode::leaf("showLegend", "checkbox", json!(true))),
            prefixed("legend", legend_type),
            prefixed("legend", StyleNode::leaf("selectAll", "checkbox", json!(true))),
            prefixed("legend", legend_position),
            StyleNode::leaf("font", "font", font_default("#495057")),
        ],
    );

    let margin = StyleNode::group(
        "margin",
        vec![
            prefixed("margin", StyleNode::leaf("containLabel", "checkbox", json!(true))),
            StyleNode::leaf("marginLeft", "marginWidth", json!("5%")).with_label("margin.left"),
            StyleNode::leaf("marginRight", "marginWidth", json!("5%")).with_label("margin.right"),
            StyleNode::leaf("marginTop", "marginWidth", json!("5%")).with_label("margin.top"),
            StyleNode::leaf("marginBottom", "marginWidth", json!("5%"))
                .with_label("margin.bottom"),
        ],
    );

    ChartConfig::new(datas)
        .with_styles(vec![label, legend, margin])
        .with_settings(paging_settings())
}

/// Table-like chart whose sections carry no type tag, so no field transfers
/// into it. Style and setting values still carry over.
pub fn recharts_table_config() -> ChartConfig {
    let mut dimension = DataSectionConfig {
        key: Some("dimension".to_owned()),
        label: Some("dimension".to_owned()),
        ..DataSectionConfig::default()
    };
    dimension
        .extra
        .insert("actions".to_owned(), json!(["sortable", "alias"]));
    let mut metrics = DataSectionConfig {
        key: Some("metrics".to_owned()),
        label: Some("metrics".to_owned()),
        ..DataSectionConfig::default()
    };
    metrics
        .extra
        .insert("actions".to_owned(), json!(["format", "aggregate"]));

    let label = StyleNode::group(
        "label",
        vec![
            StyleNode::leaf("showLabel", "checkbox", json!(false)),
            StyleNode::leaf("showLabelBySwitch", "switch", json!(true)),
            StyleNode {
                key: "dataColumns".to_owned(),
                label: Some("showDataColumns".to_owned()),
                com_type: Some("select".to_owned()),
                ..StyleNode::default()
            },
            StyleNode::leaf("font", "font", font_default("black")),
        ],
    )
    .with_label("label");

    ChartConfig::new(vec![dimension, metrics])
        .with_styles(vec![label])
        .with_settings(paging_settings())
}
