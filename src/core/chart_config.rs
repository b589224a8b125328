use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::limit::SectionLimit;
use crate::core::section_type::ChartDataSectionType;

/// Missing and `null` collections both load as empty.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Present keys load as `Some`, including an explicit `null`.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// One field assigned to a data section.
///
/// The transfer engine never interprets a row; it only moves it. Every key is
/// kept as raw JSON in its original order, and the accessors only offer a
/// string view of the well-known ones.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRowConfig {
    pub fields: IndexMap<String, Value>,
}

impl FieldRowConfig {
    #[must_use]
    pub fn new(uid: impl Into<String>, col_name: impl Into<String>) -> Self {
        Self::default()
            .with_field("uid", Value::String(uid.into()))
            .with_field("colName", Value::String(col_name.into()))
    }

    #[must_use]
    pub fn with_aggregate(self, aggregate: impl Into<String>) -> Self {
        self.with_field("aggregate", Value::String(aggregate.into()))
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.get("uid").and_then(Value::as_str)
    }

    #[must_use]
    pub fn col_name(&self) -> Option<&str> {
        self.get("colName").and_then(Value::as_str)
    }

    #[must_use]
    pub fn aggregate(&self) -> Option<&str> {
        self.get("aggregate").and_then(Value::as_str)
    }
}

/// A named slot in the field-mapping panel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSectionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub section_type: Option<ChartDataSectionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "SectionLimit::is_unbounded")]
    pub limit: SectionLimit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rows: Vec<FieldRowConfig>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl DataSectionConfig {
    #[must_use]
    pub fn new(key: impl Into<String>, section_type: ChartDataSectionType) -> Self {
        let key = key.into();
        Self {
            label: Some(key.clone()),
            key: Some(key),
            section_type: Some(section_type),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: SectionLimit) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    #[must_use]
    pub fn with_rows(mut self, rows: Vec<FieldRowConfig>) -> Self {
        self.rows = rows;
        self
    }

    #[must_use]
    pub fn is_of_type(&self, section_type: &ChartDataSectionType) -> bool {
        self.section_type.as_ref() == Some(section_type)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether appending one more row keeps the section within its upper bound.
    #[must_use]
    pub fn has_room_for_another_row(&self) -> bool {
        self.limit
            .is_under_upper_bound(self.rows.len().saturating_add(1))
    }

    #[must_use]
    pub fn has_reached_min(&self) -> bool {
        self.limit.has_reached_lower_bound(self.rows.len())
    }
}

/// Node of a style or settings tree. Children live in `rows`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleNode {
    #[serde(default)]
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub com_type: Option<String>,
    #[serde(
        default,
        rename = "default",
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_value: Option<Value>,
    /// `Some(Value::Null)` is a value the user cleared, distinct from `None`.
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub rows: Vec<StyleNode>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl StyleNode {
    #[must_use]
    pub fn group(key: impl Into<String>, rows: Vec<StyleNode>) -> Self {
        let key = key.into();
        Self {
            label: Some(format!("{key}.title")),
            key,
            com_type: Some("group".to_owned()),
            rows,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn leaf(key: impl Into<String>, com_type: impl Into<String>, default_value: Value) -> Self {
        let key = key.into();
        Self {
            label: Some(key.clone()),
            key,
            com_type: Some(com_type.into()),
            default_value: Some(default_value),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Value in effect: the explicit value, else the default.
    #[must_use]
    pub fn effective_value(&self) -> Option<&Value> {
        self.value.as_ref().or(self.default_value.as_ref())
    }

    #[must_use]
    pub fn child(&self, key: &str) -> Option<&StyleNode> {
        self.rows.iter().find(|node| node.key == key)
    }

    /// Resolves a dotted path such as `label.font` against a forest.
    #[must_use]
    pub fn find_path<'a>(forest: &'a [StyleNode], path: &str) -> Option<&'a StyleNode> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut node = forest.iter().find(|node| node.key == first)?;
        for segment in segments {
            node = node.child(segment)?;
        }
        Some(node)
    }
}

/// Complete configuration of one chart.
///
/// Keys other than `datas`, `styles` and `settings` (for example `i18ns`) are
/// carried in `extra` without interpretation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub datas: Vec<DataSectionConfig>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub styles: Vec<StyleNode>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub settings: Vec<StyleNode>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl ChartConfig {
    #[must_use]
    pub fn new(datas: Vec<DataSectionConfig>) -> Self {
        Self {
            datas,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_styles(mut self, styles: Vec<StyleNode>) -> Self {
        self.styles = styles;
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: Vec<StyleNode>) -> Self {
        self.settings = settings;
        self
    }

    pub fn sections_of_type<'a>(
        &'a self,
        section_type: &'a ChartDataSectionType,
    ) -> impl Iterator<Item = &'a DataSectionConfig> + 'a {
        self.datas
            .iter()
            .filter(move |section| section.is_of_type(section_type))
    }

    #[must_use]
    pub fn row_count_of_type(&self, section_type: &ChartDataSectionType) -> usize {
        self.sections_of_type(section_type)
            .map(DataSectionConfig::row_count)
            .sum()
    }

    #[must_use]
    pub fn total_row_count(&self) -> usize {
        self.datas.iter().map(DataSectionConfig::row_count).sum()
    }

    #[must_use]
    pub fn section(&self, key: &str) -> Option<&DataSectionConfig> {
        self.datas
            .iter()
            .find(|section| section.key.as_deref() == Some(key))
    }

    /// Sections that still need fields before the chart can render.
    pub fn incomplete_sections(&self) -> impl Iterator<Item = &DataSectionConfig> {
        self.datas.iter().filter(|section| !section.has_reached_min())
    }
}
