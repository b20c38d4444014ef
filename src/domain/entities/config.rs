use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::entities::row::{CellValue, Row};
use crate::domain::entities::sorting::SortingState;

/// Ordered column ids, shared between layers and the merged config.
pub type ColumnIds = Arc<[String]>;

/// A rule sequence, shared by reference. Clones of the `Arc` keep identity,
/// which the merger relies on to tell "same rules" from "replaced rules".
pub type StyleRules = Arc<[StyleRule]>;

/// Predicate evaluated against a whole row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum RuleCondition {
    Always,
    IsNull { field: String },
    Equals { field: String, value: CellValue },
    GreaterThan { field: String, value: f64 },
    LessThan { field: String, value: f64 },
    Contains { field: String, text: String },
}

impl RuleCondition {
    pub fn matches(&self, row: &Row) -> bool {
        match self {
            RuleCondition::Always => true,
            RuleCondition::IsNull { field } => row.value(field).is_none(),
            RuleCondition::Equals { field, value } => match row.value(field) {
                Some(actual) => actual == value,
                None => value.is_null(),
            },
            RuleCondition::GreaterThan { field, value } => row
                .value(field)
                .and_then(CellValue::as_number)
                .is_some_and(|actual| actual > *value),
            RuleCondition::LessThan { field, value } => row
                .value(field)
                .and_then(CellValue::as_number)
                .is_some_and(|actual| actual < *value),
            RuleCondition::Contains { field, text } => row
                .value(field)
                .is_some_and(|actual| actual.to_text().contains(text.as_str())),
        }
    }
}

/// A conditional class name for a row, or for the cells of one column when
/// `column_id` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRule {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_id: Option<String>,
    pub when: RuleCondition,
    pub class_name: String,
}

impl StyleRule {
    pub fn new(id: impl Into<String>, when: RuleCondition, class_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            column_id: None,
            when,
            class_name: class_name.into(),
        }
    }

    pub fn for_column(mut self, column_id: impl Into<String>) -> Self {
        self.column_id = Some(column_id.into());
        self
    }
}

/// One presentation layer, or the merged result.
///
/// Every field is `None` when the layer leaves it unset. `Some(empty)` is a
/// real value and wins over lower layers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresentationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_columns: Option<ColumnIds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_style_rules: Option<StyleRules>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_style_rules: Option<StyleRules>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_order: Option<ColumnIds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_sorting: Option<SortingState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_page_size: Option<usize>,
}

impl PresentationConfig {
    pub fn with_visible_columns<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.visible_columns = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_column_order<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_order = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_row_style_rules(mut self, rules: StyleRules) -> Self {
        self.row_style_rules = Some(rules);
        self
    }

    pub fn with_cell_style_rules(mut self, rules: StyleRules) -> Self {
        self.cell_style_rules = Some(rules);
        self
    }

    pub fn with_default_sorting(mut self, sorting: SortingState) -> Self {
        self.default_sorting = Some(sorting);
        self
    }

    pub fn with_default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = Some(size);
        self
    }
}

/// The three merge inputs, lowest precedence first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigLayers {
    pub dev_defaults: PresentationConfig,
    pub api_config: Option<PresentationConfig>,
    pub user_overrides: Option<PresentationConfig>,
}

impl ConfigLayers {
    pub fn new(dev_defaults: PresentationConfig) -> Self {
        Self {
            dev_defaults,
            ..Default::default()
        }
    }

    pub fn api(mut self, config: PresentationConfig) -> Self {
        self.api_config = Some(config);
        self
    }

    pub fn user(mut self, config: PresentationConfig) -> Self {
        self.user_overrides = Some(config);
        self
    }
}

/// Names of the mergeable fields, as reported in merge metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfigField {
    VisibleColumns,
    RowStyleRules,
    CellStyleRules,
    ColumnOrder,
    DefaultSorting,
    DefaultPageSize,
}

impl ConfigField {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigField::VisibleColumns => "visibleColumns",
            ConfigField::RowStyleRules => "rowStyleRules",
            ConfigField::CellStyleRules => "cellStyleRules",
            ConfigField::ColumnOrder => "columnOrder",
            ConfigField::DefaultSorting => "defaultSorting",
            ConfigField::DefaultPageSize => "defaultPageSize",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
