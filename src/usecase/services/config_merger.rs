use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::column::ColumnDef;
use crate::domain::entities::config::{ConfigField, ConfigLayers, PresentationConfig};
use crate::domain::entities::sorting::SortingState;

/// Which layer object was supplied at all. Not per-field provenance: a user
/// layer that sets only `defaultPageSize` still reports `User`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    User,
    Api,
    Default,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConfigSource::User => "user",
            ConfigSource::Api => "api",
            ConfigSource::Default => "default",
        })
    }
}

/// Diagnostics produced alongside a merge. Never fed back into merging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeMeta {
    pub source: ConfigSource,
    pub overridden_keys: Vec<ConfigField>,
    pub hidden_always_visible_columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub merged: PresentationConfig,
    pub meta: MergeMeta,
}

/// How a field value is compared against lower layers when tracking
/// overrides. Shared values compare by identity.
trait LayerValue: Clone {
    fn same_as(&self, other: &Self) -> bool;
}

impl<T: ?Sized> LayerValue for Arc<T> {
    fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl LayerValue for SortingState {
    fn same_as(&self, other: &Self) -> bool {
        self == other
    }
}

impl LayerValue for usize {
    fn same_as(&self, other: &Self) -> bool {
        self == other
    }
}

#[derive(Default)]
struct OverrideTracker {
    keys: Vec<ConfigField>,
}

impl OverrideTracker {
    fn record(&mut self, field: ConfigField) {
        if !self.keys.contains(&field) {
            self.keys.push(field);
        }
    }

    fn resolve<T: LayerValue>(
        &mut self,
        field: ConfigField,
        default: Option<&T>,
        api: Option<&T>,
        user: Option<&T>,
    ) -> Option<T> {
        if let Some(user) = user {
            let replaced_api = api.is_some_and(|api| !api.same_as(user));
            let replaced_default = default.is_some_and(|default| !default.same_as(user));
            if replaced_api || replaced_default {
                self.record(field);
            }
            return Some(user.clone());
        }
        if let Some(api) = api {
            if default.is_some_and(|default| !default.same_as(api)) {
                self.record(field);
            }
            return Some(api.clone());
        }
        default.cloned()
    }
}

/// Merges developer defaults, API config and user overrides field by field
/// (user > api > defaults), then forces every always-visible column back into
/// `visible_columns`.
///
/// Pure: the layers and columns are only read, and shared rule sequences are
/// handed through by reference.
pub fn merge_config(layers: &ConfigLayers, columns: &[ColumnDef]) -> MergeOutcome {
    let defaults = &layers.dev_defaults;
    let api = layers.api_config.as_ref();
    let user = layers.user_overrides.as_ref();

    let mut tracker = OverrideTracker::default();
    let mut merged = PresentationConfig {
        visible_columns: tracker.resolve(
            ConfigField::VisibleColumns,
            defaults.visible_columns.as_ref(),
            api.and_then(|c| c.visible_columns.as_ref()),
            user.and_then(|c| c.visible_columns.as_ref()),
        ),
        row_style_rules: tracker.resolve(
            ConfigField::RowStyleRules,
            defaults.row_style_rules.as_ref(),
            api.and_then(|c| c.row_style_rules.as_ref()),
            user.and_then(|c| c.row_style_rules.as_ref()),
        ),
        cell_style_rules: tracker.resolve(
            ConfigField::CellStyleRules,
            defaults.cell_style_rules.as_ref(),
            api.and_then(|c| c.cell_style_rules.as_ref()),
            user.and_then(|c| c.cell_style_rules.as_ref()),
        ),
        column_order: tracker.resolve(
            ConfigField::ColumnOrder,
            defaults.column_order.as_ref(),
            api.and_then(|c| c.column_order.as_ref()),
            user.and_then(|c| c.column_order.as_ref()),
        ),
        default_sorting: tracker.resolve(
            ConfigField::DefaultSorting,
            defaults.default_sorting.as_ref(),
            api.and_then(|c| c.default_sorting.as_ref()),
            user.and_then(|c| c.default_sorting.as_ref()),
        ),
        default_page_size: tracker.resolve(
            ConfigField::DefaultPageSize,
            defaults.default_page_size.as_ref(),
            api.and_then(|c| c.default_page_size.as_ref()),
            user.and_then(|c| c.default_page_size.as_ref()),
        ),
    };

    let mut hidden_always_visible_columns = Vec::new();
    if let Some(visible) = merged.visible_columns.take() {
        let always_visible: Vec<&str> = columns
            .iter()
            .filter(|column| column.always_visible)
            .map(|column| column.id.as_str())
            .collect();
        let missing: Vec<String> = always_visible
            .iter()
            .filter(|id| !visible.iter().any(|visible_id| visible_id == *id))
            .map(|id| id.to_string())
            .collect();

        // A repaired list leads with the whole always-visible block in
        // definition order; an intact list keeps its own order.
        let leading: &[&str] = if missing.is_empty() {
            &[]
        } else {
            tracing::warn!(
                columns = ?missing,
                "restored always-visible columns hidden by presentation config"
            );
            &always_visible
        };

        let enforced: Vec<String> = {
            let mut seen = HashSet::new();
            leading
                .iter()
                .copied()
                .chain(visible.iter().map(String::as_str))
                .filter(|id| seen.insert(*id))
                .map(str::to_string)
                .collect()
        };
        merged.visible_columns = Some(enforced.into());
        hidden_always_visible_columns = missing;
    }

    let source = if user.is_some() {
        ConfigSource::User
    } else if api.is_some() {
        ConfigSource::Api
    } else {
        ConfigSource::Default
    };

    tracing::debug!(
        %source,
        overridden = ?tracker.keys,
        "merged presentation config"
    );

    MergeOutcome {
        merged,
        meta: MergeMeta {
            source,
            overridden_keys: tracker.keys,
            hidden_always_visible_columns,
        },
    }
}
