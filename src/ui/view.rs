//! Render-ready model of a table, independent of the Dioxus components that
//! draw it.

use crate::domain::entities::column::ColumnDef;
use crate::domain::entities::config::PresentationConfig;
use crate::domain::entities::row::Row;
use crate::domain::entities::sorting::SortDirection;
use crate::usecase::services::sort_engine::{sortable_column_ids, validate_columns, SortEngine};
use crate::usecase::services::style_rules::{cell_classes, row_classes};
use crate::usecase::services::visibility::visible_columns_for;

pub const EMPTY_DATA_MESSAGE: &str = "No data available";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub id: String,
    pub header: String,
    pub sortable: bool,
    pub direction: Option<SortDirection>,
}

impl HeaderCell {
    pub fn is_sorted(&self) -> bool {
        self.direction.is_some()
    }

    pub fn aria_sort(&self) -> Option<&'static str> {
        self.direction.map(SortDirection::aria_label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyCell {
    pub column_id: String,
    pub text: String,
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyRow {
    pub index: usize,
    pub striped: bool,
    pub classes: Vec<String>,
    pub cells: Vec<BodyCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    /// The column set is unusable; show `message` instead of a table.
    Invalid { message: String },
    Table {
        headers: Vec<HeaderCell>,
        rows: Vec<BodyRow>,
    },
}

impl TableView {
    /// Builds the view for the current sort state.
    ///
    /// With `enable_sorting` off no header is sortable and rows keep input
    /// order. A `config` narrows and reorders the columns and supplies style
    /// rules.
    pub fn build(
        columns: &[ColumnDef],
        rows: &[Row],
        engine: &SortEngine,
        enable_sorting: bool,
        config: Option<&PresentationConfig>,
    ) -> Self {
        if let Err(err) = validate_columns(columns) {
            return TableView::Invalid {
                message: err.to_string(),
            };
        }

        let shown: Vec<&ColumnDef> = match config {
            Some(config) => visible_columns_for(columns, config),
            None => columns.iter().collect(),
        };
        let sortable = if enable_sorting {
            sortable_column_ids(columns)
        } else {
            Default::default()
        };
        let active = engine.sorting().filter(|_| enable_sorting);

        let headers = shown
            .iter()
            .map(|column| HeaderCell {
                id: column.id.clone(),
                header: column.header.clone(),
                sortable: sortable.contains(&column.id),
                direction: active
                    .filter(|state| state.id == column.id)
                    .map(|state| state.direction()),
            })
            .collect();

        let ordered: Vec<&Row> = if enable_sorting {
            engine.sorted_rows(columns, rows)
        } else {
            rows.iter().collect()
        };
        let row_rules = config.and_then(|c| c.row_style_rules.as_deref()).unwrap_or(&[]);
        let cell_rules = config.and_then(|c| c.cell_style_rules.as_deref()).unwrap_or(&[]);

        let rows = ordered
            .into_iter()
            .enumerate()
            .map(|(index, row)| BodyRow {
                index,
                striped: index % 2 == 1,
                classes: owned(row_classes(row_rules, row)),
                cells: shown
                    .iter()
                    .map(|column| BodyCell {
                        column_id: column.id.clone(),
                        text: cell_text(column, row),
                        classes: owned(cell_classes(cell_rules, &column.id, row)),
                    })
                    .collect(),
            })
            .collect();

        TableView::Table { headers, rows }
    }

    pub fn is_empty_data(&self) -> bool {
        matches!(self, TableView::Table { rows, .. } if rows.is_empty())
    }
}

/// Text shown for `column` in `row`: empty without an accessor or value.
pub fn cell_text(column: &ColumnDef, row: &Row) -> String {
    column
        .accessor_key
        .as_deref()
        .and_then(|key| row.value(key))
        .map(|value| value.to_text().into_owned())
        .unwrap_or_default()
}

fn owned(classes: Vec<&str>) -> Vec<String> {
    classes.into_iter().map(str::to_string).collect()
}
