use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::entities::column::{find_column, ColumnDef};
use crate::domain::entities::row::{CellValue, Row};
use crate::domain::entities::sorting::SortingState;
use crate::error::{Result, TableError};
use crate::usecase::services::collation::Collation;

pub fn is_empty_columns(columns: &[ColumnDef]) -> bool {
    columns.is_empty()
}

pub fn validate_columns(columns: &[ColumnDef]) -> Result<()> {
    if is_empty_columns(columns) {
        return Err(TableError::EmptyColumns);
    }
    Ok(())
}

/// Ids of columns that read a field and do not opt out of sorting.
pub fn sortable_column_ids(columns: &[ColumnDef]) -> BTreeSet<String> {
    columns
        .iter()
        .filter(|column| column.is_sortable())
        .map(|column| column.id.clone())
        .collect()
}

/// Next state of the ascending -> descending -> none cycle.
///
/// Ids outside `sortable` leave the state untouched. A column other than the
/// active one always starts ascending.
pub fn toggle_sort(
    current: Option<&SortingState>,
    column_id: &str,
    sortable: &BTreeSet<String>,
) -> Option<SortingState> {
    if !sortable.contains(column_id) {
        return current.cloned();
    }
    match current {
        Some(state) if state.id == column_id && !state.desc => Some(SortingState::desc(column_id)),
        Some(state) if state.id == column_id => None,
        _ => Some(SortingState::asc(column_id)),
    }
}

/// Orders two optional cells for a column sorted in the given direction.
///
/// Absent values rank above everything else, so they end up last when
/// ascending and first when descending.
pub fn compare_cells(
    a: Option<&CellValue>,
    b: Option<&CellValue>,
    desc: bool,
    collation: &Collation,
) -> Ordering {
    let (a, b) = match (a, b) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return if desc { Ordering::Less } else { Ordering::Greater },
        (Some(_), None) => return if desc { Ordering::Greater } else { Ordering::Less },
        (Some(a), Some(b)) => (a, b),
    };
    let (left, right) = if desc { (b, a) } else { (a, b) };
    match (left, right) {
        (CellValue::Text(left), CellValue::Text(right)) => collation.compare(left, right),
        (CellValue::Number(left), CellValue::Number(right)) => {
            left.partial_cmp(right).unwrap_or(Ordering::Equal)
        }
        _ => collation.compare(&left.to_text(), &right.to_text()),
    }
}

/// Rows ordered by the active sort, without touching `rows`.
///
/// With no state, or a state naming a column without an accessor (or no
/// column at all), the rows come back in input order.
pub fn apply_sort<'a>(
    columns: &[ColumnDef],
    rows: &'a [Row],
    state: Option<&SortingState>,
    collation: &Collation,
) -> Vec<&'a Row> {
    let mut sorted: Vec<&Row> = rows.iter().collect();
    let Some(state) = state else {
        return sorted;
    };
    let Some(key) = find_column(columns, &state.id).and_then(|c| c.accessor_key.as_deref()) else {
        return sorted;
    };
    sorted.sort_by(|a, b| compare_cells(a.value(key), b.value(key), state.desc, collation));
    sorted
}

/// Sort state owned by one table instance.
///
/// Columns and rows are passed in on every call, so the sortable set and the
/// sorted rows always reflect the current definitions.
#[derive(Debug, Clone, Default)]
pub struct SortEngine {
    sorting: Option<SortingState>,
    collation: Arc<Collation>,
}

impl SortEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collation(collation: Arc<Collation>) -> Self {
        Self {
            sorting: None,
            collation,
        }
    }

    pub fn sorting(&self) -> Option<&SortingState> {
        self.sorting.as_ref()
    }

    pub fn collation(&self) -> &Collation {
        &self.collation
    }

    pub fn on_sort(&mut self, columns: &[ColumnDef], column_id: &str) {
        let sortable = sortable_column_ids(columns);
        let next = toggle_sort(self.sorting.as_ref(), column_id, &sortable);
        if next != self.sorting {
            tracing::debug!(column = column_id, state = ?next, "sort toggled");
        }
        self.sorting = next;
    }

    pub fn sorted_rows<'a>(&self, columns: &[ColumnDef], rows: &'a [Row]) -> Vec<&'a Row> {
        if is_empty_columns(columns) {
            return rows.iter().collect();
        }
        apply_sort(columns, rows, self.sorting.as_ref(), &self.collation)
    }

    pub fn reset(&mut self) {
        self.sorting = None;
    }
}
