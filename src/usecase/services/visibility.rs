use crate::domain::entities::column::ColumnDef;
use crate::domain::entities::config::PresentationConfig;

/// Columns of `all_columns` that are always visible or listed in
/// `visible_ids`, in definition order. The order of `visible_ids` is ignored.
pub fn filter_visible<'a, S>(all_columns: &'a [ColumnDef], visible_ids: &[S]) -> Vec<&'a ColumnDef>
where
    S: AsRef<str>,
{
    all_columns
        .iter()
        .filter(|column| {
            column.always_visible || visible_ids.iter().any(|id| id.as_ref() == column.id)
        })
        .collect()
}

/// Listed ids first, in listed order, then every unlisted column in definition
/// order. Ids that match no column are skipped.
pub fn apply_column_order<'a, S>(columns: Vec<&'a ColumnDef>, order: &[S]) -> Vec<&'a ColumnDef>
where
    S: AsRef<str>,
{
    let mut remaining = columns;
    let mut ordered = Vec::with_capacity(remaining.len());
    for id in order {
        if let Some(pos) = remaining.iter().position(|column| column.id == id.as_ref()) {
            ordered.push(remaining.remove(pos));
        }
    }
    ordered.extend(remaining);
    ordered
}

/// Columns to render for a resolved config: visibility first, then ordering.
/// An unset `visible_columns` shows every column.
pub fn visible_columns_for<'a>(
    all_columns: &'a [ColumnDef],
    config: &PresentationConfig,
) -> Vec<&'a ColumnDef> {
    let visible = match config.visible_columns.as_deref() {
        Some(ids) => filter_visible(all_columns, ids),
        None => all_columns.iter().collect(),
    };
    match config.column_order.as_deref() {
        Some(order) => apply_column_order(visible, order),
        None => visible,
    }
}
