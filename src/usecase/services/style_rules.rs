use crate::domain::entities::config::StyleRule;
use crate::domain::entities::row::Row;

/// Class names of the rules matching `row`, in rule order.
pub fn row_classes<'a>(rules: &'a [StyleRule], row: &Row) -> Vec<&'a str> {
    rules
        .iter()
        .filter(|rule| rule.when.matches(row))
        .map(|rule| rule.class_name.as_str())
        .collect()
}

/// Like [`row_classes`], limited to rules that target `column_id` or no
/// column at all.
pub fn cell_classes<'a>(rules: &'a [StyleRule], column_id: &str, row: &Row) -> Vec<&'a str> {
    rules
        .iter()
        .filter(|rule| rule.column_id.as_deref().map_or(true, |id| id == column_id))
        .filter(|rule| rule.when.matches(row))
        .map(|rule| rule.class_name.as_str())
        .collect()
}
