use crate::domain::entities::column::ColumnDef;
use crate::domain::entities::row::{CellValue, Row};

/// Header plus records as read from a file, before columns are derived.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabularData {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl TabularData {
    /// One keyed column per header; each record becomes a row keyed by header.
    /// Records shorter than the header leave the trailing fields out.
    pub fn into_table(self) -> (Vec<ColumnDef>, Vec<Row>) {
        let columns = self
            .columns
            .iter()
            .map(|header| ColumnDef::keyed(header.clone(), header.clone()))
            .collect();
        let rows = self
            .rows
            .into_iter()
            .map(|record| self.columns.iter().cloned().zip(record).collect())
            .collect();
        (columns, rows)
    }
}

/// Interprets raw text from a spreadsheet or CSV cell: blank is null, numbers
/// (thousand separators allowed) are numeric, anything else stays text.
pub fn parse_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Null;
    }
    match trimmed.replace(',', "").parse::<f64>() {
        Ok(value) if value.is_finite() => CellValue::Number(value),
        _ => CellValue::Text(raw.to_string()),
    }
}
