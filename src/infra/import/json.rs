use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::dataset::TabularData;
use crate::domain::entities::row::{CellValue, Row};

/// Parses a JSON array of flat objects. Fields missing from a record are
/// absent in its row.
pub fn parse_json_rows(text: &str) -> Result<Vec<Row>> {
    serde_json::from_str(text).context("rows must be a JSON array of objects")
}

/// Reads a JSON row file. Columns are the union of all record fields, in
/// field-name order.
pub fn read_json_rows(json_path: &Path) -> Result<TabularData> {
    let text = std::fs::read_to_string(json_path)
        .with_context(|| format!("failed to read json: {}", json_path.display()))?;
    let records = parse_json_rows(&text)
        .with_context(|| format!("failed to parse json rows: {}", json_path.display()))?;

    let fields: BTreeSet<String> = records
        .iter()
        .flat_map(|row| row.fields().map(str::to_string))
        .collect();
    let columns: Vec<String> = fields.into_iter().collect();
    let rows: Vec<Vec<CellValue>> = records
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|field| row.get(field).cloned().unwrap_or(CellValue::Null))
                .collect()
        })
        .collect();

    tracing::info!(
        path = %json_path.display(),
        rows = rows.len(),
        "read json rows"
    );

    Ok(TabularData { columns, rows })
}
