use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader};

use crate::domain::entities::dataset::{parse_cell, TabularData};
use crate::domain::entities::row::CellValue;

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.to_string(),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

pub fn cell_to_value(cell: &Data) -> CellValue {
    match cell {
        Data::Float(v) => CellValue::Number(*v),
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Bool(v) => CellValue::Bool(*v),
        Data::String(v) => parse_cell(v),
        Data::Empty => CellValue::Null,
        other => CellValue::Text(cell_to_string(other)),
    }
}

/// Reads the first worksheet; its first row is the header.
pub fn read_xlsx(xlsx_path: &Path) -> Result<TabularData> {
    let mut workbook = open_workbook_auto(xlsx_path)
        .with_context(|| format!("failed to open xlsx: {}", xlsx_path.display()))?;

    let range = workbook
        .worksheet_range_at(0)
        .with_context(|| format!("workbook has no sheets: {}", xlsx_path.display()))?
        .context("failed to read first sheet")?;

    let mut sheet_rows = range.rows();
    let Some(header_row) = sheet_rows.next() else {
        anyhow::bail!("xlsx header is required")
    };
    let columns: Vec<String> = header_row.iter().map(cell_to_string).collect();
    if columns.iter().all(|header| header.trim().is_empty()) {
        anyhow::bail!("xlsx header is required")
    }

    let rows: Vec<Vec<CellValue>> = sheet_rows
        .map(|row| {
            (0..columns.len())
                .map(|idx| row.get(idx).map(cell_to_value).unwrap_or(CellValue::Null))
                .collect()
        })
        .collect();

    tracing::info!(
        path = %xlsx_path.display(),
        rows = rows.len(),
        "read xlsx"
    );

    Ok(TabularData { columns, rows })
}
