use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::dataset::{parse_cell, TabularData};
use crate::domain::entities::row::CellValue;

pub fn read_csv(csv_path: &Path) -> Result<TabularData> {
    let mut reader = ::csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read headers from csv: {}", csv_path.display()))?
        .clone();

    if headers.is_empty() {
        anyhow::bail!("csv header is required")
    }

    let header_len = headers.len();
    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to parse csv record")?;
        let row = (0..header_len)
            .map(|col_idx| parse_cell(record.get(col_idx).unwrap_or("")))
            .collect();
        rows.push(row);
    }

    tracing::info!(
        path = %csv_path.display(),
        rows = rows.len(),
        "read csv"
    );

    Ok(TabularData {
        columns: headers.iter().map(|h| h.to_string()).collect(),
        rows,
    })
}
