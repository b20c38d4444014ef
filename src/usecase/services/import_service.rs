use std::path::Path;

use anyhow::Result;

use crate::domain::entities::dataset::TabularData;
use crate::infra::import::csv::read_csv;
use crate::infra::import::json::read_json_rows;
use crate::infra::import::xlsx::read_xlsx;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Csv,
    Xlsx,
    Json,
}

impl ImportFormat {
    pub const EXTENSIONS: [&'static str; 4] = ["csv", "xlsx", "xls", "json"];

    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase())?;
        match ext.as_str() {
            "csv" => Some(ImportFormat::Csv),
            "xlsx" | "xls" => Some(ImportFormat::Xlsx),
            "json" => Some(ImportFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct ImportService;

impl ImportService {
    pub fn new() -> Self {
        Self
    }

    pub fn import(&self, path: &Path) -> Result<TabularData> {
        match ImportFormat::from_path(path) {
            Some(ImportFormat::Csv) => read_csv(path),
            Some(ImportFormat::Xlsx) => read_xlsx(path),
            Some(ImportFormat::Json) => read_json_rows(path),
            None => anyhow::bail!("unsupported data file: {}", path.display()),
        }
    }
}
