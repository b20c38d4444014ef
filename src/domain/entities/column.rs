use serde::{Deserialize, Serialize};

/// One table column.
///
/// `id` is the stable handle used by sort state and visibility rules and must
/// be unique within a column set. Lookups by id find the first match.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    pub id: String,
    pub header: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessor_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_sorting: Option<bool>,
    #[serde(default)]
    pub always_visible: bool,
}

impl ColumnDef {
    /// A column without an accessor. It renders no data and is never sortable.
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            ..Default::default()
        }
    }

    /// A column whose id doubles as the row field it reads.
    pub fn keyed(id: impl Into<String>, header: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            accessor_key: Some(id.clone()),
            ..Self::new(id, header)
        }
    }

    pub fn accessor(mut self, key: impl Into<String>) -> Self {
        self.accessor_key = Some(key.into());
        self
    }

    pub fn sorting(mut self, enabled: bool) -> Self {
        self.enable_sorting = Some(enabled);
        self
    }

    pub fn always_visible(mut self) -> Self {
        self.always_visible = true;
        self
    }

    /// Sortable iff the column reads a field and sorting is not explicitly off.
    pub fn is_sortable(&self) -> bool {
        self.accessor_key.is_some() && self.enable_sorting != Some(false)
    }
}

pub fn find_column<'a>(columns: &'a [ColumnDef], id: &str) -> Option<&'a ColumnDef> {
    columns.iter().find(|column| column.id == id)
}
