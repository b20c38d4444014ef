pub mod domain;
pub mod error;
pub mod infra;
pub mod platform;
pub mod ui;
pub mod usecase;

pub use domain::entities::column::ColumnDef;
pub use domain::entities::config::{ConfigLayers, PresentationConfig, RuleCondition, StyleRule};
pub use domain::entities::row::{CellValue, Row};
pub use domain::entities::sorting::{SortDirection, SortingState};
pub use error::{Result, TableError};
pub use usecase::services::config_merger::{merge_config, ConfigSource, MergeMeta, MergeOutcome};
pub use usecase::services::sort_engine::{
    apply_sort, is_empty_columns, sortable_column_ids, toggle_sort, SortEngine,
};
pub use usecase::services::visibility::filter_visible;
