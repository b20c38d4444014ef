mod data_table;
mod sort_indicator;
mod table_body;
mod table_header;

pub use data_table::DataTable;
pub use sort_indicator::SortIndicator;
pub use table_body::TableBody;
pub use table_header::TableHeader;
