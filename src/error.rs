//! Error types for the table core.

/// Result type alias for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors reported by the table core.
///
/// Sorting, merging and visibility filtering never fail; these cover the
/// configuration surfaces around them.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The column definition set is empty. Renderers show this instead of the
    /// table.
    #[error("Invalid table configuration: No columns defined")]
    EmptyColumns,

    /// A collation locale tag that does not parse.
    #[error("Invalid locale '{tag}': {message}")]
    InvalidLocale { tag: String, message: String },

    /// Collation data for a parsed locale could not be loaded.
    #[error("Collation data unavailable for '{tag}': {message}")]
    Collation { tag: String, message: String },

    /// A presentation layer or row set that is not valid JSON for its shape.
    #[error("Invalid presentation config: {0}")]
    Config(#[from] serde_json::Error),
}
