//! Error types

/// Errors that can occur while building a table view.
///
/// Only construction can fail. Once a [`TableView`](crate::TableView) exists,
/// none of its operations return errors.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Two columns share the same key.
    #[error("duplicate column key '{key}'")]
    DuplicateColumn {
        /// The repeated key.
        key: String,
    },

    /// A table configuration document could not be parsed.
    #[error("invalid table config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for table operations.
pub type TableResult<T> = Result<T, TableError>;
