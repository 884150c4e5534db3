//! Error types for sheetcache-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or building sheetcache values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid column reference text
    #[error("Invalid column reference: {0}")]
    InvalidColumn(String),

    /// Invalid row reference text
    #[error("Invalid row reference: {0}")]
    InvalidRow(String),

    /// Invalid cell reference text
    #[error("Invalid cell reference: {0}")]
    InvalidCell(String),

    /// Invalid cell range text
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Invalid label name
    #[error("Invalid label: {0}")]
    InvalidLabel(String),

    /// Text that is neither a cell, a cell range nor a label
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u32, u16),

    /// A label mapping that targets its own label
    #[error("Label {0} cannot refer to itself")]
    SelfReferencingLabel(String),
}
