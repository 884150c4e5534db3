//! Spreadsheet coordinates
//!
//! - [`ColumnReference`] - a column (e.g., "C")
//! - [`RowReference`] - a row (e.g., "7")
//! - [`CellReference`] - a cell (e.g., "C7")
//! - [`LabelName`] - a named alias (e.g., "TaxRate")

mod cell;
mod column;
mod label;
mod row;

pub use cell::CellReference;
pub use column::ColumnReference;
pub use label::{LabelName, MAX_LABEL_LEN};
pub use row::RowReference;
