//! # sheetcache-core
//!
//! Value types shared by the sheetcache crates.
//!
//! - [`ColumnReference`], [`RowReference`], [`CellReference`] - spreadsheet coordinates
//! - [`CellRange`] - rectangular ranges of cells
//! - [`LabelName`] and [`LabelMapping`] - named aliases for cells, ranges and other labels
//! - [`Selection`] - a cell, a range or a label; [`NonLabelSelection`] once labels are resolved
//! - [`Cell`], [`Column`], [`Row`] - what the server sends for each coordinate
//!
//! ## Example
//!
//! ```rust
//! use sheetcache_core::{CellRange, CellReference, Selection};
//!
//! let range = CellRange::parse("A1:C3").unwrap();
//! assert!(range.contains(&CellReference::parse("B2").unwrap()));
//!
//! let selection: Selection = "TaxRate".parse().unwrap();
//! assert!(selection.is_label());
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod label;
pub mod range;
pub mod reference;
pub mod row;
pub mod selection;
pub mod style;
pub mod value;

#[cfg(feature = "serde")]
mod serde_impl;

pub use cell::{Cell, Formula};
pub use column::Column;
pub use error::{Error, Result};
pub use label::LabelMapping;
pub use range::{CellRange, CellRangeIterator};
pub use reference::{CellReference, ColumnReference, LabelName, RowReference};
pub use row::Row;
pub use selection::{NonLabelSelection, Selection};
pub use style::{Length, Style, TextAlign};
pub use value::{CellError, CellValue};

/// Maximum number of rows in a spreadsheet
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a spreadsheet
pub const MAX_COLS: u16 = 16_384;
