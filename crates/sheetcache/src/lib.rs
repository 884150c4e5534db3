//! # sheetcache
//!
//! A client-side cache for a spreadsheet viewport.
//!
//! The server pushes [`SpreadsheetDelta`]s describing changed cells, columns, rows, dimension
//! overrides and the complete label set. [`ViewportCache`] mirrors what the visible
//! [`Window`] needs from them and answers the renderer's questions:
//!
//! - cell, column and row lookup
//! - column widths and row heights, falling back to the spreadsheet default
//! - hidden columns and rows
//! - which labels point at a cell, and what a label finally resolves to
//!
//! ## Example
//!
//! ```rust
//! use sheetcache::prelude::*;
//!
//! let mut cache = ViewportCache::new(CacheOptions::default());
//! cache.set_window(Window::parse("A1:D10").unwrap());
//!
//! let delta = SpreadsheetDelta::new()
//!     .with_label(LabelMapping::parse("Sales", "B2:B3").unwrap())
//!     .with_label(LabelMapping::parse("Revenue", "Sales").unwrap());
//! cache.apply_delta(&delta).unwrap();
//!
//! let b3: CellReference = "B3".parse().unwrap();
//! assert_eq!(cache.cell_labels(&b3).unwrap().len(), 2);
//! ```

pub mod cache;
pub mod delta;
pub mod error;
pub mod labels;
pub mod metadata;
pub mod options;
pub mod prelude;
pub mod window;

pub use cache::{DeltaStats, ViewportCache};
pub use delta::SpreadsheetDelta;
pub use error::{Error, Result};
pub use labels::{LabelResolution, LabelResolver};
pub use metadata::SpreadsheetMetadata;
pub use options::CacheOptions;
pub use window::Window;

// Re-export core types
pub use sheetcache_core::{
    Cell, CellError, CellRange, CellReference, CellValue, Column, ColumnReference, Formula,
    LabelMapping, LabelName, Length, NonLabelSelection, Row, RowReference, Selection, Style,
    TextAlign,
};
