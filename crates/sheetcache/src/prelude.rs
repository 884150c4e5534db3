//! Prelude module - common imports for sheetcache users
//!
//! ```rust
//! use sheetcache::prelude::*;
//! ```

pub use crate::{
    // Cache types
    CacheOptions,
    // Core types
    Cell,
    CellRange,
    CellReference,
    CellValue,
    Column,
    ColumnReference,
    DeltaStats,
    // Error types
    Error,
    Formula,
    LabelMapping,
    LabelName,
    NonLabelSelection,
    Result,
    Row,
    RowReference,
    Selection,
    SpreadsheetDelta,
    SpreadsheetMetadata,
    Style,
    ViewportCache,
    Window,
};
