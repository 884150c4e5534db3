//! Server-pushed deltas
//!
//! A [`SpreadsheetDelta`] describes what changed since the last push: cells, columns and rows
//! to upsert or delete, dimension overrides, the complete current label set and, when known,
//! the spreadsheet's column and row counts.
//!
//! ```json
//! {
//!   "cells": [{"reference": "B2", "formula": {"text": "=1+1"}}],
//!   "deletedCells": ["A1"],
//!   "labels": [{"label": "Total", "target": "B2"}],
//!   "columnWidths": {"B": 120},
//!   "rowCount": 100
//! }
//! ```

use serde::{Deserialize, Serialize};
use sheetcache_core::{
    Cell, CellReference, Column, ColumnReference, LabelMapping, Row, RowReference,
};
use std::collections::{BTreeMap, BTreeSet};

/// An incremental update to the viewport cache
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpreadsheetDelta {
    /// Cells to insert or replace
    pub cells: Vec<Cell>,
    /// Columns to insert or replace
    pub columns: Vec<Column>,
    /// Rows to insert or replace
    pub rows: Vec<Row>,
    /// The complete label set; replaces whatever the cache held
    pub labels: Vec<LabelMapping>,
    /// Cells to remove
    pub deleted_cells: BTreeSet<CellReference>,
    /// Columns to remove
    pub deleted_columns: BTreeSet<ColumnReference>,
    /// Rows to remove
    pub deleted_rows: BTreeSet<RowReference>,
    /// Column width overrides in pixels
    pub column_widths: BTreeMap<ColumnReference, f64>,
    /// Row height overrides in pixels
    pub row_heights: BTreeMap<RowReference, f64>,
    /// Number of columns in the spreadsheet, if known
    pub column_count: Option<u32>,
    /// Number of rows in the spreadsheet, if known
    pub row_count: Option<u32>,
}

impl SpreadsheetDelta {
    /// Create an empty delta
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell to upsert
    pub fn with_cell(mut self, cell: Cell) -> Self {
        self.cells.push(cell);
        self
    }

    /// Add a column to upsert
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Add a row to upsert
    pub fn with_row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    /// Add a label mapping
    pub fn with_label(mut self, mapping: LabelMapping) -> Self {
        self.labels.push(mapping);
        self
    }

    /// Add a cell to delete
    pub fn with_deleted_cell(mut self, cell: CellReference) -> Self {
        self.deleted_cells.insert(cell);
        self
    }

    /// Add a column to delete
    pub fn with_deleted_column(mut self, column: ColumnReference) -> Self {
        self.deleted_columns.insert(column);
        self
    }

    /// Add a row to delete
    pub fn with_deleted_row(mut self, row: RowReference) -> Self {
        self.deleted_rows.insert(row);
        self
    }

    /// Set a column width override
    pub fn with_column_width(mut self, column: ColumnReference, width: f64) -> Self {
        self.column_widths.insert(column, width);
        self
    }

    /// Set a row height override
    pub fn with_row_height(mut self, row: RowReference, height: f64) -> Self {
        self.row_heights.insert(row, height);
        self
    }

    /// Set the spreadsheet column count
    pub fn with_column_count(mut self, count: u32) -> Self {
        self.column_count = Some(count);
        self
    }

    /// Set the spreadsheet row count
    pub fn with_row_count(mut self, count: u32) -> Self {
        self.row_count = Some(count);
        self
    }
}
