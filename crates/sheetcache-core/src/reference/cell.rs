//! Cell references

use super::{ColumnReference, RowReference};
use crate::error::{Error, Result};
use crate::range::CellRange;
use std::fmt;
use std::str::FromStr;

/// A cell reference (e.g., "A1")
///
/// `$` absolute markers are accepted when parsing but not kept: two references to the same
/// coordinate are always equal. References order row first, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellReference {
    row: RowReference,
    column: ColumnReference,
}

impl CellReference {
    /// Create a cell reference from its column and row
    pub fn new(column: ColumnReference, row: RowReference) -> Self {
        Self { row, column }
    }

    /// Create a cell reference from 0-based indices
    pub fn from_indices(column: u16, row: u32) -> Result<Self> {
        Ok(Self::new(ColumnReference::new(column)?, RowReference::new(row)?))
    }

    /// The column of this cell
    pub fn column(&self) -> ColumnReference {
        self.column
    }

    /// The row of this cell
    pub fn row(&self) -> RowReference {
        self.row
    }

    /// Parse a cell reference from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use sheetcache_core::CellReference;
    ///
    /// let cell = CellReference::parse("$B$2").unwrap();
    /// assert_eq!(cell.column().index(), 1);
    /// assert_eq!(cell.row().index(), 1);
    /// assert_eq!(cell.to_string(), "B2");
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidCell("empty cell reference".into()));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;
        if bytes.first() == Some(&b'$') {
            pos += 1;
        }
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }

        let (column, row) = s.split_at(pos);
        if column.trim_start_matches('$').is_empty() {
            return Err(Error::InvalidCell(format!("no column letters in '{}'", s)));
        }
        if row.trim_start_matches('$').is_empty() {
            return Err(Error::InvalidCell(format!("no row number in '{}'", s)));
        }

        let column = ColumnReference::parse(column).map_err(|e| match e {
            Error::InvalidColumn(_) => Error::InvalidCell(s.to_string()),
            other => other,
        })?;
        let row = RowReference::parse(row).map_err(|e| match e {
            Error::InvalidRow(_) => Error::InvalidCell(s.to_string()),
            other => other,
        })?;

        Ok(Self::new(column, row))
    }

    /// A single-cell range covering this cell
    pub fn to_range(&self) -> CellRange {
        CellRange::single(*self)
    }

    /// Create a range from this cell to another
    pub fn to(&self, other: CellReference) -> CellRange {
        CellRange::new(*self, other)
    }
}

impl fmt::Display for CellReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl FromStr for CellReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
