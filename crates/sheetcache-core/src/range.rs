//! Cell ranges

use crate::error::{Error, Result};
use crate::reference::{CellReference, ColumnReference, RowReference};
use std::fmt;
use std::str::FromStr;

/// A rectangular range of cells (e.g., "A1:B10")
///
/// Ranges are normalised on construction so `begin` is the top-left cell and `end` the
/// bottom-right cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellRange {
    begin: CellReference,
    end: CellReference,
}

impl CellRange {
    /// Create a new cell range from any two corners
    pub fn new(a: CellReference, b: CellReference) -> Self {
        let (top, bottom) = if a.row() <= b.row() {
            (a.row(), b.row())
        } else {
            (b.row(), a.row())
        };
        let (left, right) = if a.column() <= b.column() {
            (a.column(), b.column())
        } else {
            (b.column(), a.column())
        };

        Self {
            begin: CellReference::new(left, top),
            end: CellReference::new(right, bottom),
        }
    }

    /// Create a single-cell range
    pub fn single(cell: CellReference) -> Self {
        Self {
            begin: cell,
            end: cell,
        }
    }

    /// Top-left cell
    pub fn begin(&self) -> CellReference {
        self.begin
    }

    /// Bottom-right cell
    pub fn end(&self) -> CellReference {
        self.end
    }

    /// Parse a range from A1:B10 notation; a lone cell gives a single-cell range
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = |e: Error| match e {
            Error::InvalidCell(_) => Error::InvalidRange(s.to_string()),
            other => other,
        };

        match s.split_once(':') {
            Some((begin, end)) => {
                let begin = CellReference::parse(begin).map_err(invalid)?;
                let end = CellReference::parse(end).map_err(invalid)?;
                Ok(Self::new(begin, end))
            }
            None => Ok(Self::single(CellReference::parse(s).map_err(invalid)?)),
        }
    }

    /// Whether this range covers exactly one cell
    pub fn is_single_cell(&self) -> bool {
        self.begin == self.end
    }

    /// Check if a cell is within this range
    pub fn contains(&self, cell: &CellReference) -> bool {
        self.contains_column(cell.column()) && self.contains_row(cell.row())
    }

    /// Check if a column is spanned by this range
    pub fn contains_column(&self, column: ColumnReference) -> bool {
        column >= self.begin.column() && column <= self.end.column()
    }

    /// Check if a row is spanned by this range
    pub fn contains_row(&self, row: RowReference) -> bool {
        row >= self.begin.row() && row <= self.end.row()
    }

    /// Check if this range overlaps with another
    pub fn overlaps(&self, other: &CellRange) -> bool {
        self.begin.row() <= other.end.row()
            && self.end.row() >= other.begin.row()
            && self.begin.column() <= other.end.column()
            && self.end.column() >= other.begin.column()
    }

    /// Get the intersection of two ranges, if any
    pub fn intersection(&self, other: &CellRange) -> Option<CellRange> {
        if !self.overlaps(other) {
            return None;
        }

        Some(CellRange::new(
            CellReference::new(
                self.begin.column().max(other.begin.column()),
                self.begin.row().max(other.begin.row()),
            ),
            CellReference::new(
                self.end.column().min(other.end.column()),
                self.end.row().min(other.end.row()),
            ),
        ))
    }

    /// Number of rows in the range
    pub fn row_count(&self) -> u32 {
        self.end.row().index() - self.begin.row().index() + 1
    }

    /// Number of columns in the range
    pub fn column_count(&self) -> u16 {
        self.end.column().index() - self.begin.column().index() + 1
    }

    /// Total number of cells in the range
    pub fn cell_count(&self) -> u64 {
        self.row_count() as u64 * self.column_count() as u64
    }

    /// Iterate over all cells in the range (row by row)
    pub fn cells(&self) -> CellRangeIterator {
        CellRangeIterator {
            range: *self,
            next: Some(self.begin),
        }
    }

    /// Iterate over the columns spanned by the range, left to right
    pub fn columns(&self) -> impl Iterator<Item = ColumnReference> {
        let end = self.end.column();
        std::iter::successors(Some(self.begin.column()), move |c| {
            c.next().filter(|next| *next <= end)
        })
    }

    /// Iterate over the rows spanned by the range, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = RowReference> {
        let end = self.end.row();
        std::iter::successors(Some(self.begin.row()), move |r| {
            r.next().filter(|next| *next <= end)
        })
    }
}

impl From<CellReference> for CellRange {
    fn from(cell: CellReference) -> Self {
        Self::single(cell)
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_cell() {
            write!(f, "{}", self.begin)
        } else {
            write!(f, "{}:{}", self.begin, self.end)
        }
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Iterator over cells in a range
pub struct CellRangeIterator {
    range: CellRange,
    next: Option<CellReference>,
}

impl Iterator for CellRangeIterator {
    type Item = CellReference;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        self.next = if current.column() < self.range.end.column() {
            current
                .column()
                .next()
                .map(|column| CellReference::new(column, current.row()))
        } else if current.row() < self.range.end.row() {
            current
                .row()
                .next()
                .map(|row| CellReference::new(self.range.begin.column(), row))
        } else {
            None
        };

        Some(current)
    }
}
