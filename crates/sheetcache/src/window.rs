//! The visible window
//!
//! A window is the set of cell ranges currently painted (frozen panes add extra ranges). It
//! filters which cells and label memberships the cache keeps.

use crate::Result;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use sheetcache_core::{
    CellRange, CellReference, ColumnReference, NonLabelSelection, RowReference,
};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// The cell ranges currently visible
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Window {
    ranges: Vec<CellRange>,
}

impl Window {
    /// The empty window, which filters nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a window from ranges; duplicates are dropped, order is kept
    pub fn new<I: IntoIterator<Item = CellRange>>(ranges: I) -> Self {
        let mut seen = BTreeSet::new();
        let ranges = ranges.into_iter().filter(|r| seen.insert(*r)).collect();
        Self { ranges }
    }

    /// Parse a comma separated list of ranges, e.g. `A1:C3,E5:F6`; blank text is empty
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::empty());
        }
        let ranges = s
            .split(',')
            .map(CellRange::parse)
            .collect::<sheetcache_core::Result<Vec<_>>>()?;
        Ok(Self::new(ranges))
    }

    /// Check if the window has no ranges
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// The ranges making up the window
    pub fn ranges(&self) -> &[CellRange] {
        &self.ranges
    }

    /// Check if any range contains the cell
    pub fn contains(&self, cell: &CellReference) -> bool {
        self.ranges.iter().any(|r| r.contains(cell))
    }

    /// Check if any range overlaps `range`
    pub fn overlaps(&self, range: &CellRange) -> bool {
        self.ranges.iter().any(|r| r.overlaps(range))
    }

    /// Whether a cell or range passes the window filter; an empty window passes everything
    pub fn test(&self, selection: &NonLabelSelection) -> bool {
        if self.is_empty() {
            return true;
        }
        match selection {
            NonLabelSelection::Cell(cell) => self.contains(cell),
            NonLabelSelection::CellRange(range) => self.overlaps(range),
        }
    }

    /// Every column spanned by the window, sorted and deduplicated
    pub fn columns(&self) -> Vec<ColumnReference> {
        self.ranges
            .iter()
            .flat_map(|r| r.columns())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every row spanned by the window, sorted and deduplicated
    pub fn rows(&self) -> Vec<RowReference> {
        self.ranges
            .iter()
            .flat_map(|r| r.rows())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Check if the column is spanned by any range
    pub fn contains_column(&self, column: ColumnReference) -> bool {
        self.ranges.iter().any(|r| r.contains_column(column))
    }

    /// Check if the row is spanned by any range
    pub fn contains_row(&self, row: RowReference) -> bool {
        self.ranges.iter().any(|r| r.contains_row(row))
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", range)?;
        }
        Ok(())
    }
}

impl FromStr for Window {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Window {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Window {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Window::parse(&text).map_err(de::Error::custom)
    }
}
