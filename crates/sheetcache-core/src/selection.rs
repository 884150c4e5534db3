//! Selections: what a label, a navigation target or a lookup can point at

use crate::error::{Error, Result};
use crate::range::CellRange;
use crate::reference::{CellReference, LabelName};
use std::fmt;
use std::str::FromStr;

/// A cell, a cell range or a label
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Selection {
    /// A single cell
    Cell(CellReference),
    /// A rectangular range of cells
    CellRange(CellRange),
    /// A label, which resolves to another selection
    Label(LabelName),
}

impl Selection {
    /// Parse a selection, trying cell, then cell range, then label
    ///
    /// # Examples
    /// ```
    /// use sheetcache_core::Selection;
    ///
    /// assert!(matches!(Selection::parse("B2").unwrap(), Selection::Cell(_)));
    /// assert!(matches!(Selection::parse("A1:C3").unwrap(), Selection::CellRange(_)));
    /// assert!(matches!(Selection::parse("Total").unwrap(), Selection::Label(_)));
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(cell) = CellReference::parse(s) {
            return Ok(Selection::Cell(cell));
        }
        if s.contains(':') {
            return CellRange::parse(s)
                .map(Selection::CellRange)
                .map_err(|_| Error::InvalidSelection(s.to_string()));
        }
        LabelName::parse(s)
            .map(Selection::Label)
            .map_err(|_| Error::InvalidSelection(s.to_string()))
    }

    /// Check if this selection is a label
    pub fn is_label(&self) -> bool {
        matches!(self, Selection::Label(_))
    }

    /// The label, if this selection is one
    pub fn as_label(&self) -> Option<&LabelName> {
        match self {
            Selection::Label(label) => Some(label),
            _ => None,
        }
    }

    /// Narrow to a cell or cell range, `None` for labels
    pub fn non_label(&self) -> Option<NonLabelSelection> {
        match self {
            Selection::Cell(cell) => Some(NonLabelSelection::Cell(*cell)),
            Selection::CellRange(range) => Some(NonLabelSelection::CellRange(*range)),
            Selection::Label(_) => None,
        }
    }
}

impl From<CellReference> for Selection {
    fn from(cell: CellReference) -> Self {
        Selection::Cell(cell)
    }
}

impl From<CellRange> for Selection {
    fn from(range: CellRange) -> Self {
        Selection::CellRange(range)
    }
}

impl From<LabelName> for Selection {
    fn from(label: LabelName) -> Self {
        Selection::Label(label)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Cell(cell) => write!(f, "{}", cell),
            Selection::CellRange(range) => write!(f, "{}", range),
            Selection::Label(label) => write!(f, "{}", label),
        }
    }
}

impl FromStr for Selection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A selection that is known not to be a label: where label resolution ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NonLabelSelection {
    /// A single cell
    Cell(CellReference),
    /// A rectangular range of cells
    CellRange(CellRange),
}

impl NonLabelSelection {
    /// The covered cells as a range (a single-cell range for cells)
    pub fn to_range(&self) -> CellRange {
        match self {
            NonLabelSelection::Cell(cell) => CellRange::single(*cell),
            NonLabelSelection::CellRange(range) => *range,
        }
    }
}

impl From<NonLabelSelection> for Selection {
    fn from(selection: NonLabelSelection) -> Self {
        match selection {
            NonLabelSelection::Cell(cell) => Selection::Cell(cell),
            NonLabelSelection::CellRange(range) => Selection::CellRange(range),
        }
    }
}

impl fmt::Display for NonLabelSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NonLabelSelection::Cell(cell) => write!(f, "{}", cell),
            NonLabelSelection::CellRange(range) => write!(f, "{}", range),
        }
    }
}

impl FromStr for NonLabelSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Selection::parse(s)?
            .non_label()
            .ok_or_else(|| Error::InvalidSelection(format!("'{}' is a label", s.trim())))
    }
}
