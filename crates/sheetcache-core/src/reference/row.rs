//! Row references

use crate::error::{Error, Result};
use crate::MAX_ROWS;
use std::fmt;
use std::str::FromStr;

/// A row reference (0-based internally, 1-based in display)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowReference(u32);

impl RowReference {
    /// Create a row reference from a 0-based index
    pub fn new(index: u32) -> Result<Self> {
        if index >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(index, MAX_ROWS - 1));
        }
        Ok(Self(index))
    }

    /// The 0-based index
    pub fn index(&self) -> u32 {
        self.0
    }

    /// The next row down, if any
    pub fn next(&self) -> Option<Self> {
        Self::new(self.0.checked_add(1)?).ok()
    }

    /// Parse a 1-based row number with an optional leading `$`
    pub fn parse(s: &str) -> Result<Self> {
        let digits = s.trim();
        let digits = digits.strip_prefix('$').unwrap_or(digits);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidRow(format!("invalid row number in '{}'", s)));
        }

        let row: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidRow(format!("invalid row number in '{}'", s)))?;

        if row == 0 {
            return Err(Error::InvalidRow(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Self::new(row - 1)
    }
}

impl fmt::Display for RowReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

impl FromStr for RowReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
