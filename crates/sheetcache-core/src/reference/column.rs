//! Column references

use crate::error::{Error, Result};
use crate::MAX_COLS;
use std::fmt;
use std::str::FromStr;

/// A column reference (e.g., "A", "XFD")
///
/// Stored 0-based (A=0, B=1, ..., XFD=16383).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnReference(u16);

impl ColumnReference {
    /// Create a column reference from a 0-based index
    pub fn new(index: u16) -> Result<Self> {
        if index >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(index as u32, MAX_COLS - 1));
        }
        Ok(Self(index))
    }

    /// The 0-based index
    pub fn index(&self) -> u16 {
        self.0
    }

    /// The next column to the right, if any
    pub fn next(&self) -> Option<Self> {
        Self::new(self.0.checked_add(1)?).ok()
    }

    /// Parse column letters (case insensitive, optional leading `$`)
    pub fn parse(s: &str) -> Result<Self> {
        let letters = s.trim();
        let letters = letters.strip_prefix('$').unwrap_or(letters);
        if letters.is_empty() {
            return Err(Error::InvalidColumn(format!("empty column in '{}'", s)));
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidColumn(format!(
                    "invalid column letter '{}' in '{}'",
                    c, s
                )));
            }
            col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
            if col > MAX_COLS as u32 {
                return Err(Error::ColumnOutOfBounds(col - 1, MAX_COLS - 1));
            }
        }

        Ok(Self((col - 1) as u16))
    }

    /// Format as column letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn to_letters(&self) -> String {
        let mut result = String::new();
        let mut n = self.0 as u32 + 1;

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }
}

impl fmt::Display for ColumnReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_letters())
    }
}

impl FromStr for ColumnReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(index: u16) -> ColumnReference {
        ColumnReference::new(index).unwrap()
    }

    #[test]
    fn test_to_letters() {
        assert_eq!(col(0).to_string(), "A");
        assert_eq!(col(25).to_string(), "Z");
        assert_eq!(col(26).to_string(), "AA");
        assert_eq!(col(701).to_string(), "ZZ");
        assert_eq!(col(702).to_string(), "AAA");
        assert_eq!(col(16383).to_string(), "XFD");
    }

    #[test]
    fn test_parse() {
        assert_eq!(ColumnReference::parse("A").unwrap(), col(0));
        assert_eq!(ColumnReference::parse("ab").unwrap(), col(27));
        assert_eq!(ColumnReference::parse("$C").unwrap(), col(2));
        assert_eq!(ColumnReference::parse("XFD").unwrap(), col(16383));
    }

    #[test]
    fn test_parse_errors() {
        assert!(ColumnReference::parse("").is_err());
        assert!(ColumnReference::parse("A1").is_err());
        assert!(matches!(
            ColumnReference::parse("XFE"),
            Err(Error::ColumnOutOfBounds(..))
        ));
        assert!(ColumnReference::parse("ZZZZZZZZ").is_err());
    }

    #[test]
    fn test_new_out_of_bounds() {
        assert!(ColumnReference::new(16384).is_err());
        assert_eq!(col(16383).next(), None);
        assert_eq!(col(0).next(), Some(col(1)));
    }
}
