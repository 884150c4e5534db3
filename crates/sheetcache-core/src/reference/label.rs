//! Label names
//!
//! A label is a named alias for a cell, a cell range or another label. Names are
//! case-insensitive: `Total`, `TOTAL` and `total` are the same label.

use super::CellReference;
use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Longest accepted label name
pub const MAX_LABEL_LEN: usize = 255;

/// A validated label name
///
/// The original spelling is kept for display; equality, ordering and hashing ignore case.
#[derive(Debug, Clone)]
pub struct LabelName {
    name: String,
    key: String,
}

impl LabelName {
    /// Parse and validate a label name
    ///
    /// The first character must be a letter or `_`, the rest letters, digits, `_` or `.`.
    /// Text that reads as a cell reference (such as `A1`) is rejected.
    pub fn parse(s: &str) -> Result<Self> {
        let name = s.trim();

        let mut chars = name.chars();
        match chars.next() {
            None => return Err(Error::InvalidLabel("empty label".into())),
            Some(c) if c.is_alphabetic() || c == '_' => {}
            Some(c) => {
                return Err(Error::InvalidLabel(format!(
                    "invalid first character '{}' in '{}'",
                    c, name
                )))
            }
        }
        if let Some(c) = chars.find(|c| !(c.is_alphanumeric() || *c == '_' || *c == '.')) {
            return Err(Error::InvalidLabel(format!(
                "invalid character '{}' in '{}'",
                c, name
            )));
        }
        if name.chars().count() > MAX_LABEL_LEN {
            return Err(Error::InvalidLabel(format!(
                "label longer than {} characters",
                MAX_LABEL_LEN
            )));
        }
        if looks_like_cell(name) {
            return Err(Error::InvalidLabel(format!(
                "'{}' is a cell reference",
                name
            )));
        }

        Ok(Self {
            name: name.to_string(),
            key: name.to_lowercase(),
        })
    }

    /// The label as originally spelled
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

/// Letters followed by digits, including references past the sheet bounds such as `XFE1`
fn looks_like_cell(name: &str) -> bool {
    if CellReference::parse(name).is_ok() {
        return true;
    }
    let digits = name.trim_start_matches(|c: char| c.is_ascii_alphabetic());
    digits.len() < name.len() && !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl PartialEq for LabelName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for LabelName {}

impl Hash for LabelName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for LabelName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LabelName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for LabelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for LabelName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
