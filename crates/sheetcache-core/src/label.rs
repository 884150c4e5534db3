//! Label mappings
//!
//! A label mapping gives a name to a cell, a cell range or another label:
//!
//! ```text
//! TaxRate  -> B1
//! Sales    -> C2:C20
//! Revenue  -> Sales
//! ```
//!
//! Chains of labels are followed by the viewport cache until they reach a cell or range.

use crate::error::{Error, Result};
use crate::reference::LabelName;
use crate::selection::Selection;

/// A label and what it points at
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabelMapping {
    label: LabelName,
    target: Selection,
}

impl LabelMapping {
    /// Create a mapping; a label may not target itself
    pub fn new(label: LabelName, target: Selection) -> Result<Self> {
        if target.as_label() == Some(&label) {
            return Err(Error::SelfReferencingLabel(label.to_string()));
        }
        Ok(Self { label, target })
    }

    /// Parse both sides from text
    ///
    /// # Examples
    /// ```
    /// use sheetcache_core::LabelMapping;
    ///
    /// let mapping = LabelMapping::parse("Sales", "C2:C20").unwrap();
    /// assert_eq!(mapping.to_string(), "Sales=C2:C20");
    /// assert!(LabelMapping::parse("Loop", "loop").is_err());
    /// ```
    pub fn parse(label: &str, target: &str) -> Result<Self> {
        Self::new(LabelName::parse(label)?, Selection::parse(target)?)
    }

    /// The label being defined
    pub fn label(&self) -> &LabelName {
        &self.label
    }

    /// What the label points at
    pub fn target(&self) -> &Selection {
        &self.target
    }

    /// Whether the target is itself a label
    pub fn targets_label(&self) -> bool {
        self.target.is_label()
    }
}

impl std::fmt::Display for LabelMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.label, self.target)
    }
}
