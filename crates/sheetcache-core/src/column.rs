//! Column types

use crate::reference::ColumnReference;

/// Column metadata
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// Which column
    pub reference: ColumnReference,
    /// Column is hidden
    #[cfg_attr(feature = "serde", serde(default))]
    pub hidden: bool,
}

impl Column {
    /// Create a visible column
    pub fn new(reference: ColumnReference) -> Self {
        Self {
            reference,
            hidden: false,
        }
    }

    /// Set hidden
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}
