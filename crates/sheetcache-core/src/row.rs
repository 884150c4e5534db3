//! Row types

use crate::reference::RowReference;

/// Row metadata
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    /// Which row
    pub reference: RowReference,
    /// Row is hidden
    #[cfg_attr(feature = "serde", serde(default))]
    pub hidden: bool,
}

impl Row {
    /// Create a visible row
    pub fn new(reference: RowReference) -> Self {
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
