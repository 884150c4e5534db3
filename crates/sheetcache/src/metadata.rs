//! Spreadsheet metadata

use serde::{Deserialize, Serialize};
use sheetcache_core::Style;

/// The subset of spreadsheet metadata the viewport needs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpreadsheetMetadata {
    /// Spreadsheet id
    pub id: Option<String>,
    /// Spreadsheet name
    pub name: Option<String>,
    /// Spreadsheet-wide default style
    pub style: Style,
}

impl SpreadsheetMetadata {
    /// Create metadata with the given default style
    pub fn new(style: Style) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Default column width in pixels, if the style sets one
    pub fn effective_width(&self) -> Option<f64> {
        self.style.width.map(|w| w.value())
    }

    /// Default row height in pixels, if the style sets one
    pub fn effective_height(&self) -> Option<f64> {
        self.style.height.map(|h| h.value())
    }
}
