//! Cells as delivered by the server

use crate::reference::CellReference;
use crate::style::Style;
use crate::value::{CellError, CellValue};

/// A formula and the value it last evaluated to
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Formula {
    /// Formula text as typed (e.g., "=SUM(A1:A10)")
    pub text: String,
    /// Computed value, `None` until evaluated
    pub value: Option<CellValue>,
}

impl Formula {
    /// Create an unevaluated formula
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            value: None,
        }
    }

    /// Set the computed value
    pub fn with_value<V: Into<CellValue>>(mut self, value: V) -> Self {
        self.value = Some(value.into());
        self
    }

    /// The computed error, if the formula evaluated to one
    pub fn error(&self) -> Option<CellError> {
        self.value.as_ref().and_then(CellValue::error)
    }
}

/// A cell: its formula, computed value and style
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Cell {
    /// Where the cell lives
    pub reference: CellReference,
    /// Formula and computed value
    #[cfg_attr(feature = "serde", serde(default))]
    pub formula: Formula,
    /// Cell style, overlaid on the spreadsheet default
    #[cfg_attr(feature = "serde", serde(default))]
    pub style: Style,
    /// Value formatted for display
    #[cfg_attr(feature = "serde", serde(default))]
    pub formatted: Option<String>,
}

impl Cell {
    /// Create a cell with the given formula text
    pub fn new<S: Into<String>>(reference: CellReference, formula: S) -> Self {
        Self {
            reference,
            formula: Formula::new(formula),
            style: Style::default(),
            formatted: None,
        }
    }

    /// Set the computed value
    pub fn with_value<V: Into<CellValue>>(mut self, value: V) -> Self {
        self.formula.value = Some(value.into());
        self
    }

    /// Set the style
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the formatted text
    pub fn with_formatted<S: Into<String>>(mut self, formatted: S) -> Self {
        self.formatted = Some(formatted.into());
        self
    }

    /// The computed value, if any
    pub fn value(&self) -> Option<&CellValue> {
        self.formula.value.as_ref()
    }

    /// Text to paint: formatted text, else the computed value, else the formula text
    pub fn display_text(&self) -> String {
        if let Some(formatted) = &self.formatted {
            return formatted.clone();
        }
        match &self.formula.value {
            Some(value) => value.to_string(),
            None => self.formula.text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a1() -> CellReference {
        CellReference::parse("A1").unwrap()
    }

    #[test]
    fn test_display_text() {
        let cell = Cell::new(a1(), "=1+2");
        assert_eq!(cell.display_text(), "=1+2");
        assert_eq!(cell.value(), None);

        let cell = cell.with_value(3.0);
        assert_eq!(cell.display_text(), "3");

        let cell = cell.with_formatted("3.00");
        assert_eq!(cell.display_text(), "3.00");
    }

    #[test]
    fn test_formula_error() {
        let formula = Formula::new("=1/0").with_value(CellError::Div0);
        assert_eq!(formula.error(), Some(CellError::Div0));
        assert_eq!(Formula::new("=1").with_value(1.0).error(), None);
    }
}
