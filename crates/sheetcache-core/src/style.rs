//! Cell styling
//!
//! A [`Style`] is a sparse set of properties: every property is optional so a cell style can be
//! overlaid on a default style with [`Style::merge`].

use std::fmt;

/// A length in pixels
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Length(f64);

impl Length {
    /// A length of `pixels` pixels
    pub fn pixels(pixels: f64) -> Self {
        Self(pixels)
    }

    /// The length in pixels
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

/// Sparse cell style
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct Style {
    /// Width, used as the default column width when this is the spreadsheet style
    pub width: Option<Length>,
    /// Height, used as the default row height when this is the spreadsheet style
    pub height: Option<Length>,
    /// Bold text
    pub bold: Option<bool>,
    /// Italic text
    pub italic: Option<bool>,
    /// Text color (CSS color text)
    pub color: Option<String>,
    /// Background color (CSS color text)
    pub background_color: Option<String>,
    /// Horizontal alignment
    pub text_align: Option<TextAlign>,
}

impl Style {
    /// Create a new empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set width in pixels
    pub fn width(mut self, pixels: f64) -> Self {
        self.width = Some(Length::pixels(pixels));
        self
    }

    /// Set height in pixels
    pub fn height(mut self, pixels: f64) -> Self {
        self.height = Some(Length::pixels(pixels));
        self
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Set font to italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Set text color
    pub fn color<S: Into<String>>(mut self, color: S) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set background color
    pub fn background_color<S: Into<String>>(mut self, color: S) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Set horizontal alignment
    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    /// Check if no property is set
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }

    /// Overlay `other` on this style; properties set in `other` win
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            bold: other.bold.or(self.bold),
            italic: other.italic.or(self.italic),
            color: other.color.clone().or_else(|| self.color.clone()),
            background_color: other
                .background_color
                .clone()
                .or_else(|| self.background_color.clone()),
            text_align: other.text_align.or(self.text_align),
        }
    }
}
