//! Styled text runs, the output of a markup parse.

use figura_core::{
    color::Color,
    style::{FontStyle, FontWeight},
};

/// Style of a run, accumulated from every tag open around it.
///
/// Unset fields inherit from the text node the run is rendered in. Lengths
/// (`size`, `dx`, `dy`) are kept as written so units like `em` survive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStyle {
    pub weight: Option<FontWeight>,
    pub slant: Option<FontStyle>,
    pub fill: Option<Color>,
    pub size: Option<String>,
    pub dx: Option<String>,
    pub dy: Option<String>,
    pub font_family: Option<String>,
    pub is_variable: Option<bool>,
    /// Name of the innermost tag Figura has no built-in meaning for
    pub tag: Option<String>,
    /// Value given to that tag, if any
    pub tag_value: Option<String>,
}

impl RunStyle {
    /// Returns true if no attribute is set
    pub fn is_plain(&self) -> bool {
        *self == RunStyle::default()
    }
}

/// A piece of text with a single style.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    text: String,
    style: RunStyle,
}

impl TextRun {
    pub fn new(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &RunStyle {
        &self.style
    }

    /// Returns true for the run emitted by a `[br]` tag
    pub fn is_line_break(&self) -> bool {
        self.text == "\n"
    }
}
