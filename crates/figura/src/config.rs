//! Configuration types for Figura defaults.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`StyleConfig`] - Default stroke and fill attributes of shapes.
//! - [`TextConfig`] - Default font attributes of text.
//! - [`MarkupConfig`] - Options of the markup parser.
//!
//! # Example
//!
//! ```
//! # use figura::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().to_style().is_ok());
//! assert_eq!(config.markup().line_spacing(), None);
//! ```

use serde::Deserialize;

use figura_core::{
    color::Paint,
    style::{DominantBaseline, FontWeight, StrokeCap, StrokeJoin, Style, TextAnchor, TextData},
};

use crate::error::FiguraError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Shape style section.
    #[serde(default)]
    style: StyleConfig,

    /// Text style section.
    #[serde(default)]
    text: TextConfig,

    /// Markup section.
    #[serde(default)]
    markup: MarkupConfig,
}

impl AppConfig {
    pub fn new(style: StyleConfig, text: TextConfig, markup: MarkupConfig) -> Self {
        Self {
            style,
            text,
            markup,
        }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the text configuration.
    pub fn text(&self) -> &TextConfig {
        &self.text
    }

    /// Returns the markup configuration.
    pub fn markup(&self) -> &MarkupConfig {
        &self.markup
    }
}

/// Default stroke and fill attributes.
///
/// Paints are kept as strings until [`StyleConfig::to_style`] validates them,
/// and accept `"none"` as well as any CSS color.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    stroke: Option<String>,

    #[serde(default)]
    fill: Option<String>,

    #[serde(default)]
    stroke_width: Option<f32>,

    #[serde(default)]
    stroke_linecap: Option<StrokeCap>,

    #[serde(default)]
    stroke_linejoin: Option<StrokeJoin>,
}

impl StyleConfig {
    /// Returns the configured defaults as a [`Style`].
    ///
    /// # Errors
    ///
    /// Returns [`FiguraError::Config`] if a paint string cannot be parsed.
    pub fn to_style(&self) -> Result<Style, FiguraError> {
        Ok(Style {
            stroke: parse_paint("stroke", self.stroke.as_deref())?,
            fill: parse_paint("fill", self.fill.as_deref())?,
            stroke_width: self.stroke_width,
            stroke_linecap: self.stroke_linecap,
            stroke_linejoin: self.stroke_linejoin,
            ..Style::default()
        })
    }
}

fn parse_paint(field: &str, value: Option<&str>) -> Result<Option<Paint>, FiguraError> {
    value
        .map(str::parse::<Paint>)
        .transpose()
        .map_err(|err| FiguraError::Config(format!("Invalid {field} in config: {err}")))
}

/// Default font attributes.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TextConfig {
    #[serde(default)]
    font_family: Option<String>,

    #[serde(default)]
    font_size: Option<f32>,

    #[serde(default)]
    font_weight: Option<FontWeight>,

    #[serde(default)]
    text_anchor: Option<TextAnchor>,

    #[serde(default)]
    dominant_baseline: Option<DominantBaseline>,
}

impl TextConfig {
    /// Returns the configured defaults as content-less [`TextData`].
    pub fn to_text_data(&self) -> TextData {
        TextData {
            font_family: self.font_family.clone(),
            font_size: self.font_size,
            font_weight: self.font_weight,
            text_anchor: self.text_anchor,
            dominant_baseline: self.dominant_baseline,
            ..TextData::default()
        }
    }
}

/// Options of the markup parser.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct MarkupConfig {
    /// Vertical offset of a line after `[br]`, as a length such as `"1.2em"`.
    #[serde(default)]
    line_spacing: Option<String>,
}

impl MarkupConfig {
    pub fn line_spacing(&self) -> Option<&str> {
        self.line_spacing.as_deref()
    }
}
