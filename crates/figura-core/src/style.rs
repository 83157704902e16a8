//! Style and text attribute definitions.
//!
//! Every diagram node carries a [`Style`] (stroke and fill attributes) and
//! text nodes additionally carry [`TextData`]. Both are *partial*: each
//! attribute is optional, and an unset attribute means "use whatever the
//! renderer or the configured defaults say". [`Style::or`] and
//! [`TextData::or`] resolve a partial value against defaults.
//!
//! # SVG Attribute Mapping
//!
//! Attribute names follow SVG/CSS so that renderers can map them one to one:
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `stroke` | `stroke` | `"black"`, `"none"` |
//! | `fill` | `fill` | `"#ff0000"`, `"none"` |
//! | `stroke_width` | `stroke-width` | `2.0` |
//! | `stroke_linecap` | `stroke-linecap` | `"butt"`, `"round"`, `"square"` |
//! | `stroke_linejoin` | `stroke-linejoin` | `"miter"`, `"round"`, `"bevel"` |
//! | `stroke_dasharray` | `stroke-dasharray` | `"5,5"` |
//! | `vector_effect` | `vector-effect` | `"non-scaling-stroke"` |

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::color::Paint;

// =============================================================================
// Stroke Enums
// =============================================================================

/// Defines how line endpoints are rendered.
///
/// Maps directly to SVG `stroke-linecap` attribute values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint (SVG default)
    #[default]
    Butt,
    /// Rounded cap extending beyond the endpoint by half the stroke width
    Round,
    /// Square cap extending beyond the endpoint by half the stroke width
    Square,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

impl FromStr for StrokeCap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "butt" => Ok(Self::Butt),
            "round" => Ok(Self::Round),
            "square" => Ok(Self::Square),
            _ => Err(format!(
                "invalid stroke cap `{s}`, valid values: butt, round, square"
            )),
        }
    }
}

/// Defines how line corners (joins) are rendered.
///
/// Maps directly to SVG `stroke-linejoin` attribute values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeJoin {
    /// Sharp corner with mitered point (SVG default)
    #[default]
    Miter,
    /// Rounded corner
    Round,
    /// Beveled (cut-off) corner
    Bevel,
}

impl StrokeJoin {
    /// Returns the SVG stroke-linejoin value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

impl FromStr for StrokeJoin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "miter" => Ok(Self::Miter),
            "round" => Ok(Self::Round),
            "bevel" => Ok(Self::Bevel),
            _ => Err(format!(
                "invalid stroke join `{s}`, valid values: miter, round, bevel"
            )),
        }
    }
}

/// SVG `vector-effect` values relevant to strokes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VectorEffect {
    #[default]
    None,
    /// Stroke width stays constant under the renderer's view transform
    NonScalingStroke,
}

impl VectorEffect {
    /// Returns the SVG vector-effect value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::NonScalingStroke => "non-scaling-stroke",
        }
    }
}

// =============================================================================
// Text Enums
// =============================================================================

/// Font weight, mapped to SVG `font-weight`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
    Bolder,
    Lighter,
}

impl FontWeight {
    /// Returns the SVG font-weight value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
            Self::Bolder => "bolder",
            Self::Lighter => "lighter",
        }
    }
}

impl FromStr for FontWeight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "bold" => Ok(Self::Bold),
            "bolder" => Ok(Self::Bolder),
            "lighter" => Ok(Self::Lighter),
            _ => Err(format!(
                "invalid font weight `{s}`, valid values: normal, bold, bolder, lighter"
            )),
        }
    }
}

/// Font slant, mapped to SVG `font-style`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl FontStyle {
    /// Returns the SVG font-style value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
            Self::Oblique => "oblique",
        }
    }
}

impl FromStr for FontStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "italic" => Ok(Self::Italic),
            "oblique" => Ok(Self::Oblique),
            _ => Err(format!(
                "invalid font style `{s}`, valid values: normal, italic, oblique"
            )),
        }
    }
}

/// Horizontal alignment of text relative to its origin (SVG `text-anchor`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    /// Returns the SVG text-anchor value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

impl FromStr for TextAnchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "middle" => Ok(Self::Middle),
            "end" => Ok(Self::End),
            _ => Err(format!(
                "invalid text anchor `{s}`, valid values: start, middle, end"
            )),
        }
    }
}

/// Vertical alignment of text relative to its origin (SVG `dominant-baseline`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DominantBaseline {
    Auto,
    #[default]
    Middle,
    Central,
    Hanging,
    Alphabetic,
}

impl DominantBaseline {
    /// Returns the SVG dominant-baseline value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Middle => "middle",
            Self::Central => "central",
            Self::Hanging => "hanging",
            Self::Alphabetic => "alphabetic",
        }
    }
}

impl FromStr for DominantBaseline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "middle" => Ok(Self::Middle),
            "central" => Ok(Self::Central),
            "hanging" => Ok(Self::Hanging),
            "alphabetic" => Ok(Self::Alphabetic),
            _ => Err(format!(
                "invalid dominant baseline `{s}`, \
                 valid values: auto, middle, central, hanging, alphabetic"
            )),
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_svg_value())
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_svg_value())
    }
}

// =============================================================================
// Attribute Maps
// =============================================================================

/// Partial set of stroke and fill attributes of a node.
///
/// # Examples
///
/// ```
/// # use figura_core::{color::{Color, Paint}, style::Style};
/// let defaults = Style {
///     stroke: Some(Paint::Color(Color::default())),
///     fill: Some(Paint::None),
///     stroke_width: Some(1.0),
///     ..Style::default()
/// };
///
/// let own = Style {
///     fill: Some(Paint::Color(Color::new("red").unwrap())),
///     ..Style::default()
/// };
///
/// let resolved = own.or(&defaults);
/// assert_eq!(resolved.fill, own.fill);
/// assert_eq!(resolved.stroke_width, Some(1.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub stroke: Option<Paint>,
    pub fill: Option<Paint>,
    pub opacity: Option<f32>,
    pub stroke_width: Option<f32>,
    pub stroke_linecap: Option<StrokeCap>,
    pub stroke_linejoin: Option<StrokeJoin>,
    pub stroke_dasharray: Option<Vec<f32>>,
    pub vector_effect: Option<VectorEffect>,
}

impl Style {
    /// Returns a copy where every unset attribute is taken from `defaults`.
    pub fn or(&self, defaults: &Style) -> Style {
        Style {
            stroke: self.stroke.or(defaults.stroke),
            fill: self.fill.or(defaults.fill),
            opacity: self.opacity.or(defaults.opacity),
            stroke_width: self.stroke_width.or(defaults.stroke_width),
            stroke_linecap: self.stroke_linecap.or(defaults.stroke_linecap),
            stroke_linejoin: self.stroke_linejoin.or(defaults.stroke_linejoin),
            stroke_dasharray: self
                .stroke_dasharray
                .clone()
                .or_else(|| defaults.stroke_dasharray.clone()),
            vector_effect: self.vector_effect.or(defaults.vector_effect),
        }
    }

    /// Returns the SVG dasharray value, or None for solid lines
    pub fn dasharray_svg_value(&self) -> Option<String> {
        let dashes = self.stroke_dasharray.as_ref()?;
        if dashes.is_empty() {
            return None;
        }
        Some(
            dashes
                .iter()
                .map(f32::to_string)
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

/// Text content plus partial text attributes.
///
/// For multiline text the `content` is empty and the attributes act as the
/// base style of every run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextData {
    pub content: String,
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    pub text_anchor: Option<TextAnchor>,
    pub dominant_baseline: Option<DominantBaseline>,
    /// Rotation of the glyphs in radians, independent of the origin
    pub angle: Option<f32>,
    /// Multiplier on the font size, accumulated by scaling transforms
    pub font_scale: Option<f32>,
    /// Render as a math variable (italic serif)
    pub is_variable: Option<bool>,
}

impl TextData {
    /// Creates text data with the given content and no attributes
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Returns a copy where every unset attribute is taken from `defaults`.
    ///
    /// The content is never inherited.
    pub fn or(&self, defaults: &TextData) -> TextData {
        TextData {
            content: self.content.clone(),
            font_family: self
                .font_family
                .clone()
                .or_else(|| defaults.font_family.clone()),
            font_size: self.font_size.or(defaults.font_size),
            font_weight: self.font_weight.or(defaults.font_weight),
            font_style: self.font_style.or(defaults.font_style),
            text_anchor: self.text_anchor.or(defaults.text_anchor),
            dominant_baseline: self.dominant_baseline.or(defaults.dominant_baseline),
            angle: self.angle.or(defaults.angle),
            font_scale: self.font_scale.or(defaults.font_scale),
            is_variable: self.is_variable.or(defaults.is_variable),
        }
    }

    /// Effective font size: `font_size * font_scale`, if a size is set
    pub fn scaled_font_size(&self) -> Option<f32> {
        self.font_size
            .map(|size| size * self.font_scale.unwrap_or(1.0))
    }
}
