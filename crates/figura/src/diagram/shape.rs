//! Variant payloads of diagram nodes.

use std::fmt;

use figura_core::{geometry::Size, path::Path, style::TextData};
use figura_markup::TextRun;

use super::Diagram;

/// Source and intrinsic size of an image node.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    pub source: String,
    pub size: Size,
}

/// Styled runs of a multiline text node.
#[derive(Debug, Clone, PartialEq)]
pub struct MultilineData {
    pub runs: Vec<TextRun>,
    /// Multiplier on every run's font size, accumulated by scaling
    pub scale_factor: f32,
}

/// The kind of a node, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Polygon,
    Curve,
    Text,
    Image,
    MultilineText,
    Group,
}

impl Variant {
    /// Returns true for the variants that own a path
    pub fn has_path(self) -> bool {
        matches!(self, Variant::Polygon | Variant::Curve | Variant::Image)
    }

    /// Returns true for the variants that carry text attributes
    pub fn is_text(self) -> bool {
        matches!(self, Variant::Text | Variant::MultilineText)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Polygon => "polygon",
            Variant::Curve => "curve",
            Variant::Text => "text",
            Variant::Image => "image",
            Variant::MultilineText => "multiline text",
            Variant::Group => "group",
        };
        write!(f, "{name}")
    }
}

/// Variant tag plus payload of a node.
#[derive(Debug, PartialEq)]
pub(crate) enum Shape {
    Polygon(Path),
    Curve(Path),
    Image { path: Path, image: ImageData },
    Text(TextData),
    MultilineText { text: TextData, content: MultilineData },
    Group(Vec<Diagram>),
}

impl Shape {
    pub(crate) fn variant(&self) -> Variant {
        match self {
            Shape::Polygon(_) => Variant::Polygon,
            Shape::Curve(_) => Variant::Curve,
            Shape::Image { .. } => Variant::Image,
            Shape::Text(_) => Variant::Text,
            Shape::MultilineText { .. } => Variant::MultilineText,
            Shape::Group(_) => Variant::Group,
        }
    }

    pub(crate) fn path(&self) -> Option<&Path> {
        match self {
            Shape::Polygon(path) | Shape::Curve(path) | Shape::Image { path, .. } => Some(path),
            _ => None,
        }
    }

    pub(crate) fn path_mut(&mut self) -> Option<&mut Path> {
        match self {
            Shape::Polygon(path) | Shape::Curve(path) | Shape::Image { path, .. } => Some(path),
            _ => None,
        }
    }

    pub(crate) fn text_mut(&mut self) -> Option<&mut TextData> {
        match self {
            Shape::Text(text) | Shape::MultilineText { text, .. } => Some(text),
            _ => None,
        }
    }

    pub(crate) fn children(&self) -> &[Diagram] {
        match self {
            Shape::Group(children) => children,
            _ => &[],
        }
    }

    /// Copies the payload. Group children are shared, not copied.
    pub(crate) fn shallow_clone(&self) -> Shape {
        match self {
            Shape::Polygon(path) => Shape::Polygon(path.clone()),
            Shape::Curve(path) => Shape::Curve(path.clone()),
            Shape::Image { path, image } => Shape::Image {
                path: path.clone(),
                image: image.clone(),
            },
            Shape::Text(text) => Shape::Text(text.clone()),
            Shape::MultilineText { text, content } => Shape::MultilineText {
                text: text.clone(),
                content: content.clone(),
            },
            Shape::Group(children) => Shape::Group(children.iter().map(Diagram::share).collect()),
        }
    }
}
