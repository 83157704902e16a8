//! Style and text attribute mutators.
//!
//! Every mutator walks the whole subtree and only touches the variants it
//! applies to: stroke and fill attributes land on polygons and curves, text
//! attributes on text nodes. Opacity applies to every node.

use figura_core::{
    color::Paint,
    style::{
        DominantBaseline, FontStyle, FontWeight, StrokeCap, StrokeJoin, Style, TextAnchor, TextData,
        VectorEffect,
    },
};

use super::{Diagram, DiagramNode, Shape, Variant};

fn is_stroked(variant: Variant) -> bool {
    matches!(variant, Variant::Polygon | Variant::Curve)
}

impl Diagram {
    fn restyle(&self, applies: fn(Variant) -> bool, f: impl Fn(&mut DiagramNode)) -> Diagram {
        self.rewrite(&|node| applies(node.variant()), &f)
    }

    fn restyle_text(&self, f: impl Fn(&mut TextData)) -> Diagram {
        self.rewrite(
            &|node| node.variant().is_text(),
            &|node| {
                if let Some(text) = node.shape.text_mut() {
                    f(text);
                }
            },
        )
    }
}

// =============================================================================
// Path Styles
// =============================================================================

impl Diagram {
    pub fn fill(&self, paint: impl Into<Paint>) -> Diagram {
        let paint = paint.into();
        self.restyle(is_stroked, |node| node.style.fill = Some(paint))
    }

    pub fn stroke(&self, paint: impl Into<Paint>) -> Diagram {
        let paint = paint.into();
        self.restyle(is_stroked, |node| node.style.stroke = Some(paint))
    }

    /// Sets the opacity of every node of the subtree.
    pub fn opacity(&self, opacity: f32) -> Diagram {
        self.restyle(|_| true, |node| node.style.opacity = Some(opacity))
    }

    pub fn stroke_width(&self, width: f32) -> Diagram {
        self.restyle(is_stroked, |node| node.style.stroke_width = Some(width))
    }

    pub fn stroke_linecap(&self, cap: StrokeCap) -> Diagram {
        self.restyle(is_stroked, |node| node.style.stroke_linecap = Some(cap))
    }

    pub fn stroke_linejoin(&self, join: StrokeJoin) -> Diagram {
        self.restyle(is_stroked, |node| node.style.stroke_linejoin = Some(join))
    }

    /// Sets the dash pattern. An empty pattern draws solid lines.
    pub fn stroke_dasharray(&self, dashes: impl Into<Vec<f32>>) -> Diagram {
        let dashes = dashes.into();
        self.restyle(is_stroked, |node| {
            node.style.stroke_dasharray = Some(dashes.clone())
        })
    }

    pub fn vector_effect(&self, effect: VectorEffect) -> Diagram {
        self.restyle(is_stroked, |node| node.style.vector_effect = Some(effect))
    }
}

// =============================================================================
// Text Styles
// =============================================================================

impl Diagram {
    /// Sets the glyph fill of text nodes.
    pub fn text_fill(&self, paint: impl Into<Paint>) -> Diagram {
        let paint = paint.into();
        self.restyle(Variant::is_text, |node| node.style.fill = Some(paint))
    }

    /// Sets the glyph outline of text nodes.
    pub fn text_stroke(&self, paint: impl Into<Paint>) -> Diagram {
        let paint = paint.into();
        self.restyle(Variant::is_text, |node| node.style.stroke = Some(paint))
    }

    pub fn text_stroke_width(&self, width: f32) -> Diagram {
        self.restyle(Variant::is_text, |node| {
            node.style.stroke_width = Some(width)
        })
    }

    pub fn font_family(&self, family: &str) -> Diagram {
        self.restyle_text(|text| text.font_family = Some(family.to_string()))
    }

    pub fn font_size(&self, size: f32) -> Diagram {
        self.restyle_text(|text| text.font_size = Some(size))
    }

    pub fn font_weight(&self, weight: FontWeight) -> Diagram {
        self.restyle_text(|text| text.font_weight = Some(weight))
    }

    pub fn font_style(&self, style: FontStyle) -> Diagram {
        self.restyle_text(|text| text.font_style = Some(style))
    }

    /// Overrides the accumulated font scale.
    pub fn font_scale(&self, scale: f32) -> Diagram {
        self.restyle_text(|text| text.font_scale = Some(scale))
    }

    pub fn text_anchor(&self, anchor: TextAnchor) -> Diagram {
        self.restyle_text(|text| text.text_anchor = Some(anchor))
    }

    pub fn text_baseline(&self, baseline: DominantBaseline) -> Diagram {
        self.restyle_text(|text| text.dominant_baseline = Some(baseline))
    }

    /// Rotates the glyphs by `angle` radians without moving the origin.
    pub fn text_angle(&self, angle: f32) -> Diagram {
        self.restyle_text(|text| text.angle = Some(angle))
    }

    /// Marks text to be rendered as a math variable.
    pub fn text_var(&self, is_variable: bool) -> Diagram {
        self.restyle_text(|text| text.is_variable = Some(is_variable))
    }

    /// Replaces the content of single-line text nodes.
    pub fn set_text(&self, content: &str) -> Diagram {
        self.restyle(
            |variant| variant == Variant::Text,
            |node| {
                if let Shape::Text(text) = &mut node.shape {
                    text.content = content.to_string();
                }
            },
        )
    }

    /// Fills every unset attribute of the subtree from defaults.
    ///
    /// `style` applies to polygons and curves, except its opacity which
    /// reaches every node but groups. `text` applies to text nodes. Values
    /// already set on a node win.
    pub fn with_default_style(&self, style: &Style, text: &TextData) -> Diagram {
        self.rewrite(
            &|node| node.variant() != Variant::Group,
            &|node| {
                if is_stroked(node.variant()) {
                    node.style = node.style.or(style);
                } else {
                    node.style.opacity = node.style.opacity.or(style.opacity);
                }
                if let Some(own) = node.shape.text_mut() {
                    *own = own.or(text);
                }
            },
        )
    }
}
