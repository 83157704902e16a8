//! Plain-text listing of the styled runs of a multiline text node.

use std::fmt::Write;

use figura::Diagram;
use figura_core::style::TextData;
use figura_markup::{RunStyle, TextRun};

/// Renders one line per run, preceded by the base text attributes.
///
/// A run line is the quoted text followed by its attributes as
/// `name=value` pairs; line breaks print as `[br]`.
pub fn render_listing(diagram: &Diagram) -> String {
    let mut out = String::new();
    if let Some(text) = diagram.text_data() {
        let base = base_attributes(&text);
        if !base.is_empty() {
            writeln!(out, "base: {}", base.join(" "))
                .expect("Writing to String buffer is infallible");
        }
    }

    let runs = diagram
        .multiline_data()
        .map(|data| data.runs)
        .unwrap_or_default();
    for run in &runs {
        writeln!(out, "{}", run_line(run)).expect("Writing to String buffer is infallible");
    }
    out
}

fn base_attributes(text: &TextData) -> Vec<String> {
    let mut attrs = Vec::new();
    if let Some(family) = &text.font_family {
        attrs.push(format!("font-family={family}"));
    }
    if let Some(size) = text.scaled_font_size() {
        attrs.push(format!("font-size={size}"));
    }
    if let Some(weight) = text.font_weight {
        attrs.push(format!("font-weight={weight}"));
    }
    if let Some(anchor) = text.text_anchor {
        attrs.push(format!("text-anchor={}", anchor.to_svg_value()));
    }
    if let Some(baseline) = text.dominant_baseline {
        attrs.push(format!("dominant-baseline={}", baseline.to_svg_value()));
    }
    attrs
}

fn run_line(run: &TextRun) -> String {
    let head = if run.is_line_break() {
        "[br]".to_string()
    } else {
        format!("{:?}", run.text())
    };
    let attrs = style_attributes(run.style());
    if attrs.is_empty() {
        head
    } else {
        format!("{head} {}", attrs.join(" "))
    }
}

fn style_attributes(style: &RunStyle) -> Vec<String> {
    let mut attrs = Vec::new();
    if let Some(weight) = style.weight {
        attrs.push(format!("font-weight={weight}"));
    }
    if let Some(slant) = style.slant {
        attrs.push(format!("font-style={slant}"));
    }
    if let Some(fill) = style.fill {
        attrs.push(format!("fill={fill}"));
    }
    let lengths = [
        ("font-size", &style.size),
        ("font-family", &style.font_family),
        ("dx", &style.dx),
        ("dy", &style.dy),
    ];
    for (name, value) in lengths {
        if let Some(value) = value {
            attrs.push(format!("{name}={value}"));
        }
    }
    if style.is_variable == Some(true) {
        attrs.push("var".to_string());
    }
    if let Some(tag) = &style.tag {
        match &style.tag_value {
            Some(value) => attrs.push(format!("tag={tag}:{value}")),
            None => attrs.push(format!("tag={tag}")),
        }
    }
    attrs
}
