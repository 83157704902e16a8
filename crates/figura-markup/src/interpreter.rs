//! Tag-stack interpreter turning tokens into styled runs.
//!
//! Every open tag pushes an entry on a stack; a text token becomes a run
//! styled by folding the effects of the whole stack, innermost last. Closing
//! tags must name the stack top.

use figura_core::{
    color::Color,
    style::{FontStyle, FontWeight},
};
use log::trace;

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    run::{RunStyle, TextRun},
    span::Span,
    tokens::{PositionedToken, Token},
};

/// What an open tag does to the runs inside it.
#[derive(Debug, Clone, PartialEq)]
enum TagEffect {
    Bold,
    Italic,
    Fill(Color),
    Size(String),
    Font(String),
    Dx(String),
    Dy(String),
    Variable,
    Custom { name: String, value: Option<String> },
    /// A tag whose value was rejected. It still has to be closed.
    Invalid,
}

impl TagEffect {
    fn apply(&self, style: &mut RunStyle) {
        match self {
            TagEffect::Bold => style.weight = Some(FontWeight::Bold),
            TagEffect::Italic => style.slant = Some(FontStyle::Italic),
            TagEffect::Fill(color) => style.fill = Some(*color),
            TagEffect::Size(size) => style.size = Some(size.clone()),
            TagEffect::Font(family) => style.font_family = Some(family.clone()),
            TagEffect::Dx(dx) => style.dx = Some(dx.clone()),
            TagEffect::Dy(dy) => style.dy = Some(dy.clone()),
            TagEffect::Variable => style.is_variable = Some(true),
            TagEffect::Custom { name, value } => {
                style.tag = Some(name.clone());
                style.tag_value = value.clone();
            }
            TagEffect::Invalid => {}
        }
    }
}

/// Resolve a tag name and value into its effect.
fn tag_effect(name: &str, value: Option<&str>, span: Span) -> Result<TagEffect, Diagnostic> {
    let required = |value: Option<&str>| match value {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(Diagnostic::error(format!("tag `[{name}]` needs a value"))
            .with_code(ErrorCode::E200)
            .with_label(span, ErrorCode::E200.description())
            .with_help(format!("write `[{name}=value]`"))),
    };

    match name {
        "b" | "i" | "var" => {
            if let Some(value) = value {
                return Err(Diagnostic::error(format!("tag `[{name}]` takes no value"))
                    .with_code(ErrorCode::E201)
                    .with_label(span, ErrorCode::E201.description())
                    .with_help(format!("remove `={value}`")));
            }
            Ok(match name {
                "b" => TagEffect::Bold,
                "i" => TagEffect::Italic,
                _ => TagEffect::Variable,
            })
        }
        "color" => {
            let value = required(value)?;
            Color::new(&value).map(TagEffect::Fill).map_err(|err| {
                Diagnostic::error(format!("`{value}` is not a color"))
                    .with_code(ErrorCode::E202)
                    .with_label(span, err)
                    .with_help("use a CSS color such as `red`, `#ff0000` or `rgb(255, 0, 0)`")
            })
        }
        "size" => required(value).map(TagEffect::Size),
        "font" => required(value).map(TagEffect::Font),
        "dx" => required(value).map(TagEffect::Dx),
        "dy" => required(value).map(TagEffect::Dy),
        other => Ok(TagEffect::Custom {
            name: other.to_string(),
            value: value.map(str::to_string),
        }),
    }
}

/// An entry of the tag stack.
#[derive(Debug)]
struct ActiveTag<'a> {
    name: &'a str,
    span: Span,
    effect: TagEffect,
}

struct Interpreter<'a> {
    stack: Vec<ActiveTag<'a>>,
    runs: Vec<TextRun>,
    line_spacing: Option<String>,
    diagnostics: DiagnosticCollector,
}

impl<'a> Interpreter<'a> {
    fn new(line_spacing: Option<&str>) -> Self {
        Self {
            stack: Vec::new(),
            runs: Vec::new(),
            line_spacing: line_spacing.map(str::to_string),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    fn current_style(&self) -> RunStyle {
        self.stack
            .iter()
            .fold(RunStyle::default(), |mut style, active| {
                active.effect.apply(&mut style);
                style
            })
    }

    fn visit(&mut self, positioned: &PositionedToken<'a>) {
        let span = positioned.span;
        match &positioned.token {
            Token::Text(text) => {
                let style = self.current_style();
                self.runs.push(TextRun::new(*text, style));
            }
            Token::LineBreak => {
                let mut style = self.current_style();
                style.dy = self.line_spacing.clone();
                self.runs.push(TextRun::new("\n", style));
            }
            Token::OpenTag { name, value } => {
                let effect = tag_effect(name, *value, span).unwrap_or_else(|diagnostic| {
                    self.diagnostics.emit(diagnostic);
                    TagEffect::Invalid
                });
                self.stack.push(ActiveTag {
                    name: *name,
                    span,
                    effect,
                });
            }
            Token::CloseTag(name) => self.close(name, span),
            Token::Eof => self.close_all(span),
        }
    }

    fn close(&mut self, name: &str, span: Span) {
        match self.stack.pop() {
            None => self.diagnostics.emit(
                Diagnostic::error(format!("closing tag `[/{name}]` has no open tag"))
                    .with_code(ErrorCode::E101)
                    .with_label(span, ErrorCode::E101.description())
                    .with_help(format!("remove it or add `[{name}]` before it")),
            ),
            Some(top) if top.name == name => {}
            Some(top) => self.diagnostics.emit(
                Diagnostic::error(format!(
                    "closing tag `[/{name}]` does not match `[{}]`",
                    top.name
                ))
                .with_code(ErrorCode::E100)
                .with_label(span, format!("expected `[/{}]`", top.name))
                .with_secondary_label(top.span, "opened here")
                .with_help("close the innermost tag first"),
            ),
        }
    }

    fn close_all(&mut self, eof: Span) {
        for active in std::mem::take(&mut self.stack) {
            self.diagnostics.emit(
                Diagnostic::error(format!("tag `[{}]` is never closed", active.name))
                    .with_code(ErrorCode::E102)
                    .with_label(active.span, "opened here")
                    .with_secondary_label(eof, "input ends here")
                    .with_help(format!(
                        "add `[/{}]` after the text it should style",
                        active.name
                    )),
            );
        }
    }

    fn finish(self) -> Result<Vec<TextRun>, ParseError> {
        let Self {
            runs, diagnostics, ..
        } = self;
        diagnostics.finish().map(|()| runs)
    }
}

/// Interpret a token stream into styled runs.
///
/// # Errors
///
/// Returns every nesting and tag value problem found. No runs are returned
/// when there is any error.
pub fn interpret(
    tokens: &[PositionedToken<'_>],
    line_spacing: Option<&str>,
) -> Result<Vec<TextRun>, ParseError> {
    let mut interpreter = Interpreter::new(line_spacing);
    for token in tokens {
        interpreter.visit(token);
    }
    trace!(runs = interpreter.runs.len(); "Interpreted markup");
    interpreter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn runs(source: &str) -> Vec<TextRun> {
        let tokens = tokenize(source).unwrap();
        interpret(&tokens, None).unwrap()
    }

    fn error_codes(source: &str) -> Vec<ErrorCode> {
        let tokens = tokenize(source).unwrap();
        interpret(&tokens, None)
            .unwrap_err()
            .diagnostics()
            .iter()
            .filter_map(Diagnostic::code)
            .collect()
    }

    #[test]
    fn test_nested_styles_accumulate() {
        let runs = runs("[b]bold [i]both[/i][/b]");
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].style().weight, Some(FontWeight::Bold));
        assert_eq!(runs[0].style().slant, None);
        assert_eq!(runs[1].style().weight, Some(FontWeight::Bold));
        assert_eq!(runs[1].style().slant, Some(FontStyle::Italic));
    }

    #[test]
    fn test_inner_value_wins() {
        let runs = runs("[size=10][size=20]x[/size][/size]");
        assert_eq!(runs[0].style().size.as_deref(), Some("20"));
    }

    #[test]
    fn test_valued_tags() {
        let runs =
            runs("[color=red][font=serif][dx=1][dy=2em][var]x[/var][/dy][/dx][/font][/color]");
        let style = runs[0].style();
        assert_eq!(style.fill, Some(Color::new("red").unwrap()));
        assert_eq!(style.font_family.as_deref(), Some("serif"));
        assert_eq!(style.dx.as_deref(), Some("1"));
        assert_eq!(style.dy.as_deref(), Some("2em"));
        assert_eq!(style.is_variable, Some(true));
    }

    #[test]
    fn test_custom_tag() {
        let runs = runs("[link=home]x[/link]");
        assert_eq!(runs[0].style().tag.as_deref(), Some("link"));
        assert_eq!(runs[0].style().tag_value.as_deref(), Some("home"));
    }

    #[test]
    fn test_line_break_uses_line_spacing() {
        let tokens = tokenize("a[br]b").unwrap();
        let runs = interpret(&tokens, Some("1.2em")).unwrap();
        assert_eq!(runs.len(), 3);
        assert!(runs[1].is_line_break());
        assert_eq!(runs[1].style().dy.as_deref(), Some("1.2em"));
        assert_eq!(runs[2].style().dy, None);
    }

    #[test]
    fn test_nesting_errors() {
        assert_eq!(error_codes("[b]x[/i]"), vec![ErrorCode::E100]);
        assert_eq!(error_codes("x[/b]"), vec![ErrorCode::E101]);
        assert_eq!(
            error_codes("[b][i]x"),
            vec![ErrorCode::E102, ErrorCode::E102]
        );
    }

    #[test]
    fn test_value_errors() {
        assert_eq!(error_codes("[color]x[/color]"), vec![ErrorCode::E200]);
        assert_eq!(error_codes("[size=]x[/size]"), vec![ErrorCode::E200]);
        assert_eq!(error_codes("[b=1]x[/b]"), vec![ErrorCode::E201]);
        assert_eq!(error_codes("[color=nope]x[/color]"), vec![ErrorCode::E202]);
    }

    #[test]
    fn test_mismatch_points_at_open_tag() {
        let tokens = tokenize("[b]x[/i]").unwrap();
        let err = interpret(&tokens, None).unwrap_err();
        let labels = err.diagnostics()[0].labels();
        assert_eq!(labels[0].span(), Span::new(4..8));
        assert_eq!(labels[1].span(), Span::new(0..3));
    }
}
