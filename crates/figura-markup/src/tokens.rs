//! Markup tokens produced by the lexer.

use std::fmt;

use crate::span::Span;

/// A lexical unit of markup source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'src> {
    /// Literal text between tags
    Text(&'src str),
    /// `[name]` or `[name=value]`
    OpenTag {
        name: &'src str,
        value: Option<&'src str>,
    },
    /// `[/name]`
    CloseTag(&'src str),
    /// `[br]`
    LineBreak,
    Eof,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(text) => write!(f, "text \"{text}\""),
            Token::OpenTag {
                name,
                value: Some(value),
            } => write!(f, "[{name}={value}]"),
            Token::OpenTag { name, value: None } => write!(f, "[{name}]"),
            Token::CloseTag(name) => write!(f, "[/{name}]"),
            Token::LineBreak => write!(f, "[br]"),
            Token::Eof => write!(f, "end of input"),
        }
    }
}

/// A token with its location in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedToken<'src> {
    pub token: Token<'src>,
    pub span: Span,
}

impl<'src> PositionedToken<'src> {
    pub fn new(token: Token<'src>, span: Span) -> Self {
        Self { token, span }
    }
}

impl<'src> std::ops::Deref for PositionedToken<'src> {
    type Target = Token<'src>;

    fn deref(&self) -> &Self::Target {
        &self.token
    }
}
