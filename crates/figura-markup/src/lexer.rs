//! Lexical analyzer for inline markup.
//!
//! The lexer splits markup into literal text and bracketed tags. A tag is
//! everything from a `[` to the next `]`; anything else is text, including a
//! lone `]`. The public entry point is [`tokenize`], which reports every tag
//! syntax problem in one pass.

use winnow::{
    Parser as _,
    combinator::{alt, opt, peek, preceded},
    error::{AddContext, ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::{any, rest, take_while},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
    tokens::{PositionedToken, Token},
};

/// Diagnostic information attached to winnow errors via `add_context`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LexerDiagnostic {
    code: ErrorCode,
    message: &'static str,
    help: Option<&'static str>,
    /// The error span covers from `start` to the error position.
    start: usize,
}

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError<LexerDiagnostic>>;

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Build a committed error at the current position.
fn lexer_error(
    input: &Input<'_>,
    diagnostic: LexerDiagnostic,
) -> ErrMode<ContextError<LexerDiagnostic>> {
    ErrMode::Cut(ContextError::new().add_context(input, &input.checkpoint(), diagnostic))
}

/// Parse the text between the brackets of a tag: `/name`, `name` or `name=value`.
///
/// Returns `(is_closing, name, value)`.
fn tag_body<'a>(input: &mut &'a str) -> ModalResult<(bool, &'a str, Option<&'a str>)> {
    (
        opt('/').map(|slash| slash.is_some()),
        take_while(1.., is_name_char),
        opt(preceded('=', rest)),
    )
        .parse_next(input)
}

/// Parse a bracketed tag.
///
/// Once `[` is consumed the lexer is committed: the tag either completes or
/// fails with one of the tag syntax errors.
fn tag<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    let start = input.current_token_start();

    '['.parse_next(input)?;
    let body = take_while(0.., |c: char| c != '[' && c != ']').parse_next(input)?;

    match peek(opt(any)).parse_next(input)? {
        None => Err(lexer_error(
            input,
            LexerDiagnostic {
                code: ErrorCode::E001,
                message: "unterminated tag",
                help: Some("close the tag with `]`"),
                start,
            },
        )),
        Some('[') => Err(lexer_error(
            input,
            LexerDiagnostic {
                code: ErrorCode::E002,
                message: "stray `[` inside a tag",
                help: Some("close the tag with `]` before opening another one"),
                start,
            },
        )),
        Some(_) => {
            ']'.parse_next(input)?;

            let malformed = |message| {
                lexer_error(
                    input,
                    LexerDiagnostic {
                        code: ErrorCode::E003,
                        message,
                        help: Some("tags look like `[name]`, `[name=value]` or `[/name]`"),
                        start,
                    },
                )
            };

            let Ok((closing, name, value)) = tag_body.parse(body) else {
                return Err(malformed("malformed tag"));
            };

            match (closing, value) {
                (true, Some(_)) => Err(malformed("closing tags take no value")),
                (true, None) => Ok(Token::CloseTag(name)),
                (false, None) if name == "br" => Ok(Token::LineBreak),
                (false, value) => Ok(Token::OpenTag { name, value }),
            }
        }
    }
}

/// Parse literal text up to the next `[`.
fn text<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., |c: char| c != '[')
        .map(Token::Text)
        .parse_next(input)
}

/// Parse a single token with position tracking
fn positioned_token<'a>(input: &mut Input<'a>) -> IResult<PositionedToken<'a>> {
    let start_pos = input.current_token_start();

    let token = alt((tag, text)).parse_next(input)?;

    let end_pos = input.current_token_start();
    Ok(PositionedToken::new(token, Span::new(start_pos..end_pos)))
}

/// Lexer that accumulates tokens and diagnostics during tokenization.
struct Lexer<'a> {
    tokens: Vec<PositionedToken<'a>>,
    diagnostics: DiagnosticCollector,
}

impl<'a> Lexer<'a> {
    fn new() -> Self {
        Self {
            tokens: Vec::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    /// Tokenize the input, collecting tokens and errors.
    fn tokenize(&mut self, mut input: Input<'a>) {
        while !input.is_empty() {
            let start_pos = input.current_token_start();
            match positioned_token(&mut input) {
                Ok(token) => self.tokens.push(token),
                Err(e) => {
                    let error_pos = input.current_token_start();
                    self.diagnostics.emit(Self::convert_err_mode(e, error_pos));

                    if error_pos == start_pos && !input.is_empty() {
                        input.next_token();
                    }
                }
            }
        }

        let end = input.current_token_start();
        self.tokens
            .push(PositionedToken::new(Token::Eof, Span::new(end..end)));
    }

    /// Finish lexing and return tokens or collected errors.
    fn finish(self) -> Result<Vec<PositionedToken<'a>>, ParseError> {
        self.diagnostics.finish().map(|()| self.tokens)
    }

    /// Convert an ErrMode and error position to a Diagnostic.
    ///
    /// Falls back to E003 if no diagnostic context is attached.
    fn convert_err_mode(
        err: ErrMode<ContextError<LexerDiagnostic>>,
        error_pos: usize,
    ) -> Diagnostic {
        let context_error = match err {
            ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
            ErrMode::Incomplete(_) => ContextError::new(),
        };

        if let Some(LexerDiagnostic {
            code,
            message,
            help,
            start,
        }) = context_error.context().next()
        {
            let span = Span::new(*start..error_pos);

            let mut diag = Diagnostic::error(*message)
                .with_code(*code)
                .with_label(span, code.description());
            if let Some(h) = help {
                diag = diag.with_help(*h);
            }
            return diag;
        }

        let span = Span::new(error_pos..error_pos.saturating_add(1));
        Diagnostic::error("malformed tag")
            .with_code(ErrorCode::E003)
            .with_label(span, ErrorCode::E003.description())
    }
}

/// Split markup source into tokens, ending with [`Token::Eof`].
///
/// # Errors
///
/// Returns a [`ParseError`] holding one diagnostic per malformed tag.
pub fn tokenize(input: &str) -> Result<Vec<PositionedToken<'_>>, ParseError> {
    let mut lexer = Lexer::new();
    lexer.tokenize(LocatingSlice::new(input));
    lexer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token<'_>> {
        tokenize(input)
            .expect("input should tokenize")
            .into_iter()
            .map(|positioned| positioned.token)
            .collect()
    }

    fn error_codes(input: &str) -> Vec<ErrorCode> {
        tokenize(input)
            .expect_err("input should fail")
            .diagnostics()
            .iter()
            .filter_map(Diagnostic::code)
            .collect()
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(tokens("hello"), vec![Token::Text("hello"), Token::Eof]);
        assert_eq!(tokens(""), vec![Token::Eof]);
    }

    #[test]
    fn test_tags() {
        assert_eq!(
            tokens("a[b]c[/b]"),
            vec![
                Token::Text("a"),
                Token::OpenTag {
                    name: "b",
                    value: None
                },
                Token::Text("c"),
                Token::CloseTag("b"),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_tag_values_keep_spaces() {
        assert_eq!(
            tokens("[font=Times New Roman]"),
            vec![
                Token::OpenTag {
                    name: "font",
                    value: Some("Times New Roman")
                },
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_line_break() {
        assert_eq!(
            tokens("one[br]two"),
            vec![
                Token::Text("one"),
                Token::LineBreak,
                Token::Text("two"),
                Token::Eof
            ]
        );
    }

    #[test]
    fn test_closing_bracket_is_text() {
        assert_eq!(tokens("a]b"), vec![Token::Text("a]b"), Token::Eof]);
    }

    #[test]
    fn test_spans() {
        let positioned = tokenize("ab[i]").unwrap();
        assert_eq!(positioned[0].span, Span::new(0..2));
        assert_eq!(positioned[1].span, Span::new(2..5));
        assert_eq!(positioned[2].span, Span::new(5..5));
    }

    #[test]
    fn test_unterminated_tag() {
        let err = tokenize("text [color=red").unwrap_err();
        let diag = &err.diagnostics()[0];
        assert_eq!(diag.code(), Some(ErrorCode::E001));
        assert_eq!(diag.labels()[0].span(), Span::new(5..15));
    }

    #[test]
    fn test_stray_bracket() {
        assert_eq!(error_codes("[b[i]x"), vec![ErrorCode::E002]);
    }

    #[test]
    fn test_malformed_tags() {
        assert_eq!(error_codes("[]"), vec![ErrorCode::E003]);
        assert_eq!(error_codes("[ b]"), vec![ErrorCode::E003]);
        assert_eq!(error_codes("[/b=1]"), vec![ErrorCode::E003]);
    }

    #[test]
    fn test_reports_every_error() {
        assert_eq!(
            error_codes("[] ok [/x=1] [open"),
            vec![ErrorCode::E003, ErrorCode::E003, ErrorCode::E001]
        );
    }
}
