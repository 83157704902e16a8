//! # Figura Markup
//!
//! Parser for the inline markup used in multiline text. Markup is plain text
//! with bracketed tags:
//!
//! | Tag | Effect |
//! |-----|--------|
//! | `[b]...[/b]` | bold |
//! | `[i]...[/i]` | italic |
//! | `[color=red]...[/color]` | fill color |
//! | `[size=12]`, `[font=serif]` | font size and family |
//! | `[dx=2]`, `[dy=-1em]` | glyph offsets |
//! | `[var]...[/var]` | math variable |
//! | `[br]` | line break |
//!
//! Any other tag name is carried through to the run as a custom tag.
//!
//! ## Usage
//!
//! ```
//! # use figura_markup::{parse, ParseError};
//! fn main() -> Result<(), ParseError> {
//!     let runs = parse("plain [b]bold[/b] tail", None)?;
//!     assert_eq!(runs.len(), 3);
//!     assert_eq!(runs[1].text(), "bold");
//!     Ok(())
//! }
//! ```

pub mod error;
mod interpreter;
mod lexer;
mod run;
mod span;
mod tokens;

pub use error::ParseError;
pub use run::{RunStyle, TextRun};
pub use span::Span;

use log::{debug, warn};

/// Parse markup into styled text runs.
///
/// The pipeline has two steps:
///
/// 1. **Tokenize** - split the source into text and tags
/// 2. **Interpret** - track open tags and style each piece of text
///
/// `line_spacing` becomes the `dy` of the run emitted for every `[br]`.
///
/// # Errors
///
/// Returns a [`ParseError`] with all diagnostics of the failing step. A failed
/// parse never yields partial runs.
pub fn parse(source: &str, line_spacing: Option<&str>) -> Result<Vec<TextRun>, ParseError> {
    let result = lexer::tokenize(source)
        .and_then(|tokens| interpreter::interpret(&tokens, line_spacing));

    match &result {
        Ok(runs) => debug!(runs = runs.len(); "Parsed markup"),
        Err(err) => warn!(diagnostics = err.diagnostics().len(); "Markup rejected: {err}"),
    }

    result
}
