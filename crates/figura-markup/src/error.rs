//! Diagnostic error system for the markup parser.
//!
//! Markup failures are reported as values, never as panics. Each problem is a
//! [`Diagnostic`] with an [`ErrorCode`], one or more labelled source spans and
//! optional help text. All diagnostics of a failed parse are wrapped in a
//! [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use figura_markup::error::{Diagnostic, ErrorCode};
//! # use figura_markup::Span;
//!
//! let diag = Diagnostic::error("closing tag `[/i]` does not match `[b]`")
//!     .with_code(ErrorCode::E100)
//!     .with_label(Span::new(9..13), "expected `[/b]`")
//!     .with_secondary_label(Span::new(0..3), "opened here");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
