//! Error types for Figura operations.
//!
//! [`FiguraError`] covers contract violations of diagram operations, invalid
//! configuration, and rejected markup.

use thiserror::Error;

use figura_core::error::PathError;
use figura_markup::ParseError;

use crate::diagram::Variant;

/// The main error type for Figura operations.
///
/// # Diagnostic Variants
///
/// The `Markup` variant keeps the markup source next to the diagnostics so
/// callers can render labelled spans.
#[derive(Debug, Error)]
pub enum FiguraError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error("unknown anchor `{0}`")]
    UnknownAnchor(String),

    #[error("{variant} nodes have no path")]
    NoPath { variant: Variant },

    #[error("{variant} nodes cannot be sampled along a path")]
    NotParametrizable { variant: Variant },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{err}")]
    Markup { err: ParseError, src: String },
}

impl FiguraError {
    /// Create a new `Markup` error with the associated source text.
    pub fn new_markup_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Markup {
            err,
            src: src.into(),
        }
    }
}
