//! Error codes for markup diagnostics.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Lexer errors (tag syntax)
//! - `E1xx` - Tag nesting errors
//! - `E2xx` - Tag value errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Lexer Errors (E0xx)
    // =========================================================================
    /// Unterminated tag.
    ///
    /// A `[` was found with no `]` before the end of input.
    E001,

    /// Stray bracket.
    ///
    /// A `[` appeared inside a tag, before the `]` that closes it.
    E002,

    /// Malformed tag.
    ///
    /// The text between `[` and `]` is not `name`, `name=value` or `/name`.
    E003,

    // =========================================================================
    // Nesting Errors (E1xx)
    // =========================================================================
    /// Mismatched closing tag.
    ///
    /// A closing tag does not name the innermost open tag.
    E100,

    /// Unexpected closing tag.
    ///
    /// A closing tag was found while no tag is open.
    E101,

    /// Unclosed tag.
    ///
    /// The input ended while a tag was still open.
    E102,

    // =========================================================================
    // Value Errors (E2xx)
    // =========================================================================
    /// Missing tag value.
    ///
    /// Tags such as `color`, `size`, `font`, `dx` and `dy` need `=value`.
    E200,

    /// Unexpected tag value.
    ///
    /// Flag tags such as `b`, `i` and `var` take no value.
    E201,

    /// Invalid color.
    ///
    /// The value of a `color` tag is not a CSS color.
    E202,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unterminated tag",
            ErrorCode::E002 => "stray bracket",
            ErrorCode::E003 => "malformed tag",
            ErrorCode::E100 => "mismatched closing tag",
            ErrorCode::E101 => "unexpected closing tag",
            ErrorCode::E102 => "unclosed tag",
            ErrorCode::E200 => "missing tag value",
            ErrorCode::E201 => "unexpected tag value",
            ErrorCode::E202 => "invalid color",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E102.to_string(), "E102");
        assert_eq!(ErrorCode::E202.to_string(), "E202");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E001.description(), "unterminated tag");
        assert_eq!(ErrorCode::E100.description(), "mismatched closing tag");
        assert_eq!(ErrorCode::E202.description(), "invalid color");
    }
}
