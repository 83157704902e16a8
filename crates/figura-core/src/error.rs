//! Error types for path operations.

use thiserror::Error;

/// Contract violations raised by [`Path`](crate::path::Path) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("a path needs at least one point")]
    Empty,

    #[error("parameter {t} is outside [0, 1]")]
    ParameterOutOfRange { t: f32 },

    #[error("segment index {index} is out of range for a path with {segments} segment(s)")]
    SegmentOutOfRange { index: usize, segments: usize },
}
