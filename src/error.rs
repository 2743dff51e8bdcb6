//! Input-validation errors.
//!
//! Every failure the crate can report is an input problem detected before
//! any algorithm runs. Geometric degeneracy (a zero-length clip segment,
//! a segment fully outside the clip region) is *not* an error — those
//! cases come back as `None` from the clipping functions.

use thiserror::Error;

/// An input-validation failure.
///
/// Carries enough context (the offending field or token count) for a
/// caller to build a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A coordinate or count field did not parse as a number.
    #[error("invalid value for {field}: {value:?}")]
    InvalidNumber { field: String, value: String },

    /// The input ended before a required field.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    /// The clip-region line had neither 4 tokens (rectangle) nor 1
    /// token (polygon vertex count).
    #[error("clip region must be 4 numbers (rectangle) or a vertex count (polygon), got {tokens} tokens")]
    MalformedRegion { tokens: usize },

    /// Circle radius must be strictly positive.
    #[error("circle radius must be positive, got {radius}")]
    NonPositiveRadius { radius: i32 },

    /// A polygon needs at least 3 vertices.
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },
}
