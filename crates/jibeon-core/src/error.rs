//! Validation error types for the jibeon domain primitives.
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations. These errors are never recovered internally: a
//! malformed lot or region code must reach the caller rather than be
//! coerced into a semantically wrong PNU.

use thiserror::Error;

/// Errors from constructing or parsing domain primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Region code does not reduce to exactly 10 digits after stripping
    /// non-digit characters.
    #[error("invalid region code (must reduce to exactly 10 digits): {0}")]
    InvalidRegionCode(String),

    /// No parcel number could be recognized in the lot text.
    #[error("unrecognized lot format (no parcel number found): {0}")]
    LotFormat(String),

    /// PNU string is not 19 digits, or its mountain flag is not 0/1.
    #[error("invalid PNU (expected 19 digits, region + flag + main + sub): {0}")]
    InvalidPnu(String),

    /// Lookup query is empty or whitespace-only.
    #[error("query must contain at least one non-whitespace token")]
    EmptyQuery,
}
