//! Errors from parsing color strings.

use thiserror::Error;

/// Failure to parse a color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("hex color must have 3, 6 or 8 digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}
