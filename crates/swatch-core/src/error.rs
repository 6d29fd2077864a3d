//! Error types for core color values.
//!
//! The value types in this crate are total over their documented input
//! domains, so errors only surface at the strict parsing boundary where a
//! caller has asked to be told about malformed input instead of receiving
//! the sentinel fallback.

use thiserror::Error;

/// Result type alias using [`CoreError`] as the error type.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Errors produced by strict color value parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Input is not `#` followed by exactly 3 or 6 hex digits.
    ///
    /// Only returned by the strict entry points ([`TryFrom`] on
    /// [`HexColor`](crate::HexColor)); the lossy paths normalize the same
    /// input to the black sentinel instead.
    #[error("invalid hex color literal: {input:?}")]
    InvalidHex {
        /// The rejected input string.
        input: String,
    },
}

impl CoreError {
    /// Creates an [`CoreError::InvalidHex`] error.
    #[inline]
    pub fn invalid_hex(input: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
        }
    }
}
