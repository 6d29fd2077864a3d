//! Error types for reference table loading.

use thiserror::Error;

/// Result type alias using [`LibraryError`] as the error type.
pub type LibraryResult<T> = std::result::Result<T, LibraryError>;

/// Errors that can occur while loading a reference table.
///
/// Matching itself never fails - an empty or missing table degrades to
/// `None` results.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The YAML source did not parse into reference entries.
    #[error("reference table parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
