//! Error types for podshelf.
//!
//! This module defines the centralized error type [`PodshelfError`] and a type alias
//! [`Result`] used by every fallible operation in the crate. Only the edges of the
//! system can fail: the record supplier, configuration and theme loading, the
//! background worker and logging setup. The catalog pipeline itself never returns
//! an error; every odd input resolves to an empty or default value instead.

use thiserror::Error;

/// The main error type for podshelf operations.
///
/// Most variants carry a description of what went wrong. Transport and I/O failures
/// wrap the underlying error via `#[from]` so `?` converts them automatically.
///
/// # Examples
///
/// ```
/// use podshelf::PodshelfError;
///
/// fn validate_page_size(size: usize) -> Result<usize, PodshelfError> {
///     if size == 0 {
///         return Err(PodshelfError::Config("page_size must be positive".to_string()));
///     }
///     Ok(size)
/// }
///
/// assert!(validate_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum PodshelfError {
    /// The record supplier could not produce a list.
    ///
    /// Surfaced to the user as a display-only banner; the catalog keeps working
    /// over an empty record list.
    #[error("Supply error: {0}")]
    Supply(String),

    /// HTTP transport failure while fetching records.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON or TOML payload could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background supply worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or an explicitly named config file is missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for podshelf operations.
pub type Result<T> = std::result::Result<T, PodshelfError>;
