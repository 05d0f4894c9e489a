//! Error types for facetfolio.
//!
//! This module defines the centralized error type [`FacetfolioError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. Collection views never
//! fail; errors only arise at the edges where content is persisted or configuration is
//! loaded.

use thiserror::Error;

/// The main error type for facetfolio operations.
///
/// Variants cover the storage backends, raw filesystem access, and configuration
/// loading. I/O errors convert automatically via `#[from]`.
///
/// # Examples
///
/// ```
/// use facetfolio::FacetfolioError;
///
/// fn load_config() -> Result<(), FacetfolioError> {
///     Err(FacetfolioError::Config("data_dir must not be empty".to_string()))
/// }
///
/// assert!(load_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum FacetfolioError {
    /// Storage operation failed.
    ///
    /// Occurs when a repository cannot parse, serialize, or locate its records.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for facetfolio operations.
pub type Result<T> = std::result::Result<T, FacetfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_and_display() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: FacetfolioError = io.into();
        assert_eq!(err.to_string(), "IO error: gone");
    }

    #[test]
    fn storage_error_display() {
        let err = FacetfolioError::Storage("failed to parse JSON".into());
        assert_eq!(err.to_string(), "Storage error: failed to parse JSON");
    }
}
