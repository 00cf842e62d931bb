//! Error types for the hand tracking library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Required collaborator (acquisition source, placement target) not bound
    /// before the frame loop was started
    #[error("Missing collaborator: {0}")]
    MissingCollaborator(String),

    /// No active camera/view transform available when centroid mapping was
    /// attempted; the frame's placement update is skipped
    #[error("No active view context for centroid mapping")]
    MissingViewContext,

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic I/O error with description
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Application-specific error type (alias for main Error type)
pub type AppError = Error;

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_alias_is_main_error_type() {
        let err: Error = AppError::MissingCollaborator("placement sink".to_string());
        assert!(matches!(err, Error::MissingCollaborator(_)));
        assert!(err.to_string().contains("placement sink"));
    }
}
