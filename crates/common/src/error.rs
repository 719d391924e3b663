//! Common error types and handling for the Ammaar site

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type shared by the site crates
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get the stable error code used in logs and previews
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Unexpected(_) => "UNEXPECTED_ERROR",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::NotFound(_) => "NOT_FOUND",
            Error::Configuration(_) => "CONFIGURATION_ERROR",
            Error::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the error was caused by caller input rather than the site itself
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::NotFound(_))
    }
}
