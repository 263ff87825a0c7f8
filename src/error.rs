//! Custom error types for Prunosaurus with improved type safety and error handling.

use thiserror::Error;

/// Main error type for Prunosaurus operations.
#[derive(Error, Debug)]
pub enum PrunosaurusError {
    // Configuration errors
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    #[error("Invalid configuration for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    // Forge/API errors
    #[error("Forge operation failed: {0}")]
    ForgeError(String),

    #[error("API rate limit exceeded")]
    RateLimitExceeded,

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using PrunosaurusError
pub type Result<T> = std::result::Result<T, PrunosaurusError>;

impl PrunosaurusError {
    /// Create a forge error with context
    pub fn forge(msg: impl Into<String>) -> Self {
        Self::ForgeError(msg.into())
    }

    /// Create a missing config error naming the field
    pub fn missing_config(field: impl Into<String>) -> Self {
        Self::MissingConfig(field.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// Implement From for octocrab errors (GitHub API)
impl From<octocrab::Error> for PrunosaurusError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. }
                if source.message.contains("rate limit") =>
            {
                Self::RateLimitExceeded
            }
            _ => Self::ForgeError(format!("GitHub API error: {}", err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let err = PrunosaurusError::forge("API call failed");
        assert_eq!(err.to_string(), "Forge operation failed: API call failed");

        let err = PrunosaurusError::missing_config("INPUT_OWNER");
        assert_eq!(
            err.to_string(),
            "Missing required configuration: INPUT_OWNER"
        );

        let err = PrunosaurusError::invalid_config(
            "INPUT_KEEP_LATEST",
            "must be an integer",
        );
        assert_eq!(
            err.to_string(),
            "Invalid configuration for INPUT_KEEP_LATEST: must be an integer"
        );

        let err = PrunosaurusError::RateLimitExceeded;
        assert_eq!(err.to_string(), "API rate limit exceeded");
    }

    #[test]
    fn test_error_helpers() {
        let err = PrunosaurusError::forge("API call failed");
        assert!(matches!(err, PrunosaurusError::ForgeError(_)));

        let err = PrunosaurusError::missing_config("GITHUB_TOKEN");
        assert!(matches!(err, PrunosaurusError::MissingConfig(_)));

        let err = PrunosaurusError::invalid_config("INPUT_KEEP_LATEST", "neg");
        assert!(matches!(err, PrunosaurusError::InvalidConfig { .. }));
    }
}
