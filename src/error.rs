// src/error.rs

//! Unified error handling for the cruise search application.

use thiserror::Error;

/// Result type alias for cruise search operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The itinerary API answered with a non-success status
    #[error("API Error: {status}")]
    Api { status: u16 },

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_names_status() {
        let err = AppError::Api { status: 503 };
        assert_eq!(err.to_string(), "API Error: 503");
    }

    #[test]
    fn helpers_wrap_messages() {
        assert!(matches!(AppError::config("x"), AppError::Config(m) if m == "x"));
        assert_eq!(
            AppError::validation("bad date").to_string(),
            "Validation error: bad date"
        );
    }
}
