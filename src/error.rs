//! Error types and handling for the `TourismAI` pipeline

use thiserror::Error;

/// Main error type for the `TourismAI` pipeline.
///
/// Transport and malformed-response errors are recovered locally by the
/// planner (the briefing degrades field by field); only validation errors
/// reach the caller of `plan`.
#[derive(Error, Debug)]
pub enum TourismError {
    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Network or timeout failures talking to an upstream service
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Upstream returned data we could not parse
    #[error("Malformed response: {message}")]
    Malformed { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TourismError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new malformed-response error
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TourismError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TourismError::Transport { .. } => {
                "Unable to reach external services. Please check your internet connection."
                    .to_string()
            }
            TourismError::Malformed { .. } => {
                "An external service returned unexpected data. Please try again later.".to_string()
            }
            TourismError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TourismError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
