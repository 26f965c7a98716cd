//! Error types and handling for the `TravelGuide` service

use thiserror::Error;

/// Main error type for the `TravelGuide` service
#[derive(Error, Debug)]
pub enum TravelGuideError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// A referenced record does not exist
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Storage backend failures
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Encoding or decoding of stored records failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TravelGuideError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new not-found error for the named resource
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a new storage error
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a new serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelGuideError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TravelGuideError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TravelGuideError::NotFound { resource } => format!("{resource} not found"),
            TravelGuideError::Storage { .. }
            | TravelGuideError::Serialization { .. }
            | TravelGuideError::General { .. } => "Internal server error".to_string(),
            TravelGuideError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

impl From<postcard::Error> for TravelGuideError {
    fn from(err: postcard::Error) -> Self {
        TravelGuideError::serialization(err.to_string())
    }
}

impl From<serde_json::Error> for TravelGuideError {
    fn from(err: serde_json::Error) -> Self {
        TravelGuideError::serialization(err.to_string())
    }
}

impl From<fjall::Error> for TravelGuideError {
    fn from(err: fjall::Error) -> Self {
        TravelGuideError::storage(err.to_string())
    }
}

impl From<tokio::task::JoinError> for TravelGuideError {
    fn from(err: tokio::task::JoinError) -> Self {
        TravelGuideError::general(format!("background task failed: {err}"))
    }
}
