//! Custom error types for Webforge.
//!
//! This module provides structured error types that let callers tell a
//! configuration problem from a transport failure from an unusable model
//! response, instead of collapsing everything into one opaque failure.

use thiserror::Error;

/// Main error type for Webforge operations
#[derive(Error, Debug)]
pub enum WebforgeError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Missing or invalid static configuration (endpoint URL, timeout, model)
    #[error("Configuration error: {message}")]
    Config { message: String },

    // =========================================================================
    // Generation Errors
    // =========================================================================
    /// Transport failure or non-success HTTP status from the endpoint
    #[error("Generation request failed: {message}")]
    Network { message: String },

    /// The endpoint answered successfully with a blank body
    #[error("Empty response from generation endpoint")]
    EmptyResponse,

    /// The response contained no ```html fenced code block
    #[error("No html code block found in the response")]
    NoHtmlBlock,

    // =========================================================================
    // Wrapped Errors
    // =========================================================================
    /// IO error wrapper
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON error wrapper
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WebforgeError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Check if this error is a fatal configuration problem
    ///
    /// Configuration errors are raised before any request is attempted and
    /// cannot be fixed by resubmitting.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Check if this error came from an unusable endpoint response
    pub fn is_response_error(&self) -> bool {
        matches!(self, Self::EmptyResponse | Self::NoHtmlBlock)
    }

    /// Get error code for exit status
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Network { .. } => 3,
            Self::EmptyResponse | Self::NoHtmlBlock => 4,
            _ => 1,
        }
    }
}

/// Type alias for Webforge results
pub type Result<T> = std::result::Result<T, WebforgeError>;
