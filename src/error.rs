//! Error types for fetch-gists
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// Opaque failure raised by a [`Transport`](crate::http::Transport).
///
/// The page fetcher never inspects it; it is surfaced to callers as-is.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// The main error type for fetch-gists
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Precondition Errors
    // ============================================================================
    #[error("You must supply an access token to retrieve your gists")]
    MissingCredential,

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error(transparent)]
    Transport(TransportError),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    // ============================================================================
    // Response Classification Errors
    // ============================================================================
    #[error("{message}. You can view the documentation at {documentation_url}")]
    Auth {
        status: u16,
        message: String,
        documentation_url: String,
    },

    #[error("Expected 200 response code but got {status}")]
    UnexpectedStatus { status: u16 },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an authentication/authorization error
    pub fn auth(
        status: u16,
        message: impl Into<String>,
        documentation_url: impl Into<String>,
    ) -> Self {
        Self::Auth {
            status,
            message: message.into(),
            documentation_url: documentation_url.into(),
        }
    }

    /// Wrap any transport failure without altering it
    pub fn transport(err: impl Into<TransportError>) -> Self {
        Self::Transport(err.into())
    }

    /// Check if this error came from a 401 or 403 response
    pub fn is_auth(&self) -> bool {
        matches!(self, Error::Auth { .. })
    }

    /// Check if this error came from the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// HTTP status code behind this error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Auth { status, .. } | Error::UnexpectedStatus { status } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for fetch-gists
pub type Result<T> = std::result::Result<T, Error>;
