//! # Common Error Types
//!
//! Consolidated error handling for the Voxia client.
//!
//! This module provides a centralized error type [`AppError`] covering every failure a
//! service call can produce. Nothing here is retried: an error surfaces once, as a single
//! user-visible message (see [`AppError::user_message`]), and the user may retry the
//! action that triggered it.
//!
//! ## Error Categories
//!
//! - **Network / Timeout**: the request never produced an HTTP response
//! - **Http**: the server answered with a non-2xx status
//! - **Validation**: client-side checks failed; no request was sent
//! - **MissingToken**: login succeeded at the HTTP level but carried no token
//! - **Parse**: a 2xx body did not match the expected shape
//! - **Io / Config**: local media files and configuration
//!
//! Token storage failures are deliberately absent: they are logged and swallowed by
//! [`crate::services::storage::TokenStorage`].
//!
//! ## Usage Pattern
//!
//! ```rust
//! use voxia_client::core::error::{AppError, Result};
//!
//! fn require_name(name: &str) -> Result<&str> {
//!     if name.trim().is_empty() {
//!         return Err(AppError::Validation("Enter a name for the card".to_string()));
//!     }
//!     Ok(name.trim())
//! }
//!
//! assert!(require_name("  ").is_err());
//! ```

use thiserror::Error;

/// Client-wide error type.
///
/// # Example
///
/// ```rust
/// use voxia_client::core::error::AppError;
///
/// let http = AppError::Http { status: 404, message: "Card not found".to_string() };
/// let validation = AppError::Validation("Image is required".to_string());
///
/// assert_eq!(http.to_string(), "HTTP error 404: Card not found");
/// assert_eq!(http.user_message(), "Card not found");
/// assert_eq!(validation.user_message(), "Image is required");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Connection refused, DNS failure, TLS failure, dropped connection.
    #[error("Network error: {0}")]
    Network(String),

    /// The fixed request timeout elapsed before a response arrived.
    #[error("Request timed out")]
    Timeout,

    /// Non-2xx response.
    ///
    /// `message` is the server's `message`/`error` field when the body had one,
    /// otherwise `"HTTP <code>: <reason>"`.
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// Client-side input validation failure. Raised before any request is issued.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Login response did not include a token.
    #[error("Token not returned by the API. Check your credentials.")]
    MissingToken,

    /// A successful response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Reading a local media file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration (environment, base URL, timeout).
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Text suitable for a single alert shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Http { message, .. } => message.clone(),
            AppError::Validation(message) => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status for [`AppError::Http`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout
        } else if err.is_decode() {
            AppError::Parse(err.to_string())
        } else if err.is_builder() {
            AppError::Config(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}
