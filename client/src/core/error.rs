//! # Common Error Types
//!
//! Consolidated error handling for the Folio client.
//!
//! Every outbound call and every storage access reports failures through
//! [`AppError`]. The orchestration layer ([`crate::app::App`]) never hands these
//! to its callers: it turns each one into a single error notification and
//! leaves the shared state untouched.
//!
//! ## Error Categories
//!
//! - **Transport**: the request never produced a response (DNS, refused, timeout)
//! - **Server**: a non-2xx response, optionally carrying a backend `message`
//! - **MalformedResponse**: a 2xx response whose body is absent or has the wrong shape
//! - **Storage**: durable token storage could not be read or written
//! - **Config**: startup configuration is missing or invalid
//!
//! ## Usage Pattern
//!
//! ```rust
//! use folio_client::core::error::AppError;
//!
//! let err = AppError::Server { status: 401, message: Some("Invalid token".to_string()) };
//! assert_eq!(err.user_message(), "Invalid token");
//!
//! let err = AppError::Server { status: 502, message: None };
//! assert_eq!(err.user_message(), "Request failed with status code 502");
//! ```

use thiserror::Error;

/// Client-wide error type.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AppError {
    /// Network-level failure: the transport could not deliver the request or
    /// read the reply.
    #[error("Network error: {0}")]
    Transport(String),

    /// Non-2xx response from a remote surface.
    ///
    /// `message` is the `message` field of the error body, when the body had one.
    #[error("Request failed with status code {status}")]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// 2xx response whose body is absent or does not match the endpoint schema.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Durable token storage failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Human-readable message shown to the user.
    ///
    /// Prefers the backend-provided `message` of a server error; everything
    /// else falls back to the error's own description.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            other => other.to_string(),
        }
    }

    /// Shorthand for a malformed-response error.
    pub fn malformed(what: impl Into<String>) -> Self {
        AppError::MalformedResponse(what.into())
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        match err {
            lib_utils::envs::Error::MissingEnv(name) => {
                AppError::Config(format!("{} must be set in environment", name))
            }
            lib_utils::envs::Error::WrongFormat(name) => {
                AppError::Config(format!("{} has an invalid value", name))
            }
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}
