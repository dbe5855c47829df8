//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and testability.
//!
//! - **[`error`]**: Client error type (`AppError`, `Result<T>`)
//! - **[`service`]**: Collaborator traits (`HttpTransport`, `Notifier`,
//!   `Navigator`, `ConfirmDialog`, `TokenStore`) and the HTTP message types
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use folio_client::core::service::HttpTransport;
//!
//! // In production: reqwest
//! let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new(timeout)?);
//!
//! // In tests: a stub that records requests and replays canned responses
//! let transport: Arc<dyn HttpTransport> = StubTransport::new();
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{
    ConfirmDialog, HttpMethod, HttpRequest, HttpResponse, HttpTransport, Navigator, Notifier,
    TokenStore,
};
