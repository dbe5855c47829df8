//! # Service Traits
//!
//! Capabilities the core depends on but does not implement itself: the HTTP
//! transport, the notification sink, the router, the confirmation dialog and
//! durable token storage. Production implementations live in
//! [`crate::services`]; tests substitute recording stubs.

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::app::state::Route;
use crate::core::error::Result;
use crate::services::notifications::Notification;

/// HTTP method used by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

/// Outbound request handed to an [`HttpTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL without query string
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    /// JSON body, sent as `application/json`
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: Some(body),
        }
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// First header value with the given (case-insensitive) name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// First query parameter value with the given name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Response produced by an [`HttpTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Request/response transport.
///
/// Implementations return `Err(AppError::Transport)` only when no response was
/// obtained; every received response, whatever its status, is `Ok`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Notification sink (toast/modal UI).
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Router collaborator.
pub trait Navigator: Send + Sync {
    /// In-app navigation; in-memory state is kept.
    fn push(&self, route: Route);

    /// Full-page navigation; the UI reloads from scratch.
    fn redirect(&self, route: Route);
}

/// Interactive yes/no prompt.
#[async_trait]
pub trait ConfirmDialog: Send + Sync {
    /// Resolves to `true` only if the user explicitly confirmed.
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Durable client-side key/value storage.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove every key.
    fn clear(&self) -> Result<()>;
}
