use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
///
/// Only `email` is interpreted client-side (it addresses the confirmation
/// email). Every other field is forwarded to the backend as given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

/// Login response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Registration response
///
/// Any present body means the user was registered. Only `messages[0]` is
/// read, and only when it is a string; the rest is kept as sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct RegisterResponse {
    pub body: Value,
}

impl Default for RegisterResponse {
    fn default() -> Self {
        Self {
            body: Value::Object(Map::new()),
        }
    }
}

impl RegisterResponse {
    /// First server-provided message, if any.
    pub fn headline(&self) -> Option<&str> {
        self.body
            .get("messages")?
            .as_array()?
            .first()?
            .as_str()
            .filter(|m| !m.trim().is_empty())
    }
}

/// Error response body returned by the backend on non-2xx statuses
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// User profile as returned by `GET /users`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct UserProfile {
    pub fields: Map<String, Value>,
}

impl UserProfile {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}
