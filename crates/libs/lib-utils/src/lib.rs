//! # Utilities Library
//!
//! Shared helpers for reading environment variables and validating settings.

pub mod envs;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or, get_env_parse_or};
pub use validation::{validate_http_url, validate_not_empty};
