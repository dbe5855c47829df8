//! # Validation Utilities
//!
//! Input validation helpers.

use url::Url;

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate that a string parses as an absolute http(s) URL with a host.
pub fn validate_http_url(value: &str, field_name: &str) -> Result<(), String> {
    validate_not_empty(value, field_name)?;

    let url = Url::parse(value.trim())
        .map_err(|e| format!("{} is not a valid URL: {}", field_name, e))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("{} must use http or https", field_name));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(format!("{} must include a host", field_name));
    }

    Ok(())
}
