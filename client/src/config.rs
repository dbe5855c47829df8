//! # Client Configuration
//!
//! Configuration is loaded once at startup and injected into the
//! [`crate::app::App`]; nothing reads the environment at call time.
//!
//! | Env var | Default |
//! |---|---|
//! | `FOLIO_ORIGIN_URL` | required |
//! | `FOLIO_CURRENCY_API_KEY` | required |
//! | `FOLIO_CURRENCY_API_URL` | `https://api.freecurrencyapi.com/v1/latest` |
//! | `FOLIO_RATE_KEY` | `usd` |
//! | `FOLIO_HTTP_TIMEOUT_SECS` | `10` |
//! | `FOLIO_STORAGE_PATH` | `folio-session.json` |

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use lib_utils::{get_env, get_env_or, get_env_parse_or, validate_http_url, validate_not_empty};

use crate::core::error::{AppError, Result};

pub const ORIGIN_URL_ENV: &str = "FOLIO_ORIGIN_URL";
pub const CURRENCY_API_URL_ENV: &str = "FOLIO_CURRENCY_API_URL";
pub const CURRENCY_API_KEY_ENV: &str = "FOLIO_CURRENCY_API_KEY";
pub const RATE_KEY_ENV: &str = "FOLIO_RATE_KEY";
pub const HTTP_TIMEOUT_ENV: &str = "FOLIO_HTTP_TIMEOUT_SECS";
pub const STORAGE_PATH_ENV: &str = "FOLIO_STORAGE_PATH";

pub const DEFAULT_CURRENCY_API_URL: &str = "https://api.freecurrencyapi.com/v1/latest";
pub const DEFAULT_STORAGE_PATH: &str = "folio-session.json";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Which field of the currency API response supplies the conversion rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RateKeyPolicy {
    /// Always read `data["USD"]`, whatever target currency was requested.
    /// Matches the numbers the web client has always shown.
    #[default]
    FixedUsd,
    /// Read `data[<target>]`.
    TargetCurrency,
}

impl FromStr for RateKeyPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "usd" | "fixed-usd" => Ok(RateKeyPolicy::FixedUsd),
            "target" | "target-currency" => Ok(RateKeyPolicy::TargetCurrency),
            other => Err(format!(
                "{} must be `usd` or `target`, got `{}`",
                RATE_KEY_ENV, other
            )),
        }
    }
}

/// Client configuration.
#[derive(Clone)]
pub struct ClientConfig {
    /// Backend base URL, without trailing slash
    pub origin_url: String,
    /// Currency API endpoint, without trailing slash
    pub currency_api_url: String,
    pub currency_api_key: String,
    pub rate_key: RateKeyPolicy,
    pub http_timeout: Duration,
    /// File backing durable token storage
    pub storage_path: PathBuf,
}

impl ClientConfig {
    /// Build a configuration with defaults for everything but the two
    /// required values.
    pub fn new(origin_url: impl Into<String>, currency_api_key: impl Into<String>) -> Self {
        Self {
            origin_url: trim_url(origin_url.into()),
            currency_api_url: DEFAULT_CURRENCY_API_URL.to_string(),
            currency_api_key: currency_api_key.into(),
            rate_key: RateKeyPolicy::default(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }

    pub fn with_currency_api_url(mut self, url: impl Into<String>) -> Self {
        self.currency_api_url = trim_url(url.into());
        self
    }

    pub fn with_rate_key(mut self, rate_key: RateKeyPolicy) -> Self {
        self.rate_key = rate_key;
        self
    }

    /// Load configuration from environment variables and validate it.
    pub fn from_env() -> Result<Self> {
        let origin_url = get_env(ORIGIN_URL_ENV)?;
        let currency_api_key = get_env(CURRENCY_API_KEY_ENV)?;
        let rate_key = get_env_or(RATE_KEY_ENV, "usd")
            .parse()
            .map_err(AppError::Config)?;
        let timeout_secs: u64 = get_env_parse_or(HTTP_TIMEOUT_ENV, DEFAULT_HTTP_TIMEOUT_SECS)?;

        let config = Self {
            origin_url: trim_url(origin_url),
            currency_api_url: trim_url(get_env_or(CURRENCY_API_URL_ENV, DEFAULT_CURRENCY_API_URL)),
            currency_api_key,
            rate_key,
            http_timeout: Duration::from_secs(timeout_secs),
            storage_path: PathBuf::from(get_env_or(STORAGE_PATH_ENV, DEFAULT_STORAGE_PATH)),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        validate_http_url(&self.origin_url, ORIGIN_URL_ENV).map_err(AppError::Config)?;
        validate_http_url(&self.currency_api_url, CURRENCY_API_URL_ENV)
            .map_err(AppError::Config)?;
        validate_not_empty(&self.currency_api_key, CURRENCY_API_KEY_ENV)
            .map_err(AppError::Config)?;

        if self.http_timeout.is_zero() {
            return Err(AppError::Config(format!(
                "{} must be greater than 0",
                HTTP_TIMEOUT_ENV
            )));
        }

        Ok(())
    }
}

// The API key stays out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("origin_url", &self.origin_url)
            .field("currency_api_url", &self.currency_api_url)
            .field("currency_api_key", &"<redacted>")
            .field("rate_key", &self.rate_key)
            .field("http_timeout", &self.http_timeout)
            .field("storage_path", &self.storage_path)
            .finish()
    }
}

fn trim_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_defaults_and_trims() {
        let config = ClientConfig::new("http://localhost:3000/", "key");
        assert_eq!(config.origin_url, "http://localhost:3000");
        assert_eq!(config.currency_api_url, DEFAULT_CURRENCY_API_URL);
        assert_eq!(config.rate_key, RateKeyPolicy::FixedUsd);
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rate_key_policy_parsing() {
        assert_eq!("usd".parse::<RateKeyPolicy>(), Ok(RateKeyPolicy::FixedUsd));
        assert_eq!("TARGET".parse::<RateKeyPolicy>(), Ok(RateKeyPolicy::TargetCurrency));
        assert!("gbp".parse::<RateKeyPolicy>().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        for origin in ["localhost:3000", "http://exa mple.com", "http://?x", "https://:99999"] {
            let config = ClientConfig::new(origin, "key");
            assert!(
                matches!(config.validate(), Err(AppError::Config(_))),
                "{} passed validation",
                origin
            );
        }

        let config = ClientConfig::new("http://localhost:3000", " ");
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let mut config = ClientConfig::new("http://localhost:3000", "key");
        config.http_timeout = Duration::ZERO;
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ClientConfig::new("http://localhost:3000", "super-secret");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
