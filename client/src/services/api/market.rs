//! # Market Data Endpoints
//!
//! Currency conversion through the third-party currency API, and the crypto
//! price snapshot the backend proxies.

use shared::{CurrencyRates, PriceSnapshot};

use super::client::{decode_body, ApiClient};
use crate::config::RateKeyPolicy;
use crate::core::error::{AppError, Result};
use crate::core::service::HttpRequest;

/// Outcome of a currency conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub rate: f64,
    /// `amount * rate`
    pub result: f64,
}

/// Convert `amount` of `from` into `to`.
///
/// Which rate is read depends on [`RateKeyPolicy`]: `FixedUsd` always uses
/// the `USD` entry, `TargetCurrency` uses the entry for `to`.
#[tracing::instrument(skip(client))]
pub async fn convert_currency(client: &ApiClient, from: &str, to: &str, amount: f64) -> Result<Conversion> {
    let request = HttpRequest::get(client.currency_api_url())
        .with_query("apikey", client.currency_api_key())
        .with_query("currencies", to)
        .with_query("base_currency", from);

    let response = client.execute(request).await?;
    let rates: CurrencyRates = decode_body(&response, "currency rates")?;

    let key = match client.rate_key() {
        RateKeyPolicy::FixedUsd => "USD",
        RateKeyPolicy::TargetCurrency => to,
    };
    let rate = rates
        .rate(key)
        .ok_or_else(|| AppError::malformed(format!("currency rates have no `{}` entry", key)))?;

    let result = amount * rate;
    tracing::debug!(rate, result, "Currency converted");

    Ok(Conversion {
        from: from.to_string(),
        to: to.to_string(),
        amount,
        rate,
        result,
    })
}

/// Fetch the latest crypto price snapshot.
#[tracing::instrument(skip(client))]
pub async fn get_crypto_prices(client: &ApiClient) -> Result<PriceSnapshot> {
    let response = client
        .execute(HttpRequest::get(client.backend_url("/information/crypto")))
        .await?;
    decode_body(&response, "crypto prices")
}
