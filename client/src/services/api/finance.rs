//! # Finance Endpoints
//!
//! Transactions, wallets and categories. Lists come back in server order and
//! are returned as-is.

use shared::{Category, NewTransaction, Transaction, Wallet};
use serde_json::Value;

use super::client::{decode_body, present_body, ApiClient};
use crate::core::error::{AppError, Result};
use crate::core::service::HttpRequest;

/// List the user's transactions.
#[tracing::instrument(skip(client))]
pub async fn get_transactions(client: &ApiClient) -> Result<Vec<Transaction>> {
    let request = client.authorize(HttpRequest::get(client.backend_url("/transactions")))?;
    let response = client.execute(request).await?;
    let transactions: Vec<Transaction> = decode_body(&response, "transaction list")?;

    tracing::debug!(count = transactions.len(), "Transactions fetched");
    Ok(transactions)
}

/// Record a new transaction. The payload is forwarded verbatim.
#[tracing::instrument(skip(client, transaction))]
pub async fn create_transaction(client: &ApiClient, transaction: &NewTransaction) -> Result<Value> {
    let body = serde_json::to_value(transaction)
        .map_err(|e| AppError::malformed(format!("unserializable transaction payload: {}", e)))?;
    let request = client.authorize(HttpRequest::post(client.backend_url("/transactions"), body))?;
    let response = client.execute(request).await?;
    present_body(&response, "transaction creation")
}

/// List the user's wallets.
#[tracing::instrument(skip(client))]
pub async fn get_wallets(client: &ApiClient) -> Result<Vec<Wallet>> {
    let request = client.authorize(HttpRequest::get(client.backend_url("/wallets")))?;
    let response = client.execute(request).await?;
    decode_body(&response, "wallet list")
}

/// List transaction categories. Public; no session needed.
#[tracing::instrument(skip(client))]
pub async fn get_categories(client: &ApiClient) -> Result<Vec<Category>> {
    let response = client
        .execute(HttpRequest::get(client.backend_url("/categories")))
        .await?;
    decode_body(&response, "category list")
}
