//! `folio`: headless run of the client core.
//!
//! Restores the session from durable storage, loads the public market data
//! and, when a session exists, the user's transactions. Notifications and
//! navigation go to the log.

use std::sync::Arc;

use anyhow::Context;
use folio_client::services::{
    FileTokenStore, FixedAnswerDialog, LogNavigator, LogNotifier, ReqwestTransport,
};
use folio_client::{debug, App, AppDeps, ClientConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let _log_guard = debug::init_logger();

    let config = ClientConfig::from_env().context("Failed to load configuration")?;
    tracing::info!(?config, "Configuration loaded");

    let transport =
        ReqwestTransport::new(config.http_timeout).context("Failed to build HTTP client")?;
    let tokens = FileTokenStore::new(config.storage_path.clone());

    let app = App::new(AppDeps {
        config,
        transport: Arc::new(transport),
        tokens: Arc::new(tokens),
        notifier: Arc::new(LogNotifier),
        navigator: Arc::new(LogNavigator),
        dialog: Arc::new(FixedAnswerDialog::decline()),
    });

    let logged_in = app.check_auth();
    tracing::info!(logged_in, "Session restored");

    let (categories, prices) = tokio::join!(app.fetch_categories(), app.fetch_crypto_prices());
    if let Some(categories) = categories {
        tracing::info!(count = categories.len(), "Categories loaded");
    }
    if prices.is_some() {
        tracing::info!("Crypto prices loaded");
    }

    if logged_in {
        if let Some(transactions) = app.fetch_transactions().await {
            tracing::info!(count = transactions.len(), "Transactions loaded");
        }
    }

    app.settle().await;
    Ok(())
}
