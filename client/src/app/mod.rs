//! # Application Orchestrator
//!
//! [`App`] is the single entry point the UI talks to. Each operation calls one
//! remote surface, and on success overwrites one slice of [`AppState`] and
//! emits its success notification. On failure it emits exactly one error
//! notification and leaves the state alone. Callers never see an error: every
//! operation resolves to `Some(value)` or `None`.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  UI (views, forms, charts)                   │
//! └───────┬──────────────────────────▲───────────┘
//!         │ App::login / fetch_* ... │ state.read()
//! ┌───────▼──────────────────────────┴───────────┐
//! │  App                                         │
//! │  ├─ SessionManager  (token ⇄ is_logged_in)   │
//! │  ├─ ApiClient       (HTTP, schemas)          │
//! │  └─ notify::report_error (one path for all)  │
//! └───────┬───────────────┬──────────┬───────────┘
//!         │ HttpTransport │ Notifier │ Navigator / ConfirmDialog
//!         ▼               ▼          ▼
//! ```
//!
//! ## State Management Pattern
//!
//! State lives in `Arc<RwLock<AppState>>`. Locks are taken only for the
//! synchronous overwrite after a call settles and are never held across an
//! `.await`. Concurrent calls writing the same field: the last to resolve wins.

pub mod notify;
pub mod session;
pub mod state;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use shared::{
    Category, LoginRequest, LoginResponse, NewTransaction, PriceSnapshot, RegisterRequest,
    RegisterResponse, Transaction, UserProfile, Wallet,
};
use tokio::task::JoinHandle;

use crate::config::ClientConfig;
use crate::core::error::Result;
use crate::core::service::{ConfirmDialog, HttpTransport, Navigator, Notifier, TokenStore};
use crate::debug::spawn_tracked;
use crate::services::api::{auth, finance, market, ApiClient};
use crate::services::notifications::Notification;

pub use session::SessionManager;
pub use state::{AppState, Route};

/// Collaborators the application is composed from.
pub struct AppDeps {
    pub config: ClientConfig,
    pub transport: Arc<dyn HttpTransport>,
    pub tokens: Arc<dyn TokenStore>,
    pub notifier: Arc<dyn Notifier>,
    pub navigator: Arc<dyn Navigator>,
    pub dialog: Arc<dyn ConfirmDialog>,
}

/// Session manager, request orchestrator and shared state store.
///
/// Cloning is cheap; clones share state, session and collaborators.
#[derive(Clone)]
pub struct App {
    /// Shared state read by every UI surface
    pub state: Arc<RwLock<AppState>>,
    api: Arc<ApiClient>,
    session: SessionManager,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    dialog: Arc<dyn ConfirmDialog>,
    background: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl App {
    /// Compose the application and derive the login flag from storage.
    pub fn new(deps: AppDeps) -> Self {
        let state = Arc::new(RwLock::new(AppState::default()));
        let api = Arc::new(ApiClient::new(&deps.config, deps.transport, deps.tokens.clone()));
        let session = SessionManager::new(deps.tokens, state.clone());

        let app = Self {
            state,
            api,
            session,
            notifier: deps.notifier,
            navigator: deps.navigator,
            dialog: deps.dialog,
            background: Arc::new(Mutex::new(Vec::new())),
        };
        app.check_auth();
        app
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.read().is_logged_in
    }

    /// Recompute `is_logged_in` from durable storage.
    pub fn check_auth(&self) -> bool {
        self.session.check_auth()
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    /// Register a new user.
    ///
    /// On success: notify with the server's first message (or a default),
    /// fire the confirmation email in the background, and go to the login
    /// page.
    pub async fn register(&self, payload: RegisterRequest) -> Option<RegisterResponse> {
        let response = self.absorb(auth::register(&self.api, &payload).await)?;

        let headline = response
            .headline()
            .map(str::to_string)
            .unwrap_or_else(|| notify::REGISTERED.to_string());
        self.notifier.notify(Notification::success(headline));

        let api = self.api.clone();
        let email = payload.email.clone();
        self.spawn_background("confirmation_email", async move {
            if let Err(e) = auth::send_confirmation_email(&api, &email).await {
                tracing::debug!(error = %e, "Confirmation email request failed");
            }
        });

        self.navigator.push(Route::Login);
        Some(response)
    }

    /// Log in and, on success, start the session.
    pub async fn login(&self, credentials: LoginRequest) -> Option<LoginResponse> {
        let response = self.absorb(auth::login(&self.api, &credentials).await)?;
        self.absorb(self.complete_login(&response))?;
        Some(response)
    }

    /// Start a session from a login payload.
    ///
    /// Persists the token, announces the login, refreshes transactions in
    /// the background with the new token, and goes to the dashboard.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime, since the transaction
    /// refresh is spawned onto the current runtime. A payload without a
    /// token returns an error before anything is spawned.
    pub fn complete_login(&self, payload: &LoginResponse) -> Result<()> {
        self.session.persist(&payload.access_token)?;
        tracing::info!("Session started");

        self.notifier.notify(Notification::success(notify::LOGGED_IN));

        let app = self.clone();
        self.spawn_background("transactions_refresh", async move {
            app.fetch_transactions().await;
        });

        self.navigator.push(Route::Home);
        Ok(())
    }

    /// Ask for confirmation, then end the session.
    ///
    /// Returns `true` only when the session was actually ended.
    pub async fn logout(&self) -> bool {
        if !self.dialog.confirm(notify::LOGOUT_PROMPT).await {
            tracing::debug!("Logout declined");
            return false;
        }

        if self.absorb(self.session.clear()).is_none() {
            return false;
        }

        // The full-page redirect reloads the UI from scratch.
        *self.state.write() = AppState::default();
        self.check_auth();

        tracing::info!("Session ended");
        self.notifier.notify(Notification::success(notify::LOGGED_OUT));
        self.navigator.redirect(Route::Root);
        true
    }

    // ------------------------------------------------------------------
    // Data
    // ------------------------------------------------------------------

    pub async fn fetch_transactions(&self) -> Option<Vec<Transaction>> {
        let transactions = self.absorb(finance::get_transactions(&self.api).await)?;
        self.state.write().transactions = transactions.clone();
        Some(transactions)
    }

    pub async fn fetch_user(&self) -> Option<UserProfile> {
        let user = self.absorb(auth::get_user(&self.api).await)?;
        self.state.write().user = user.clone();
        Some(user)
    }

    pub async fn fetch_wallets(&self) -> Option<Vec<Wallet>> {
        let wallets = self.absorb(finance::get_wallets(&self.api).await)?;
        self.state.write().wallets = wallets.clone();
        Some(wallets)
    }

    pub async fn fetch_categories(&self) -> Option<Vec<Category>> {
        let categories = self.absorb(finance::get_categories(&self.api).await)?;
        self.state.write().categories = categories.clone();
        Some(categories)
    }

    /// Convert `amount` from one currency to another and store the result.
    pub async fn convert_currency(&self, from: &str, to: &str, amount: f64) -> Option<f64> {
        let conversion = self.absorb(market::convert_currency(&self.api, from, to, amount).await)?;
        self.state.write().conversion_result = conversion.result;

        self.notifier.notify(Notification::success(notify::converted(
            conversion.amount,
            &conversion.from,
            conversion.result,
            &conversion.to,
        )));
        Some(conversion.result)
    }

    pub async fn fetch_crypto_prices(&self) -> Option<PriceSnapshot> {
        let prices = self.absorb(market::get_crypto_prices(&self.api).await)?;
        self.state.write().cmc_response = prices.clone();

        self.notifier
            .notify(Notification::success(notify::CRYPTO_PRICES_RETRIEVED));
        Some(prices)
    }

    /// Record a transaction and go to the transaction list.
    ///
    /// The list itself is not refreshed here; the transactions view fetches
    /// on entry.
    pub async fn create_transaction(&self, payload: NewTransaction) -> Option<Value> {
        let created = self.absorb(finance::create_transaction(&self.api, &payload).await)?;

        self.notifier
            .notify(Notification::success(notify::TRANSACTION_RECORDED));
        self.navigator.push(Route::Transactions);
        Some(created)
    }

    // ------------------------------------------------------------------
    // Background work
    // ------------------------------------------------------------------

    /// Wait for every background task spawned so far, including tasks those
    /// tasks spawn.
    pub async fn settle(&self) {
        loop {
            let pending: Vec<JoinHandle<()>> = std::mem::take(&mut *self.background.lock());
            if pending.is_empty() {
                return;
            }

            for handle in pending {
                if let Err(e) = handle.await {
                    tracing::warn!(error = %e, "Background task failed");
                }
            }
        }
    }

    fn spawn_background<F>(&self, name: &'static str, future: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let handle = spawn_tracked(name, future);
        let mut background = self.background.lock();
        background.retain(|h| !h.is_finished());
        background.push(handle);
    }

    /// Collapse a result into an option, reporting the error.
    fn absorb<T>(&self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                notify::report_error(self.notifier.as_ref(), &e);
                None
            }
        }
    }
}
