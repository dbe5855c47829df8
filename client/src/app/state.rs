//! # Application State Types
//!
//! The shared state store read by every UI surface, and the routes the core
//! navigates to.

use shared::{Category, PriceSnapshot, Transaction, UserProfile, Wallet};

/// Routes the core navigates to after an operation completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing page, target of the full-page redirect on logout
    Root,
    /// Dashboard shown after login
    Home,
    /// Login form shown after registration
    Login,
    /// Transaction list shown after recording a transaction
    Transactions,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Home => "/home",
            Route::Login => "/login",
            Route::Transactions => "/transactions",
        }
    }
}

/// Shared state store.
///
/// Every field is replaced wholesale by the operation that owns it; nothing
/// is merged or appended locally.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Mirrors "a session token is in durable storage"; recomputed, never set directly
    pub is_logged_in: bool,
    /// Server order
    pub transactions: Vec<Transaction>,
    pub wallets: Vec<Wallet>,
    pub categories: Vec<Category>,
    /// Last computed conversion amount
    pub conversion_result: f64,
    /// Last crypto price payload
    pub cmc_response: PriceSnapshot,
    pub user: UserProfile,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            is_logged_in: false,
            transactions: Vec::new(),
            wallets: Vec::new(),
            categories: Vec::new(),
            conversion_result: 0.0,
            cmc_response: PriceSnapshot::default(),
            user: UserProfile::default(),
        }
    }
}
