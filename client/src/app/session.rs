//! # Session Manager
//!
//! Owns the session token in durable storage and keeps
//! [`AppState::is_logged_in`] in sync with it.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::state::AppState;
use crate::core::error::{AppError, Result};
use crate::core::service::TokenStore;
use crate::services::api::ACCESS_TOKEN_KEY;

#[derive(Clone)]
pub struct SessionManager {
    tokens: Arc<dyn TokenStore>,
    state: Arc<RwLock<AppState>>,
}

impl SessionManager {
    pub fn new(tokens: Arc<dyn TokenStore>, state: Arc<RwLock<AppState>>) -> Self {
        Self { tokens, state }
    }

    /// Recompute the login flag from storage and return it.
    ///
    /// A storage read failure counts as "no session".
    pub fn check_auth(&self) -> bool {
        let logged_in = match self.tokens.get(ACCESS_TOKEN_KEY) {
            Ok(token) => token.is_some_and(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read session token");
                false
            }
        };

        self.state.write().is_logged_in = logged_in;
        logged_in
    }

    /// Persist a freshly issued token and mark the session active.
    pub fn persist(&self, token: &str) -> Result<()> {
        if token.trim().is_empty() {
            return Err(AppError::malformed("login response has no access_token"));
        }

        self.tokens.set(ACCESS_TOKEN_KEY, token)?;
        self.check_auth();
        Ok(())
    }

    /// Wipe durable storage and recompute the login flag.
    pub fn clear(&self) -> Result<()> {
        self.tokens.clear()?;
        self.check_auth();
        Ok(())
    }
}
