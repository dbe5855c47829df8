//! # Outcome Notifications
//!
//! Messages the core shows, and the single routine every failure goes
//! through.

use crate::core::error::AppError;
use crate::core::service::Notifier;
use crate::services::notifications::Notification;

pub const ERROR_TITLE: &str = "Backend server returned an error";
pub const REGISTERED: &str = "Successfully registered a new user!";
pub const LOGGED_IN: &str = "Successfully logged in!";
pub const LOGGED_OUT: &str = "Successfully logged out!";
pub const LOGOUT_PROMPT: &str = "Are you sure you want to log out?";
pub const CRYPTO_PRICES_RETRIEVED: &str = "Successfully retrieved crypto prices";
pub const TRANSACTION_RECORDED: &str = "Successfully recorded a new transaction!";

pub fn converted(amount: f64, from: &str, result: f64, to: &str) -> String {
    format!("Successfully converted {} {} to {} {}", amount, from, result, to)
}

/// Surface a failure to the user.
///
/// This is the only place failures become visible.
pub fn report_error(notifier: &dyn Notifier, err: &AppError) {
    tracing::warn!(error = %err, "Operation failed");
    notifier.notify(Notification::error(ERROR_TITLE, err.user_message()));
}
