//! # Backend API Client Module
//!
//! Builds requests against the Folio backend and the currency API and turns
//! replies into typed values or an [`AppError`](crate::core::AppError).
//! Nothing here touches application state or notifies anyone; that is the
//! job of [`crate::app::App`].
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient, token attachment, status/body interpretation
//! ├── auth.rs     - Register, login, confirmation email, user profile
//! ├── finance.rs  - Transactions, wallets, categories
//! └── market.rs   - Currency conversion, crypto price snapshot
//! ```

pub mod auth;
pub mod client;
pub mod finance;
pub mod market;

pub use client::{ApiClient, ACCESS_TOKEN_HEADER, ACCESS_TOKEN_KEY};
pub use market::Conversion;
