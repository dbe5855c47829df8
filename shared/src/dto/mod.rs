//! # Data Transfer Objects (DTOs)
//!
//! Request and response bodies for every endpoint the client calls.
//!
//! ## Module Organization
//!
//! - [`auth`] - Registration, login, error bodies and the user profile
//! - [`finance`] - Transactions, wallets, categories
//! - [`market`] - Currency conversion rates and crypto price snapshots
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /users/login
//! Content-Type: application/json
//!
//! { "email": "alice@example.com", "password": "hunter22" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
//! ```
//!
//! Error responses carry an optional `message`:
//!
//! ```text
//! HTTP/1.1 401 Unauthorized
//!
//! { "message": "Invalid email or password" }
//! ```

pub mod auth;
pub mod finance;
pub mod market;

pub use auth::*;
pub use finance::*;
pub use market::*;
