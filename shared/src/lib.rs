//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the Folio client and the
//! remote surfaces it talks to: the Folio backend and the third-party
//! currency API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::auth`]**: Registration, login and user profile DTOs
//!   - **[`dto::finance`]**: Transactions, wallets and categories
//!   - **[`dto::market`]**: Currency rates and crypto price snapshots
//!
//! ## Opaque Records
//!
//! Backend-owned records (transactions, wallets, categories, user profiles)
//! are kept as JSON objects. The client never validates business fields; it
//! only checks that each payload has the expected *shape* (object, array of
//! objects, ...), so new backend fields flow through untouched.
//!
//! ```rust
//! use shared::dto::finance::Transaction;
//!
//! let tx: Transaction = serde_json::from_str(r#"{"id": 7, "amount": 12.5}"#).unwrap();
//! assert_eq!(tx.get("amount"), Some(&serde_json::json!(12.5)));
//! ```

pub mod dto;

// Re-export commonly used types for convenience
pub use dto::*;
