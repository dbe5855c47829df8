//! # Services Module
//!
//! Concrete implementations of the collaborator traits in
//! [`crate::core::service`], plus the backend/third-party API client.
//!
//! ```text
//! services/
//! ├── api/            - Request building and response interpretation per endpoint
//! ├── headless.rs     - Log-only navigator and fixed-answer dialog
//! ├── http.rs         - reqwest-backed HttpTransport
//! ├── notifications.rs - Notification types and sinks (channel, log)
//! └── storage.rs      - Durable token storage (file, memory)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        App                              │
//! │   ┌────────────┐   ┌──────────────┐   ┌──────────────┐  │
//! │   │ ApiClient  │   │ TokenStore   │   │ Notifier     │  │
//! │   └─────┬──────┘   └──────────────┘   └──────────────┘  │
//! └─────────┼────────────────────────────────────────────────┘
//!           │ HttpTransport
//!           ▼
//! ┌──────────────────┐  ┌───────────────────┐
//! │  Folio backend   │  │  Currency API     │
//! │  /users/*        │  │  /v1/latest       │
//! │  /transactions   │  └───────────────────┘
//! │  /wallets        │
//! │  /categories     │
//! │  /information/*  │
//! │  /nodemailer/*   │
//! └──────────────────┘
//! ```

pub mod api;
pub mod headless;
pub mod http;
pub mod notifications;
pub mod storage;

pub use api::ApiClient;
pub use headless::{FixedAnswerDialog, LogNavigator};
pub use http::ReqwestTransport;
pub use notifications::{ChannelNotifier, LogNotifier, Notification, NotificationKind};
pub use storage::{FileTokenStore, MemoryTokenStore};
