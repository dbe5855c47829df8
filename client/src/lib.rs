//! # Folio Client - Library Root
//!
//! Client-side state coordinator for the Folio personal finance and crypto
//! portfolio app. Every UI surface goes through one [`App`]: it owns the
//! session, talks to the backend and the currency API, holds the shared
//! state the views read, and turns every failure into one uniform error
//! notification.
//!
//! ## Module Structure
//!
//! - **app**: the orchestrator, session manager, shared state and
//!   notification messages
//! - **config**: startup configuration (`FOLIO_*` environment variables)
//! - **core**: error type and collaborator traits
//! - **debug**: logging setup and background task tracking
//! - **services**: API client, reqwest transport, notification sinks,
//!   token storage and headless collaborators
//!
//! ## Composition
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use folio_client::{App, AppDeps, ClientConfig};
//! use folio_client::services::{ChannelNotifier, FileTokenStore, ReqwestTransport};
//!
//! let config = ClientConfig::from_env()?;
//! let (notifier, notifications) = ChannelNotifier::new();
//! let app = App::new(AppDeps {
//!     transport: Arc::new(ReqwestTransport::new(config.http_timeout)?),
//!     tokens: Arc::new(FileTokenStore::new(&config.storage_path)),
//!     notifier: Arc::new(notifier),
//!     navigator: Arc::new(router),
//!     dialog: Arc::new(dialog),
//!     config,
//! });
//!
//! app.fetch_categories().await;
//! let categories = app.state.read().categories.clone();
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;

pub use app::{App, AppDeps, AppState, Route};
pub use config::{ClientConfig, RateKeyPolicy};
pub use crate::core::error::{AppError, Result};
