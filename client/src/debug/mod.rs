//! # Debugging and Tracing Infrastructure
//!
//! - **File-based logging**: structured logs in `logs/folio.log.<date>` (daily rotation)
//! - **Console logging**: human-readable or JSON lines on stderr
//! - **Task tracking**: lifecycle logging for background work spawned by the core
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Keep the guard alive until shutdown so buffered lines are flushed
//! let _guard = folio_client::debug::init_logger();
//!
//! tracing::info!(endpoint = "/wallets", duration_ms = 42, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! - `RUST_LOG`: filter directives (default `folio_client=info,warn`)
//! - `FOLIO_LOG_DIR`: log directory (default `logs`)
//! - `FOLIO_LOG_JSON`: `1` switches the console layer to JSON lines

pub mod config;
pub mod logger;
pub mod task_tracker;

pub use config::LogConfig;
pub use logger::init as init_logger;
pub use task_tracker::spawn_tracked;
