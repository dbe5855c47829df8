//! File and console logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{LogConfig, DEFAULT_LOG_LEVEL, LOG_FILE_PREFIX};

/// Initialize the logging system.
///
/// Sets up:
/// - an `EnvFilter` from `RUST_LOG` (falling back to `folio_client=info,warn`)
/// - a non-blocking, daily-rotated file layer under `FOLIO_LOG_DIR`
/// - a stderr layer, JSON when `FOLIO_LOG_JSON=1`
///
/// Returns the file writer guard; dropping it flushes and stops the writer.
/// `None` means the log directory could not be created and only console
/// output is active.
pub fn init() -> Option<WorkerGuard> {
    let config = LogConfig::from_env();

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let (file_layer, guard) = match fs::create_dir_all(&config.log_dir) {
        Ok(()) => {
            let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("Warning: Failed to create log directory: {}", e);
            (None, None)
        }
    };

    let (plain_console, json_console) = if config.json_console {
        (None, Some(fmt::layer().json().with_writer(std::io::stderr)))
    } else {
        (Some(fmt::layer().with_target(false).with_writer(std::io::stderr)), None)
    };

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(plain_console)
        .with(json_console)
        .try_init();

    if let Err(e) = installed {
        eprintln!("Warning: Logging already initialized: {}", e);
        return None;
    }

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        json_console = config.json_console,
        "Logging initialized"
    );

    guard
}
