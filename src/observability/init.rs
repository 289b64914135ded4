//! Tracing initialization and subscriber setup.
//!
//! Configures the global subscriber: an `EnvFilter` followed by a JSON `fmt`
//! layer writing through the rotating [`FileWriter`].

use super::file_writer::{FileWriter, SharedFileWriter};
use crate::infrastructure::paths;
use crate::Config;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LEVEL: &str = "info";

/// Level filter: `RUST_LOG` first, then the configured level, then `info`.
///
/// An unparseable configured level falls back to `info` rather than
/// disabling tracing.
fn build_filter(config_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config_level.unwrap_or(DEFAULT_LEVEL)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Initializes the tracing subscriber with rotating JSON file output.
///
/// Returns the log file path when tracing was installed. The terminal belongs
/// to the UI, so nothing is ever written to stdout or stderr.
///
/// # Initialization Behavior
///
/// - Creates the state directory if it doesn't exist
/// - Returns `None` if directory creation fails (tracing stays off)
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```rust
/// use podshelf::observability::init_tracing;
/// use podshelf::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// let _log_file = init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) -> Option<PathBuf> {
    let log_path = paths::default_log_path();
    if let Some(dir) = log_path.parent() {
        if std::fs::create_dir_all(dir).is_err() {
            return None;
        }
    }

    let writer = Arc::new(FileWriter::new(log_path.clone()));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(false)
        .with_ansi(false)
        .with_thread_names(true)
        .with_writer(move || SharedFileWriter(Arc::clone(&writer)));

    let installed = tracing_subscriber::registry()
        .with(build_filter(config.trace_level.as_deref()))
        .with(fmt_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(
            log_file = %log_path.display(),
            version = env!("CARGO_PKG_VERSION"),
            "tracing initialized"
        );
    }
    installed.then_some(log_path)
}
