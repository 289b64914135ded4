//! Podshelf: a terminal browser for a podcast catalog.
//!
//! Podshelf fetches the full list of shows once and then derives everything
//! the user sees locally:
//! - Case-insensitive title search, debounced while typing
//! - Genre filtering against a built-in genre table
//! - Five sort orders (newest, oldest, title A–Z / Z–A, most seasons)
//! - Fixed-size pagination with automatic reset when results shrink
//! - A detail overlay that follows the selected show across refreshes

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal runner (main.rs)                          │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Key map and event handling                       │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog       │   │ Worker Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Pipeline    │   │ - Supply      │
//! │ - Theming     │   │ - Pagination  │   │   thread      │
//! │ - Components  │   │ - Selection   │   │ - Messages    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                 │
//!                                         ┌───────────────┐
//!                                         │ Sources       │
//!                                         │ (source/)     │
//!                                         │ - HTTP / JSON │
//!                                         └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Record and genre model (domain/)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - JSON trace log with rotation                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Defaults, overridden by `~/.config/podshelf/config.toml` (or `--config`),
//! overridden by command-line flags:
//!
//! ```toml
//! source_url = "https://podcast-api.netlify.app"
//! # source_file = "/path/to/shows.json"   # takes precedence over source_url
//! page_size = 8
//! search_debounce_ms = 300
//! theme = "sippi-dark"
//! # theme_file = "/path/to/theme.toml"   # takes precedence over theme
//! trace_level = "info"
//! request_timeout_secs = 30
//! ```
//!
//! # Example
//!
//! ```rust
//! use podshelf::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::Refresh)?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), podshelf::PodshelfError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod source;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, map_key, Action, AppState, Event, InputMode, SupplyStatus};
pub use catalog::{CatalogController, Criteria, SortCriterion};
pub use domain::{GenreCatalog, GenreSelector, PodshelfError, Record, RecordId, Result};
pub use ui::Theme;

use catalog::{DEFAULT_PAGE_SIZE, DEFAULT_SEARCH_DEBOUNCE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Endpoint returning the JSON array of shows.
    pub source_url: String,

    /// Local JSON file with the same shape. Takes precedence over `source_url`.
    pub source_file: Option<PathBuf>,

    /// Records per page. Values below 1 fall back to 8.
    pub page_size: usize,

    /// Quiet period before typed search text is applied.
    pub search_debounce_ms: u64,

    /// Built-in theme name: `sippi-dark` or `sippi-light`. Ignored if
    /// `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<PathBuf>,

    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,

    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: source::DEFAULT_SOURCE_URL.to_string(),
            source_file: None,
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: u64::try_from(DEFAULT_SEARCH_DEBOUNCE.as_millis()).unwrap_or(300),
            theme: None,
            theme_file: None,
            trace_level: None,
            request_timeout_secs: 30,
        }
    }
}

/// Values given on the command line; `None` keeps the configured value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub source_url: Option<String>,
    pub source_file: Option<PathBuf>,
    pub page_size: Option<usize>,
    pub theme: Option<String>,
    pub theme_file: Option<PathBuf>,
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses a TOML configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`PodshelfError::Config`] on invalid TOML or mistyped values.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| PodshelfError::Config(format!("invalid config: {e}")))
    }

    /// Loads the configuration file.
    ///
    /// With `path` set, the file must exist. Without it, the default location
    /// is tried and a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PodshelfError::Config`] if an explicit file is missing, or any
    /// file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (infrastructure::default_config_path(), false),
        };

        match std::fs::read_to_string(&path) {
            Ok(text) => {
                let config = Self::from_toml(&text)?;
                tracing::debug!(path = %path.display(), "configuration loaded");
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !explicit => Ok(Self::default()),
            Err(e) => Err(PodshelfError::Config(format!(
                "cannot read {}: {e}",
                path.display()
            ))),
        }
    }

    /// Applies command-line values on top of this configuration.
    ///
    /// A `--url` given on the command line also drops a configured
    /// `source_file`, so the flag the user typed is the one that takes effect.
    #[must_use]
    pub fn merge(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(url) = overrides.source_url {
            self.source_url = url;
            self.source_file = None;
        }
        if let Some(file) = overrides.source_file {
            self.source_file = Some(file);
        }
        if let Some(page_size) = overrides.page_size {
            self.page_size = page_size;
        }
        if let Some(theme) = overrides.theme {
            self.theme = Some(theme);
        }
        if let Some(theme_file) = overrides.theme_file {
            self.theme_file = Some(theme_file);
        }
        if let Some(level) = overrides.trace_level {
            self.trace_level = Some(level);
        }
        self
    }

    /// Page size with values below 1 replaced by the default.
    #[must_use]
    pub const fn effective_page_size(&self) -> usize {
        if self.page_size < 1 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        }
    }

    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Resolves the theme: `theme_file`, then `theme`, then the default.
    /// Failures are logged and fall back to the default.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(theme_file).unwrap_or_else(|e| {
                    tracing::warn!(theme_file = %theme_file.display(), error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }
}

/// Builds the initial application state from configuration.
///
/// The record list starts empty and the supply status `Loading`; the caller
/// posts the first fetch to the worker.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        page_size = config.effective_page_size(),
        search_debounce_ms = config.search_debounce_ms,
        "initializing podshelf"
    );

    let controller = CatalogController::new(config.effective_page_size(), config.search_debounce());
    AppState::new(controller, GenreCatalog::builtin(), config.resolve_theme())
}
