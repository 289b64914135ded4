//! File-based structured logging.
//!
//! ```text
//! tracing macros → EnvFilter → fmt JSON layer → FileWriter → podshelf.log (+ rotated backups)
//! ```
//!
//! # Features
//!
//! - **File-Based Output**: JSON lines in `$XDG_STATE_HOME/podshelf/podshelf.log`
//!   (or `~/.local/state/podshelf/podshelf.log`)
//! - **Automatic Rotation**: Files rotate at 10 MiB with 3-backup retention
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option / `--trace-level`
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
mod init;

pub use file_writer::{FileWriter, SharedFileWriter};
pub use init::init_tracing;
