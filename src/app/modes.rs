//! Input mode and supply status state types.
//!
//! # State Machine
//!
//! The application operates in one of two input modes:
//! - **Normal**: navigation and command keys
//! - **Search**: keystrokes edit the search text
//!
//! The detail overlay is not a mode of its own: it is visible whenever the
//! catalog selection resolves to a record, and it takes precedence over both.
//!
//! # Example
//!
//! ```rust
//! use podshelf::app::modes::{InputMode, SupplyStatus};
//!
//! let mode = InputMode::Search;
//! let status = SupplyStatus::Failed("timeout".to_string());
//! assert!(status.is_failed());
//! assert_ne!(mode, InputMode::Normal);
//! ```

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// j/k move, h/l page, / search, g/G genre, s sort, c clear, r reload, q quit.
    #[default]
    Normal,

    /// Characters and backspace edit the search text; Enter applies, Esc clears.
    Search,
}

/// State of the most recent record fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SupplyStatus {
    /// A fetch is in flight.
    #[default]
    Loading,

    /// The last fetch delivered a list.
    Ready,

    /// The last fetch failed; the catalog runs over an empty list.
    Failed(String),
}

impl SupplyStatus {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}
