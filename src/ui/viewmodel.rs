//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel) and
//! consumed by the renderer. They contain no business logic, only display-ready
//! strings and flags, so every rendering decision can be tested without a terminal.
//!
//! # Example
//!
//! ```rust
//! use podshelf::ui::viewmodel::{Body, DisplayItem};
//!
//! let body = Body::Rows {
//!     items: vec![DisplayItem {
//!         title: "The Daily Byte".to_string(),
//!         seasons: "3 seasons".to_string(),
//!         genres: "News".to_string(),
//!         updated: "January 5, 2024".to_string(),
//!         is_selected: true,
//!         highlight_ranges: vec![(4, 9)],
//!     }],
//! };
//! assert!(matches!(body, Body::Rows { ref items } if items.len() == 1));
//! ```

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Active genre and sort criterion.
    pub controls: ControlsInfo,

    /// Present while the search box has focus.
    pub search_bar: Option<SearchBarInfo>,

    /// Record table, empty state or loading indicator.
    pub body: Body,

    /// Present when the filtered result spans more than one page.
    pub pagination: Option<PaginationInfo>,

    /// Supply failure message.
    pub banner: Option<BannerInfo>,

    pub footer: FooterInfo,

    /// The detail overlay, drawn over everything else.
    pub detail: Option<DetailInfo>,
}

/// Main content area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// The first fetch is still running and nothing is loaded yet.
    Loading,
    /// Nothing to show.
    Empty(EmptyState),
    /// Visible rows of the current page.
    Rows { items: Vec<DisplayItem> },
}

/// One row of the record table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub title: String,
    pub seasons: String,
    /// Genre titles joined with ", ".
    pub genres: String,
    pub updated: String,

    /// Whether the cursor is on this row.
    pub is_selected: bool,

    /// Character ranges of `title` matching the search term.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// "Podcasts" or `Search Results for "term"`.
    pub title: String,
    /// "(12)" or "(3 of 12)" when filters are active.
    pub count: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlsInfo {
    pub genre_label: String,
    pub sort_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
    /// Where the records came from.
    pub source: String,
}

/// Empty state message shown in place of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// "No podcasts found", optionally qualified by the active filters.
    pub message: String,

    /// Hint line (clear filters or reload).
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Text typed so far.
    pub query: String,
    /// Typed text not yet applied (debounce still running).
    pub pending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    pub current_page: usize,
    pub total_pages: usize,
    /// "Showing 9–10 of 10".
    pub range_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerInfo {
    pub message: String,
}

/// Detail overlay contents for the selected record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailInfo {
    pub title: String,
    pub description: String,
    /// Genre titles; empty renders as "No genres listed".
    pub genres: Vec<String>,
    pub seasons: String,
    /// "January 5, 2024" or "Unknown".
    pub updated: String,
    pub image: String,
}
