//! Application state management and view model computation.
//!
//! [`AppState`] is the single container for everything the terminal front end
//! knows: the current raw record list, the catalog controller (criteria,
//! selection, pending search), the supply status and the cursor.
//!
//! # State Components
//!
//! - **Records**: the last list delivered by the supply worker, replaced wholesale
//! - **Controller**: owns every catalog criterion and the detail selection
//! - **Supply status**: loading, ready or failed, plus the id of the newest fetch
//! - **Cursor**: zero-based row within the visible page
//! - **Input mode / search text**: what the keyboard is currently editing
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] turns a state snapshot into a
//! [`UIViewModel`]. It never mutates anything; the only correction the catalog
//! needs (an out-of-range page) is applied by [`AppState::reconcile`] from the
//! event handler.
//!
//! # Example
//!
//! ```rust
//! use podshelf::app::AppState;
//! use podshelf::catalog::CatalogController;
//! use podshelf::domain::{GenreCatalog, Record};
//! use podshelf::ui::Theme;
//! use podshelf::worker::SupplyResponse;
//!
//! let mut state = AppState::new(CatalogController::default(), GenreCatalog::builtin(), Theme::default());
//! let request = state.begin_fetch();
//! # let request_id = match request { podshelf::worker::SupplyRequest::Fetch { request_id } => request_id, _ => 0 };
//! state.accept_response(SupplyResponse::Loaded { request_id, records: vec![Record::new("1", "One")] });
//!
//! let viewmodel = state.compute_viewmodel(24, 100);
//! assert_eq!(viewmodel.header.title, "Podcasts");
//! ```

use super::modes::{InputMode, SupplyStatus};
use crate::catalog::{CatalogController, DerivedResult, Resolution};
use crate::domain::{GenreCatalog, Record};
use crate::ui::helpers::substring_ranges;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BannerInfo, Body, ControlsInfo, DetailInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo,
    PaginationInfo, SearchBarInfo, UIViewModel,
};
use crate::worker::{SupplyRequest, SupplyResponse};

/// Lines used by the header, controls bar, borders, column captions,
/// pagination bar and footer.
const CHROME_ROWS: usize = 8;
/// Extra lines of the search box.
const SEARCH_BAR_ROWS: usize = 3;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Raw record list from the last successful fetch; empty after a failure.
    pub records: Vec<Record>,

    /// Catalog criteria, detail selection and pending search.
    pub controller: CatalogController,

    /// Genre reference data.
    pub genres: GenreCatalog,

    pub supply: SupplyStatus,

    /// Zero-based cursor row within the visible page.
    pub cursor: usize,

    pub input_mode: InputMode,

    /// Text in the search box. Applied to the controller after the debounce
    /// delay, on Enter, or cleared on Esc.
    pub search_input: String,

    pub theme: Theme,

    /// Where records come from, for the footer.
    pub source_label: String,

    /// Id of the most recent fetch; older responses are ignored.
    latest_request_id: u64,
}

impl AppState {
    #[must_use]
    pub fn new(controller: CatalogController, genres: GenreCatalog, theme: Theme) -> Self {
        Self {
            records: Vec::new(),
            controller,
            genres,
            supply: SupplyStatus::Loading,
            cursor: 0,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            theme,
            source_label: String::new(),
            latest_request_id: 0,
        }
    }

    /// Starts a new fetch: marks the supply as loading and returns the request
    /// to post. Any response to an earlier request becomes stale.
    pub fn begin_fetch(&mut self) -> SupplyRequest {
        self.latest_request_id += 1;
        self.supply = SupplyStatus::Loading;
        tracing::debug!(request_id = self.latest_request_id, "fetch requested");
        SupplyRequest::Fetch {
            request_id: self.latest_request_id,
        }
    }

    #[must_use]
    pub const fn latest_request_id(&self) -> u64 {
        self.latest_request_id
    }

    /// Applies a worker response. Returns `false` if it answered a superseded request.
    pub fn accept_response(&mut self, response: SupplyResponse) -> bool {
        if response.request_id() != self.latest_request_id {
            tracing::debug!(
                request_id = response.request_id(),
                latest_request_id = self.latest_request_id,
                "discarding stale supply response"
            );
            return false;
        }

        match response {
            SupplyResponse::Loaded { records, .. } => {
                tracing::debug!(record_count = records.len(), "record list replaced");
                self.records = records;
                self.supply = SupplyStatus::Ready;
            }
            SupplyResponse::Failed { message, .. } => {
                tracing::warn!(error = %message, "record supply failed");
                self.records.clear();
                self.supply = SupplyStatus::Failed(message);
            }
        }
        self.reconcile();
        true
    }

    /// Runs the catalog derivation with correction and clamps the cursor.
    ///
    /// Called after every state change so a page past the end is reset to page 1
    /// in the controller, not only in what gets drawn.
    pub fn reconcile(&mut self) {
        let visible = self.controller.derive(&self.records).items.len();
        self.cursor = if visible == 0 {
            0
        } else {
            self.cursor.min(visible - 1)
        };
    }

    /// Current derived result, without corrections.
    #[must_use]
    pub fn derived(&self) -> DerivedResult<'_> {
        self.controller.view(&self.records)
    }

    pub fn move_cursor_down(&mut self) {
        let visible = self.derived().items.len();
        if visible == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % visible;
    }

    pub fn move_cursor_up(&mut self) {
        let visible = self.derived().items.len();
        if visible == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 {
            visible - 1
        } else {
            self.cursor - 1
        };
    }

    /// The record under the cursor, if any.
    #[must_use]
    pub fn record_under_cursor(&self) -> Option<&Record> {
        self.derived().items.get(self.cursor).copied()
    }

    /// True when the selection resolves to a record and the overlay is drawn.
    #[must_use]
    pub fn detail_visible(&self) -> bool {
        matches!(
            self.controller.resolve_selection(&self.records),
            Resolution::Found(_)
        )
    }

    /// Computes a renderable view model for a terminal of `rows` × `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols).entered();

        let derived = self.derived();
        let criteria = self.controller.criteria();

        UIViewModel {
            header: self.compute_header(&derived),
            controls: ControlsInfo {
                genre_label: self.genres.selector_label(&criteria.genre),
                sort_label: criteria.sort.label().to_string(),
            },
            search_bar: self.compute_search_bar(),
            body: self.compute_body(&derived, rows),
            pagination: Self::compute_pagination(&derived, criteria.page_size),
            banner: match &self.supply {
                SupplyStatus::Failed(message) => Some(BannerInfo {
                    message: format!("Failed to load podcasts: {message}"),
                }),
                SupplyStatus::Loading | SupplyStatus::Ready => None,
            },
            footer: self.compute_footer(),
            detail: self.compute_detail(),
        }
    }

    fn compute_header(&self, derived: &DerivedResult<'_>) -> HeaderInfo {
        let criteria = self.controller.criteria();
        let title = if criteria.search_term.is_empty() {
            "Podcasts".to_string()
        } else {
            format!("Search Results for \"{}\"", criteria.search_term)
        };
        let count = if derived.total_count != self.records.len() {
            format!("({} of {})", derived.total_count, self.records.len())
        } else {
            format!("({})", self.records.len())
        };
        HeaderInfo { title, count }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Search => Some(SearchBarInfo {
                query: self.search_input.clone(),
                pending: self.controller.has_pending_search(),
            }),
            InputMode::Normal => None,
        }
    }

    fn compute_body(&self, derived: &DerivedResult<'_>, rows: usize) -> Body {
        if self.supply.is_loading() && self.records.is_empty() {
            return Body::Loading;
        }
        if derived.items.is_empty() {
            return Body::Empty(self.compute_empty_state());
        }

        let available_rows = self.calculate_available_rows(rows).max(1);
        let window_start = if self.cursor >= available_rows {
            self.cursor + 1 - available_rows
        } else {
            0
        };
        let window_end = (window_start + available_rows).min(derived.items.len());

        let needle = &self.controller.criteria().search_term;
        let items = derived.items[window_start..window_end]
            .iter()
            .enumerate()
            .map(|(offset, record)| {
                self.compute_display_item(record, window_start + offset == self.cursor, needle)
            })
            .collect();

        Body::Rows { items }
    }

    fn compute_display_item(&self, record: &Record, is_selected: bool, needle: &str) -> DisplayItem {
        DisplayItem {
            title: record.display_title().to_string(),
            seasons: record.seasons_label(),
            genres: self.genres.titles_for(record.genre_ids()).join(", "),
            updated: record.formatted_updated(),
            is_selected,
            highlight_ranges: substring_ranges(record.display_title(), needle),
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        let criteria = self.controller.criteria();
        let mut message = "No podcasts found".to_string();
        if !criteria.search_term.is_empty() {
            message.push_str(&format!(" matching \"{}\"", criteria.search_term));
        }
        if !criteria.genre.is_all() {
            message.push_str(" in selected genre");
        }

        let subtitle = if criteria.has_active_filters() {
            "Press c to clear all filters".to_string()
        } else {
            "Press r to reload".to_string()
        };

        EmptyState { message, subtitle }
    }

    fn compute_pagination(derived: &DerivedResult<'_>, page_size: usize) -> Option<PaginationInfo> {
        if derived.total_pages <= 1 {
            return None;
        }
        Some(PaginationInfo {
            current_page: derived.current_page,
            total_pages: derived.total_pages,
            range_label: format!(
                "Showing {}–{} of {}",
                derived.first_index(page_size),
                derived.last_index(page_size),
                derived.total_count
            ),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.detail_visible() {
            "Esc/q/Enter/x: close"
        } else {
            match self.input_mode {
                InputMode::Search => "Type to search  Enter: apply  Esc: clear  ↑/↓: move",
                InputMode::Normal => {
                    "j/k: move  h/l: page  Enter: details  /: search  g/G: genre  s: sort  c: clear  r: reload  q: quit"
                }
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
            source: self.source_label.clone(),
        }
    }

    fn compute_detail(&self) -> Option<DetailInfo> {
        match self.controller.resolve_selection(&self.records) {
            Resolution::Found(record) => Some(DetailInfo {
                title: record.display_title().to_string(),
                description: record
                    .description
                    .clone()
                    .filter(|d| !d.trim().is_empty())
                    .unwrap_or_else(|| "No description available".to_string()),
                genres: self
                    .genres
                    .titles_for(record.genre_ids())
                    .into_iter()
                    .map(ToString::to_string)
                    .collect(),
                seasons: record.seasons_label(),
                updated: record.formatted_updated(),
                image: record.image.clone(),
            }),
            Resolution::Closed | Resolution::NotFound => None,
        }
    }

    /// Rows left for the table after subtracting UI chrome.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        let chrome = match self.input_mode {
            InputMode::Normal => CHROME_ROWS,
            InputMode::Search => CHROME_ROWS + SEARCH_BAR_ROWS,
        };
        let banner = if self.supply.is_failed() { 1 } else { 0 };
        total_rows.saturating_sub(chrome + banner)
    }
}
