//! Event handling and state transition logic.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the key map, the tick timer or the supply worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations go through [`AppState`] and its catalog controller
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `CursorDown`, `CursorUp`, `NextPage`, `PreviousPage`, `SetPage`
//! - **Criteria**: `NextGenre`, `PreviousGenre`, `SetGenre`, `NextSort`, `SetSort`, `ClearFilters`
//! - **Search input**: `EnterSearch`, `Char`, `Backspace`, `CommitSearch`, `ClearSearch`
//! - **Detail**: `OpenSelected`, `SelectRecord`, `CloseDetail`
//! - **System**: `Tick`, `Refresh`, `Quit`, `WorkerResponse`
//!
//! # Example
//!
//! ```rust
//! use podshelf::app::{handle_event, AppState, Event};
//! use podshelf::catalog::CatalogController;
//! use podshelf::domain::GenreCatalog;
//! use podshelf::ui::Theme;
//!
//! let mut state = AppState::new(CatalogController::default(), GenreCatalog::builtin(), Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::NextSort)?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), podshelf::PodshelfError>(())
//! ```

use crate::app::modes::InputMode;
use crate::app::{Action, AppState};
use crate::catalog::SortCriterion;
use crate::domain::error::Result;
use crate::domain::{GenreSelector, RecordId};
use crate::worker::SupplyResponse;
use std::time::Instant;

/// Events triggered by user input, the clock or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down one row (wraps to top).
    CursorDown,
    /// Moves the cursor up one row (wraps to bottom).
    CursorUp,
    NextPage,
    PreviousPage,
    /// Requests a 1-based page directly.
    SetPage(usize),

    /// Cycles the genre filter forwards (`All → 1 → … → All`).
    NextGenre,
    PreviousGenre,
    SetGenre(GenreSelector),
    NextSort,
    SetSort(SortCriterion),
    /// Clears search and genre.
    ClearFilters,

    /// Focuses the search box.
    EnterSearch,
    /// Appends a character to the search text (debounced).
    Char { ch: char, at: Instant },
    /// Removes the last character of the search text (debounced).
    Backspace { at: Instant },
    /// Applies the search text immediately and leaves the search box.
    CommitSearch,
    /// Clears the search text and term and leaves the search box.
    ClearSearch,

    /// Opens the detail overlay on the record under the cursor.
    OpenSelected,
    /// Opens the detail overlay on a specific record.
    SelectRecord(RecordId),
    /// Closes the detail overlay. Every dismissal path maps here.
    CloseDetail,

    /// Clock tick; releases a debounced search whose delay has passed.
    Tick(Instant),
    /// Fetches the record list anew.
    Refresh,
    Quit,

    /// Wraps a response from the background supply worker.
    WorkerResponse(SupplyResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The returned bool says whether the screen needs to be redrawn.
///
/// # Errors
///
/// The current event set cannot fail; the `Result` keeps the handler signature
/// stable for events that will.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let span = (!matches!(event, Event::Tick(_)))
        .then(|| tracing::debug_span!("handle_event", event_type = ?event).entered());
    if span.is_some() {
        tracing::debug!("handling event");
    }

    let outcome = match event {
        Event::CursorDown => {
            state.move_cursor_down();
            (true, vec![])
        }
        Event::CursorUp => {
            state.move_cursor_up();
            (true, vec![])
        }
        Event::NextPage => {
            let derived = state.derived();
            if derived.current_page < derived.total_pages {
                let next = derived.current_page + 1;
                state.controller.set_page(next);
                state.cursor = 0;
                (true, vec![])
            } else {
                (false, vec![])
            }
        }
        Event::PreviousPage => {
            let current = state.derived().current_page;
            if current > 1 {
                state.controller.set_page(current - 1);
                state.cursor = 0;
                (true, vec![])
            } else {
                (false, vec![])
            }
        }
        Event::SetPage(page) => {
            state.controller.set_page(*page);
            state.cursor = 0;
            (true, vec![])
        }
        Event::NextGenre => {
            let next = state
                .genres
                .next_selector(&state.controller.criteria().genre);
            state.controller.set_genre(next);
            state.cursor = 0;
            (true, vec![])
        }
        Event::PreviousGenre => {
            let previous = state
                .genres
                .previous_selector(&state.controller.criteria().genre);
            state.controller.set_genre(previous);
            state.cursor = 0;
            (true, vec![])
        }
        Event::SetGenre(selector) => {
            state.controller.set_genre(selector.clone());
            state.cursor = 0;
            (true, vec![])
        }
        Event::NextSort => {
            let next = state.controller.criteria().sort.next();
            state.controller.set_sort_criterion(next);
            state.cursor = 0;
            (true, vec![])
        }
        Event::SetSort(sort) => {
            state.controller.set_sort_criterion(*sort);
            state.cursor = 0;
            (true, vec![])
        }
        Event::ClearFilters => {
            state.controller.clear_filters();
            state.search_input.clear();
            state.input_mode = InputMode::Normal;
            state.cursor = 0;
            (true, vec![])
        }
        Event::EnterSearch => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            state
                .search_input
                .clone_from(&state.controller.criteria().search_term);
            (true, vec![])
        }
        Event::Char { ch, at } => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.search_input.push(*ch);
            tracing::trace!(query = %state.search_input, "search text updated");
            state.controller.input_search_text(&state.search_input, *at);
            (true, vec![])
        }
        Event::Backspace { at } => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.search_input.pop();
            state.controller.input_search_text(&state.search_input, *at);
            (true, vec![])
        }
        Event::CommitSearch => {
            tracing::debug!(query = %state.search_input, "search committed");
            state.controller.commit_search_text(&state.search_input);
            state.input_mode = InputMode::Normal;
            state.cursor = 0;
            (true, vec![])
        }
        Event::ClearSearch => {
            state.search_input.clear();
            state.controller.clear_search();
            state.input_mode = InputMode::Normal;
            state.cursor = 0;
            (true, vec![])
        }
        Event::OpenSelected => match state.record_under_cursor().map(|r| r.id.clone()) {
            Some(id) => {
                state.controller.select_record(id);
                (true, vec![])
            }
            None => {
                tracing::debug!("no record under cursor");
                (false, vec![])
            }
        },
        Event::SelectRecord(id) => {
            state.controller.select_record(id.clone());
            (true, vec![])
        }
        Event::CloseDetail => {
            state.controller.close_selection();
            (true, vec![])
        }
        Event::Tick(now) => {
            if state.controller.tick(*now) {
                tracing::debug!(term = %state.controller.criteria().search_term, "debounced search applied");
                state.cursor = 0;
                (true, vec![])
            } else {
                (false, vec![])
            }
        }
        Event::Refresh => {
            let request = state.begin_fetch();
            (true, vec![Action::PostToWorker(request)])
        }
        Event::Quit => (false, vec![Action::Quit]),
        Event::WorkerResponse(response) => (state.accept_response(response.clone()), vec![]),
    };

    if outcome.0 {
        state.reconcile();
    }
    Ok(outcome)
}
