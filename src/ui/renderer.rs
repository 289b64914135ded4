//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers, which
//!    append ANSI-styled text to a single frame buffer
//!
//! The caller writes the returned frame to the terminal in one go.
//!
//! # Example
//!
//! ```rust
//! use podshelf::app::AppState;
//! use podshelf::catalog::CatalogController;
//! use podshelf::domain::GenreCatalog;
//! use podshelf::ui::{render, Theme};
//!
//! let state = AppState::new(CatalogController::default(), GenreCatalog::builtin(), Theme::default());
//! let frame = render(&state, 24, 80);
//! assert!(frame.contains("Loading podcasts..."));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Erases the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Renders the whole screen for a terminal of `rows` × `cols` into a frame.
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols)
}

/// Renders a pre-computed view model into a frame.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut frame = String::with_capacity(rows * cols * 2);
    frame.push_str(CLEAR_SCREEN);
    components::render_layout(&mut frame, vm, theme, rows, cols);
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event};
    use crate::catalog::CatalogController;
    use crate::domain::{GenreCatalog, Record};
    use crate::worker::{SupplyRequest, SupplyResponse};

    fn loaded(records: Vec<Record>) -> AppState {
        let mut state = AppState::new(
            CatalogController::default(),
            GenreCatalog::builtin(),
            Theme::default(),
        );
        let SupplyRequest::Fetch { request_id } = state.begin_fetch() else {
            unreachable!()
        };
        state.accept_response(SupplyResponse::Loaded { request_id, records });
        state
    }

    fn shows(n: usize) -> Vec<Record> {
        (1..=n)
            .map(|i| {
                let mut record = Record::new(i.to_string(), format!("Show {i:02}"));
                record.seasons = Some(1);
                record.genres = Some(vec![3]);
                record
            })
            .collect()
    }

    #[test]
    fn full_frame_has_every_section() {
        let state = loaded(shows(10));
        let frame = render(&state, 24, 120);
        assert!(frame.starts_with(CLEAR_SCREEN));
        assert!(frame.contains("Podcasts (10)"));
        assert!(frame.contains("All Genres"));
        assert!(frame.contains("TITLE"));
        assert!(frame.contains("Show 01"));
        assert!(frame.contains("Showing 1–8 of 10"));
        assert!(frame.contains("q: quit"));
    }

    #[test]
    fn second_page_shows_remaining_rows() {
        let mut state = loaded(shows(10));
        handle_event(&mut state, &Event::NextPage).unwrap();
        let frame = render(&state, 24, 100);
        assert!(frame.contains("Show 09"));
        assert!(!frame.contains("Show 01"));
        assert!(frame.contains("Showing 9–10 of 10"));
    }

    #[test]
    fn single_page_has_no_pagination() {
        let state = loaded(shows(3));
        assert!(!render(&state, 24, 100).contains("Showing"));
    }

    #[test]
    fn detail_overlay_is_drawn_on_top() {
        let mut state = loaded(shows(3));
        handle_event(&mut state, &Event::OpenSelected).unwrap();
        let frame = render(&state, 24, 100);
        assert!(frame.contains("No description available"));
        assert!(frame.contains("Esc/q/Enter/x: close"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut state = loaded(shows(30));
        handle_event(&mut state, &Event::OpenSelected).unwrap();
        let _ = render(&state, 3, 10);
        let _ = render(&state, 0, 0);
    }
}
