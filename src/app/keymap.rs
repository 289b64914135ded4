//! Keyboard bindings.
//!
//! Translates terminal key presses into application [`Event`]s. Which binding
//! applies depends on what has focus: the detail overlay first, then the search
//! box, then the catalog list.
//!
//! # Keybindings
//!
//! | Context | Keys | Event |
//! |---------|------|-------|
//! | any | `Ctrl+C` | `Quit` |
//! | detail | `Esc`, `q`, `x`, `Enter` | `CloseDetail` |
//! | search | `Esc` / `Enter` | `ClearSearch` / `CommitSearch` |
//! | search | `↑` / `↓` | `CursorUp` / `CursorDown` |
//! | list | `j`/`k`, `↓`/`↑` | cursor |
//! | list | `l`/`h`, `→`/`←` | next/previous page |
//! | list | `1`–`9` | jump to page |
//! | list | `g` / `G` | next/previous genre |
//! | list | `s` | next sort order |
//! | list | `c` | clear search and genre |
//! | list | `/` | search |
//! | list | `Enter` | open detail |
//! | list | `r` | refresh |
//! | list | `q` | quit |

use super::handler::Event;
use super::modes::InputMode;
use super::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

/// Maps a key press to an event, or `None` when the key is unbound.
///
/// `now` timestamps search edits so the debouncer can measure quiescence.
#[must_use]
pub fn map_key(state: &AppState, key: &KeyEvent, now: Instant) -> Option<Event> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    tracing::trace!(code = ?key.code, modifiers = ?key.modifiers, "key event");

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Event::Quit),
            KeyCode::Char('n') => Some(Event::CursorDown),
            KeyCode::Char('p') => Some(Event::CursorUp),
            _ => None,
        };
    }

    if state.detail_visible() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | 'x') => Some(Event::CloseDetail),
            _ => None,
        };
    }

    match state.input_mode {
        InputMode::Search => map_search_key(key, now),
        InputMode::Normal => map_list_key(state, key),
    }
}

fn map_search_key(key: &KeyEvent, now: Instant) -> Option<Event> {
    Some(match key.code {
        KeyCode::Esc => Event::ClearSearch,
        KeyCode::Enter => Event::CommitSearch,
        KeyCode::Backspace => Event::Backspace { at: now },
        KeyCode::Down => Event::CursorDown,
        KeyCode::Up => Event::CursorUp,
        KeyCode::Char(ch) => Event::Char { ch, at: now },
        _ => return None,
    })
}

fn map_list_key(state: &AppState, key: &KeyEvent) -> Option<Event> {
    Some(match key.code {
        KeyCode::Down | KeyCode::Char('j') => Event::CursorDown,
        KeyCode::Up | KeyCode::Char('k') => Event::CursorUp,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => Event::NextPage,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => Event::PreviousPage,
        KeyCode::Char(digit @ '1'..='9') => {
            Event::SetPage(digit.to_digit(10).map_or(1, |d| d as usize))
        }
        KeyCode::Char('g') => Event::NextGenre,
        KeyCode::Char('G') => Event::PreviousGenre,
        KeyCode::Char('s') => Event::NextSort,
        KeyCode::Char('c') => Event::ClearFilters,
        KeyCode::Char('/') => Event::EnterSearch,
        KeyCode::Char('r') => Event::Refresh,
        KeyCode::Char('q') => Event::Quit,
        KeyCode::Enter => Event::OpenSelected,
        KeyCode::Esc if !state.controller.criteria().search_term.is_empty() => Event::ClearSearch,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogController;
    use crate::domain::{GenreCatalog, Record};
    use crate::ui::Theme;
    use crate::worker::SupplyResponse;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new(
            CatalogController::default(),
            GenreCatalog::builtin(),
            Theme::default(),
        );
        let _ = state.begin_fetch();
        state.accept_response(SupplyResponse::Loaded {
            request_id: state.latest_request_id(),
            records: vec![Record::new("1", "One"), Record::new("2", "Two")],
        });
        state
    }

    #[test]
    fn list_bindings() {
        let state = loaded_state();
        let now = Instant::now();
        assert_eq!(map_key(&state, &press(KeyCode::Char('j')), now), Some(Event::CursorDown));
        assert_eq!(map_key(&state, &press(KeyCode::Char('3')), now), Some(Event::SetPage(3)));
        assert_eq!(map_key(&state, &press(KeyCode::Char('/')), now), Some(Event::EnterSearch));
        assert_eq!(map_key(&state, &press(KeyCode::Enter), now), Some(Event::OpenSelected));
        assert_eq!(map_key(&state, &press(KeyCode::Esc), now), None);
        assert_eq!(map_key(&state, &press(KeyCode::F(5)), now), None);
    }

    #[test]
    fn search_mode_types_letters() {
        let mut state = loaded_state();
        state.input_mode = InputMode::Search;
        let now = Instant::now();
        assert_eq!(
            map_key(&state, &press(KeyCode::Char('q')), now),
            Some(Event::Char { ch: 'q', at: now })
        );
        assert_eq!(map_key(&state, &press(KeyCode::Esc), now), Some(Event::ClearSearch));
        assert_eq!(map_key(&state, &press(KeyCode::Enter), now), Some(Event::CommitSearch));
    }

    #[test]
    fn every_dismissal_key_closes_detail() {
        let mut state = loaded_state();
        state.controller.select_record("1".into());
        let now = Instant::now();
        for code in [KeyCode::Esc, KeyCode::Enter, KeyCode::Char('q'), KeyCode::Char('x')] {
            assert_eq!(map_key(&state, &press(code), now), Some(Event::CloseDetail));
        }
        assert_eq!(map_key(&state, &press(KeyCode::Char('j')), now), None);
    }

    #[test]
    fn unresolved_selection_keeps_list_bindings() {
        let mut state = loaded_state();
        state.controller.select_record("missing".into());
        assert_eq!(
            map_key(&state, &press(KeyCode::Char('q')), Instant::now()),
            Some(Event::Quit)
        );
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut state = loaded_state();
        state.input_mode = InputMode::Search;
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&state, &key, Instant::now()), Some(Event::Quit));
    }
}
