//! Search bar component renderer.
//!
//! This module renders the search input box with a bordered frame, the typed
//! text and a marker while the text waits out the debounce delay.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Shown at the right edge of the box while typed text is not yet applied.
const PENDING_MARKER: &str = "…";

/// Renders the search input box at `row` and returns the row after it.
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────────┐ [margin]
/// [margin] │ Search: ...   … │ [margin]
/// [margin] └─────────────────┘ [margin]
/// ```
///
/// The box width is `cols - (2 * SEARCH_BOX_MARGIN)`; the inner content width
/// is `box_width - 2`.
pub fn render_search_bar(out: &mut String, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let marker = if search.pending { PENDING_MARKER } else { " " };

    position_cursor(out, row, 1);
    out.push_str(&" ".repeat(SEARCH_BOX_MARGIN));
    out.push_str(&Theme::fg(&theme.colors.search_bar_border));
    out.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    let search_text = truncate(
        &format!(" Search: {}█", search.query),
        inner_width.saturating_sub(2),
    );
    let padding = inner_width.saturating_sub(display_width(&search_text) + 2);

    position_cursor(out, row + 1, 1);
    out.push_str(&" ".repeat(SEARCH_BOX_MARGIN));
    out.push_str(&Theme::fg(&theme.colors.search_bar_border));
    out.push('│');
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&search_text);
    out.push_str(&" ".repeat(padding));
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(marker);
    out.push(' ');
    out.push_str(&Theme::fg(&theme.colors.search_bar_border));
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    out.push_str(&" ".repeat(SEARCH_BOX_MARGIN));
    out.push_str(&Theme::fg(&theme.colors.search_bar_border));
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    row + 3
}
