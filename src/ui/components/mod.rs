//! Composable UI component renderers.
//!
//! Each component appends one part of the screen to the frame buffer and
//! returns the next free row where that makes sense.
//!
//! # Components
//!
//! - [`header`]: Title bar with result count, genre/sort controls bar
//! - [`search`]: Search input box
//! - [`table`]: Catalog list with columns (TITLE, SEASONS, GENRES, UPDATED)
//! - [`empty`]: Empty state, loading indicator, failure banner
//! - [`footer`]: Pagination bar and keybinding hints
//! - [`detail`]: Detail overlay for the selected show
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Controls]
//! [Border]
//! [Failure banner]        (only after a failed fetch)
//! [Search Bar - 3 lines]  (only while searching)
//! [Table Headers]
//! [Table Rows | Empty state | Loading]
//! [Blank padding to fill screen]
//! [Pagination]            (blank with a single page)
//! [Border]
//! [Footer]
//! ```

mod detail;
mod empty;
mod footer;
mod header;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

use detail::render_detail;
use empty::{render_banner, render_empty_state, render_loading};
use footer::{render_footer, render_pagination};
use header::{render_controls, render_header};
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders the full screen layout for `vm`.
pub fn render_layout(out: &mut String, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_controls(out, current_row, &vm.controls, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    if let Some(banner) = &vm.banner {
        current_row = render_banner(out, current_row, banner, theme, cols);
    }
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(out, current_row, search, theme, cols);
    }
    current_row = render_table_headers(out, current_row, theme, cols);

    match &vm.body {
        Body::Loading => render_loading(out, current_row, theme, cols),
        Body::Empty(empty) => render_empty_state(out, current_row, empty, theme, cols),
        Body::Rows { items } => {
            let _ = render_table_rows(out, current_row, items, theme, cols);
        }
    }

    let footer_row = rows.max(current_row + 3);
    if let Some(pagination) = &vm.pagination {
        render_pagination(out, footer_row - 2, pagination, theme, cols);
    }
    render_border(out, footer_row - 1, &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);

    if let Some(detail) = &vm.detail {
        render_detail(out, detail, theme, rows, cols);
    }
}
