//! Footer and pagination bar renderers.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, PaginationInfo};

/// Page numbers shown around the current page.
const PAGE_WINDOW: usize = 7;

/// Renders keybinding hints on the left and the record source on the right.
///
/// When both do not fit, the source is dropped first and the hints are
/// truncated after that.
pub fn render_footer(out: &mut String, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let hints = format!(" {}", footer.keybindings);
    let source = format!("{} ", footer.source);
    let fits = display_width(&hints) + display_width(&source) + 2 <= cols && !footer.source.is_empty();

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    if fits {
        out.push_str(&hints);
        out.push_str(&" ".repeat(cols - display_width(&hints) - display_width(&source)));
        out.push_str(&source);
    } else {
        let hints = truncate(&hints, cols);
        out.push_str(&hints);
        out.push_str(&" ".repeat(cols.saturating_sub(display_width(&hints))));
    }
    out.push_str(Theme::reset());
    row + 1
}

/// First and last page number of the visible window (both 1-based, inclusive).
fn page_window(current: usize, total: usize) -> (usize, usize) {
    if total <= PAGE_WINDOW {
        return (1, total);
    }
    let half = PAGE_WINDOW / 2;
    let start = current.saturating_sub(half).max(1).min(total + 1 - PAGE_WINDOW);
    (start, start + PAGE_WINDOW - 1)
}

/// Renders `‹ 1 2 [3] 4 ›   Showing 17–24 of 40` at `row`.
pub fn render_pagination(out: &mut String, row: usize, pagination: &PaginationInfo, theme: &Theme, cols: usize) -> usize {
    let (first, last) = page_window(pagination.current_page, pagination.total_pages);
    let mut used = 0;

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    let prev = if pagination.current_page > 1 { " ‹" } else { "  " };
    out.push_str(prev);
    used += 2;

    for page in first..=last {
        if page == pagination.current_page {
            let label = format!(" [{page}]");
            used += display_width(&label);
            out.push_str(Theme::bold());
            out.push_str(&Theme::fg(&theme.colors.accent));
            out.push_str(&label);
            out.push_str(Theme::reset());
            out.push_str(&Theme::fg(&theme.colors.text_dim));
        } else {
            let label = format!(" {page}");
            used += display_width(&label);
            out.push_str(&label);
        }
    }

    let next = if pagination.current_page < pagination.total_pages { " ›" } else { "  " };
    let range = format!("{next}   {}", pagination.range_label);
    let range = truncate(&range, cols.saturating_sub(used));
    used += display_width(&range);
    out.push_str(&range);
    out.push_str(&" ".repeat(cols.saturating_sub(used)));
    out.push_str(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_slides_with_current_page() {
        assert_eq!(page_window(1, 3), (1, 3));
        assert_eq!(page_window(1, 20), (1, 7));
        assert_eq!(page_window(10, 20), (7, 13));
        assert_eq!(page_window(20, 20), (14, 20));
    }

    #[test]
    fn pagination_marks_current_page() {
        let mut out = String::new();
        let info = PaginationInfo {
            current_page: 2,
            total_pages: 5,
            range_label: "Showing 9–16 of 40".to_string(),
        };
        render_pagination(&mut out, 20, &info, &Theme::default(), 80);
        assert!(out.contains(" [2]"));
        assert!(out.contains("Showing 9–16 of 40"));
        assert!(out.contains('‹'));
        assert!(out.contains('›'));
    }

    #[test]
    fn footer_shows_source_when_it_fits() {
        let footer = FooterInfo {
            keybindings: "q: quit".to_string(),
            source: "catalog.json".to_string(),
        };
        let mut wide = String::new();
        render_footer(&mut wide, 24, &footer, &Theme::default(), 60);
        assert!(wide.contains("catalog.json"));

        let mut narrow = String::new();
        render_footer(&mut narrow, 24, &footer, &Theme::default(), 12);
        assert!(!narrow.contains("catalog.json"));
        assert!(narrow.contains("q: quit"));
    }
}
