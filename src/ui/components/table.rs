//! Catalog table renderer.
//!
//! Four columns: TITLE takes whatever width is left after the fixed SEASONS,
//! GENRES and UPDATED columns. Search matches in the title are highlighted
//! unless the row is under the cursor.

use crate::ui::helpers::{self, display_width, pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const SEASONS_WIDTH: usize = 11;
const GENRES_WIDTH: usize = 28;
const UPDATED_WIDTH: usize = 19;
const MIN_TITLE_WIDTH: usize = 12;

/// Width of the TITLE column for a terminal of `cols` columns.
fn title_width(cols: usize) -> usize {
    cols.saturating_sub(1 + SEASONS_WIDTH + GENRES_WIDTH + UPDATED_WIDTH)
        .max(MIN_TITLE_WIDTH)
}

/// Renders the column captions at `row` and returns the next row.
pub fn render_table_headers(out: &mut String, row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    let line = format!(
        " {}{}{}{}",
        pad("TITLE", title_width(cols)),
        pad("SEASONS", SEASONS_WIDTH),
        pad("GENRES", GENRES_WIDTH),
        pad("UPDATED", UPDATED_WIDTH),
    );
    out.push_str(&truncate(&line, cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders every item from `row` downwards and returns the row after the last.
pub fn render_table_rows(out: &mut String, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(out, current_row, item, theme, cols);
    }
    current_row
}

/// Renders one record row.
///
/// # Styling Precedence
///
/// 1. Selection colors (if `is_selected`)
/// 2. Search match highlights (unless selected)
/// 3. Normal text color
fn render_table_row(out: &mut String, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    if item.is_selected {
        out.push_str(&Theme::fg(&theme.colors.selection_fg));
        out.push_str(&Theme::bg(&theme.colors.selection_bg));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }

    let width = title_width(cols);
    let title = truncate(&item.title, width.saturating_sub(1));
    let visible = if title == item.title {
        display_width(&title)
    } else {
        display_width(&title).saturating_sub(3)
    };
    let ranges: Vec<(usize, usize)> = item
        .highlight_ranges
        .iter()
        .filter(|(start, _)| *start < visible)
        .map(|&(start, end)| (start, end.min(visible)))
        .collect();

    out.push(' ');
    helpers::render_highlighted_text(out, &title, &ranges, theme, item.is_selected);
    out.push_str(&" ".repeat(width.saturating_sub(display_width(&title))));

    out.push_str(&pad(&item.seasons, SEASONS_WIDTH));
    out.push_str(&pad(&item.genres, GENRES_WIDTH - 1));
    out.push(' ');
    out.push_str(&pad(&item.updated, UPDATED_WIDTH));

    let line_len = 1 + width + SEASONS_WIDTH + GENRES_WIDTH + UPDATED_WIDTH;
    out.push_str(&" ".repeat(cols.saturating_sub(line_len)));

    out.push_str(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, selected: bool, ranges: Vec<(usize, usize)>) -> DisplayItem {
        DisplayItem {
            title: title.to_string(),
            seasons: "3 seasons".to_string(),
            genres: "History, Comedy".to_string(),
            updated: "Mar 4, 2024".to_string(),
            is_selected: selected,
            highlight_ranges: ranges,
        }
    }

    #[test]
    fn captions_name_every_column() {
        let mut out = String::new();
        render_table_headers(&mut out, 5, &Theme::default(), 100);
        for caption in ["TITLE", "SEASONS", "GENRES", "UPDATED"] {
            assert!(out.contains(caption), "missing {caption}");
        }
    }

    #[test]
    fn rows_show_all_fields() {
        let mut out = String::new();
        let next = render_table_rows(
            &mut out,
            6,
            &[item("Hardcore History", false, vec![]), item("Serial", true, vec![])],
            &Theme::default(),
            100,
        );
        assert_eq!(next, 8);
        assert!(out.contains("Hardcore History"));
        assert!(out.contains("3 seasons"));
        assert!(out.contains("History, Comedy"));
        assert!(out.contains("Mar 4, 2024"));
    }

    #[test]
    fn selected_row_is_not_highlighted() {
        let theme = Theme::default();
        let highlight = Theme::bg(&theme.colors.match_highlight_bg);

        let mut plain = String::new();
        render_table_rows(&mut plain, 1, &[item("Serial", false, vec![(0, 3)])], &theme, 100);
        assert!(plain.contains(&highlight));

        let mut selected = String::new();
        render_table_rows(&mut selected, 1, &[item("Serial", true, vec![(0, 3)])], &theme, 100);
        assert!(!selected.contains(&highlight));
    }

    #[test]
    fn long_titles_are_truncated() {
        let mut out = String::new();
        let long = "A".repeat(200);
        render_table_rows(&mut out, 1, &[item(&long, false, vec![(150, 160)])], &Theme::default(), 80);
        assert!(out.contains("..."));
        assert!(!out.contains(&long));
    }
}
