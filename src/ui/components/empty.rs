//! Placeholder renderers for the table area: the empty state, the loading
//! indicator and the supply failure banner.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BannerInfo, EmptyState};

fn centered_line(out: &mut String, row: usize, text: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = display_width(&text);
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(out, row, 1);
    out.push_str(&" ".repeat(padding));
    out.push_str(&text);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + len)));
}

/// Renders the two-line empty state starting two rows below `row`.
///
/// ```text
/// [blank]
/// [blank]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    centered_line(out, row + 2, &empty.message, cols);
    out.push_str(Theme::reset());

    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    centered_line(out, row + 3, &empty.subtitle, cols);
    out.push_str(Theme::reset());
}

pub fn render_loading(out: &mut String, row: usize, theme: &Theme, cols: usize) {
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    centered_line(out, row + 2, "Loading podcasts...", cols);
    out.push_str(Theme::reset());
}

/// Renders the failure banner across the full width and returns the next row.
pub fn render_banner(out: &mut String, row: usize, banner: &BannerInfo, theme: &Theme, cols: usize) -> usize {
    let text = truncate(&format!(" ! {}", banner.message), cols);

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.error_fg));
    out.push_str(&Theme::bg(&theme.colors.error_bg));
    out.push_str(&text);
    out.push_str(&" ".repeat(cols.saturating_sub(display_width(&text))));
    out.push_str(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_is_centered() {
        let mut out = String::new();
        let empty = EmptyState {
            message: "No podcasts found".to_string(),
            subtitle: "Press r to reload".to_string(),
        };
        render_empty_state(&mut out, 5, &empty, &Theme::default(), 37);
        assert!(out.contains("\u{1b}[7;1H          No podcasts found          "));
        assert!(out.contains("Press r to reload"));
    }

    #[test]
    fn banner_carries_message() {
        let mut out = String::new();
        let banner = BannerInfo {
            message: "Failed to load podcasts: offline".to_string(),
        };
        assert_eq!(render_banner(&mut out, 4, &banner, &Theme::default(), 80), 5);
        assert!(out.contains(" ! Failed to load podcasts: offline"));
    }
}
