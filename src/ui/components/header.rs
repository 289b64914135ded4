//! Header and controls bar renderers.
//!
//! The header shows the catalog title (or the active search) with the result
//! count; the controls bar below it shows the genre filter and sort order.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ControlsInfo, HeaderInfo};

/// Renders the title bar at `row`, centered, and returns the next row.
///
/// # Layout
///
/// ```text
/// [left padding] TITLE (count) [right padding]
/// ```
pub fn render_header(out: &mut String, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let text = truncate(&format!("{} {}", header.title, header.count), cols);
    let text_len = display_width(&text);
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }

    out.push_str(&" ".repeat(padding));
    out.push_str(&text);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + text_len)));

    out.push_str(Theme::reset());
    row + 1
}

/// Renders ` Genre: … Sort: …` at `row` and returns the next row.
pub fn render_controls(out: &mut String, row: usize, controls: &ControlsInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    let genre = format!(" Genre: {}", controls.genre_label);
    let sort = format!("   Sort: {}", controls.sort_label);
    let used = display_width(&genre) + display_width(&sort);

    for (caption, value) in [
        (" Genre: ", controls.genre_label.as_str()),
        ("   Sort: ", controls.sort_label.as_str()),
    ] {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(caption);
        out.push_str(&Theme::fg(&theme.colors.accent));
        out.push_str(value);
    }
    out.push_str(&" ".repeat(cols.saturating_sub(used)));
    out.push_str(Theme::reset());
    row + 1
}
