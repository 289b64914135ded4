//! Detail overlay renderer.
//!
//! Draws a bordered box over the middle of the screen with everything known
//! about the selected show. The description is word-wrapped and cut to the
//! space available.

use crate::ui::helpers::{display_width, pad, position_cursor, truncate, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailInfo;

const MAX_OVERLAY_WIDTH: usize = 76;
const OVERLAY_MARGIN: usize = 4;

/// Renders the overlay for a screen of `rows` × `cols`.
pub fn render_detail(out: &mut String, detail: &DetailInfo, theme: &Theme, rows: usize, cols: usize) {
    let width = cols.saturating_sub(OVERLAY_MARGIN * 2).min(MAX_OVERLAY_WIDTH).max(20);
    let inner = width - 4;
    let height = rows.saturating_sub(4).max(8);
    let top = (rows.saturating_sub(height) / 2).max(1);
    let left = (cols.saturating_sub(width) / 2).max(1);

    let genres = if detail.genres.is_empty() {
        "No genres listed".to_string()
    } else {
        detail.genres.join(", ")
    };

    let mut lines: Vec<(String, bool)> = vec![
        (detail.title.clone(), true),
        (String::new(), false),
        (format!("Genres:  {genres}"), false),
        (format!("Seasons: {}", detail.seasons), false),
        (format!("Updated: {}", detail.updated), false),
    ];
    if !detail.image.is_empty() {
        lines.push((format!("Image:   {}", detail.image), false));
    }
    lines.push((String::new(), false));

    // border rows, closing hint and its spacer
    let body_rows = height.saturating_sub(4);
    let description_rows = body_rows.saturating_sub(lines.len());
    let mut description = wrap_text(&detail.description, inner);
    if description.len() > description_rows {
        description.truncate(description_rows);
        if let Some(last) = description.last_mut() {
            *last = truncate(&format!("{last} ..."), inner);
        }
    }
    lines.extend(description.into_iter().map(|line| (line, false)));
    lines.truncate(body_rows);

    let border = Theme::fg(&theme.colors.overlay_border);
    let background = Theme::bg(&theme.colors.overlay_bg);

    position_cursor(out, top, left);
    out.push_str(&background);
    out.push_str(&border);
    out.push_str(&format!("╭{}╮", "─".repeat(width - 2)));

    let mut row = top + 1;
    for (text, emphasized) in &lines {
        position_cursor(out, row, left);
        out.push_str(&border);
        out.push_str("│ ");
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        if *emphasized {
            out.push_str(Theme::bold());
        }
        out.push_str(&pad(text, inner));
        if *emphasized {
            out.push_str(Theme::reset());
            out.push_str(&background);
        }
        out.push_str(&border);
        out.push_str(" │");
        row += 1;
    }

    let hint = "Esc/q/Enter/x: close";
    while row < top + height - 1 {
        position_cursor(out, row, left);
        out.push_str(&border);
        out.push_str("│ ");
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        let text = if row == top + height - 2 { hint } else { "" };
        let text = truncate(text, inner);
        out.push_str(&" ".repeat(inner.saturating_sub(display_width(&text))));
        out.push_str(&text);
        out.push_str(&border);
        out.push_str(" │");
        row += 1;
    }

    position_cursor(out, row, left);
    out.push_str(&format!("╰{}╯", "─".repeat(width - 2)));
    out.push_str(Theme::reset());
}
