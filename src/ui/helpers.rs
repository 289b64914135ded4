//! Shared rendering utilities and helpers.
//!
//! Components draw into a frame buffer (`&mut String`) rather than straight to
//! stdout; the runner writes the finished frame in one go. Everything here is
//! UTF-8 safe: widths and highlight ranges are counted in characters, never bytes.
//!
//! # Example
//!
//! ```rust
//! use podshelf::ui::helpers::{render_highlighted_text, substring_ranges};
//! use podshelf::ui::Theme;
//!
//! let theme = Theme::default();
//! let ranges = substring_ranges("Rust in Production", "rust");
//! assert_eq!(ranges, vec![(0, 4)]);
//!
//! let mut frame = String::new();
//! render_highlighted_text(&mut frame, "Rust in Production", &ranges, &theme, false);
//! assert!(frame.contains("Rust"));
//! ```

use crate::ui::theme::Theme;

/// Appends a cursor move to `row`/`col` (both 1-indexed).
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Number of terminal cells `text` occupies, counting one per character.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `width` characters, ending in "..." when cut.
///
/// # Examples
///
/// ```
/// use podshelf::ui::helpers::truncate;
///
/// assert_eq!(truncate("Serial", 10), "Serial");
/// assert_eq!(truncate("Stuff You Should Know", 10), "Stuff Y...");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut cut: String = text.chars().take(width - 3).collect();
    cut.push_str("...");
    cut
}

/// Left-aligns `text` in a field of `width` characters, truncating if needed.
#[must_use]
pub fn pad(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let fill = width.saturating_sub(display_width(&text));
    format!("{text}{}", " ".repeat(fill))
}

/// Greedy word wrap to lines of at most `width` characters.
///
/// Words longer than `width` are split. Blank input yields no lines.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            lines.push(word.drain(..width).collect());
        }
        let word: String = word.into_iter().collect();
        if word.is_empty() {
            continue;
        }
        let needed = display_width(&word) + usize::from(!line.is_empty());
        if display_width(&line) + needed > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Character ranges of every non-overlapping, case-insensitive occurrence of
/// `needle` in `text`.
///
/// Returns no ranges when the needle is blank, or when lowercasing changes the
/// character count of `text` (positions would no longer line up).
#[must_use]
pub fn substring_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    if lowered.chars().count() != text.chars().count() {
        return Vec::new();
    }

    let needle_chars = needle.chars().count();
    lowered
        .match_indices(&needle)
        .map(|(byte_idx, _)| {
            let start = lowered[..byte_idx].chars().count();
            (start, start + needle_chars)
        })
        .collect()
}

/// Appends `text` with the given character ranges highlighted.
///
/// Ranges are `(start, end)` in character indices, end exclusive, sorted and
/// non-overlapping. When `is_selected` is `true` the text is written plain so
/// the selection colors stay intact.
pub fn render_highlighted_text(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        out.extend(&chars[current_pos..]);
    }
}
