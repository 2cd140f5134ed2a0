//! Empty state component renderer.
//!
//! Shown in place of the table rows while the fetch is pending, after it
//! failed, or when the current page holds no records.

use crate::ui::helpers::{display_len, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message starting at `row`.
///
/// # Layout
///
/// ```text
/// [blank line]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// Both lines are horizontally centered. The message uses `empty_state_fg`,
/// the subtitle uses `text_dim` with dim styling.
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    render_centered(row + 1, &empty.message, &Theme::fg(&theme.colors.empty_state_fg), cols);

    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    render_centered(row + 2, &empty.subtitle, &subtitle_style, cols);

    row + 3
}

fn render_centered(row: usize, text: &str, style: &str, cols: usize) {
    let len = display_len(text).min(cols);
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(padding));
    print!("{}", fit(text, len));
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}
