//! Header component renderer.
//!
//! Renders the title bar: the centered title and the fetch status pinned to
//! the right edge.

use crate::ui::helpers::{display_len, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// # Layout
///
/// ```text
/// [padding] TITLE [padding] status
/// ```
///
/// The title is centered across the full width. The status is dimmed and
/// right-aligned; it is dropped when it would overlap the title.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = fit(&header.title, display_len(&header.title).min(cols));
    let title_len = display_len(&title);
    let padding = cols.saturating_sub(title_len) / 2;

    let status = format!("{} ", header.status);
    let status_len = display_len(&status);
    let show_status = padding + title_len + status_len < cols;
    let fill = if show_status {
        cols - padding - title_len - status_len
    } else {
        cols.saturating_sub(padding + title_len)
    };

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}{title}{}", Theme::bold(), Theme::reset());
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", " ".repeat(fill));

    if show_status {
        print!("{}{status}", Theme::fg(&theme.colors.text_dim));
    }

    print!("{}", Theme::reset());
    row + 1
}
