//! Pagination bar component renderer.
//!
//! One button per page, the current one highlighted. When the buttons do not
//! fit the pane, a window around the current page is shown and the hidden
//! ends are marked with `…`.

use crate::ui::helpers::{display_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PageButton, PaginationInfo};
use std::ops::Range;

/// Width of a button label such as ` 12 ` plus the gap after it.
fn button_width(button: &PageButton) -> usize {
    button.number.to_string().len() + 3
}

/// Picks the contiguous run of buttons to show around `active`.
///
/// `capacity` is how many buttons fit; the window is centered on the active
/// button and shifted to stay within `0..count`.
fn page_window(count: usize, active: usize, capacity: usize) -> Range<usize> {
    if capacity >= count {
        return 0..count;
    }

    let capacity = capacity.max(1);
    let start = active
        .saturating_sub(capacity / 2)
        .min(count - capacity);
    start..start + capacity
}

/// Buttons that fit a pane `cols` wide.
fn visible_window(pages: &[PageButton], cols: usize) -> Range<usize> {
    let widest = pages.last().map_or(4, button_width);
    // two ellipsis markers plus a leading space
    let capacity = cols.saturating_sub(5) / widest;
    let active = pages.iter().position(|p| p.is_active).unwrap_or(0);
    page_window(pages.len(), active, capacity)
}

/// Page number of the button drawn at one-based column `col`.
///
/// Walks the same layout as [`render_pagination`]: a leading space, an
/// optional `… ` marker, then each ` N ` label followed by a gap.
pub fn button_at(pagination: &PaginationInfo, cols: usize, col: usize) -> Option<usize> {
    let pages = &pagination.pages;
    let window = visible_window(pages, cols);
    let mut start = if window.start > 0 { 4 } else { 2 };

    for button in &pages[window] {
        let width = button_width(button) - 1;
        if (start..start + width).contains(&col) {
            return Some(button.number);
        }
        start += width + 1;
    }
    None
}

/// Renders the pagination bar at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_pagination(row: usize, pagination: &PaginationInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let pages = &pagination.pages;
    let window = visible_window(pages, cols);

    let mut line = String::from(" ");
    let mut used = 1;

    if window.start > 0 {
        line.push_str(&Theme::fg(&theme.colors.text_dim));
        line.push_str("… ");
        used += 2;
    }

    for button in &pages[window.clone()] {
        let label = format!(" {} ", button.number);
        used += display_len(&label) + 1;

        if button.is_active {
            line.push_str(Theme::bold());
            line.push_str(&Theme::fg(&theme.colors.selection_fg));
            line.push_str(&Theme::bg(&theme.colors.selection_bg));
        } else {
            line.push_str(&Theme::fg(&theme.colors.text_dim));
        }
        line.push_str(&label);
        line.push_str(Theme::reset());
        line.push(' ');
    }

    if window.end < pages.len() {
        line.push_str(&Theme::fg(&theme.colors.text_dim));
        line.push('…');
        used += 1;
    }

    print!("{line}");
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}
