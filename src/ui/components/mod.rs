//! Composable UI component renderers.
//!
//! Each component renders one part of the screen at a given row and returns
//! the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with the fetch status
//! - [`search`]: Search input box
//! - [`table`]: Ticker table with sortable column headers
//! - [`empty`]: Message shown instead of table rows
//! - [`pagination`]: Page buttons
//! - [`footer`]: Keybinding hints

mod empty;
mod footer;
mod header;
mod pagination;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// First table row when no search bar is shown: blank line, header, border
/// and column headers come before it.
const TABLE_FIRST_ROW: usize = 5;

/// Height of the boxed search bar.
const SEARCH_BAR_HEIGHT: usize = 3;

/// Row of the pagination bar; the border and footer follow it.
#[must_use]
pub const fn pagination_row(rows: usize) -> usize {
    rows.saturating_sub(3)
}

/// Number of table rows that fit between the column headers and the
/// pagination bar.
#[must_use]
pub const fn table_capacity(rows: usize, with_search_bar: bool) -> usize {
    let first_row = if with_search_bar {
        TABLE_FIRST_ROW + SEARCH_BAR_HEIGHT
    } else {
        TABLE_FIRST_ROW
    };
    pagination_row(rows).saturating_sub(first_row)
}

/// Page whose button is drawn at the one-based screen position `(row, col)`.
#[must_use]
pub fn page_at(vm: &UIViewModel, rows: usize, cols: usize, row: usize, col: usize) -> Option<usize> {
    if row != pagination_row(rows) || table_capacity(rows, vm.search_bar.is_some()) == 0 {
        return None;
    }
    button_at(&vm.pagination, cols, col)
}

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use pagination::{button_at, render_pagination};
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full screen.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines, only when present]
/// [Column Headers]
/// [Table Rows | Empty State]
/// [Blank padding to fill screen]
/// [Pagination]
/// [Border]
/// [Footer]
/// ```
///
/// At most [`table_capacity`] rows are drawn. The plugin sizes its pages to
/// that budget before rendering, so a full page always fits.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    current_row = render_table_headers(current_row, &vm.columns, theme, cols);

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let pagination_row = pagination_row(rows);

    if let Some(empty) = &vm.empty_state {
        if current_row + 3 <= pagination_row {
            render_empty_state(current_row, empty, theme, cols);
        }
    } else {
        let shown = vm.rows.len().min(table_capacity(rows, vm.search_bar.is_some()));
        render_table_rows(current_row, &vm.rows[..shown], theme, cols);
    }

    if pagination_row > current_row {
        render_pagination(pagination_row, &vm.pagination, theme, cols);
    }
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
