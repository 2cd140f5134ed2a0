//! Table component renderer.
//!
//! Renders the ticker table: one header row with the sort key, label and
//! direction arrow of each column, then one line per record of the current
//! page. Columns have fixed widths; trailing columns that do not fit the pane
//! are dropped.

use crate::ui::helpers::{self, display_len, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ColumnHeader, DisplayRow, Trend};

/// Width of each column, in column order (ID, Name, Rank, Price USD,
/// Change 24h, Price BTC, Market Cap).
const COLUMN_WIDTHS: [usize; 7] = [10, 26, 8, 17, 16, 17, 22];

/// Index of the name column, the only one carrying search highlights.
const NAME_COLUMN: usize = 1;

/// Index of the 24h change column, colored by trend.
const CHANGE_COLUMN: usize = 4;

const SEPARATOR: &str = " ";

/// Number of leading columns that fit in `cols` characters.
///
/// Always at least one; the first column is then cut to the pane width.
fn visible_columns(cols: usize) -> usize {
    let mut used = 0;
    let mut count = 0;

    for width in COLUMN_WIDTHS {
        let needed = if count == 0 { width } else { width + SEPARATOR.len() };
        if used + needed > cols {
            break;
        }
        used += needed;
        count += 1;
    }

    count.max(1)
}

fn column_width(index: usize, cols: usize) -> usize {
    COLUMN_WIDTHS.get(index).copied().unwrap_or(0).min(cols)
}

/// Text columns read left-aligned; numeric ones right-aligned unless cut.
fn align(text: &str, index: usize, width: usize) -> String {
    if index <= NAME_COLUMN || display_len(text) > width {
        fit(text, width)
    } else {
        helpers::fit_right(text, width)
    }
}

/// Renders the table column headers at the specified row.
///
/// The sorted column is drawn with the selection colors. Every column shows
/// the arrow it was given, colored with `sort_indicator_fg`.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(row: usize, columns: &[ColumnHeader], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());

    let visible = visible_columns(cols).min(columns.len());
    let mut used = 0;

    for (index, column) in columns.iter().take(visible).enumerate() {
        if index > 0 {
            print!("{SEPARATOR}");
            used += SEPARATOR.len();
        }

        let width = column_width(index, cols);
        let label = format!("{} {}", column.key, column.label);
        let label_width = width.saturating_sub(2);

        if column.is_active {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.header_fg));
        }
        print!("{}", align(&label, index, label_width));

        if width >= 2 {
            print!(" {}{}", Theme::fg(&theme.colors.sort_indicator_fg), column.arrow);
        }
        print!("{}{}", Theme::reset(), Theme::bold());
        used += width;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of rows)
pub fn render_table_rows(row: usize, rows: &[DisplayRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for display_row in rows {
        current_row = render_table_row(current_row, display_row, theme, cols);
    }
    current_row
}

/// Renders a single record line.
///
/// # Styling
///
/// - The name cell highlights the search match, if any
/// - The 24h change cell uses `positive_fg` or `negative_fg` by trend
/// - Everything else uses `text_normal`
fn render_table_row(row: usize, display_row: &DisplayRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let normal = &theme.colors.text_normal;
    print!("{}", Theme::fg(normal));

    let visible = visible_columns(cols).min(display_row.cells.len());
    let mut used = 0;

    for (index, cell) in display_row.cells.iter().take(visible).enumerate() {
        if index > 0 {
            print!("{SEPARATOR}");
            used += SEPARATOR.len();
        }

        let width = column_width(index, cols);
        let text = align(cell, index, width);

        match index {
            NAME_COLUMN => {
                let shown = if display_len(cell) > width {
                    width.saturating_sub(1)
                } else {
                    width
                };
                let range = display_row
                    .name_highlight
                    .map(|(start, end)| (start, end.min(shown)));
                print!("{}", helpers::highlighted(&text, range, theme, normal));
            }
            CHANGE_COLUMN => {
                let color = match display_row.trend {
                    Trend::Up => &theme.colors.positive_fg,
                    Trend::Down => &theme.colors.negative_fg,
                    Trend::Flat => normal,
                };
                print!("{}{text}{}", Theme::fg(color), Theme::fg(normal));
            }
            _ => print!("{text}"),
        }

        used += width;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_columns_fit_a_wide_pane() {
        let total: usize = COLUMN_WIDTHS.iter().sum::<usize>() + COLUMN_WIDTHS.len() - 1;
        assert_eq!(visible_columns(total), 7);
        assert_eq!(visible_columns(200), 7);
    }

    #[test]
    fn trailing_columns_drop_on_narrow_panes() {
        assert_eq!(visible_columns(37), 2);
        assert_eq!(visible_columns(36), 1);
        assert_eq!(visible_columns(3), 1);
    }

    #[test]
    fn numbers_align_right_text_left() {
        assert_eq!(align("BTC", 1, 6), "BTC   ");
        assert_eq!(align("42", 2, 6), "    42");
        assert_eq!(align("123456789", 2, 6), "12345…");
    }
}
