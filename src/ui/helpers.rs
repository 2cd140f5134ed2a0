//! Shared rendering utilities and helpers.
//!
//! Low-level text handling used by several components: cursor positioning,
//! fitting text into fixed-width cells and search match highlighting.
//! All widths and ranges are counted in characters, not bytes.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn display_len(text: &str) -> usize {
    text.chars().count()
}

/// Fits `text` into exactly `width` characters.
///
/// Shorter text is padded with spaces on the right. Longer text is cut and
/// its last visible character replaced by `…`.
///
/// # Example
///
/// ```rust
/// use zticker::ui::helpers::fit;
///
/// assert_eq!(fit("BTC", 5), "BTC  ");
/// assert_eq!(fit("Bitcoin", 5), "Bitc…");
/// ```
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let len = display_len(text);
    if len <= width {
        let mut fitted = String::with_capacity(text.len() + width - len);
        fitted.push_str(text);
        fitted.extend(std::iter::repeat(' ').take(width - len));
        return fitted;
    }

    if width == 0 {
        return String::new();
    }

    let mut fitted: String = text.chars().take(width - 1).collect();
    fitted.push('…');
    fitted
}

/// Right-aligns `text` in `width` characters, cutting from the left if needed.
#[must_use]
pub fn fit_right(text: &str, width: usize) -> String {
    let len = display_len(text);
    if len >= width {
        return text.chars().skip(len - width).collect();
    }
    format!("{}{text}", " ".repeat(width - len))
}

/// Styles the `range` characters of `text` with the match highlight colors.
///
/// `base_fg` is re-applied after the highlight so the rest of the cell keeps
/// its color. A range past the end of `text` is clipped; an empty or absent
/// range returns the text unchanged.
///
/// # Example
///
/// ```rust
/// use zticker::ui::helpers::highlighted;
/// use zticker::ui::Theme;
///
/// let theme = Theme::default();
/// let out = highlighted("Bitcoin", Some((3, 7)), &theme, "#ffffff");
/// assert!(out.starts_with("Bit\u{1b}["));
/// ```
#[must_use]
pub fn highlighted(
    text: &str,
    range: Option<(usize, usize)>,
    theme: &Theme,
    base_fg: &str,
) -> String {
    let chars: Vec<char> = text.chars().collect();
    let Some((start, end)) = range else {
        return text.to_string();
    };

    let end = end.min(chars.len());
    if start >= end {
        return text.to_string();
    }

    let before: String = chars[..start].iter().collect();
    let matched: String = chars[start..end].iter().collect();
    let after: String = chars[end..].iter().collect();

    format!(
        "{before}{}{}{matched}{}{}{after}",
        Theme::fg(&theme.colors.match_highlight_fg),
        Theme::bg(&theme.colors.match_highlight_bg),
        Theme::reset(),
        Theme::fg(base_fg),
    )
}
