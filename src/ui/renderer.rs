//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component layout

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
///
/// # Output
///
/// Prints ANSI-styled output to stdout using `print!`. Every line is
/// positioned explicitly; the screen is not cleared first.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel();

    tracing::trace!(
        rows = viewmodel.rows.len(),
        pages = viewmodel.pagination.pages.len(),
        empty = viewmodel.empty_state.is_some(),
        "rendering"
    );

    components::render_layout(&viewmodel, &state.theme, cols, rows);
}
