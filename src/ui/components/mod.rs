//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar and data freshness line
//! - [`footer`]: Keybinding hints, toast and action button
//! - [`search`]: Search input box
//! - [`list`]: DAO rows and affordance rows
//! - [`empty`]: "No spaces found" state
//! - [`loading`]: Placeholder until the first load answers
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Updated N ago]
//! [Border]
//! [Search Bar - 3 lines, search mode only]
//! [Body: loading | empty | rows]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```
//!
//! The chrome takes 6 lines, 9 with the search bar.

mod empty;
mod footer;
mod header;
mod list;
mod loading;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{RenderState, UIViewModel};

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use list::render_list;
use loading::render_loading;
use search::render_search_bar;

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full frame for `vm`.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    match &vm.body {
        RenderState::Loading { message } => render_loading(current_row, message, theme, cols),
        RenderState::Empty(empty) => render_empty_state(current_row, empty, theme, cols),
        RenderState::Populated(body) => {
            render_list(current_row, body, theme, cols);
        }
    }

    let footer_row = rows.saturating_sub(1);
    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
