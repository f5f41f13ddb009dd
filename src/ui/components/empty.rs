//! Empty state component renderer.

use crate::ui::helpers::{position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the centered "nothing found" message and its hint, leaving a few
/// blank lines above.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let message_row = row + 2;
    let msg_len = width(&empty.message).min(cols);
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    position_cursor(message_row, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", empty.message);
    print!("{}", Theme::reset());

    let sub_len = width(&empty.subtitle).min(cols);
    let sub_padding = cols.saturating_sub(sub_len) / 2;

    position_cursor(message_row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{}", empty.subtitle);
    print!("{}", Theme::reset());
}
