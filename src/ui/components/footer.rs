//! Footer component renderer.
//!
//! The footer shows keybinding hints, replaced by the toast while one is
//! visible, and the action button pinned to the right edge.

use crate::ui::helpers::{position_cursor, truncate_end, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer line at `row`.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let button = footer.button.as_ref().map(|label| format!(" {label} "));
    let button_len = button.as_deref().map_or(0, width);
    let text_cols = cols.saturating_sub(button_len + 1);

    position_cursor(row, 1);
    let (text, color) = match &footer.toast {
        Some(toast) if toast.is_error => (&toast.message, &theme.colors.error_fg),
        Some(toast) => (&toast.message, &theme.colors.text_normal),
        None => (&footer.keybindings, &theme.colors.text_dim),
    };
    let text = truncate_end(text, text_cols);
    let text_len = width(&text);

    if footer.toast.is_some() {
        print!("{}", Theme::bold());
    }
    print!("{}", Theme::fg(color));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(text_len + button_len)));
    print!("{}", Theme::reset());

    if let Some(button) = button {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.button_fg));
        print!("{}", Theme::bg(&theme.colors.button_bg));
        print!("{button}");
        print!("{}", Theme::reset());
    }

    row + 1
}
