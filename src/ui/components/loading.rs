//! Loading placeholder: the message and one skeleton row shaped like a DAO row.

use crate::ui::helpers::{position_cursor, width};
use crate::ui::theme::Theme;

const SKELETON_WIDTH: usize = 32;

pub fn render_loading(row: usize, message: &str, theme: &Theme, cols: usize) {
    let msg_len = width(message).min(cols);
    let padding = cols.saturating_sub(msg_len) / 2;

    position_cursor(row + 2, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}{message}", " ".repeat(padding));
    print!("{}", Theme::reset());

    let bar = skeleton_width(cols);
    if bar == 0 {
        return;
    }
    position_cursor(row + 4, 3);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", "░".repeat(bar));
    print!("{}", Theme::reset());
}

fn skeleton_width(cols: usize) -> usize {
    cols.saturating_sub(4).min(SKELETON_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_fits_narrow_panes() {
        assert_eq!(skeleton_width(80), SKELETON_WIDTH);
        assert_eq!(skeleton_width(20), 16);
        assert_eq!(skeleton_width(3), 0);
    }
}
