//! DAO list renderer.
//!
//! Each DAO row is `marker name [address] proposals`; the address column is
//! dropped in the compact layout. Affordance rows ("Load more", "Create new")
//! follow the DAOs.

use crate::ui::helpers::{self, position_cursor, truncate_end, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, DisplayRow, ListBody};

const MARKER_WIDTH: usize = 2;
const NAME_COLUMN_WIDTH: usize = 32;
const ADDRESS_COLUMN_WIDTH: usize = 22;

/// Renders every row of `body` starting at `row`.
///
/// # Returns
///
/// The next available row position (row + number of rows)
pub fn render_list(row: usize, body: &ListBody, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for display_row in &body.rows {
        position_cursor(current_row, 1);
        match display_row {
            DisplayRow::Dao(item) => render_dao_row(item, body.compact, theme, cols),
            DisplayRow::LoadMore { label, is_cursor } => {
                render_affordance(&format!("↓ {label}"), None, *is_cursor, theme, cols);
            }
            DisplayRow::CreateNew { title, subtitle, is_cursor } => {
                render_affordance(&format!("+ {title}"), Some(subtitle.as_str()), *is_cursor, theme, cols);
            }
        }
        current_row += 1;
    }
    current_row
}

fn start_row_style(is_cursor: bool, fg: &str, theme: &Theme) {
    if is_cursor {
        print!("{}", Theme::fg(&theme.colors.cursor_fg));
        print!("{}", Theme::bg(&theme.colors.cursor_bg));
    } else {
        print!("{}", Theme::fg(fg));
    }
}

/// Styling precedence: cursor background, then chosen marker, then match
/// highlights, then normal text.
fn render_dao_row(item: &DisplayItem, compact: bool, theme: &Theme, cols: usize) {
    start_row_style(item.is_cursor, &theme.colors.text_normal, theme);

    if item.is_selected {
        if !item.is_cursor {
            print!("{}", Theme::fg(&theme.colors.chosen_fg));
        }
        print!("● ");
        if !item.is_cursor {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
    } else {
        print!("{}", " ".repeat(MARKER_WIDTH));
    }

    let name_width = if compact {
        cols.saturating_sub(MARKER_WIDTH + width(&item.proposals) + 1)
    } else {
        NAME_COLUMN_WIDTH
    };
    let name = truncate_end(&item.name, name_width.saturating_sub(1));
    helpers::render_highlighted_text(&name, &item.highlight_ranges, theme, item.is_cursor);
    let mut line_len = MARKER_WIDTH + width(&name);
    let name_pad = (MARKER_WIDTH + name_width).saturating_sub(line_len);
    print!("{}", " ".repeat(name_pad));
    line_len += name_pad;

    if !compact {
        if !item.is_cursor {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{:<width$}", item.address, width = ADDRESS_COLUMN_WIDTH);
        line_len += width(&item.address).max(ADDRESS_COLUMN_WIDTH);
    }

    let proposals = truncate_end(&item.proposals, cols.saturating_sub(line_len));
    if !item.is_cursor {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{proposals}");
    line_len += width(&proposals);

    print!("{}", " ".repeat(cols.saturating_sub(line_len)));
    print!("{}", Theme::reset());
}

fn render_affordance(label: &str, subtitle: Option<&str>, is_cursor: bool, theme: &Theme, cols: usize) {
    start_row_style(is_cursor, &theme.colors.affordance_fg, theme);
    print!("{}", " ".repeat(MARKER_WIDTH));

    let label = truncate_end(label, cols.saturating_sub(MARKER_WIDTH));
    print!("{label}");
    let mut line_len = MARKER_WIDTH + width(&label);

    if let Some(subtitle) = subtitle {
        let room = cols.saturating_sub(line_len + 2);
        if room > 0 {
            let subtitle = truncate_end(subtitle, room);
            if !is_cursor {
                print!("{}", Theme::fg(&theme.colors.text_dim));
            }
            print!("  {subtitle}");
            line_len += 2 + width(&subtitle);
        }
    }

    print!("{}", " ".repeat(cols.saturating_sub(line_len)));
    print!("{}", Theme::reset());
}
