//! Shared rendering utilities.
//!
//! Cursor positioning, search-match highlighting, width-aware truncation and
//! relative time formatting. Text widths are counted in chars.

use crate::ui::locale::{Locale, TextKey};
use crate::ui::theme::Theme;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_DAY: i64 = 86400;

/// Moves the cursor to a 1-indexed `row`/`col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Prints `text` with the char `ranges` highlighted.
///
/// Ranges are `(start, end)` with exclusive end; ranges past the end of the
/// text are clipped. Highlighting is skipped on the cursor row so the cursor
/// background stays uniform.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_cursor: bool) {
    if ranges.is_empty() || is_cursor {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        let plain: String = chars[pos..start].iter().collect();
        print!("{plain}");

        let matched: String = chars[start..end].iter().collect();
        print!(
            "{}{}{matched}{}{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg),
            Theme::reset(),
            Theme::fg(&theme.colors.text_normal),
        );

        pos = end;
    }

    let rest: String = chars[pos..].iter().collect();
    print!("{rest}");
}

/// Number of chars in `text`.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to `max` chars, ending with `...` when shortened.
#[must_use]
pub fn truncate_end(text: &str, max: usize) -> String {
    if width(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let head: String = text.chars().take(max - 3).collect();
    format!("{head}...")
}

/// Shortens `text` to `max` chars by eliding its middle with `…`.
///
/// Addresses keep their recognizable prefix and suffix this way.
#[must_use]
pub fn truncate_middle(text: &str, max: usize) -> String {
    let len = width(text);
    if len <= max {
        return text.to_string();
    }
    if max < 3 {
        return text.chars().take(max).collect();
    }

    let keep = max - 1;
    let head = (keep + 1) / 2;
    let tail = keep - head;
    let start: String = text.chars().take(head).collect();
    let end: String = text.chars().skip(len - tail).collect();
    format!("{start}…{end}")
}

/// Localized "N ago" text for an age in seconds.
#[must_use]
pub fn relative_age(locale: &Locale, seconds: i64) -> String {
    if seconds < SECONDS_PER_MINUTE {
        return locale.text(TextKey::JustNow).to_string();
    }

    let (key, count) = if seconds < SECONDS_PER_HOUR {
        (TextKey::MinutesAgo, seconds / SECONDS_PER_MINUTE)
    } else if seconds < SECONDS_PER_DAY {
        (TextKey::HoursAgo, seconds / SECONDS_PER_HOUR)
    } else {
        (TextKey::DaysAgo, seconds / SECONDS_PER_DAY)
    };
    locale.format(key, &[("count", &count.to_string())])
}
