//! Input and list mode state types.
//!
//! [`InputMode`] decides how keys are interpreted (commands vs. typing into
//! the search). [`ListMode`] decides what activating a DAO row does: open it,
//! or toggle it as the picker's selection.

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keys edit the search query.
    Typing,

    /// The query is frozen and keys move through the results.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// j/k navigate, Enter activates, / searches, r refetches, q quits.
    Normal,

    /// Search is open, with the given focus.
    Search(SearchFocus),
}

/// What the list is being used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMode {
    /// Activating a DAO opens its page; a "create new" row closes the list.
    #[default]
    Browse,

    /// Activating a DAO toggles it as the selection; the action button
    /// confirms the selection to the host.
    Select,
}

impl ListMode {
    /// Parses the `mode` configuration value; anything but `select` browses.
    #[must_use]
    pub fn from_config(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("select") => Self::Select,
            _ => Self::Browse,
        }
    }

    #[must_use]
    pub const fn is_select(self) -> bool {
        matches!(self, Self::Select)
    }
}
