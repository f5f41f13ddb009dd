//! View model types representing renderable UI state.
//!
//! `AppState::compute_viewmodel` resolves everything the renderer needs once
//! per frame: strings are already localized and truncated, the body is one of
//! three exclusive [`RenderState`]s, and the cursor is baked into the rows.

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub footer: FooterInfo,
    /// Present while search mode is open.
    pub search_bar: Option<SearchBarInfo>,
    pub body: RenderState,
}

/// Exclusive states of the list body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderState {
    /// The first data load has not answered yet.
    Loading { message: String },

    /// Loaded, but nothing matches.
    Empty(EmptyState),

    /// Rows to draw, already windowed to the pane height.
    Populated(ListBody),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBody {
    pub rows: Vec<DisplayRow>,
    /// Narrow layout: the address column is hidden.
    pub compact: bool,
}

/// One line of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayRow {
    Dao(DisplayItem),
    LoadMore { label: String, is_cursor: bool },
    CreateNew { title: String, subtitle: String, is_cursor: bool },
}

impl DisplayRow {
    #[must_use]
    pub const fn is_cursor(&self) -> bool {
        match self {
            Self::Dao(item) => item.is_cursor,
            Self::LoadMore { is_cursor, .. } | Self::CreateNew { is_cursor, .. } => *is_cursor,
        }
    }
}

/// Display information for a single DAO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub name: String,
    /// Possibly shortened as `EQAb…yz12`.
    pub address: String,
    /// Localized proposal count, e.g. "3 proposals".
    pub proposals: String,
    pub is_cursor: bool,
    /// Chosen in selection mode.
    pub is_selected: bool,
    /// `(start, end)` char ranges of `name` matching the search.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Data freshness, e.g. "updated 5m ago".
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
    /// Label of the host action button, when configured.
    pub button: Option<String>,
    pub toast: Option<ToastInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastInfo {
    pub message: String,
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub label: String,
    pub query: String,
}
