//! Application state and view model computation.
//!
//! [`AppState`] is the list view: it owns the loaded DAO snapshot, the
//! filtered list, pagination, selection and cursor, and derives everything
//! the renderer needs through [`AppState::compute_viewmodel`].
//!
//! # Rows
//!
//! The cursor moves over logical [`ListRow`]s: the visible DAOs first, then a
//! "Load more" row (load-more mode only, while more DAOs exist), then the
//! "Create new" row (browse mode only). Because DAO rows come first, a DAO
//! row's index is also the DAO's index in `filtered_daos`.
//!
//! # Example
//!
//! ```rust
//! use daospaces::app::{AppState, ListMode, ListSettings, QueryState};
//! use daospaces::domain::Dao;
//! use daospaces::ui::{Locale, Theme};
//!
//! let mut state = AppState::new(
//!     ListSettings::default(),
//!     ListMode::Browse,
//!     QueryState::default(),
//!     Theme::default(),
//!     Locale::default(),
//! );
//! state.load_daos(vec![Dao::new("0xA", "Alpha")], 1_700_000_000);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! ```

use super::actions::Action;
use super::bridge::SelectionBridge;
use super::button::{ActionButtonHandle, ButtonCommand};
use super::host::HostLink;
use super::modes::{InputMode, ListMode, SearchFocus};
use super::query::QueryState;
use crate::domain::{filter_daos, match_ranges, Dao, Pagination, ScrollMode, Selection};
use crate::infrastructure::routes;
use crate::ui::helpers::{relative_age, truncate_end, truncate_middle};
use crate::ui::locale::{Locale, TextKey};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, DisplayRow, EmptyState, FooterInfo, HeaderInfo, ListBody, RenderState,
    SearchBarInfo, ToastInfo, UIViewModel,
};

/// Panes narrower than this many columns use the mobile layout.
pub const DEFAULT_MOBILE_BREAKPOINT: usize = 60;

const DEFAULT_VIEWPORT_COLS: usize = 80;
const NAME_MAX_WIDTH: usize = 30;
const ADDRESS_MAX_WIDTH: usize = 20;

/// Static settings of the list, taken from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSettings {
    /// Web app root used for DAO pages.
    pub base_url: String,
    /// Link opened by the "create new" row.
    pub support_url: String,
    pub mobile_breakpoint: usize,
    /// DAO cache override forwarded to the worker.
    pub data_file: Option<String>,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            support_url: "https://t.me/daospaces_support".to_string(),
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            data_file: None,
        }
    }
}

/// Logical row under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRow {
    /// Index into `filtered_daos`.
    Dao(usize),
    LoadMore,
    CreateNew,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

/// Dismissible notification shown in the footer until the next key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
}

impl Toast {
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Error,
        }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Info,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    /// Latest snapshot from the data source, in source order.
    pub daos: Vec<Dao>,

    /// `daos` filtered by the current search. Recomputed by
    /// `apply_search_filter()`.
    pub filtered_daos: Vec<Dao>,

    /// `true` until the first worker answer arrives.
    pub is_loading: bool,

    /// Unix timestamp of the loaded snapshot.
    pub data_updated_at: Option<i64>,

    pub query: QueryState,
    pub pagination: Pagination,
    pub selection: Selection,
    pub list_mode: ListMode,
    pub input_mode: InputMode,

    /// Index into `rows()`.
    pub cursor: usize,

    pub host: HostLink,
    pub toast: Option<Toast>,

    /// Width of the pane at the last render.
    pub viewport_cols: usize,

    pub settings: ListSettings,
    pub theme: Theme,
    pub locale: Locale,

    /// Mode to return to when a host detaches.
    configured_mode: ListMode,
    button: ActionButtonHandle,
    bridge: SelectionBridge,
}

impl AppState {
    /// Creates a loading list view and enters the selection bridge.
    #[must_use]
    pub fn new(
        settings: ListSettings,
        list_mode: ListMode,
        query: QueryState,
        theme: Theme,
        locale: Locale,
    ) -> Self {
        let button = ActionButtonHandle::new();
        let bridge = SelectionBridge::enter(button.clone(), locale.text(TextKey::SelectButton));

        let mut state = Self {
            daos: vec![],
            filtered_daos: vec![],
            is_loading: true,
            data_updated_at: None,
            query,
            pagination: Pagination::new(),
            selection: Selection::Unselected,
            list_mode,
            input_mode: InputMode::Normal,
            cursor: 0,
            host: HostLink::default(),
            toast: None,
            viewport_cols: DEFAULT_VIEWPORT_COLS,
            settings,
            theme,
            locale,
            configured_mode: list_mode,
            button,
            bridge,
        };
        state.sync_bridge();
        state
    }

    #[must_use]
    pub const fn is_mobile(&self) -> bool {
        self.viewport_cols < self.settings.mobile_breakpoint
    }

    #[must_use]
    pub const fn scroll_mode(&self) -> ScrollMode {
        ScrollMode::resolve(self.is_mobile(), self.host.is_enabled())
    }

    /// Records the pane width before rendering.
    pub fn set_viewport(&mut self, cols: usize) {
        self.viewport_cols = cols;
    }

    /// Replaces the data snapshot.
    ///
    /// Returns `false` when the snapshot is identical to the loaded one, so
    /// periodic refetches can skip re-rendering.
    pub fn load_daos(&mut self, daos: Vec<Dao>, updated_at: i64) -> bool {
        if !self.is_loading && self.data_updated_at == Some(updated_at) && self.daos == daos {
            tracing::debug!("daos unchanged, skipping render");
            return false;
        }

        tracing::debug!(count = daos.len(), updated_at, "daos loaded");
        self.daos = daos;
        self.data_updated_at = Some(updated_at);
        self.is_loading = false;
        self.selection.retain_in(&self.daos);
        self.apply_search_filter();
        self.sync_bridge();
        true
    }

    /// Ends loading with an error toast.
    pub fn load_failed(&mut self, error: &str) {
        tracing::error!(error = %error, "dao load failed");
        self.is_loading = false;
        self.toast = Some(Toast::error(
            self.locale.format(TextKey::LoadFailed, &[("error", error)]),
        ));
        self.apply_search_filter();
    }

    /// Recomputes `filtered_daos` from the query. Pagination is left alone.
    pub fn apply_search_filter(&mut self) {
        self.filtered_daos = filter_daos(&self.daos, self.query.search());
        self.clamp_cursor();
    }

    /// Rows the cursor can land on, in display order.
    #[must_use]
    pub fn rows(&self) -> Vec<ListRow> {
        if self.is_loading || self.filtered_daos.is_empty() {
            return vec![];
        }

        let total = self.filtered_daos.len();
        let mut rows: Vec<ListRow> = (0..self.pagination.visible_count(total))
            .map(ListRow::Dao)
            .collect();

        if self.scroll_mode() == ScrollMode::LoadMore && self.pagination.has_more(total) {
            rows.push(ListRow::LoadMore);
        }
        if !self.list_mode.is_select() {
            rows.push(ListRow::CreateNew);
        }
        rows
    }

    #[must_use]
    pub fn cursor_row(&self) -> Option<ListRow> {
        self.rows().get(self.cursor).copied()
    }

    fn clamp_cursor(&mut self) {
        let len = self.rows().len();
        self.cursor = if len == 0 { 0 } else { self.cursor.min(len - 1) };
    }

    /// Moves the cursor down, wrapping to the top; may pull the next page.
    pub fn move_cursor_down(&mut self) {
        let len = self.rows().len();
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % len;
        self.maybe_auto_load();
    }

    /// Moves the cursor up, wrapping to the bottom.
    pub fn move_cursor_up(&mut self) {
        let len = self.rows().len();
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
    }

    /// Infinite scroll: raises the limit when the cursor nears the end.
    fn maybe_auto_load(&mut self) {
        if self.scroll_mode() != ScrollMode::Infinite {
            return;
        }
        if let Some(ListRow::Dao(index)) = self.cursor_row() {
            if self.pagination.should_auto_load(index, self.filtered_daos.len()) {
                tracing::debug!(cursor = index, "infinite scroll loading next page");
                self.show_more();
            }
        }
    }

    fn show_more(&mut self) {
        self.pagination.show_more();
    }

    /// Activates the row under the cursor.
    ///
    /// DAO rows toggle the selection in selection mode and open the DAO page
    /// otherwise. "Load more" raises the limit; the cursor then rests on the
    /// first newly shown DAO. "Create new" opens the support link.
    pub fn activate(&mut self) -> Vec<Action> {
        let Some(row) = self.cursor_row() else {
            return vec![];
        };

        match row {
            ListRow::Dao(index) => {
                let Some(dao) = self.filtered_daos.get(index).cloned() else {
                    return vec![];
                };
                if self.list_mode.is_select() {
                    self.selection.toggle(&dao);
                    self.sync_bridge();
                    vec![]
                } else {
                    tracing::debug!(address = %dao.address(), "opening dao page");
                    vec![Action::OpenUrl {
                        url: routes::dao_root(&self.settings.base_url, dao.address()),
                    }]
                }
            }
            ListRow::LoadMore => {
                self.show_more();
                vec![]
            }
            ListRow::CreateNew => vec![Action::OpenUrl {
                url: self.settings.support_url.clone(),
            }],
        }
    }

    /// Presses the host action button.
    ///
    /// With nothing selected this only raises the "Please select a space" toast.
    pub fn press_action_button(&mut self) -> Vec<Action> {
        match self.button.press() {
            None => vec![],
            Some(ButtonCommand::ConfirmSelection { selected: None }) => {
                self.toast = Some(Toast::error(self.locale.text(TextKey::SelectSpaceError)));
                vec![]
            }
            Some(ButtonCommand::ConfirmSelection { selected: Some(dao) }) => {
                tracing::debug!(address = %dao.address(), host = self.host.is_enabled(), "confirming selection");
                vec![Action::NotifyHost {
                    pipe_id: self.host.pipe_id().map(str::to_string),
                    dao,
                }]
            }
        }
    }

    /// A host opened the list as a picker.
    ///
    /// Returns the pipe of a previous host this one displaced; that pipe is
    /// never answered and must be released.
    pub fn attach_host(&mut self, pipe_id: &str, search: Option<&str>) -> Option<String> {
        tracing::debug!(pipe_id = %pipe_id, "host attached");
        let displaced = self
            .host
            .pipe_id()
            .filter(|previous| *previous != pipe_id)
            .map(str::to_string);
        if let Some(previous) = &displaced {
            tracing::debug!(previous = %previous, "host displaced by a newer pipe");
        }
        self.host = HostLink::attached(pipe_id);
        self.list_mode = ListMode::Select;
        if let Some(search) = search {
            self.query.set_search(search);
        }
        self.apply_search_filter();
        self.sync_bridge();
        displaced
    }

    /// The host got its answer; selection mode falls back to configuration.
    pub fn detach_host(&mut self) -> Option<String> {
        let pipe_id = self.host.detach();
        tracing::debug!(pipe_id = ?pipe_id, "host detached");
        self.list_mode = self.configured_mode;
        self.selection = Selection::Unselected;
        self.clamp_cursor();
        self.sync_bridge();
        pipe_id
    }

    /// Label of the configured action button.
    #[must_use]
    pub fn button_label(&self) -> Option<String> {
        self.button.current().map(|config| config.text)
    }

    fn sync_bridge(&mut self) {
        if let Err(e) = self.bridge.sync(&self.selection, self.list_mode.is_select()) {
            tracing::warn!(error = %e, "failed to sync action button");
        }
    }

    /// Computes the view model for a `rows` x `cols` pane.
    ///
    /// The list is windowed around the cursor so the cursor row stays in view.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        UIViewModel {
            header: self.compute_header(),
            footer: self.compute_footer(),
            search_bar: self.compute_search_bar(),
            body: self.compute_body(rows, cols),
        }
    }

    fn compute_body(&self, rows: usize, cols: usize) -> RenderState {
        if self.is_loading {
            return RenderState::Loading {
                message: self.locale.text(TextKey::Loading).to_string(),
            };
        }
        if self.filtered_daos.is_empty() {
            return RenderState::Empty(EmptyState {
                message: self.locale.text(TextKey::NoSpaces).to_string(),
                subtitle: self.locale.text(TextKey::NoSpacesHint).to_string(),
            });
        }

        let list_rows = self.rows();
        let available = self.calculate_available_rows(rows).max(1);
        let (start, end) = visible_window(self.cursor, available, list_rows.len());
        let compact = cols < self.settings.mobile_breakpoint;

        let display_rows = list_rows[start..end]
            .iter()
            .enumerate()
            .filter_map(|(offset, row)| {
                self.compute_display_row(*row, start + offset == self.cursor, compact)
            })
            .collect();

        RenderState::Populated(ListBody {
            rows: display_rows,
            compact,
        })
    }

    fn compute_display_row(&self, row: ListRow, is_cursor: bool, compact: bool) -> Option<DisplayRow> {
        let display = match row {
            ListRow::Dao(index) => {
                let dao = self.filtered_daos.get(index)?;
                DisplayRow::Dao(self.compute_display_item(dao, is_cursor, compact))
            }
            ListRow::LoadMore => DisplayRow::LoadMore {
                label: self.locale.text(TextKey::LoadMore).to_string(),
                is_cursor,
            },
            ListRow::CreateNew => DisplayRow::CreateNew {
                title: self.locale.text(TextKey::CreateNewTitle).to_string(),
                subtitle: self.locale.text(TextKey::CreateNewSubtitle).to_string(),
                is_cursor,
            },
        };
        Some(display)
    }

    fn compute_display_item(&self, dao: &Dao, is_cursor: bool, compact: bool) -> DisplayItem {
        let name = truncate_end(dao.name(), NAME_MAX_WIDTH);
        let address = if compact {
            String::new()
        } else {
            truncate_middle(dao.address(), ADDRESS_MAX_WIDTH)
        };
        let count = dao.dao_proposals.len().to_string();

        DisplayItem {
            highlight_ranges: match_ranges(&name, self.query.search()),
            name,
            address,
            proposals: self.locale.format(TextKey::Proposals, &[("count", &count)]),
            is_cursor,
            is_selected: self.selection.is_selected(dao),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = format!(
            " {} ({}) ",
            self.locale.text(TextKey::Title),
            self.filtered_daos.len()
        );
        let subtitle = self
            .data_updated_at
            .filter(|_| !self.is_loading)
            .map(|updated_at| {
                let age = chrono::Utc::now().timestamp().saturating_sub(updated_at).max(0);
                self.locale.format(
                    TextKey::Updated,
                    &[("age", &relative_age(&self.locale, age))],
                )
            });
        HeaderInfo { title, subtitle }
    }

    fn compute_footer(&self) -> FooterInfo {
        let button = self.button_label();
        let keybindings = match (self.input_mode, self.list_mode) {
            (InputMode::Search(SearchFocus::Typing), _) => {
                self.locale.text(TextKey::FooterTyping).to_string()
            }
            (InputMode::Search(SearchFocus::Navigating), _) => {
                self.locale.text(TextKey::FooterNavigating).to_string()
            }
            (InputMode::Normal, ListMode::Browse) => {
                self.locale.text(TextKey::FooterBrowse).to_string()
            }
            (InputMode::Normal, ListMode::Select) => {
                let label = button
                    .clone()
                    .unwrap_or_else(|| self.locale.text(TextKey::SelectButton).to_string());
                self.locale.format(TextKey::FooterSelect, &[("button", &label)])
            }
        };

        FooterInfo {
            keybindings,
            button,
            toast: self.toast.as_ref().map(|toast| ToastInfo {
                message: toast.message.clone(),
                is_error: toast.level == ToastLevel::Error,
            }),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        matches!(self.input_mode, InputMode::Search(_)).then(|| SearchBarInfo {
            label: self.locale.text(TextKey::SearchLabel).to_string(),
            query: self.query.search().to_string(),
        })
    }

    /// Rows left for the list after header, borders, column titles, footer
    /// and (in search mode) the 3-line search box.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(6),
            InputMode::Search(_) => total_rows.saturating_sub(9),
        }
    }
}

/// Window `[start, end)` of `len` rows, `available` tall, keeping `cursor` in
/// view and centered where possible.
fn visible_window(cursor: usize, available: usize, len: usize) -> (usize, usize) {
    if len <= available {
        return (0, len);
    }
    let mut start = cursor.saturating_sub(available / 2);
    let end = (start + available).min(len);
    if end - start < available {
        start = end.saturating_sub(available);
    }
    (start.min(end), end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PAGE_SIZE;

    fn state(mode: ListMode) -> AppState {
        AppState::new(
            ListSettings::default(),
            mode,
            QueryState::default(),
            Theme::default(),
            Locale::default(),
        )
    }

    fn sample() -> Vec<Dao> {
        vec![
            Dao::new("0xA", "Alpha")
                .with_id(1)
                .with_proposals(["Upgrade v2"]),
            Dao::new("0xB", "Beta").with_id(2),
        ]
    }

    fn many(count: usize) -> Vec<Dao> {
        (0..count)
            .map(|i| Dao::new(format!("0x{i:04}"), format!("Space {i}")).with_id(i as i64))
            .collect()
    }

    fn dao_rows(state: &AppState) -> usize {
        state
            .rows()
            .iter()
            .filter(|row| matches!(row, ListRow::Dao(_)))
            .count()
    }

    #[test]
    fn starts_loading_then_populates() {
        let mut state = state(ListMode::Browse);
        assert!(matches!(state.compute_viewmodel(24, 80).body, RenderState::Loading { .. }));

        assert!(state.load_daos(sample(), 100));
        assert!(matches!(state.compute_viewmodel(24, 80).body, RenderState::Populated(_)));
    }

    #[test]
    fn identical_snapshot_is_not_reloaded() {
        let mut state = state(ListMode::Browse);
        assert!(state.load_daos(sample(), 100));
        assert!(!state.load_daos(sample(), 100));
        assert!(state.load_daos(sample(), 200));
    }

    #[test]
    fn empty_result_renders_localized_message() {
        let mut state = state(ListMode::Browse);
        state.load_daos(sample(), 100);
        state.query.set_search("gamma");
        state.apply_search_filter();

        match state.compute_viewmodel(24, 80).body {
            RenderState::Empty(empty) => assert_eq!(empty.message, "No spaces found"),
            other => panic!("expected empty state, got {other:?}"),
        }
        assert!(state.rows().is_empty());
    }

    #[test]
    fn search_filters_by_name_address_and_proposal() {
        let mut state = state(ListMode::Browse);
        state.load_daos(sample(), 100);

        for (query, expected) in [("alpha", "Alpha"), ("0xb", "Beta"), ("upgrade", "Alpha")] {
            state.query.set_search(query);
            state.apply_search_filter();
            let names: Vec<&str> = state.filtered_daos.iter().map(Dao::name).collect();
            assert_eq!(names, vec![expected], "query {query}");
        }
    }

    #[test]
    fn browse_mode_appends_create_new_row() {
        let mut state = state(ListMode::Browse);
        state.load_daos(sample(), 100);
        assert_eq!(
            state.rows(),
            vec![ListRow::Dao(0), ListRow::Dao(1), ListRow::CreateNew]
        );

        state.cursor = 2;
        assert_eq!(
            state.activate(),
            vec![Action::OpenUrl {
                url: "https://t.me/daospaces_support".to_string()
            }]
        );
    }

    #[test]
    fn selection_mode_omits_create_new_row() {
        let mut state = state(ListMode::Select);
        state.load_daos(sample(), 100);
        assert_eq!(state.rows(), vec![ListRow::Dao(0), ListRow::Dao(1)]);
    }

    #[test]
    fn activating_dao_in_browse_mode_opens_its_page() {
        let mut state = state(ListMode::Browse);
        state.load_daos(sample(), 100);
        state.cursor = 1;
        assert_eq!(
            state.activate(),
            vec![Action::OpenUrl {
                url: "http://localhost:3000/dao/0xB".to_string()
            }]
        );
        assert_eq!(state.selection, Selection::Unselected);
    }

    #[test]
    fn load_more_row_pages_through_desktop_list() {
        let mut state = state(ListMode::Browse);
        state.load_daos(many(30), 100);

        assert_eq!(dao_rows(&state), PAGE_SIZE + 1);
        let load_more = state.rows().iter().position(|r| *r == ListRow::LoadMore).unwrap();
        assert_eq!(load_more, PAGE_SIZE + 1);

        state.cursor = load_more;
        assert!(state.activate().is_empty());
        assert_eq!(dao_rows(&state), 2 * PAGE_SIZE + 1);
        assert_eq!(state.cursor_row(), Some(ListRow::Dao(PAGE_SIZE + 1)));

        state.cursor = state.rows().iter().position(|r| *r == ListRow::LoadMore).unwrap();
        state.activate();
        assert_eq!(dao_rows(&state), 30);
        assert!(!state.rows().contains(&ListRow::LoadMore));
    }

    #[test]
    fn mobile_width_scrolls_infinitely() {
        let mut state = state(ListMode::Browse);
        state.set_viewport(40);
        state.load_daos(many(30), 100);

        assert_eq!(state.scroll_mode(), ScrollMode::Infinite);
        assert!(!state.rows().contains(&ListRow::LoadMore));

        for _ in 0..8 {
            state.move_cursor_down();
        }
        assert_eq!(dao_rows(&state), PAGE_SIZE + 1);

        state.move_cursor_down();
        assert_eq!(state.cursor, 9);
        assert_eq!(dao_rows(&state), 2 * PAGE_SIZE + 1);
    }

    #[test]
    fn host_launch_scrolls_infinitely_on_wide_panes() {
        let mut state = state(ListMode::Browse);
        state.attach_host("pipe-1", None);
        assert!(!state.is_mobile());
        assert_eq!(state.scroll_mode(), ScrollMode::Infinite);
    }

    #[test]
    fn search_change_keeps_page_limit() {
        let mut state = state(ListMode::Browse);
        state.load_daos(many(40), 100);
        state.show_more();
        state.show_more();

        state.query.set_search("Space 1");
        state.apply_search_filter();
        assert_eq!(state.pagination.limit(), 3 * PAGE_SIZE);
        assert_eq!(dao_rows(&state), state.filtered_daos.len());
    }

    #[test]
    fn cursor_wraps_and_clamps() {
        let mut state = state(ListMode::Browse);
        state.load_daos(sample(), 100);

        state.move_cursor_up();
        assert_eq!(state.cursor_row(), Some(ListRow::CreateNew));
        state.move_cursor_down();
        assert_eq!(state.cursor, 0);

        state.cursor = 2;
        state.query.set_search("beta");
        state.apply_search_filter();
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn selection_scenario_notifies_host_then_rejects_empty_confirmation() {
        let mut state = state(ListMode::Browse);
        state.load_daos(sample(), 100);
        state.attach_host("pipe-7", None);
        assert_eq!(state.button_label(), Some("Select".to_string()));

        state.cursor = 0;
        assert!(state.activate().is_empty());
        assert_eq!(
            state.press_action_button(),
            vec![Action::NotifyHost {
                pipe_id: Some("pipe-7".to_string()),
                dao: sample()[0].clone(),
            }]
        );

        state.activate();
        assert_eq!(state.selection, Selection::Unselected);
        assert!(state.press_action_button().is_empty());
        assert_eq!(
            state.toast,
            Some(Toast::error("Please select a space"))
        );
    }

    #[test]
    fn configured_selection_mode_claims_button_immediately() {
        let state = state(ListMode::Select);
        assert_eq!(state.button_label(), Some("Select".to_string()));
        let footer = state.compute_viewmodel(24, 80).footer;
        assert_eq!(footer.button, Some("Select".to_string()));
        assert!(footer.keybindings.contains("Tab: Select"));
    }

    #[test]
    fn browse_mode_has_no_button() {
        let mut state = state(ListMode::Browse);
        state.load_daos(sample(), 100);
        assert!(state.button_label().is_none());
        assert!(state.press_action_button().is_empty());
        assert!(state.toast.is_none());
    }

    #[test]
    fn detaching_host_tears_down_button_and_selection() {
        let mut state = state(ListMode::Browse);
        state.load_daos(sample(), 100);
        state.attach_host("pipe-2", Some("beta"));
        assert_eq!(state.filtered_daos.len(), 1);

        state.activate();
        assert_eq!(state.selection.key(), Some("0xB"));

        assert_eq!(state.detach_host(), Some("pipe-2".to_string()));
        assert_eq!(state.list_mode, ListMode::Browse);
        assert!(state.button_label().is_none());
        assert_eq!(state.selection, Selection::Unselected);
    }

    #[test]
    fn reload_without_selected_dao_clears_selection() {
        let mut state = state(ListMode::Select);
        state.load_daos(sample(), 100);
        state.activate();
        assert_eq!(state.selection.key(), Some("0xA"));

        state.load_daos(vec![Dao::new("0xB", "Beta").with_id(2)], 200);
        assert_eq!(state.selection, Selection::Unselected);
        assert_eq!(
            state.press_action_button(),
            Vec::<Action>::new()
        );
        assert!(state.toast.is_some());
    }

    #[test]
    fn load_failure_ends_loading_with_error_toast() {
        let mut state = state(ListMode::Browse);
        state.load_failed("disk on fire");
        assert!(!state.is_loading);
        let toast = state.compute_viewmodel(24, 80).footer.toast.unwrap();
        assert!(toast.is_error);
        assert!(toast.message.contains("disk on fire"));
    }

    #[test]
    fn viewmodel_marks_cursor_selection_and_highlights() {
        let mut state = state(ListMode::Select);
        state.load_daos(sample(), 100);
        state.query.set_search("alp");
        state.apply_search_filter();
        state.activate();

        let RenderState::Populated(body) = state.compute_viewmodel(24, 80).body else {
            panic!("expected populated list");
        };
        let DisplayRow::Dao(item) = &body.rows[0] else {
            panic!("expected dao row");
        };
        assert!(item.is_cursor);
        assert!(item.is_selected);
        assert_eq!(item.highlight_ranges, vec![(0, 3)]);
        assert_eq!(item.proposals, "1 proposals");
        assert_eq!(item.address, "0xA");
    }

    #[test]
    fn narrow_viewmodel_hides_addresses() {
        let mut state = state(ListMode::Browse);
        state.load_daos(sample(), 100);

        let RenderState::Populated(body) = state.compute_viewmodel(24, 40).body else {
            panic!("expected populated list");
        };
        assert!(body.compact);
        assert!(body.rows.iter().all(|row| match row {
            DisplayRow::Dao(item) => item.address.is_empty(),
            _ => true,
        }));
    }

    #[test]
    fn viewmodel_windows_around_cursor() {
        let mut state = state(ListMode::Browse);
        state.load_daos(many(30), 100);
        state.cursor = 11;

        let RenderState::Populated(body) = state.compute_viewmodel(12, 80).body else {
            panic!("expected populated list");
        };
        assert_eq!(body.rows.len(), 6);
        assert_eq!(body.rows.iter().filter(|row| row.is_cursor()).count(), 1);
    }

    #[test]
    fn short_list_renders_every_row_with_cursor_at_end() {
        let mut state = state(ListMode::Browse);
        state.load_daos(many(30), 100);
        assert_eq!(state.rows().len(), 14);
        state.cursor = 13;

        let RenderState::Populated(body) = state.compute_viewmodel(24, 80).body else {
            panic!("expected populated list");
        };
        assert_eq!(body.rows.len(), 14);
    }

    #[test]
    fn window_stays_in_bounds() {
        assert_eq!(visible_window(0, 5, 3), (0, 3));
        assert_eq!(visible_window(9, 4, 10), (6, 10));
        assert_eq!(visible_window(5, 4, 10), (3, 7));
        assert_eq!(visible_window(13, 18, 14), (0, 14));
        assert_eq!(visible_window(4, 4, 4), (0, 4));
    }
}
