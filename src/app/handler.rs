//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point the plugin runtime uses. Each
//! event mutates [`AppState`] and returns whether a render is needed together
//! with the side effects to execute.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `Activate`
//! - **Input**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `Char`,
//!   `Backspace`, `ExitSearch`
//! - **Host**: `HostAttached`, `HostDetached`, `PressActionButton`
//! - **Data**: `Refresh`, `RefreshTick`, `WorkerResponse`
//!
//! # Example
//!
//! ```rust
//! use daospaces::app::{handle_event, AppState, Event, ListMode, ListSettings, QueryState};
//! use daospaces::ui::{Locale, Theme};
//!
//! let mut state = AppState::new(
//!     ListSettings::default(),
//!     ListMode::Browse,
//!     QueryState::default(),
//!     Theme::default(),
//!     Locale::default(),
//! );
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::modes::{InputMode, SearchFocus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, the host, timers, or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down by one row (wraps to top).
    KeyDown,
    /// Moves the cursor up by one row (wraps to bottom).
    KeyUp,
    /// Activates the row under the cursor.
    Activate,
    /// Presses the action button, if one is configured.
    PressActionButton,
    /// Hides the plugin pane, releasing an attached host unanswered.
    CloseFocus,
    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Focuses the result list (from typing mode).
    FocusResults,
    /// Leaves search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Forces a reload of the DAO cache.
    Refresh,
    /// Periodic refetch timer fired.
    RefreshTick,
    /// A host opened the list through a CLI pipe.
    HostAttached {
        pipe_id: String,
        /// Search seeded by the host.
        search: Option<String>,
    },
    /// The host link was answered or abandoned.
    HostDetached,
    /// A worker finished processing a message.
    WorkerResponse(WorkerResponse),
}

impl Event {
    /// Key presses dismiss a visible toast.
    const fn is_key_press(&self) -> bool {
        !matches!(
            self,
            Self::RefreshTick | Self::HostAttached { .. } | Self::HostDetached | Self::WorkerResponse(_)
        )
    }
}

/// Processes an event and returns `(should_render, actions)`.
///
/// # Errors
///
/// Returns errors from state mutation methods or worker communication failures.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let toast_dismissed = event.is_key_press() && state.toast.take().is_some();
    let (should_render, actions) = dispatch(state, event)?;
    Ok((should_render || toast_dismissed, actions))
}

fn dispatch(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    match event {
        Event::KeyDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::Activate => {
            let actions = state.activate();
            Ok((true, actions))
        }
        Event::PressActionButton => {
            let actions = state.press_action_button();
            Ok((true, actions))
        }
        Event::CloseFocus => {
            if !state.host.is_enabled() {
                return Ok((false, vec![Action::CloseFocus]));
            }
            let mut actions: Vec<Action> = state
                .detach_host()
                .map(|pipe_id| Action::ReleaseHost { pipe_id })
                .into_iter()
                .collect();
            actions.push(Action::CloseFocus);
            Ok((true, actions))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            state.input_mode = if state.query.search().is_empty() {
                InputMode::Normal
            } else {
                InputMode::Search(SearchFocus::Navigating)
            };
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.query.search(), "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.query.clear();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.query.push(*c);
            tracing::trace!(query = %state.query.search(), char = %c, "search query updated");
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(_)) || !state.query.pop() {
                return Ok((false, vec![]));
            }
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Refresh => Ok((false, vec![load_message(state, true)])),
        Event::RefreshTick => Ok((false, vec![load_message(state, false)])),
        Event::HostAttached { pipe_id, search } => {
            let actions = state
                .attach_host(pipe_id, search.as_deref())
                .map(|pipe_id| Action::ReleaseHost { pipe_id })
                .into_iter()
                .collect();
            Ok((true, actions))
        }
        Event::HostDetached => {
            state.detach_host();
            Ok((true, vec![]))
        }
        Event::WorkerResponse(response) => handle_worker_response(state, response),
    }
}

fn load_message(state: &AppState, force: bool) -> Action {
    Action::PostToWorker(WorkerMessage::load_daos(state.settings.data_file.clone(), force))
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> Result<(bool, Vec<Action>)> {
    match response {
        WorkerResponse::DaosLoaded { daos, updated_at } => {
            let changed = state.load_daos(daos.clone(), *updated_at);
            Ok((changed, vec![]))
        }
        WorkerResponse::Error { message } => {
            state.load_failed(message);
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{ListMode, ListSettings, QueryState, Toast};
    use crate::domain::Dao;
    use crate::ui::{Locale, Theme};

    fn state(mode: ListMode) -> AppState {
        AppState::new(
            ListSettings::default(),
            mode,
            QueryState::default(),
            Theme::default(),
            Locale::default(),
        )
    }

    fn loaded(mode: ListMode) -> AppState {
        let mut state = state(mode);
        let response = WorkerResponse::DaosLoaded {
            daos: vec![
                Dao::new("0xA", "Alpha")
                    .with_id(1)
                    .with_proposals(["Upgrade v2"]),
                Dao::new("0xB", "Beta").with_id(2),
            ],
            updated_at: 1_700_000_000,
        };
        handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
        state
    }

    #[test]
    fn worker_load_ends_loading() {
        let state = loaded(ListMode::Browse);
        assert!(!state.is_loading);
        assert_eq!(state.filtered_daos.len(), 2);
    }

    #[test]
    fn unchanged_refetch_skips_render() {
        let mut state = loaded(ListMode::Browse);
        let response = WorkerResponse::DaosLoaded {
            daos: state.daos.clone(),
            updated_at: 1_700_000_000,
        };
        let (render, actions) = handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn worker_error_shows_toast() {
        let mut state = state(ListMode::Browse);
        let response = WorkerResponse::Error {
            message: "bad json".to_string(),
        };
        let (render, _) = handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
        assert!(render);
        assert!(!state.is_loading);
        assert!(state.toast.is_some());
    }

    #[test]
    fn refresh_posts_forced_load() {
        let mut state = state(ListMode::Browse);
        let (_, actions) = handle_event(&mut state, &Event::Refresh).unwrap();
        assert!(matches!(
            actions.as_slice(),
            [Action::PostToWorker(WorkerMessage::LoadDaos { force: true, .. })]
        ));

        let (_, actions) = handle_event(&mut state, &Event::RefreshTick).unwrap();
        assert!(matches!(
            actions.as_slice(),
            [Action::PostToWorker(WorkerMessage::LoadDaos { force: false, .. })]
        ));
    }

    #[test]
    fn typing_filters_only_in_search_mode() {
        let mut state = loaded(ListMode::Browse);

        let (render, _) = handle_event(&mut state, &Event::Char('b')).unwrap();
        assert!(!render);
        assert_eq!(state.query.search(), "");

        handle_event(&mut state, &Event::SearchMode).unwrap();
        for c in "bet".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        assert_eq!(state.query.search(), "bet");
        assert_eq!(state.filtered_daos.len(), 1);

        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.query.search(), "be");
    }

    #[test]
    fn exit_search_clears_query() {
        let mut state = loaded(ListMode::Browse);
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('z')).unwrap();
        assert!(state.filtered_daos.is_empty());

        handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.filtered_daos.len(), 2);
    }

    #[test]
    fn focus_results_with_empty_query_returns_to_normal() {
        let mut state = loaded(ListMode::Browse);
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);

        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('a')).unwrap();
        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
    }

    #[test]
    fn key_press_dismisses_toast() {
        let mut state = loaded(ListMode::Select);
        handle_event(&mut state, &Event::PressActionButton).unwrap();
        assert_eq!(state.toast, Some(Toast::error("Please select a space")));

        let (render, _) = handle_event(&mut state, &Event::KeyDown).unwrap();
        assert!(render);
        assert!(state.toast.is_none());
    }

    #[test]
    fn host_round_trip() {
        let mut state = loaded(ListMode::Browse);
        handle_event(
            &mut state,
            &Event::HostAttached {
                pipe_id: "pipe-3".to_string(),
                search: Some("alpha".to_string()),
            },
        )
        .unwrap();
        assert_eq!(state.filtered_daos.len(), 1);

        handle_event(&mut state, &Event::Activate).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::PressActionButton).unwrap();
        assert_eq!(
            actions,
            vec![Action::NotifyHost {
                pipe_id: Some("pipe-3".to_string()),
                dao: state.filtered_daos[0].clone(),
            }]
        );

        handle_event(&mut state, &Event::HostDetached).unwrap();
        assert!(!state.host.is_enabled());
        assert_eq!(state.list_mode, ListMode::Browse);
    }

    #[test]
    fn second_host_releases_the_first_pipe() {
        let mut state = loaded(ListMode::Browse);
        let attach = |pipe_id: &str| Event::HostAttached {
            pipe_id: pipe_id.to_string(),
            search: None,
        };

        let (_, actions) = handle_event(&mut state, &attach("pipe-1")).unwrap();
        assert!(actions.is_empty());

        let (_, actions) = handle_event(&mut state, &attach("pipe-2")).unwrap();
        assert_eq!(
            actions,
            vec![Action::ReleaseHost {
                pipe_id: "pipe-1".to_string()
            }]
        );
        assert_eq!(state.host.pipe_id(), Some("pipe-2"));

        let (_, actions) = handle_event(&mut state, &attach("pipe-2")).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn closing_with_host_attached_releases_pipe() {
        let mut state = loaded(ListMode::Browse);
        handle_event(
            &mut state,
            &Event::HostAttached {
                pipe_id: "pipe-4".to_string(),
                search: None,
            },
        )
        .unwrap();
        handle_event(&mut state, &Event::Activate).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(render);
        assert_eq!(
            actions,
            vec![
                Action::ReleaseHost {
                    pipe_id: "pipe-4".to_string()
                },
                Action::CloseFocus,
            ]
        );
        assert!(!state.host.is_enabled());
        assert_eq!(state.list_mode, ListMode::Browse);
        assert!(state.button_label().is_none());
    }

    #[test]
    fn closing_without_host_keeps_selection() {
        let mut state = loaded(ListMode::Select);
        handle_event(&mut state, &Event::Activate).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
        assert_eq!(state.selection.key(), Some("0xA"));
    }

    #[test]
    fn close_focus_emits_action_without_render() {
        let mut state = state(ListMode::Browse);
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
