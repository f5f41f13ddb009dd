//! Zellij plugin wrapper and entry point.
//!
//! This is the thin layer between the `daospaces` library and Zellij: it maps
//! Zellij events to library events and turns library actions into host calls.
//!
//! ```text
//! ┌──────────────────────────┐
//! │   Zellij Main Thread     │
//! │  ┌──────────────────┐    │
//! │  │  State (plugin)  │    │  ← UI state, event handling
//! │  └──────────────────┘    │
//! │          │ IPC           │
//! │          ▼               │
//! │  ┌──────────────────┐    │
//! │  │   WorkerShim     │    │  ← DAO cache reads
//! │  └──────────────────┘    │
//! └──────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`, post the
//!    first `LoadDaos` and arm the refresh timer
//! 2. **Update**: Map keys, timer ticks and worker responses to library events
//! 3. **Pipe**: A `zellij pipe` from the CLI attaches a host and switches the
//!    list to selection mode; the CLI stays blocked until a DAO is confirmed
//! 4. **Render**: Record the pane width, then call the library renderer
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//! - `Tab`: Press the action button
//!
//! In normal mode:
//! - `j`/`Down`, `k`/`Up`: Move
//! - `Enter`: Open or toggle the DAO, load more, create new
//! - `/`: Enter search mode
//! - `r`: Refresh
//! - `q`: Close plugin
//!
//! In search mode:
//! - Characters edit the query
//! - `Enter`: Focus results (typing) or activate (navigating)
//! - `Esc`: Exit search
//! - `/`: Return to search input

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use zellij_tile::prelude::*;
use zellij_tile::shim::{post_message_to, post_message_to_plugin};

use daospaces::worker::{DaoSpacesWorker, WorkerMessage, WorkerResponse};
use daospaces::{handle_event, Action, Config, Event, InputMode, SearchFocus};
use serde::{Deserialize, Serialize};

register_plugin!(State);
register_worker!(WorkerShim, daospaces_worker, DAOSPACES_WORKER);

const WORKER_NAME: &str = "daospaces";

/// Zellij worker wrapper around the library worker.
#[derive(Default, Serialize, Deserialize)]
struct WorkerShim(DaoSpacesWorker);

/// Tracks whether worker tracing has been initialized.
static WORKER_TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

impl ZellijWorker<'_> for WorkerShim {
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, Ordering::Relaxed) {
            daospaces::observability::init_tracing(&Config::default());
        }

        if let Some(payload) = self.0.handle_payload(&payload) {
            post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            });
        }
    }
}

/// Plugin state wrapper.
struct State {
    app: daospaces::AppState,
    opener: String,
    refresh_interval: f64,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: daospaces::initialize(&config),
            opener: config.opener,
            refresh_interval: config.refresh_interval,
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        daospaces::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(mode = ?config.mode, data_file = ?config.data_file, "parsed configuration");
        self.app = daospaces::initialize(&config);
        self.opener.clone_from(&config.opener);
        self.refresh_interval = config.refresh_interval;

        request_permission(&[PermissionType::ReadCliPipes, PermissionType::RunCommands]);
        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::Timer,
            EventType::RunCommandResult,
            EventType::PermissionRequestResult,
        ]);

        self.post_worker_message(&WorkerMessage::load_daos(config.data_file, false));
        self.arm_refresh_timer();

        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match Self::map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(_) => {
                self.arm_refresh_timer();
                Event::RefreshTick
            }
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, context) => {
                if exit_code != Some(0) {
                    tracing::warn!(
                        exit_code = ?exit_code,
                        context = ?context,
                        stderr = %String::from_utf8_lossy(&stderr),
                        "opener command failed"
                    );
                }
                return false;
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                tracing::debug!(status = ?status, "permission request result");
                return false;
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn pipe(&mut self, pipe_message: PipeMessage) -> bool {
        let PipeSource::Cli(pipe_id) = &pipe_message.source else {
            tracing::debug!(name = %pipe_message.name, "ignoring non-cli pipe message");
            return false;
        };

        let search = pipe_message
            .args
            .get("search")
            .cloned()
            .or_else(|| pipe_message.payload.clone())
            .filter(|s| !s.trim().is_empty());
        tracing::debug!(pipe_id = %pipe_id, search = ?search, "host attached through cli pipe");

        block_cli_pipe_input(pipe_id);
        show_self(true);

        self.dispatch(&Event::HostAttached {
            pipe_id: pipe_id.clone(),
            search,
        })
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.set_viewport(cols);
        daospaces::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                let mut render = should_render;
                for action in actions {
                    render |= self.execute_action(&action);
                }
                render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn arm_refresh_timer(&self) {
        if self.refresh_interval > 0.0 {
            set_timeout(self.refresh_interval);
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        let mode = self.app.input_mode;
        let typing = mode == InputMode::Search(SearchFocus::Typing);

        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Tab => Event::PressActionButton,
            BareKey::Char('j') if !typing => Event::KeyDown,
            BareKey::Char('k') if !typing => Event::KeyUp,
            BareKey::Esc if mode != InputMode::Normal => Event::ExitSearch,
            BareKey::Enter if typing => Event::FocusResults,
            BareKey::Enter => Event::Activate,
            BareKey::Char('/') => match mode {
                InputMode::Normal => Event::SearchMode,
                InputMode::Search(_) => Event::FocusSearchBar,
            },
            BareKey::Char('q') if mode == InputMode::Normal => Event::CloseFocus,
            BareKey::Char('r') if mode == InputMode::Normal => Event::Refresh,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) if typing => Event::Char(c),
            _ => return None,
        })
    }

    fn map_custom_message_event(message: &str, payload: &str) -> Option<Event> {
        if message != WORKER_NAME {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(WORKER_NAME.to_string()),
                    name: WORKER_NAME.to_string(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Executes an action; returns whether a re-render is needed.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) -> bool {
        match action {
            Action::CloseFocus => {
                hide_self();
                false
            }
            Action::PostToWorker(message) => {
                self.post_worker_message(message);
                false
            }
            Action::OpenUrl { url } => {
                let mut context = BTreeMap::new();
                context.insert("url".to_string(), url.clone());
                run_command(&[self.opener.as_str(), url.as_str()], context);
                false
            }
            Action::NotifyHost { pipe_id: None, dao } => {
                tracing::info!(address = %dao.address(), "selection confirmed without a listening host");
                false
            }
            Action::NotifyHost {
                pipe_id: Some(pipe_id),
                dao,
            } => {
                match serde_json::to_string(dao) {
                    Ok(json) => cli_pipe_output(pipe_id, &json),
                    Err(e) => tracing::error!(error = %e, "failed to serialize selected dao"),
                }
                unblock_cli_pipe_input(pipe_id);
                hide_self();
                self.dispatch(&Event::HostDetached)
            }
            Action::ReleaseHost { pipe_id } => {
                tracing::debug!(pipe_id = %pipe_id, "releasing unanswered host pipe");
                unblock_cli_pipe_input(pipe_id);
                false
            }
        }
    }
}
