//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler mutates [`AppState`](super::AppState) and returns a list
//! of actions; `main.rs` turns each one into Zellij host calls. Keeping the
//! effects as data is what lets the list logic be tested without Zellij.

use crate::domain::Dao;
use crate::worker::WorkerMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a message to the background worker (data loading).
    PostToWorker(WorkerMessage),

    /// Opens a URL with the configured opener command. Fire-and-forget.
    ///
    /// Used for a DAO's page and for the "create new" support link.
    OpenUrl {
        url: String,
    },

    /// Hands the confirmed selection to the embedding host.
    ///
    /// `pipe_id` is `None` when selection mode was configured statically and
    /// no host is listening; the runtime then only logs the choice.
    NotifyHost {
        pipe_id: Option<String>,
        dao: Dao,
    },

    /// Unblocks a host pipe that will never get an answer, so its CLI exits.
    ReleaseHost {
        pipe_id: String,
    },
}
