//! Synchronization between the picker selection and the action button.
//!
//! [`SelectionBridge::enter`] starts the bridge for a list view and
//! [`SelectionBridge::exit`] (or dropping it) ends it. In between,
//! [`SelectionBridge::sync`] is called after every state change; it only does
//! work when the selected address or the selection-mode flag changed. Each
//! re-run drops the previous [`ButtonClaim`] before taking a new one, and the
//! end of the bridge resets the button unconditionally.

use super::button::{ActionButtonHandle, ButtonClaim, ButtonCommand, ButtonConfig};
use crate::domain::{Result, Selection};

#[derive(Debug, Clone, PartialEq, Eq)]
struct SyncKey {
    selected: Option<String>,
    selection_mode: bool,
}

#[derive(Debug)]
pub struct SelectionBridge {
    handle: ActionButtonHandle,
    label: String,
    claim: Option<ButtonClaim>,
    synced: Option<SyncKey>,
}

impl SelectionBridge {
    /// Starts bridging onto `handle`, labelling the button with `label`.
    #[must_use]
    pub fn enter(handle: ActionButtonHandle, label: impl Into<String>) -> Self {
        Self {
            handle,
            label: label.into(),
            claim: None,
            synced: None,
        }
    }

    /// Re-configures the button if the selection identity or the mode changed.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::DaoListError::ButtonClaimed`] when another view
    /// holds the button. The previous claim is already released at that point.
    pub fn sync(&mut self, selection: &Selection, selection_mode: bool) -> Result<()> {
        let key = SyncKey {
            selected: selection.key().map(str::to_string),
            selection_mode,
        };
        if self.synced.as_ref() == Some(&key) {
            return Ok(());
        }

        let _span = tracing::debug_span!(
            "selection_bridge_sync",
            selected = ?key.selected,
            selection_mode
        )
        .entered();

        self.claim = None;
        self.synced = None;

        if selection_mode {
            let config = ButtonConfig {
                text: self.label.clone(),
                command: ButtonCommand::ConfirmSelection {
                    selected: selection.selected().cloned(),
                },
            };
            self.claim = Some(self.handle.claim(config)?);
        }

        self.synced = Some(key);
        Ok(())
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.claim.is_some()
    }

    /// Ends the bridge; the button is reset.
    pub fn exit(self) {
        tracing::debug!(was_active = self.is_active(), "selection bridge exited");
    }
}

impl Drop for SelectionBridge {
    fn drop(&mut self) {
        self.claim = None;
        self.handle.reset();
    }
}
