//! Single-slot action button store.
//!
//! The host renders one primary button (the picker's "Select"). Whoever wants
//! to show it takes a [`ButtonClaim`] from an [`ActionButtonHandle`]; the slot
//! is configured for as long as the claim lives and cleared when it drops.
//!
//! # Ownership
//!
//! A handle admits a single active claimant. A second [`ActionButtonHandle::claim`]
//! while a claim is alive fails with [`DaoListError::ButtonClaimed`] instead of
//! silently overwriting the first configuration.
//!
//! # Example
//!
//! ```rust
//! use daospaces::app::button::{ActionButtonHandle, ButtonCommand, ButtonConfig};
//!
//! let handle = ActionButtonHandle::new();
//! let claim = handle.claim(ButtonConfig {
//!     text: "Select".to_string(),
//!     command: ButtonCommand::ConfirmSelection { selected: None },
//! })?;
//! assert!(handle.is_claimed());
//!
//! drop(claim);
//! assert!(handle.current().is_none());
//! # Ok::<(), daospaces::DaoListError>(())
//! ```

use crate::domain::{Dao, DaoListError, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// What pressing the button does, captured when the button was configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonCommand {
    /// Hand the selection to the host, or complain when there is none.
    ConfirmSelection { selected: Option<Dao> },
}

/// Label and command shown by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonConfig {
    pub text: String,
    pub command: ButtonCommand,
}

#[derive(Debug, Default)]
struct ButtonSlot {
    config: Option<ButtonConfig>,
    claimant: Option<u64>,
    next_claim: u64,
}

impl ButtonSlot {
    fn clear(&mut self) {
        self.config = None;
        self.claimant = None;
    }
}

/// Shared handle to the button slot.
///
/// Cloning the handle shares the slot; it is single-threaded by construction.
#[derive(Debug, Clone, Default)]
pub struct ActionButtonHandle {
    slot: Rc<RefCell<ButtonSlot>>,
}

impl ActionButtonHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the button and returns the guard that owns the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DaoListError::ButtonClaimed`] if another claim is alive.
    pub fn claim(&self, config: ButtonConfig) -> Result<ButtonClaim> {
        let mut slot = self.slot.borrow_mut();
        if slot.claimant.is_some() {
            return Err(DaoListError::ButtonClaimed);
        }

        slot.next_claim += 1;
        let id = slot.next_claim;
        tracing::debug!(claim = id, text = %config.text, "action button claimed");
        slot.claimant = Some(id);
        slot.config = Some(config);

        Ok(ButtonClaim {
            slot: Rc::clone(&self.slot),
            id,
        })
    }

    /// Clears the slot regardless of who holds it.
    ///
    /// An outstanding claim becomes inert: dropping it later leaves the slot alone.
    pub fn reset(&self) {
        tracing::debug!("action button reset");
        self.slot.borrow_mut().clear();
    }

    #[must_use]
    pub fn current(&self) -> Option<ButtonConfig> {
        self.slot.borrow().config.clone()
    }

    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.slot.borrow().claimant.is_some()
    }

    /// Presses the button, returning its command if one is configured.
    #[must_use]
    pub fn press(&self) -> Option<ButtonCommand> {
        let command = self.slot.borrow().config.as_ref().map(|c| c.command.clone());
        tracing::debug!(configured = command.is_some(), "action button pressed");
        command
    }
}

/// Guard over a configured button; clears the slot on drop.
#[derive(Debug)]
pub struct ButtonClaim {
    slot: Rc<RefCell<ButtonSlot>>,
    id: u64,
}

impl Drop for ButtonClaim {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.slot.try_borrow_mut() {
            if slot.claimant == Some(self.id) {
                tracing::debug!(claim = self.id, "action button released");
                slot.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(selected: Option<Dao>) -> ButtonConfig {
        ButtonConfig {
            text: "Select".to_string(),
            command: ButtonCommand::ConfirmSelection { selected },
        }
    }

    #[test]
    fn claim_configures_and_drop_clears() {
        let handle = ActionButtonHandle::new();
        let claim = handle.claim(config(None)).unwrap();
        assert_eq!(handle.current().map(|c| c.text), Some("Select".to_string()));

        drop(claim);
        assert!(handle.current().is_none());
        assert!(!handle.is_claimed());
    }

    #[test]
    fn second_claim_is_rejected_while_first_lives() {
        let handle = ActionButtonHandle::new();
        let _first = handle.claim(config(None)).unwrap();
        let second = handle.clone().claim(config(None));
        assert!(matches!(second, Err(DaoListError::ButtonClaimed)));
    }

    #[test]
    fn stale_claim_does_not_clear_newer_claim() {
        let handle = ActionButtonHandle::new();
        let stale = handle.claim(config(None)).unwrap();
        handle.reset();

        let alpha = Dao::new("0xA", "Alpha");
        let _fresh = handle.claim(config(Some(alpha.clone()))).unwrap();
        drop(stale);

        assert_eq!(
            handle.press(),
            Some(ButtonCommand::ConfirmSelection { selected: Some(alpha) })
        );
    }

    #[test]
    fn press_without_configuration_does_nothing() {
        assert!(ActionButtonHandle::new().press().is_none());
    }
}
