//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (main.rs) and the
//! domain/storage/worker layers.
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`bridge`]: Keeps the action button in step with the selection
//! - [`button`]: Single-claimant action button handle
//! - [`handler`]: Event processing and state transitions
//! - [`host`]: Link to an embedding host launched through a CLI pipe
//! - [`modes`]: Input and list mode types
//! - [`query`]: Search query state
//! - [`state`]: Central application state and view model computation

pub mod actions;
pub mod bridge;
pub mod button;
pub mod handler;
pub mod host;
pub mod modes;
pub mod query;
pub mod state;

pub use actions::Action;
pub use bridge::SelectionBridge;
pub use button::{ActionButtonHandle, ButtonClaim, ButtonCommand, ButtonConfig};
pub use handler::{handle_event, Event};
pub use host::HostLink;
pub use modes::{InputMode, ListMode, SearchFocus};
pub use query::QueryState;
pub use state::{AppState, ListRow, ListSettings, Toast, ToastLevel};
