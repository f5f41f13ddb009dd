//! User interface rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, truncation, ages)
//! - [`locale`]: Localized UI strings
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod locale;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use locale::{Locale, TextKey};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    DisplayItem, DisplayRow, EmptyState, FooterInfo, HeaderInfo, ListBody, RenderState,
    SearchBarInfo, ToastInfo, UIViewModel,
};
