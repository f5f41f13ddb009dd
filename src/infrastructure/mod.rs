//! Infrastructure layer: sandbox paths and outbound URLs.
//!
//! Zellij mounts the host filesystem under `/host`; [`paths`] translates
//! between the two views. [`routes`] builds the web links the list opens.

pub mod paths;
pub mod routes;

pub use paths::{default_data_file, expand_tilde, get_data_dir};
pub use routes::dao_root;
