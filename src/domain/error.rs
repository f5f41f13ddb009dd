//! Error types for the DAO spaces plugin.
//!
//! [`DaoListError`] is the single error type of the crate; [`Result`] aliases it.
//! Variants wrapping foreign errors convert through `#[from]`.

use thiserror::Error;

/// The main error type for plugin operations.
///
/// User-facing validation (confirming an empty selection) is not an error: it
/// surfaces as a toast. Everything here is an internal failure that gets
/// logged or reported back from the worker.
#[derive(Debug, Error)]
pub enum DaoListError {
    /// Reading or decoding the DAO cache failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Locale table could not be read or parsed.
    #[error("Locale error: {0}")]
    Locale(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The action button already has an active claimant.
    ///
    /// A button handle admits one claim at a time; a second list view must wait
    /// for the first claim to be dropped.
    #[error("Action button is already claimed")]
    ButtonClaimed,
}

/// A specialized `Result` type for plugin operations.
pub type Result<T> = std::result::Result<T, DaoListError>;
