//! Storage layer supplying DAO snapshots to the worker.
//!
//! # Modules
//!
//! - `backend`: [`DaoSource`] trait abstraction
//! - `json`: JSON cache file implementation
//! - `models`: On-disk cache formats separate from domain models

pub mod backend;
pub mod json;
pub mod models;

pub use backend::DaoSource;
pub use json::JsonDaoSource;
pub use models::{DaoCacheFile, DaoSnapshot};
