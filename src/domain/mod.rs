//! Domain layer for the DAO spaces plugin.
//!
//! Holds the list semantics that do not depend on Zellij: the DAO model, the
//! multi-field search filter, pagination and the selection toggle.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`dao`]: DAO entity as delivered by the data source
//! - [`filter`]: Case-insensitive multi-field search
//! - [`pagination`]: Page limit and scroll mode resolution
//! - [`selection`]: Single-entity selection toggle
//!
//! # Examples
//!
//! ```
//! use daospaces::domain::{filter_daos, Dao};
//!
//! let daos = vec![Dao::new("0xA", "Alpha"), Dao::new("0xB", "Beta")];
//! let found = filter_daos(&daos, "alp");
//! assert_eq!(found.len(), 1);
//! ```

pub mod dao;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod selection;

pub use dao::{Dao, DaoMetadata, MetadataArgs};
pub use error::{DaoListError, Result};
pub use filter::{filter_daos, match_ranges};
pub use pagination::{Pagination, ScrollMode, PAGE_SIZE};
pub use selection::Selection;
