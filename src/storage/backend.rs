//! Data source abstraction.
//!
//! The list only needs "give me the current DAOs"; [`DaoSource`] keeps the
//! worker independent of where they come from.

use crate::domain::error::Result;
use crate::storage::models::DaoSnapshot;

/// Source of DAO snapshots, polled from the worker thread.
///
/// # Implementations
///
/// - [`JsonDaoSource`](crate::storage::JsonDaoSource): reads a JSON cache file
///
/// # Examples
///
/// ```no_run
/// use daospaces::storage::{DaoSource, JsonDaoSource};
/// use std::path::PathBuf;
///
/// let mut source = JsonDaoSource::new(PathBuf::from("/tmp/daos.json"));
/// let snapshot = source.load(false)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait DaoSource: Send {
    /// Returns the current snapshot.
    ///
    /// Implementations may answer from a cache unless `force` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read or parsed.
    fn load(&mut self, force: bool) -> Result<DaoSnapshot>;
}
