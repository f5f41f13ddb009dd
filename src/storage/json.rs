//! JSON cache file data source.
//!
//! Reads the DAO list from a file kept up to date by an external fetcher.
//! The parsed snapshot is cached and only re-read when the file's
//! modification time changes, so periodic refetches are cheap.

use crate::domain::error::{DaoListError, Result};
use crate::storage::backend::DaoSource;
use crate::storage::models::{DaoCacheFile, DaoSnapshot};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug)]
struct CachedSnapshot {
    modified: SystemTime,
    snapshot: DaoSnapshot,
}

/// DAO source backed by a JSON file.
///
/// A missing file is not an error: it yields an empty snapshot, which the
/// list renders as its empty state.
#[derive(Debug)]
pub struct JsonDaoSource {
    file_path: PathBuf,
    cached: Option<CachedSnapshot>,
}

impl JsonDaoSource {
    #[must_use]
    pub fn new(file_path: PathBuf) -> Self {
        tracing::debug!(path = ?file_path, "initializing JSON dao source");
        Self {
            file_path,
            cached: None,
        }
    }

    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Reads and parses the cache file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    fn read_file(path: &Path, modified: SystemTime) -> Result<DaoSnapshot> {
        let contents = std::fs::read_to_string(path)?;
        let file: DaoCacheFile = serde_json::from_str(&contents)
            .map_err(|e| DaoListError::Storage(format!("failed to parse JSON: {e}")))?;

        let (daos, updated_at) = file.into_parts();
        let updated_at = updated_at.unwrap_or_else(|| unix_seconds(modified));

        tracing::debug!(count = daos.len(), updated_at, "loaded dao cache");
        Ok(DaoSnapshot { daos, updated_at })
    }
}

impl DaoSource for JsonDaoSource {
    fn load(&mut self, force: bool) -> Result<DaoSnapshot> {
        let _span = tracing::debug_span!("json_load_daos", path = ?self.file_path, force).entered();

        let metadata = match std::fs::metadata(&self.file_path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("dao cache missing, returning empty snapshot");
                self.cached = None;
                return Ok(DaoSnapshot::default());
            }
            Err(e) => return Err(e.into()),
        };
        let modified = metadata.modified().unwrap_or(UNIX_EPOCH);

        if let Some(cached) = self.cached.as_ref().filter(|c| !force && c.modified == modified) {
            tracing::trace!("dao cache unchanged");
            return Ok(cached.snapshot.clone());
        }

        let snapshot = Self::read_file(&self.file_path, modified)?;
        self.cached = Some(CachedSnapshot {
            modified,
            snapshot: snapshot.clone(),
        });
        Ok(snapshot)
    }
}

fn unix_seconds(time: SystemTime) -> i64 {
    time.duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|d| i64::try_from(d.as_secs()).ok())
        .unwrap_or(0)
}
