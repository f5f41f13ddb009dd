//! On-disk formats of the DAO cache.
//!
//! These types are separate from the domain [`Dao`] list so the cache layout
//! can evolve without touching the list logic.

use crate::domain::Dao;
use serde::{Deserialize, Serialize};

/// Current version written in the wrapped cache format.
pub const CACHE_VERSION: u32 = 1;

/// Contents of the DAO cache file.
///
/// Two layouts are accepted: the wrapped form carrying its own timestamp,
/// and a bare array of DAOs as returned by the indexer API.
///
/// ```json
/// {
///   "version": 1,
///   "updatedAt": 1700000000,
///   "daos": [
///     {
///       "daoId": 1,
///       "daoAddress": "0xA",
///       "daoMetadata": { "metadataArgs": { "name": "Alpha" } },
///       "daoProposals": ["Upgrade v2"]
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DaoCacheFile {
    Wrapped {
        #[serde(default = "default_version")]
        version: u32,
        /// Unix timestamp of the fetch; the file mtime is used when absent.
        #[serde(rename = "updatedAt", default)]
        updated_at: Option<i64>,
        daos: Vec<Dao>,
    },
    Bare(Vec<Dao>),
}

const fn default_version() -> u32 {
    CACHE_VERSION
}

impl DaoCacheFile {
    /// Splits the file into its DAOs and the embedded timestamp, if any.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Dao>, Option<i64>) {
        match self {
            Self::Wrapped { daos, updated_at, .. } => (daos, updated_at),
            Self::Bare(daos) => (daos, None),
        }
    }
}

/// A loaded DAO list and the time it was fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaoSnapshot {
    pub daos: Vec<Dao>,
    /// Unix timestamp in seconds.
    pub updated_at: i64,
}
