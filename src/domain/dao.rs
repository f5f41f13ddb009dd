//! DAO entity as delivered by the data source.
//!
//! The JSON shape mirrors what the spaces backend serves, so field names are
//! camelCase on the wire (`daoAddress`, `daoMetadata.metadataArgs.name`, ...).
//! Entities are immutable snapshots: the list view never edits them.

use serde::{Deserialize, Serialize};

/// One DAO "space".
///
/// The address is the identity used for deduplication; `dao_id` identifies
/// the selected entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dao {
    #[serde(default)]
    pub dao_id: i64,
    pub dao_address: String,
    pub dao_metadata: DaoMetadata,
    #[serde(default)]
    pub dao_proposals: Vec<String>,
}

/// Metadata envelope around the DAO's descriptive arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaoMetadata {
    pub metadata_args: MetadataArgs,
}

/// Descriptive fields set when the DAO was created.
///
/// Only `name` is required; the rest is kept so the entity survives a round
/// trip to the host untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataArgs {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Dao {
    /// Creates a DAO with no proposals and no optional metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// use daospaces::domain::Dao;
    ///
    /// let dao = Dao::new("0xA", "Alpha");
    /// assert_eq!(dao.name(), "Alpha");
    /// assert_eq!(dao.address(), "0xA");
    /// assert!(dao.dao_proposals.is_empty());
    /// ```
    #[must_use]
    pub fn new(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            dao_id: 0,
            dao_address: address.into(),
            dao_metadata: DaoMetadata {
                metadata_args: MetadataArgs {
                    name: name.into(),
                    description: None,
                    avatar: None,
                },
            },
            dao_proposals: Vec::new(),
        }
    }

    /// Replaces the proposal list.
    #[must_use]
    pub fn with_proposals<I, S>(mut self, proposals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dao_proposals = proposals.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the numeric id reported by the backend.
    #[must_use]
    pub const fn with_id(mut self, dao_id: i64) -> Self {
        self.dao_id = dao_id;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.dao_metadata.metadata_args.name
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.dao_address
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_shape() {
        let json = r#"{
            "daoId": 7,
            "daoAddress": "EQAlpha",
            "daoMetadata": { "metadataArgs": { "name": "Alpha", "about": "ignored" } },
            "daoProposals": ["EQp1", "EQp2"]
        }"#;

        let dao: Dao = serde_json::from_str(json).unwrap();
        assert_eq!(dao.dao_id, 7);
        assert_eq!(dao.address(), "EQAlpha");
        assert_eq!(dao.name(), "Alpha");
        assert_eq!(dao.dao_proposals, vec!["EQp1", "EQp2"]);
    }

    #[test]
    fn missing_proposals_default_to_empty() {
        let json = r#"{ "daoAddress": "0xB", "daoMetadata": { "metadataArgs": { "name": "Beta" } } }"#;
        let dao: Dao = serde_json::from_str(json).unwrap();
        assert!(dao.dao_proposals.is_empty());
        assert_eq!(dao.dao_id, 0);
    }

    #[test]
    fn serializes_camel_case_without_empty_optionals() {
        let dao = Dao::new("0xA", "Alpha").with_id(3);
        let value = serde_json::to_value(&dao).unwrap();
        assert_eq!(value["daoAddress"], "0xA");
        assert_eq!(value["daoMetadata"]["metadataArgs"]["name"], "Alpha");
        assert!(value["daoMetadata"]["metadataArgs"].get("description").is_none());
    }
}
