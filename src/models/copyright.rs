//! Licensing and attribution metadata attached to concepts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contributor credited on a concept, with the role the service assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    /// Role of the contributor (e.g. writer, photographer). `type` on the wire.
    #[serde(rename = "type")]
    pub author_type: String,
    pub name: String,
}

/// A license the content is published under.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub license: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Copyright metadata for a concept: license, provenance and contributors
/// grouped by how they touched the content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Copyright {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    pub creators: Vec<Author>,
    pub processors: Vec<Author>,
    pub rightsholders: Vec<Author>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreement_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<DateTime<Utc>>,
}
