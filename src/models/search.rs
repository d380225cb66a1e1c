//! Search request and response contracts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ConceptContent, ConceptMetaImage, ConceptTags, ConceptTitle, Status};

/// Parameters for searching published concepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptSearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    /// Restrict the search to these concept ids. Empty means no restriction.
    pub id_list: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Fall back to another language version when the requested one is missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
    /// Opaque cursor for paging past the regular page window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_id: Option<String>,
    pub subjects: Vec<String>,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact_title_match: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_resource: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_id: Option<String>,
}

/// Parameters for the editorial draft search, which additionally filters on
/// workflow labels and the users who last touched the concept.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftConceptSearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    pub id_list: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_id: Option<String>,
    pub subjects: Vec<String>,
    pub tags: Vec<String>,
    pub status: Vec<String>,
    pub users: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_resource: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_id: Option<String>,
}

/// One page of concept search hits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptSearchResult {
    pub total_count: i64,
    /// Absent on scroll requests, where the cursor replaces page numbering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i32>,
    pub page_size: i32,
    pub language: String,
    pub results: Vec<ConceptSummary>,
}

/// A search hit: the concept denormalized to the requested language.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptSummary {
    pub id: i64,
    pub title: ConceptTitle,
    pub content: ConceptContent,
    pub meta_image: ConceptMetaImage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<ConceptTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_ids: Option<Vec<String>>,
    pub supported_languages: Vec<String>,
    pub last_updated: DateTime<Utc>,
    pub status: Status,
    pub updated_by: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

/// One page of tag search hits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagsSearchResult {
    pub total_count: i64,
    pub page: i32,
    pub page_size: i32,
    pub language: String,
    pub results: Vec<String>,
}

/// All tags used within one subject, in one language.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectTags {
    pub subject_id: String,
    pub tags: Vec<String>,
    pub language: String,
}
