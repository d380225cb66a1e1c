//! Concept records as returned by the service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Copyright;

/// Title of a concept in one language.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptTitle {
    pub title: String,
    pub language: String,
}

/// Body text of a concept in one language.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptContent {
    pub content: String,
    pub language: String,
}

/// Meta image of a concept in one language, resolved to a URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptMetaImage {
    pub url: String,
    pub alt: String,
    pub language: String,
}

/// Tags attached to a concept in one language.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptTags {
    pub tags: Vec<String>,
    pub language: String,
}

/// Embed markup for the visual element of a concept in one language.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualElement {
    pub visual_element: String,
    pub language: String,
}

/// Workflow state of a concept: the current label plus any other labels the
/// concept also carries. The label vocabulary is owned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub current: String,
    pub other: Vec<String>,
}

/// A concept as stored by the service, with all language versions listed in
/// `supported_languages` and the localized fields resolved for one of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    pub id: i64,
    pub revision: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<ConceptTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ConceptContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<Copyright>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_image: Option<ConceptMetaImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<ConceptTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_ids: Option<Vec<String>>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<Vec<String>>,
    pub supported_languages: Vec<String>,
    pub article_ids: Vec<i64>,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_element: Option<VisualElement>,
}
