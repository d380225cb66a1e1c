//! Failure shapes returned by the concept service.
//!
//! The service reports failures as a JSON body with a stable machine code, a
//! human-readable description and, for validation failures, the offending
//! fields. This module names those shapes; raising and handling them is the
//! caller's business.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error codes as constants to avoid stringly-typed matching in callers.
pub mod codes {
    pub const VALIDATION: &str = "VALIDATION";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const ACCESS_DENIED: &str = "ACCESS_DENIED";
    pub const GENERIC: &str = "GENERIC";
}

/// One field the service rejected, and why.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationMessage {
    pub field: String,
    pub message: String,
}

/// Failure body for a rejected request.
///
/// The wire key `occuredAt` keeps the service's historical spelling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub code: String,
    pub description: String,
    pub messages: Vec<ValidationMessage>,
    pub occured_at: DateTime<Utc>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.description)
    }
}

impl std::error::Error for ValidationError {}
