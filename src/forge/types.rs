//! Shared data types for release records and deletion candidates.
use chrono::DateTime;
use serde::Deserialize;

/// A release as returned by the forge. Read-only and fetched fresh per run.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseRecord {
    /// Release identifier, unique within a repository.
    pub id: u64,
    /// Name of the git tag the release points at.
    pub tag_name: String,
    /// Whether the release is an unpublished draft.
    pub draft: bool,
    /// RFC 3339 publish timestamp. Absent for drafts.
    #[serde(default)]
    pub published_at: Option<String>,
}

impl ReleaseRecord {
    /// Publish time as a unix timestamp. Missing or unparseable timestamps
    /// sort as oldest.
    pub fn published_timestamp(&self) -> i64 {
        self.published_at
            .as_deref()
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
            .map(|dt| dt.timestamp())
            .unwrap_or(i64::MIN)
    }
}

/// A release selected for deletion. Exists only within one repository's
/// processing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionCandidate {
    pub id: u64,
    pub tag_name: String,
}
