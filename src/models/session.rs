//! Upload batch session records persisted on-device.
//!
//! Field names in the serialized form are frozen: the collection predates
//! this crate and mixes camelCase and snake_case keys. Every field has a
//! serde default so older records (or records written mid-upgrade) still
//! load.

use serde::{Deserialize, Serialize};

/// Phase of an upload batch.
///
/// Forward-only: `uploading → processing → {done | failed}`, with
/// `failed` reachable from either active phase. Terminal phases are
/// final. The plain upsert path does not enforce this; see
/// [`crate::storage::UploadSessionStore::upsert_checked`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadPhase {
    #[default]
    Uploading,
    Processing,
    Done,
    Failed,
}

impl UploadPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uploading => "uploading",
            Self::Processing => "processing",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }

    /// Whether the session has finished, successfully or not.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Whether moving from `self` to `next` respects the forward-only rule.
    /// Re-asserting the current phase (a progress update) is always fine.
    pub fn can_transition_to(self, next: Self) -> bool {
        match (self, next) {
            (a, b) if a == b => true,
            (Self::Uploading, Self::Processing | Self::Failed) => true,
            (Self::Processing, Self::Done | Self::Failed) => true,
            _ => false,
        }
    }
}

/// One upload batch tracked on-device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadSession {
    /// Caller-supplied, stable for the life of the batch
    #[serde(default)]
    pub id: String,
    /// Event the batch belongs to
    #[serde(rename = "competitionId", default)]
    pub competition_id: String,
    /// Epoch milliseconds
    #[serde(rename = "createdAt", default)]
    pub created_at: i64,
    /// Epoch milliseconds; the listing sort key
    #[serde(rename = "updatedAt", default)]
    pub updated_at: i64,
    /// Submitted without attribution
    #[serde(default)]
    pub anonymous: bool,
    #[serde(rename = "watermarkText", default, skip_serializing_if = "Option::is_none")]
    pub watermark_text: Option<String>,
    #[serde(default)]
    pub phase: UploadPhase,
    /// Media count for the upload phase (`uploaded <= total`)
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub uploaded: u32,
    /// Counts for the processing phase (`processing_ready <= processing_total`)
    #[serde(default)]
    pub processing_total: u32,
    #[serde(default)]
    pub processing_ready: u32,
    /// Backend-assigned media identifiers once known
    #[serde(default)]
    pub media_ids: Vec<String>,
    /// Human-readable failure description, set only when `phase == failed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadSession {
    /// Fresh `uploading` session for a newly started batch.
    pub fn new(id: &str, competition_id: &str, total: u32, now_millis: i64) -> Self {
        Self {
            id: id.to_string(),
            competition_id: competition_id.to_string(),
            created_at: now_millis,
            updated_at: now_millis,
            anonymous: false,
            watermark_text: None,
            phase: UploadPhase::Uploading,
            total,
            uploaded: 0,
            processing_total: 0,
            processing_ready: 0,
            media_ids: Vec::new(),
            error: None,
        }
    }
}
