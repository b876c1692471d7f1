// SPDX-License-Identifier: MIT

//! Upload session tracking.
//!
//! The whole collection lives under one storage key and every operation
//! is a full read-modify-write, so the caller must supply the complete
//! session record on each upsert. Two concurrent writers on the same key
//! can lose an update; the upload pipeline keeps one writer per session
//! id, and `upsert_checked` exists for anyone who cannot guarantee that.
//!
//! The upload activity screen polls `list` on a fixed interval; a few
//! seconds of staleness is acceptable for the handful of sessions that
//! exist at a time.

use crate::error::AppError;
use crate::models::UploadSession;
use crate::storage::{keys, KvStore};
use std::cmp::Reverse;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Durable log of upload batches, one record per session id.
#[derive(Clone)]
pub struct UploadSessionStore {
    kv: KvStore,
}

impl UploadSessionStore {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    /// Read the raw collection in stored order. Unreadable or malformed
    /// storage counts as empty: the progress screen must always get a
    /// usable list.
    async fn read_all(&self) -> Vec<UploadSession> {
        let raw = match self.kv.get(keys::UPLOAD_SESSIONS).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Upload session read failed, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(sessions) => sessions,
            Err(e) => {
                tracing::warn!(error = %e, "Upload session data did not parse, treating as empty");
                Vec::new()
            }
        }
    }

    /// Persist the full collection. Write failures propagate: masking
    /// one would silently drop session state.
    async fn write_all(&self, sessions: &[UploadSession]) -> Result<(), AppError> {
        let raw = serde_json::to_string(sessions)
            .map_err(|e| AppError::Storage(format!("Failed to serialize sessions: {}", e)))?;
        self.kv.set(keys::UPLOAD_SESSIONS, &raw).await
    }

    /// All sessions, most recently updated first (stable for ties).
    pub async fn list(&self) -> Vec<UploadSession> {
        let mut sessions = self.read_all().await;
        sessions.sort_by_key(|s| Reverse(s.updated_at));
        sessions
    }

    /// The session with the given id, if any.
    pub async fn get(&self, id: &str) -> Option<UploadSession> {
        self.list().await.into_iter().find(|s| s.id == id)
    }

    /// Replace the session with the same id in place, or insert a new
    /// one at the front of the collection.
    pub async fn upsert(&self, session: UploadSession) -> Result<(), AppError> {
        let mut sessions = self.read_all().await;
        match sessions.iter_mut().find(|s| s.id == session.id) {
            Some(slot) => *slot = session,
            None => sessions.insert(0, session),
        }
        self.write_all(&sessions).await
    }

    /// Like [`upsert`](Self::upsert), but rejects phase regressions
    /// (`done` back to `uploading` and the like). For producers that
    /// cannot guarantee they are the only writer for a session id.
    pub async fn upsert_checked(&self, session: UploadSession) -> Result<(), AppError> {
        if let Some(existing) = self.get(&session.id).await {
            if !existing.phase.can_transition_to(session.phase) {
                return Err(AppError::InvalidTransition(format!(
                    "{} -> {} for session {}",
                    existing.phase.as_str(),
                    session.phase.as_str(),
                    session.id
                )));
            }
        }
        self.upsert(session).await
    }

    /// Remove the session with the given id; absent is a no-op.
    pub async fn remove(&self, id: &str) -> Result<(), AppError> {
        let mut sessions = self.read_all().await;
        let before = sessions.len();
        sessions.retain(|s| s.id != id);
        if sessions.len() == before {
            return Ok(());
        }
        self.write_all(&sessions).await
    }

    /// Drop every session in a terminal phase ("clear completed").
    pub async fn clear_completed(&self) -> Result<(), AppError> {
        let mut sessions = self.read_all().await;
        let before = sessions.len();
        sessions.retain(|s| !s.phase.is_terminal());
        if sessions.len() == before {
            return Ok(());
        }

        tracing::debug!(removed = before - sessions.len(), "Cleared completed sessions");
        self.write_all(&sessions).await
    }
}

/// Wipe the upload session collection and any cached media directories.
///
/// All-or-nothing: this backs the "clear my data" action, not a
/// per-session delete.
pub async fn reset_local_data(kv: &KvStore, cache_dirs: &[PathBuf]) -> Result<(), AppError> {
    kv.remove(keys::UPLOAD_SESSIONS).await?;

    for dir in cache_dirs {
        match tokio::fs::remove_dir_all(dir).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "Failed to remove {}: {}",
                    dir.display(),
                    e
                )))
            }
        }
    }

    tracing::info!(cache_dirs = cache_dirs.len(), "Local data reset complete");
    Ok(())
}
