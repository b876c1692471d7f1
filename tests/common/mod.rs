// SPDX-License-Identifier: MIT

use allin_core::models::{
    BootstrapSnapshot, BootstrapUser, LocalProfileDraft, UploadPhase, UploadSession,
};
use allin_core::storage::{KvStore, UploadSessionStore};

/// A user whose every account field passes the quality checks.
#[allow(dead_code)]
pub fn complete_user() -> BootstrapUser {
    BootstrapUser {
        username: Some("maria_k".to_string()),
        first_name: Some("Maria".to_string()),
        last_name: Some("Kostas".to_string()),
        email: Some("maria@example.com".to_string()),
        nationality: Some("GR".to_string()),
        birthdate: Some("1995-06-15".to_string()),
        is_guest: false,
    }
}

#[allow(dead_code)]
pub fn snapshot_with_user(user: BootstrapUser) -> BootstrapSnapshot {
    BootstrapSnapshot {
        user,
        needs_user_onboarding: false,
        missing_user_fields: Vec::new(),
        has_profiles: false,
    }
}

#[allow(dead_code)]
pub fn draft(category: &str, events: &[&str]) -> LocalProfileDraft {
    LocalProfileDraft {
        category: category.to_string(),
        selected_events: events.iter().map(|e| e.to_string()).collect(),
    }
}

/// Session with a fixed update timestamp for ordering tests.
#[allow(dead_code)]
pub fn make_session(id: &str, updated_at: i64) -> UploadSession {
    UploadSession {
        updated_at,
        ..UploadSession::new(id, "comp-1", 5, updated_at)
    }
}

#[allow(dead_code)]
pub fn make_session_in_phase(id: &str, phase: UploadPhase) -> UploadSession {
    UploadSession {
        phase,
        ..UploadSession::new(id, "comp-1", 5, 1000)
    }
}

/// Session store over an in-memory key-value backend.
#[allow(dead_code)]
pub fn test_store() -> UploadSessionStore {
    UploadSessionStore::new(KvStore::new_in_memory())
}
