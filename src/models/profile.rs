//! Device-local onboarding draft, persisted before backend sync completes.

use serde::{Deserialize, Serialize};

/// Onboarding category the user picked locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileCategory {
    /// Looking for events/media ("find")
    Find,
    /// Organizing events or groups ("manage")
    Manage,
}

impl ProfileCategory {
    /// Parse the persisted string form; anything unrecognized counts as unset.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "find" => Some(Self::Find),
            "manage" => Some(Self::Manage),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::Manage => "manage",
        }
    }
}

/// Local onboarding draft.
///
/// Optimistic: may be ahead of the backend while sync is in flight, and
/// forward progress recorded here is never discarded by the resolver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalProfileDraft {
    /// "find", "manage", or "" when not chosen yet
    #[serde(default)]
    pub category: String,
    /// Free-form interest tags picked during onboarding
    #[serde(default)]
    pub selected_events: Vec<String>,
}

impl LocalProfileDraft {
    pub fn category(&self) -> Option<ProfileCategory> {
        ProfileCategory::parse(&self.category)
    }

    /// At least one non-blank interest tag was selected.
    pub fn has_events(&self) -> bool {
        self.selected_events.iter().any(|e| !e.trim().is_empty())
    }
}
