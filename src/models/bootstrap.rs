//! Bootstrap snapshot returned by the gateway after authentication.
//!
//! Every field carries a serde default: the gateway omits anything the
//! user has not filled in, and older gateway versions omit whole keys.
//! Tolerant parsing happens here, once, so the decision logic downstream
//! can assume a well-formed record.

use serde::{Deserialize, Serialize};

/// Account fields as the gateway currently knows them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BootstrapUser {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    /// ISO date string ("YYYY-MM-DD", possibly with a time suffix)
    #[serde(default)]
    pub birthdate: Option<String>,
    /// Guest accounts are exempt from completion checks
    #[serde(default)]
    pub is_guest: bool,
}

impl BootstrapUser {
    /// Trimmed value of a named account field, `""` when absent or unknown.
    pub fn field(&self, name: &str) -> &str {
        let value = match name {
            "username" => &self.username,
            "first_name" => &self.first_name,
            "last_name" => &self.last_name,
            "email" => &self.email,
            "nationality" => &self.nationality,
            "birthdate" => &self.birthdate,
            _ => return "",
        };
        value.as_deref().map(str::trim).unwrap_or("")
    }
}

/// Server-side account state fetched once after login.
///
/// Authoritative for "is onboarding needed", but field *quality* is still
/// re-checked locally because the gateway only checks presence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BootstrapSnapshot {
    #[serde(default)]
    pub user: BootstrapUser,
    /// Set by the gateway when its own presence checks fail
    #[serde(default)]
    pub needs_user_onboarding: bool,
    /// Field names the gateway considers missing
    #[serde(default)]
    pub missing_user_fields: Vec<String>,
    /// Whether the account already has a downstream profile set up
    #[serde(default)]
    pub has_profiles: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_lookup_trims_and_defaults() {
        let user = BootstrapUser {
            first_name: Some("  Maria ".to_string()),
            ..Default::default()
        };

        assert_eq!(user.field("first_name"), "Maria");
        assert_eq!(user.field("last_name"), "");
        assert_eq!(user.field("not_a_field"), "");
    }

    #[test]
    fn test_snapshot_parses_with_missing_keys() {
        let snapshot: BootstrapSnapshot = serde_json::from_str("{}").expect("should parse");

        assert!(!snapshot.needs_user_onboarding);
        assert!(!snapshot.has_profiles);
        assert!(snapshot.missing_user_fields.is_empty());
        assert!(!snapshot.user.is_guest);
    }
}
