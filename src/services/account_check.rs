// SPDX-License-Identifier: MIT

//! Account-completion heuristics.
//!
//! The gateway's own `needs_user_onboarding` flag only checks field
//! presence. OAuth sign-ups regularly land with junk in the free-text
//! fields (an auth subject stored as a name, a synthetic email), so each
//! field gets a quality check on top of the presence check. The checks
//! are an ordered list of named predicates so new heuristics can be
//! appended and tested on their own.

use crate::models::{BootstrapSnapshot, BootstrapUser};
use chrono::{Datelike, NaiveDate, Utc};

/// Account fields onboarding must collect when missing or junk.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "username",
    "first_name",
    "last_name",
    "email",
    "nationality",
    "birthdate",
];

/// Literal tokens that show up as stand-in names.
const PLACEHOLDER_TOKENS: [&str; 6] = ["auth0", "unknown", "n/a", "na", "null", "undefined"];

/// Synthetic address minted for accounts created without a real email.
const SYNTHETIC_EMAIL_SUFFIX: &str = ".auth@allin.local";

/// A named per-field quality check. `failed` returns true when the field
/// value cannot be accepted as real user data.
struct FieldCheck {
    name: &'static str,
    failed: fn(&BootstrapUser) -> bool,
}

const FIELD_CHECKS: &[FieldCheck] = &[
    FieldCheck {
        name: "username",
        failed: |u| !valid_username(u.field("username")),
    },
    FieldCheck {
        name: "first_name",
        failed: |u| is_placeholder_name(u.field("first_name")),
    },
    FieldCheck {
        name: "last_name",
        failed: |u| is_placeholder_name(u.field("last_name")),
    },
    FieldCheck {
        name: "email",
        failed: |u| !valid_email(u.field("email")),
    },
    FieldCheck {
        name: "nationality",
        failed: |u| u.field("nationality").is_empty(),
    },
    FieldCheck {
        name: "birthdate",
        failed: |u| !plausible_birthdate(u.field("birthdate")),
    },
];

/// Decide whether onboarding must collect account information.
///
/// `None` means the bootstrap fetch failed entirely; with nothing to go
/// on, direct callers get the fail-safe answer and are forced through
/// completion. (The route resolver handles absence one level up and
/// never reaches this path with `None`.)
pub fn needs_account_completion(bootstrap: Option<&BootstrapSnapshot>) -> bool {
    let Some(bootstrap) = bootstrap else {
        return true;
    };

    // Guests are exempt
    if bootstrap.user.is_guest {
        return false;
    }

    // The gateway's own verdict is authoritative when it fires
    if bootstrap.needs_user_onboarding {
        return true;
    }

    // Gateway-reported missing fields (names compared case-insensitively)
    let missing: Vec<String> = bootstrap
        .missing_user_fields
        .iter()
        .map(|f| f.trim().to_ascii_lowercase())
        .collect();
    if REQUIRED_FIELDS.iter().any(|f| missing.iter().any(|m| m == f)) {
        return true;
    }

    for check in FIELD_CHECKS {
        if (check.failed)(&bootstrap.user) {
            tracing::debug!(field = check.name, "Account field failed quality check");
            return true;
        }
    }

    false
}

/// Auth subject identifiers leak into name fields on OAuth sign-up.
fn looks_like_auth_subject(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    value.contains('|')
        || lower.starts_with("google-oauth2|")
        || lower.starts_with("auth0|")
        || lower.starts_with("apple|")
}

fn valid_username(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    if looks_like_auth_subject(value) || value.contains('@') {
        return false;
    }
    // Stripped of everything but letters/digits/./_/-, at least 2 chars
    // must remain for the name to count as a real handle.
    let kept = value
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .count();
    kept >= 2
}

fn is_placeholder_name(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    let lower = value.to_ascii_lowercase();
    if PLACEHOLDER_TOKENS.contains(&lower.as_str()) {
        return true;
    }
    if looks_like_auth_subject(value) || value.contains('@') {
        return true;
    }
    if !value.chars().any(char::is_alphanumeric) {
        return true;
    }
    // Long lowercase vowel-less strings are almost always machine IDs.
    if value.len() >= 12
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        && !value.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
    {
        return true;
    }
    false
}

/// Basic `local@domain.tld` shape, plus rejection of the synthetic
/// addresses the auth layer mints for password-less sign-ups.
fn valid_email(value: &str) -> bool {
    if value.is_empty() || value.ends_with(SYNTHETIC_EMAIL_SUFFIX) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.is_empty() || domain.chars().any(|c| c.is_whitespace() || c == '@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Plausible birth year band: not before 1900, and at least five years
/// back from the current year.
fn plausible_birthdate(value: &str) -> bool {
    let Some(prefix) = value.get(..10) else {
        return false;
    };
    let Ok(date) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") else {
        return false;
    };
    let year = date.year();
    year >= 1900 && year <= Utc::now().year() - 5
}
