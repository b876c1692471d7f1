// SPDX-License-Identifier: MIT

//! Post-authentication route resolution.
//!
//! Reconciles three possibly-inconsistent signals - the server bootstrap
//! snapshot (which may have failed to load), the device-local onboarding
//! draft, and the stricter per-field completion predicate - into the one
//! screen to land on. Local forward progress is sticky: once a category
//! and events are chosen on this device, no signal routes the user
//! backward through onboarding.
//!
//! Pure and total: every input shape resolves to a route, including a
//! fully empty snapshot.

use crate::models::{screens, BootstrapSnapshot, LocalProfileDraft, RouteTarget};
use crate::services::account_check::needs_account_completion;

/// Fields whose server-side presence alone is enough to skip onboarding.
/// Presence wins here even if a quality heuristic would quibble.
const PRESENCE_FIELDS: [&str; 5] = [
    "first_name",
    "last_name",
    "username",
    "nationality",
    "birthdate",
];

/// Compute the screen to show immediately after authentication.
pub fn resolve_post_auth_route(
    bootstrap: Option<&BootstrapSnapshot>,
    profile: &LocalProfileDraft,
) -> RouteTarget {
    // Bootstrap fetch failed: nothing but the local draft to go on.
    let Some(bootstrap) = bootstrap else {
        return resolve_from_draft(profile);
    };

    // All required account fields present server-side: straight to the
    // main shell regardless of other flags.
    if PRESENCE_FIELDS
        .iter()
        .all(|f| !bootstrap.user.field(f).is_empty())
    {
        return RouteTarget::new(screens::BOTTOM_TABS);
    }

    if needs_account_completion(Some(bootstrap)) {
        if profile.category().is_none() && !profile.has_events() {
            // No local progress at all: restart onboarding from the top.
            return RouteTarget::new(screens::CREATE_PROFILE);
        }
        // Partial or full local progress: resume at the earliest unmet
        // step, which is the main shell when both signals are set.
        return resolve_from_draft(profile);
    }

    if bootstrap.has_profiles {
        return RouteTarget::new(screens::BOTTOM_TABS);
    }

    resolve_from_draft(profile)
}

/// Earliest unmet onboarding step according to the local draft alone.
fn resolve_from_draft(profile: &LocalProfileDraft) -> RouteTarget {
    match profile.category() {
        None => RouteTarget::new(screens::CATEGORY_SELECTION),
        Some(category) if !profile.has_events() => RouteTarget::with_param(
            screens::SELECT_EVENT,
            "selectedCategory",
            category.as_str(),
        ),
        Some(_) => RouteTarget::new(screens::BOTTOM_TABS),
    }
}
