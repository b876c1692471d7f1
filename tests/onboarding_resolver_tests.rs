// SPDX-License-Identifier: MIT

mod common;

use allin_core::models::{screens, BootstrapSnapshot, BootstrapUser, LocalProfileDraft};
use allin_core::services::resolve_post_auth_route;
use common::{complete_user, draft, snapshot_with_user};

// ─── No bootstrap: local draft decides ───────────────────────────

#[test]
fn test_no_bootstrap_no_draft_goes_to_category_selection() {
    let route = resolve_post_auth_route(None, &draft("", &[]));
    assert_eq!(route.name, screens::CATEGORY_SELECTION);
    assert!(route.params.is_none());
}

#[test]
fn test_no_bootstrap_category_only_goes_to_event_selection() {
    let route = resolve_post_auth_route(None, &draft("find", &[]));
    assert_eq!(route.name, screens::SELECT_EVENT);
    assert_eq!(
        route.param("selectedCategory").and_then(|v| v.as_str()),
        Some("find")
    );
}

#[test]
fn test_no_bootstrap_full_draft_goes_to_main_shell() {
    let route = resolve_post_auth_route(None, &draft("manage", &["track"]));
    assert_eq!(route.name, screens::BOTTOM_TABS);
}

#[test]
fn test_unrecognized_category_counts_as_unset() {
    let route = resolve_post_auth_route(None, &draft("coach", &["track"]));
    assert_eq!(route.name, screens::CATEGORY_SELECTION);
}

// ─── Presence short-circuit ──────────────────────────────────────

#[test]
fn test_all_fields_present_short_circuits_to_main_shell() {
    // Backend flag set AND a junk-quality name, but every required field
    // is non-blank: presence wins at this step.
    let mut snapshot = snapshot_with_user(BootstrapUser {
        first_name: Some("google-oauth2|10394823".to_string()),
        ..complete_user()
    });
    snapshot.needs_user_onboarding = true;

    let route = resolve_post_auth_route(Some(&snapshot), &draft("", &[]));
    assert_eq!(route.name, screens::BOTTOM_TABS);
}

#[test]
fn test_presence_check_ignores_email() {
    // Email is not in the presence set; a blank one alone still short-circuits.
    let snapshot = snapshot_with_user(BootstrapUser {
        email: None,
        ..complete_user()
    });

    let route = resolve_post_auth_route(Some(&snapshot), &draft("", &[]));
    assert_eq!(route.name, screens::BOTTOM_TABS);
}

// ─── Completion required ─────────────────────────────────────────

fn incomplete_snapshot() -> BootstrapSnapshot {
    // Missing first name: fails presence, fires the quality predicate
    snapshot_with_user(BootstrapUser {
        first_name: None,
        ..complete_user()
    })
}

#[test]
fn test_completion_required_no_local_progress_restarts_onboarding() {
    let route = resolve_post_auth_route(Some(&incomplete_snapshot()), &draft("", &[]));
    assert_eq!(route.name, screens::CREATE_PROFILE);
}

#[test]
fn test_completion_required_resumes_at_category() {
    // Events picked but no category: resume at the earliest unmet step
    let route = resolve_post_auth_route(Some(&incomplete_snapshot()), &draft("", &["track"]));
    assert_eq!(route.name, screens::CATEGORY_SELECTION);
}

#[test]
fn test_completion_required_resumes_at_events() {
    let route = resolve_post_auth_route(Some(&incomplete_snapshot()), &draft("manage", &[]));
    assert_eq!(route.name, screens::SELECT_EVENT);
    assert_eq!(
        route.param("selectedCategory").and_then(|v| v.as_str()),
        Some("manage")
    );
}

#[test]
fn test_local_progress_is_sticky() {
    // Predicate fires, but category and events are both set locally:
    // never route backward.
    let route = resolve_post_auth_route(Some(&incomplete_snapshot()), &draft("find", &["track"]));
    assert_eq!(route.name, screens::BOTTOM_TABS);
}

// ─── Existing profiles and fallback ──────────────────────────────

#[test]
fn test_guest_with_profiles_goes_to_main_shell() {
    // Guest: completion predicate stands down, has_profiles decides
    let mut snapshot = snapshot_with_user(BootstrapUser {
        is_guest: true,
        ..BootstrapUser::default()
    });
    snapshot.has_profiles = true;

    let route = resolve_post_auth_route(Some(&snapshot), &draft("", &[]));
    assert_eq!(route.name, screens::BOTTOM_TABS);
}

#[test]
fn test_guest_without_profiles_falls_back_to_draft() {
    let snapshot = snapshot_with_user(BootstrapUser {
        is_guest: true,
        ..BootstrapUser::default()
    });

    let route = resolve_post_auth_route(Some(&snapshot), &draft("find", &[]));
    assert_eq!(route.name, screens::SELECT_EVENT);
}

#[test]
fn test_empty_snapshot_never_panics() {
    let snapshot = BootstrapSnapshot::default();
    let route = resolve_post_auth_route(Some(&snapshot), &LocalProfileDraft::default());
    assert_eq!(route.name, screens::CREATE_PROFILE);
}

#[test]
fn test_resolution_is_deterministic() {
    let snapshot = incomplete_snapshot();
    let profile = draft("find", &[]);

    let first = resolve_post_auth_route(Some(&snapshot), &profile);
    let second = resolve_post_auth_route(Some(&snapshot), &profile);
    assert_eq!(first, second);
}
