use super::*;
use leptos::prelude::GetUntracked;

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_starts_loading_without_token() {
    let state = SessionState::default();
    assert!(state.token.is_none());
    assert!(state.loading);
}

// =============================================================
// Startup resolution
// =============================================================

#[test]
fn resolve_missing_clears_loading_without_token() {
    let state = SessionState::resolve_startup(StartupOutcome::Missing);
    assert_eq!(state.token, None);
    assert!(!state.loading);
}

#[test]
fn resolve_valid_keeps_stored_token() {
    let state = SessionState::resolve_startup(StartupOutcome::Valid("abc".to_owned()));
    assert_eq!(state.token.as_deref(), Some("abc"));
    assert!(!state.loading);
}

#[test]
fn resolve_rejected_drops_token() {
    let state = SessionState::resolve_startup(StartupOutcome::Rejected);
    assert_eq!(state.token, None);
    assert!(!state.loading);
}

// =============================================================
// Explicit token mutation
// =============================================================

#[test]
fn set_token_never_toggles_loading() {
    let mut state = SessionState::default();
    state.set_token(Some("abc".to_owned()));
    assert!(state.loading);

    let mut state = SessionState::resolve_startup(StartupOutcome::Missing);
    state.set_token(Some("abc".to_owned()));
    assert!(!state.loading);
    assert_eq!(state.token.as_deref(), Some("abc"));
}

#[test]
fn set_then_clear_leaves_no_token() {
    let mut state = SessionState::resolve_startup(StartupOutcome::Missing);
    state.set_token(Some("abc".to_owned()));
    state.set_token(None);
    assert_eq!(state.token, None);
    // Clearing an already-clear token is fine too.
    state.set_token(None);
    assert_eq!(state.token, None);
}

// =============================================================
// initialize driver (native build: storage reads as absent)
// =============================================================

#[test]
fn initialize_without_stored_token_resolves_immediately() {
    let session = RwSignal::new(SessionState::default());
    futures::executor::block_on(initialize(session));
    let state = session.get_untracked();
    assert_eq!(state.token, None);
    assert!(!state.loading);
}

#[test]
fn store_token_round_trip_updates_signal() {
    let session = RwSignal::new(SessionState::resolve_startup(StartupOutcome::Missing));
    store_token(session, Some("abc".to_owned()));
    assert_eq!(session.get_untracked().token.as_deref(), Some("abc"));
    assert!(!session.get_untracked().loading);

    store_token(session, None);
    assert_eq!(session.get_untracked().token, None);
}
