//! Session token state machine.
//!
//! LIFECYCLE
//! =========
//! The session starts in the loading state. `initialize` runs once per
//! process start: it reads the persisted token and, if one exists, awaits a
//! server-side validation before flipping `loading` to false. After that the
//! token changes only through `store_token` (login success or logout), which
//! never touches `loading`.
//!
//! The state lives in an `RwSignal<SessionState>` provided via context from
//! `App`, so the guard and the pages share one owned session object instead
//! of a global.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, Set, Update};

use crate::net;
use crate::util::token_store;

/// Session failures. `ValidationRejected` deliberately collapses "server
/// said no", "server unreachable", and "validation timed out" into one kind;
/// all force a logout. `StorageUnavailable` is treated as an absent token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("browser storage is unavailable")]
    StorageUnavailable,
    #[error("token validation rejected")]
    ValidationRejected,
    #[error("{0}")]
    LoginFailed(String),
}

/// Authentication state: the bearer token and the startup loading flag.
///
/// `loading` is true for exactly one contiguous interval from process start
/// until the initial validation attempt resolves, and never reverts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            token: None,
            loading: true,
        }
    }
}

/// How the startup validation resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StartupOutcome {
    /// No persisted token (or storage unavailable). No network call was made.
    Missing,
    /// The server confirmed the persisted token.
    Valid(String),
    /// The server rejected the token, was unreachable, or timed out.
    Rejected,
}

impl SessionState {
    /// The terminal state reached by `initialize`. `loading` is false in
    /// every branch; this is the only transition that clears it.
    pub fn resolve_startup(outcome: StartupOutcome) -> Self {
        let token = match outcome {
            StartupOutcome::Valid(token) => Some(token),
            StartupOutcome::Missing | StartupOutcome::Rejected => None,
        };
        Self {
            token,
            loading: false,
        }
    }

    /// Explicit token mutation from login success or logout. Leaves
    /// `loading` untouched.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }
}

/// Run the startup token validation once per process start.
///
/// Reads the persisted token; if present, awaits the validation request
/// (with timeout) before resolving. The signal is written exactly once, so
/// `loading` flips to false only after the outcome is known. Storage is
/// only mutated on a definite rejection.
pub async fn initialize(session: RwSignal<SessionState>) {
    let stored = match token_store::read() {
        Ok(stored) => stored,
        Err(e) => {
            leptos::logging::warn!("session: {e}; continuing without a token");
            None
        }
    };

    let outcome = match stored {
        None => StartupOutcome::Missing,
        Some(token) => match net::api::validate_token(&token).await {
            Ok(()) => StartupOutcome::Valid(token),
            Err(e) => {
                leptos::logging::warn!("session: startup validation failed: {e}");
                token_store::clear();
                StartupOutcome::Rejected
            }
        },
    };

    session.set(SessionState::resolve_startup(outcome));
}

/// Persist `token` (or erase it when `None`) and update the in-memory
/// session. Redirects happen in the guard, not here.
pub fn store_token(session: RwSignal<SessionState>, token: Option<String>) {
    match &token {
        Some(token) => token_store::write(token),
        None => token_store::clear(),
    }
    session.update(|state| state.set_token(token));
}
