//! Route classification and the guard decision function.
//!
//! The route table is static configuration: every path is either `public`
//! (reachable without a token) or `protected` (everything else). The guard
//! decision is a pure function of the current path and session state so the
//! `SessionGuard` component can re-evaluate it on every input change without
//! hidden state.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Paths reachable without a valid token.
pub const PUBLIC_ROUTES: &[&str] = &["/login", "/register"];

/// Where unauthenticated navigation to a protected path lands.
pub const LOGIN_ROUTE: &str = "/login";

/// Where authenticated navigation to a public path lands.
pub const DEFAULT_LANDING: &str = "/dashboard";

/// Whether `path` is reachable without a token.
pub fn is_public(path: &str) -> bool {
    PUBLIC_ROUTES.contains(&path)
}

/// Outcome of evaluating the guard for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Startup validation has not resolved; render only a loading indicator.
    Loading,
    /// No token on a protected path.
    RedirectToLogin,
    /// Token present on a public-only path.
    RedirectToLanding,
    /// Render the requested content.
    Render,
}

/// Decide what to do for `path` given the current session state.
///
/// Pure in `(path, token, loading)`. While `loading` is true no navigation
/// is triggered regardless of the other inputs.
pub fn evaluate(path: &str, token: Option<&str>, loading: bool) -> GuardDecision {
    if loading {
        return GuardDecision::Loading;
    }
    match (token, is_public(path)) {
        (None, false) => GuardDecision::RedirectToLogin,
        (Some(_), true) => GuardDecision::RedirectToLanding,
        _ => GuardDecision::Render,
    }
}
