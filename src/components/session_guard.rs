//! Route-protection wrapper around the application's routes.
//!
//! Re-evaluates the pure guard decision whenever the session state or the
//! current path changes. Redirects run as a side effect of that evaluation
//! (never of the token mutation itself); while the startup validation is
//! pending only the loader is rendered, and while a redirect is pending
//! nothing is rendered so protected content never flashes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::full_page_loader::FullPageLoader;
use crate::state::guard::{self, GuardDecision};
use crate::state::session::SessionState;

/// Wraps the routed content and enforces the route table.
#[component]
pub fn SessionGuard(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    // Navigation side effect of the guard evaluation.
    Effect::new(move || {
        let state = session.get();
        let path = pathname.get();
        match guard::evaluate(&path, state.token.as_deref(), state.loading) {
            GuardDecision::RedirectToLogin => {
                leptos::logging::log!("guard: no token on {path}, redirecting to login");
                navigate(guard::LOGIN_ROUTE, NavigateOptions::default());
            }
            GuardDecision::RedirectToLanding => {
                leptos::logging::log!("guard: token present on {path}, redirecting to landing");
                navigate(guard::DEFAULT_LANDING, NavigateOptions::default());
            }
            GuardDecision::Loading | GuardDecision::Render => {}
        }
    });

    move || {
        let state = session.get();
        let path = pathname.get();
        match guard::evaluate(&path, state.token.as_deref(), state.loading) {
            GuardDecision::Loading => view! { <FullPageLoader/> }.into_any(),
            GuardDecision::Render => children().into_any(),
            // The effect above is already navigating; render nothing in the
            // meantime.
            GuardDecision::RedirectToLogin | GuardDecision::RedirectToLanding => ().into_any(),
        }
    }
}
