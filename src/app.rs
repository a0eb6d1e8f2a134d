//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::session_guard::SessionGuard;
use crate::pages::{
    batches::BatchesPage, checkin::CheckinPage, dashboard::DashboardPage, login::LoginPage,
    messaging::MessagingPage, register::RegisterPage, reports::ReportsPage,
    students::StudentsPage,
};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session context, kicks off the startup token
/// validation, and wraps every route in the session guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // One startup validation per process; the session stays in its loading
    // state until this resolves.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::state::session::initialize(session));

    view! {
        <Stylesheet id="leptos" href="/pkg/attendance-client.css"/>
        <Title text="Attendance"/>

        <Router>
            <SessionGuard>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("batches") view=BatchesPage/>
                    <Route path=StaticSegment("students") view=StudentsPage/>
                    <Route path=StaticSegment("messaging") view=MessagingPage/>
                    <Route path=StaticSegment("reports") view=ReportsPage/>
                    <Route path=StaticSegment("checkin") view=CheckinPage/>
                </Routes>
            </SessionGuard>
        </Router>
    }
}
