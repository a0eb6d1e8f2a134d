//! Shared frame for the admin pages: sidebar navigation plus content area.

use leptos::prelude::*;

use crate::state::session::{self, SessionState};

const NAV_LINKS: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/batches", "Batches"),
    ("/students", "Students"),
    ("/messaging", "Messaging"),
    ("/reports", "Attendance Reports"),
    ("/checkin", "Check-in Terminal"),
];

/// Sidebar plus content frame used by every admin page.
#[component]
pub fn AdminShell(children: Children) -> impl IntoView {
    view! {
        <div class="admin-shell">
            <Sidebar/>
            <main class="admin-shell__content">{children()}</main>
        </div>
    }
}

/// Section navigation and the logout action.
#[component]
fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    // Clearing the token is all logout does; the guard handles the redirect.
    let on_logout = move |_| {
        session::store_token(session, None);
    };

    view! {
        <aside class="sidebar">
            <h2 class="sidebar__title">"Attendance"</h2>
            <nav class="sidebar__nav">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <a class="sidebar__link" href=*href>
                                {*label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <button class="sidebar__logout" on:click=on_logout>
                "Log out"
            </button>
        </aside>
    }
}
