//! Admin dashboard: aggregate counters plus links into each section.

use leptos::prelude::*;

use crate::components::admin_shell::AdminShell;
use crate::net::types::DashboardStats;
use crate::state::session::SessionState;

const SECTION_CARDS: &[(&str, &str, &str)] = &[
    ("/batches", "Manage Batches", "View and add new academic batches."),
    ("/students", "Manage Students", "View, add, or import students via CSV."),
    ("/reports", "Attendance Reports", "Check daily attendance for any class."),
    ("/messaging", "Send Messages", "Send common messages to students."),
    (
        "/checkin",
        "Open Check-in Terminal",
        "Launch the terminal for student check-ins.",
    ),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    // Stats plus batch count; refetches if the token changes.
    let overview = LocalResource::new(move || {
        let token = session.get().token;
        async move {
            let token = token?;
            let stats = crate::net::api::fetch_stats(&token)
                .await
                .unwrap_or_else(|e| {
                    leptos::logging::warn!("dashboard: stats fetch failed: {e}");
                    DashboardStats::default()
                });
            let batch_count = crate::net::api::fetch_batches(&token)
                .await
                .map(|batches| batches.len())
                .unwrap_or(0);
            Some((stats, batch_count))
        }
    });

    view! {
        <AdminShell>
            <div class="dashboard-page">
                <h1>"Dashboard"</h1>

                <Suspense fallback=move || view! { <p>"Loading stats..."</p> }>
                    {move || {
                        overview
                            .get()
                            .flatten()
                            .map(|(stats, batch_count)| {
                                view! {
                                    <div class="dashboard-page__stats">
                                        <StatCard
                                            label="Students"
                                            value=stats.total_students
                                        />
                                        <StatCard label="Batches" value={batch_count as i64}/>
                                        <StatCard
                                            label="Subjects"
                                            value=stats.total_subjects
                                        />
                                    </div>
                                }
                            })
                    }}
                </Suspense>

                <div class="dashboard-page__cards">
                    {SECTION_CARDS
                        .iter()
                        .map(|(href, title, description)| {
                            view! {
                                <a class="dashboard-page__card" href=*href>
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </AdminShell>
    }
}

/// One labeled counter tile.
#[component]
fn StatCard(label: &'static str, value: i64) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
