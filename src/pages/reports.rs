//! Attendance reports: attended/absent lists for one subject, batch, and day.

use leptos::prelude::*;

use crate::components::admin_shell::AdminShell;
use crate::net::types::{AttendanceReport, ReportStudent};
use crate::state::session::SessionState;

#[component]
pub fn ReportsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let lookups = LocalResource::new(move || {
        let token = session.get().token;
        async move {
            let Some(token) = token else {
                return (Vec::new(), Vec::new());
            };
            let batches = crate::net::api::fetch_batches(&token)
                .await
                .unwrap_or_default();
            let subjects = crate::net::api::fetch_subjects(&token)
                .await
                .unwrap_or_default();
            (batches, subjects)
        }
    });

    let selected_batch = RwSignal::new(String::new());
    let selected_subject = RwSignal::new(String::new());
    let selected_date = RwSignal::new(String::new());
    let report = RwSignal::new(Option::<AttendanceReport>::None);
    let status = RwSignal::new(Option::<String>::None);
    let fetching = RwSignal::new(false);

    let on_generate = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let Some(token) = session.get_untracked().token else {
                return;
            };
            let (Ok(batch_id), Ok(subject_id)) = (
                selected_batch.get().parse::<i64>(),
                selected_subject.get().parse::<i64>(),
            ) else {
                status.set(Some("Select a subject and a batch.".to_owned()));
                return;
            };
            let date = selected_date.get();
            if date.is_empty() {
                status.set(Some("Pick a date.".to_owned()));
                return;
            }
            fetching.set(true);
            status.set(None);
            report.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_report(subject_id, batch_id, &date, &token).await {
                    Ok(data) => report.set(Some(data)),
                    Err(e) => status.set(Some(format!("Failed to fetch report: {e}"))),
                }
                fetching.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, report, status, fetching);
        }
    });

    view! {
        <AdminShell>
            <div class="reports-page">
                <h1>"Attendance Reports"</h1>

                <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                    {move || {
                        lookups
                            .get()
                            .map(|(batches, subjects)| {
                                view! {
                                    <div class="reports-page__controls">
                                        <select on:change=move |ev| {
                                            selected_subject.set(event_target_value(&ev))
                                        }>
                                            <option value="">"Select Subject"</option>
                                            {subjects
                                                .into_iter()
                                                .map(|subject| {
                                                    view! {
                                                        <option value={subject.id.to_string()}>{subject.name}</option>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </select>
                                        <select on:change=move |ev| {
                                            selected_batch.set(event_target_value(&ev))
                                        }>
                                            <option value="">"Select Batch"</option>
                                            {batches
                                                .into_iter()
                                                .map(|batch| {
                                                    view! {
                                                        <option value={batch.id.to_string()}>{batch.year}</option>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </select>
                                        <input
                                            type="date"
                                            prop:value=move || selected_date.get()
                                            on:input=move |ev| {
                                                selected_date.set(event_target_value(&ev))
                                            }
                                        />
                                        <button
                                            class="btn btn--primary"
                                            disabled=move || fetching.get()
                                            on:click=move |_| on_generate.run(())
                                        >
                                            {move || {
                                                if fetching.get() {
                                                    "Loading..."
                                                } else {
                                                    "Generate Report"
                                                }
                                            }}
                                        </button>
                                    </div>
                                }
                            })
                    }}
                </Suspense>

                <Show when=move || status.get().is_some()>
                    <p class="reports-page__status">{move || status.get().unwrap_or_default()}</p>
                </Show>

                {move || {
                    report
                        .get()
                        .map(|data| {
                            view! {
                                <div class="reports-page__results">
                                    <ReportList
                                        title="Attended Students"
                                        students=data.attended_students
                                    />
                                    <ReportList
                                        title="Absent Students"
                                        students=data.absent_students
                                    />
                                </div>
                            }
                        })
                }}
            </div>
        </AdminShell>
    }
}

#[component]
fn ReportList(title: &'static str, students: Vec<ReportStudent>) -> impl IntoView {
    let count = students.len();
    view! {
        <div class="report-list">
            <h2>{title} " (" {count} ")"</h2>
            <ul>
                {students
                    .into_iter()
                    .map(|student| {
                        view! {
                            <li>{student.full_name} " (" {student.student_id} ")"</li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
