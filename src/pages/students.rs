//! Student management: filterable listing, manual add, CSV import.

use leptos::prelude::*;

use crate::components::admin_shell::AdminShell;
use crate::net::types::{Batch, Student, Subject};
use crate::state::session::SessionState;

#[component]
pub fn StudentsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    // Batch and subject lookups for the filter selects and the add form.
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

    // Select values are kept as strings; empty string means "no filter".
    let batch_filter = RwSignal::new(String::new());
    let subject_filter = RwSignal::new(String::new());

    // Refetches whenever the token or either filter changes.
    let students = LocalResource::new(move || {
        let token = session.get().token;
        let batch = batch_filter.get().parse::<i64>().ok();
        let subject = subject_filter.get().parse::<i64>().ok();
        async move {
            match token {
                Some(token) => crate::net::api::fetch_students(batch, subject, &token)
                    .await
                    .unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    let status = RwSignal::new(Option::<String>::None);

    let on_import = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let Some(token) = session.get_untracked().token else {
                return;
            };
            status.set(Some("Importing students...".to_owned()));
            leptos::task::spawn_local(async move {
                match crate::net::api::import_students(&file, &token).await {
                    Ok(summary) => {
                        status.set(Some(summary));
                        students.refetch();
                    }
                    Err(e) => status.set(Some(format!("Import failed: {e}"))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, session, status, students);
        }
    };

    view! {
        <AdminShell>
            <div class="students-page">
                <h1>"Manage Students"</h1>

                <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                    {move || {
                        lookups
                            .get()
                            .map(|(batches, subjects)| {
                                view! {
                                    <div class="students-page__filters">
                                        <BatchSelect batches=batches.clone() value=batch_filter/>
                                        <SubjectSelect
                                            subjects=subjects.clone()
                                            value=subject_filter
                                        />
                                    </div>
                                    <AddStudentForm
                                        batches=batches
                                        subjects=subjects
                                        status=status
                                        on_added=Callback::new(move |()| students.refetch())
                                    />
                                }
                            })
                    }}
                </Suspense>

                <div class="students-page__import">
                    <label>
                        "Import students from CSV"
                        <input type="file" accept=".csv" on:change=on_import/>
                    </label>
                </div>
                <Show when=move || status.get().is_some()>
                    <p class="students-page__status">{move || status.get().unwrap_or_default()}</p>
                </Show>

                <Suspense fallback=move || view! { <p>"Loading students..."</p> }>
                    {move || {
                        students
                            .get()
                            .map(|list| view! { <StudentTable students=list/> })
                    }}
                </Suspense>
            </div>
        </AdminShell>
    }
}

#[component]
fn BatchSelect(batches: Vec<Batch>, value: RwSignal<String>) -> impl IntoView {
    view! {
        <select on:change=move |ev| value.set(event_target_value(&ev))>
            <option value="">"All batches"</option>
            {batches
                .into_iter()
                .map(|batch| {
                    view! { <option value={batch.id.to_string()}>{batch.year}</option> }
                })
                .collect::<Vec<_>>()}
        </select>
    }
}

#[component]
fn SubjectSelect(subjects: Vec<Subject>, value: RwSignal<String>) -> impl IntoView {
    view! {
        <select on:change=move |ev| value.set(event_target_value(&ev))>
            <option value="">"All subjects"</option>
            {subjects
                .into_iter()
                .map(|subject| {
                    view! { <option value={subject.id.to_string()}>{subject.name}</option> }
                })
                .collect::<Vec<_>>()}
        </select>
    }
}

#[component]
fn StudentTable(students: Vec<Student>) -> impl IntoView {
    view! {
        <table class="students-page__table">
            <thead>
                <tr>
                    <th>"Student ID"</th>
                    <th>"Name"</th>
                    <th>"Student Phone"</th>
                    <th>"Parent Phone"</th>
                </tr>
            </thead>
            <tbody>
                {students
                    .into_iter()
                    .map(|student| {
                        view! {
                            <tr>
                                <td>{student.student_id}</td>
                                <td>{student.full_name}</td>
                                <td>{student.student_phone_number}</td>
                                <td>{student.parent_phone_number}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

/// Manual add-student form with subject checkboxes.
#[component]
fn AddStudentForm(
    batches: Vec<Batch>,
    subjects: Vec<Subject>,
    status: RwSignal<Option<String>>,
    on_added: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let student_id = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let student_phone = RwSignal::new(String::new());
    let parent_phone = RwSignal::new(String::new());
    let batch_id = RwSignal::new(String::new());
    let subject_ids = RwSignal::new(Vec::<i64>::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let Some(token) = session.get_untracked().token else {
                return;
            };
            let Ok(batch) = batch_id.get().parse::<i64>() else {
                status.set(Some("Pick a batch for the new student.".to_owned()));
                return;
            };
            let student = Student {
                student_id: student_id.get().trim().to_owned(),
                full_name: full_name.get().trim().to_owned(),
                student_phone_number: student_phone.get().trim().to_owned(),
                parent_phone_number: parent_phone.get().trim().to_owned(),
                batch_id: batch,
                subject_ids: subject_ids.get(),
            };
            if student.student_id.is_empty() || student.full_name.is_empty() {
                status.set(Some("Student ID and name are required.".to_owned()));
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::net::api::add_student(&student, &token).await {
                    Ok(()) => {
                        status.set(Some("Student added.".to_owned()));
                        student_id.set(String::new());
                        full_name.set(String::new());
                        student_phone.set(String::new());
                        parent_phone.set(String::new());
                        subject_ids.set(Vec::new());
                        on_added.run(());
                    }
                    Err(e) => status.set(Some(format!("Failed to add student: {e}"))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, status, on_added);
        }
    };

    view! {
        <form class="students-page__add" on:submit=on_submit>
            <h2>"Add Student"</h2>
            <input
                type="text"
                placeholder="Student ID"
                prop:value=move || student_id.get()
                on:input=move |ev| student_id.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Full name"
                prop:value=move || full_name.get()
                on:input=move |ev| full_name.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Student phone"
                prop:value=move || student_phone.get()
                on:input=move |ev| student_phone.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Parent phone"
                prop:value=move || parent_phone.get()
                on:input=move |ev| parent_phone.set(event_target_value(&ev))
            />
            <select on:change=move |ev| batch_id.set(event_target_value(&ev))>
                <option value="">"Select batch"</option>
                {batches
                    .into_iter()
                    .map(|batch| {
                        view! { <option value={batch.id.to_string()}>{batch.year}</option> }
                    })
                    .collect::<Vec<_>>()}
            </select>
            <fieldset class="students-page__subjects">
                <legend>"Subjects"</legend>
                {subjects
                    .into_iter()
                    .map(|subject| {
                        let id = subject.id;
                        view! {
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=move || subject_ids.get().contains(&id)
                                    on:change=move |_| {
                                        subject_ids
                                            .update(|ids| {
                                                if let Some(pos) = ids.iter().position(|s| *s == id) {
                                                    ids.remove(pos);
                                                } else {
                                                    ids.push(id);
                                                }
                                            });
                                    }
                                />
                                {subject.name}
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </fieldset>
            <button type="submit" class="btn btn--primary">
                "Add Student"
            </button>
        </form>
    }
}
