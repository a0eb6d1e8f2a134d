//! Check-in terminal: an admin picks a batch and subject, then students type
//! their IDs in a loop. Marking goes through the public attendance endpoint.

use leptos::prelude::*;

use crate::net::types::MarkAttendanceRequest;

#[component]
pub fn CheckinPage() -> impl IntoView {
    // Unauthenticated lookups so the terminal works without admin API scope.
    let lookups = LocalResource::new(|| async {
        let batches = crate::net::api::fetch_public_batches()
            .await
            .unwrap_or_default();
        let subjects = crate::net::api::fetch_public_subjects()
            .await
            .unwrap_or_default();
        (batches, subjects)
    });

    let selected_batch = RwSignal::new(String::new());
    let selected_subject = RwSignal::new(String::new());
    let subject_name = RwSignal::new(String::new());
    let session_started = RwSignal::new(false);
    let student_id = RwSignal::new(String::new());
    let status = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let on_start = Callback::new(move |()| {
        if selected_batch.get().is_empty() || selected_subject.get().is_empty() {
            status.set(Some("Select a batch and a subject first.".to_owned()));
            return;
        }
        status.set(None);
        session_started.set(true);
    });

    let on_checkin = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let id = student_id.get().trim().to_uppercase();
            if id.is_empty() {
                return;
            }
            let (Ok(batch_id), Ok(subject_id)) = (
                selected_batch.get().parse::<i64>(),
                selected_subject.get().parse::<i64>(),
            ) else {
                return;
            };
            busy.set(true);
            leptos::task::spawn_local(async move {
                let request = MarkAttendanceRequest {
                    student_id: &id,
                    subject_id,
                    batch_id,
                };
                match crate::net::api::mark_attendance(&request).await {
                    Ok(summary) => {
                        status.set(Some(summary));
                        student_id.set(String::new());
                    }
                    Err(e) => status.set(Some(format!("Error: {e}"))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (status, busy);
        }
    });

    view! {
        <div class="checkin-page">
            <h1>"Attendance Check-in"</h1>

            <Show
                when=move || session_started.get()
                fallback=move || {
                    view! {
                        <div class="checkin-page__setup">
                            <h2>"Setup Session"</h2>
                            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                                {move || {
                                    lookups
                                        .get()
                                        .map(|(batches, subjects)| {
                                            let subject_options = subjects.clone();
                                            view! {
                                                <select on:change=move |ev| {
                                                    selected_batch.set(event_target_value(&ev))
                                                }>
                                                    <option value="">"-- Select Batch --"</option>
                                                    {batches
                                                        .into_iter()
                                                        .map(|batch| {
                                                            view! {
                                                                <option value={batch.id.to_string()}>{batch.year}</option>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </select>
                                                <select on:change=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    selected_subject.set(value.clone());
                                                    let name = subjects
                                                        .iter()
                                                        .find(|s| s.id.to_string() == value)
                                                        .map(|s| s.name.clone())
                                                        .unwrap_or_default();
                                                    subject_name.set(name);
                                                }>
                                                    <option value="">"-- Select Subject --"</option>
                                                    {subject_options
                                                        .into_iter()
                                                        .map(|subject| {
                                                            view! {
                                                                <option value={subject.id.to_string()}>{subject.name}</option>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </select>
                                            }
                                        })
                                }}
                            </Suspense>
                            <button class="btn btn--primary" on:click=move |_| on_start.run(())>
                                "Start Session"
                            </button>
                        </div>
                    }
                }
            >
                <div class="checkin-page__session">
                    <h2>"Class: " {move || subject_name.get()}</h2>
                    <form on:submit=move |ev| on_checkin.run(ev)>
                        <input
                            type="text"
                            placeholder="Enter Your Student ID"
                            autofocus=true
                            disabled=move || busy.get()
                            prop:value=move || student_id.get()
                            on:input=move |ev| student_id.set(event_target_value(&ev))
                        />
                        <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                            {move || if busy.get() { "..." } else { "Check In" }}
                        </button>
                    </form>
                    <button class="checkin-page__change" on:click=move |_| session_started.set(false)>
                        "Change Session Subject"
                    </button>
                </div>
            </Show>

            <Show when=move || status.get().is_some()>
                <p class="checkin-page__status">{move || status.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
