//! Group messaging: send one message to every student in a batch/subject.

use leptos::prelude::*;

use crate::components::admin_shell::AdminShell;
use crate::net::types::SendMessageRequest;
use crate::state::session::SessionState;

#[component]
pub fn MessagingPage() -> impl IntoView {
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
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(Option::<String>::None);

    let on_send = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let Some(token) = session.get_untracked().token else {
                return;
            };
            let (Ok(batch_id), Ok(subject_id)) = (
                selected_batch.get().parse::<i64>(),
                selected_subject.get().parse::<i64>(),
            ) else {
                status.set(Some("Select a batch and a subject.".to_owned()));
                return;
            };
            let text = message.get().trim().to_owned();
            if text.is_empty() {
                status.set(Some("Enter a message.".to_owned()));
                return;
            }
            status.set(Some("Sending message...".to_owned()));
            leptos::task::spawn_local(async move {
                let request = SendMessageRequest {
                    batch_id,
                    subject_id,
                    message: text,
                };
                match crate::net::api::send_message(&request, &token).await {
                    Ok(summary) => {
                        status.set(Some(summary));
                        message.set(String::new());
                    }
                    Err(e) => status.set(Some(format!("Failed to send message: {e}"))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, status);
        }
    });

    view! {
        <AdminShell>
            <div class="messaging-page">
                <h1>"Send Common Message"</h1>

                <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                    {move || {
                        lookups
                            .get()
                            .map(|(batches, subjects)| {
                                view! {
                                    <form
                                        class="messaging-page__form"
                                        on:submit=move |ev| on_send.run(ev)
                                    >
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
                                        <textarea
                                            rows=6
                                            placeholder="Type your message to students..."
                                            prop:value=move || message.get()
                                            on:input=move |ev| {
                                                message.set(event_target_value(&ev))
                                            }
                                        ></textarea>
                                        <button type="submit" class="btn btn--primary">
                                            "Send Message to Group"
                                        </button>
                                    </form>
                                }
                            })
                    }}
                </Suspense>

                <Show when=move || status.get().is_some()>
                    <p class="messaging-page__status">
                        {move || status.get().unwrap_or_default()}
                    </p>
                </Show>
            </div>
        </AdminShell>
    }
}
