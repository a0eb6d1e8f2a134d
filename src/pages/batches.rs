//! Batch management: list existing batches, add new ones.

use leptos::prelude::*;

use crate::components::admin_shell::AdminShell;
use crate::state::session::SessionState;

#[component]
pub fn BatchesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let batches = LocalResource::new(move || {
        let token = session.get().token;
        async move {
            match token {
                Some(token) => crate::net::api::fetch_batches(&token)
                    .await
                    .unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    let new_year = RwSignal::new(String::new());
    let status = RwSignal::new(Option::<String>::None);

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let year = new_year.get().trim().to_owned();
            let Some(token) = session.get_untracked().token else {
                return;
            };
            if year.is_empty() {
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::net::api::add_batch(&year, &token).await {
                    Ok(()) => {
                        status.set(Some("Batch added.".to_owned()));
                        new_year.set(String::new());
                        batches.refetch();
                    }
                    Err(e) => status.set(Some(format!("Failed to add batch: {e}"))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, status, batches);
        }
    };

    view! {
        <AdminShell>
            <div class="batches-page">
                <h1>"Manage Batches"</h1>

                <form class="batches-page__add" on:submit=on_add>
                    <input
                        type="text"
                        placeholder="Enter batch year (e.g., 2028)"
                        prop:value=move || new_year.get()
                        on:input=move |ev| new_year.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn--primary">
                        "Add Batch"
                    </button>
                </form>
                <Show when=move || status.get().is_some()>
                    <p class="batches-page__status">{move || status.get().unwrap_or_default()}</p>
                </Show>

                <h2>"Existing Batches"</h2>
                <Suspense fallback=move || view! { <p>"Loading batches..."</p> }>
                    {move || {
                        batches
                            .get()
                            .map(|list| {
                                view! {
                                    <ul class="batches-page__list">
                                        {list
                                            .into_iter()
                                            .map(|batch| view! { <li>{batch.year}</li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                            })
                    }}
                </Suspense>
            </div>
        </AdminShell>
    }
}
