//! Login page: exchanges credentials for a token and hands it to the session.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Username/password form. On success the token is stored through the
/// session; the guard then redirects to the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let user = username.get().trim().to_owned();
            let pass = password.get();
            if user.is_empty() || pass.is_empty() {
                return;
            }
            pending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&user, &pass).await {
                    Ok(token) => {
                        crate::state::session::store_token(session, Some(token));
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, pending, error);
        }
    };

    view! {
        <div class="login-page">
            <h1>"Attendance"</h1>
            <p>"Sign in to manage batches, students, and reports"</p>
            <form class="login-page__form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <p class="login-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>
            <a href="/register">"Need an account? Register"</a>
        </div>
    }
}
