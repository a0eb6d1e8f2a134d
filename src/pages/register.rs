//! Registration page for new admin accounts.

use leptos::prelude::*;

/// Username/password form posting to the register endpoint. Stays on the
/// page and shows a link back to login once the account exists.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let created = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let user = username.get().trim().to_owned();
            let pass = password.get();
            if user.is_empty() || pass.is_empty() {
                return;
            }
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&user, &pass).await {
                    Ok(()) => created.set(true),
                    Err(e) => error.set(Some(e)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (error, created);
        }
    };

    view! {
        <div class="register-page">
            <h1>"Create account"</h1>
            <Show
                when=move || !created.get()
                fallback=|| {
                    view! {
                        <p>"Account created. " <a href="/login">"Sign in"</a></p>
                    }
                }
            >
                <form class="register-page__form" on:submit=on_submit>
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
                        <p class="register-page__error">
                            {move || error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <button type="submit" class="btn btn--primary">
                        "Register"
                    </button>
                </form>
            </Show>
            <a href="/login">"Back to login"</a>
        </div>
    }
}
