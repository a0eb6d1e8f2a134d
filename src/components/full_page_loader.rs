//! Full-page loading indicator shown while the session resolves.

use leptos::prelude::*;

#[component]
pub fn FullPageLoader() -> impl IntoView {
    view! {
        <div class="full-page-loader">
            <h2>"Loading..."</h2>
        </div>
    }
}
