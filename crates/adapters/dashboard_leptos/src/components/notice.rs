//! Non-fatal banner shown above cached cards when a refetch failed.

use leptos::prelude::*;

#[component]
pub fn Notice(
    message: String,
    /// A retry is in flight.
    refreshing: bool,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="notice" role="alert">
            <span>{message}</span>
            <button class="retry" disabled=refreshing on:click=move |_| on_retry.run(())>
                {if refreshing { "Retrying\u{2026}" } else { "Retry" }}
            </button>
        </div>
    }
}
