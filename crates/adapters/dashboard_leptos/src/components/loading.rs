//! Loading indicator.

use leptos::prelude::*;

/// Spinner with a short message, shown while the first fetch is in flight.
#[component]
pub fn Loading(
    #[prop(default = "Loading\u{2026}".into(), into)] message: String,
) -> impl IntoView {
    view! {
        <div class="loading" role="status">
            <span class="spinner"></span>
            <span>{message}</span>
        </div>
    }
}
