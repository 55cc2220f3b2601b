use leptos::prelude::*;
use leptos_router::components::A;

/// Rendered when no route matches.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="result">
            <h1>"404 - Page Not Found"</h1>
            <p>"There is nothing at this address."</p>
            <A href="/">"Browse services"</A>
        </div>
    }
}
