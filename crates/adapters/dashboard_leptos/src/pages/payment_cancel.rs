use leptos::prelude::*;
use leptos_router::components::A;

/// Landing page when the shopper abandons checkout. No network calls.
#[component]
pub fn PaymentCancel() -> impl IntoView {
    view! {
        <div class="result">
            <h1>"Payment Cancelled"</h1>
            <p>"Your payment was cancelled and you have not been charged."</p>
            <A href="/">"Back to services"</A>
        </div>
    }
}
