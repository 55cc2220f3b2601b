use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use shutterbook_domain::payment::VerifyPaymentRequest;
use shutterbook_domain::route::SESSION_ID_PARAM;

use crate::api;

/// Landing page after the provider reports a successful payment.
///
/// Reads `session_id` once and sends exactly one verification request.
/// The outcome only goes to the console.
#[component]
pub fn PaymentSuccess() -> impl IntoView {
    let search = use_location().search.get_untracked();
    let request = VerifyPaymentRequest::from_query(&search);

    match request {
        Some(request) => spawn_local(async move {
            match api::verify_payment(&request).await {
                Ok(confirmation) => log!(
                    "payment session {} verified: status {}, paid {}",
                    confirmation.session_id,
                    confirmation.status,
                    confirmation.paid
                ),
                Err(err) => error!("payment verification failed: {err}"),
            }
        }),
        None => log!("no {SESSION_ID_PARAM} in query, skipping verification"),
    }

    view! {
        <div class="result">
            <h1>"Payment Successful!"</h1>
            <p>"Thank you for your booking. We will contact you shortly to confirm the details."</p>
            <A href="/">"Back to services"</A>
        </div>
    }
}
