//! One card of the service list.

use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use shutterbook_domain::id::ServiceId;
use shutterbook_domain::service::ServiceRecord;

use crate::api;
use crate::components::use_toasts;

/// Number of star slots in the rating row.
const STAR_SLOTS: usize = 5;

fn star_row(filled: u8) -> String {
    let filled = usize::from(filled).min(STAR_SLOTS);
    format!(
        "{}{}",
        "\u{2605}".repeat(filled),
        "\u{2606}".repeat(STAR_SLOTS - filled)
    )
}

/// Card with the offering's details, a like toggle and the booking button.
///
/// Booking opens a checkout session and sends the browser to the provider.
/// A failure only raises a toast; the card stays usable.
#[component]
pub fn ServiceCard(
    service: ServiceRecord,
    #[prop(into)] liked: Signal<bool>,
    on_toggle_like: Callback<ServiceId>,
) -> impl IntoView {
    let toasts = use_toasts();
    let (booking, set_booking) = signal(false);

    let like_id = service.id.clone();
    let toggle_like = move |_| on_toggle_like.run(like_id.clone());

    let book_id = service.id.clone();
    let book = move |_| {
        if booking.get_untracked() {
            return;
        }
        set_booking.set(true);
        let id = book_id.clone();
        spawn_local(async move {
            let result = match api::create_checkout_session(&id).await {
                Ok(created) => {
                    log!("redirecting to checkout session {}", created.session_id);
                    api::redirect_to(&created.url)
                }
                Err(err) => Err(err),
            };
            if let Err(err) = result {
                error!("checkout for {id} failed: {err}");
                toasts.push(format!("Could not start the payment: {err}"));
                set_booking.set(false);
            }
        });
    };

    let rating = service
        .filled_stars()
        .zip(service.rating_label())
        .map(|(filled, label)| {
            view! {
                <p class="rating">
                    <span class="stars">{star_row(filled)}</span>
                    " "
                    <span class="meta">{label}</span>
                </p>
            }
        });
    let book_label = format!(
        "Book Now - With Minimum Upfront {}",
        service.upfront_deposit()
    );

    view! {
        <article class="service-card">
            <div class="card-head">
                <div>
                    <span class="category">{service.category_label().to_string()}</span>
                    <h2>{service.title.clone()}</h2>
                </div>
                <button
                    class=move || if liked.get() { "like liked" } else { "like" }
                    aria-pressed=move || liked.get().to_string()
                    title="Like"
                    on:click=toggle_like
                >
                    {move || if liked.get() { "\u{2665}" } else { "\u{2661}" }}
                </button>
            </div>
            <p>{service.description.clone()}</p>
            <p class="meta">{format!("{} min", service.duration)}</p>
            {rating}
            <p class="price">{service.price.to_string()}</p>
            <button class="book" disabled=booking on:click=book>
                {move || if booking.get() { "Redirecting\u{2026}".to_string() } else { book_label.clone() }}
            </button>
        </article>
    }
}
