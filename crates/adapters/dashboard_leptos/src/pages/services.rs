use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shutterbook_domain::id::ServiceId;
use shutterbook_domain::liked::LikedSet;
use shutterbook_domain::listing::{LOAD_FAILED_MESSAGE, Listing, ListingView};

use crate::components::{Loading, Notice, ServiceCard};
use crate::{api, cache};

/// Service list page.
///
/// Fetches the catalog once on display. A failed fetch with nothing cached
/// shows only the error and a retry button; with cached records it keeps the
/// cards and adds a banner. Retry refetches in place.
#[component]
pub fn Services() -> impl IntoView {
    let (listing, set_listing) = signal(Listing::with_cached(cache::load()));
    let (liked, set_liked) = signal(LikedSet::new());

    let fetch = move || {
        set_listing.update(Listing::begin_fetch);
        spawn_local(async move {
            match api::fetch_services().await {
                Ok(services) => {
                    cache::store(&services);
                    set_listing.update(|state| state.fetch_succeeded(services));
                }
                Err(err) => {
                    error!("failed to load services: {err}");
                    set_listing.update(|state| state.fetch_failed(LOAD_FAILED_MESSAGE));
                }
            }
        });
    };
    fetch();

    let retry = Callback::new(move |()| fetch());
    let toggle_like = Callback::new(move |id: ServiceId| {
        set_liked.update(|set| {
            set.toggle(&id);
        });
    });

    let body = move || {
        listing.with(|state| match state.view() {
            ListingView::Loading => {
                view! { <Loading message="Loading services\u{2026}"/> }.into_any()
            }
            ListingView::Unavailable { message } => {
                let message = message.to_string();
                view! {
                    <div class="error-state">
                        <p class="error">{message}</p>
                        <button class="retry" on:click=move |_| retry.run(())>"Retry"</button>
                    </div>
                }
                .into_any()
            }
            ListingView::Cards {
                services,
                warning,
                refreshing,
            } => {
                let notice = warning.map(|message| {
                    view! { <Notice message=message.to_string() refreshing=refreshing on_retry=retry/> }
                });
                let cards = if services.is_empty() {
                    view! { <p class="meta">"No services are available right now."</p> }.into_any()
                } else {
                    services
                        .iter()
                        .cloned()
                        .map(|service| {
                            let id = service.id.clone();
                            let is_liked = Signal::derive(move || liked.with(|set| set.contains(&id)));
                            view! {
                                <ServiceCard service=service liked=is_liked on_toggle_like=toggle_like/>
                            }
                        })
                        .collect_view()
                        .into_any()
                };
                view! {
                    {notice}
                    <div class="service-grid">{cards}</div>
                }
                .into_any()
            }
        })
    };

    view! {
        <section class="services">
            <h1>"Photography Services"</h1>
            <p class="meta">
                {move || match liked.with(LikedSet::len) {
                    0 => String::new(),
                    1 => "1 service liked".to_string(),
                    n => format!("{n} services liked"),
                }}
            </p>
            {body}
        </section>
    }
}
