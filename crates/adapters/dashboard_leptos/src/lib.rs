//! # shutterbook-dashboard
//!
//! Client-side web interface compiled to WASM with Leptos (CSR).
//!
//! Three views answer to the routes in [`shutterbook_domain::route::Route`]:
//! the service list, the payment-success page and the payment-cancel page.
//! Anything else renders a not-found view.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

pub mod api;
mod cache;
mod components;
mod pages;

use components::ToastContainer;
use pages::{NotFound, PaymentCancel, PaymentSuccess, Services};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ToastContainer>
            <Router>
                <header class="site">
                    <A href="/">"shutterbook"</A>
                </header>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=Services/>
                        <Route path=path!("payment-success") view=PaymentSuccess/>
                        <Route path=path!("payment-cancel") view=PaymentCancel/>
                    </Routes>
                </main>
            </Router>
        </ToastContainer>
    }
}
