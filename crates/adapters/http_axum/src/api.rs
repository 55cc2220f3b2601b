//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod services;
#[allow(clippy::missing_errors_doc)]
pub mod stripe;

use axum::Router;
use axum::routing::{get, post};

use shutterbook_app::ports::{PaymentGateway, ServiceCatalog};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<C, G>() -> Router<AppState<C, G>>
where
    C: ServiceCatalog + Send + Sync + 'static,
    G: PaymentGateway + Send + Sync + 'static,
{
    Router::new()
        // Catalog
        .route("/services", get(services::list::<C, G>))
        .route("/services/{id}", get(services::get::<C, G>))
        // Payment
        .route(
            "/stripe/create-checkout-session",
            post(stripe::create_checkout_session::<C, G>),
        )
        .route("/stripe/verify-payment", post(stripe::verify_payment::<C, G>))
}
