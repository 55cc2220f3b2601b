//! JSON REST handlers for the checkout hand-off.
//!
//! The paths keep the `stripe` prefix the dashboard has always called; the
//! provider behind them is whatever [`PaymentGateway`] is wired in.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use shutterbook_app::ports::{PaymentGateway, ServiceCatalog};
use shutterbook_domain::payment::{
    CheckoutCreated, CheckoutRequest, PaymentConfirmation, VerifyPaymentRequest,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the checkout creation endpoint.
pub enum CreateCheckoutResponse {
    Created(Json<CheckoutCreated>),
}

impl IntoResponse for CreateCheckoutResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the verification endpoint.
pub enum VerifyResponse {
    Ok(Json<PaymentConfirmation>),
}

impl IntoResponse for VerifyResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/stripe/create-checkout-session`
pub async fn create_checkout_session<C, G>(
    State(state): State<AppState<C, G>>,
    Json(req): Json<CheckoutRequest>,
) -> Result<CreateCheckoutResponse, ApiError>
where
    C: ServiceCatalog + Send + Sync + 'static,
    G: PaymentGateway + Send + Sync + 'static,
{
    let session = state.payment_service.start_checkout(&req.service_id).await?;
    Ok(CreateCheckoutResponse::Created(Json(CheckoutCreated {
        session_id: session.id,
        url: session.checkout_url,
    })))
}

/// `POST /api/stripe/verify-payment`
pub async fn verify_payment<C, G>(
    State(state): State<AppState<C, G>>,
    Json(req): Json<VerifyPaymentRequest>,
) -> Result<VerifyResponse, ApiError>
where
    C: ServiceCatalog + Send + Sync + 'static,
    G: PaymentGateway + Send + Sync + 'static,
{
    let confirmation = state.payment_service.verify_payment(&req.session_id).await?;
    Ok(VerifyResponse::Ok(Json(confirmation)))
}
