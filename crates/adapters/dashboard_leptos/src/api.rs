//! HTTP API client wrapping `gloo-net` for calls to `/api/*`.

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use shutterbook_domain::id::ServiceId;
use shutterbook_domain::payment::{
    CheckoutCreated, CheckoutRequest, PaymentConfirmation, VerifyPaymentRequest,
};
use shutterbook_domain::service::ServiceRecord;

/// Error returned by API client methods.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {}", resp.status()),
    };
    Err(ApiError { message })
}

/// Fetch the whole service catalog.
pub async fn fetch_services() -> Result<Vec<ServiceRecord>, ApiError> {
    let resp = check_response(Request::get("/api/services").send().await?).await?;
    let services: Vec<ServiceRecord> = resp.json().await?;
    Ok(services)
}

/// Ask the backend to open a hosted checkout session for a service.
pub async fn create_checkout_session(service_id: &ServiceId) -> Result<CheckoutCreated, ApiError> {
    let body = CheckoutRequest {
        service_id: service_id.clone(),
    };
    let resp = check_response(
        Request::post("/api/stripe/create-checkout-session")
            .json(&body)?
            .send()
            .await?,
    )
    .await?;
    let created: CheckoutCreated = resp.json().await?;
    Ok(created)
}

/// Confirm a payment session after the provider redirected back.
pub async fn verify_payment(
    request: &VerifyPaymentRequest,
) -> Result<PaymentConfirmation, ApiError> {
    let resp = check_response(
        Request::post("/api/stripe/verify-payment")
            .json(request)?
            .send()
            .await?,
    )
    .await?;
    let confirmation: PaymentConfirmation = resp.json().await?;
    Ok(confirmation)
}

/// Send the browser to the provider's hosted checkout page.
pub fn redirect_to(url: &str) -> Result<(), ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError {
        message: "no browser window available".to_string(),
    })?;
    window.location().set_href(url).map_err(|err| ApiError {
        message: format!("redirect to {url} failed: {err:?}"),
    })
}
