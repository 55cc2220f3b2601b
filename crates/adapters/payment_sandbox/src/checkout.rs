//! Hosted checkout pages of the sandbox provider.
//!
//! Plain HTML forms that POST back and redirect (PRG), so the pages work
//! without any JavaScript.

use std::sync::Arc;

use askama::Template;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};

use shutterbook_app::ports::PaymentGateway;
use shutterbook_domain::error::{GatewayError, ShutterError};
use shutterbook_domain::id::PaymentSessionId;

use crate::{SandboxGateway, Settlement};

/// Build the router serving `/sandbox/checkout/*`.
pub fn routes(gateway: Arc<SandboxGateway>) -> Router {
    Router::new()
        .route("/sandbox/checkout/{id}", get(page))
        .route("/sandbox/checkout/{id}/pay", post(pay))
        .route("/sandbox/checkout/{id}/cancel", post(cancel))
        .with_state(gateway)
}

/// Checkout page template.
#[derive(Template)]
#[template(path = "checkout.html")]
struct CheckoutTemplate {
    session_id: String,
    service_title: String,
    amount: String,
    status: String,
    expires_at: String,
    open: bool,
}

/// Error page template.
#[derive(Template)]
#[template(path = "checkout_error.html")]
struct ErrorTemplate {
    heading: &'static str,
    message: String,
}

fn render(status: StatusCode, template: &impl Template) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render sandbox page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Maps [`ShutterError`] to an HTML error page.
struct CheckoutError(ShutterError);

impl From<ShutterError> for CheckoutError {
    fn from(err: ShutterError) -> Self {
        Self(err)
    }
}

impl IntoResponse for CheckoutError {
    fn into_response(self) -> Response {
        let (status, heading) = match &self.0 {
            ShutterError::Validation(_) => (StatusCode::BAD_REQUEST, "Invalid session"),
            ShutterError::NotFound(_) => (StatusCode::NOT_FOUND, "Unknown session"),
            ShutterError::Gateway(GatewayError::AlreadySettled { .. }) => {
                (StatusCode::CONFLICT, "Session already settled")
            }
            ShutterError::Gateway(_) | ShutterError::Storage(_) => {
                tracing::error!(error = %self.0, "sandbox checkout failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Checkout failed")
            }
        };
        render(
            status,
            &ErrorTemplate {
                heading,
                message: self.0.to_string(),
            },
        )
    }
}

fn parse_id(raw: &str) -> Result<PaymentSessionId, CheckoutError> {
    raw.parse::<PaymentSessionId>()
        .map_err(|err| CheckoutError(err.into()))
}

/// `GET /sandbox/checkout/{id}`
async fn page(
    State(gateway): State<Arc<SandboxGateway>>,
    Path(id): Path<String>,
) -> Result<Response, CheckoutError> {
    let id = parse_id(&id)?;
    let session = gateway.get_session(&id).await?.ok_or_else(|| {
        CheckoutError(
            shutterbook_domain::error::NotFoundError {
                entity: "Payment session",
                id: id.to_string(),
            }
            .into(),
        )
    })?;

    let template = CheckoutTemplate {
        session_id: session.id.to_string(),
        service_title: session.service_title.clone(),
        amount: session.amount.to_string(),
        status: session.status.to_string(),
        expires_at: session.expires_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        open: session.status.is_open(),
    };
    Ok(render(StatusCode::OK, &template))
}

/// `POST /sandbox/checkout/{id}/pay`
async fn pay(
    State(gateway): State<Arc<SandboxGateway>>,
    Path(id): Path<String>,
) -> Result<Redirect, CheckoutError> {
    let id = parse_id(&id)?;
    let session = gateway.settle(&id, Settlement::Pay).await?;
    Ok(Redirect::to(&session.success_redirect()))
}

/// `POST /sandbox/checkout/{id}/cancel`
async fn cancel(
    State(gateway): State<Arc<SandboxGateway>>,
    Path(id): Path<String>,
) -> Result<Redirect, CheckoutError> {
    let id = parse_id(&id)?;
    let session = gateway.settle(&id, Settlement::Cancel).await?;
    Ok(Redirect::to(&session.cancel_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, header};
    use http_body_util::BodyExt;
    use shutterbook_domain::id::ServiceId;
    use shutterbook_domain::payment::{
        CHECKOUT_SESSION_ID_PLACEHOLDER, CheckoutDraft, CheckoutSession, PaymentStatus,
    };
    use shutterbook_domain::price::Price;
    use tower::ServiceExt;

    use crate::SandboxConfig;

    async fn open_session(gateway: &SandboxGateway) -> CheckoutSession {
        gateway
            .create_session(CheckoutDraft {
                service_id: ServiceId::new("portrait").unwrap(),
                service_title: "Portrait <Studio>".to_string(),
                amount: Price::from_rupees(499.9).unwrap(),
                success_url: format!(
                    "http://localhost:8080/payment-success?session_id={CHECKOUT_SESSION_ID_PLACEHOLDER}"
                ),
                cancel_url: "http://localhost:8080/payment-cancel".to_string(),
            })
            .await
            .unwrap()
    }

    async fn body_string(resp: Response) -> String {
        String::from_utf8(resp.into_body().collect().await.unwrap().to_bytes().to_vec()).unwrap()
    }

    fn post_to(uri: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn should_render_checkout_page_with_escaped_title() {
        let gateway = Arc::new(SandboxGateway::new(SandboxConfig::default()));
        let session = open_session(&gateway).await;

        let resp = routes(Arc::clone(&gateway))
            .oneshot(
                Request::builder()
                    .uri(format!("/sandbox/checkout/{}", session.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains("Portrait &#60;Studio&#62;") || body.contains("Portrait &lt;Studio&gt;"));
        assert!(body.contains("\u{20B9}499.90"));
        assert!(body.contains("/pay"));
    }

    #[tokio::test]
    async fn should_return_not_found_page_for_unknown_session() {
        let gateway = Arc::new(SandboxGateway::new(SandboxConfig::default()));
        let resp = routes(gateway)
            .oneshot(
                Request::builder()
                    .uri("/sandbox/checkout/cs_missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_redirect_to_success_with_session_id_when_paid() {
        let gateway = Arc::new(SandboxGateway::new(SandboxConfig::default()));
        let session = open_session(&gateway).await;

        let resp = routes(Arc::clone(&gateway))
            .oneshot(post_to(format!("/sandbox/checkout/{}/pay", session.id)))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let location = resp.headers()[header::LOCATION].to_str().unwrap();
        assert_eq!(
            location,
            format!("http://localhost:8080/payment-success?session_id={}", session.id)
        );

        let stored = gateway.get_session(&session.id).await.unwrap().unwrap();
        assert_eq!(stored.status, PaymentStatus::Paid);
    }

    #[tokio::test]
    async fn should_redirect_to_cancel_page_when_canceled() {
        let gateway = Arc::new(SandboxGateway::new(SandboxConfig::default()));
        let session = open_session(&gateway).await;

        let resp = routes(Arc::clone(&gateway))
            .oneshot(post_to(format!("/sandbox/checkout/{}/cancel", session.id)))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers()[header::LOCATION],
            "http://localhost:8080/payment-cancel"
        );
    }

    #[tokio::test]
    async fn should_return_conflict_when_paying_twice() {
        let gateway = Arc::new(SandboxGateway::new(SandboxConfig::default()));
        let session = open_session(&gateway).await;
        let app = routes(Arc::clone(&gateway));

        let first = app
            .clone()
            .oneshot(post_to(format!("/sandbox/checkout/{}/pay", session.id)))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::SEE_OTHER);

        let second = app
            .oneshot(post_to(format!("/sandbox/checkout/{}/pay", session.id)))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
    }
}
