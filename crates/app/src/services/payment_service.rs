//! Payment service — start a checkout for a service and confirm it afterwards.

use shutterbook_domain::error::{NotFoundError, ShutterError, ValidationError};
use shutterbook_domain::id::{PaymentSessionId, ServiceId};
use shutterbook_domain::payment::{
    CHECKOUT_SESSION_ID_PLACEHOLDER, CheckoutDraft, CheckoutSession, PaymentConfirmation,
};
use shutterbook_domain::route::{Route, SESSION_ID_PARAM};

use crate::ports::{PaymentGateway, ServiceCatalog};

/// Application service for the booking payment flow.
pub struct PaymentService<C, G> {
    catalog: C,
    gateway: G,
    public_url: String,
}

impl<C: ServiceCatalog, G: PaymentGateway> PaymentService<C, G> {
    /// Create a new service.
    ///
    /// `public_url` is the origin the browser reaches the dashboard on; it is
    /// used to build the provider's success and cancel redirects.
    pub fn new(catalog: C, gateway: G, public_url: impl Into<String>) -> Self {
        let public_url = public_url.into().trim_end_matches('/').to_string();
        Self {
            catalog,
            gateway,
            public_url,
        }
    }

    /// Redirect target after a completed payment, with the provider
    /// placeholder for the session id.
    #[must_use]
    pub fn success_url(&self) -> String {
        format!(
            "{}{}?{SESSION_ID_PARAM}={CHECKOUT_SESSION_ID_PLACEHOLDER}",
            self.public_url,
            Route::PaymentSuccess.path()
        )
    }

    /// Redirect target after an abandoned payment.
    #[must_use]
    pub fn cancel_url(&self) -> String {
        format!("{}{}", self.public_url, Route::PaymentCancel.path())
    }

    /// Open a checkout session charging the up-front deposit of a service.
    ///
    /// # Errors
    ///
    /// Returns [`ShutterError::NotFound`] for an unknown service,
    /// [`ValidationError::NothingToCharge`] when the deposit is zero, or an
    /// error propagated from the catalog or the gateway.
    #[tracing::instrument(skip(self), fields(service_id = %service_id))]
    pub async fn start_checkout(
        &self,
        service_id: &ServiceId,
    ) -> Result<CheckoutSession, ShutterError> {
        let service = self.catalog.get(service_id).await?.ok_or_else(|| NotFoundError {
            entity: "Service",
            id: service_id.to_string(),
        })?;

        let amount = service.upfront_deposit();
        if amount.is_zero() {
            return Err(ValidationError::NothingToCharge(service.id.to_string()).into());
        }

        let draft = CheckoutDraft {
            service_id: service.id,
            service_title: service.title,
            amount,
            success_url: self.success_url(),
            cancel_url: self.cancel_url(),
        };
        let session = self.gateway.create_session(draft).await?;
        tracing::info!(session_id = %session.id, amount = %session.amount, "checkout session opened");
        Ok(session)
    }

    /// Confirm a session after the provider redirected back.
    ///
    /// # Errors
    ///
    /// Returns [`ShutterError::NotFound`] when the provider does not know
    /// `session_id`, or an error propagated from the gateway.
    #[tracing::instrument(skip(self), fields(session_id = %session_id))]
    pub async fn verify_payment(
        &self,
        session_id: &PaymentSessionId,
    ) -> Result<PaymentConfirmation, ShutterError> {
        let session = self.gateway.get_session(session_id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Payment session",
                id: session_id.to_string(),
            }
        })?;
        let confirmation = session.confirmation();
        tracing::info!(status = %confirmation.status, "payment verified");
        Ok(confirmation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shutterbook_domain::error::GatewayError;
    use shutterbook_domain::payment::PaymentStatus;
    use shutterbook_domain::price::Price;
    use shutterbook_domain::service::ServiceRecord;
    use shutterbook_domain::time::{minutes_after, now};
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct FixedCatalog(Vec<ServiceRecord>);

    impl ServiceCatalog for FixedCatalog {
        async fn list(&self) -> Result<Vec<ServiceRecord>, ShutterError> {
            Ok(self.0.clone())
        }

        async fn get(&self, id: &ServiceId) -> Result<Option<ServiceRecord>, ShutterError> {
            Ok(self.0.iter().find(|s| &s.id == id).cloned())
        }
    }

    #[derive(Default)]
    struct RecordingGateway {
        sessions: Mutex<HashMap<PaymentSessionId, CheckoutSession>>,
        drafts: Mutex<Vec<CheckoutDraft>>,
    }

    impl PaymentGateway for RecordingGateway {
        async fn create_session(
            &self,
            draft: CheckoutDraft,
        ) -> Result<CheckoutSession, ShutterError> {
            self.drafts.lock().unwrap().push(draft.clone());
            let id = PaymentSessionId::new(format!(
                "cs_{}",
                self.drafts.lock().unwrap().len()
            ))
            .unwrap();
            let created = now();
            let session = CheckoutSession::open(
                id.clone(),
                draft,
                format!("https://provider.test/{id}"),
                created,
                minutes_after(created, 30),
            );
            self.sessions.lock().unwrap().insert(id, session.clone());
            Ok(session)
        }

        async fn get_session(
            &self,
            id: &PaymentSessionId,
        ) -> Result<Option<CheckoutSession>, ShutterError> {
            Ok(self.sessions.lock().unwrap().get(id).cloned())
        }
    }

    struct DownGateway;

    impl PaymentGateway for DownGateway {
        async fn create_session(
            &self,
            _draft: CheckoutDraft,
        ) -> Result<CheckoutSession, ShutterError> {
            Err(GatewayError::Unavailable("timeout".to_string()).into())
        }

        async fn get_session(
            &self,
            _id: &PaymentSessionId,
        ) -> Result<Option<CheckoutSession>, ShutterError> {
            Err(GatewayError::Unavailable("timeout".to_string()).into())
        }
    }

    fn catalog() -> FixedCatalog {
        FixedCatalog(vec![
            ServiceRecord::builder()
                .id(ServiceId::new("wedding").unwrap())
                .title("Wedding Coverage")
                .price(Price::from_rupees(85_000.0).unwrap())
                .build()
                .unwrap(),
            ServiceRecord::builder()
                .id(ServiceId::new("free").unwrap())
                .title("Free consult")
                .build()
                .unwrap(),
        ])
    }

    fn make_service() -> PaymentService<FixedCatalog, RecordingGateway> {
        PaymentService::new(catalog(), RecordingGateway::default(), "http://localhost:8080/")
    }

    #[test]
    fn should_build_redirect_urls_from_public_url() {
        let svc = make_service();
        assert_eq!(
            svc.success_url(),
            "http://localhost:8080/payment-success?session_id={CHECKOUT_SESSION_ID}"
        );
        assert_eq!(svc.cancel_url(), "http://localhost:8080/payment-cancel");
    }

    #[tokio::test]
    async fn should_open_session_for_upfront_deposit() {
        let svc = make_service();
        let session = svc
            .start_checkout(&ServiceId::new("wedding").unwrap())
            .await
            .unwrap();

        assert_eq!(session.status, PaymentStatus::Open);
        assert_eq!(session.amount, Price::from_rupees(8_500.0).unwrap());
        assert_eq!(session.service_title, "Wedding Coverage");

        let drafts = svc.gateway.drafts.lock().unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].cancel_url, "http://localhost:8080/payment-cancel");
    }

    #[tokio::test]
    async fn should_return_not_found_when_booking_unknown_service() {
        let svc = make_service();
        let result = svc.start_checkout(&ServiceId::new("nope").unwrap()).await;
        assert!(matches!(result, Err(ShutterError::NotFound(_))));
        assert!(svc.gateway.drafts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_checkout_with_nothing_to_charge() {
        let svc = make_service();
        let result = svc.start_checkout(&ServiceId::new("free").unwrap()).await;
        assert!(matches!(
            result,
            Err(ShutterError::Validation(ValidationError::NothingToCharge(_)))
        ));
    }

    #[tokio::test]
    async fn should_verify_known_session() {
        let svc = make_service();
        let session = svc
            .start_checkout(&ServiceId::new("wedding").unwrap())
            .await
            .unwrap();

        let confirmation = svc.verify_payment(&session.id).await.unwrap();
        assert_eq!(confirmation.session_id, session.id);
        assert_eq!(confirmation.status, PaymentStatus::Open);
        assert!(!confirmation.paid);
    }

    #[tokio::test]
    async fn should_return_not_found_when_verifying_unknown_session() {
        let svc = make_service();
        let result = svc
            .verify_payment(&PaymentSessionId::new("cs_missing").unwrap())
            .await;
        assert!(matches!(result, Err(ShutterError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_propagate_gateway_failure() {
        let svc = PaymentService::new(catalog(), DownGateway, "http://localhost:8080");
        let result = svc.start_checkout(&ServiceId::new("wedding").unwrap()).await;
        assert!(matches!(result, Err(ShutterError::Gateway(_))));
    }
}
