//! Payment sessions — the hand-off to an external checkout provider.
//!
//! The client asks the backend to open a session for a service, follows the
//! provider's checkout URL, and is redirected back to
//! `/payment-success?session_id=…` or `/payment-cancel`. The success page then
//! asks the backend to confirm the session once.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::{PaymentSessionId, ServiceId};
use crate::price::Price;
use crate::route::session_id_from_query;
use crate::time::Timestamp;

/// Placeholder substituted with the session id in the success URL.
pub const CHECKOUT_SESSION_ID_PLACEHOLDER: &str = "{CHECKOUT_SESSION_ID}";

/// Lifecycle of a checkout session at the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Open,
    Paid,
    Canceled,
    Expired,
}

impl PaymentStatus {
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    #[must_use]
    pub fn is_paid(self) -> bool {
        matches!(self, Self::Paid)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("open"),
            Self::Paid => f.write_str("paid"),
            Self::Canceled => f.write_str("canceled"),
            Self::Expired => f.write_str("expired"),
        }
    }
}

/// Body of `POST /api/stripe/create-checkout-session`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub service_id: ServiceId,
}

/// Response of `POST /api/stripe/create-checkout-session`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutCreated {
    pub session_id: PaymentSessionId,
    /// Provider page the browser must be sent to.
    pub url: String,
}

/// What the application asks a payment gateway to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutDraft {
    pub service_id: ServiceId,
    pub service_title: String,
    pub amount: Price,
    /// Redirect target after payment; may contain
    /// [`CHECKOUT_SESSION_ID_PLACEHOLDER`].
    pub success_url: String,
    pub cancel_url: String,
}

/// A checkout session as known by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    pub id: PaymentSessionId,
    pub service_id: ServiceId,
    pub service_title: String,
    pub amount: Price,
    pub status: PaymentStatus,
    pub checkout_url: String,
    pub success_url: String,
    pub cancel_url: String,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
}

impl CheckoutSession {
    /// Open a session for `draft`.
    #[must_use]
    pub fn open(
        id: PaymentSessionId,
        draft: CheckoutDraft,
        checkout_url: String,
        created_at: Timestamp,
        expires_at: Timestamp,
    ) -> Self {
        Self {
            id,
            service_id: draft.service_id,
            service_title: draft.service_title,
            amount: draft.amount,
            status: PaymentStatus::Open,
            checkout_url,
            success_url: draft.success_url,
            cancel_url: draft.cancel_url,
            created_at,
            expires_at,
        }
    }

    /// Whether an open session has outlived its expiry at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.status.is_open() && now >= self.expires_at
    }

    /// Success URL with the session id substituted in.
    #[must_use]
    pub fn success_redirect(&self) -> String {
        self.success_url
            .replace(CHECKOUT_SESSION_ID_PLACEHOLDER, self.id.as_str())
    }

    /// Summary returned to the client by the verification endpoint.
    #[must_use]
    pub fn confirmation(&self) -> PaymentConfirmation {
        PaymentConfirmation {
            session_id: self.id.clone(),
            status: self.status,
            paid: self.status.is_paid(),
            amount: self.amount,
            service_id: self.service_id.clone(),
            service_title: self.service_title.clone(),
        }
    }
}

/// Body of `POST /api/stripe/verify-payment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentRequest {
    pub session_id: PaymentSessionId,
}

impl VerifyPaymentRequest {
    /// Build a request only when a non-blank session id is present.
    #[must_use]
    pub fn from_session_id(session_id: Option<&str>) -> Option<Self> {
        session_id
            .and_then(|raw| PaymentSessionId::new(raw).ok())
            .map(|session_id| Self { session_id })
    }

    /// Build a request from the success page's raw query string.
    #[must_use]
    pub fn from_query(query: &str) -> Option<Self> {
        Self::from_session_id(session_id_from_query(query).as_deref())
    }
}

/// Confirmation payload returned by the verification endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfirmation {
    pub session_id: PaymentSessionId,
    pub status: PaymentStatus,
    pub paid: bool,
    pub amount: Price,
    pub service_id: ServiceId,
    pub service_title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{minutes_after, now};

    fn draft() -> CheckoutDraft {
        CheckoutDraft {
            service_id: ServiceId::new("wedding").unwrap(),
            service_title: "Wedding".to_string(),
            amount: Price::from_rupees(8_500.0).unwrap(),
            success_url: format!(
                "http://localhost:8080/payment-success?session_id={CHECKOUT_SESSION_ID_PLACEHOLDER}"
            ),
            cancel_url: "http://localhost:8080/payment-cancel".to_string(),
        }
    }

    fn session() -> CheckoutSession {
        let created = now();
        CheckoutSession::open(
            PaymentSessionId::new("cs_1").unwrap(),
            draft(),
            "http://provider/checkout/cs_1".to_string(),
            created,
            minutes_after(created, 30),
        )
    }

    #[test]
    fn should_serialize_verify_request_with_camel_case_key() {
        let request = VerifyPaymentRequest::from_session_id(Some("abc123")).unwrap();
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"sessionId":"abc123"}"#);
    }

    #[test]
    fn should_build_no_verify_request_without_session_id() {
        assert_eq!(VerifyPaymentRequest::from_session_id(None), None);
        assert_eq!(VerifyPaymentRequest::from_session_id(Some(" ")), None);
        assert_eq!(VerifyPaymentRequest::from_query("?foo=bar"), None);
    }

    #[test]
    fn should_build_verify_request_from_query() {
        let request = VerifyPaymentRequest::from_query("?session_id=abc123").unwrap();
        assert_eq!(request.session_id.as_str(), "abc123");
    }

    #[test]
    fn should_recover_session_id_from_success_redirect_query() {
        let session = session();
        let redirect = session.success_redirect();
        let (_, query) = redirect.split_once('?').unwrap();

        let request =
            VerifyPaymentRequest::from_query(&format!("?{query}&utm_source=mail")).unwrap();
        assert_eq!(request.session_id, session.id);
    }

    #[test]
    fn should_parse_checkout_request_from_camel_case() {
        let request: CheckoutRequest = serde_json::from_str(r#"{"serviceId":"s1"}"#).unwrap();
        assert_eq!(request.service_id.as_str(), "s1");
    }

    #[test]
    fn should_open_session_in_open_state() {
        let session = session();
        assert_eq!(session.status, PaymentStatus::Open);
        assert_eq!(session.service_title, "Wedding");
    }

    #[test]
    fn should_substitute_session_id_in_success_redirect() {
        assert_eq!(
            session().success_redirect(),
            "http://localhost:8080/payment-success?session_id=cs_1"
        );
    }

    #[test]
    fn should_report_expiry_only_for_open_sessions() {
        let mut session = session();
        let later = minutes_after(session.expires_at, 1);
        assert!(session.is_expired_at(later));
        assert!(!session.is_expired_at(session.created_at));

        session.status = PaymentStatus::Paid;
        assert!(!session.is_expired_at(later));
    }

    #[test]
    fn should_mark_confirmation_paid_from_status() {
        let mut session = session();
        assert!(!session.confirmation().paid);
        session.status = PaymentStatus::Paid;
        let confirmation = session.confirmation();
        assert!(confirmation.paid);
        assert_eq!(confirmation.status, PaymentStatus::Paid);
    }

    #[test]
    fn should_display_status_lowercase() {
        assert_eq!(PaymentStatus::Canceled.to_string(), "canceled");
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Expired).unwrap(),
            "\"expired\""
        );
    }
}
