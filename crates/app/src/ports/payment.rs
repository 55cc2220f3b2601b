//! Payment port — checkout sessions at an external provider.

use std::future::Future;

use shutterbook_domain::error::ShutterError;
use shutterbook_domain::id::PaymentSessionId;
use shutterbook_domain::payment::{CheckoutDraft, CheckoutSession};

/// A hosted-checkout payment provider.
///
/// The provider owns the session lifecycle: it renders the checkout page,
/// settles the payment, and redirects the browser back to the draft's
/// success or cancel URL.
pub trait PaymentGateway {
    /// Open a session for `draft`; the returned session carries the URL the
    /// browser must visit.
    fn create_session(
        &self,
        draft: CheckoutDraft,
    ) -> impl Future<Output = Result<CheckoutSession, ShutterError>> + Send;

    /// Current state of a session, or `None` when the provider does not know it.
    fn get_session(
        &self,
        id: &PaymentSessionId,
    ) -> impl Future<Output = Result<Option<CheckoutSession>, ShutterError>> + Send;
}

impl<T: PaymentGateway + Send + Sync> PaymentGateway for std::sync::Arc<T> {
    fn create_session(
        &self,
        draft: CheckoutDraft,
    ) -> impl Future<Output = Result<CheckoutSession, ShutterError>> + Send {
        (**self).create_session(draft)
    }

    fn get_session(
        &self,
        id: &PaymentSessionId,
    ) -> impl Future<Output = Result<Option<CheckoutSession>, ShutterError>> + Send {
        (**self).get_session(id)
    }
}
