//! # shutterbook-adapter-payment-sandbox
//!
//! Sandbox payment provider that stands in for a hosted-checkout service
//! during development and in tests.
//!
//! ## Behaviour
//!
//! | Step | Sandbox |
//! |------|---------|
//! | Open session | mints `cs_sandbox_<uuid>`, status `open`, expires after the TTL |
//! | Checkout page | `GET /sandbox/checkout/{id}` with Pay / Cancel buttons |
//! | Pay | marks `paid`, redirects to the success URL with the id substituted |
//! | Cancel | marks `canceled`, redirects to the cancel URL |
//! | Lookup after TTL | an unpaid session reports `expired` |
//! | One more TTL later | the session is dropped and lookups return nothing |
//!
//! Sessions live in process memory only.
//!
//! ## Dependency rule
//!
//! Depends on `shutterbook-app` (port traits) and `shutterbook-domain`, plus
//! `axum` for the hosted checkout pages.

pub mod checkout;
mod config;

use std::collections::HashMap;
use std::sync::Arc;

use shutterbook_app::ports::PaymentGateway;
use shutterbook_domain::error::{GatewayError, NotFoundError, ShutterError};
use shutterbook_domain::id::PaymentSessionId;
use shutterbook_domain::payment::{CheckoutDraft, CheckoutSession, PaymentStatus};
use shutterbook_domain::time::{self, Timestamp, minutes_after};
use tokio::sync::RwLock;

pub use config::SandboxConfig;

/// Source of the current time; swapped out in tests.
pub type Clock = Arc<dyn Fn() -> Timestamp + Send + Sync>;

/// What the shopper chose on the hosted checkout page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Pay,
    Cancel,
}

/// In-memory hosted-checkout provider.
pub struct SandboxGateway {
    config: SandboxConfig,
    sessions: RwLock<HashMap<PaymentSessionId, CheckoutSession>>,
    clock: Clock,
}

impl SandboxGateway {
    #[must_use]
    pub fn new(config: SandboxConfig) -> Self {
        Self::with_clock(config, Arc::new(time::now))
    }

    #[must_use]
    pub fn with_clock(config: SandboxConfig, clock: Clock) -> Self {
        Self {
            config,
            sessions: RwLock::new(HashMap::new()),
            clock,
        }
    }

    /// Settle an open session with the shopper's choice.
    ///
    /// # Errors
    ///
    /// Returns [`ShutterError::NotFound`] for an unknown id and
    /// [`GatewayError::AlreadySettled`] when the session is no longer open
    /// (paid, canceled, or expired).
    #[tracing::instrument(skip(self), fields(session_id = %id))]
    pub async fn settle(
        &self,
        id: &PaymentSessionId,
        settlement: Settlement,
    ) -> Result<CheckoutSession, ShutterError> {
        let now = (self.clock)();
        let mut sessions = self.sessions.write().await;
        self.evict_stale(&mut sessions, now);
        let session = sessions.get_mut(id).ok_or_else(|| NotFoundError {
            entity: "Payment session",
            id: id.to_string(),
        })?;
        refresh_expiry(session, now);

        if !session.status.is_open() {
            return Err(GatewayError::AlreadySettled {
                id: id.to_string(),
                status: session.status,
            }
            .into());
        }

        session.status = match settlement {
            Settlement::Pay => PaymentStatus::Paid,
            Settlement::Cancel => PaymentStatus::Canceled,
        };
        tracing::info!(status = %session.status, "sandbox session settled");
        Ok(session.clone())
    }

    /// Drop sessions whose expiry lies more than one TTL in the past.
    ///
    /// Every session expires after the TTL whatever its status, so this
    /// bounds the map to sessions created within the last two TTLs.
    fn evict_stale(
        &self,
        sessions: &mut HashMap<PaymentSessionId, CheckoutSession>,
        now: Timestamp,
    ) {
        let retention = self.config.session_ttl_minutes;
        let before = sessions.len();
        sessions.retain(|_, session| now < minutes_after(session.expires_at, retention));
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, "evicted stale sandbox sessions");
        }
    }
}

fn refresh_expiry(session: &mut CheckoutSession, now: Timestamp) {
    if session.is_expired_at(now) {
        session.status = PaymentStatus::Expired;
    }
}

impl PaymentGateway for SandboxGateway {
    async fn create_session(&self, draft: CheckoutDraft) -> Result<CheckoutSession, ShutterError> {
        let raw_id = format!("cs_sandbox_{}", uuid::Uuid::new_v4().simple());
        let id = PaymentSessionId::new(raw_id)?;
        let created_at = (self.clock)();
        let session = CheckoutSession::open(
            id.clone(),
            draft,
            self.config.checkout_url(id.as_str()),
            created_at,
            minutes_after(created_at, self.config.session_ttl_minutes),
        );
        let mut sessions = self.sessions.write().await;
        self.evict_stale(&mut sessions, created_at);
        sessions.insert(id, session.clone());
        drop(sessions);
        tracing::debug!(session_id = %session.id, "sandbox session created");
        Ok(session)
    }

    async fn get_session(
        &self,
        id: &PaymentSessionId,
    ) -> Result<Option<CheckoutSession>, ShutterError> {
        let now = (self.clock)();
        let mut sessions = self.sessions.write().await;
        self.evict_stale(&mut sessions, now);
        Ok(sessions.get_mut(id).map(|session| {
            refresh_expiry(session, now);
            session.clone()
        }))
    }
}
