//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ShutterError`] via `#[from]`.

/// Top-level error for domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum ShutterError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error("payment gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// A domain invariant was violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("identifier must not be empty")]
    EmptyId,
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("price must be a finite, non-negative amount")]
    InvalidPrice,
    #[error("rating must be between 0 and 5")]
    RatingOutOfRange,
    #[error("duplicate service id `{0}`")]
    DuplicateId(String),
    #[error("service `{0}` cannot be booked without a price")]
    NothingToCharge(String),
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} `{id}` not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// The payment provider rejected or failed a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("session `{id}` is already {status}")]
    AlreadySettled {
        id: String,
        status: crate::payment::PaymentStatus,
    },
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// Failure inside a storage backend (catalog file, session store, …).
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct StorageError {
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Build a storage error from a message and an underlying cause.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
