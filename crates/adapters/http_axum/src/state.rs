//! Shared application state for axum handlers.

use std::sync::Arc;

use shutterbook_app::ports::{PaymentGateway, ServiceCatalog};
use shutterbook_app::services::catalog_service::CatalogService;
use shutterbook_app::services::payment_service::PaymentService;

/// Application state shared across all axum handlers.
///
/// Generic over the catalog and payment gateway types to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<C, G> {
    /// Read access to the service records.
    pub catalog_service: Arc<CatalogService<C>>,
    /// Checkout creation and verification.
    pub payment_service: Arc<PaymentService<C, G>>,
}

impl<C, G> Clone for AppState<C, G> {
    fn clone(&self) -> Self {
        Self {
            catalog_service: Arc::clone(&self.catalog_service),
            payment_service: Arc::clone(&self.payment_service),
        }
    }
}

impl<C, G> AppState<C, G>
where
    C: ServiceCatalog + Send + Sync + 'static,
    G: PaymentGateway + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(catalog_service: CatalogService<C>, payment_service: PaymentService<C, G>) -> Self {
        Self {
            catalog_service: Arc::new(catalog_service),
            payment_service: Arc::new(payment_service),
        }
    }
}
