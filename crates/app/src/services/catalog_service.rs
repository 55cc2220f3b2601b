//! Catalog service — use-cases for browsing the service records.

use shutterbook_domain::error::{NotFoundError, ShutterError};
use shutterbook_domain::id::ServiceId;
use shutterbook_domain::service::ServiceRecord;

use crate::ports::ServiceCatalog;

/// Application service for reading the catalog.
pub struct CatalogService<C> {
    catalog: C,
}

impl<C: ServiceCatalog> CatalogService<C> {
    /// Create a new service backed by the given catalog.
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// List every service offered.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the catalog.
    #[tracing::instrument(skip(self))]
    pub async fn list_services(&self) -> Result<Vec<ServiceRecord>, ShutterError> {
        let services = self.catalog.list().await?;
        tracing::debug!(count = services.len(), "listed services");
        Ok(services)
    }

    /// Look up a service by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ShutterError::NotFound`] when no service with `id` exists,
    /// or a storage error from the catalog.
    #[tracing::instrument(skip(self), fields(service_id = %id))]
    pub async fn get_service(&self, id: &ServiceId) -> Result<ServiceRecord, ShutterError> {
        self.catalog.get(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Service",
                id: id.to_string(),
            }
            .into()
        })
    }
}
