//! Catalog port — read access to service records.

use std::future::Future;

use shutterbook_domain::error::ShutterError;
use shutterbook_domain::id::ServiceId;
use shutterbook_domain::service::ServiceRecord;

/// Source of the photography services offered for booking.
pub trait ServiceCatalog {
    /// All records, in catalog order.
    fn list(&self) -> impl Future<Output = Result<Vec<ServiceRecord>, ShutterError>> + Send;

    /// A single record, or `None` when `id` is unknown.
    fn get(
        &self,
        id: &ServiceId,
    ) -> impl Future<Output = Result<Option<ServiceRecord>, ShutterError>> + Send;
}

impl<T: ServiceCatalog + Send + Sync> ServiceCatalog for std::sync::Arc<T> {
    fn list(&self) -> impl Future<Output = Result<Vec<ServiceRecord>, ShutterError>> + Send {
        (**self).list()
    }

    fn get(
        &self,
        id: &ServiceId,
    ) -> impl Future<Output = Result<Option<ServiceRecord>, ShutterError>> + Send {
        (**self).get(id)
    }
}
