//! # shutterbook-adapter-catalog-json
//!
//! Catalog adapter that serves service records loaded from a JSON document.
//!
//! The document is a JSON array of records in the catalog backend's shape
//! (`_id`, `title`, `description`, `category`, `price`, `duration`,
//! `rating`, `reviews`). It is read and validated once at start-up; the
//! catalog is immutable afterwards. Without a configured file, a built-in
//! demo catalog is served.
//!
//! ## Dependency rule
//!
//! Depends on `shutterbook-app` (port traits) and `shutterbook-domain` only.

mod error;

use std::collections::HashSet;
use std::path::Path;

use shutterbook_app::ports::ServiceCatalog;
use shutterbook_domain::error::ShutterError;
use shutterbook_domain::id::ServiceId;
use shutterbook_domain::service::ServiceRecord;

pub use error::CatalogLoadError;

const DEMO_CATALOG: &str = include_str!("../data/demo.json");

/// In-memory catalog loaded from JSON.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    services: Vec<ServiceRecord>,
}

impl JsonCatalog {
    /// Build a catalog from already-parsed records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError::Invalid`] when a record breaks a domain
    /// invariant or an id appears twice.
    pub fn from_records(services: Vec<ServiceRecord>) -> Result<Self, CatalogLoadError> {
        let mut seen = HashSet::new();
        for (index, service) in services.iter().enumerate() {
            service
                .validate()
                .map_err(|source| CatalogLoadError::Invalid { index, source })?;
            if !seen.insert(&service.id) {
                return Err(CatalogLoadError::Invalid {
                    index,
                    source: shutterbook_domain::error::ValidationError::DuplicateId(
                        service.id.to_string(),
                    ),
                });
            }
        }
        Ok(Self { services })
    }

    /// Parse and validate a JSON array of records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError::Parse`] for malformed JSON, or the errors
    /// of [`from_records`](Self::from_records).
    pub fn from_json_str(json: &str) -> Result<Self, CatalogLoadError> {
        let services: Vec<ServiceRecord> = serde_json::from_str(json)?;
        Self::from_records(services)
    }

    /// Read, parse and validate a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError::Io`] when the file cannot be read, or the
    /// errors of [`from_json_str`](Self::from_json_str).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!(path = %path.display(), count = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// The built-in demo catalog.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded document is broken.
    pub fn demo() -> Result<Self, CatalogLoadError> {
        Self::from_json_str(DEMO_CATALOG)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl ServiceCatalog for JsonCatalog {
    async fn list(&self) -> Result<Vec<ServiceRecord>, ShutterError> {
        Ok(self.services.clone())
    }

    async fn get(&self, id: &ServiceId) -> Result<Option<ServiceRecord>, ShutterError> {
        Ok(self.services.iter().find(|s| &s.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shutterbook_domain::error::ValidationError;
    use shutterbook_domain::price::Price;

    #[test]
    fn should_load_demo_catalog() {
        let catalog = JsonCatalog::demo().unwrap();
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn should_accept_empty_array() {
        let catalog = JsonCatalog::from_json_str("[]").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn should_reject_malformed_json() {
        let result = JsonCatalog::from_json_str("{not json");
        assert!(matches!(result, Err(CatalogLoadError::Parse(_))));
    }

    #[test]
    fn should_reject_negative_price() {
        let result = JsonCatalog::from_json_str(r#"[{"_id": "a", "title": "A", "price": -10}]"#);
        assert!(matches!(result, Err(CatalogLoadError::Parse(_))));
    }

    #[test]
    fn should_reject_empty_title_with_index() {
        let json = r#"[
            {"_id": "a", "title": "A", "price": 10},
            {"_id": "b", "title": " ", "price": 10}
        ]"#;
        let result = JsonCatalog::from_json_str(json);
        assert!(matches!(
            result,
            Err(CatalogLoadError::Invalid {
                index: 1,
                source: ValidationError::EmptyTitle
            })
        ));
    }

    #[test]
    fn should_reject_duplicate_ids() {
        let json = r#"[
            {"_id": "a", "title": "A", "price": 10},
            {"_id": "a", "title": "Again", "price": 20}
        ]"#;
        let result = JsonCatalog::from_json_str(json);
        assert!(matches!(
            result,
            Err(CatalogLoadError::Invalid {
                source: ValidationError::DuplicateId(_),
                ..
            })
        ));
    }

    #[test]
    fn should_report_io_error_for_missing_file() {
        let result = JsonCatalog::from_path("does/not/exist.json");
        assert!(matches!(result, Err(CatalogLoadError::Io { .. })));
    }

    #[tokio::test]
    async fn should_list_records_in_file_order() {
        let catalog = JsonCatalog::demo().unwrap();
        let services = catalog.list().await.unwrap();
        assert_eq!(services[0].title, "Wedding Day Coverage");
        assert_eq!(services[5].price, Price::from_rupees(18_500.5).unwrap());
    }

    #[tokio::test]
    async fn should_get_record_by_id() {
        let catalog = JsonCatalog::demo().unwrap();
        let id = ServiceId::new("66b1a0f2c3d4e5f601a1b003").unwrap();
        let found = catalog.get(&id).await.unwrap().unwrap();
        assert_eq!(found.title, "Studio Portrait Session");

        let missing = ServiceId::new("nope").unwrap();
        assert!(catalog.get(&missing).await.unwrap().is_none());
    }
}
