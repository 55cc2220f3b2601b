//! Last successful service list, kept in `sessionStorage` so a failed
//! refetch can still show something.

use shutterbook_domain::service::ServiceRecord;

/// Key under which the list is stored.
const STORAGE_KEY: &str = "shutterbook-services";

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// Records cached earlier in this browser session, or nothing.
pub fn load() -> Vec<ServiceRecord> {
    decode(
        session_storage()
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
            .as_deref(),
    )
}

/// Write side of the browser storage, so write failures can be exercised
/// without a browser.
trait StorageWrite {
    fn write(&self, key: &str, value: &str) -> Result<(), String>;
}

impl StorageWrite for web_sys::Storage {
    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        self.set_item(key, value).map_err(|err| format!("{err:?}"))
    }
}

/// Remember the latest successful fetch. A full or disabled storage only
/// costs the cache, so the failure is logged and otherwise ignored.
pub fn store(services: &[ServiceRecord]) {
    let Some(storage) = session_storage() else {
        return;
    };
    if let Err(err) = write_services(&storage, services) {
        leptos::logging::warn!("failed to cache services: {err}");
    }
}

fn write_services(storage: &impl StorageWrite, services: &[ServiceRecord]) -> Result<(), String> {
    let raw = serde_json::to_string(services).map_err(|err| err.to_string())?;
    storage.write(STORAGE_KEY, &raw)
}

/// Unreadable or stale-shaped entries are treated as an empty cache.
fn decode(raw: Option<&str>) -> Vec<ServiceRecord> {
    raw.and_then(|raw| serde_json::from_str(raw).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStorage {
        entries: RefCell<Vec<(String, String)>>,
        quota_exceeded: bool,
    }

    impl StorageWrite for MemoryStorage {
        fn write(&self, key: &str, value: &str) -> Result<(), String> {
            if self.quota_exceeded {
                return Err("QuotaExceededError".to_string());
            }
            self.entries
                .borrow_mut()
                .push((key.to_string(), value.to_string()));
            Ok(())
        }
    }

    #[test]
    fn should_write_services_under_storage_key() {
        let storage = MemoryStorage::default();
        let services = decode(Some(r#"[{"_id":"a","title":"Portrait","price":4999}]"#));
        write_services(&storage, &services).unwrap();

        let entries = storage.entries.borrow();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, STORAGE_KEY);
        assert_eq!(decode(Some(&entries[0].1)), services);
    }

    #[test]
    fn should_report_error_when_storage_is_full() {
        let storage = MemoryStorage {
            quota_exceeded: true,
            ..MemoryStorage::default()
        };
        let result = write_services(&storage, &[]);
        assert_eq!(result, Err("QuotaExceededError".to_string()));
    }

    #[test]
    fn should_decode_cached_records() {
        let raw = r#"[{"_id":"a","title":"Portrait","price":4999}]"#;
        let services = decode(Some(raw));
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].title, "Portrait");
    }

    #[test]
    fn should_return_empty_when_nothing_cached() {
        assert!(decode(None).is_empty());
    }

    #[test]
    fn should_return_empty_when_cache_is_corrupt() {
        assert!(decode(Some("{not json")).is_empty());
    }
}
