//! Listing — view state of the service list page.
//!
//! Tracks the last successfully fetched records, whether a fetch is in
//! flight, and the error of the last failed fetch. [`Listing::view`]
//! projects that into exactly one of three displays.

use crate::service::ServiceRecord;

/// Message shown to the user when the catalog cannot be fetched.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load services. Please try again later.";

/// Client state of the service list.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    services: Vec<ServiceRecord>,
    loading: bool,
    error: Option<String>,
}

impl Default for Listing {
    fn default() -> Self {
        Self::new()
    }
}

/// What the list page should display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListingView<'a> {
    /// First fetch in flight, nothing to show yet.
    Loading,
    /// Fetch failed and nothing is cached: error text plus retry, exclusively.
    Unavailable { message: &'a str },
    /// Cards for every cached record, with an optional non-fatal banner.
    Cards {
        services: &'a [ServiceRecord],
        warning: Option<&'a str>,
        refreshing: bool,
    },
}

impl Listing {
    /// A listing whose first fetch is about to start.
    #[must_use]
    pub fn new() -> Self {
        Self {
            services: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// A listing seeded with records cached from an earlier visit.
    #[must_use]
    pub fn with_cached(services: Vec<ServiceRecord>) -> Self {
        Self {
            services,
            loading: true,
            error: None,
        }
    }

    /// Mark a (re)fetch as in flight. Cached records stay visible.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Replace the cached records with a fresh result.
    pub fn fetch_succeeded(&mut self, services: Vec<ServiceRecord>) {
        self.services = services;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed fetch, keeping whatever was cached.
    pub fn fetch_failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    #[must_use]
    pub fn services(&self) -> &[ServiceRecord] {
        &self.services
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Project the state into the display the page should render.
    #[must_use]
    pub fn view(&self) -> ListingView<'_> {
        if self.services.is_empty() {
            if self.loading {
                return ListingView::Loading;
            }
            if let Some(message) = self.error.as_deref() {
                return ListingView::Unavailable { message };
            }
        }
        ListingView::Cards {
            services: &self.services,
            warning: self.error.as_deref(),
            refreshing: self.loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ServiceId;
    use crate::price::Price;

    fn records(n: usize) -> Vec<ServiceRecord> {
        (0..n)
            .map(|i| {
                ServiceRecord::builder()
                    .id(ServiceId::new(format!("svc-{i}")).unwrap())
                    .title(format!("Service {i}"))
                    .price(Price::from_paise(100_000))
                    .build()
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn should_show_loading_before_first_fetch_completes() {
        assert_eq!(Listing::new().view(), ListingView::Loading);
    }

    #[test]
    fn should_show_one_card_per_fetched_record() {
        let mut listing = Listing::new();
        listing.fetch_succeeded(records(3));

        match listing.view() {
            ListingView::Cards {
                services,
                warning,
                refreshing,
            } => {
                assert_eq!(services.len(), 3);
                assert_eq!(warning, None);
                assert!(!refreshing);
            }
            other => panic!("expected cards, got {other:?}"),
        }
    }

    #[test]
    fn should_show_zero_cards_without_error_when_catalog_empty() {
        let mut listing = Listing::new();
        listing.fetch_succeeded(Vec::new());

        assert_eq!(
            listing.view(),
            ListingView::Cards {
                services: &[],
                warning: None,
                refreshing: false,
            }
        );
    }

    #[test]
    fn should_show_error_exclusively_when_nothing_cached() {
        let mut listing = Listing::new();
        listing.fetch_failed(LOAD_FAILED_MESSAGE);

        assert_eq!(
            listing.view(),
            ListingView::Unavailable {
                message: LOAD_FAILED_MESSAGE
            }
        );
    }

    #[test]
    fn should_keep_cards_and_warn_when_refetch_fails() {
        let mut listing = Listing::new();
        listing.fetch_succeeded(records(2));
        listing.begin_fetch();
        listing.fetch_failed(LOAD_FAILED_MESSAGE);

        match listing.view() {
            ListingView::Cards {
                services, warning, ..
            } => {
                assert_eq!(services.len(), 2);
                assert_eq!(warning, Some(LOAD_FAILED_MESSAGE));
            }
            other => panic!("expected cards with warning, got {other:?}"),
        }
    }

    #[test]
    fn should_warn_over_session_cache_when_first_fetch_fails() {
        let mut listing = Listing::with_cached(records(1));
        listing.fetch_failed(LOAD_FAILED_MESSAGE);

        assert!(matches!(
            listing.view(),
            ListingView::Cards {
                warning: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn should_keep_cards_visible_while_retrying() {
        let mut listing = Listing::new();
        listing.fetch_succeeded(records(1));
        listing.fetch_failed("boom");
        listing.begin_fetch();

        assert!(matches!(
            listing.view(),
            ListingView::Cards {
                refreshing: true,
                ..
            }
        ));
    }

    #[test]
    fn should_clear_error_after_successful_retry() {
        let mut listing = Listing::new();
        listing.fetch_failed(LOAD_FAILED_MESSAGE);
        listing.begin_fetch();
        assert_eq!(listing.view(), ListingView::Loading);

        listing.fetch_succeeded(records(1));
        assert_eq!(listing.error(), None);
        assert!(!listing.is_loading());
    }
}
