//! Liked set — client-local favourites keyed by service id.

use std::collections::HashSet;

use crate::id::ServiceId;

/// Session-scoped set of service identifiers marked as favourites.
///
/// Membership always reflects the last [`toggle`](Self::toggle) for an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikedSet {
    ids: HashSet<ServiceId>,
}

impl LikedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id` and return whether it is now liked.
    pub fn toggle(&mut self, id: &ServiceId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    #[must_use]
    pub fn contains(&self, id: &ServiceId) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
