//! Outgoing navigation.

use std::rc::Rc;

use tracing::{debug, error};

use crate::history::History;
use crate::location::{Location, LocationStore};

/// A handle for performing navigations.
///
/// Obtained from [`Router::navigator`](crate::Router::navigator); cheap to
/// clone and pass into view callbacks (a link component, say).
#[derive(Clone)]
pub struct Navigator {
    history: Rc<dyn History>,
    store: LocationStore,
}

impl Navigator {
    pub(crate) fn new(history: Rc<dyn History>, store: LocationStore) -> Self {
        Self { history, store }
    }

    /// Navigate to `next`, either an in-app path or an external absolute URL.
    ///
    /// - Pushing the path the user is already on is a no-op. This is what
    ///   breaks re-entrant redirect cycles, so it is a guarantee, not an
    ///   optimization.
    /// - A target starting with `http` leaves the application through a full
    ///   document navigation.
    /// - Anything else becomes a new history entry carrying the current
    ///   search string, and the shared [`Location`] is updated synchronously
    ///   before this returns.
    pub fn push(&self, next: impl Into<String>) {
        let next = next.into();
        let current = self.store.current();

        if let Some(location) = &current {
            if location.path == next {
                return;
            }
        }

        if next.starts_with("http") {
            debug!(url = %next, "navigating to external target");
            if !self.history.external(next.clone()) {
                error!(url = %next, "history provider cannot leave the application");
            }
            return;
        }

        let search = current.map(|location| location.search).unwrap_or_default();
        debug!(path = %next, "pushing new location");
        self.history.push(format!("{next}{search}"));
        self.store.set(Some(Location { path: next, search }));
    }

    /// Replace the current history entry with `target`, without creating a
    /// back-navigation entry. Used for redirects and the not-found policy;
    /// the shared [`Location`] is updated synchronously.
    pub fn replace(&self, target: impl Into<String>) {
        let target = target.into();

        debug!(path = %target, "replacing current location");
        self.history.replace(target.clone());
        self.store.set(Some(Location {
            path: target,
            search: String::new(),
        }));
    }
}
