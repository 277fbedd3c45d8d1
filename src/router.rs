//! The router service: glues a [`History`] provider to the location store.

use std::rc::Rc;
use std::sync::Arc;

use crate::history::History;
use crate::location::{Location, LocationStore, LocationSubscription};
use crate::navigator::Navigator;

/// The owned routing context.
///
/// Construct one per application with the [`History`] provider of your
/// platform and pass it (or handles derived from it) to everything that reads
/// or changes the current location. There is deliberately no ambient global;
/// tests fabricate routers around a
/// [`MemoryHistory`](crate::history::MemoryHistory).
///
/// On construction the router registers itself for the provider's
/// back/forward notifications and immediately performs the first
/// synchronization, so the location is set before `new` returns.
pub struct Router {
    history: Rc<dyn History>,
    store: LocationStore,
}

impl Router {
    /// Create a router on top of `history`.
    pub fn new(history: Rc<dyn History>) -> Rc<Self> {
        let router = Rc::new(Self {
            history: history.clone(),
            store: LocationStore::new(),
        });

        // weak back-reference: the provider owns the callback, the router
        // owns the provider
        let weak = Rc::downgrade(&router);
        history.updater(Arc::new(move || {
            if let Some(router) = weak.upgrade() {
                router.sync();
            }
        }));

        // initial synthetic notification
        router.sync();

        router
    }

    /// Re-read path and search from the history provider and publish them as
    /// one atomic [`Location`] swap.
    fn sync(&self) {
        let path = self.history.current_path();
        let search = self.history.current_search().unwrap_or_default();
        self.store.set(Some(Location { path, search }));
    }

    /// The current location, if the first synchronization has happened.
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        self.store.current()
    }

    /// A [`Navigator`] handle for this router.
    #[must_use]
    pub fn navigator(&self) -> Navigator {
        Navigator::new(self.history.clone(), self.store.clone())
    }

    /// Run `callback` on every location change. Dropping the returned
    /// subscription unsubscribes.
    #[must_use]
    pub fn subscribe(
        &self,
        callback: impl Fn(Option<&Location>) + 'static,
    ) -> LocationSubscription {
        self.store.subscribe(callback)
    }

    /// Watch the raw current path.
    ///
    /// A passthrough for logic that doesn't fit a declarative route table,
    /// like highlighting the active link in a navigation bar. `callback` is
    /// invoked once immediately with the present path and again on every
    /// change; no matching is involved.
    #[must_use]
    pub fn watch(&self, callback: impl Fn(Option<&str>) + 'static) -> LocationSubscription {
        callback(self.location().as_ref().map(|location| location.path.as_str()));
        self.store
            .subscribe(move |location| callback(location.map(|l| l.path.as_str())))
    }
}
