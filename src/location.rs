//! The shared location cell and its subscription contract.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Where the user currently is.
///
/// `path` is the pathname portion of the URL. It may carry a fragment suffix
/// (`/about#team`) when a navigation supplied one; matching strips it.
/// `search` is the raw query string including its leading `?`, or empty. It is
/// passed through opaquely, the router never parses it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    /// The pathname portion of the URL.
    pub path: String,
    /// The raw query string, `?`-prefixed or empty.
    pub search: String,
}

type Subscriber = Rc<dyn Fn(Option<&Location>)>;

struct StoreInner {
    // `None` until the first synchronization with the history provider
    current: RefCell<Option<Location>>,
    subscribers: RefCell<Vec<(usize, Subscriber)>>,
    next_id: Cell<usize>,
}

/// The single source of truth for the current [`Location`].
///
/// The store starts out unset and is swapped atomically: path and search are
/// always published together, so no subscriber ever observes a half-updated
/// pair. Publishing a value equal to the current one notifies nobody, which is
/// what keeps redirect cycles finite.
#[derive(Clone)]
pub struct LocationStore {
    inner: Rc<StoreInner>,
}

impl Default for LocationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationStore {
    /// Create an empty store. The location stays unset until the first
    /// [`set`](Self::set).
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(StoreInner {
                current: RefCell::new(None),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// The current location, if one has been observed yet.
    #[must_use]
    pub fn current(&self) -> Option<Location> {
        self.inner.current.borrow().clone()
    }

    /// Publish a new location and notify all live subscribers in subscription
    /// order. A value equal to the current one is dropped silently.
    pub fn set(&self, location: Option<Location>) {
        {
            let mut current = self.inner.current.borrow_mut();
            if *current == location {
                return;
            }
            *current = location.clone();
        }

        // snapshot the subscriber list so callbacks may subscribe, push or
        // drop their own subscription without holding a borrow
        let subscribers: Vec<_> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in subscribers {
            callback(location.as_ref());
        }
    }

    /// Register `callback` to run on every location change.
    ///
    /// The callback is only invoked for future changes; read
    /// [`current`](Self::current) for the present value. Dropping the returned
    /// [`LocationSubscription`] unsubscribes.
    #[must_use]
    pub fn subscribe(&self, callback: impl Fn(Option<&Location>) + 'static) -> LocationSubscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));
        LocationSubscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }
}

/// A live subscription to a [`LocationStore`]. Unsubscribes on drop.
pub struct LocationSubscription {
    id: usize,
    store: Weak<StoreInner>,
}

impl Drop for LocationSubscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store.subscribers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}
