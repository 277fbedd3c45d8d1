//! History integration.
//!
//! The router talks to the platform through a [`History`] provider, which
//! stores the current URL and, where the platform supports it, a past (back
//! button) and future (forward button). [`MemoryHistory`] keeps everything in
//! memory and is the default outside the browser; `WebHistory` (behind the
//! `web` feature) drives the browser's History API.

use std::sync::Arc;

mod memory;
pub use memory::*;

#[cfg(feature = "web")]
mod web;
#[cfg(feature = "web")]
pub use web::*;

/// An integration with some kind of navigation history.
///
/// The described behaviors mimic a web browser. Implementations may deviate,
/// but should document how; the router only relies on `current_path`,
/// `current_search`, `push`, `replace` and `updater`.
pub trait History {
    /// Get the path of the current URL. **Must start** with `/`.
    ///
    /// ```rust
    /// # use signpost::history::{History, MemoryHistory};
    /// let history = MemoryHistory::default();
    /// assert_eq!(history.current_path(), "/");
    ///
    /// history.push(String::from("/path"));
    /// assert_eq!(history.current_path(), "/path");
    /// ```
    #[must_use]
    fn current_path(&self) -> String;

    /// Get the query string of the current URL, including its leading `?`,
    /// if there is one.
    #[must_use]
    fn current_search(&self) -> Option<String>;

    /// Check whether there is a previous page to navigate back to.
    ///
    /// If a provider cannot know this, it should return [`true`].
    #[must_use]
    fn can_go_back(&self) -> bool {
        true
    }

    /// Go back to a previous page.
    ///
    /// If a provider cannot go to a previous page, it should do nothing. This
    /// method might be called even if `can_go_back` returns [`false`].
    fn go_back(&self);

    /// Check whether there is a future page to navigate forward to.
    ///
    /// If a provider cannot know this, it should return [`true`].
    #[must_use]
    fn can_go_forward(&self) -> bool {
        true
    }

    /// Go forward to a future page.
    ///
    /// If a provider cannot go to a future page, it should do nothing. This
    /// method might be called even if `can_go_forward` returns [`false`].
    fn go_forward(&self);

    /// Go to another page.
    ///
    /// This pushes a new history entry and clears the navigation future. The
    /// `path` may carry a query suffix. Providers that control a viewport
    /// reset its scroll position here.
    ///
    /// ```rust
    /// # use signpost::history::{History, MemoryHistory};
    /// let history = MemoryHistory::default();
    /// history.push(String::from("/some-other-page"));
    ///
    /// assert_eq!(history.current_path(), "/some-other-page");
    /// assert!(history.can_go_back());
    /// ```
    fn push(&self, path: String);

    /// Replace the current history entry with another one.
    ///
    /// In contrast to `push`, the navigation past and future stay untouched,
    /// so going back will skip the replaced entry.
    ///
    /// ```rust
    /// # use signpost::history::{History, MemoryHistory};
    /// let history = MemoryHistory::default();
    /// history.replace(String::from("/some-other-page"));
    ///
    /// assert_eq!(history.current_path(), "/some-other-page");
    /// assert!(!history.can_go_back());
    /// ```
    fn replace(&self, path: String);

    /// Navigate to an external URL, leaving the application entirely.
    ///
    /// If a provider cannot do that it should return [`false`], which the
    /// caller reports as a diagnostic.
    #[allow(unused_variables)]
    fn external(&self, url: String) -> bool {
        false
    }

    /// Provide the provider with an update callback.
    ///
    /// Some providers receive URL updates from outside the router (the
    /// browser's back and forward buttons). When such an update arrives they
    /// invoke `callback`, which causes the router to re-synchronize.
    #[allow(unused_variables)]
    fn updater(&self, callback: Arc<dyn Fn()>) {}
}
