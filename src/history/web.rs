use std::cell::RefCell;
use std::sync::Arc;

use gloo::events::EventListener;
use tracing::error;
use wasm_bindgen::JsValue;
use web_sys::{window, Window};

use super::History;

/// A [`History`] provider that integrates with a browser via the
/// [History API](https://developer.mozilla.org/en-US/docs/Web/API/History_API).
///
/// `push` writes a new entry with `pushState` and resets the viewport scroll
/// position to the top-left origin; `replace` uses `replaceState` and leaves
/// the scroll position alone. External navigation assigns `location.href`,
/// replacing the whole document context.
pub struct WebHistory {
    window: Window,
    history: web_sys::History,
    listener_navigation: RefCell<Option<EventListener>>,
}

impl Default for WebHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl WebHistory {
    /// Create a new [`WebHistory`] for the current `window`.
    #[must_use]
    pub fn new() -> Self {
        let window = window().expect("access to `window`");
        let history = window.history().expect("`window` has access to `history`");

        Self {
            window,
            history,
            listener_navigation: RefCell::new(None),
        }
    }
}

impl History for WebHistory {
    fn current_path(&self) -> String {
        self.window
            .location()
            .pathname()
            .unwrap_or_else(|_| String::from("/"))
    }

    fn current_search(&self) -> Option<String> {
        match self.window.location().search() {
            Ok(search) if search.is_empty() => None,
            Ok(search) => Some(search),
            Err(_) => None,
        }
    }

    fn go_back(&self) {
        if let Err(err) = self.history.back() {
            error!(?err, "failed to go back");
        }
    }

    fn go_forward(&self) {
        if let Err(err) = self.history.forward() {
            error!(?err, "failed to go forward");
        }
    }

    fn push(&self, path: String) {
        match self
            .history
            .push_state_with_url(&JsValue::NULL, "", Some(&path))
        {
            Ok(()) => self.window.scroll_to_with_x_and_y(0.0, 0.0),
            Err(err) => error!(?err, %path, "failed to push history entry"),
        }
    }

    fn replace(&self, path: String) {
        if let Err(err) = self
            .history
            .replace_state_with_url(&JsValue::NULL, "", Some(&path))
        {
            error!(?err, %path, "failed to replace history entry");
        }
    }

    fn external(&self, url: String) -> bool {
        match self.window.location().set_href(&url) {
            Ok(()) => true,
            Err(err) => {
                error!(?err, %url, "failed to navigate to external url");
                false
            }
        }
    }

    fn updater(&self, callback: Arc<dyn Fn()>) {
        let listener = EventListener::new(&self.window, "popstate", move |_| (*callback)());
        // the previous listener, if any, unsubscribes on drop
        *self.listener_navigation.borrow_mut() = Some(listener);
    }
}
