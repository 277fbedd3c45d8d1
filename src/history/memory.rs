use std::cell::RefCell;
use std::sync::Arc;

use tracing::error;
use url::Url;

use super::History;

struct MemoryHistoryState {
    current: Url,
    past: Vec<Url>,
    future: Vec<Url>,
}

/// A [`History`] provider that stores all navigation information in memory.
///
/// Back and forward traversal invokes the registered update callback, the way
/// a browser fires `popstate`, which makes this provider the test double for
/// everything the router does.
pub struct MemoryHistory {
    state: RefCell<MemoryHistoryState>,
    updater: RefCell<Option<Arc<dyn Fn()>>>,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::with_initial_path("/")
    }
}

impl MemoryHistory {
    /// Create a [`MemoryHistory`] starting at `path`.
    ///
    /// ```rust
    /// # use signpost::history::{History, MemoryHistory};
    /// let history = MemoryHistory::with_initial_path("/home?tab=1");
    /// assert_eq!(history.current_path(), "/home");
    /// assert_eq!(history.current_search(), Some(String::from("?tab=1")));
    /// ```
    #[must_use]
    pub fn with_initial_path(path: &str) -> Self {
        let base = Url::parse("signpost://index.html/").unwrap();
        let current = base.join(path).unwrap_or_else(|_| base.clone());
        Self {
            state: RefCell::new(MemoryHistoryState {
                current,
                past: Vec::new(),
                future: Vec::new(),
            }),
            updater: RefCell::new(None),
        }
    }

    fn notify(&self) {
        let updater = self.updater.borrow().clone();
        if let Some(callback) = updater {
            callback();
        }
    }
}

impl History for MemoryHistory {
    fn current_path(&self) -> String {
        self.state.borrow().current.path().to_string()
    }

    fn current_search(&self) -> Option<String> {
        self.state
            .borrow()
            .current
            .query()
            .map(|query| format!("?{query}"))
    }

    fn can_go_back(&self) -> bool {
        !self.state.borrow().past.is_empty()
    }

    fn go_back(&self) {
        {
            let mut state = self.state.borrow_mut();
            match state.past.pop() {
                Some(last) => {
                    let old = std::mem::replace(&mut state.current, last);
                    state.future.push(old);
                }
                None => return,
            }
        }
        self.notify();
    }

    fn can_go_forward(&self) -> bool {
        !self.state.borrow().future.is_empty()
    }

    fn go_forward(&self) {
        {
            let mut state = self.state.borrow_mut();
            match state.future.pop() {
                Some(next) => {
                    let old = std::mem::replace(&mut state.current, next);
                    state.past.push(old);
                }
                None => return,
            }
        }
        self.notify();
    }

    fn push(&self, path: String) {
        if path.starts_with("//") {
            error!(%path, r#"cannot navigate to paths starting with "//""#);
            return;
        }

        let mut state = self.state.borrow_mut();
        match state.current.join(&path) {
            Ok(url) => {
                // don't push the same url twice
                if url == state.current {
                    return;
                }
                let old = std::mem::replace(&mut state.current, url);
                state.past.push(old);
                state.future.clear();
            }
            Err(err) => error!(%path, %err, "failed to resolve push target"),
        }
    }

    fn replace(&self, path: String) {
        if path.starts_with("//") {
            error!(%path, r#"cannot navigate to paths starting with "//""#);
            return;
        }

        let mut state = self.state.borrow_mut();
        match state.current.join(&path) {
            Ok(url) => state.current = url,
            Err(err) => error!(%path, %err, "failed to resolve replace target"),
        }
    }

    fn updater(&self, callback: Arc<dyn Fn()>) {
        *self.updater.borrow_mut() = Some(callback);
    }
}
