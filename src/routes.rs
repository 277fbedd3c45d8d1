//! Route declarations and first-match route tables.

use tracing::{debug, error, warn};

use crate::matcher::{match_path, split_pattern, ExtractedParam, MatchResult};
use crate::router::Router;

/// The callback rendering a matched route's view.
///
/// Receives the extracted parameter, if the pattern captured one, and returns
/// whatever the surrounding UI layer renders. The router imposes nothing on
/// `V`.
pub type ViewFn<V> = Box<dyn Fn(Option<ExtractedParam>) -> V>;

/// A single route declaration: a pattern plus what to do when it matches.
///
/// Built fluently and immutable afterwards:
///
/// ```rust
/// # use signpost::Route;
/// let routes: Vec<Route<String>> = vec![
///     Route::new("/about").exact().view(|_| String::from("about")),
///     Route::new("/user/:id").view(|p| format!("user {}", p.unwrap().value)),
///     Route::new("/old-home").exact().redirect_to("/"),
/// ];
/// ```
///
/// A declaration is expected to carry a view or a redirect target. If both
/// are supplied the redirect takes precedence and the view is never rendered;
/// supplying neither is a configuration error, reported when the route
/// matches.
pub struct Route<V> {
    pattern: String,
    exact: bool,
    view: Option<ViewFn<V>>,
    redirect_to: Option<String>,
}

impl<V> Route<V> {
    /// Start a declaration for `pattern`. Matching defaults to prefix mode;
    /// see [`exact`](Self::exact).
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            exact: false,
            view: None,
            redirect_to: None,
        }
    }

    /// Require the path to equal the pattern exactly. Exact routes never
    /// extract a parameter.
    #[must_use]
    pub fn exact(mut self) -> Self {
        self.exact = true;
        self
    }

    /// Render `view` when this route matches.
    #[must_use]
    pub fn view(mut self, view: impl Fn(Option<ExtractedParam>) -> V + 'static) -> Self {
        self.view = Some(Box::new(view));
        self
    }

    /// Replace the current location with `target` when this route matches.
    ///
    /// Redirects are performed as a _replace_ operation, so the original path
    /// won't be part of the history. Takes precedence over
    /// [`view`](Self::view) if both are configured.
    #[must_use]
    pub fn redirect_to(mut self, target: impl Into<String>) -> Self {
        self.redirect_to = Some(target.into());
        self
    }

    /// The declared pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Match this declaration against `path` without rendering anything.
    #[must_use]
    pub fn matches(&self, path: &str) -> MatchResult {
        match_path(&self.pattern, self.exact, path)
    }

    /// Render or redirect for this declaration in isolation.
    ///
    /// Usable standalone, outside a [`RouteSet`], for ad-hoc conditional
    /// rendering. Returns the rendered view on a match with a configured
    /// view; returns [`None`] and replaces the location on a match with a
    /// redirect target; returns [`None`] without side effects otherwise. A
    /// match on a declaration with neither view nor redirect is reported as
    /// a diagnostic.
    pub fn render(&self, router: &Router) -> Option<V> {
        let location = router.location()?;

        let MatchResult::Matched { param } = self.matches(&location.path) else {
            return None;
        };

        if let Some(target) = &self.redirect_to {
            debug!(pattern = %self.pattern, target = %target, "route redirect");
            router.navigator().replace(target.clone());
            return None;
        }

        match &self.view {
            Some(view) => Some(view(param)),
            None => {
                error!(
                    pattern = %self.pattern,
                    "route declares neither a view nor a redirect target"
                );
                None
            }
        }
    }
}

/// An ordered list of [`Route`]s plus a not-found target.
///
/// Declaration order is significant: the first structurally matching route
/// wins, so more specific patterns must precede more general ones. Declared
/// once per screen region and not mutated at runtime.
pub struct RouteSet<V> {
    routes: Vec<Route<V>>,
    not_found_target: String,
}

impl<V> RouteSet<V> {
    /// Create an empty route table redirecting unmatched paths to
    /// `not_found_target`.
    ///
    /// The table does not verify that `not_found_target` itself matches one
    /// of its routes. Point it at a declaration that always matches (a
    /// catch-all or an exact route for the target), otherwise every
    /// evaluation of an unmatched path replaces the location with a path
    /// that is itself unmatched.
    #[must_use]
    pub fn new(not_found_target: impl Into<String>) -> Self {
        Self {
            routes: Vec::new(),
            not_found_target: not_found_target.into(),
        }
    }

    /// Append `route` to the table.
    #[must_use]
    pub fn route(mut self, route: Route<V>) -> Self {
        if !route.exact {
            let (_, name) = split_pattern(&route.pattern);
            if name.is_empty() {
                warn!(
                    pattern = %route.pattern,
                    "prefix route without a parameter name, the remainder will be bound to an empty key"
                );
            }
        }

        self.routes.push(route);
        self
    }

    /// Select and render the view for the current location.
    ///
    /// Iterates the declarations in order and delegates to the first
    /// structural match ([`Route::render`], so redirect and missing-handler
    /// handling apply). If the location is known and nothing matches, the
    /// location is replaced with the not-found target and nothing is
    /// rendered for this cycle; the re-evaluation after that change is
    /// expected to match. While the location is still unset, nothing is
    /// rendered and no redirect is issued.
    pub fn evaluate(&self, router: &Router) -> Option<V> {
        let location = router.location()?;

        for route in &self.routes {
            if route.matches(&location.path).is_match() {
                return route.render(router);
            }
        }

        debug!(
            path = %location.path,
            target = %self.not_found_target,
            "no route matched, replacing with not-found target"
        );
        router.navigator().replace(self.not_found_target.clone());
        None
    }
}
