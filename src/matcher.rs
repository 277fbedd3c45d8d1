//! Pattern matching for route declarations.
//!
//! A pattern is split at its first `:` into a literal *prefix* and a
//! *parameter name*. Matching a path first drops everything from the first
//! `#` on, since fragments are never part of routing. An exact pattern must
//! then equal the truncated path byte-for-byte; a prefix pattern must be a
//! prefix of it, and the remainder becomes the value of the single extracted
//! parameter.

/// A named value captured from the path by a prefix pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedParam {
    /// The name declared after the `:` in the pattern. May be empty if the
    /// pattern declared no parameter.
    pub name: String,
    /// Everything in the (fragment-truncated) path after the pattern prefix.
    pub value: String,
}

/// The outcome of matching a single pattern against a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchResult {
    /// The pattern does not apply to the path.
    NoMatch,
    /// The pattern applies. Exact patterns never extract a parameter.
    Matched {
        /// The captured parameter, for prefix patterns.
        param: Option<ExtractedParam>,
    },
}

impl MatchResult {
    /// Returns [`true`] for [`Matched`](MatchResult::Matched).
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}

/// Split a pattern into its literal prefix and parameter name.
///
/// Without a `:` the whole pattern is the prefix and the parameter name is
/// empty.
pub(crate) fn split_pattern(pattern: &str) -> (&str, &str) {
    match pattern.split_once(':') {
        Some((prefix, name)) => (prefix, name),
        None => (pattern, ""),
    }
}

/// Match `path` against `pattern`.
///
/// ```rust
/// use signpost::{match_path, MatchResult};
///
/// assert!(match_path("/about", true, "/about#team").is_match());
/// assert!(!match_path("/about", true, "/about/us").is_match());
///
/// let result = match_path("/user/:id", false, "/user/42");
/// match result {
///     MatchResult::Matched { param: Some(param) } => {
///         assert_eq!(param.name, "id");
///         assert_eq!(param.value, "42");
///     }
///     _ => panic!("expected a parameter match"),
/// }
/// ```
#[must_use]
pub fn match_path(pattern: &str, exact: bool, path: &str) -> MatchResult {
    // fragment content never participates in matching
    let path = path.split('#').next().unwrap_or_default();

    if exact {
        return match path == pattern {
            true => MatchResult::Matched { param: None },
            false => MatchResult::NoMatch,
        };
    }

    let (prefix, name) = split_pattern(pattern);
    match path.strip_prefix(prefix) {
        Some(rest) => MatchResult::Matched {
            param: Some(ExtractedParam {
                name: name.to_string(),
                value: rest.to_string(),
            }),
        },
        None => MatchResult::NoMatch,
    }
}
