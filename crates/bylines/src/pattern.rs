// ABOUTME: URL pattern matchers used to decide whether a parser claims a URL.
// ABOUTME: A pattern is either a regex searched anywhere in the URL or an arbitrary predicate.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

/// Predicate form of a URL pattern.
pub type UrlPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A matcher deciding whether a parser applies to a given URL.
///
/// Regex patterns use unanchored search, so a pattern matches anywhere in
/// the URL string, query strings and fragments included. Registered
/// real-world patterns depend on this looseness; do not anchor.
pub enum UrlPattern {
    /// A regex tested with substring search against the full URL.
    Regex(Regex),
    /// An arbitrary predicate over the full URL.
    Predicate(UrlPredicate),
}

impl UrlPattern {
    /// Compiles a regex pattern.
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        Ok(UrlPattern::Regex(Regex::new(pattern)?))
    }

    /// Wraps a predicate function as a pattern.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        UrlPattern::Predicate(Arc::new(f))
    }

    /// Returns true if this pattern matches the URL.
    pub fn matches(&self, url: &str) -> bool {
        match self {
            UrlPattern::Regex(re) => re.is_match(url),
            UrlPattern::Predicate(f) => f(url),
        }
    }
}

impl From<Regex> for UrlPattern {
    fn from(re: Regex) -> Self {
        UrlPattern::Regex(re)
    }
}

impl Clone for UrlPattern {
    fn clone(&self) -> Self {
        match self {
            UrlPattern::Regex(re) => UrlPattern::Regex(re.clone()),
            UrlPattern::Predicate(f) => UrlPattern::Predicate(Arc::clone(f)),
        }
    }
}

impl fmt::Debug for UrlPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlPattern::Regex(re) => f.debug_tuple("Regex").field(&re.as_str()).finish(),
            UrlPattern::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}
