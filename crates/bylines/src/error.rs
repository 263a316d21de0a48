// ABOUTME: Error types for parser resolution and definition loading.
// ABOUTME: Provides ResolveError for URL lookups and LoadError for JSON definition parsing.

use thiserror::Error;

/// Errors that can occur while resolving a URL to a registered parser.
///
/// Extraction itself never fails: a parser that finds no byline returns an
/// empty list. Only the registry lookup is fallible.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The URL could not be parsed, or has no host component to key on.
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// No parser is registered for the computed lookup domain.
    #[error("no parser registered for domain: {domain}")]
    DomainNotRegistered { domain: String },

    /// Parsers exist for the domain, but none of their patterns match the URL.
    #[error("no registered parser matches URL: {url}")]
    NoMatchingParser { url: String },
}

impl ResolveError {
    /// Creates an InvalidUrl error.
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        ResolveError::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Creates a DomainNotRegistered error.
    pub fn domain_not_registered(domain: impl Into<String>) -> Self {
        ResolveError::DomainNotRegistered {
            domain: domain.into(),
        }
    }

    /// Creates a NoMatchingParser error.
    pub fn no_matching_parser(url: impl Into<String>) -> Self {
        ResolveError::NoMatchingParser { url: url.into() }
    }

    /// Returns true if this is an InvalidUrl error.
    pub fn is_invalid_url(&self) -> bool {
        matches!(self, ResolveError::InvalidUrl { .. })
    }

    /// Returns true if this is a DomainNotRegistered error.
    pub fn is_domain_not_registered(&self) -> bool {
        matches!(self, ResolveError::DomainNotRegistered { .. })
    }

    /// Returns true if this is a NoMatchingParser error.
    pub fn is_no_matching_parser(&self) -> bool {
        matches!(self, ResolveError::NoMatchingParser { .. })
    }
}

/// Errors that can occur while loading declarative parser definitions.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The definition data is not valid JSON of the expected shape.
    #[error("failed to parse parser definitions: {0}")]
    Json(#[from] serde_json::Error),

    /// A definition carries a URL pattern that is not a valid regex.
    #[error("invalid URL pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
