// ABOUTME: Domain-keyed registry resolving URLs to registered parser instances.
// ABOUTME: Two-stage lookup: domain bucket first, then ordered URL-pattern scan.

//! Parser registration and URL resolution.
//!
//! The registry maps domains to registration-ordered lists of parsers. A URL
//! resolves in two stages: the host (or its registrable domain) selects a
//! bucket, then the bucket is scanned in registration order for the first
//! parser whose pattern matches the full URL. Two parsers can share a domain
//! and specialize by URL shape; ties go to the earlier registration.
//!
//! Registration takes `&mut self` while lookups borrow shared, so the
//! intended populate-then-query lifecycle falls out of the borrow rules.

use std::collections::HashMap;
use std::sync::Arc;

use url::Url;

use crate::error::ResolveError;
use crate::extractors::{compiled, extract_with_css_selector};
use crate::parser::Parser;
use crate::pattern::UrlPattern;

/// Index of registered parsers, keyed by the domains they claim.
#[derive(Debug, Default)]
pub struct ParserRegistry {
    buckets: HashMap<String, Vec<Arc<Parser>>>,
}

impl ParserRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a parser under every domain it claims.
    ///
    /// Returns the shared handle, which compares by identity against later
    /// [`get_for_url`](Self::get_for_url) results. A parser claiming no
    /// domains is accepted but unreachable.
    pub fn register(&mut self, parser: Parser) -> Arc<Parser> {
        self.register_shared(Arc::new(parser))
    }

    /// Registers an already-shared parser instance under every domain it
    /// claims. The same instance lands in one bucket per domain.
    pub fn register_shared(&mut self, parser: Arc<Parser>) -> Arc<Parser> {
        // Compile the configured selector up front so first extraction
        // doesn't pay for selector parsing.
        if let Some(selector) = parser.authors_selector() {
            compiled::get_or_compile(selector);
        }

        for domain in parser.domains() {
            self.buckets
                .entry(domain.clone())
                .or_default()
                .push(Arc::clone(&parser));
        }
        parser
    }

    /// Synthesizes and registers a CSS-selector parser from declarative parts.
    ///
    /// The resulting parser runs exactly one strategy, extraction with
    /// `authors_selector`, and is registered as [`register`](Self::register)
    /// would. This is the fast path for sites that need no hand-written
    /// extraction logic.
    pub fn register_simple_css_parser<D, I>(
        &mut self,
        domains: D,
        patterns: Vec<UrlPattern>,
        authors_selector: impl Into<String>,
    ) -> Arc<Parser>
    where
        D: IntoIterator<Item = I>,
        I: Into<String>,
    {
        let parser = Parser::builder()
            .domains(domains)
            .patterns(patterns)
            .authors_selector(authors_selector)
            .extractor(extract_with_css_selector)
            .build();
        self.register(parser)
    }

    /// Resolves a URL to the first registered parser claiming it.
    ///
    /// With `ignore_subdomain` the lookup key is the registrable domain
    /// (`www.washingtonpost.com` → `washingtonpost.com`, public-suffix
    /// aware); otherwise it is the raw network location, port included.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::InvalidUrl`] if the URL cannot be parsed or has no host.
    /// - [`ResolveError::DomainNotRegistered`] if no parser claims the key.
    /// - [`ResolveError::NoMatchingParser`] if parsers claim the domain but
    ///   none of their patterns match the URL.
    pub fn get_for_url(
        &self,
        url: &str,
        ignore_subdomain: bool,
    ) -> Result<Arc<Parser>, ResolveError> {
        let parsed =
            Url::parse(url).map_err(|e| ResolveError::invalid_url(url, e.to_string()))?;
        let domain = lookup_key(&parsed, ignore_subdomain)?;

        let candidates = match self.buckets.get(&domain) {
            Some(bucket) if !bucket.is_empty() => bucket,
            _ => return Err(ResolveError::domain_not_registered(domain)),
        };

        for candidate in candidates {
            if candidate.matches_url(url) {
                return Ok(Arc::clone(candidate));
            }
        }

        Err(ResolveError::no_matching_parser(url))
    }

    /// Returns the parsers registered for a domain, in registration order.
    ///
    /// `None` when the domain has never been registered; a registered
    /// domain's bucket is never empty.
    pub fn parsers_for_domain(&self, domain: &str) -> Option<&[Arc<Parser>]> {
        self.buckets.get(domain).map(Vec::as_slice)
    }

    /// Returns true if at least one parser claims the domain.
    pub fn contains_domain(&self, domain: &str) -> bool {
        self.buckets.contains_key(domain)
    }

    /// Returns the number of registered domain mappings.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if no parsers are registered.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Computes the bucket key for a URL.
///
/// `ignore_subdomain` keys on the public-suffix-aware registrable domain,
/// falling back to the raw host for names the suffix list doesn't cover
/// (e.g. `localhost`). Otherwise the key is the network location: the host,
/// plus `:port` when the URL carries an explicit non-default port.
fn lookup_key(url: &Url, ignore_subdomain: bool) -> Result<String, ResolveError> {
    let host = url
        .host_str()
        .ok_or_else(|| ResolveError::invalid_url(url.as_str(), "URL has no host"))?;

    if ignore_subdomain {
        return Ok(psl::domain_str(host).unwrap_or(host).to_string());
    }

    Ok(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(url: &str, ignore_subdomain: bool) -> String {
        lookup_key(&Url::parse(url).unwrap(), ignore_subdomain).unwrap()
    }

    #[test]
    fn test_lookup_key_keeps_subdomain_by_default() {
        assert_eq!(key("https://www.washingtonpost.com/x", false), "www.washingtonpost.com");
    }

    #[test]
    fn test_lookup_key_collapses_to_registrable_domain() {
        assert_eq!(key("https://www.washingtonpost.com/x", true), "washingtonpost.com");
        assert_eq!(key("https://washingtonpost.com/x", true), "washingtonpost.com");
    }

    #[test]
    fn test_lookup_key_respects_multi_label_suffix() {
        assert_eq!(key("https://news.bbc.co.uk/x", true), "bbc.co.uk");
    }

    #[test]
    fn test_lookup_key_includes_explicit_port() {
        assert_eq!(key("http://example.com:8080/x", false), "example.com:8080");
        // Default ports are normalized away by the URL parser.
        assert_eq!(key("http://example.com:80/x", false), "example.com");
    }

    #[test]
    fn test_lookup_key_falls_back_to_raw_host() {
        assert_eq!(key("http://localhost/x", true), "localhost");
    }

    #[test]
    fn test_lookup_key_rejects_hostless_url() {
        let url = Url::parse("data:text/plain,hello").unwrap();
        let err = lookup_key(&url, false).unwrap_err();
        assert!(err.is_invalid_url());
    }

    #[test]
    fn test_domain_without_parsers_is_absent() {
        let mut registry = ParserRegistry::new();
        assert!(registry.is_empty());

        // A parser with no domains creates no buckets.
        registry.register(Parser::builder().build());
        assert!(registry.is_empty());
        assert!(!registry.contains_domain("example.com"));
        assert!(registry.parsers_for_domain("example.com").is_none());
    }
}
