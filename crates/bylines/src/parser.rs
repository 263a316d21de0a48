// ABOUTME: Parser type pairing ordered byline extractors with domain and URL-pattern claims.
// ABOUTME: ParserBuilder provides a fluent API for assembling parser instances.

//! Parser construction and extraction orchestration.
//!
//! A [`Parser`] owns an ordered list of extraction strategies and the
//! domain/URL-pattern claims the registry routes on. Extraction tries each
//! strategy in declared order and stops at the first non-empty result.

use std::fmt;
use std::sync::Arc;

use scraper::Html;

use crate::extractors::BylineExtractor;
use crate::pattern::UrlPattern;

/// A configured byline extraction strategy for one or more sites.
///
/// Immutable once built; construct through [`Parser::builder`]. Parsers are
/// held by the registry behind `Arc`, so one instance can serve several
/// domains without duplication.
pub struct Parser {
    domains: Vec<String>,
    patterns: Vec<UrlPattern>,
    extractors: Vec<BylineExtractor>,
    authors_selector: Option<String>,
}

impl Parser {
    /// Creates a builder for assembling a parser.
    pub fn builder() -> ParserBuilder {
        ParserBuilder::new()
    }

    /// The exact-match domains this parser claims. Empty if unset.
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    /// The URL patterns this parser claims, in declared order. Empty if unset.
    pub fn patterns(&self) -> &[UrlPattern] {
        &self.patterns
    }

    /// The extraction strategies, in the order they are tried. Empty if unset.
    pub fn extractors(&self) -> &[BylineExtractor] {
        &self.extractors
    }

    /// The CSS selector consumed by the CSS-selector extraction strategy.
    pub fn authors_selector(&self) -> Option<&str> {
        self.authors_selector.as_deref()
    }

    /// Returns true if any of this parser's patterns matches the URL.
    ///
    /// A parser with no patterns matches no URL.
    pub fn matches_url(&self, url: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(url))
    }

    /// Attempts to extract author names from an HTML document.
    ///
    /// The document is parsed leniently (malformed markup is tolerated), then
    /// each extractor runs in declared order; the first non-empty result is
    /// returned. An empty vector means no byline was found; this operation
    /// never fails.
    pub fn extract(&self, html_document: &str) -> Vec<String> {
        let doc = Html::parse_document(html_document);

        for extractor in &self.extractors {
            let author_names = extractor(&doc, html_document, self);
            if !author_names.is_empty() {
                return author_names;
            }
        }

        Vec::new()
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("domains", &self.domains)
            .field("patterns", &self.patterns)
            .field("extractors", &self.extractors.len())
            .field("authors_selector", &self.authors_selector)
            .finish()
    }
}

/// Builder for [`Parser`] instances.
#[derive(Default)]
pub struct ParserBuilder {
    domains: Vec<String>,
    patterns: Vec<UrlPattern>,
    extractors: Vec<BylineExtractor>,
    authors_selector: Option<String>,
}

impl ParserBuilder {
    /// Creates a builder with no claims and no extractors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a domain this parser claims.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domains.push(domain.into());
        self
    }

    /// Adds several domains this parser claims.
    pub fn domains<D, I>(mut self, domains: D) -> Self
    where
        D: IntoIterator<Item = I>,
        I: Into<String>,
    {
        self.domains.extend(domains.into_iter().map(Into::into));
        self
    }

    /// Adds a URL pattern this parser claims.
    pub fn pattern(mut self, pattern: UrlPattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    /// Adds several URL patterns, preserving order.
    pub fn patterns(mut self, patterns: impl IntoIterator<Item = UrlPattern>) -> Self {
        self.patterns.extend(patterns);
        self
    }

    /// Appends an extraction strategy. Order matters: strategies run in the
    /// order added, and the first non-empty result wins.
    pub fn extractor<F>(mut self, extractor: F) -> Self
    where
        F: Fn(&Html, &str, &Parser) -> Vec<String> + Send + Sync + 'static,
    {
        self.extractors.push(Arc::new(extractor));
        self
    }

    /// Sets the CSS selector consumed by the CSS-selector strategy.
    pub fn authors_selector(mut self, selector: impl Into<String>) -> Self {
        self.authors_selector = Some(selector.into());
        self
    }

    /// Finalizes the parser.
    pub fn build(self) -> Parser {
        Parser {
            domains: self.domains,
            patterns: self.patterns,
            extractors: self.extractors,
            authors_selector: self.authors_selector,
        }
    }
}

impl fmt::Debug for ParserBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserBuilder")
            .field("domains", &self.domains)
            .field("patterns", &self.patterns)
            .field("extractors", &self.extractors.len())
            .field("authors_selector", &self.authors_selector)
            .finish()
    }
}
