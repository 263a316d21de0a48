// ABOUTME: Byline extraction strategies tried by parsers in priority order.
// ABOUTME: Includes meta-tag, OpenGraph, and CSS-selector-based author extraction.

//! Byline extraction strategies.
//!
//! Every strategy shares one shape: given the parsed document, the original
//! raw HTML, and the owning [`Parser`], return zero or more author-name
//! strings. "Nothing found" is the empty vector, never an error, so a parser
//! can fall through to its next strategy.
//!
//! The provided strategies are stateless and may be reordered or shared
//! across parser instances. Site-specific strategies are ordinary closures
//! injected through [`ParserBuilder::extractor`](crate::ParserBuilder::extractor).

use std::sync::Arc;

use scraper::Html;

use crate::parser::Parser;

pub mod compiled;

use crate::extractors::compiled::get_or_compile;

/// A byline extraction strategy.
///
/// Receives `(document, raw_html, parser)`; the parser argument gives
/// strategies access to configuration such as the authors selector.
pub type BylineExtractor = Arc<dyn Fn(&Html, &str, &Parser) -> Vec<String> + Send + Sync>;

const META_AUTHOR: &str = r#"meta[name="author"]"#;
const OG_ARTICLE_AUTHOR: &str = r#"meta[property="article:author"]"#;

/// Extracts the `content` attribute of every `<meta name="author">` tag,
/// in document order.
pub fn extract_from_meta_author(doc: &Html, _html_document: &str, _parser: &Parser) -> Vec<String> {
    meta_content_values(doc, META_AUTHOR)
}

/// Extracts the `content` attribute of every OpenGraph
/// `<meta property="article:author">` tag, in document order.
pub fn extract_from_og_article_author(
    doc: &Html,
    _html_document: &str,
    _parser: &Parser,
) -> Vec<String> {
    meta_content_values(doc, OG_ARTICLE_AUTHOR)
}

/// Extracts author names using the owning parser's configured CSS selector.
///
/// Each matched node contributes its full descendant text, post-processed by
/// [`split_author_names`]. A parser without a selector, or with a selector
/// that fails to compile, yields no names.
pub fn extract_with_css_selector(
    doc: &Html,
    _html_document: &str,
    parser: &Parser,
) -> Vec<String> {
    let selector = match parser.authors_selector() {
        Some(s) => s,
        None => return Vec::new(),
    };
    let selector = match get_or_compile(selector) {
        Some(s) => s,
        None => return Vec::new(),
    };

    doc.select(&selector)
        .flat_map(|el| split_author_names(&el.text().collect::<String>()))
        .collect()
}

/// Splits a combined byline string into individual author names.
///
/// Hook for breaking up strings like "Jane Doe and John Smith". The current
/// implementation trims surrounding whitespace and returns the value unsplit.
pub fn split_author_names(value: &str) -> Vec<String> {
    vec![value.trim().to_string()]
}

/// Collects the `content` attribute of every element matching `selector`.
/// Elements without the attribute contribute nothing; values pass through verbatim.
fn meta_content_values(doc: &Html, selector: &str) -> Vec<String> {
    let selector = match get_or_compile(selector) {
        Some(s) => s,
        None => return Vec::new(),
    };

    doc.select(&selector)
        .filter_map(|el| el.value().attr("content").map(str::to_string))
        .collect()
}
