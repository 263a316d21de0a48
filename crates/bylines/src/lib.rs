// ABOUTME: Main library entry point for byline extraction and parser resolution.
// ABOUTME: Re-exports the public API: Parser, ParserRegistry, UrlPattern, extractors, errors, loader.

//! Bylines - author-name extraction from HTML with per-site parser routing.
//!
//! This crate pairs a pluggable parser abstraction (an ordered list of
//! extraction strategies tried until one yields author names) with a
//! registry that resolves a URL to the right parser by domain and URL
//! pattern. It is a pure, synchronous decision/extraction layer: no
//! fetching or caching, one call per document/URL pair.
//!
//! # Example
//!
//! ```
//! use bylines::{ParserRegistry, UrlPattern};
//!
//! let mut registry = ParserRegistry::new();
//! registry.register_simple_css_parser(
//!     ["washingtonpost.com"],
//!     vec![UrlPattern::regex(r"/food/").unwrap()],
//!     ".author-name",
//! );
//!
//! let parser = registry
//!     .get_for_url("https://www.washingtonpost.com/lifestyle/food/salad.html", true)
//!     .unwrap();
//! let names = parser.extract(r#"<div class="author-name">Jane Doe</div>"#);
//! assert_eq!(names, vec!["Jane Doe"]);
//! ```

pub mod error;
pub mod extractors;
pub mod loader;
pub mod parser;
pub mod pattern;
pub mod registry;

pub use crate::error::{LoadError, ResolveError};
pub use crate::extractors::{
    extract_from_meta_author, extract_from_og_article_author, extract_with_css_selector,
    split_author_names, BylineExtractor,
};
pub use crate::loader::{load_builtin_registry, registry_from_json, ParserDef};
pub use crate::parser::{Parser, ParserBuilder};
pub use crate::pattern::{UrlPattern, UrlPredicate};
pub use crate::registry::ParserRegistry;
