// ABOUTME: Declarative parser definitions and registry loading from JSON.
// ABOUTME: Provides registry_from_json() and the embedded builtin parser corpus.

//! Declarative parser definitions.
//!
//! Sites that only need a CSS selector don't warrant hand-written code: a
//! [`ParserDef`] captures the domains, URL patterns, and authors selector as
//! data, and a whole registry can be materialized from a JSON array of
//! definitions. The embedded corpus in `data/builtin_parsers.json` covers a
//! starter set of sites.

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::extractors::extract_with_css_selector;
use crate::parser::Parser;
use crate::pattern::UrlPattern;
use crate::registry::ParserRegistry;

/// Embedded JSON containing the builtin parser definitions.
const BUILTIN_PARSERS_JSON: &str = include_str!("../data/builtin_parsers.json");

/// Declarative definition of a CSS-selector parser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserDef {
    /// Exact-match domains the parser claims.
    pub domains: Vec<String>,
    /// URL pattern regexes, tried in order with substring search.
    #[serde(default)]
    pub patterns: Vec<String>,
    /// CSS selector for author nodes.
    pub authors_selector: String,
}

impl ParserDef {
    /// Builds the parser this definition describes.
    ///
    /// # Errors
    ///
    /// [`LoadError::Pattern`] if any pattern is not a valid regex.
    pub fn into_parser(self) -> Result<Parser, LoadError> {
        let mut patterns = Vec::with_capacity(self.patterns.len());
        for pattern in self.patterns {
            let compiled = UrlPattern::regex(&pattern).map_err(|source| LoadError::Pattern {
                pattern: pattern.clone(),
                source,
            })?;
            patterns.push(compiled);
        }

        Ok(Parser::builder()
            .domains(self.domains)
            .patterns(patterns)
            .authors_selector(self.authors_selector)
            .extractor(extract_with_css_selector)
            .build())
    }
}

/// Materializes a registry from a JSON array of [`ParserDef`]s.
///
/// Definitions register in array order, so earlier entries win pattern ties
/// on a shared domain.
pub fn registry_from_json(json: &str) -> Result<ParserRegistry, LoadError> {
    let defs: Vec<ParserDef> = serde_json::from_str(json)?;

    let mut registry = ParserRegistry::new();
    for def in defs {
        registry.register(def.into_parser()?);
    }
    Ok(registry)
}

/// Loads the builtin parser registry from embedded JSON.
///
/// # Panics
///
/// Panics if the embedded JSON is malformed or carries an invalid pattern.
pub fn load_builtin_registry() -> ParserRegistry {
    registry_from_json(BUILTIN_PARSERS_JSON).expect("failed to parse builtin parser definitions")
}
