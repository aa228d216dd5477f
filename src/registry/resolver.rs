//! Template aggregation and the resolved registry.
//!
//! The aggregator merges per-source load results in specification order
//! into a single name-keyed mapping. When two sources yield the same
//! template name, the later source wins; precedence is strictly
//! positional, so listing a local directory after a remote URL makes the
//! local copy override the remote default. Every overwrite is logged.
//!
//! The resulting [`Registry`] is immutable: the hosting layer only reads
//! from it, and picking up source changes means building a new one.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::{LoadError, Result, TemplarError};
use crate::registry::fetch::HttpFetcher;
use crate::registry::load::LoadResult;
use crate::registry::source::parse_sources;
use crate::registry::template::Template;

/// The immutable collection of resolved templates.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    templates: HashMap<String, Template>,
    order: Vec<String>,
    errors: Vec<LoadError>,
}

impl Registry {
    /// Resolve a source specification string into a registry.
    ///
    /// Parses the specification, loads every descriptor in order, and
    /// aggregates the results. Fails only when every source failed and
    /// nothing at all was loaded.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use templar::registry::{HttpFetcher, Registry};
    ///
    /// let fetcher = HttpFetcher::new();
    /// let registry = Registry::resolve(".github/ISSUE_TEMPLATE", &fetcher).unwrap();
    /// for name in registry.names() {
    ///     println!("{}", name);
    /// }
    /// ```
    pub fn resolve(spec: &str, fetcher: &HttpFetcher) -> Result<Registry> {
        let descriptors = parse_sources(spec);
        let results = descriptors
            .iter()
            .map(|descriptor| {
                tracing::debug!(
                    "Loading templates from {} ({})",
                    descriptor.raw,
                    descriptor.kind
                );
                descriptor.load(fetcher)
            })
            .collect();
        aggregate(results)
    }

    /// Get a template by name.
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Template names in insertion (source) order.
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(|name| name.as_str()).collect()
    }

    /// Templates in insertion (source) order.
    pub fn templates(&self) -> impl Iterator<Item = &Template> {
        self.order
            .iter()
            .filter_map(|name| self.templates.get(name))
    }

    /// Load errors recorded during resolution, in occurrence order.
    pub fn errors(&self) -> &[LoadError] {
        &self.errors
    }

    /// Number of resolved templates.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the registry holds no templates.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Merge per-source load results, in source order, into a registry.
///
/// Returns [`TemplarError::ResolutionFailed`] only when the mapping ends
/// up empty AND at least one error was recorded — a mix of successes and
/// failures is a successful resolution with recorded warnings.
pub fn aggregate(results: Vec<LoadResult>) -> Result<Registry> {
    let mut templates: HashMap<String, Template> = HashMap::new();
    let mut order = Vec::new();
    let mut errors = Vec::new();

    for result in results {
        for template in result.templates {
            match templates.entry(template.name.clone()) {
                Entry::Occupied(mut slot) => {
                    tracing::warn!(
                        "Template '{}' from {} overrides earlier definition from {}",
                        template.name,
                        template.origin,
                        slot.get().origin
                    );
                    slot.insert(template);
                }
                Entry::Vacant(slot) => {
                    order.push(template.name.clone());
                    slot.insert(template);
                }
            }
        }
        for error in result.errors {
            tracing::warn!("Failed to load templates: {}", error);
            errors.push(error);
        }
    }

    if templates.is_empty() && !errors.is_empty() {
        return Err(TemplarError::ResolutionFailed { errors });
    }

    Ok(Registry {
        templates,
        order,
        errors,
    })
}
