//! The immutable name and category index over all descriptors.
//!
//! A [`Registry`] is built once from a raw catalog and never mutated. The
//! process-wide instance behind [`Registry::global`] is initialised by a
//! `OnceLock`, so concurrent first callers all observe the same completed
//! build and later reads take no lock.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog;
use crate::descriptor::Descriptor;
use crate::ingest::{IngestionRules, RawEntry, ingest};

/// Name of the synthetic category holding every function.
pub const ZEN_CATEGORY: &str = "zen";

/// Functions of one category, keyed by canonical name.
pub type FunctionMap = BTreeMap<String, Arc<Descriptor>>;

static GLOBAL: OnceLock<Arc<Registry>> = OnceLock::new();

/// Name and category index over canonical descriptors.
///
/// Every category map shares its `Arc<Descriptor>` values with the by-name
/// map; there is exactly one descriptor allocation per name.
#[derive(Debug)]
pub struct Registry {
    by_name: FunctionMap,
    by_category: BTreeMap<String, FunctionMap>,
    category_names: Vec<String>,
}

impl Registry {
    /// Returns the process-wide registry built from the built-in catalog.
    ///
    /// The first call performs ingestion; every other call, concurrent or
    /// later, returns a handle to that same registry.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use faker_registry::Registry;
    ///
    /// let first = Registry::global();
    /// let second = Registry::global();
    /// assert!(Arc::ptr_eq(&first, &second));
    /// assert!(first.lookup_by_name("firstName").is_some());
    /// ```
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(GLOBAL.get_or_init(|| {
            Arc::new(Self::build(&catalog::entries(), &catalog::RULES))
        }))
    }

    /// Builds a registry from an arbitrary raw catalog.
    #[must_use]
    pub fn build(entries: &[RawEntry], rules: &IngestionRules) -> Self {
        let mut by_name = ingest(entries, rules);
        by_name.retain(|name, descriptor| {
            let reserved = descriptor.category() == ZEN_CATEGORY;
            if reserved {
                warn!(
                    function = %name,
                    category = ZEN_CATEGORY,
                    "category name is reserved; function dropped"
                );
            }
            !reserved
        });

        let mut by_category: BTreeMap<String, FunctionMap> = BTreeMap::new();
        for (name, descriptor) in &by_name {
            by_category
                .entry(descriptor.category().to_owned())
                .or_default()
                .insert(name.clone(), Arc::clone(descriptor));
        }
        by_category.insert(ZEN_CATEGORY.to_owned(), by_name.clone());

        let category_names: Vec<String> = by_category.keys().cloned().collect();

        debug!(
            functions = by_name.len(),
            categories = category_names.len(),
            "faker registry built"
        );

        Self {
            by_name,
            by_category,
            category_names,
        }
    }

    /// Looks up a descriptor by canonical name.
    #[must_use]
    pub fn lookup_by_name(&self, name: &str) -> Option<&Arc<Descriptor>> {
        self.by_name.get(name)
    }

    /// Looks up the functions of one category.
    #[must_use]
    pub fn lookup_category(&self, category: &str) -> Option<&FunctionMap> {
        self.by_category.get(category)
    }

    pub(crate) fn category_entry(&self, category: &str) -> Option<(&str, &FunctionMap)> {
        self.by_category
            .get_key_value(category)
            .map(|(name, functions)| (name.as_str(), functions))
    }

    /// Returns all category names, sorted, including [`ZEN_CATEGORY`].
    #[must_use]
    pub fn category_names(&self) -> &[String] {
        &self.category_names
    }

    /// Returns every descriptor keyed by canonical name.
    #[must_use]
    pub const fn functions(&self) -> &FunctionMap {
        &self.by_name
    }

    /// Returns the machine-readable catalog export.
    ///
    /// The export is the by-name map; its serialized shape is consumed by
    /// documentation and typing generators.
    #[must_use]
    pub const fn catalog(&self) -> Catalog<'_> {
        Catalog {
            functions: &self.by_name,
        }
    }
}

/// Serializable view of the by-name index.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct Catalog<'r> {
    functions: &'r FunctionMap,
}

impl Catalog<'_> {
    /// Renders the catalog as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
