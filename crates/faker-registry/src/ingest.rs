//! Normalization of the raw generator catalog into canonical descriptors.
//!
//! Raw entries carry a library-native key, a display label and a raw
//! category. Ingestion turns each into a [`Descriptor`] whose name is derived
//! from the label, applying the [`IngestionRules`] tables in a fixed order:
//! skip, label prefix, key derivation, name fix-up, category reassignment,
//! category rename.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::warn;

use crate::descriptor::{Descriptor, GenerateFn, OutputKind, ParamKind, Parameter};

/// One raw parameter declaration, as written in the source catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawParam {
    /// Parameter name passed to the generator.
    pub name: &'static str,
    /// Declared type.
    pub kind: ParamKind,
    /// Default literal; empty for none.
    pub default: &'static str,
    /// Whether the parameter may be omitted without a default.
    pub optional: bool,
    /// Documentation text.
    pub description: &'static str,
}

/// One raw generator entry, keyed by its library-native name.
#[derive(Clone, Copy)]
pub struct RawEntry {
    /// Library-native key, unique within a raw catalog.
    pub native: &'static str,
    /// Display label the canonical name is derived from.
    pub label: &'static str,
    /// Raw category before reassignment and renaming.
    pub category: &'static str,
    /// Documentation text.
    pub description: &'static str,
    /// Example output, documentation only.
    pub example: &'static str,
    /// Declared output shape.
    pub output: OutputKind,
    /// Ordered parameter declarations.
    pub params: &'static [RawParam],
    /// The generator function.
    pub generate: GenerateFn,
}

/// Static tables steering ingestion.
///
/// Every table is data rather than logic; extending the raw catalog with a
/// name that would collide means adding a row here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionRules {
    /// Native keys dropped entirely.
    pub skip: &'static [&'static str],
    /// Native key to prefix injected before the display label.
    pub label_prefixes: &'static [(&'static str, &'static str)],
    /// Derived name to corrected name.
    pub name_fixups: &'static [(&'static str, &'static str)],
    /// Final name to forced raw category.
    pub category_overrides: &'static [(&'static str, &'static str)],
    /// Raw category to public category.
    pub category_renames: &'static [(&'static str, &'static str)],
}

impl IngestionRules {
    /// Rules that change nothing: names come straight from labels.
    pub const IDENTITY: Self = Self {
        skip: &[],
        label_prefixes: &[],
        name_fixups: &[],
        category_overrides: &[],
        category_renames: &[],
    };
}

/// Folds a display label into a lower-camel key.
///
/// The label is split on every non-alphanumeric character; the first word
/// is lower-cased and each later word keeps only its first character upper
/// case.
///
/// # Example
///
/// ```
/// use faker_registry::derive_key;
///
/// assert_eq!(derive_key("Credit Card CVV"), "creditCardCvv");
/// assert_eq!(derive_key("IPv4 Address"), "ipv4Address");
/// assert_eq!(derive_key("user-agent"), "userAgent");
/// ```
#[must_use]
pub fn derive_key(label: &str) -> String {
    let mut key = String::with_capacity(label.len());
    let words = label
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty());

    for (index, word) in words.enumerate() {
        if index == 0 {
            key.extend(word.chars().flat_map(char::to_lowercase));
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            key.extend(first.to_uppercase());
            key.extend(chars.flat_map(char::to_lowercase));
        }
    }

    key
}

/// Applies `rules` to `entries`, returning descriptors keyed by canonical
/// name.
///
/// Entries are visited in native-key order. When two entries derive the same
/// name the first is kept and the collision is logged.
pub(crate) fn ingest(
    entries: &[RawEntry],
    rules: &IngestionRules,
) -> BTreeMap<String, Arc<Descriptor>> {
    let mut ordered: Vec<&RawEntry> = entries
        .iter()
        .filter(|entry| !rules.skip.contains(&entry.native))
        .collect();
    ordered.sort_by_key(|entry| entry.native);

    let mut by_name = BTreeMap::new();
    let mut origins: BTreeMap<String, &'static str> = BTreeMap::new();

    for entry in ordered {
        let name = canonical_name(entry, rules);
        if name.is_empty() {
            warn!(native = entry.native, "raw entry has no usable label; skipping");
            continue;
        }
        if let Some(kept) = origins.get(&name) {
            warn!(
                name = %name,
                kept = *kept,
                dropped = entry.native,
                "derived function name collides; keeping first entry"
            );
            continue;
        }

        let raw_category = lookup(rules.category_overrides, &name).unwrap_or(entry.category);
        let category = lookup(rules.category_renames, raw_category).unwrap_or(raw_category);
        let descriptor = Descriptor::new(
            name.clone(),
            category.to_owned(),
            entry.description.to_owned(),
            entry.example.to_owned(),
            entry.output,
            entry.params.iter().map(to_parameter).collect(),
            entry.generate,
        );

        origins.insert(name.clone(), entry.native);
        by_name.insert(name, Arc::new(descriptor));
    }

    by_name
}

fn canonical_name(entry: &RawEntry, rules: &IngestionRules) -> String {
    let derived = match lookup(rules.label_prefixes, entry.native) {
        Some(prefix) => derive_key(&format!("{prefix} {}", entry.label)),
        None => derive_key(entry.label),
    };

    match lookup(rules.name_fixups, &derived) {
        Some(fixed) => fixed.to_owned(),
        None => derived,
    }
}

fn to_parameter(raw: &RawParam) -> Parameter {
    Parameter::new(raw.name, raw.kind, raw.default, raw.optional, raw.description)
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| *to)
}
