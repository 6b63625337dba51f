//! The built-in raw generator catalog and its ingestion rules.
//!
//! Entries are grouped by the module that implements them and keyed by a
//! library-native name. Their labels and raw categories are deliberately
//! loose; [`RULES`] turns them into the public namespace.

mod address;
mod company;
mod internet;
mod misc;
mod number;
mod payment;
mod person;
mod text;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde_json::Value;

use crate::descriptor::{FakerRng, ParamKind};
use crate::error::GenerateError;
use crate::ingest::{IngestionRules, RawEntry, RawParam};
use crate::params::BoundParams;

/// Ingestion tables for the built-in catalog.
pub const RULES: IngestionRules = IngestionRules {
    skip: &[
        // Mixed-type option lists cannot be expressed as bound text.
        "weighted",
        // Same data as `zip`.
        "postcode",
    ],
    label_prefixes: &[
        ("bookauthor", "Book"),
        ("bookgenre", "Book"),
        ("booktitle", "Book"),
        ("jobdescriptor", "Job"),
        ("jobfield", "Job"),
        ("joblevel", "Job"),
        ("jobtitle", "Job"),
        ("moviegenre", "Movie"),
        ("moviename", "Movie"),
        ("nameprefix", "Name"),
        ("namesuffix", "Name"),
    ],
    name_fixups: &[("creditCardCvv", "creditCardCVV")],
    category_overrides: &[
        ("boolean", "number"),
        ("currencyCode", "finance"),
        ("currencyName", "finance"),
        ("currencySymbol", "finance"),
        ("hexColor", "color"),
        ("rgbColor", "color"),
        ("safeColor", "color"),
        ("uuid", "identifier"),
    ],
    category_renames: &[
        ("auth", "internet"),
        ("book", "entertainment"),
        ("contact", "person"),
        ("job", "company"),
        ("lorem", "word"),
        ("misc", "string"),
        ("movie", "entertainment"),
    ],
};

/// Largest element count a generator will produce for a count parameter.
const MAX_COUNT: i64 = 10_000;

/// Returns every raw entry of the built-in catalog.
#[must_use]
pub fn entries() -> Vec<RawEntry> {
    [
        address::ENTRIES,
        company::ENTRIES,
        internet::ENTRIES,
        misc::ENTRIES,
        number::ENTRIES,
        payment::ENTRIES,
        person::ENTRIES,
        text::ENTRIES,
    ]
    .concat()
}

/// Defines a parameterless generator returning one `fake` string.
macro_rules! fake_text {
    ($name:ident, $faker:expr) => {
        fn $name(
            rng: &mut $crate::descriptor::FakerRng,
            _: Option<&$crate::params::BoundParams>,
        ) -> Result<serde_json::Value, $crate::error::GenerateError> {
            use fake::Fake;
            Ok(serde_json::Value::String($faker.fake_with_rng::<String, _>(rng)))
        }
    };
}
pub(crate) use fake_text;

const fn param(
    name: &'static str,
    kind: ParamKind,
    default: &'static str,
    description: &'static str,
) -> RawParam {
    RawParam {
        name,
        kind,
        default,
        optional: false,
        description,
    }
}

const fn optional(name: &'static str, kind: ParamKind, description: &'static str) -> RawParam {
    RawParam {
        name,
        kind,
        default: "",
        optional: true,
        description,
    }
}

fn pick(rng: &mut FakerRng, items: &[&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

fn pick_text(rng: &mut FakerRng, items: &[&'static str]) -> Value {
    Value::String(pick(rng, items).to_owned())
}

fn int_between(rng: &mut FakerRng, min: i64, max: i64) -> Result<i64, GenerateError> {
    if min > max {
        return Err(GenerateError::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(rng.random_range(min..=max))
}

fn float_between(rng: &mut FakerRng, min: f64, max: f64) -> Result<f64, GenerateError> {
    if min > max {
        return Err(GenerateError::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    if !(max - min).is_finite() {
        return Err(GenerateError::InvalidParameter {
            parameter: "max".to_owned(),
            value: max.to_string(),
            message: format!("range from {min} is wider than a float can hold"),
        });
    }
    Ok(rng.random_range(min..=max))
}

/// Reads a count parameter bounded to `0..=MAX_COUNT`.
fn count(params: &BoundParams, name: &str) -> Result<usize, GenerateError> {
    let value = params.int(name)?;
    if !(0..=MAX_COUNT).contains(&value) {
        return Err(GenerateError::InvalidParameter {
            parameter: name.to_owned(),
            value: value.to_string(),
            message: format!("must be between 0 and {MAX_COUNT}"),
        });
    }
    usize::try_from(value).map_err(|err| GenerateError::InvalidParameter {
        parameter: name.to_owned(),
        value: value.to_string(),
        message: err.to_string(),
    })
}

fn digits(rng: &mut FakerRng, count: usize) -> String {
    (0..count)
        .map(|_| char::from(b'0' + rng.random_range(0..10_u8)))
        .collect()
}

fn letters(rng: &mut FakerRng, count: usize) -> String {
    (0..count)
        .map(|_| char::from(b'a' + rng.random_range(0..26_u8)))
        .collect()
}

/// Rounds to `decimals` places; values too large to scale are returned as is.
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    let scaled = value * scale;
    if scaled.is_finite() {
        scaled.round() / scale
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::SeedableRng;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::error::FakerError;
    use crate::faker::Faker;
    use crate::ingest::derive_key;

    #[test]
    fn native_keys_are_unique() {
        let all = entries();
        let keys: BTreeSet<&str> = all.iter().map(|entry| entry.native).collect();
        assert_eq!(keys.len(), all.len());
    }

    #[test]
    fn every_rule_refers_to_a_catalog_entry() {
        let all = entries();
        let natives: BTreeSet<&str> = all.iter().map(|entry| entry.native).collect();

        for native in RULES.skip {
            assert!(natives.contains(native), "skip entry {native} is stale");
        }
        for (native, _) in RULES.label_prefixes {
            assert!(natives.contains(native), "prefix entry {native} is stale");
        }
    }

    #[test]
    fn every_parameterless_generator_runs() {
        let mut rng = FakerRng::seed_from_u64(17);
        for entry in entries()
            .iter()
            .filter(|entry| entry.params.is_empty())
            .filter(|entry| !RULES.skip.contains(&entry.native))
        {
            let value = (entry.generate)(&mut rng, None);
            assert!(value.is_ok(), "{} failed: {value:?}", entry.native);
        }
    }

    #[test]
    fn labels_derive_non_empty_keys() {
        for entry in entries() {
            assert!(!derive_key(entry.label).is_empty(), "{}", entry.native);
        }
    }

    #[test]
    fn digits_and_letters_have_requested_length() {
        let mut rng = FakerRng::seed_from_u64(3);
        let d = digits(&mut rng, 9);
        let l = letters(&mut rng, 5);
        assert_eq!(d.len(), 9);
        assert!(d.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(l.len(), 5);
        assert!(l.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn count_rejects_out_of_range_values() {
        let mut params = BoundParams::new();
        params.insert("count", vec!["-1".to_owned()]);
        assert!(matches!(
            count(&params, "count"),
            Err(GenerateError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn inverted_ranges_are_rejected() {
        let mut rng = FakerRng::seed_from_u64(3);
        assert!(int_between(&mut rng, 2, 1).is_err());
        assert!(float_between(&mut rng, 2.0, 1.0).is_err());
        assert_eq!(int_between(&mut rng, 4, 4), Ok(4));
    }

    #[rstest]
    #[case::float("float", -1e308, 1e308)]
    #[case::price("price", -1.7e308, 1.7e308)]
    #[case::full_span("float", f64::MIN, f64::MAX)]
    fn unrepresentable_float_spans_fail_cleanly(
        #[case] function: &str,
        #[case] min: f64,
        #[case] max: f64,
    ) {
        let faker = Faker::new(8);
        let result = faker.call(function, &[json!(min), json!(max)]);
        assert!(
            matches!(
                result,
                Err(FakerError::GenerationFailure {
                    source: GenerateError::InvalidParameter { .. },
                    ..
                })
            ),
            "{function} returned {result:?}"
        );
    }

    #[test]
    fn rounding_leaves_unscalable_values_alone() {
        assert_eq!(round_to(f64::MAX, 3).to_bits(), f64::MAX.to_bits());
        assert_eq!(round_to(f64::MIN, 2).to_bits(), f64::MIN.to_bits());
        assert!((round_to(1.23456, 2) - 1.23).abs() < f64::EPSILON);
    }

    #[test]
    fn extreme_but_valid_floats_stay_numeric() {
        let faker = Faker::new(9);
        let value = faker
            .call("float", &[json!(f64::MAX), json!(f64::MAX)])
            .expect("degenerate range");
        assert_eq!(value.as_f64().map(f64::to_bits), Some(f64::MAX.to_bits()));
    }
}
