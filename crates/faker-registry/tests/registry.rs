//! Integration tests for registry construction and the built-in catalog.
//!
//! These tests cover the ingestion tables applied to the built-in catalog and
//! registries built from custom raw catalogs.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::Arc;

use faker_registry::{
    BoundParams, Faker, FakerRng, GenerateError, IngestionRules, OutputKind, ParamKind, RawEntry,
    RawParam, Registry, ZEN_CATEGORY,
};
use rstest::rstest;
use serde_json::Value;

fn constant(_: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    Ok(Value::String("constant".to_owned()))
}

fn echo_first(_: &mut FakerRng, params: Option<&BoundParams>) -> Result<Value, GenerateError> {
    let params = BoundParams::required(params, "value")?;
    Ok(Value::from(params.strings("value")?.to_vec()))
}

const fn entry(native: &'static str, label: &'static str, category: &'static str) -> RawEntry {
    RawEntry {
        native,
        label,
        category,
        description: "",
        example: "",
        output: OutputKind::String,
        params: &[],
        generate: constant,
    }
}

const CUSTOM_RULES: IngestionRules = IngestionRules {
    skip: &["dropped"],
    label_prefixes: &[("jobtitle", "Job")],
    name_fixups: &[("creditCardCvv", "creditCardCVV")],
    category_overrides: &[("hexColor", "color")],
    category_renames: &[("job", "company"), ("misc", "string")],
};

fn custom_entries() -> Vec<RawEntry> {
    vec![
        entry("creditcardcvv", "Credit Card CVV", "payment"),
        entry("jobtitle", "Title", "job"),
        entry("hexcolor", "Hex Color", "misc"),
        entry("letter", "Letter", "misc"),
        entry("dropped", "Dropped", "misc"),
        RawEntry {
            params: &[RawParam {
                name: "value",
                kind: ParamKind::StringArray,
                default: "fallback",
                optional: false,
                description: "Values to echo",
            }],
            generate: echo_first,
            ..entry("echo", "Echo", "misc")
        },
    ]
}

#[test]
fn credit_card_cvv_is_renamed_in_both_indexes() {
    let registry = Registry::global();
    assert!(registry.lookup_by_name("creditCardCvv").is_none());

    let by_name = registry
        .lookup_by_name("creditCardCVV")
        .expect("renamed function");
    let payment = registry.lookup_category("payment").expect("payment");
    let in_category = payment.get("creditCardCVV").expect("listed under payment");

    assert_eq!(by_name.category(), "payment");
    assert!(Arc::ptr_eq(by_name, in_category));
}

#[rstest]
#[case("bookTitle", "entertainment")]
#[case("jobTitle", "company")]
#[case("namePrefix", "person")]
#[case("email", "person")]
#[case("username", "internet")]
#[case("boolean", "number")]
#[case("currencyCode", "finance")]
#[case("hexColor", "color")]
#[case("uuid", "identifier")]
#[case("word", "word")]
#[case("letter", "string")]
fn builtin_functions_land_in_public_categories(#[case] name: &str, #[case] category: &str) {
    let registry = Registry::global();
    let descriptor = registry.lookup_by_name(name).expect("function exists");
    assert_eq!(descriptor.category(), category);
    assert!(
        registry
            .lookup_category(category)
            .is_some_and(|functions| functions.contains_key(name))
    );
}

#[rstest]
#[case("auth")]
#[case("book")]
#[case("contact")]
#[case("job")]
#[case("lorem")]
#[case("misc")]
#[case("movie")]
fn raw_category_names_are_not_public(#[case] raw: &str) {
    assert!(Registry::global().lookup_category(raw).is_none());
}

#[test]
fn custom_catalog_applies_every_table() {
    let registry = Registry::build(&custom_entries(), &CUSTOM_RULES);

    let names: Vec<&str> = registry.functions().keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec!["creditCardCVV", "echo", "hexColor", "jobTitle", "letter"]
    );
    assert_eq!(
        registry.category_names(),
        ["color", "company", "payment", "string", ZEN_CATEGORY]
    );
    assert_eq!(
        registry
            .lookup_category(ZEN_CATEGORY)
            .map(|zen| zen.len()),
        Some(5)
    );
}

#[test]
fn custom_registry_drives_an_instance() {
    let registry = Arc::new(Registry::build(&custom_entries(), &CUSTOM_RULES));
    let faker = Faker::with_registry(registry, 1);

    assert_eq!(
        faker.call("jobTitle", &[]),
        Ok(Value::String("constant".to_owned()))
    );
    assert_eq!(
        faker.call("echo", &[serde_json::json!(["a", "b"])]),
        Ok(serde_json::json!(["a", "b"]))
    );
    assert_eq!(faker.call("echo", &[]), Ok(serde_json::json!(["fallback"])));
    assert!(faker.call("firstName", &[]).is_err());
}

#[test]
fn every_builtin_parameterless_function_generates() {
    let faker = Faker::new(404);
    let registry = Registry::global();
    for (name, descriptor) in registry.functions() {
        if descriptor.params().is_empty() {
            let value = faker.call(name, &[]);
            assert!(value.is_ok(), "{name} failed: {value:?}");
        }
    }
}

#[test]
fn every_defaulted_function_generates_without_arguments() {
    let faker = Faker::new(405);
    let registry = Registry::global();
    for (name, descriptor) in registry.functions() {
        if descriptor.params().iter().all(|param| !param.is_mandatory()) {
            let value = faker.call(name, &[]);
            assert!(value.is_ok(), "{name} failed: {value:?}");
        }
    }
}
